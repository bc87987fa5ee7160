//! Configuration file parsing.
//!
//! Parses individual `.arbor.toml` files into `RawConfig` structures whose fields are all
//! optional, so that partial files can be merged.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{ConfigError, GuideStyle};

/// Raw configuration as parsed directly from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// When true, stop discovery here and ignore parent and global configs.
    pub root: Option<bool>,
    /// Dataset section.
    pub dataset: Option<RawDatasetSettings>,
    /// Display section.
    pub display: Option<RawDisplaySettings>,
    /// Logging section.
    pub log: Option<RawLogSettings>,
}

/// Raw `[dataset]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawDatasetSettings {
    /// Path to the dataset file, relative to the config file's directory.
    pub path: Option<String>,
}

/// Raw `[display]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawDisplaySettings {
    /// Label for an unnamed root.
    pub root_label: Option<String>,
    /// ANSI styling.
    pub color: Option<bool>,
    /// Summaries in tree views.
    pub summaries: Option<bool>,
    /// Tree guide glyphs.
    pub guides: Option<GuideStyle>,
}

/// Raw `[log]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawLogSettings {
    /// Default `tracing` filter directive.
    pub level: Option<String>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    parse_config_file(path).is_ok_and(|config| config.root == Some(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config_str("", Path::new("test.toml")).unwrap();
        assert!(config.root.is_none());
        assert!(config.dataset.is_none());
        assert!(config.display.is_none());
        assert!(config.log.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
root = true

[dataset]
path = "./tree.json"

[display]
root_label = "linux"
color = false
summaries = false
guides = "ascii"

[log]
level = "debug"
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        assert_eq!(config.root, Some(true));
        assert_eq!(config.dataset.unwrap().path.as_deref(), Some("./tree.json"));
        let display = config.display.unwrap();
        assert_eq!(display.root_label.as_deref(), Some("linux"));
        assert_eq!(display.color, Some(false));
        assert_eq!(display.summaries, Some(false));
        assert_eq!(display.guides, Some(GuideStyle::Ascii));
        assert_eq!(config.log.unwrap().level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_parse_partial_display() {
        let config =
            parse_config_str("[display]\ncolor = false\n", Path::new("test.toml")).unwrap();
        let display = config.display.unwrap();
        assert_eq!(display.color, Some(false));
        assert!(display.guides.is_none());
    }

    #[test]
    fn test_parse_unknown_guide_style_error() {
        let result = parse_config_str("[display]\nguides = \"fancy\"\n", Path::new("x.toml"));
        assert!(matches!(result, Err(ConfigError::ParseToml { .. })));
    }

    #[test]
    fn test_parse_unknown_key_error() {
        let result = parse_config_str("[display]\ncolour = true\n", Path::new("x.toml"));
        assert!(matches!(result, Err(ConfigError::ParseToml { .. })));
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse_config_str("[dataset\n", Path::new("broken.toml")).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_is_root_config() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("root.toml");
        fs::write(&root, "root = true\n").unwrap();
        let plain = dir.path().join("plain.toml");
        fs::write(&plain, "[log]\nlevel = \"info\"\n").unwrap();
        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "root = \n").unwrap();

        assert!(is_root_config(&root));
        assert!(!is_root_config(&plain));
        assert!(!is_root_config(&broken));
        assert!(!is_root_config(&dir.path().join("missing.toml")));
    }
}
