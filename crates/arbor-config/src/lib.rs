//! Configuration system for arbor.
//!
//! arbor uses TOML configuration files named `.arbor.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.arbor.toml` files found, then loading `~/.arbor.toml` as the global config with lowest
//! precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod paths;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawDatasetSettings, RawDisplaySettings, RawLogSettings, parse_config_file,
    parse_config_str,
};
pub use paths::{format_path_for_display, resolve_dataset_path};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Log filter used when neither the environment nor a config file sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Top-level merged configuration for arbor.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.arbor.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// The dataset to browse, if one is configured.
    pub dataset: Option<DatasetSource>,
    /// Display settings.
    pub display: DisplaySettings,
    /// Logging settings.
    pub log: LogSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.arbor.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Replaces the configured dataset, e.g. with a `--dataset` argument.
    ///
    /// Relative paths are resolved against `cwd`.
    pub fn override_dataset(&mut self, path: &str, cwd: &Path) -> Result<(), ConfigError> {
        self.dataset = Some(DatasetSource {
            path: resolve_dataset_path(path, cwd)?,
            is_global: false,
        });
        Ok(())
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output has the same layout as a `.arbor.toml` file.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableSettings {
            dataset: self.dataset.as_ref().map(|d| SerializableDataset {
                path: d.path.display().to_string(),
            }),
            display: self.display.clone(),
            log: self.log.clone(),
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// A resolved dataset location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSource {
    /// Absolute path to the dataset file.
    pub path: PathBuf,
    /// Whether the path came from the global `~/.arbor.toml`.
    pub is_global: bool,
}

/// Glyphs used to draw tree guides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideStyle {
    /// Box-drawing characters.
    #[default]
    Unicode,
    /// Plain ASCII.
    Ascii,
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Label shown in place of an empty root name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_label: Option<String>,
    /// Whether output is styled with ANSI colors.
    pub color: bool,
    /// Whether tree views show summaries next to names.
    pub summaries: bool,
    /// Tree guide glyphs.
    pub guides: GuideStyle,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            root_label: None,
            color: true,
            summaries: true,
            guides: GuideStyle::Unicode,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default `tracing` filter directive.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings {
    /// Dataset section, omitted when no dataset is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    dataset: Option<SerializableDataset>,
    /// Display settings.
    display: DisplaySettings,
    /// Logging settings.
    log: LogSettings,
}

/// Dataset section with the resolved path.
#[derive(Serialize)]
struct SerializableDataset {
    /// Resolved dataset path.
    path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_defaults() {
        let display = DisplaySettings::default();
        assert!(display.root_label.is_none());
        assert!(display.color);
        assert!(display.summaries);
        assert_eq!(display.guides, GuideStyle::Unicode);
    }

    #[test]
    fn test_log_defaults() {
        assert_eq!(LogSettings::default().level, "warn");
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.dataset.is_none());
        assert!(config.config_root.is_none());
    }

    #[test]
    fn test_override_dataset_resolves_against_cwd() {
        let mut config = Config::default();
        config
            .override_dataset("data/tree.json", Path::new("/work"))
            .unwrap();
        let dataset = config.dataset.unwrap();
        assert_eq!(dataset.path, PathBuf::from("/work/data/tree.json"));
        assert!(!dataset.is_global);
    }

    #[test]
    fn test_settings_to_toml() {
        let config = Config::default();
        let toml = config.settings_to_toml();

        assert!(toml.contains("[display]"));
        assert!(toml.contains("[log]"));
        assert!(!toml.contains("[dataset]"));
        assert!(toml.contains("guides = \"unicode\""));
        assert!(toml.contains("level = \"warn\""));

        let parsed: toml::Value =
            toml::from_str(&toml).expect("settings_to_toml should produce valid TOML");
        assert!(parsed.get("display").is_some());
    }

    #[test]
    fn test_settings_to_toml_with_dataset() {
        let config = Config {
            dataset: Some(DatasetSource {
                path: PathBuf::from("/data/tree.yaml"),
                is_global: false,
            }),
            ..Config::default()
        };
        let toml = config.settings_to_toml();
        assert!(toml.contains("[dataset]"));
        assert!(toml.contains("path = \"/data/tree.yaml\""));
    }
}
