//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`, applying precedence
//! rules and resolving the dataset path.

use std::path::{Path, PathBuf};

use crate::{
    Config, ConfigError, DatasetSource, DisplaySettings, LogSettings,
    discovery::is_global_config,
    parse::{RawConfig, RawDisplaySettings, RawLogSettings},
    paths::resolve_dataset_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory containing the config file.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to
/// CWD), lowest precedence last (global config). For every setting the first defined
/// value wins.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    Ok(Config {
        dataset: merge_dataset(configs)?,
        display: merge_display(configs),
        log: merge_log(configs),
        config_root: configs.first().map(|c| c.dir().to_path_buf()),
    })
}

/// Picks the first configured dataset path and resolves it against its config file.
fn merge_dataset(configs: &[ParsedConfig]) -> Result<Option<DatasetSource>, ConfigError> {
    let Some((parsed, raw_path)) = configs.iter().find_map(|parsed| {
        let path = parsed.config.dataset.as_ref()?.path.as_ref()?;
        Some((parsed, path))
    }) else {
        return Ok(None);
    };

    if raw_path.trim().is_empty() {
        return Err(ConfigError::EmptyDatasetPath {
            path: parsed.path.clone(),
        });
    }

    Ok(Some(DatasetSource {
        path: resolve_dataset_path(raw_path, parsed.dir())?,
        is_global: is_global_config(&parsed.path),
    }))
}

/// Merges display settings, taking the first defined value for each field.
fn merge_display(configs: &[ParsedConfig]) -> DisplaySettings {
    let mut result = DisplaySettings::default();

    // Lowest precedence first so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref display) = parsed.config.display {
            apply_raw_display(&mut result, display);
        }
    }

    result
}

/// Applies raw display settings to result, overwriting any present values.
fn apply_raw_display(result: &mut DisplaySettings, raw: &RawDisplaySettings) {
    if let Some(ref v) = raw.root_label {
        result.root_label = Some(v.clone());
    }
    if let Some(v) = raw.color {
        result.color = v;
    }
    if let Some(v) = raw.summaries {
        result.summaries = v;
    }
    if let Some(v) = raw.guides {
        result.guides = v;
    }
}

/// Merges logging settings.
fn merge_log(configs: &[ParsedConfig]) -> LogSettings {
    let mut result = LogSettings::default();

    for parsed in configs.iter().rev() {
        if let Some(RawLogSettings { level: Some(level) }) = &parsed.config.log {
            result.level = level.clone();
        }
    }

    result
}
