//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use arbor_tree::DatasetFormat;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No dataset path is configured.
    NoDatasetConfigured,
    /// The dataset path does not exist.
    DatasetMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// The dataset path exists but is not a regular file.
    DatasetNotFile {
        /// Path that is not a file.
        path: String,
    },
    /// The dataset extension is not one arbor can read.
    UnsupportedDatasetFormat {
        /// Path with the unknown extension.
        path: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDatasetConfigured => write!(f, "no dataset is configured"),
            Self::DatasetMissing { path } => write!(f, "dataset does not exist: {path}"),
            Self::DatasetNotFile { path } => write!(f, "dataset is not a file: {path}"),
            Self::UnsupportedDatasetFormat { path } => {
                write!(f, "dataset is not .json, .yaml or .yml: {path}")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let Some(dataset) = &config.dataset else {
        return vec![ConfigWarning::NoDatasetConfigured];
    };

    let path = &dataset.path;
    let shown = path.display().to_string();
    let mut warnings = Vec::new();

    if DatasetFormat::from_path(path).is_none() {
        warnings.push(ConfigWarning::UnsupportedDatasetFormat {
            path: shown.clone(),
        });
    }

    if !path.exists() {
        warnings.push(ConfigWarning::DatasetMissing { path: shown });
    } else if !path.is_file() {
        warnings.push(ConfigWarning::DatasetNotFile { path: shown });
    }

    warnings
}
