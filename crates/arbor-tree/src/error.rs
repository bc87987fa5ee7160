//! Error types for dataset loading.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::NodeId;

/// Errors that can occur when loading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Failed to read the dataset file.
    #[error("failed to read dataset {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The dataset is not valid JSON for the node schema.
    #[error("failed to parse dataset {path}: {source}")]
    Json {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The dataset is not valid YAML for the node schema.
    #[error("failed to parse dataset {path}: {source}")]
    Yaml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },

    /// The file extension does not name a supported format.
    #[error("unsupported dataset format: {path} (expected .json, .yaml or .yml)")]
    UnsupportedFormat {
        /// Path to the unsupported file.
        path: PathBuf,
    },

    /// A non-root node has a blank name.
    #[error("node {id} has an empty name")]
    EmptyName {
        /// Identifier of the offending node.
        id: NodeId,
    },
}
