//! Filesystem fixtures for arbor-config unit tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::CONFIG_FILENAME;

/// A scratch directory tree, removed on drop.
pub struct Sandbox {
    /// Backing temporary directory.
    root: TempDir,
}

impl Sandbox {
    /// Creates an empty sandbox.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// Returns the sandbox root.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates `rel` and any missing parents.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.path().join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Writes a one-node JSON dataset at `rel`.
    pub fn dataset(&self, rel: &str) -> PathBuf {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, r#"{"name": "root"}"#).unwrap();
        path
    }

    /// Writes a `.arbor.toml` inside directory `rel` (`""` for the sandbox root).
    pub fn config(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir(rel).join(CONFIG_FILENAME);
        fs::write(&path, content).unwrap();
        path
    }
}
