//! Path handling for dataset locations.
//!
//! Dataset paths in config files may be relative to the config file or start with `~`.
//! They are resolved to absolute paths without touching the filesystem; a missing
//! dataset is reported by validation rather than by loading.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a dataset path to an absolute path.
///
/// - Tilde paths (`~/data/tree.json`) are expanded to the home directory
/// - Relative paths are joined onto `base_dir`
/// - Absolute paths are returned unchanged
pub fn resolve_dataset_path(path: &str, base_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;
    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(base_dir.join(expanded))
    }
}

/// Formats a path for display: relative to `base` when it lies below it, otherwise with
/// the home directory shortened to `~`.
pub fn format_path_for_display(path: &Path, base: Option<&Path>) -> String {
    if let Some(base) = base
        && path.starts_with(base)
        && let Some(relative) = pathdiff::diff_paths(path, base)
    {
        if relative.as_os_str().is_empty() {
            return ".".to_string();
        }
        return relative.display().to_string();
    }

    if let Ok(home) = home_dir()
        && let Ok(rest) = path.strip_prefix(&home)
    {
        return Path::new("~").join(rest).display().to_string();
    }

    path.display().to_string()
}

/// Expands a tilde prefix to the home directory.
///
/// - `~` alone becomes the home directory
/// - `~/foo` becomes home directory joined with `foo`
/// - Paths not starting with `~` are returned unchanged
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        return Ok(home_dir()?.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}
