//! Locating `.arbor.toml` files.
//!
//! Local configs are collected from the starting directory upward. The walk ends at the
//! filesystem root or at the first config declaring `root = true`. Unless a root config
//! ended the walk, `~/.arbor.toml` is appended with the lowest precedence.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".arbor.toml";

/// Returns every config file that applies to `cwd`, highest precedence first.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();

    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if !candidate.is_file() {
            continue;
        }
        let stops = is_root_config(&candidate);
        found.push(candidate);
        if stops {
            return found;
        }
    }

    if let Some(global) = global_config_path()
        && global.is_file()
        && !found.contains(&global)
    {
        found.push(global);
    }
    found
}

/// Path of the global config in the user's home directory, if one can be determined.
pub fn global_config_path() -> Option<PathBuf> {
    let dirs = BaseDirs::new()?;
    Some(dirs.home_dir().join(CONFIG_FILENAME))
}

/// Returns true if `path` is the global config.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| global == path)
}
