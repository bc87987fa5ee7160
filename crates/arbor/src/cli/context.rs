//! Shared context for running CLI commands.

use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
    process::ExitCode,
};

use arbor_config::{Config, GuideStyle};
use arbor_highlight::{Theme, TreeGuides};
use arbor_tree::Tree;
use arbor_view::Browser;

use crate::cli::{args::GlobalArgs, output::ViewStyle};

/// Environment variable that disables color when set to a non-empty value.
const NO_COLOR_ENV: &str = "NO_COLOR";

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
    /// Whether `--no-color` was passed.
    no_color: bool,
}

impl CommandContext {
    /// Loads the current directory and configuration, applying `--dataset`.
    pub fn load(args: &GlobalArgs) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let mut config = load_config_or_failure(&cwd)?;
        if let Some(path) = &args.dataset
            && let Err(e) = config.override_dataset(path, &cwd)
        {
            eprintln!("error: {e}");
            return Err(ExitCode::FAILURE);
        }
        Ok(Self {
            cwd,
            config,
            no_color: args.no_color,
        })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only(args: &GlobalArgs) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
            no_color: args.no_color,
        })
    }

    /// Returns true if dataset output should carry ANSI styling.
    pub fn color(&self) -> bool {
        color_enabled(
            self.config.display.color,
            self.no_color,
            env::var_os(NO_COLOR_ENV),
        )
    }

    /// Returns the theme for dataset output.
    pub fn theme(&self) -> Theme {
        Theme::new(self.color())
    }

    /// Returns the rendering style for tree and detail output.
    pub fn view_style(&self) -> ViewStyle {
        ViewStyle {
            theme: self.theme(),
            guides: match self.config.display.guides {
                GuideStyle::Unicode => TreeGuides::Unicode,
                GuideStyle::Ascii => TreeGuides::Ascii,
            },
            summaries: self.config.display.summaries,
        }
    }

    /// Loads the configured dataset, exiting with an error if there is none.
    pub fn load_tree(&self) -> Result<Tree, ExitCode> {
        let Some(dataset) = &self.config.dataset else {
            eprintln!("error: no dataset configured");
            eprintln!("Pass --dataset <PATH>, or run 'arbor init' and set [dataset] path.");
            return Err(ExitCode::FAILURE);
        };

        let tree = Tree::load(&dataset.path).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })?;

        Ok(match &self.config.display.root_label {
            Some(label) => tree.with_label(label.as_str()),
            None => tree,
        })
    }

    /// Loads the dataset into a fresh browser.
    pub fn browser(&self) -> Result<Browser, ExitCode> {
        self.load_tree().map(Browser::new)
    }
}

/// Combines the configured color setting with `--no-color` and `NO_COLOR`.
fn color_enabled(configured: bool, no_color_flag: bool, no_color_env: Option<OsString>) -> bool {
    configured && !no_color_flag && no_color_env.is_none_or(|value| value.is_empty())
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_follows_config() {
        assert!(color_enabled(true, false, None));
        assert!(!color_enabled(false, false, None));
    }

    #[test]
    fn no_color_flag_wins() {
        assert!(!color_enabled(true, true, None));
    }

    #[test]
    fn no_color_env_must_be_non_empty() {
        assert!(!color_enabled(true, false, Some("1".into())));
        assert!(color_enabled(true, false, Some(OsString::new())));
    }
}
