//! Implementation of `arbor init`.

use std::{fs, path::PathBuf, process::ExitCode};

use arbor_config::{CONFIG_FILENAME, global_config_path, global_template, local_template};
use arbor_highlight::indent_content;

use crate::cli::{args::InitCommand, context::CommandContext};

/// Where `init` writes, and which template it uses.
struct Target {
    /// File to create.
    path: PathBuf,
    /// True for `~/.arbor.toml`.
    global: bool,
}

/// Picks the file to write. Running in the home directory always means the global config.
fn target(ctx: &CommandContext, cmd: &InitCommand) -> Option<Target> {
    let global = global_config_path();
    let in_home = global
        .as_deref()
        .and_then(|path| path.parent())
        .is_some_and(|home| home == ctx.cwd.as_path());

    if cmd.global || in_home {
        global.map(|path| Target { path, global: true })
    } else {
        Some(Target {
            path: ctx.cwd.join(CONFIG_FILENAME),
            global: false,
        })
    }
}

/// Writes a commented-out starter `.arbor.toml`.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let Some(target) = target(ctx, cmd) else {
        eprintln!("error: could not determine home directory");
        return ExitCode::FAILURE;
    };
    let path = &target.path;

    if path.exists() && !cmd.force {
        eprintln!("error: configuration file already exists: {}", path.display());
        eprintln!("use --force to overwrite");
        return ExitCode::FAILURE;
    }

    let contents = if target.global {
        global_template()
    } else {
        local_template()
    };
    if let Err(e) = fs::write(path, &contents) {
        eprintln!("error: failed to write {}: {e}", path.display());
        return ExitCode::FAILURE;
    }

    let theme = ctx.theme();
    println!("Created {}", path.display());
    println!();
    println!("{}", theme.subheader("Configuration written:"));
    println!("{}", indent_content(&theme.toml(&contents)));
    ExitCode::SUCCESS
}
