//! Implementation of `arbor config`.

use std::process::ExitCode;

use crate::cli::context::CommandContext;

/// Shows effective configuration settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    print!("{}", ctx.theme().toml(&ctx.config.settings_to_toml()));
    ExitCode::SUCCESS
}
