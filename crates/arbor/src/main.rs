//! Command-line interface for the `arbor` dataset browser.

use std::process::ExitCode;

use arbor::{
    cli::{
        self, CommandContext,
        args::{Cli, Commands},
    },
    logging,
};
use clap::Parser;

fn main() -> ExitCode {
    let args = Cli::parse();

    let ctx = match &args.command {
        Commands::Init(_) => CommandContext::load_cwd_only(&args.global),
        _ => CommandContext::load(&args.global),
    };
    let ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    logging::init_logging(&ctx.config.log.level);

    cli::commands::run(args.command, &ctx)
}
