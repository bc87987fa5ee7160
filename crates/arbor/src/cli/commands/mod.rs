//! Command implementations and dispatch.

pub mod browse;
pub mod check;
pub mod config;
pub mod init;
pub mod search;
mod shared;
pub mod show;
pub mod tree;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Tree(cmd) => tree::run(ctx, &cmd),
        Commands::Show(cmd) => show::run(ctx, &cmd),
        Commands::Search(cmd) => search::run(ctx, &cmd),
        Commands::Browse => browse::run(ctx),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
        Commands::Check => check::run(ctx),
    }
}
