//! Implementation of `arbor tree`.

use std::process::ExitCode;

use crate::cli::{args::TreeCommand, context::CommandContext, output::render_tree};

/// Prints the dataset tree, optionally filtered by a search term.
pub fn run(ctx: &CommandContext, cmd: &TreeCommand) -> ExitCode {
    let mut browser = match ctx.browser() {
        Ok(browser) => browser,
        Err(code) => return code,
    };

    if let Some(term) = &cmd.search {
        browser.set_search_term(term);
    }
    if cmd.expand_all {
        browser.expand_all();
    }

    let mut style = ctx.view_style();
    if cmd.no_summary {
        style.summaries = false;
    }

    println!("{}", render_tree(&browser, &style));
    ExitCode::SUCCESS
}
