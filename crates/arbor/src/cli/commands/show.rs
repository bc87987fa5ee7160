//! Implementation of `arbor show`.

use std::process::ExitCode;

use arbor_match::Needle;

use super::shared::{report_unknown_node, resolve_node};
use crate::cli::{
    args::ShowCommand,
    context::CommandContext,
    output::{JsonDetail, print_json, render_detail},
};

/// Shows the detail pane for one node.
pub fn run(ctx: &CommandContext, cmd: &ShowCommand) -> ExitCode {
    let tree = match ctx.load_tree() {
        Ok(tree) => tree,
        Err(code) => return code,
    };

    let Some(node) = resolve_node(&tree, &cmd.node) else {
        report_unknown_node(&cmd.node);
        return ExitCode::FAILURE;
    };

    let needle = cmd.search.as_deref().and_then(Needle::new);

    if cmd.json {
        return print_json(&JsonDetail::new(&tree, node, needle.as_ref()));
    }

    println!(
        "{}",
        render_detail(&tree, node, needle.as_ref(), &ctx.view_style())
    );
    ExitCode::SUCCESS
}
