//! Implementation of `arbor search`.

use std::process::ExitCode;

use arbor_match::Needle;
use arbor_tree::Node;

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{JsonSearchOutput, no_results, print_json, render_match},
};

/// Lists every node whose own text contains the term.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    let Some(needle) = Needle::new(&cmd.term) else {
        eprintln!("error: search term is empty");
        return ExitCode::FAILURE;
    };

    let tree = match ctx.load_tree() {
        Ok(tree) => tree,
        Err(code) => return code,
    };

    let matches: Vec<&Node> = tree
        .iter_preorder()
        .filter(|node| node.self_matches(&needle))
        .collect();

    if cmd.json {
        return print_json(&JsonSearchOutput::new(&tree, &needle, &matches));
    }

    if matches.is_empty() {
        println!("{}", no_results(needle.as_str()));
        return ExitCode::SUCCESS;
    }

    let theme = ctx.theme();
    for node in &matches {
        println!("{}", render_match(&tree, node, &needle, &theme));
        println!();
    }

    let noun = if matches.len() == 1 { "match" } else { "matches" };
    println!("{}", theme.dim(&format!("{} {noun}", matches.len())));
    ExitCode::SUCCESS
}
