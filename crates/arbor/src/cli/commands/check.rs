//! Implementation of `arbor check`.

use std::process::ExitCode;

use arbor_config::{ConfigWarning, discover_config_files, format_path_for_display};
use arbor_tree::Tree;
use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};

use crate::cli::context::CommandContext;

/// Validates configuration and the dataset it points to.
///
/// Exits with failure when there are warnings or the dataset cannot be loaded.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let cwd = &ctx.cwd;
    let config = &ctx.config;
    let theme = ctx.theme();

    let config_files = discover_config_files(cwd);
    if config_files.is_empty() && config.dataset.is_none() {
        println!("{}", theme.dim("No configuration files found."));
        println!();
        println!(
            "Run {} to create a configuration file.",
            theme.subheader("arbor init")
        );
        return ExitCode::SUCCESS;
    }

    println!("{}", theme.subheader("Config files:"));
    if config_files.is_empty() {
        println!("   {}", theme.dim("(none)"));
    }
    for path in &config_files {
        println!("   {}", format_path_for_display(path, Some(cwd)));
    }
    println!();

    println!("{}", theme.subheader("Dataset:"));
    let mut load_error = None;
    match &config.dataset {
        None => println!("   {}", theme.dim("(none configured)")),
        Some(dataset) => {
            let scope = if dataset.is_global { "global" } else { "local" };
            let display_path = format_path_for_display(&dataset.path, Some(cwd));
            if dataset.path.is_file() {
                println!("   {display_path} {}", theme.dim(&format!("({scope})")));
                match Tree::load(&dataset.path) {
                    Ok(tree) => println!("{}", stats_table(&tree)),
                    Err(e) => load_error = Some(e),
                }
            } else {
                println!(
                    "   {display_path} {} {}",
                    theme.dim(&format!("({scope})")),
                    theme.warning("[missing]")
                );
            }
        }
    }
    println!();

    let warnings = config.validate();

    if let Some(e) = &load_error {
        eprintln!("error: {e}");
    }

    if warnings.is_empty() {
        if load_error.is_some() {
            return ExitCode::FAILURE;
        }
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!(
        "{}",
        theme.warning(&format!("Warnings ({}):", warnings.len()))
    );
    for warning in &warnings {
        println!("   - {warning}");
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Summarizes the shape of a loaded tree.
fn stats_table(tree: &Tree) -> Table {
    let stats = TreeStats::collect(tree);
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Nodes", "Directories", "Leaves", "Depth"]);
    table.add_row(vec![
        stats.nodes.to_string(),
        stats.directories.to_string(),
        stats.leaves.to_string(),
        stats.depth.to_string(),
    ]);
    table
}

/// Node counts of a tree.
#[derive(Debug, PartialEq, Eq)]
struct TreeStats {
    /// Every node, root included.
    nodes: usize,
    /// Nodes with children.
    directories: usize,
    /// Nodes without children.
    leaves: usize,
    /// Edges on the longest root-to-leaf path.
    depth: usize,
}

impl TreeStats {
    /// Counts the nodes of `tree`.
    fn collect(tree: &Tree) -> Self {
        let mut stats = Self {
            nodes: 0,
            directories: 0,
            leaves: 0,
            depth: 0,
        };
        for node in tree.iter_preorder() {
            stats.nodes += 1;
            if node.is_directory() {
                stats.directories += 1;
            } else {
                stats.leaves += 1;
            }
            stats.depth = stats.depth.max(node.id.depth());
        }
        stats
    }
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    let mut hints: Vec<&str> = warnings
        .iter()
        .map(|warning| match warning {
            ConfigWarning::NoDatasetConfigured => {
                "Set [dataset] path in .arbor.toml, or pass --dataset <PATH>."
            }
            ConfigWarning::DatasetMissing { .. } => {
                "Create the dataset file or update the dataset path."
            }
            ConfigWarning::DatasetNotFile { .. } => {
                "The dataset path must point to a file, not a directory."
            }
            ConfigWarning::UnsupportedDatasetFormat { .. } => {
                "Datasets must be JSON (.json) or YAML (.yaml, .yml)."
            }
        })
        .collect();

    hints.sort_unstable();
    hints.dedup();

    if !hints.is_empty() {
        println!("Hints:");
        for hint in hints {
            println!("   - {hint}");
        }
    }
}
