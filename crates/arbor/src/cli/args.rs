//! Clap argument definitions for the `arbor` CLI.

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "arbor")]
#[command(about = "Browse and search hierarchical datasets")]
#[command(version)]
pub struct Cli {
    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Options accepted before or after any subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Dataset file to load (.json, .yaml or .yml), overriding [dataset] path
    #[arg(long, global = true, value_name = "PATH")]
    pub dataset: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Arguments for `arbor tree`.
#[derive(Args, Debug, Clone, Default)]
pub struct TreeCommand {
    /// Show only nodes matching TERM, and their ancestors
    #[arg(short = 's', long, value_name = "TERM")]
    pub search: Option<String>,

    /// Expand every directory
    #[arg(long)]
    pub expand_all: bool,

    /// Hide summaries next to node names
    #[arg(long)]
    pub no_summary: bool,
}

/// Arguments for `arbor show`.
#[derive(Args, Debug, Clone)]
pub struct ShowCommand {
    /// Node id (0.1.0) or name path below the root (kernel/sched.c)
    pub node: String,

    /// Highlight occurrences of TERM
    #[arg(short = 's', long, value_name = "TERM")]
    pub search: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `arbor search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Text to look for in names, summaries and descriptions
    pub term: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `arbor init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.arbor.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `arbor` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Print the dataset tree
    Tree(TreeCommand),

    /// Show the details of one node
    Show(ShowCommand),

    /// List every node matching a term
    Search(SearchCommand),

    /// Browse the dataset interactively
    #[command(after_help = "\
SESSION COMMANDS:
  search <term>   Filter the tree (expands every match)
  clear           Clear the search term
  select <node>   Select a node and show its breadcrumb
  toggle <node>   Expand or collapse a directory
  open <node>     Select a node, toggling it if it is a directory
  collapse        Collapse every directory
  expand          Expand every directory
  show            Show the selected node
  tree            Print the tree
  help            List session commands
  quit            End the session

<node> is a node id (0.1.0) or a name path (kernel/sched.c).")]
    Browse,

    /// Initialize arbor configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,

    /// Validate configuration and dataset
    Check,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_options_follow_subcommand() {
        let cli = Cli::try_parse_from(["arbor", "tree", "--dataset", "t.json", "--no-color"])
            .unwrap();
        assert_eq!(cli.global.dataset.as_deref(), Some("t.json"));
        assert!(cli.global.no_color);
        assert!(matches!(cli.command, Commands::Tree(_)));
    }

    #[test]
    fn tree_search_short_flag() {
        let cli = Cli::try_parse_from(["arbor", "tree", "-s", "sched", "--expand-all"]).unwrap();
        let Commands::Tree(cmd) = cli.command else {
            panic!("expected tree command");
        };
        assert_eq!(cmd.search.as_deref(), Some("sched"));
        assert!(cmd.expand_all);
        assert!(!cmd.no_summary);
    }

    #[test]
    fn show_requires_node() {
        assert!(Cli::try_parse_from(["arbor", "show"]).is_err());
    }
}
