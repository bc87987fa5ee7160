//! Implementation of `arbor browse`.
//!
//! A line-oriented session over a [`Browser`]: each input line is one event, and the
//! view is printed again after every event that changes it.

use std::{
    io::{self, BufRead, IsTerminal, Write},
    process::ExitCode,
};

use arbor_tree::NodeId;
use arbor_view::Browser;
use tracing::trace;

use super::shared::resolve_reference;
use crate::cli::{
    context::CommandContext,
    output::{ViewStyle, render_breadcrumb, render_detail, render_tree},
};

/// Prompt shown before each command when stdin is a terminal.
const PROMPT: &str = "arbor> ";

/// Text printed by `help`.
const HELP: &str = "\
search <term>   filter the tree (expands every match)
clear           clear the search term
select <node>   select a node and show its breadcrumb
toggle <node>   expand or collapse a directory
open <node>     select a node, toggling it if it is a directory
collapse        collapse every directory and clear search and selection
expand          expand every directory
show            show the selected node
tree            print the tree
help            list commands
quit            end the session";

/// One parsed session command.
#[derive(Debug, PartialEq, Eq)]
enum SessionCommand<'a> {
    /// Apply a search term.
    Search(&'a str),
    /// Clear the search term.
    Clear,
    /// Select a node.
    Select(&'a str),
    /// Toggle a directory.
    Toggle(&'a str),
    /// Select and toggle.
    Open(&'a str),
    /// Reset to the initial view.
    Collapse,
    /// Expand every directory.
    Expand,
    /// Print the detail pane.
    Show,
    /// Print the tree.
    Tree,
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
fn parse_command(line: &str) -> Result<Option<SessionCommand<'_>>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, arg) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(verb, arg)| (verb, arg.trim()));

    let node = || {
        if arg.is_empty() {
            Err(format!("usage: {verb} <node>"))
        } else {
            Ok(arg)
        }
    };

    match verb {
        "search" => Ok(Some(SessionCommand::Search(arg))),
        "clear" => Ok(Some(SessionCommand::Clear)),
        "select" => node().map(|arg| Some(SessionCommand::Select(arg))),
        "toggle" => node().map(|arg| Some(SessionCommand::Toggle(arg))),
        "open" => node().map(|arg| Some(SessionCommand::Open(arg))),
        "collapse" => Ok(Some(SessionCommand::Collapse)),
        "expand" => Ok(Some(SessionCommand::Expand)),
        "show" => Ok(Some(SessionCommand::Show)),
        "tree" => Ok(Some(SessionCommand::Tree)),
        "help" | "?" => Ok(Some(SessionCommand::Help)),
        "quit" | "exit" | "q" => Ok(Some(SessionCommand::Quit)),
        _ => Err(format!("unknown command '{verb}' (type 'help')")),
    }
}

/// A browsing session bound to one output style.
struct Session {
    /// Browsing state.
    browser: Browser,
    /// How views are rendered.
    style: ViewStyle,
    /// Whether to print a prompt before reading each line.
    prompt: bool,
}

impl Session {
    /// Prints the initial view, then handles input lines until `quit` or end of input.
    fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        self.print_view(out)?;
        self.print_prompt(out)?;

        for line in input.lines() {
            match parse_command(&line?) {
                Ok(Some(SessionCommand::Quit)) => return Ok(()),
                Ok(Some(command)) => {
                    trace!(?command, "session command");
                    self.apply(command, out)?;
                }
                Ok(None) => {}
                Err(message) => writeln!(out, "{message}")?,
            }
            self.print_prompt(out)?;
        }

        Ok(())
    }

    /// Applies one command and prints its result.
    fn apply<W: Write>(&mut self, command: SessionCommand<'_>, out: &mut W) -> io::Result<()> {
        match command {
            SessionCommand::Search(term) => {
                self.browser.set_search_term(term);
                self.print_view(out)
            }
            SessionCommand::Clear => {
                self.browser.set_search_term("");
                self.print_view(out)
            }
            SessionCommand::Select(reference) => {
                let Some(id) = self.lookup(reference, out)? else {
                    return Ok(());
                };
                self.browser.select_node(&id);
                if self.browser.selection().is_none() {
                    writeln!(out, "no node with id {id}")?;
                }
                self.print_view(out)
            }
            SessionCommand::Toggle(reference) => {
                let Some(id) = self.lookup(reference, out)? else {
                    return Ok(());
                };
                if self.browser.toggle_expand(&id).is_none() {
                    return writeln!(out, "'{reference}' is not a directory in this view");
                }
                self.print_view(out)
            }
            SessionCommand::Open(reference) => {
                let Some(id) = self.lookup(reference, out)? else {
                    return Ok(());
                };
                self.browser.activate(&id);
                self.print_view(out)
            }
            SessionCommand::Collapse => {
                self.browser.collapse_all();
                self.print_view(out)
            }
            SessionCommand::Expand => {
                self.browser.expand_all();
                self.print_view(out)
            }
            SessionCommand::Show => match self.browser.selected_node() {
                Some(node) => writeln!(
                    out,
                    "{}",
                    render_detail(
                        self.browser.tree(),
                        node,
                        self.browser.needle(),
                        &self.style
                    )
                ),
                None => writeln!(out, "nothing selected"),
            },
            SessionCommand::Tree => self.print_view(out),
            SessionCommand::Help => writeln!(out, "{HELP}"),
            SessionCommand::Quit => Ok(()),
        }
    }

    /// Resolves a node reference, reporting references that name nothing.
    fn lookup<W: Write>(&self, reference: &str, out: &mut W) -> io::Result<Option<NodeId>> {
        let id = resolve_reference(self.browser.tree(), reference);
        if id.is_none() {
            writeln!(out, "no node matches '{reference}'")?;
        }
        Ok(id)
    }

    /// Prints the tree, followed by the breadcrumb when something is selected.
    fn print_view<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", render_tree(&self.browser, &self.style))?;
        let labels = self.browser.breadcrumb_labels();
        if !labels.is_empty() {
            writeln!(
                out,
                "{} {}",
                self.style.theme.dim("path:"),
                render_breadcrumb(&labels, &self.style.theme)
            )?;
        }
        writeln!(out)
    }

    /// Prints the prompt when interactive.
    fn print_prompt<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.prompt {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
        Ok(())
    }
}

/// Runs an interactive browsing session on stdin.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let browser = match ctx.browser() {
        Ok(browser) => browser,
        Err(code) => return code,
    };

    let stdin = io::stdin();
    let mut session = Session {
        browser,
        style: ctx.view_style(),
        prompt: stdin.is_terminal(),
    };

    match session.run(stdin.lock(), &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use arbor_highlight::{Theme, TreeGuides};
    use arbor_tree::{Node, Tree};

    use super::*;

    fn session() -> Session {
        let tree = Tree::new(
            Node::new("linux")
                .child(
                    Node::new("kernel")
                        .summary("core")
                        .child(Node::new("sched.c").summary("scheduler")),
                )
                .child(Node::new("mm").summary("memory")),
        );
        Session {
            browser: Browser::new(tree),
            style: ViewStyle {
                theme: Theme::plain(),
                guides: TreeGuides::Unicode,
                summaries: false,
            },
            prompt: false,
        }
    }

    fn transcript(input: &str) -> String {
        let mut out = Vec::new();
        session().run(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(
            parse_command("search  sched "),
            Ok(Some(SessionCommand::Search("sched")))
        );
        assert_eq!(parse_command("search"), Ok(Some(SessionCommand::Search(""))));
        assert_eq!(
            parse_command("open kernel"),
            Ok(Some(SessionCommand::Open("kernel")))
        );
        assert_eq!(parse_command("   "), Ok(None));
        assert_eq!(parse_command("q"), Ok(Some(SessionCommand::Quit)));
    }

    #[test]
    fn rejects_bad_commands() {
        assert_eq!(
            parse_command("select"),
            Err("usage: select <node>".to_string())
        );
        assert!(parse_command("dance").is_err());
    }

    #[test]
    fn initial_view_is_collapsed() {
        assert_eq!(transcript(""), "linux/\n├── kernel/ [+]\n└── mm\n\n");
    }

    #[test]
    fn search_then_select_shows_breadcrumb() {
        let out = transcript("search sched\nselect kernel/sched.c\nquit\nsearch never\n");
        let views: Vec<&str> = out.split("\n\n").collect();
        assert_eq!(views[1], "linux/\n└── kernel/\n    └── sched.c");
        assert_eq!(
            views[2],
            "linux/\n└── kernel/\n    └── sched.c *\npath: linux / kernel / sched.c"
        );
        assert!(!out.contains("never"));
    }

    #[test]
    fn toggle_and_collapse() {
        let out = transcript("toggle kernel\ncollapse\n");
        let views: Vec<&str> = out.split("\n\n").collect();
        assert_eq!(views[1], "linux/\n├── kernel/\n│   └── sched.c\n└── mm");
        assert_eq!(views[2], "linux/\n├── kernel/ [+]\n└── mm");
    }

    #[test]
    fn toggle_on_leaf_is_reported() {
        let out = transcript("toggle mm\n");
        assert!(out.contains("'mm' is not a directory in this view"));
    }

    #[test]
    fn no_match_then_clear() {
        let out = transcript("search zzz\nclear\n");
        assert!(out.contains("No results for 'zzz'."));
        assert!(out.ends_with("linux/\n├── kernel/ [+]\n└── mm\n\n"));
    }

    #[test]
    fn show_needs_a_selection() {
        assert!(transcript("show\n").contains("nothing selected"));
        let out = transcript("open mm\nshow\n");
        assert!(out.contains("linux / mm\nmm\nid: 0.1   kind: leaf"));
    }

    #[test]
    fn unknown_reference_is_reported() {
        let out = transcript("select kernel/nope\n");
        assert!(out.contains("no node matches 'kernel/nope'"));
    }
}
