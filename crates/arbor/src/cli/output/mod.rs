//! Rendering and JSON serialization for CLI output.

mod json;

use std::process::ExitCode;

use arbor_highlight::{Theme, TreeGuides};
use arbor_match::{Lines, Needle, Spans};
use arbor_tree::{Node, NodeKind, Tree};
use arbor_view::{Browser, Row};
use serde::Serialize;

pub use json::{JsonDetail, JsonSearchOutput};

/// Appended to the selected row so the selection is visible without color.
const SELECTED_MARKER: &str = " *";

/// Appended to directories whose children are hidden.
const COLLAPSED_MARKER: &str = " [+]";

/// Separator between breadcrumb labels.
const BREADCRUMB_SEPARATOR: &str = " / ";

/// Styling for tree and detail output.
#[derive(Debug, Clone, Copy)]
pub struct ViewStyle {
    /// Colors, or none.
    pub theme: Theme,
    /// Characters that connect rows to their parents.
    pub guides: TreeGuides,
    /// Whether tree rows show summaries.
    pub summaries: bool,
}

/// The text fields of a node that a search can match, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// The node name.
    Name,
    /// The one-line summary.
    Summary,
    /// The long description.
    Description,
}

/// Returns the fields of `node` that contain the search term.
pub fn matched_fields(node: &Node, needle: &Needle) -> Vec<Field> {
    [
        (Field::Name, node.name.as_str()),
        (Field::Summary, node.summary.as_str()),
        (Field::Description, node.description.as_str()),
    ]
    .into_iter()
    .filter(|(_, text)| needle.is_match(text))
    .map(|(field, _)| field)
    .collect()
}

/// Returns `"leaf"` or `"directory"`.
pub fn kind_label(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Leaf => "leaf",
        NodeKind::Directory => "directory",
    }
}

/// Message shown when an active search matched nothing.
pub fn no_results(term: &str) -> String {
    format!("No results for '{term}'.")
}

/// Renders the displayed tree of `browser`, one line per visible row.
pub fn render_tree(browser: &Browser, style: &ViewStyle) -> String {
    if browser.is_no_match() {
        return no_results(browser.term());
    }
    browser
        .rows()
        .iter()
        .map(|row| render_row(browser, row, style))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders one tree row: guides, highlighted name, markers and summary.
fn render_row(browser: &Browser, row: &Row<'_>, style: &ViewStyle) -> String {
    let theme = &style.theme;
    let needle = browser.needle();
    let is_dir = row.kind == NodeKind::Directory;
    let name = browser.tree().display_name(row.node);

    let mut line = theme.dim(&style.guides.prefix(&row.last_flags));
    line.push_str(&theme.spans(Spans::new(name, needle), |text| {
        if row.selected {
            theme.selected(text)
        } else if is_dir {
            theme.directory(text)
        } else {
            text.to_string()
        }
    }));

    if is_dir {
        line.push_str(&theme.directory("/"));
    }
    if row.selected {
        line.push_str(SELECTED_MARKER);
    }
    if is_dir && !row.expanded {
        line.push_str(&theme.dim(COLLAPSED_MARKER));
    }

    let summary = row.node.summary.trim();
    if style.summaries && !summary.is_empty() {
        line.push_str("  ");
        line.push_str(&theme.spans(Spans::new(summary, needle), |text| theme.dim(text)));
    }
    line
}

/// Joins breadcrumb labels with a dimmed separator.
pub fn render_breadcrumb(labels: &[&str], theme: &Theme) -> String {
    labels.join(&theme.dim(BREADCRUMB_SEPARATOR))
}

/// Renders the detail pane for `node`: breadcrumb, name, id and kind, summary, the
/// description line by line, and the names of its children.
pub fn render_detail(
    tree: &Tree,
    node: &Node,
    needle: Option<&Needle>,
    style: &ViewStyle,
) -> String {
    let theme = &style.theme;
    let mut out = vec![
        render_breadcrumb(&tree.breadcrumb_labels(&node.id), theme),
        theme.spans(Spans::new(tree.display_name(node), needle), |text| {
            theme.header(text)
        }),
        format!(
            "{} {}   {} {}",
            theme.dim("id:"),
            node.id,
            theme.dim("kind:"),
            kind_label(node.kind())
        ),
    ];

    if !node.summary.is_empty() {
        out.push(format!(
            "{} {}",
            theme.dim("summary:"),
            theme.spans(Spans::new(&node.summary, needle), str::to_string)
        ));
    }

    if !node.description.is_empty() {
        out.push(theme.dim("description:"));
        for line in Lines::new(&node.description, needle) {
            out.push(format!("    {}", theme.spans(line, str::to_string)));
        }
    }

    if node.is_directory() {
        let names: Vec<&str> = node.children.iter().map(|c| c.name.as_str()).collect();
        out.push(format!("{} {}", theme.dim("children:"), names.join(", ")));
    }

    out.join("\n")
}

/// Renders one search hit: the breadcrumb with the node's name highlighted, then each
/// matching summary or description line.
pub fn render_match(tree: &Tree, node: &Node, needle: &Needle, theme: &Theme) -> String {
    let labels = tree.breadcrumb_labels(&node.id);
    let (name, ancestors) = labels
        .split_last()
        .map_or((tree.display_name(node), &[][..]), |(last, rest)| (*last, rest));

    let mut head = ancestors
        .iter()
        .map(|label| theme.dim(label))
        .collect::<Vec<_>>()
        .join(&theme.dim(BREADCRUMB_SEPARATOR));
    if !ancestors.is_empty() {
        head.push_str(&theme.dim(BREADCRUMB_SEPARATOR));
    }
    head.push_str(&theme.spans(Spans::new(name, Some(needle)), |text| {
        theme.subheader(text)
    }));

    let mut out = vec![format!("{head}  {}", theme.dim(&node.id.to_string()))];

    if needle.is_match(&node.summary) {
        out.push(format!(
            "    {} {}",
            theme.dim("summary:"),
            theme.spans(Spans::new(&node.summary, Some(needle)), str::to_string)
        ));
    }

    for line in Lines::new(&node.description, Some(needle)).filter(Spans::has_match) {
        out.push(format!(
            "    {} {}",
            theme.dim("description:"),
            theme.spans(line, str::to_string)
        ));
    }

    out.join("\n")
}

/// Prints `value` as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}
