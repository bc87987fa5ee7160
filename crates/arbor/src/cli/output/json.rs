//! JSON shapes for `show --json` and `search --json`.

use arbor_match::{Lines, Needle, Span, Spans};
use arbor_tree::{Node, Tree};
use serde::Serialize;

use super::{Field, kind_label, matched_fields};

/// A run of text and whether it matched the search term.
#[derive(Debug, Serialize)]
struct JsonSpan<'a> {
    /// The covered text.
    text: &'a str,
    /// True if the text is an occurrence of the term.
    matched: bool,
}

impl<'a> From<Span<'a>> for JsonSpan<'a> {
    fn from(span: Span<'a>) -> Self {
        Self {
            text: span.text,
            matched: span.is_matched(),
        }
    }
}

/// Highlight spans for each text field of a node.
#[derive(Debug, Serialize)]
struct JsonHighlights<'a> {
    /// Spans of the name.
    name: Vec<JsonSpan<'a>>,
    /// Spans of the summary.
    summary: Vec<JsonSpan<'a>>,
    /// Spans of each description line.
    description: Vec<Vec<JsonSpan<'a>>>,
}

/// A child entry in the detail output.
#[derive(Debug, Serialize)]
struct JsonChild<'a> {
    /// Node id.
    id: String,
    /// Node name.
    name: &'a str,
    /// `leaf` or `directory`.
    kind: &'static str,
}

/// Detail output for a single node.
#[derive(Debug, Serialize)]
pub struct JsonDetail<'a> {
    /// Node id.
    id: String,
    /// Display name (the tree label for an unnamed root).
    name: &'a str,
    /// `leaf` or `directory`.
    kind: &'static str,
    /// One-line summary.
    summary: &'a str,
    /// Full description.
    description: &'a str,
    /// Display names from the root to this node.
    breadcrumb: Vec<&'a str>,
    /// Direct children.
    children: Vec<JsonChild<'a>>,
    /// The active search term, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    term: Option<&'a str>,
    /// Match spans for the text fields.
    highlights: JsonHighlights<'a>,
}

impl<'a> JsonDetail<'a> {
    /// Builds the detail output for `node`.
    pub fn new(tree: &'a Tree, node: &'a Node, needle: Option<&'a Needle>) -> Self {
        let name = tree.display_name(node);
        Self {
            id: node.id.to_string(),
            name,
            kind: kind_label(node.kind()),
            summary: &node.summary,
            description: &node.description,
            breadcrumb: tree.breadcrumb_labels(&node.id),
            children: node
                .children
                .iter()
                .map(|child| JsonChild {
                    id: child.id.to_string(),
                    name: &child.name,
                    kind: kind_label(child.kind()),
                })
                .collect(),
            term: needle.map(Needle::as_str),
            highlights: JsonHighlights {
                name: Spans::new(name, needle).map(JsonSpan::from).collect(),
                summary: Spans::new(&node.summary, needle)
                    .map(JsonSpan::from)
                    .collect(),
                description: Lines::new(&node.description, needle)
                    .map(|line| line.map(JsonSpan::from).collect())
                    .collect(),
            },
        }
    }
}

/// One node found by `search`.
#[derive(Debug, Serialize)]
struct JsonSearchResult<'a> {
    /// Node id.
    id: String,
    /// Node name.
    name: &'a str,
    /// `leaf` or `directory`.
    kind: &'static str,
    /// Display names from the root to the node.
    breadcrumb: Vec<&'a str>,
    /// Fields containing the term.
    fields: Vec<Field>,
}

/// Output of `search --json`.
#[derive(Debug, Serialize)]
pub struct JsonSearchOutput<'a> {
    /// The trimmed search term.
    term: &'a str,
    /// Number of matching nodes.
    total: usize,
    /// Matching nodes in display order.
    results: Vec<JsonSearchResult<'a>>,
}

impl<'a> JsonSearchOutput<'a> {
    /// Builds the output for the matching `nodes`.
    pub fn new(tree: &'a Tree, needle: &'a Needle, nodes: &[&'a Node]) -> Self {
        let results: Vec<_> = nodes
            .iter()
            .map(|&node| JsonSearchResult {
                id: node.id.to_string(),
                name: tree.display_name(node),
                kind: kind_label(node.kind()),
                breadcrumb: tree.breadcrumb_labels(&node.id),
                fields: matched_fields(node, needle),
            })
            .collect();
        Self {
            term: needle.as_str(),
            total: results.len(),
            results,
        }
    }
}
