//! Flattening a displayed tree into rows.

use arbor_tree::{Node, NodeId, NodeKind};

use crate::ExpansionState;

/// One visible line of the tree view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    /// The node shown on this row.
    pub node: &'a Node,
    /// Distance from the displayed root.
    pub depth: usize,
    /// Leaf or directory, as seen in the displayed tree.
    pub kind: NodeKind,
    /// Whether the node's children are shown below it.
    pub expanded: bool,
    /// Whether this node is the current selection.
    pub selected: bool,
    /// For each level below the root down to this row, whether the node on the path at
    /// that level is the last of its siblings. Empty for the root.
    pub last_flags: Vec<bool>,
}

impl Row<'_> {
    /// Returns the row's node id.
    pub fn id(&self) -> &NodeId {
        &self.node.id
    }
}

/// Lists the rows visible under `root`, in display order.
///
/// A directory's children appear only when it is expanded; the root always shows its
/// children.
pub fn visible_rows<'a>(
    root: &'a Node,
    expansion: &ExpansionState,
    selection: Option<&NodeId>,
) -> Vec<Row<'a>> {
    let mut rows = Vec::new();
    push_rows(root, expansion, selection, &mut Vec::new(), &mut rows);
    rows
}

/// Appends the row for `node` and, if expanded, its descendants.
fn push_rows<'a>(
    node: &'a Node,
    expansion: &ExpansionState,
    selection: Option<&NodeId>,
    last_flags: &mut Vec<bool>,
    rows: &mut Vec<Row<'a>>,
) {
    let kind = node.kind();
    let expanded = kind == NodeKind::Directory && expansion.is_expanded(&node.id);
    rows.push(Row {
        node,
        depth: last_flags.len(),
        kind,
        expanded,
        selected: selection == Some(&node.id),
        last_flags: last_flags.clone(),
    });
    if !expanded {
        return;
    }
    let count = node.children.len();
    for (index, child) in node.children.iter().enumerate() {
        last_flags.push(index + 1 == count);
        push_rows(child, expansion, selection, last_flags, rows);
        last_flags.pop();
    }
}
