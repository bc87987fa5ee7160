//! Search filtering.
//!
//! Filtering prunes a tree down to the nodes whose own text contains the search term,
//! together with every ancestor of such a node. The walk is post-order: children are
//! filtered first, then a node is kept if it matches itself or still has a child.
//! Kept nodes are rebuilt with their surviving children in the original order and keep
//! their canonical [`NodeId`](crate::NodeId).

use arbor_match::Needle;
use tracing::debug;

use crate::Node;

/// Result of filtering a tree by a search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filtered<'a> {
    /// The term was blank; the input tree is passed through untouched.
    Unfiltered(&'a Node),
    /// A pruned copy holding only matches and their ancestors.
    Matches(Node),
    /// Nothing in the tree matches the term.
    NoMatch,
}

impl Filtered<'_> {
    /// Returns the root of the tree to display, or `None` when nothing matched.
    pub fn root(&self) -> Option<&Node> {
        match self {
            Self::Unfiltered(node) => Some(node),
            Self::Matches(node) => Some(node),
            Self::NoMatch => None,
        }
    }

    /// Returns true when a non-blank term matched nothing.
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch)
    }

    /// Returns true when a search term was applied.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Unfiltered(_))
    }
}

/// Filters `root` by the raw search `term`.
///
/// The term is trimmed; a blank term returns [`Filtered::Unfiltered`]. Matching is
/// case-insensitive against each node's name, summary and description.
pub fn filter<'a>(root: &'a Node, term: &str) -> Filtered<'a> {
    let Some(needle) = Needle::new(term) else {
        return Filtered::Unfiltered(root);
    };
    let filtered = prune(root, &needle);
    debug!(
        term = needle.as_str(),
        kept = filtered.as_ref().map_or(0, Node::node_count),
        total = root.node_count(),
        "filtered tree"
    );
    match filtered {
        Some(node) => Filtered::Matches(node),
        None => Filtered::NoMatch,
    }
}

/// Prunes the subtree at `node` to the nodes matching `needle` and their ancestors.
///
/// Returns `None` when neither the node nor any descendant matches.
pub fn prune(node: &Node, needle: &Needle) -> Option<Node> {
    let children: Vec<Node> = node
        .children
        .iter()
        .filter_map(|child| prune(child, needle))
        .collect();

    if children.is_empty() && !node.self_matches(needle) {
        return None;
    }

    Some(Node {
        id: node.id.clone(),
        name: node.name.clone(),
        summary: node.summary.clone(),
        description: node.description.clone(),
        children,
    })
}
