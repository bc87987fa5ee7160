//! Hierarchical node structures.
//!
//! A [`Node`] is a plain value: a name, a one-line summary, a free-form description and
//! an ordered list of children. Whether a node is a file or a directory is never stored;
//! it is derived from the children list by [`Node::kind`], so a directory whose children
//! are all filtered away reads as a leaf in the filtered view.

use arbor_match::Needle;

use crate::NodeId;

/// Distinguishes leaves from directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A node with no children.
    Leaf,
    /// A node with at least one child.
    Directory,
}

/// A node in the dataset tree.
///
/// Nodes are compared by [`NodeId`] wherever identity matters; two nodes with identical
/// text at different positions are different nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Position of the node in the canonical tree.
    ///
    /// Assigned when the node becomes part of a [`Tree`](crate::Tree); standalone nodes
    /// carry the root id.
    pub id: NodeId,

    /// Display name of the file or directory.
    pub name: String,

    /// One-line summary.
    pub summary: String,

    /// Long description, possibly spanning several lines.
    pub description: String,

    /// Child nodes in display order.
    pub children: Vec<Self>,
}

impl Node {
    /// Creates a leaf node with the given name and empty text.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: NodeId::root(),
            name: name.into(),
            summary: String::new(),
            description: String::new(),
            children: Vec::new(),
        }
    }

    /// Sets the summary.
    #[must_use]
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Appends a child.
    #[must_use]
    pub fn child(mut self, node: Self) -> Self {
        self.children.push(node);
        self
    }

    /// Replaces the children.
    #[must_use]
    pub fn with_children(mut self, nodes: Vec<Self>) -> Self {
        self.children = nodes;
        self
    }

    /// Classifies the node by its children.
    pub fn kind(&self) -> NodeKind {
        if self.children.is_empty() {
            NodeKind::Leaf
        } else {
            NodeKind::Directory
        }
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.kind() == NodeKind::Leaf
    }

    /// Returns true if this node has at least one child.
    pub fn is_directory(&self) -> bool {
        self.kind() == NodeKind::Directory
    }

    /// Returns the three searchable text fields: name, summary, description.
    pub fn texts(&self) -> [&str; 3] {
        [&self.name, &self.summary, &self.description]
    }

    /// Returns true if the node's own text contains the search term.
    pub fn self_matches(&self, needle: &Needle) -> bool {
        needle.matches_any(self.texts())
    }

    /// Returns the first direct child with the given name.
    pub fn child_named(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Returns an iterator over this node and all descendants in pre-order (depth-first).
    pub fn iter_preorder(&self) -> PreorderIter<'_> {
        PreorderIter { stack: vec![self] }
    }

    /// Returns the total number of nodes in this subtree (including self).
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Rewrites ids in this subtree so that this node has `id`.
    pub(crate) fn assign_ids(&mut self, id: NodeId) {
        for (index, child) in self.children.iter_mut().enumerate() {
            child.assign_ids(id.child(index));
        }
        self.id = id;
    }
}

/// Iterator for pre-order traversal of nodes.
pub struct PreorderIter<'a> {
    /// Stack of nodes to visit (rightmost children pushed first).
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for PreorderIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Leftmost child must come off the stack first
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
