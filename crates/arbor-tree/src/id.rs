//! Stable node identifiers.
//!
//! A node's identity is its position in the canonical tree: the sequence of child
//! indices leading from the root to it. The textual form starts with `0` for the root
//! and appends one dotted index per level, so the second child of the root's first
//! child is `0.0.1`.
//!
//! Filtering keeps each surviving node's id, so an id taken from a filtered view still
//! names the same node in the canonical tree.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Errors that can occur when parsing node IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input did not match the expected `0[.index]*` format.
    #[error("invalid node id: {0}")]
    InvalidFormat(String),
}

/// Identifies a node by its child-index path from the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(Vec<usize>);

impl NodeId {
    /// Returns the id of the root node.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Builds an id from child indices below the root.
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self(indices.into_iter().collect())
    }

    /// Returns the id of this node's `index`-th child.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(&self.0);
        indices.push(index);
        Self(indices)
    }

    /// Returns the parent's id, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, parent) = self.0.split_last()?;
        Some(Self(parent.to_vec()))
    }

    /// Returns the child indices below the root.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Number of edges between the root and this node.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Returns true for the root id.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if `self` is a strict ancestor of `other`.
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        self.0.len() < other.0.len() && other.0.starts_with(&self.0)
    }

    /// Parses an id from its dotted form.
    pub fn parse(id: &str) -> Result<Self, IdError> {
        let invalid = || IdError::InvalidFormat(id.to_string());
        let mut segments = id.trim().split('.');
        if segments.next() != Some("0") {
            return Err(invalid());
        }
        segments
            .map(|segment| {
                if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                segment.parse::<usize>().map_err(|_| invalid())
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0")?;
        for index in &self.0 {
            write!(f, ".{index}")?;
        }
        Ok(())
    }
}

impl FromStr for NodeId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn root_formats_as_zero() {
        assert_eq!(NodeId::root().to_string(), "0");
        assert!(NodeId::root().is_root());
        assert_eq!(NodeId::root().depth(), 0);
    }

    #[test]
    fn parses_and_formats() {
        let id: NodeId = "0.2.10".parse().unwrap();
        assert_eq!(id.indices(), &[2, 10]);
        assert_eq!(id.to_string(), "0.2.10");
        assert_eq!(id.depth(), 2);
    }

    #[test]
    fn child_and_parent_are_inverse() {
        let id = NodeId::root().child(1).child(0);
        assert_eq!(id.to_string(), "0.1.0");
        assert_eq!(id.parent(), Some(NodeId::root().child(1)));
        assert_eq!(NodeId::root().parent(), None);
    }

    #[test]
    fn ancestry() {
        let a = NodeId::from_indices([0]);
        let b = NodeId::from_indices([0, 3]);
        let c = NodeId::from_indices([1, 3]);
        assert!(NodeId::root().is_ancestor_of(&a));
        assert!(a.is_ancestor_of(&b));
        assert!(!b.is_ancestor_of(&a));
        assert!(!a.is_ancestor_of(&a));
        assert!(!a.is_ancestor_of(&c));
    }

    #[test]
    fn invalid_ids_error() {
        assert!("".parse::<NodeId>().is_err());
        assert!("1.0".parse::<NodeId>().is_err());
        assert!("0.".parse::<NodeId>().is_err());
        assert!("0..1".parse::<NodeId>().is_err());
        assert!("0.-1".parse::<NodeId>().is_err());
        assert!("0.+1".parse::<NodeId>().is_err());
        assert!("kernel".parse::<NodeId>().is_err());
    }
}
