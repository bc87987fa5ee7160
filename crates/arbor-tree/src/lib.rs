//! The node model behind arbor.
//!
//! This crate holds the immutable dataset and the pure operations over it:
//! - Loading a hierarchical dataset from JSON or YAML into a [`Tree`]
//! - Stable, path-derived [`NodeId`]s for identity-based comparison
//! - Pruning a tree down to the nodes matching a search term ([`filter`])
//! - Reconstructing the ancestor chain of a node ([`resolve_path`])

#![warn(missing_docs)]

mod error;
mod filter;
mod id;
mod node;
mod parse;
mod path;
#[cfg(test)]
mod test_support;
mod tree;

pub use error::DatasetError;
pub use filter::{Filtered, filter, prune};
pub use id::{IdError, NodeId};
pub use node::{Node, NodeKind, PreorderIter};
pub use parse::{DatasetFormat, RawNode, parse_dataset_str};
pub use path::{resolve_path, resolve_path_ids};
pub use tree::{Tree, TreeStamp};
