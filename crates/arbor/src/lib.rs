//! arbor: a terminal browser for hierarchical datasets
//!
//! A dataset is a tree of named nodes, each with a one-line summary and a free-form
//! description, read from a JSON or YAML file. arbor renders the tree with collapsible
//! directories, narrows it to the nodes matching a search term while keeping their
//! ancestors, highlights every occurrence of the term, and shows the breadcrumb of the
//! selected node.
//!
//! The binary is a thin layer over the library crates: `arbor-tree` for the node model,
//! filtering and path resolution, `arbor-match` for term matching, `arbor-view` for
//! expansion and selection state, and `arbor-config` for `.arbor.toml` files.

#![warn(missing_docs)]

pub mod cli;
pub mod logging;
