//! The canonical dataset tree.
//!
//! A [`Tree`] owns the root [`Node`] loaded at startup. Construction assigns every node
//! its [`NodeId`] and validates names; afterwards the tree only hands out shared
//! references, so the canonical data cannot change for the lifetime of the process.

use std::{
    fs,
    path::Path,
    sync::atomic::{AtomicU64, Ordering},
};

use tracing::debug;

use crate::{DatasetError, Node, NodeId, parse::DatasetFormat, parse_dataset_str, resolve_path};

/// Label used when neither the root name nor the caller supplies one.
const FALLBACK_LABEL: &str = "root";

/// Source of process-unique tree stamps.
static NEXT_STAMP: AtomicU64 = AtomicU64::new(1);

/// Distinguishes tree instances, e.g. as part of a memoization key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeStamp(u64);

/// An immutable, rooted dataset tree.
#[derive(Debug, Clone)]
pub struct Tree {
    /// The root node with ids assigned.
    root: Node,
    /// Logical name of the dataset, shown in place of an empty root name.
    label: String,
    /// Identity of this tree instance.
    stamp: TreeStamp,
}

impl Tree {
    /// Builds a tree from a root node, assigning ids to every node.
    ///
    /// Names are not validated; use [`Tree::from_root`] for untrusted input.
    pub fn new(mut root: Node) -> Self {
        root.assign_ids(NodeId::root());
        let label = if root.name.trim().is_empty() {
            FALLBACK_LABEL.to_string()
        } else {
            root.name.clone()
        };
        Self {
            root,
            label,
            stamp: TreeStamp(NEXT_STAMP.fetch_add(1, Ordering::Relaxed)),
        }
    }

    /// Builds a tree and checks that every non-root node has a name.
    pub fn from_root(root: Node) -> Result<Self, DatasetError> {
        let tree = Self::new(root);
        if let Some(unnamed) = tree
            .iter_preorder()
            .find(|node| !node.id.is_root() && node.name.trim().is_empty())
        {
            return Err(DatasetError::EmptyName {
                id: unnamed.id.clone(),
            });
        }
        Ok(tree)
    }

    /// Loads and validates a dataset file.
    ///
    /// The format is picked from the extension. When the root has no name, the file stem
    /// becomes the tree label.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let format = DatasetFormat::from_path(path).ok_or_else(|| {
            DatasetError::UnsupportedFormat {
                path: path.to_path_buf(),
            }
        })?;
        let contents = fs::read_to_string(path).map_err(|source| DatasetError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let root = parse_dataset_str(&contents, format, path)?;
        let mut tree = Self::from_root(root)?;
        if tree.root.name.trim().is_empty()
            && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
        {
            tree.label = stem.to_string();
        }
        debug!(
            path = %path.display(),
            nodes = tree.node_count(),
            "loaded dataset"
        );
        Ok(tree)
    }

    /// Overrides the label shown for an unnamed root.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        if !label.trim().is_empty() {
            self.label = label;
        }
        self
    }

    /// Returns the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Returns the dataset label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the identity of this tree instance.
    pub fn stamp(&self) -> TreeStamp {
        self.stamp
    }

    /// Returns an iterator over all nodes in pre-order.
    pub fn iter_preorder(&self) -> impl Iterator<Item = &Node> {
        self.root.iter_preorder()
    }

    /// Returns the total number of nodes.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Looks up a node by id.
    ///
    /// Ids index directly into the child lists, so this is proportional to depth.
    pub fn get(&self, id: &NodeId) -> Option<&Node> {
        id.indices()
            .iter()
            .try_fold(&self.root, |node, &index| node.children.get(index))
    }

    /// Looks up a node by a `/`-separated chain of names below the root.
    ///
    /// Each segment picks the first child with that name. An empty path (or `/`) names
    /// the root.
    pub fn find_by_names(&self, path: &str) -> Option<&Node> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(&self.root, |node, name| node.child_named(name))
    }

    /// Returns the name to display for `node`, substituting the label for an empty root
    /// name.
    pub fn display_name<'a>(&'a self, node: &'a Node) -> &'a str {
        if node.id.is_root() && node.name.trim().is_empty() {
            &self.label
        } else {
            &node.name
        }
    }

    /// Returns the breadcrumb for `id`: the nodes from the root to the target inclusive.
    ///
    /// Empty when no node has that id.
    pub fn breadcrumb(&self, id: &NodeId) -> Vec<&Node> {
        resolve_path(&self.root, id)
    }

    /// Returns the breadcrumb labels for `id`, with the root label substituted.
    pub fn breadcrumb_labels(&self, id: &NodeId) -> Vec<&str> {
        self.breadcrumb(id)
            .into_iter()
            .map(|node| self.display_name(node))
            .collect()
    }
}
