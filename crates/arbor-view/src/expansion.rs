//! Per-node expansion state.
//!
//! Expansion is stored as a default plus a set of overrides keyed by [`NodeId`]. A node
//! is expanded when exactly one of "the default is expanded" and "the node has an
//! override" holds. The root is expanded unconditionally.
//!
//! A fresh state is built for every displayed view: default-collapsed for the canonical
//! tree, default-expanded while a search is active. Throwing the state away is how the
//! view forgets its toggles.

use std::collections::HashSet;

use arbor_tree::NodeId;

/// Open/closed state of every node in one displayed view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    /// State of a node without an override.
    default_expanded: bool,
    /// Nodes whose state is the opposite of the default.
    overrides: HashSet<NodeId>,
}

impl ExpansionState {
    /// Every non-root node starts collapsed.
    pub fn collapsed() -> Self {
        Self::default()
    }

    /// Every node starts expanded.
    pub fn expanded() -> Self {
        Self {
            default_expanded: true,
            overrides: HashSet::new(),
        }
    }

    /// Returns true if nodes without an override are expanded.
    pub fn default_expanded(&self) -> bool {
        self.default_expanded
    }

    /// Returns true if `id` is expanded.
    pub fn is_expanded(&self, id: &NodeId) -> bool {
        id.is_root() || self.default_expanded != self.overrides.contains(id)
    }

    /// Flips the state of `id` and returns the new state.
    ///
    /// The root cannot be collapsed; toggling it changes nothing and returns `true`.
    pub fn toggle(&mut self, id: &NodeId) -> bool {
        if id.is_root() {
            return true;
        }
        if !self.overrides.remove(id) {
            self.overrides.insert(id.clone());
        }
        self.is_expanded(id)
    }

    /// Sets the state of `id` explicitly.
    pub fn set_expanded(&mut self, id: &NodeId, expanded: bool) {
        if id.is_root() {
            return;
        }
        if expanded == self.default_expanded {
            self.overrides.remove(id);
        } else {
            self.overrides.insert(id.clone());
        }
    }

    /// Drops every override and installs a new default.
    pub fn reset(&mut self, default_expanded: bool) {
        self.default_expanded = default_expanded;
        self.overrides.clear();
    }

    /// Number of nodes that differ from the default.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}
