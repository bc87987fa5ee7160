//! The browsing controller.
//!
//! A [`Browser`] reacts to four user events and derives everything else from the
//! canonical tree:
//!
//! - `set_search_term` rebuilds the displayed view. A new non-blank term filters the
//!   tree and opens every node of the result; clearing the term returns to a fresh,
//!   collapsed canonical view. Repeating the current term changes nothing.
//! - `select_node` records a selection and resolves its breadcrumb in the canonical tree,
//!   so the breadcrumb is complete even while a filter hides ancestors' siblings.
//! - `toggle_expand` opens or closes a directory of the displayed view.
//! - `collapse_all` clears the term, the selection and every expansion override.

use arbor_match::Needle;
use arbor_tree::{Node, NodeId, Tree, TreeStamp, prune, resolve_path, resolve_path_ids};
use tracing::debug;

use crate::{ExpansionState, Row, visible_rows};

/// An applied search and its memoized filter result.
#[derive(Debug, Clone)]
struct Search {
    /// The normalized term.
    needle: Needle,
    /// Tree the result was computed from.
    stamp: TreeStamp,
    /// The pruned tree, or `None` when nothing matched.
    result: Option<Node>,
}

impl Search {
    /// Returns true if this search was computed for `needle` over the tree `stamp`.
    fn is_for(&self, stamp: TreeStamp, needle: &Needle) -> bool {
        self.stamp == stamp && &self.needle == needle
    }
}

/// Interactive browsing state over an immutable tree.
#[derive(Debug, Clone)]
pub struct Browser {
    /// The canonical dataset.
    tree: Tree,
    /// The active search, if any.
    search: Option<Search>,
    /// Expansion state of the displayed view.
    expansion: ExpansionState,
    /// The selected node.
    selection: Option<NodeId>,
    /// Ids from the root to the selection, inclusive.
    breadcrumb: Vec<NodeId>,
}

impl Browser {
    /// Starts browsing `tree` with no search, no selection and every directory collapsed.
    pub fn new(tree: Tree) -> Self {
        Self {
            tree,
            search: None,
            expansion: ExpansionState::collapsed(),
            selection: None,
            breadcrumb: Vec::new(),
        }
    }

    /// Returns the canonical tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Returns the active search term, or `""` when search is inactive.
    pub fn term(&self) -> &str {
        self.search.as_ref().map_or("", |search| search.needle.as_str())
    }

    /// Returns the active needle for highlighting.
    pub fn needle(&self) -> Option<&Needle> {
        self.search.as_ref().map(|search| &search.needle)
    }

    /// Returns true while a non-blank search term is applied.
    pub fn is_searching(&self) -> bool {
        self.search.is_some()
    }

    /// Returns true when the active search term matched nothing.
    pub fn is_no_match(&self) -> bool {
        self.search
            .as_ref()
            .is_some_and(|search| search.result.is_none())
    }

    /// Returns the root of the displayed tree: the filtered tree while searching, the
    /// canonical root otherwise. `None` when the search matched nothing.
    pub fn display_root(&self) -> Option<&Node> {
        match &self.search {
            Some(search) => search.result.as_ref(),
            None => Some(self.tree.root()),
        }
    }

    /// Returns the expansion state of the displayed view.
    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Returns true if `id` is expanded in the displayed view.
    pub fn is_expanded(&self, id: &NodeId) -> bool {
        self.expansion.is_expanded(id)
    }

    /// Returns the selected node id.
    pub fn selection(&self) -> Option<&NodeId> {
        self.selection.as_ref()
    }

    /// Returns the selected node from the canonical tree.
    pub fn selected_node(&self) -> Option<&Node> {
        self.selection.as_ref().and_then(|id| self.tree.get(id))
    }

    /// Returns the ids from the root to the selection. Empty without a selection.
    pub fn breadcrumb(&self) -> &[NodeId] {
        &self.breadcrumb
    }

    /// Returns the breadcrumb as display names, with the tree label standing in for an
    /// unnamed root.
    pub fn breadcrumb_labels(&self) -> Vec<&str> {
        self.breadcrumb
            .iter()
            .filter_map(|id| self.tree.get(id))
            .map(|node| self.tree.display_name(node))
            .collect()
    }

    /// Returns the visible rows of the displayed tree. Empty when nothing matched.
    pub fn rows(&self) -> Vec<Row<'_>> {
        self.display_root()
            .map(|root| visible_rows(root, &self.expansion, self.selection.as_ref()))
            .unwrap_or_default()
    }

    /// Looks up `id` in the displayed tree.
    pub fn displayed(&self, id: &NodeId) -> Option<&Node> {
        let root = self.display_root()?;
        resolve_path(root, id).last().copied()
    }

    /// Applies a new search term.
    ///
    /// Returns true when the displayed view was rebuilt. A term equal to the current one
    /// after trimming leaves all state, including toggles, untouched.
    pub fn set_search_term(&mut self, term: &str) -> bool {
        let needle = Needle::new(term);
        let stamp = self.tree.stamp();
        match (&self.search, &needle) {
            (None, None) => return false,
            (Some(search), Some(needle)) if search.is_for(stamp, needle) => return false,
            _ => {}
        }

        match needle {
            Some(needle) => {
                let result = prune(self.tree.root(), &needle);
                debug!(
                    term = needle.as_str(),
                    matched = result.is_some(),
                    "search applied"
                );
                self.search = Some(Search {
                    needle,
                    stamp,
                    result,
                });
                self.expansion = ExpansionState::expanded();
            }
            None => {
                debug!("search cleared");
                self.search = None;
                self.expansion = ExpansionState::collapsed();
            }
        }
        true
    }

    /// Selects `id` and resolves its breadcrumb in the canonical tree.
    ///
    /// An id that names no node clears the selection and leaves an empty breadcrumb.
    pub fn select_node(&mut self, id: &NodeId) {
        self.breadcrumb = resolve_path_ids(self.tree.root(), id);
        if self.breadcrumb.is_empty() {
            debug!(id = %id, "selection target not in tree");
            self.selection = None;
        } else {
            self.selection = Some(id.clone());
        }
    }

    /// Clears the selection and breadcrumb.
    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.breadcrumb.clear();
    }

    /// Toggles a directory of the displayed view.
    ///
    /// Returns the new expansion state, or `None` when `id` is not a displayed directory
    /// or is the root.
    pub fn toggle_expand(&mut self, id: &NodeId) -> Option<bool> {
        if id.is_root() || !self.displayed(id).is_some_and(Node::is_directory) {
            return None;
        }
        let expanded = self.expansion.toggle(id);
        debug!(id = %id, expanded, "toggled");
        Some(expanded)
    }

    /// Handles a click on `id`: selects it, and toggles it when it is a directory.
    ///
    /// Returns the new expansion state when a toggle happened.
    pub fn activate(&mut self, id: &NodeId) -> Option<bool> {
        self.select_node(id);
        self.toggle_expand(id)
    }

    /// Opens every node of the displayed view, dropping individual toggles.
    pub fn expand_all(&mut self) {
        self.expansion.reset(true);
    }

    /// Resets to the initial state: no search, no selection, everything collapsed.
    pub fn collapse_all(&mut self) {
        debug!("collapse all");
        self.search = None;
        self.expansion = ExpansionState::collapsed();
        self.clear_selection();
    }
}
