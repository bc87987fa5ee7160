//! Breadcrumb path resolution.
//!
//! The path to a node is found by a depth-first, pre-order search from the root that
//! compares nodes by [`NodeId`]. The search stack at the first hit is the path.
//! Callers resolve against the canonical tree so that breadcrumbs stay complete while a
//! filter hides part of it.

use tracing::trace;

use crate::{Node, NodeId};

/// Returns the nodes from `root` to the node identified by `target`, inclusive.
///
/// Returns an empty vector when no node under `root` carries that id.
pub fn resolve_path<'a>(root: &'a Node, target: &NodeId) -> Vec<&'a Node> {
    let mut path = Vec::with_capacity(target.depth() + 1);
    if search(root, target, &mut path) {
        path
    } else {
        trace!(target = %target, "node not reachable from root");
        Vec::new()
    }
}

/// Like [`resolve_path`], returning only the ids along the path.
pub fn resolve_path_ids(root: &Node, target: &NodeId) -> Vec<NodeId> {
    resolve_path(root, target)
        .into_iter()
        .map(|node| node.id.clone())
        .collect()
}

/// Pushes `node` and searches its subtree, leaving the path on the stack on success.
fn search<'a>(node: &'a Node, target: &NodeId, path: &mut Vec<&'a Node>) -> bool {
    path.push(node);
    if &node.id == target {
        return true;
    }
    for child in &node.children {
        if search(child, target, path) {
            return true;
        }
    }
    path.pop();
    false
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{
        Tree, filter,
        test_support::{arb_tree, linux_tree},
    };

    /// Returns the names along a path.
    fn names<'a>(path: &[&'a Node]) -> Vec<&'a str> {
        path.iter().map(|n| n.name.as_str()).collect()
    }

    #[test]
    fn resolves_root_to_target() {
        let tree = linux_tree();
        let sched: NodeId = "0.0.0".parse().unwrap();
        assert_eq!(
            names(&resolve_path(tree.root(), &sched)),
            vec!["linux", "kernel", "sched.c"]
        );
    }

    #[test]
    fn root_resolves_to_itself() {
        let tree = linux_tree();
        assert_eq!(
            names(&resolve_path(tree.root(), &NodeId::root())),
            vec!["linux"]
        );
    }

    #[test]
    fn unknown_id_resolves_to_empty_path() {
        let tree = linux_tree();
        assert!(resolve_path(tree.root(), &"0.7.1".parse().unwrap()).is_empty());
    }

    #[test]
    fn target_outside_subtree_is_unreachable() {
        let tree = linux_tree();
        let kernel = &tree.root().children[0];
        let mm: NodeId = "0.1".parse().unwrap();
        assert!(resolve_path(kernel, &mm).is_empty());
    }

    #[test]
    fn selection_from_filtered_view_resolves_in_canonical_tree() {
        let tree = Tree::new(
            Node::new("linux")
                .child(Node::new("arch"))
                .child(Node::new("kernel").child(Node::new("fork.c")).child(Node::new("sched.c"))),
        );
        let filtered = filter(tree.root(), "sched");
        let selected = filtered.root().unwrap().children[0].children[0].id.clone();

        // In the filtered view sched.c is the first child of the first child,
        // yet its id still points at the canonical position.
        assert_eq!(selected.to_string(), "0.1.1");
        assert_eq!(
            resolve_path_ids(tree.root(), &selected),
            vec![NodeId::root(), NodeId::from_indices([1]), NodeId::from_indices([1, 1])]
        );
    }

    #[test]
    fn identical_nodes_resolve_by_position() {
        let tree = Tree::new(
            Node::new("root")
                .child(Node::new("a").child(Node::new("twin")))
                .child(Node::new("b").child(Node::new("twin"))),
        );
        let second = NodeId::from_indices([1, 0]);
        assert_eq!(
            names(&resolve_path(tree.root(), &second)),
            vec!["root", "b", "twin"]
        );
    }

    proptest! {
        #[test]
        fn every_node_resolves_to_a_parent_chain(tree in arb_tree()) {
            for node in tree.iter_preorder() {
                let path = resolve_path(tree.root(), &node.id);
                prop_assert_eq!(path.first().map(|n| &n.id), Some(&NodeId::root()));
                prop_assert_eq!(path.last().map(|n| &n.id), Some(&node.id));
                for pair in path.windows(2) {
                    prop_assert!(pair[0].children.iter().any(|c| c.id == pair[1].id));
                }
            }
        }
    }
}
