//! Helpers shared by several commands.

use arbor_tree::{Node, NodeId, Tree};

/// Turns a node reference into an id.
///
/// A reference is either a dotted id (`0.1.0`) or a `/`-separated name path below the
/// root (`kernel/sched.c`). Anything that parses as an id is taken as one, even when no
/// node has that id.
pub fn resolve_reference(tree: &Tree, reference: &str) -> Option<NodeId> {
    if let Ok(id) = reference.parse::<NodeId>() {
        return Some(id);
    }
    tree.find_by_names(reference).map(|node| node.id.clone())
}

/// Looks up the node named by `reference`.
pub fn resolve_node<'a>(tree: &'a Tree, reference: &str) -> Option<&'a Node> {
    resolve_reference(tree, reference).and_then(|id| tree.get(&id))
}

/// Prints the standard error for a reference that names no node.
pub fn report_unknown_node(reference: &str) {
    eprintln!("error: no node matches '{reference}'");
    eprintln!("Use a node id such as 0.1.0 or a name path such as kernel/sched.c.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Tree {
        Tree::new(
            Node::new("linux")
                .child(Node::new("kernel").child(Node::new("sched.c")))
                .child(Node::new("mm")),
        )
    }

    #[test]
    fn ids_and_name_paths_resolve() {
        let tree = tree();
        assert_eq!(
            resolve_reference(&tree, "0.0.0"),
            Some(NodeId::from_indices([0, 0]))
        );
        assert_eq!(
            resolve_reference(&tree, "kernel/sched.c"),
            Some(NodeId::from_indices([0, 0]))
        );
        assert_eq!(resolve_node(&tree, "mm").map(|n| n.name.as_str()), Some("mm"));
    }

    #[test]
    fn unknown_ids_are_kept_but_do_not_resolve_to_nodes() {
        let tree = tree();
        assert_eq!(
            resolve_reference(&tree, "0.9"),
            Some(NodeId::from_indices([9]))
        );
        assert!(resolve_node(&tree, "0.9").is_none());
        assert!(resolve_reference(&tree, "kernel/nope").is_none());
    }
}
