//! Test fixtures shared across arbor-tree unit tests.

use proptest::prelude::*;

use crate::{Node, Tree};

/// The small kernel tree used throughout the tests:
///
/// ```text
/// linux
/// ├── kernel (core)
/// │   └── sched.c (scheduler, "CPU scheduler")
/// └── mm (memory)
/// ```
pub fn linux_tree() -> Tree {
    Tree::new(
        Node::new("linux")
            .child(
                Node::new("kernel").summary("core").child(
                    Node::new("sched.c")
                        .summary("scheduler")
                        .description("CPU scheduler"),
                ),
            )
            .child(Node::new("mm").summary("memory")),
    )
}

/// Text fields drawn from a tiny alphabet so random terms hit often.
fn arb_texts() -> impl Strategy<Value = (String, String, String)> {
    ("[a-dA-D]{1,4}", "[a-d ]{0,6}", "[a-dC\\n]{0,6}")
}

/// Random trees up to depth 4.
pub fn arb_tree() -> impl Strategy<Value = Tree> {
    let leaf = arb_texts().prop_map(|(name, summary, description)| {
        Node::new(name).summary(summary).description(description)
    });
    leaf.prop_recursive(4, 48, 4, |inner| {
        (arb_texts(), prop::collection::vec(inner, 0..4)).prop_map(
            |((name, summary, description), children)| {
                Node::new(name)
                    .summary(summary)
                    .description(description)
                    .with_children(children)
            },
        )
    })
    .prop_map(Tree::new)
}
