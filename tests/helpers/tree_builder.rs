//! Hand-built concrete syntax trees for driving the extractor.
//!
//! Tests describe a tree as nested [`Node`] literals with explicit kind
//! labels and byte offsets, then flatten it into the enter/leave event
//! stream a real parser walk would deliver.

use symtree::base::{TextRange, span};
use symtree::{CstNode, Outline, Profile, WalkEvent, extract};

/// A node instance as seen by the extractor. The `id` makes equality
/// mean node identity even for same-kind same-range nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestNode {
    id: u32,
    kind: &'static str,
    range: TextRange,
}

impl CstNode for TestNode {
    fn kind(&self) -> &str {
        self.kind
    }

    fn range(&self) -> TextRange {
        self.range
    }
}

/// Builder for nested test trees.
#[derive(Clone, Debug)]
pub struct Node {
    kind: &'static str,
    from: u32,
    to: u32,
    children: Vec<Node>,
}

pub fn node(kind: &'static str, from: u32, to: u32, children: Vec<Node>) -> Node {
    Node {
        kind,
        from,
        to,
        children,
    }
}

pub fn leaf(kind: &'static str, from: u32, to: u32) -> Node {
    node(kind, from, to, Vec::new())
}

/// Flatten a forest into matching enter/leave pairs in document order.
pub fn events(forest: &[Node]) -> Vec<WalkEvent<TestNode>> {
    let mut out = Vec::new();
    let mut next_id = 0u32;
    for root in forest {
        flatten(root, &mut out, &mut next_id);
    }
    out
}

fn flatten(n: &Node, out: &mut Vec<WalkEvent<TestNode>>, next_id: &mut u32) {
    let instance = TestNode {
        id: *next_id,
        kind: n.kind,
        range: span(n.from, n.to),
    };
    *next_id += 1;
    out.push(WalkEvent::Enter(instance.clone()));
    for child in &n.children {
        flatten(child, out, next_id);
    }
    out.push(WalkEvent::Leave(instance));
}

/// Extract with default options, panicking on the (fatal) depth error.
pub fn run(source: &str, forest: &[Node], profile: &Profile) -> Outline {
    extract(events(forest), source, profile).expect("extraction should succeed")
}
