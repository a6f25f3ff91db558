//! Child Normalizer
//!
//! Flattens a heterogeneous child list into a flat ordered node sequence:
//! empty entries drop silently (conditional children), strings become text
//! nodes, lists are flattened in place, and fragments contribute all of
//! their own child nodes - text included - in place of themselves. Output
//! order equals input order; nothing is reordered or deduplicated.

use telar_dom::Node;

/// One child input entry
#[derive(Debug)]
pub enum Child {
    /// Dropped silently; enables `cond.then(..)` style children
    Empty,
    /// Becomes a text node
    Text(String),
    /// Passed through; fragments are spliced
    Node(Node),
    /// Flattened in place
    List(Vec<Child>),
}

impl From<&str> for Child {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Child {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl<T: Into<Child>> From<Option<T>> for Child {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Self::Empty,
        }
    }
}

impl<T: Into<Child>> From<Vec<T>> for Child {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// Normalize a child list into concrete nodes, preserving order.
pub fn normalize_children(children: Vec<Child>) -> Vec<Node> {
    let mut nodes = Vec::with_capacity(children.len());
    for child in children {
        push_normalized(child, &mut nodes);
    }
    nodes
}

fn push_normalized(child: Child, nodes: &mut Vec<Node>) {
    match child {
        Child::Empty => {}
        Child::Text(text) => nodes.push(Node::text(text)),
        Child::Node(mut node) => {
            if node.is_fragment() {
                // Unwrap all child nodes, text included
                nodes.extend(node.take_children());
            } else {
                nodes.push(node);
            }
        }
        Child::List(items) => {
            for item in items {
                push_normalized(item, nodes);
            }
        }
    }
}
