//! Element Factory and Mutator
//!
//! The primary construction entry points. Argument shape is the explicit
//! tagged union [`ElementArgs`]: a call either carries an attribute record
//! plus children, or children only. Attributes are applied before children
//! are appended, so handlers are live before any attach-time behavior.

use telar_dom::{ElementData, Node, NodeData};

use crate::apply::apply_to_element;
use crate::children::{Child, normalize_children};
use crate::record::AttributeRecord;
use crate::tags::Tag;

/// Construction arguments: attribute record and/or children
#[derive(Debug)]
pub enum ElementArgs {
    /// Children only, empty attribute record
    Children(Vec<Child>),
    /// Attribute record first, then children
    WithAttributes {
        attrs: AttributeRecord,
        children: Vec<Child>,
    },
}

impl Default for ElementArgs {
    fn default() -> Self {
        Self::Children(Vec::new())
    }
}

impl ElementArgs {
    /// No attributes, no children
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an attribute record
    pub fn attrs(attrs: AttributeRecord) -> Self {
        Self::WithAttributes {
            attrs,
            children: Vec::new(),
        }
    }

    /// Append one child
    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children_vec().push(child.into());
        self
    }

    /// Append several children
    pub fn children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        self.children_vec().extend(children.into_iter().map(Into::into));
        self
    }

    fn children_vec(&mut self) -> &mut Vec<Child> {
        match self {
            Self::Children(children) => children,
            Self::WithAttributes { children, .. } => children,
        }
    }

    fn into_parts(self) -> (AttributeRecord, Vec<Child>) {
        match self {
            Self::Children(children) => (AttributeRecord::new(), children),
            Self::WithAttributes { attrs, children } => (attrs, children),
        }
    }
}

impl From<AttributeRecord> for ElementArgs {
    fn from(attrs: AttributeRecord) -> Self {
        Self::attrs(attrs)
    }
}

impl From<Vec<Child>> for ElementArgs {
    fn from(children: Vec<Child>) -> Self {
        Self::Children(children)
    }
}

impl From<Child> for ElementArgs {
    fn from(child: Child) -> Self {
        Self::Children(vec![child])
    }
}

impl From<&str> for ElementArgs {
    fn from(text: &str) -> Self {
        Self::Children(vec![text.into()])
    }
}

impl From<String> for ElementArgs {
    fn from(text: String) -> Self {
        Self::Children(vec![text.into()])
    }
}

impl From<Node> for ElementArgs {
    fn from(node: Node) -> Self {
        Self::Children(vec![node.into()])
    }
}

impl From<(AttributeRecord, Vec<Child>)> for ElementArgs {
    fn from((attrs, children): (AttributeRecord, Vec<Child>)) -> Self {
        Self::WithAttributes { attrs, children }
    }
}

/// Create an element of a known tag
pub fn create(tag: Tag, args: impl Into<ElementArgs>) -> Node {
    build(tag.as_str(), args.into())
}

/// Create an element of an arbitrary tag name (custom elements)
pub fn create_custom(tag: &str, args: impl Into<ElementArgs>) -> Node {
    build(tag, args.into())
}

fn build(tag: &str, args: ElementArgs) -> Node {
    let (attrs, children) = args.into_parts();

    // `is` selects a customized-built-in variant at construction time
    let variant = match attrs.get("is") {
        Some(value) if !value.is_null() => Some(value.coerce()),
        _ => None,
    };

    let mut element = ElementData::with_variant(tag, variant);
    apply_to_element(&mut element, &attrs);

    let mut node = Node::from_element(element);
    for child in normalize_children(children) {
        node.append_child(child);
    }
    tracing::trace!(tag, children = node.children().len(), "created element");
    node
}

/// Append children to an existing node, through the normalizer.
/// Leaf nodes (text, comments) are left untouched.
pub fn append(parent: &mut Node, children: Vec<Child>) {
    match parent.data() {
        NodeData::Element(_) | NodeData::Fragment => {
            parent.children_mut().extend(normalize_children(children));
        }
        _ => tracing::trace!("append on a leaf node, skipping"),
    }
}

/// Clear existing children, then set the given ones
pub fn replace_all(parent: &mut Node, children: Vec<Child>) {
    parent.clear_children();
    append(parent, children);
}

/// Apply an attribute record onto an existing node, in place.
///
/// Composite attributes merge rather than replace: classes union, style and
/// data attributes overwrite per key. Non-element nodes are left untouched.
pub fn apply_attributes(node: &mut Node, attrs: &AttributeRecord) {
    match node.as_element_mut() {
        Some(element) => apply_to_element(element, attrs),
        None => tracing::trace!("apply_attributes on non-element node, skipping"),
    }
}

/// Merge attributes onto a node and hand it back, for chaining
pub fn with_attributes(mut node: Node, attrs: &AttributeRecord) -> Node {
    apply_attributes(&mut node, attrs);
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_element() {
        let node = create(Tag::Div, ElementArgs::new());
        assert!(node.is_element());
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_children_only() {
        let node = create(Tag::Div, "text");
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.children()[0].as_text(), Some("text"));
    }

    #[test]
    fn test_attrs_then_children() {
        let args = ElementArgs::attrs(AttributeRecord::new().with("id", "test")).child("x");
        let node = create(Tag::Div, args);

        assert_eq!(node.as_element().and_then(|e| e.id()), Some("test"));
        assert_eq!(node.children().len(), 1);
    }

    #[test]
    fn test_is_selects_variant() {
        let node = create(Tag::Span, ElementArgs::attrs(
            AttributeRecord::new().with("is", "custom-element"),
        ));
        let element = node.as_element().unwrap();

        assert_eq!(element.variant(), Some("custom-element"));
        assert!(!element.has_attribute("is"));
    }

    #[test]
    fn test_custom_tag() {
        let node = create_custom("custom-element", ElementArgs::new());
        assert_eq!(node.as_element().unwrap().tag_name(), "custom-element");
    }

    #[test]
    fn test_append_and_replace_all() {
        let mut parent = create(Tag::Ul, ElementArgs::new());
        append(&mut parent, vec![create(Tag::Li, "one").into()]);
        append(&mut parent, vec![Child::Empty, create(Tag::Li, "two").into()]);
        assert_eq!(parent.children().len(), 2);

        replace_all(&mut parent, vec!["fresh".into()]);
        assert_eq!(parent.children().len(), 1);
        assert_eq!(parent.children()[0].as_text(), Some("fresh"));
    }

    #[test]
    fn test_with_attributes_merges() {
        let node = create(Tag::Div, ElementArgs::attrs(
            AttributeRecord::new().with("class", "first second"),
        ));
        let node = with_attributes(node, &AttributeRecord::new().with("class", "third"));

        let element = node.as_element().unwrap();
        assert_eq!(element.get_attribute("class"), Some("first second third"));
    }

    #[test]
    fn test_append_skips_leaf_nodes() {
        let mut node = Node::text("plain");
        append(&mut node, vec!["extra".into()]);

        assert!(node.children().is_empty());
        assert_eq!(node.outer_html(), "plain");
    }

    #[test]
    fn test_apply_attributes_skips_text_nodes() {
        let mut node = Node::text("plain");
        apply_attributes(&mut node, &AttributeRecord::new().with("id", "x"));
        assert!(node.is_text());
    }
}
