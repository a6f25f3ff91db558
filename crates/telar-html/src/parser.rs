//! Markup Parser
//!
//! Uses html5ever's fragment parsing with RcDom and converts to telar
//! nodes. Parsing is forgiving per the HTML5 rules: any input produces a
//! fragment. The context element is `template`, so context-sensitive
//! content (table parts) and whitespace text are kept at the top level
//! instead of being dropped by document parsing.

use html5ever::tendril::TendrilSink;
use html5ever::{QualName, local_name, ns};
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use telar_dom::{ElementData, Node};

use crate::error::RootCountError;

/// Parse markup into a fragment node. Never fails; malformed markup is
/// repaired by the HTML5 parsing rules.
pub fn parse_fragment(html: &str) -> Node {
    tracing::debug!(len = html.len(), "parsing markup fragment");

    let dom = html5ever::parse_fragment(
        RcDom::default(),
        Default::default(),
        QualName::new(None, ns!(html), local_name!("template")),
        Vec::new(),
        true,
    )
    .from_utf8()
    .read_from(&mut html.as_bytes())
    .expect("reading from an in-memory buffer cannot fail");

    // Fragment parsing hangs the parsed nodes off a synthetic `html` root.
    let mut roots = Vec::new();
    for root in dom.document.children.borrow().iter() {
        match &root.data {
            RcNodeData::Element { name, .. } if name.local.as_ref() == "html" => {
                for child in root.children.borrow().iter() {
                    if let Some(node) = convert_node(child) {
                        roots.push(node);
                    }
                }
            }
            _ => {
                if let Some(node) = convert_node(root) {
                    roots.push(node);
                }
            }
        }
    }

    tracing::debug!(roots = roots.len(), "parsed fragment");
    Node::fragment(roots)
}

/// Trust-boundary alias of [`parse_fragment`]: the caller-supplied string is
/// injected as markup without escaping. Callers are responsible for
/// sanitization.
pub fn dangerous_html(html: &str) -> Node {
    parse_fragment(html)
}

/// Parse markup that must contain exactly one top-level node.
///
/// Every top-level node counts toward the root total, whitespace text
/// included. Fails fast with [`RootCountError`] on zero or multiple roots;
/// no partial result is returned.
pub fn parse_single_root(html: &str) -> Result<Node, RootCountError> {
    let mut fragment = parse_fragment(html);
    let mut roots = fragment.take_children();
    match roots.len() {
        1 => Ok(roots.remove(0)),
        0 => Err(RootCountError::EmptyMarkup),
        n => Err(RootCountError::MultipleRoots(n)),
    }
}

/// Convert an RcDom node to a telar node
fn convert_node(handle: &Handle) -> Option<Node> {
    match &handle.data {
        RcNodeData::Text { contents } => Some(Node::text(contents.borrow().to_string())),
        RcNodeData::Comment { contents } => Some(Node::comment(contents.to_string())),
        RcNodeData::Element { name, attrs, .. } => {
            // `is` selects the customized-built-in variant instead of
            // landing in the attribute map
            let variant = attrs
                .borrow()
                .iter()
                .find(|a| a.name.local.as_ref() == "is")
                .map(|a| a.value.to_string());

            let mut element = ElementData::with_variant(name.local.as_ref(), variant);
            for attr in attrs.borrow().iter() {
                let local = attr.name.local.as_ref();
                if local != "is" {
                    element.set_attribute(local, &attr.value);
                }
            }

            let mut node = Node::from_element(element);
            for child in handle.children.borrow().iter() {
                if let Some(converted) = convert_node(child) {
                    node.append_child(converted);
                }
            }
            Some(node)
        }
        RcNodeData::Document | RcNodeData::Doctype { .. } => None,
        RcNodeData::ProcessingInstruction { .. } => {
            tracing::trace!("skipping processing instruction");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_element() {
        let node = parse_single_root("<div>Test<p>Hi</p></div>").unwrap();
        assert_eq!(node.outer_html(), "<div>Test<p>Hi</p></div>");
    }

    #[test]
    fn test_multiple_roots_fail() {
        let err = parse_single_root("<div>Test</div><div>Other</div>").unwrap_err();
        assert_eq!(err, RootCountError::MultipleRoots(2));
    }

    #[test]
    fn test_empty_markup_fails() {
        assert_eq!(parse_single_root("").unwrap_err(), RootCountError::EmptyMarkup);
    }

    #[test]
    fn test_fragment_never_fails() {
        let fragment = parse_fragment("<p>a</p>trailing<span>b</span>");
        assert!(fragment.is_fragment());
        assert_eq!(fragment.children().len(), 3);
    }

    #[test]
    fn test_table_cell_kept_at_top_level() {
        let node = parse_single_root("<td>cell</td>").unwrap();
        assert_eq!(node.outer_html(), "<td>cell</td>");
    }

    #[test]
    fn test_class_and_style_are_structured() {
        let node = parse_single_root(r#"<div class="a b" style="width: 10px"></div>"#).unwrap();
        let element = node.as_element().unwrap();

        assert!(element.classes().contains("a"));
        assert!(element.classes().contains("b"));
        assert_eq!(element.style().get("width"), Some("10px"));
    }

    #[test]
    fn test_is_attribute_selects_variant() {
        let node = parse_single_root(r#"<span is="custom-element"></span>"#).unwrap();
        let element = node.as_element().unwrap();

        assert_eq!(element.variant(), Some("custom-element"));
        assert!(!element.has_attribute("is"));
    }
}
