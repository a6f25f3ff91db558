//! HTML Serialization (innerHTML/outerHTML)
//!
//! Serializes nodes to HTML strings with proper escaping, void-element and
//! raw-text handling.

use crate::{Node, NodeData};

/// Void elements (self-closing, no end tag)
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

/// Raw text elements (no escaping for content)
pub const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// HTML serializer
pub struct HtmlSerializer {
    /// Whether to format output with indentation
    pub pretty_print: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for HtmlSerializer {
    fn default() -> Self {
        Self {
            pretty_print: false,
            indent: "  ".to_string(),
        }
    }
}

impl HtmlSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self {
            pretty_print: true,
            indent: "  ".to_string(),
        }
    }

    /// Serialize innerHTML of a node (children only)
    pub fn serialize_inner(&self, node: &Node) -> String {
        let mut output = String::new();
        self.serialize_children(node, &mut output, 0);
        output
    }

    /// Serialize outerHTML of a node (including the node itself)
    pub fn serialize_outer(&self, node: &Node) -> String {
        let mut output = String::new();
        self.serialize_node(node, &mut output, 0);
        output
    }

    fn serialize_node(&self, node: &Node, output: &mut String, depth: usize) {
        match node.data() {
            NodeData::Fragment => {
                self.serialize_children(node, output, depth);
            }
            NodeData::Element(elem) => {
                let tag = elem.tag_name();
                let is_void = VOID_ELEMENTS.contains(&tag);
                let is_raw = RAW_TEXT_ELEMENTS.contains(&tag);

                if self.pretty_print && depth > 0 {
                    output.push('\n');
                    for _ in 0..depth {
                        output.push_str(&self.indent);
                    }
                }

                // Start tag
                output.push('<');
                output.push_str(tag);

                // Customized-built-in variant is visible as a leading `is`
                if let Some(variant) = elem.variant() {
                    output.push_str(" is=\"");
                    escape_attribute(variant, output);
                    output.push('"');
                }

                for attr in elem.attributes().iter() {
                    output.push(' ');
                    output.push_str(&attr.name);
                    if !attr.value.is_empty() {
                        output.push_str("=\"");
                        escape_attribute(&attr.value, output);
                        output.push('"');
                    }
                }

                if is_void {
                    output.push_str(" />");
                } else {
                    output.push('>');

                    if is_raw {
                        self.serialize_children_raw(node, output);
                    } else {
                        self.serialize_children(node, output, depth + 1);
                    }

                    if self.pretty_print && !node.children().is_empty() {
                        output.push('\n');
                        for _ in 0..depth {
                            output.push_str(&self.indent);
                        }
                    }
                    output.push_str("</");
                    output.push_str(tag);
                    output.push('>');
                }
            }
            NodeData::Text(text) => {
                escape_text(text, output);
            }
            NodeData::Comment(text) => {
                output.push_str("<!--");
                output.push_str(text);
                output.push_str("-->");
            }
        }
    }

    fn serialize_children(&self, parent: &Node, output: &mut String, depth: usize) {
        for child in parent.children() {
            self.serialize_node(child, output, depth);
        }
    }

    fn serialize_children_raw(&self, parent: &Node, output: &mut String) {
        for child in parent.children() {
            if let NodeData::Text(text) = child.data() {
                output.push_str(text);
            }
        }
    }
}

impl Node {
    /// outerHTML of this node
    pub fn outer_html(&self) -> String {
        HtmlSerializer::new().serialize_outer(self)
    }

    /// innerHTML of this node
    pub fn inner_html(&self) -> String {
        HtmlSerializer::new().serialize_inner(self)
    }
}

/// Escape text content for HTML
fn escape_text(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

/// Escape attribute value
fn escape_attribute(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '"' => output.push_str("&quot;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        let mut output = String::new();
        escape_text("Hello <world> & \"friends\"", &mut output);
        assert_eq!(output, "Hello &lt;world&gt; &amp; \"friends\"");
    }

    #[test]
    fn test_escape_attribute() {
        let mut output = String::new();
        escape_attribute("Hello <world> & \"friends\"", &mut output);
        assert_eq!(output, "Hello &lt;world&gt; &amp; &quot;friends&quot;");
    }

    #[test]
    fn test_simple_element() {
        let mut node = Node::element("div");
        node.append_child(Node::text("text"));
        assert_eq!(node.outer_html(), "<div>text</div>");
        assert_eq!(node.inner_html(), "text");
    }

    #[test]
    fn test_empty_attribute_value_serializes_bare() {
        let mut node = Node::element("div");
        if let Some(elem) = node.as_element_mut() {
            elem.set_attribute("hidden", "");
        }
        assert_eq!(node.outer_html(), "<div hidden></div>");
    }

    #[test]
    fn test_void_element() {
        let mut node = Node::element("input");
        if let Some(elem) = node.as_element_mut() {
            elem.set_attribute("type", "text");
        }
        assert_eq!(node.outer_html(), "<input type=\"text\" />");
    }

    #[test]
    fn test_variant_serializes_first() {
        let mut node = Node::element_with_variant("span", Some("custom-element".to_string()));
        if let Some(elem) = node.as_element_mut() {
            elem.set_attribute("title", "t");
        }
        assert_eq!(node.outer_html(), "<span is=\"custom-element\" title=\"t\"></span>");
    }

    #[test]
    fn test_fragment_serializes_children() {
        let fragment = Node::fragment(vec![Node::element("p"), Node::text("x")]);
        assert_eq!(fragment.outer_html(), "<p></p>x");
    }

    #[test]
    fn test_pretty_print_indents_elements() {
        let mut inner = Node::element("span");
        inner.append_child(Node::text("x"));
        let mut node = Node::element("div");
        node.append_child(inner);

        let output = HtmlSerializer::pretty().serialize_outer(&node);
        assert_eq!(output, "<div>\n  <span>x\n  </span>\n</div>");
    }

    #[test]
    fn test_raw_text_element() {
        let mut node = Node::element("script");
        node.append_child(Node::text("if (a < b) { run(); }"));
        assert_eq!(node.outer_html(), "<script>if (a < b) { run(); }</script>");
    }
}
