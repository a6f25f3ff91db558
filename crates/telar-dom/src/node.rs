//! Tree Node
//!
//! Owned node values: an element, text, comment, or fragment container.
//! A node is owned by whichever node holds it as a child; appending moves it.

use crate::{AttributeMap, ClassList, Event, EventHandler, ListenerList, StyleDeclaration};

/// Node in the constructed tree
#[derive(Debug, Clone)]
pub struct Node {
    data: NodeData,
    children: Vec<Node>,
}

/// Node-specific data
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Element with attributes, classes, styles, and listeners
    Element(ElementData),
    /// Text content
    Text(String),
    /// Comment
    Comment(String),
    /// Container of sibling nodes with no single root
    Fragment,
}

impl Node {
    /// Create an element node
    pub fn element(tag: &str) -> Self {
        Self::from_element(ElementData::new(tag))
    }

    /// Create a customized-built-in element variant (`is`)
    pub fn element_with_variant(tag: &str, variant: Option<String>) -> Self {
        Self::from_element(ElementData::with_variant(tag, variant))
    }

    /// Wrap element data in a node
    pub fn from_element(data: ElementData) -> Self {
        Self {
            data: NodeData::Element(data),
            children: Vec::new(),
        }
    }

    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            data: NodeData::Text(content.into()),
            children: Vec::new(),
        }
    }

    /// Create a comment node
    pub fn comment(content: impl Into<String>) -> Self {
        Self {
            data: NodeData::Comment(content.into()),
            children: Vec::new(),
        }
    }

    /// Create a fragment holding the given nodes
    pub fn fragment(children: Vec<Node>) -> Self {
        Self {
            data: NodeData::Fragment,
            children,
        }
    }

    pub fn data(&self) -> &NodeData {
        &self.data
    }

    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    #[inline]
    pub fn is_fragment(&self) -> bool {
        matches!(self.data, NodeData::Fragment)
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    /// Append a child, taking ownership
    pub fn append_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Remove and return all children
    pub fn take_children(&mut self) -> Vec<Node> {
        std::mem::take(&mut self.children)
    }

    /// Remove all children
    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Dispatch an event to this element's listeners, in registration order.
    /// Non-element nodes have no listeners; returns how many handlers ran.
    pub fn dispatch(&self, event: &Event) -> usize {
        match self.as_element() {
            Some(element) => element.listeners().dispatch(event),
            None => 0,
        }
    }
}

/// Element-specific data
#[derive(Debug, Clone, Default)]
pub struct ElementData {
    name: String,
    /// Customized-built-in variant selected at construction time
    variant: Option<String>,
    attrs: AttributeMap,
    classes: ClassList,
    style: StyleDeclaration,
    listeners: ListenerList,
}

impl ElementData {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_variant(name: &str, variant: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            variant,
            ..Default::default()
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.name
    }

    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    /// Get an attribute value
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    /// Set an attribute.
    ///
    /// `class` and `style` are routed into the class set and style
    /// declaration, which write back through to the attribute entry.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match name {
            "class" => {
                self.classes.clear();
                for token in value.split_whitespace() {
                    self.classes.add(token);
                }
                self.attrs.set("class", &self.classes.value());
            }
            "style" => {
                self.style = StyleDeclaration::from_css_text(value);
                self.attrs.set("style", &self.style.css_text());
            }
            _ => self.attrs.set(name, value),
        }
    }

    /// Remove an attribute
    pub fn remove_attribute(&mut self, name: &str) {
        match name {
            "class" => self.classes.clear(),
            "style" => self.style.clear(),
            _ => {}
        }
        self.attrs.remove(name);
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attrs.has(name)
    }

    /// Toggle a presence attribute
    pub fn toggle_attribute(&mut self, name: &str, force: Option<bool>) -> bool {
        self.attrs.toggle(name, force)
    }

    pub fn attributes(&self) -> &AttributeMap {
        &self.attrs
    }

    /// Element identifier (the `id` attribute)
    pub fn id(&self) -> Option<&str> {
        self.attrs.get("id")
    }

    pub fn set_id(&mut self, id: &str) {
        self.attrs.set("id", id);
    }

    /// Add a class token; idempotent. Keeps the `class` attribute in sync.
    pub fn add_class(&mut self, token: &str) {
        if self.classes.add(token) {
            self.attrs.set("class", &self.classes.value());
        }
    }

    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    /// Replace the whole inline style from attribute text
    pub fn set_style_text(&mut self, text: &str) {
        self.style = StyleDeclaration::from_css_text(text);
        self.attrs.set("style", &self.style.css_text());
    }

    /// Assign one style property, leaving others intact
    pub fn set_style_property(&mut self, name: &str, value: &str) {
        self.style.set(name, value);
        self.attrs.set("style", &self.style.css_text());
    }

    pub fn style(&self) -> &StyleDeclaration {
        &self.style
    }

    /// Set a `data-` attribute
    pub fn set_data(&mut self, key: &str, value: &str) {
        self.attrs.set(&format!("data-{}", key), value);
    }

    /// Register an event listener; additive, never replaces
    pub fn add_listener(&mut self, event_type: &str, handler: EventHandler) {
        self.listeners.add(event_type, handler);
    }

    pub fn listeners(&self) -> &ListenerList {
        &self.listeners
    }
}
