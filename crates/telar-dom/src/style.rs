//! Inline Style Declaration
//!
//! Ordered property map backing the `style` attribute. Setting an existing
//! property overwrites in place, so merges keep the original declaration
//! order.

/// Inline style property map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclaration {
    properties: Vec<(String, String)>,
}

impl StyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `style` attribute text into a declaration.
    ///
    /// Malformed segments (no `:`) are dropped rather than rejected.
    pub fn from_css_text(text: &str) -> Self {
        let mut style = Self::new();
        for segment in text.split(';') {
            if let Some((name, value)) = segment.split_once(':') {
                let name = name.trim();
                let value = value.trim();
                if !name.is_empty() && !value.is_empty() {
                    style.set(name, value);
                }
            }
        }
        style
    }

    /// Set a property, overwriting in place if already declared
    pub fn set(&mut self, name: &str, value: &str) {
        for (existing, existing_value) in self.properties.iter_mut() {
            if existing == name {
                *existing_value = value.to_string();
                return;
            }
        }
        self.properties.push((name.to_string(), value.to_string()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, name: &str) -> bool {
        match self.properties.iter().position(|(n, _)| n == name) {
            Some(index) => {
                self.properties.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn clear(&mut self) {
        self.properties.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Serialized `style` attribute value: `name: value; name: value;`
    pub fn css_text(&self) -> String {
        self.properties
            .iter()
            .map(|(n, v)| format!("{}: {};", n, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
