//! Class Token Set
//!
//! Ordered set of CSS class tokens. First-insertion order is preserved and
//! duplicates collapse, so repeated adds are idempotent.

/// Element class list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a token. Returns true if the set changed.
    pub fn add(&mut self, token: &str) -> bool {
        if token.is_empty() || self.contains(token) {
            return false;
        }
        self.tokens.push(token.to_string());
        true
    }

    /// Remove a token. Returns true if it was present.
    pub fn remove(&mut self, token: &str) -> bool {
        match self.tokens.iter().position(|t| t == token) {
            Some(index) => {
                self.tokens.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.as_str())
    }

    /// Serialized `class` attribute value
    pub fn value(&self) -> String {
        self.tokens.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut classes = ClassList::new();
        assert!(classes.add("a"));
        assert!(!classes.add("a"));
        assert!(classes.add("b"));

        assert_eq!(classes.len(), 2);
        assert_eq!(classes.value(), "a b");
    }

    #[test]
    fn test_empty_token_rejected() {
        let mut classes = ClassList::new();
        assert!(!classes.add(""));
        assert!(classes.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut classes = ClassList::new();
        classes.add("a");
        classes.add("b");

        assert!(classes.remove("a"));
        assert!(!classes.remove("a"));
        assert_eq!(classes.value(), "b");
    }
}
