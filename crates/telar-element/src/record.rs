//! Attribute Record
//!
//! The declarative attribute/event/style/data specification passed at
//! construction or merge time. Keys are case-sensitive; entry order is the
//! order attributes are applied in.

use std::fmt;
use std::rc::Rc;

use telar_dom::{Event, EventHandler};

/// Value of one attribute record entry
#[derive(Clone)]
pub enum AttrValue {
    /// Explicit "no-op, skip" - never "clear"
    Null,
    Str(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Class lists; entries may be `Null`
    List(Vec<AttrValue>),
    /// Style property maps and `dataSet`, in entry order
    Map(Vec<(String, AttrValue)>),
    /// Event handler; the key names the event (`onClick` -> `click`)
    Handler(EventHandler),
}

impl AttrValue {
    /// Handler wrapping a closure
    pub fn handler(f: impl Fn(&Event) + 'static) -> Self {
        Self::Handler(Rc::new(f))
    }

    /// Map from key/value pairs, preserving order
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<AttrValue>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// String coercion used by the pass-through attribute branch
    pub fn coerce(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Str(s) => s.clone(),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::List(items) => items
                .iter()
                .map(|v| v.coerce())
                .collect::<Vec<_>>()
                .join(","),
            Self::Map(_) => String::new(),
            Self::Handler(_) => String::new(),
        }
    }
}

impl fmt::Debug for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "Null"),
            Self::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Self::Handler(_) => write!(f, "Handler(..)"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for AttrValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for AttrValue {
    fn from(i: i32) -> Self {
        Self::Int(i as i64)
    }
}

impl From<f64> for AttrValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

impl<T: Into<AttrValue>> From<Vec<T>> for AttrValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// Ordered attribute name -> value record
#[derive(Debug, Clone, Default)]
pub struct AttributeRecord {
    entries: Vec<(String, AttrValue)>,
}

impl AttributeRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry; re-inserting a key overwrites in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        let key = key.into();
        let value = value.into();
        for (existing, existing_value) in self.entries.iter_mut() {
            if *existing == key {
                *existing_value = value;
                return;
            }
        }
        self.entries.push((key, value));
    }

    /// Chaining form of [`insert`](Self::insert)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for AttributeRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}
