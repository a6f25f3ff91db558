//! Attribute Applier
//!
//! Maps an attribute record onto a live element, entry by entry, in record
//! order. The rules are additive or overwrite-by-key rather than
//! replace-whole-value, which is what makes re-application merge instead of
//! clobber: classes union, style and data attributes overwrite per key and
//! leave the rest intact.

use telar_dom::ElementData;

use crate::record::{AttrValue, AttributeRecord};

/// Attributes whose boolean `true` is written as the literal string "true"
/// rather than as a bare presence attribute.
pub const EXPLICIT_BOOLEAN_ATTRIBUTES: &[&str] = &["contenteditable", "draggable"];

/// Derive an event name from a handler key: strip the two-byte `on` prefix
/// and lowercase the remainder (`onClick` -> `click`).
pub fn event_name_for_key(key: &str) -> String {
    key.get(2..).unwrap_or("").to_ascii_lowercase()
}

/// Apply each record entry to the element, in record order.
///
/// `Null` values skip the attribute entirely; they never clear it. The `is`
/// key is consumed at construction time and is not written here.
pub fn apply_to_element(element: &mut ElementData, attrs: &AttributeRecord) {
    for (key, value) in attrs.iter() {
        if value.is_null() {
            continue;
        }
        match (key, value) {
            ("is", _) => {}
            ("id", value) => element.set_id(&value.coerce()),
            ("class", value) => apply_classes(element, value),
            (key, AttrValue::Handler(handler)) => {
                element.add_listener(&event_name_for_key(key), handler.clone());
            }
            ("style", value) => apply_style(element, value),
            ("dataSet", value) => apply_data(element, value),
            (key, AttrValue::Bool(true)) => {
                if EXPLICIT_BOOLEAN_ATTRIBUTES.contains(&key) {
                    element.set_attribute(key, "true");
                } else {
                    element.set_attribute(key, "");
                }
            }
            (key, AttrValue::Bool(false)) => element.remove_attribute(key),
            (key, value) => element.set_attribute(key, &value.coerce()),
        }
    }
}

/// Split on whitespace, discard empty tokens, add each token idempotently.
fn apply_classes(element: &mut ElementData, value: &AttrValue) {
    match value {
        AttrValue::List(items) => {
            for item in items {
                if !item.is_null() {
                    add_class_tokens(element, &item.coerce());
                }
            }
        }
        other => add_class_tokens(element, &other.coerce()),
    }
}

fn add_class_tokens(element: &mut ElementData, value: &str) {
    for token in value.split_whitespace() {
        element.add_class(token);
    }
}

/// A string replaces the whole inline style; a map assigns only the named
/// properties, enabling partial style merges.
fn apply_style(element: &mut ElementData, value: &AttrValue) {
    match value {
        AttrValue::Map(properties) => {
            for (name, value) in properties {
                if !value.is_null() {
                    element.set_style_property(name, &value.coerce());
                }
            }
        }
        other => element.set_style_text(&other.coerce()),
    }
}

/// Each defined entry sets `data-<key>`; undefined entries are skipped,
/// never cleared.
fn apply_data(element: &mut ElementData, value: &AttrValue) {
    if let AttrValue::Map(entries) = value {
        for (key, value) in entries {
            if !value.is_null() {
                element.set_data(key, &value.coerce());
            }
        }
    } else {
        tracing::trace!("dataSet value is not a map, ignoring");
    }
}
