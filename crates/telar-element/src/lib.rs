//! telar element - Declarative element construction
//!
//! Builds and mutates `telar-dom` trees from declarative descriptions:
//! an ordered attribute record (classes, inline styles, boolean and data
//! attributes, event handlers), a heterogeneous child list (flattening,
//! text coercion, fragment unwrapping), and a data-driven known-tag table.
//!
//! The argument shape is an explicit tagged union ([`ElementArgs`]) rather
//! than runtime shape inspection, so attrs-vs-children dispatch is decided
//! by the type system.

mod apply;
mod children;
mod factory;
mod record;
mod tags;

pub use apply::{EXPLICIT_BOOLEAN_ATTRIBUTES, apply_to_element, event_name_for_key};
pub use children::{Child, normalize_children};
pub use factory::{
    ElementArgs, append, apply_attributes, create, create_custom, replace_all, with_attributes,
};
pub use record::{AttrValue, AttributeRecord};
pub use tags::Tag;
