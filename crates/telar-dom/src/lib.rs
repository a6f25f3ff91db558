//! telar DOM - Owned HTML node tree
//!
//! The tree primitives the builder layer constructs into: nodes, an ordered
//! attribute map, a class-token set, an inline-style declaration, event
//! listener registration, and HTML serialization.
//!
//! Nodes are plain owned values. Appending a node to a parent moves it; a
//! node that is never attached stays owned by the caller and is dropped
//! normally.

mod attributes;
mod classes;
mod events;
mod node;
mod serialize;
mod style;

pub use attributes::{Attr, AttributeMap};
pub use classes::ClassList;
pub use events::{Event, EventHandler, ListenerList};
pub use node::{ElementData, Node, NodeData};
pub use serialize::{HtmlSerializer, RAW_TEXT_ELEMENTS, VOID_ELEMENTS};
pub use style::StyleDeclaration;
