//! telar HTML - Raw markup to nodes
//!
//! Forgiving HTML5 parsing (html5ever) into `telar-dom` trees. Any string
//! parses to a fragment; the single-root entry point is the only strict
//! contract in the crate.

mod error;
mod parser;

pub use error::RootCountError;
pub use parser::{dangerous_html, parse_fragment, parse_single_root};
