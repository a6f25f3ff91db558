//! Parse Errors

use thiserror::Error;

/// The single-root contract was violated.
///
/// Fragment parsing itself never fails; this is only returned by
/// [`parse_single_root`](crate::parse_single_root) when the markup produced
/// a root count other than one. No partial result is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RootCountError {
    #[error("markup produced no top-level node")]
    EmptyMarkup,
    #[error("markup produced {0} top-level nodes, expected exactly one")]
    MultipleRoots(usize),
}
