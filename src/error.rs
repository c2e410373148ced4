//! The error type shared by list operations.

use crate::linked_list::arena::NodeId;

/// Errors reported by list operations.
///
/// Absence of a value is not an error: value lookups return `None` or
/// `false` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// An index outside `[0, len - 1]` was used.
    #[error("index {index} is out of range for a list of length {len}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// The length of the list at the time of the call.
        len: usize,
    },

    /// The operation needs at least one node.
    #[error("operation requires a non-empty list")]
    Empty,

    /// The operation needs a chain that terminates.
    #[error("operation requires an acyclic chain")]
    Cyclic,

    /// The node id was removed or belongs to another list.
    #[error("node {0:?} is not live in this list")]
    StaleNode(NodeId),
}

/// Result alias used throughout the crate.
pub type Result<T, E = ListError> = core::result::Result<T, E>;
