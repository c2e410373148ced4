//! List nodes.

use super::{arena::NodeId, traits::Link};

/// A node in a singly linked list.
///
/// The node does not own its successor: every node of a list is owned by the
/// list's [`Arena`](super::arena::Arena) and `next` is only an id, so a link
/// pointing backwards is just a cycle, never a double owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    next: Option<NodeId>,
    value: T,
}

impl<T> Node<T> {
    /// Creates a detached node holding `value`.
    pub const fn new(value: T) -> Self {
        Self { next: None, value }
    }

    pub(crate) const fn with_next(value: T, next: Option<NodeId>) -> Self {
        Self { next, value }
    }

    /// Get the value stored in the node
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Get a mutable reference to the value stored in the node
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Consumes the node, returning its value.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> Link for Node<T> {
    #[inline]
    fn next(&self) -> Option<NodeId> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NodeId>) {
        self.next = next;
    }
}
