//! In-place reversal.

use crate::error::Result;

use super::{arena::NodeId, list::SinglyLinkedList, traits::Link};

impl<T> SinglyLinkedList<T> {
    /// Reverses the list in place by rewriting every link. O(n) time, O(1)
    /// space.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Cyclic`](crate::ListError::Cyclic) if the list
    /// loops; the list is left untouched.
    pub fn reverse(&mut self) -> Result<()> {
        self.ensure_acyclic()?;
        let mut prev = None;
        let mut current = self.head;
        while let Some(id) = current {
            let next = self.arena.successor(id);
            if let Some(node) = self.arena.get_mut(id) {
                node.set_next(prev);
            }
            prev = Some(id);
            current = next;
        }
        self.head = prev;
        Ok(())
    }

    /// Reverses the list with a recursive walk.
    ///
    /// The result is the same as [`reverse`](Self::reverse), but each node
    /// costs one stack frame, so very long lists can overflow the stack.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Cyclic`](crate::ListError::Cyclic) if the list
    /// loops; the list is left untouched.
    pub fn reverse_recursively(&mut self) -> Result<()> {
        self.ensure_acyclic()?;
        let head = self.head;
        self.head = self.reverse_from(head, None);
        Ok(())
    }

    /// Reverses the chain starting at `current` so that it ends in `prev`,
    /// returning its new head.
    fn reverse_from(&mut self, current: Option<NodeId>, prev: Option<NodeId>) -> Option<NodeId> {
        let id = current?;
        let next = self.arena.successor(id);
        if let Some(node) = self.arena.get_mut(id) {
            node.set_next(prev);
        }
        match next {
            None => Some(id),
            Some(_) => self.reverse_from(next, Some(id)),
        }
    }
}
