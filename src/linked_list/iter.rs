//! Iteration over list values.

use core::iter::FusedIterator;

use super::arena::{Arena, NodeId};

/// An iterator over the values of a linked list.
///
/// Yields at most the list's length, so it ends even on a cyclic list.
pub struct Iter<'a, T> {
    arena: &'a Arena<T>,
    current: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(arena: &'a Arena<T>, head: Option<NodeId>, len: usize) -> Self {
        Self {
            arena,
            current: head,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.current?;
        let node = self.arena.get(id)?;
        self.current = self.arena.successor(id);
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            current: self.current,
            remaining: self.remaining,
        }
    }
}
