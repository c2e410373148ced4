//! The list type and its positional operations.

use alloc::{sync::Weak, vec::Vec};
use core::{
    fmt,
    ops::{Index, IndexMut},
};

use crate::error::{ListError, Result};

use super::{
    arena::{Arena, NodeId},
    chain::{BranchNodes, ChainRef},
    iter::Iter,
    node::Node,
    traits::{Chain, Link},
};

/// A singly linked list whose nodes live in an index-addressed arena.
///
/// `count` is the number of distinct nodes reachable from `head`. Positional
/// walks never take more than `count` steps, which keeps them finite even
/// after a cycle has been closed with [`close_loop`](Self::close_loop) or
/// [`set_next`](Self::set_next).
pub struct SinglyLinkedList<T> {
    pub(super) arena: Arena<T>,
    pub(super) head: Option<NodeId>,
    pub(super) count: usize,
    pub(super) branches: Vec<Weak<BranchNodes>>,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new, empty linked list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        SinglyLinkedList {
            arena: Arena::with_capacity(capacity),
            head: None,
            count: 0,
            branches: Vec::new(),
        }
    }

    /// Get the number of nodes in the list
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get the id of the first node
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// Get the first value
    pub fn first(&self) -> Option<&T> {
        self.value(self.head?)
    }

    /// Get the last value.
    ///
    /// On a cyclic list this is the node whose link closes the loop.
    pub fn last(&self) -> Option<&T> {
        let last = self.count.checked_sub(1)?;
        self.value(self.walk(last)?)
    }

    /// Get the node behind `id`
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.arena.get(id)
    }

    /// Get the value stored in `id`
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.arena.get(id).map(Node::value)
    }

    /// Get a mutable reference to the value stored in `id`
    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.arena.get_mut(id).map(Node::value_mut)
    }

    /// Returns the id of the node at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] when `index >= len()`.
    pub fn element_at(&self, index: usize) -> Result<NodeId> {
        self.check_index(index)?;
        self.walk(index).ok_or(ListError::IndexOutOfRange {
            index,
            len: self.count,
        })
    }

    /// Get a reference to the value at `index`
    pub fn get(&self, index: usize) -> Result<&T> {
        let id = self.element_at(index)?;
        self.value(id).ok_or(ListError::StaleNode(id))
    }

    /// Get a mutable reference to the value at `index`
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let id = self.element_at(index)?;
        self.value_mut(id).ok_or(ListError::StaleNode(id))
    }

    /// Replaces the value at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        self.get_mut(index).map(|slot| core::mem::replace(slot, value))
    }

    /// Returns the first node whose value equals `value`.
    ///
    /// An empty list simply has no match.
    pub fn find_first(&self, value: &T) -> Option<NodeId>
    where
        T: PartialEq,
    {
        let mut current = self.head;
        for _ in 0..self.count {
            let id = current?;
            if self.value(id)? == value {
                return Some(id);
            }
            current = self.arena.successor(id);
        }
        None
    }

    /// Check if any node holds `value`
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.find_first(value).is_some()
    }

    /// Pushes `value` in front of the current head. O(1).
    pub fn add_front(&mut self, value: T) -> NodeId {
        let id = self.arena.insert(Node::with_next(value, self.head));
        self.head = Some(id);
        self.count += 1;
        id
    }

    /// Appends `value` after the last node. O(n).
    ///
    /// The new node takes over the last node's link, so a closed loop stays
    /// closed and simply grows by one node.
    pub fn add_last(&mut self, value: T) -> NodeId {
        match self.count.checked_sub(1).and_then(|last| self.walk(last)) {
            Some(tail) => self.splice_after(tail, value),
            None => self.add_front(value),
        }
    }

    /// Inserts `value` right after the node at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] when `index >= len()`; the list
    /// is left untouched.
    pub fn add_after(&mut self, value: T, index: usize) -> Result<NodeId> {
        let prev = self.element_at(index)?;
        Ok(self.splice_after(prev, value))
    }

    /// Removes the first node whose value equals `value`.
    ///
    /// Returns `false` without touching the list when no node matches.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut prev = None;
        let mut current = self.head;
        for _ in 0..self.count {
            let Some(id) = current else {
                break;
            };
            if self.value(id) == Some(value) {
                return self.detach(prev, id).is_some();
            }
            prev = Some(id);
            current = self.arena.successor(id);
        }
        false
    }

    /// Removes the node at `index` and returns its value.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] when `index >= len()`; the list
    /// is left untouched.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        let out_of_range = ListError::IndexOutOfRange {
            index,
            len: self.count,
        };
        let (prev, id) = if index == 0 {
            (None, self.head.ok_or(out_of_range)?)
        } else {
            let prev = self.walk(index - 1).ok_or(out_of_range)?;
            (Some(prev), self.arena.successor(prev).ok_or(out_of_range)?)
        };
        self.detach(prev, id).ok_or(out_of_range)
    }

    /// Removes the first node and returns its value.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        self.detach(None, head)
    }

    /// Removes every node, including those of branches.
    ///
    /// Ids issued before the call become stale.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.branches.clear();
        self.head = None;
        self.count = 0;
    }

    /// Get an iterator over the values of the list
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.arena, self.head, self.count)
    }

    /// Get a read-only view of the main chain
    pub fn chain(&self) -> ChainRef<'_, T> {
        ChainRef::new(&self.arena, self.head)
    }

    pub(super) fn check_index(&self, index: usize) -> Result<()> {
        if index < self.count {
            Ok(())
        } else {
            Err(ListError::IndexOutOfRange {
                index,
                len: self.count,
            })
        }
    }

    /// Follows `steps` links from the head.
    pub(super) fn walk(&self, steps: usize) -> Option<NodeId> {
        let mut current = self.head?;
        for _ in 0..steps {
            current = self.arena.successor(current)?;
        }
        Some(current)
    }

    fn splice_after(&mut self, prev: NodeId, value: T) -> NodeId {
        let next = self.arena.successor(prev);
        let id = self.arena.insert(Node::with_next(value, next));
        if let Some(prev) = self.arena.get_mut(prev) {
            prev.set_next(Some(id));
        }
        self.count += 1;
        id
    }

    /// Unlinks `id` from `prev` (or from the head) and frees its slot.
    ///
    /// A node linking to itself leaves the end of the chain behind.
    fn detach(&mut self, prev: Option<NodeId>, id: NodeId) -> Option<T> {
        let node = self.arena.remove(id)?;
        let next = node.next().filter(|next| self.arena.contains(*next));
        match prev {
            Some(prev) => {
                if let Some(prev) = self.arena.get_mut(prev) {
                    prev.set_next(next);
                }
            }
            None => self.head = next,
        }
        self.count -= 1;
        Some(node.into_value())
    }
}

impl<T> Chain for SinglyLinkedList<T> {
    type Value = T;

    #[inline]
    fn head(&self) -> Option<NodeId> {
        self.head
    }

    #[inline]
    fn successor(&self, node: NodeId) -> Option<NodeId> {
        self.arena.successor(node)
    }

    #[inline]
    fn value(&self, node: NodeId) -> Option<&T> {
        self.arena.get(node).map(Node::value)
    }
}

impl<T> Index<usize> for SinglyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for SinglyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.count.checked_sub(1).and_then(|last| self.walk(last));
        for value in iter {
            tail = Some(match tail {
                Some(tail) => self.splice_after(tail, value),
                None => self.add_front(value),
            });
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Clones the values of the main chain into a fresh arena.
///
/// Branches are not carried over and a closed loop is opened.
impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
