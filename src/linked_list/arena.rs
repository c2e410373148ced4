//! Slot storage for list nodes.

use alloc::vec::Vec;
use core::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use super::{node::Node, traits::Link};

static NEXT_ARENA_ID: AtomicU64 = AtomicU64::new(0);

/// The identity of a node.
///
/// Ids are tagged with the arena that issued them and with the generation of
/// their slot, so an id of a removed node, or of a node in another list,
/// never resolves to an unrelated node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    arena: u64,
    index: u32,
    generation: u32,
}

impl NodeId {
    /// The slot index of the node inside its arena.
    pub fn slot(&self) -> usize {
        self.index as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}@{}", self.index, self.generation, self.arena)
    }
}

enum Slot<T> {
    Occupied { generation: u32, node: Node<T> },
    Vacant { generation: u32, next_free: Option<u32> },
}

/// A growable table of nodes addressed by [`NodeId`].
///
/// Freed slots are chained into a free list and reused; their generation is
/// bumped on every release.
pub struct Arena<T> {
    id: u64,
    slots: Vec<Slot<T>>,
    free: Option<u32>,
    live: usize,
}

impl<T> Arena<T> {
    /// Creates a new, empty arena.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty arena with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: NEXT_ARENA_ID.fetch_add(1, Ordering::Relaxed),
            slots: Vec::with_capacity(capacity),
            free: None,
            live: 0,
        }
    }

    /// Stores `node` and returns its id.
    pub fn insert(&mut self, node: Node<T>) -> NodeId {
        let (index, generation) = match self.free {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                let generation = match slot {
                    Slot::Vacant {
                        generation,
                        next_free,
                    } => {
                        self.free = *next_free;
                        *generation
                    }
                    Slot::Occupied { .. } => unreachable!("free list points at an occupied slot"),
                };
                *slot = Slot::Occupied { generation, node };
                (index, generation)
            }
            None => {
                assert!(self.slots.len() < u32::MAX as usize, "Arena is full");
                let index = self.slots.len() as u32;
                self.slots.push(Slot::Occupied {
                    generation: 0,
                    node,
                });
                (index, 0)
            }
        };
        self.live += 1;
        NodeId {
            arena: self.id,
            index,
            generation,
        }
    }

    /// Releases the node behind `id`, returning it if `id` was live.
    pub fn remove(&mut self, id: NodeId) -> Option<Node<T>> {
        if !self.contains(id) {
            return None;
        }
        let vacant = Slot::Vacant {
            generation: id.generation.wrapping_add(1),
            next_free: self.free,
        };
        match core::mem::replace(&mut self.slots[id.index as usize], vacant) {
            Slot::Occupied { node, .. } => {
                self.free = Some(id.index);
                self.live -= 1;
                Some(node)
            }
            Slot::Vacant { .. } => unreachable!(),
        }
    }

    /// Checks whether `id` refers to a live node of this arena.
    pub fn contains(&self, id: NodeId) -> bool {
        id.arena == self.id
            && matches!(
                self.slots.get(id.index as usize),
                Some(Slot::Occupied { generation, .. }) if *generation == id.generation
            )
    }

    /// Get the node behind `id`
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        if id.arena != self.id {
            return None;
        }
        match self.slots.get(id.index as usize) {
            Some(Slot::Occupied { generation, node }) if *generation == id.generation => Some(node),
            _ => None,
        }
    }

    /// Get a mutable reference to the node behind `id`
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        if id.arena != self.id {
            return None;
        }
        match self.slots.get_mut(id.index as usize) {
            Some(Slot::Occupied { generation, node }) if *generation == id.generation => Some(node),
            _ => None,
        }
    }

    /// Get the live successor of `id`.
    ///
    /// A link to a released slot reads as the end of the chain.
    #[inline]
    pub fn successor(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.next().filter(|next| self.contains(*next))
    }

    /// Get the number of live nodes
    pub fn len(&self) -> usize {
        self.live
    }

    /// Check if the arena holds no live nodes
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Get the number of slots, live or vacant. Every [`NodeId::slot`] of
    /// this arena is below it.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Releases every live node for which `keep` returns `false` and returns
    /// how many were released.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(NodeId) -> bool,
    {
        let mut released = 0;
        for index in 0..self.slots.len() {
            let Slot::Occupied { generation, .. } = self.slots[index] else {
                continue;
            };
            let id = NodeId {
                arena: self.id,
                index: index as u32,
                generation,
            };
            if !keep(id) && self.remove(id).is_some() {
                released += 1;
            }
        }
        released
    }

    /// Releases every node. Ids issued before the call become stale.
    pub fn clear(&mut self) {
        let mut free = None;
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            let generation = match slot {
                Slot::Occupied { generation, .. } => generation.wrapping_add(1),
                Slot::Vacant { generation, .. } => *generation,
            };
            *slot = Slot::Vacant {
                generation,
                next_free: free,
            };
            free = Some(index as u32);
        }
        self.free = free;
        self.live = 0;
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Arena<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("id", &self.id)
            .field("live", &self.live)
            .field("slots", &self.slots.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Arena;
    use crate::linked_list::{node::Node, traits::Link};

    #[test]
    fn test_insert_and_get() {
        let mut arena = Arena::new();
        assert!(arena.is_empty());
        let a = arena.insert(Node::new("a"));
        let b = arena.insert(Node::new("b"));
        assert_eq!(arena.get(a).map(Node::value), Some(&"a"));
        assert_eq!(arena.get(b).map(Node::value), Some(&"b"));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_remove_makes_id_stale() {
        let mut arena = Arena::new();
        let a = arena.insert(Node::new(1));
        assert_eq!(arena.remove(a).map(Node::into_value), Some(1));
        assert!(!arena.contains(a));
        assert!(arena.get(a).is_none());
        assert!(arena.remove(a).is_none());
        assert!(arena.is_empty());
    }

    #[test]
    fn test_slot_reuse_bumps_generation() {
        let mut arena = Arena::new();
        let a = arena.insert(Node::new(1));
        arena.remove(a);
        let b = arena.insert(Node::new(2));
        assert_eq!(a.slot(), b.slot());
        assert_ne!(a, b);
        assert!(arena.get(a).is_none());
        assert_eq!(arena.get(b).map(Node::value), Some(&2));
    }

    #[test]
    fn test_foreign_ids_are_rejected() {
        let mut first = Arena::new();
        let mut second = Arena::new();
        let a = first.insert(Node::new(1));
        let b = second.insert(Node::new(1));
        assert_eq!(a.slot(), b.slot());
        assert!(!second.contains(a));
        assert!(first.get_mut(b).is_none());
    }

    #[test]
    fn test_successor_skips_released_nodes() {
        let mut arena = Arena::new();
        let tail = arena.insert(Node::new(2));
        let head = arena.insert(Node::with_next(1, Some(tail)));
        assert_eq!(arena.successor(head), Some(tail));
        arena.remove(tail);
        assert_eq!(arena.get(head).and_then(Link::next), Some(tail));
        assert_eq!(arena.successor(head), None);
    }

    #[test]
    fn test_clear() {
        let mut arena = Arena::new();
        let ids: Vec<_> = (0..4).map(|i| arena.insert(Node::new(i))).collect();
        arena.clear();
        assert!(arena.is_empty());
        assert!(ids.iter().all(|id| !arena.contains(*id)));
        let fresh = arena.insert(Node::new(9));
        assert_eq!(fresh.slot(), 0);
        assert!(arena.contains(fresh));
    }

    #[test]
    fn test_retain() {
        let mut arena = Arena::new();
        let ids: Vec<_> = (0..6).map(|i| arena.insert(Node::new(i))).collect();
        let released = arena.retain(|id| {
            ids.iter()
                .position(|known| *known == id)
                .is_some_and(|i| i % 2 == 0)
        });
        assert_eq!(released, 3);
        assert_eq!(arena.len(), 3);
        assert_eq!(arena.slot_count(), 6);
        assert!(arena.contains(ids[0]));
        assert!(!arena.contains(ids[1]));
        assert_eq!(arena.retain(|_| true), 0);
    }
}
