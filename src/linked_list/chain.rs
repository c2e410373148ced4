//! Views over chains and secondary branches sharing a list's arena.

use alloc::{
    sync::{Arc, Weak},
    vec::Vec,
};

use crate::error::{ListError, Result};

use super::{
    arena::{Arena, NodeId},
    cycle,
    list::SinglyLinkedList,
    node::Node,
    traits::Chain,
};

/// A borrowed view of one chain inside an arena.
///
/// Both the main chain of a list and its branches are exposed as `ChainRef`,
/// which is what [`intersection`](super::intersection) compares.
pub struct ChainRef<'a, T> {
    arena: &'a Arena<T>,
    head: Option<NodeId>,
}

impl<'a, T> ChainRef<'a, T> {
    pub(super) fn new(arena: &'a Arena<T>, head: Option<NodeId>) -> Self {
        Self {
            head: head.filter(|head| arena.contains(*head)),
            arena,
        }
    }
}

impl<T> Chain for ChainRef<'_, T> {
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

impl<T> Clone for ChainRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ChainRef<'_, T> {}

/// A secondary chain stored in the arena of a list.
///
/// A branch owns a prefix of fresh nodes and may join a node of the list, so
/// that two chains share a common tail:
///
/// ```text
///   list:    1 -> 2 -> 3 \
///                          7 -> 8
///   branch:       9 ---- /
/// ```
///
/// The list keeps track of its branches. Dropping a branch without
/// [`release_branch`](SinglyLinkedList::release_branch) hands its prefix back
/// to the list, which frees it on the next [`prune`](SinglyLinkedList::prune).
/// Building another branch or relinking with
/// [`set_next`](SinglyLinkedList::set_next) prunes as well.
#[derive(Debug)]
#[must_use = "dropping a branch lets the list free its nodes"]
pub struct Branch {
    nodes: Arc<BranchNodes>,
}

#[derive(Debug)]
pub(super) struct BranchNodes {
    head: Option<NodeId>,
    prefix: Vec<NodeId>,
}

impl Branch {
    /// Get the first node of the branch
    pub fn head(&self) -> Option<NodeId> {
        self.nodes.head
    }

    /// Get the number of nodes the branch owns
    pub fn prefix_len(&self) -> usize {
        self.nodes.prefix.len()
    }
}

impl<T> SinglyLinkedList<T> {
    /// Builds a branch made of `prefix` followed by the node `join`.
    ///
    /// With an empty prefix the branch starts directly at `join`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::StaleNode`] when `join` is not live in this list.
    pub fn branch<I>(&mut self, prefix: I, join: Option<NodeId>) -> Result<Branch>
    where
        I: IntoIterator<Item = T>,
    {
        if self.branches.iter().any(|branch| branch.strong_count() == 0) {
            self.prune();
        }
        if let Some(join) = join.filter(|join| !self.arena.contains(*join)) {
            return Err(ListError::StaleNode(join));
        }
        let values: Vec<T> = prefix.into_iter().collect();
        let mut prefix = Vec::with_capacity(values.len());
        let mut next = join;
        for value in values.into_iter().rev() {
            let id = self.arena.insert(Node::with_next(value, next));
            prefix.push(id);
            next = Some(id);
        }
        prefix.reverse();
        let nodes = Arc::new(BranchNodes { head: next, prefix });
        self.branches.push(Arc::downgrade(&nodes));
        Ok(Branch { nodes })
    }

    /// Get a read-only view of `branch`
    pub fn branch_chain(&self, branch: &Branch) -> ChainRef<'_, T> {
        ChainRef::new(&self.arena, branch.nodes.head)
    }

    /// Frees the nodes owned by `branch`, along with any node only the branch
    /// kept reachable, and returns how many were freed.
    ///
    /// If the main chain had been relinked into the branch, the length is
    /// recomputed since the released nodes now read as the end of the chain.
    pub fn release_branch(&mut self, branch: Branch) -> usize {
        let owned = branch
            .nodes
            .prefix
            .iter()
            .filter(|id| self.arena.remove(**id).is_some())
            .count();
        drop(branch);
        if owned > 0 {
            self.count = cycle::distinct_len(&*self);
        }
        let released = owned + self.prune();
        tracing::debug!(released, len = self.count, "released branch");
        released
    }

    /// Frees every node reachable neither from the head nor from a live
    /// branch and returns how many were freed.
    ///
    /// Branches dropped without being released are forgotten here. Ids of
    /// freed nodes become stale.
    pub fn prune(&mut self) -> usize {
        self.branches.retain(|branch| branch.strong_count() > 0);
        let mut reachable = Vec::new();
        reachable.resize(self.arena.slot_count(), false);
        mark_reachable(&self.arena, self.head, &mut reachable);
        for branch in self.branches.iter().filter_map(Weak::upgrade) {
            mark_reachable(&self.arena, branch.head, &mut reachable);
        }
        let freed = self.arena.retain(|id| reachable[id.slot()]);
        if freed > 0 {
            tracing::debug!(freed, live = self.arena.len(), "pruned unreachable nodes");
        }
        freed
    }
}

/// Flags every slot reachable from `start`, stopping at the first node
/// already flagged so that loops are walked once.
fn mark_reachable<T>(arena: &Arena<T>, start: Option<NodeId>, reachable: &mut [bool]) {
    let mut cursor = start.filter(|id| arena.contains(*id));
    while let Some(id) = cursor {
        if core::mem::replace(&mut reachable[id.slot()], true) {
            break;
        }
        cursor = arena.successor(id);
    }
}
