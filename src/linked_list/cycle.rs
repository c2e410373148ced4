//! Cycle detection, localization and removal.
//!
//! All walks use Floyd's two-speed traversal: a slow cursor advancing one
//! link per step and a fast cursor advancing two. If the chain loops, the
//! fast cursor laps the slow one within one loop length; otherwise it runs
//! off the end. Both cases take O(n) steps and O(1) memory.
//!
//! Handling a cycle goes through three states:
//!
//! ```text
//!   Unknown --detect--> Acyclic | Cyclic
//!   Cyclic --localize--> meeting node known
//!   meeting node known --remove_loop--> Acyclic
//! ```

use tracing::{debug, trace};

use crate::error::{ListError, Result};

use super::{
    arena::NodeId,
    list::SinglyLinkedList,
    traits::{Chain, Link},
};

/// Reports whether following links from the head of `chain` ever revisits a
/// node.
///
/// An empty chain is acyclic; this never fails.
pub fn loop_detect<C: Chain + ?Sized>(chain: &C) -> bool {
    meeting_point(chain).is_some()
}

/// Returns the node where the slow and fast cursors meet, if they do.
///
/// The meeting node lies on the cycle but is not necessarily its entry.
pub fn meeting_point<C: Chain + ?Sized>(chain: &C) -> Option<NodeId> {
    let mut slow = chain.head()?;
    let mut fast = slow;
    loop {
        fast = chain.successor(chain.successor(fast)?)?;
        slow = chain.successor(slow)?;
        if slow == fast {
            trace!(meeting = ?slow, "cursors met");
            return Some(slow);
        }
    }
}

/// Returns the first node of the cycle reached when walking from the head.
///
/// The distance from the head to the entry equals the distance from the
/// meeting node to the entry (modulo the loop length), so one cursor from
/// each end, advanced in lockstep, meets at the entry.
pub fn loop_entry<C: Chain + ?Sized>(chain: &C) -> Option<NodeId> {
    let meeting = meeting_point(chain)?;
    let mut from_head = chain.head()?;
    let mut in_loop = meeting;
    while from_head != in_loop {
        from_head = chain.successor(from_head)?;
        in_loop = chain.successor(in_loop)?;
    }
    Some(from_head)
}

/// Returns the number of nodes on the cycle, if there is one.
pub fn loop_length<C: Chain + ?Sized>(chain: &C) -> Option<usize> {
    let meeting = meeting_point(chain)?;
    cycle_len_from(chain, meeting)
}

/// Returns the number of distinct nodes reachable from the head.
///
/// For a cyclic chain this is the length of the lead-in plus the length of
/// the loop; for an acyclic chain it is the plain length.
pub fn distinct_len<C: Chain + ?Sized>(chain: &C) -> usize {
    let Some(head) = chain.head() else {
        return 0;
    };
    let Some(entry) = loop_entry(chain) else {
        let mut len = 1;
        let mut cursor = head;
        while let Some(next) = chain.successor(cursor) {
            len += 1;
            cursor = next;
        }
        return len;
    };
    let mut lead_in = 0;
    let mut cursor = head;
    while cursor != entry {
        lead_in += 1;
        match chain.successor(cursor) {
            Some(next) => cursor = next,
            None => break,
        }
    }
    lead_in + cycle_len_from(chain, entry).unwrap_or(0)
}

fn cycle_len_from<C: Chain + ?Sized>(chain: &C, start: NodeId) -> Option<usize> {
    let mut len = 1;
    let mut cursor = chain.successor(start)?;
    while cursor != start {
        len += 1;
        cursor = chain.successor(cursor)?;
    }
    Some(len)
}

impl<T> SinglyLinkedList<T> {
    /// Reports whether the list loops, starting the fast cursor one link
    /// ahead of the slow one.
    ///
    /// This entry point requires a non-empty list. Use [`loop_detect`] for a
    /// check that accepts any chain.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Empty`] on an empty list.
    pub fn is_cycled(&self) -> Result<bool> {
        let head = self.head.ok_or(ListError::Empty)?;
        let mut slow = head;
        let mut fast = self.arena.successor(head);
        while let Some(ahead) = fast {
            if ahead == slow {
                return Ok(true);
            }
            let Some(after) = self.arena.successor(ahead) else {
                return Ok(false);
            };
            fast = self.arena.successor(after);
            slow = match self.arena.successor(slow) {
                Some(next) => next,
                None => return Ok(false),
            };
        }
        Ok(false)
    }

    /// Cuts the cycle of the list, if any, and reports whether it did.
    ///
    /// When the loop closes on the head, the node linking back to the head
    /// loses its link. Otherwise a cursor from the head and a cursor from the
    /// meeting node advance together until both successors are the entry;
    /// the loop-side cursor's link is cut. Every node stays reachable, so the
    /// length is unchanged.
    pub fn remove_loop(&mut self) -> bool {
        let (Some(head), Some(meeting)) = (self.head, meeting_point(&*self)) else {
            return false;
        };

        let last = if meeting == head {
            let mut cursor = meeting;
            loop {
                match self.arena.successor(cursor) {
                    Some(next) if next == head => break cursor,
                    Some(next) => cursor = next,
                    None => return false,
                }
            }
        } else {
            let mut from_head = head;
            let mut in_loop = meeting;
            loop {
                let (Some(a), Some(b)) = (
                    self.arena.successor(from_head),
                    self.arena.successor(in_loop),
                ) else {
                    return false;
                };
                if a == b {
                    break in_loop;
                }
                from_head = a;
                in_loop = b;
            }
        };

        match self.arena.get_mut(last) {
            Some(node) => {
                debug!(?meeting, cut = ?last, "removing loop");
                node.set_next(None);
                true
            }
            None => false,
        }
    }

    /// Links the last node back to the node at `index`, closing a loop.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] when `index >= len()`.
    pub fn close_loop(&mut self, index: usize) -> Result<()> {
        let entry = self.element_at(index)?;
        let last = self.element_at(self.count - 1)?;
        let node = self.arena.get_mut(last).ok_or(ListError::StaleNode(last))?;
        node.set_next(Some(entry));
        debug!(?entry, ?last, "closed loop");
        Ok(())
    }

    /// Points the link of `node` at `next`.
    ///
    /// Any shape can be built this way, so the length is recomputed as the
    /// number of distinct nodes reachable from the head. Nodes cut off by
    /// the relink are freed unless a live branch still reaches them, see
    /// [`prune`](Self::prune).
    ///
    /// # Errors
    ///
    /// Returns [`ListError::StaleNode`] when `node` or `next` is not live in
    /// this list; nothing is changed.
    pub fn set_next(&mut self, node: NodeId, next: Option<NodeId>) -> Result<()> {
        if let Some(next) = next.filter(|next| !self.arena.contains(*next)) {
            return Err(ListError::StaleNode(next));
        }
        self.arena
            .get_mut(node)
            .ok_or(ListError::StaleNode(node))?
            .set_next(next);
        let len = distinct_len(&*self);
        trace!(?node, ?next, len, "relinked node");
        self.count = len;
        self.prune();
        Ok(())
    }

    pub(super) fn ensure_acyclic(&self) -> Result<()> {
        if loop_detect(self) {
            Err(ListError::Cyclic)
        } else {
            Ok(())
        }
    }
}
