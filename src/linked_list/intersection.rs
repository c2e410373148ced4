//! Convergence of two chains.
//!
//! Two chains intersect when they reach the same node (by identity, not by
//! value) and share every node from there on. Only chains of the same list
//! can share nodes, see [`SinglyLinkedList::branch`](super::list::SinglyLinkedList::branch).

use tracing::{trace, warn};

use crate::error::{ListError, Result};

use super::{arena::NodeId, cycle::loop_detect, traits::Chain};

/// Returns the first node shared by `first` and `second`.
///
/// Both chains are measured, the cursor of the longer one skips the length
/// difference, and then both advance in lockstep until they hold the same
/// node. If they run out together the chains do not converge and the result
/// is `Ok(None)`; an empty chain never converges. Argument order does not
/// matter.
///
/// # Errors
///
/// Returns [`ListError::Cyclic`] if either chain loops, since its length is
/// undefined.
pub fn find_intersection<A, B>(first: &A, second: &B) -> Result<Option<NodeId>>
where
    A: Chain + ?Sized,
    B: Chain + ?Sized,
{
    if loop_detect(first) || loop_detect(second) {
        warn!("refusing to intersect a cyclic chain");
        return Err(ListError::Cyclic);
    }

    let first_len = chain_len(first);
    let second_len = chain_len(second);
    let mut a = first.head();
    let mut b = second.head();
    if first_len > second_len {
        a = skip(first, a, first_len - second_len);
    } else {
        b = skip(second, b, second_len - first_len);
    }

    loop {
        match (a, b) {
            (Some(x), Some(y)) if x == y => {
                trace!(node = ?x, "chains converge");
                return Ok(Some(x));
            }
            (Some(x), Some(y)) => {
                a = first.successor(x);
                b = second.successor(y);
            }
            _ => return Ok(None),
        }
    }
}

/// Returns the value at the first node shared by `first` and `second`.
///
/// # Errors
///
/// See [`find_intersection`].
pub fn find_intersection_value<'a, A, B>(first: &'a A, second: &B) -> Result<Option<&'a A::Value>>
where
    A: Chain + ?Sized,
    B: Chain + ?Sized,
{
    Ok(find_intersection(first, second)?.and_then(|node| first.value(node)))
}

fn chain_len<C: Chain + ?Sized>(chain: &C) -> usize {
    let mut len = 0;
    let mut cursor = chain.head();
    while let Some(node) = cursor {
        len += 1;
        cursor = chain.successor(node);
    }
    len
}

fn skip<C: Chain + ?Sized>(chain: &C, from: Option<NodeId>, steps: usize) -> Option<NodeId> {
    let mut cursor = from;
    for _ in 0..steps {
        cursor = chain.successor(cursor?);
    }
    cursor
}
