//! Traits shared by nodes, lists and chain views.

use super::arena::NodeId;

/// A trait for a link in a linked list.
pub trait Link {
    /// Get the id of the next node
    fn next(&self) -> Option<NodeId>;

    /// Set the id of the next node
    fn set_next(&mut self, next: Option<NodeId>);
}

/// Read access to a chain of nodes starting at a head.
///
/// This is the capability the free-standing graph algorithms need. It
/// exposes no way to mutate the chain, so handing a `Chain` to
/// [`cycle`](super::cycle) or [`intersection`](super::intersection)
/// functions cannot corrupt the list behind it.
pub trait Chain {
    /// The type of value stored in each node.
    type Value;

    /// Get the first node of the chain
    fn head(&self) -> Option<NodeId>;

    /// Get the node following `node`, or `None` at the end of the chain.
    ///
    /// Links to nodes that are no longer live read as `None`.
    fn successor(&self, node: NodeId) -> Option<NodeId>;

    /// Get the value stored in `node`
    fn value(&self, node: NodeId) -> Option<&Self::Value>;
}

impl<C: Chain + ?Sized> Chain for &C {
    type Value = C::Value;

    #[inline]
    fn head(&self) -> Option<NodeId> {
        (**self).head()
    }

    #[inline]
    fn successor(&self, node: NodeId) -> Option<NodeId> {
        (**self).successor(node)
    }

    #[inline]
    fn value(&self, node: NodeId) -> Option<&Self::Value> {
        (**self).value(node)
    }
}
