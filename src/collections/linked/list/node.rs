use std::fmt::{self, Debug, Formatter};
use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

/// A single cell of a [`LinkedList`](super::LinkedList): one value plus a forward link.
///
/// Nodes are created by the list when a value is inserted and handed back to the caller either as
/// a borrow (`get`/`set` and the insertion methods) or as an owned [`Box`] once detached
/// (`shift`/`pop`/`remove`). A detached node has its link cleared first, so it can never be used
/// to walk back into the live chain.
pub struct Node<T> {
    /// The value held by this node. The list never inspects or compares it.
    pub value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    pub(crate) const fn new(value: T) -> Node<T> {
        Node { value, next: None }
    }

    /// Returns a reference to the following node, or [`None`] for the last node of a list and for
    /// any detached node.
    pub fn next(&self) -> Option<&Node<T>> {
        match self.next {
            Some(ptr) => Some(ptr.node()),
            None => None,
        }
    }
}

impl<T: Debug> Debug for Node<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

// NOTE: Nodes are allocated through Box rather than alloc, because Box has the special property
// that dereferencing it allows a value to be moved out of the heap.

#[derive(Debug)]
pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub(crate) fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Reclaims the node's allocation, returning ownership of it to the caller. The pointer (and
    /// every copy of it) must not be used afterwards.
    pub(crate) fn take_boxed(self) -> Box<Node<T>> {
        // SAFETY: The pointer was produced by Box::leak in from_node and is only reclaimed once,
        // when the node leaves the chain.
        unsafe { Box::from_raw(self.0.as_ptr()) }
    }

    pub(crate) fn node<'a>(&self) -> &'a Node<T> {
        // SAFETY: The node is alive for as long as the chain holds this pointer.
        unsafe { &*self.0.as_ptr() }
    }

    #[allow(clippy::mut_from_ref)]
    pub(crate) fn node_mut<'a>(&self) -> &'a mut Node<T> {
        // SAFETY: As above; exclusivity is enforced by the list methods handing out the borrow.
        unsafe { &mut *self.0.as_ptr() }
    }

    pub(crate) fn value<'a>(&self) -> &'a T {
        &self.node().value
    }

    pub(crate) fn next(&self) -> Link<T> {
        self.node().next
    }

    #[allow(clippy::mut_from_ref)]
    pub(crate) fn next_mut<'a>(&self) -> &'a mut Link<T> {
        &mut self.node_mut().next
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
