use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;

use super::{Length, Node, NodePtr, ONE};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A list with forward links only, tracking its head, tail and length.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `head/tail` | `O(1)` |
/// | `append/prepend` | `O(1)` |
/// | `shift` | `O(1)` |
/// | `pop` | `O(n)` |
/// | `get/set` | `O(i)` |
/// | `insert/remove` | `O(i)` |
///
/// `pop` is the odd one out: with no backward links, the only way to find the tail's predecessor
/// is to walk the whole chain from the head.
///
/// # Boundary Behaviour
/// Positional methods treat an out-of-range index as "no such element" and return [`None`]
/// without touching the list, rather than panicking. The [`Index`] and [`IndexMut`] operators are
/// the panicking surface for callers who have already validated their indices.
#[derive(PartialEq, Eq, Hash)]
pub struct LinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default, PartialEq, Eq, Hash, IsVariant)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Creates a new LinkedList holding a single element, which is both its head and its tail.
    pub fn single(value: T) -> LinkedList<T> {
        LinkedList {
            state: ListState::single(value),
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first node in the list, if it exists.
    pub fn head(&self) -> Option<&Node<T>> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.node()),
        }
    }

    /// Returns a reference to the last node in the list, if it exists.
    pub fn tail(&self) -> Option<&Node<T>> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.node()),
        }
    }

    /// Returns a reference to the first value in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a reference to the last value in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Adds the provided value to the end of the list, returning a borrow of its new tail node.
    pub fn append(&mut self, value: T) -> &mut Node<T> {
        let node = match &mut self.state {
            Empty => {
                let contents = ListContents::wrap_one(value);
                let node = contents.head;
                self.state = Full(contents);
                node
            },
            Full(contents) => contents.push_back(value),
        };
        node.node_mut()
    }

    /// Adds the provided value to the front of the list, returning a borrow of its new head node.
    pub fn prepend(&mut self, value: T) -> &mut Node<T> {
        let node = match &mut self.state {
            Empty => {
                let contents = ListContents::wrap_one(value);
                let node = contents.head;
                self.state = Full(contents);
                node
            },
            Full(contents) => contents.push_front(value),
        };
        node.node_mut()
    }

    /// Detaches the first node from the list and returns it, if the list isn't empty. The
    /// returned node's link is cleared.
    pub fn shift(&mut self) -> Option<Box<Node<T>>> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                let mut node = head.take_boxed();

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the first node is
                        // followed by at least one more.
                        *head = unsafe { node.next.unwrap_unchecked() };
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                node.next = None;
                Some(node)
            },
        }
    }

    /// Detaches the last node from the list and returns it, if the list isn't empty.
    ///
    /// With no backward links, the tail's predecessor has to be found by walking the whole chain
    /// from the head, making this `O(n)`.
    pub fn pop(&mut self) -> Option<Box<Node<T>>> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, tail }) => {
                let node = *tail;

                match len.checked_sub(1) {
                    Some(new_len) => {
                        let mut pre = *head;
                        while let Some(next) = pre.next() {
                            if next == node {
                                break;
                            }
                            pre = next;
                        }

                        *pre.next_mut() = None;
                        *tail = pre;
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.take_boxed())
            },
        }
    }

    /// Returns a reference to the node at the provided `index`, or [`None`] if the index is out
    /// of range.
    pub fn get(&self, index: usize) -> Option<&Node<T>> {
        Some(self.seek(index)?.node())
    }

    /// Replaces the value of the node at the provided `index`, returning a borrow of the updated
    /// node, or [`None`] if the index is out of range (in which case nothing is replaced).
    pub fn set(&mut self, index: usize, value: T) -> Option<&mut Node<T>> {
        let node = self.seek(index)?.node_mut();
        node.value = value;
        Some(node)
    }

    /// Inserts the provided value at `index`, returning a borrow of the new node, or [`None`] if
    /// the index is out of range. An `index` of 0 behaves as [`prepend`](LinkedList::prepend) and
    /// an `index` equal to the length behaves as [`append`](LinkedList::append); anything in
    /// between is spliced after the node at `index - 1`.
    pub fn insert(&mut self, index: usize, value: T) -> Option<&mut Node<T>> {
        if index == 0 {
            return Some(self.prepend(value));
        }
        if index == self.len() {
            return Some(self.append(value));
        }

        match &mut self.state {
            Empty => None,
            Full(contents) => {
                if index > contents.len.get() {
                    return None;
                }
                contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();

                let prev = contents.seek_fwd(index - 1);
                let node = NodePtr::from_node(Node {
                    value,
                    next: prev.next(),
                });
                *prev.next_mut() = Some(node);

                Some(node.node_mut())
            },
        }
    }

    /// Detaches the node at `index` from the list and returns it, or [`None`] if the index is out
    /// of range. An `index` of 0 behaves as [`shift`](LinkedList::shift) and an `index` of
    /// `len - 1` behaves as [`pop`](LinkedList::pop); anything in between is spliced out by
    /// linking the node at `index - 1` directly to the node at `index + 1`.
    ///
    /// # Panics
    /// Panics if `index` is exactly equal to the length of a non-empty list: that index makes it
    /// past the range check and into the splice path, which reads the missing successor of the
    /// tail. Indices beyond that return [`None`] as usual.
    pub fn remove(&mut self, index: usize) -> Option<Box<Node<T>>> {
        if index == 0 {
            return self.shift();
        }
        if Some(index) == self.len().checked_sub(1) {
            return self.pop();
        }

        match &mut self.state {
            Empty => None,
            Full(contents) => {
                if index > contents.len.get() {
                    return None;
                }

                let prev = contents.seek_fwd(index - 1);
                // UNWRAP: An index equal to the length reaches this splice with `prev` already at
                // the tail, so the missing successor panics here.
                #[allow(clippy::unwrap_used)]
                let node = prev.next().unwrap();
                *prev.next_mut() = node.next();

                // SAFETY: If the length was 1, one of the end guards above would have matched.
                contents.len = unsafe { contents.len.checked_sub(1).unwrap_unchecked() };

                let mut node = node.take_boxed();
                node.next = None;
                Some(node)
            },
        }
    }
}

impl<T> LinkedList<T> {
    pub(crate) fn seek(&self, index: usize) -> Option<NodePtr<T>> {
        match &self.state {
            Empty => None,
            Full(contents) => {
                if index < contents.len.get() {
                    Some(contents.seek_fwd(index))
                } else {
                    None
                }
            },
        }
    }

    pub(crate) fn verify_links(&self) {
        match self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                let mut curr = head;
                let mut steps = 1;
                while let Some(next) = curr.next() {
                    curr = next;
                    steps += 1;
                }
                assert!(curr == tail, "The last reachable node should be the tail.");
                assert_eq!(
                    steps,
                    len.get(),
                    "Walking the chain should visit exactly len nodes."
                );
                assert!(tail.next().is_none(), "The tail should have no successor.");
            },
        }
    }
}

impl<T> ListContents<T> {
    #[allow(clippy::unwrap_used)]
    pub fn seek_fwd(&self, count: usize) -> NodePtr<T> {
        let mut node = self.head;
        for _ in 0..count {
            // UNWRAP: The caller has already checked count against len.
            node = node.next().unwrap();
        }
        node
    }

    pub fn push_front(&mut self, value: T) -> NodePtr<T> {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            next: Some(self.head),
        });

        self.head = node;
        node
    }

    pub fn push_back(&mut self, value: T) -> NodePtr<T> {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node::new(value));

        *self.tail.next_mut() = Some(node);
        self.tail = node;
        node
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodePtr::from_node(Node::new(value));

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
            .map(|node| &node.value)
            .ok_or(IndexOutOfBounds {
                index,
                len: self.len(),
            })
            .throw()
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.len();
        self.seek(index)
            .map(|node| &mut node.node_mut().value)
            .ok_or(IndexOutOfBounds { index, len })
            .throw()
    }
}

impl<T> From<T> for LinkedList<T> {
    fn from(value: T) -> Self {
        LinkedList::single(value)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        match self.state {
            Empty => {},
            Full(ListContents { head, .. }) => {
                let mut curr = Some(head);
                while let Some(node) = curr {
                    curr = node.next();
                    drop(node.take_boxed());
                }
            },
        }
    }
}

impl<T: PartialEq> PartialEq for ListContents<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }

        let mut node_a = Some(self.head);
        let mut node_b = Some(other.head);

        while let (Some(a), Some(b)) = (node_a, node_b) {
            if a.value() != b.value() {
                return false;
            }
            node_a = a.next();
            node_b = b.next();
        }
        true
    }
}

impl<T: Eq> Eq for ListContents<T> {}

impl<T: Hash> Hash for ListContents<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);

        let mut curr = Some(self.head);
        while let Some(node) = curr {
            node.value().hash(state);
            curr = node.next();
        }

        // Terminate variable length hashing sequence.
        0xFF.hash(state);
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut curr = self.head();
        while let Some(node) = curr {
            list.entry(&node.value);
            curr = node.next();
        }
        list.finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "()");
        }

        let mut curr = self.head();
        while let Some(node) = curr {
            write!(f, "({:?})", node.value)?;
            curr = node.next();
            if curr.is_some() {
                write!(f, " -> ")?;
            }
        }
        Ok(())
    }
}
