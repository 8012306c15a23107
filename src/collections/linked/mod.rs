//! Linked collection types. Revolves around [`LinkedList`] and the [`Node`] cells it hands out.

pub mod list;

#[doc(inline)]
pub use list::{LinkedList, Node};
