//! Collection types. There is exactly one family here: the linked list.
//!
//! # Method
//! The list tracks its head, its tail and a count of nodes, and reaches everything else by
//! following forward links. All positional access is a linear walk from the head.

pub mod linked;
