//! This crate is my take on a singly linked list, written from scratch.
//!
//! # Purpose
//! Writing a linked list by hand is the classic way to get properly acquainted with ownership,
//! pointers and allocation, so this crate is exactly that: one data structure, built up from its
//! nodes, with no shortcuts taken through [`std::collections`].
//!
//! # Method
//! The list is a singly-owned forward chain: every node is owned by its predecessor (or by the
//! list itself for the head), and a node handed back to the caller is cut out of the chain first.
//! Positional operations are deliberately lenient: an out-of-range index means "no such element"
//! and the operation reports that with [`None`] rather than panicking. The indexing operators are
//! the exception and panic like their [`std`] counterparts.
//!
//! # Dependencies
//! Only a couple of derive macros, because they remove the need for some very repetitive
//! programming. Everything else is `std`.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
