//! Arena-backed singly linked lists that stay well defined when their links
//! form cycles or when two chains converge on shared nodes.
//!
//! The main type is [`linked_list::list::SinglyLinkedList`]. The graph
//! algorithms (Floyd's cycle detection, loop localization, intersection
//! search) live in [`linked_list::cycle`] and [`linked_list::intersection`]
//! and operate on anything implementing [`linked_list::traits::Chain`].
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod error;
pub mod linked_list;
pub mod text;

pub use error::{ListError, Result};
