//! A singly linked list that tolerates cycles and shared tails.
//!
//! Nodes are stored in an [`arena::Arena`] and linked by [`arena::NodeId`]
//! instead of owning pointers. A link that points backwards is therefore just
//! a cycle, never a double owner, and dropping the list releases every node
//! whatever shape the links form.
//!
//! # Examples
//!
//! ```
//! use mola_chain::linked_list::{cycle, list::SinglyLinkedList};
//!
//! let mut list: SinglyLinkedList<i32> = [1, 2, 3, 4].into_iter().collect();
//! assert!(!cycle::loop_detect(&list));
//!
//! // 4 now links back to 2.
//! list.close_loop(1).unwrap();
//! assert!(cycle::loop_detect(&list));
//! assert_eq!(cycle::loop_entry(&list), list.element_at(1).ok());
//!
//! assert!(list.remove_loop());
//! assert!(!cycle::loop_detect(&list));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
//! ```
//!
//! Two chains of the same list can converge:
//!
//! ```
//! use mola_chain::linked_list::{intersection, list::SinglyLinkedList};
//!
//! let mut list: SinglyLinkedList<i32> = [1, 2, 3, 7, 8].into_iter().collect();
//! let shared = list.element_at(3).unwrap();
//! let branch = list.branch([9], Some(shared)).unwrap();
//!
//! let (main, side) = (list.chain(), list.branch_chain(&branch));
//! let value = intersection::find_intersection_value(&main, &side);
//! assert_eq!(value, Ok(Some(&7)));
//! ```

pub mod arena;
pub mod chain;
pub mod cycle;
pub mod intersection;
pub mod iter;
pub mod list;
pub mod node;
pub mod reverse;
pub mod traits;

#[cfg(test)]
mod tests;
