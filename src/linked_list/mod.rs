//! # Doubly Linked List
//!
//! This module provides a doubly linked list with node-level access.
//!
//! ## Core Components
//!
//! - [`list::DoublyLinkedList`]: the list itself, owning its nodes and
//!   exposing all mutation and traversal operations.
//! - [`arena::NodeId`]: a generational handle addressing a single node.
//! - [`iter`]: restartable forward iterators over values and handles.
//! - [`error::NodeError`]: the failure cases of handle-taking operations.
//!
//! ## Storage
//!
//! Nodes live in a slot arena owned by the list, and `prev`/`next` links are
//! optional handles rather than pointers. A handle stays valid while its
//! node is allocated — attached to the chain or detached on the side — and
//! goes stale once the node is released. Stale handles are rejected at
//! runtime; they never alias a newer node that reuses the same slot.
//!
//! # Examples
//!
//! ```
//! use slotlist::DoublyLinkedList;
//!
//! let mut list = DoublyLinkedList::from_values([1, 2, 3]);
//! list.push_values([4, 5]);
//! assert_eq!(list.len(), 5);
//!
//! // Relocate the node at index 1 so it ends up at index 3.
//! list.move_node(1, 3);
//! assert_eq!(list.to_vec(), vec![1, 3, 4, 2, 5]);
//!
//! // Detach a node, hold on to it, and splice it back in front.
//! let node = list.eject_node(2).unwrap();
//! assert_eq!(list.value(node), Some(&4));
//! let head = list.head().unwrap();
//! list.insert_node_before(node, head).unwrap();
//! assert_eq!(list.to_vec(), vec![4, 1, 3, 2, 5]);
//!
//! assert_eq!(list.pop_value(), Some(5));
//! assert_eq!(list.shift_value(), Some(4));
//! ```

pub mod arena;
pub mod error;
pub mod iter;
pub mod list;

#[cfg(feature = "serde")]
mod serde;

#[cfg(test)]
mod tests;
