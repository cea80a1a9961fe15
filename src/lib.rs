//! # slotlist
//!
//! A doubly linked list with node-level access, backed by a slot arena.
//!
//! Unlike a plain deque, every node of the list is addressable: callers can
//! hold on to a node, detach it, relocate it, or splice it back in, while
//! the list keeps the head/tail/prev/next/length bookkeeping consistent.
//! See [`linked_list`] for the full tour.

pub mod linked_list;

pub use linked_list::arena::NodeId;
pub use linked_list::error::NodeError;
pub use linked_list::iter::{IntoIter, Nodes, Values};
pub use linked_list::list::DoublyLinkedList;
