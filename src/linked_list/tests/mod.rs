

use core::fmt::Debug;

use super::arena::NodeId;
use super::list::DoublyLinkedList;

/// Checks the chain against `expected`: length, forward and backward
/// walks, link symmetry, and head/tail assignment.
fn assert_chain_eq<T>(list: &DoublyLinkedList<T>, expected: &[T])
where
    T: Clone + PartialEq + Debug,
{
    assert_eq!(list.len(), expected.len(), "length mismatch");
    assert_eq!(list.is_empty(), expected.is_empty());

    let forward: Vec<T> = list.values().cloned().collect();
    assert_eq!(forward, expected, "forward order mismatch");

    let mut backward = Vec::new();
    let mut current = list.tail();
    while let Some(node) = current {
        backward.push(list.value(node).cloned().unwrap());
        current = list.prev(node);
    }
    backward.reverse();
    assert_eq!(backward, expected, "backward order mismatch");

    let mut previous: Option<NodeId> = None;
    let mut current = list.head();
    while let Some(node) = current {
        assert_eq!(list.prev(node), previous, "prev link out of sync");
        assert!(list.is_attached(node));
        previous = Some(node);
        current = list.next(node);
    }
    assert_eq!(list.tail(), previous, "tail out of sync with last node");

    if expected.is_empty() {
        assert_eq!(list.head(), None);
        assert_eq!(list.tail(), None);
    }
}
