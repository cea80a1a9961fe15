use core::fmt;

use super::arena::{Arena, Node, NodeId};
use super::error::NodeError;
use super::iter::{IntoIter, Nodes, Values};

/// A doubly linked list with node-level access.
///
/// The list owns its nodes: they live in a slot arena inside the list and
/// are addressed through [`NodeId`] handles. A node is either *attached*
/// (linked into the chain between `head` and `tail`) or *detached*
/// (allocated and holding a value, but outside the chain). Handles stay
/// valid until the node is released, so a node popped with [`pop_node`] can
/// be held indefinitely and spliced back in later.
///
/// All operations are O(1) except the indexed ones (`get`, `get_node`,
/// `eject_node`, `move_node`), which traverse from the head.
///
/// [`pop_node`]: DoublyLinkedList::pop_node
#[derive(Clone)]
pub struct DoublyLinkedList<T> {
    arena: Arena<T>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        DoublyLinkedList {
            arena: Arena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Builds a list by appending every item of `values` in order.
    ///
    /// An empty input yields an empty list.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = DoublyLinkedList::new();
        list.push_values(values);
        list
    }

    /// Number of nodes attached to the chain.
    ///
    /// Detached nodes are not counted.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First node of the chain, or `None` when the list is empty.
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// Last node of the chain, or `None` when the list is empty.
    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    // --- Node surface ---

    /// Allocates a detached node holding `value` and returns its handle.
    ///
    /// The node joins the chain through [`push_nodes`], [`unshift_nodes`]
    /// or [`insert_node_before`].
    ///
    /// [`push_nodes`]: DoublyLinkedList::push_nodes
    /// [`unshift_nodes`]: DoublyLinkedList::unshift_nodes
    /// [`insert_node_before`]: DoublyLinkedList::insert_node_before
    pub fn new_node(&mut self, value: T) -> NodeId {
        self.arena.insert(Node::detached(value))
    }

    /// The value of `node`, or `None` for a stale handle.
    pub fn value(&self, node: NodeId) -> Option<&T> {
        self.arena.get(node).map(|n| &n.value)
    }

    /// Mutable access to the value of `node`.
    ///
    /// Reassigning the value never affects the structure of the chain.
    pub fn value_mut(&mut self, node: NodeId) -> Option<&mut T> {
        self.arena.get_mut(node).map(|n| &mut n.value)
    }

    /// The node before `node` in the chain.
    ///
    /// `None` when `node` is the head, detached, or stale.
    pub fn prev(&self, node: NodeId) -> Option<NodeId> {
        self.arena.get(node).and_then(|n| n.prev)
    }

    /// The node after `node` in the chain.
    ///
    /// `None` when `node` is the tail, detached, or stale.
    pub fn next(&self, node: NodeId) -> Option<NodeId> {
        self.arena.get(node).and_then(|n| n.next)
    }

    /// Whether `node` is the first node of the chain.
    pub fn is_head(&self, node: NodeId) -> bool {
        self.arena
            .get(node)
            .is_some_and(|n| n.attached && n.prev.is_none())
    }

    /// Whether `node` is the last node of the chain.
    pub fn is_tail(&self, node: NodeId) -> bool {
        self.arena
            .get(node)
            .is_some_and(|n| n.attached && n.next.is_none())
    }

    /// Whether `node` names a live node of this list, attached or detached.
    pub fn contains(&self, node: NodeId) -> bool {
        self.arena.contains(node)
    }

    /// Whether `node` is currently linked into the chain.
    pub fn is_attached(&self, node: NodeId) -> bool {
        self.arena.get(node).is_some_and(|n| n.attached)
    }

    /// Frees a detached node and returns its value. The handle goes stale.
    ///
    /// Fails with [`NodeError::Attached`] while the node is still in the
    /// chain (eject or pop it first) and [`NodeError::Stale`] for a dead
    /// handle.
    pub fn release_node(&mut self, node: NodeId) -> Result<T, NodeError> {
        match self.arena.get(node) {
            None => Err(NodeError::Stale(node)),
            Some(n) if n.attached => Err(NodeError::Attached(node)),
            Some(_) => match self.arena.remove(node) {
                Some(n) => Ok(n.value),
                None => Err(NodeError::Stale(node)),
            },
        }
    }

    // --- Insertion at the ends ---

    /// Wraps each value in a new node and appends them in order.
    ///
    /// Returns the new length.
    pub fn push_values<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            let node = self.arena.insert(Node::detached(value));
            self.append_node(node);
        }
        self.len
    }

    /// Appends pre-built detached nodes in argument order.
    ///
    /// Returns the new length. Fails with [`NodeError::Stale`] for a dead
    /// handle and [`NodeError::Attached`] for a node already in the chain;
    /// nodes appended before the failing one stay attached.
    pub fn push_nodes<I>(&mut self, nodes: I) -> Result<usize, NodeError>
    where
        I: IntoIterator<Item = NodeId>,
    {
        for node in nodes {
            self.ensure_detached(node)?;
            self.append_node(node);
        }
        Ok(self.len)
    }

    /// Wraps each value in a new node and prepends them, keeping the
    /// argument order at the front: after the call the first value is the
    /// new head and the last sits just before the old head.
    ///
    /// Returns the new length.
    pub fn unshift_values<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let nodes: Vec<NodeId> = values
            .into_iter()
            .map(|value| self.arena.insert(Node::detached(value)))
            .collect();
        for node in nodes.into_iter().rev() {
            self.prepend_node(node);
        }
        self.len
    }

    /// Prepends pre-built detached nodes, keeping the argument order at the
    /// front (see [`unshift_values`]).
    ///
    /// Returns the new length. Same failure cases as [`push_nodes`]; nodes
    /// are linked starting from the last argument, and the ones relinked
    /// before the failing one stay attached.
    ///
    /// [`unshift_values`]: DoublyLinkedList::unshift_values
    /// [`push_nodes`]: DoublyLinkedList::push_nodes
    pub fn unshift_nodes<I>(&mut self, nodes: I) -> Result<usize, NodeError>
    where
        I: IntoIterator<Item = NodeId>,
    {
        let nodes: Vec<NodeId> = nodes.into_iter().collect();
        for node in nodes.into_iter().rev() {
            self.ensure_detached(node)?;
            self.prepend_node(node);
        }
        Ok(self.len)
    }

    // --- Removal at the ends ---

    /// Removes the tail node, releases it, and returns its value.
    ///
    /// `None` on an empty list; that is a normal condition, not a failure.
    pub fn pop_value(&mut self) -> Option<T> {
        let node = self.pop_node()?;
        self.arena.remove(node).map(|n| n.value)
    }

    /// Detaches the tail node and returns its handle.
    ///
    /// The node stays allocated with its value intact and can be attached
    /// again later. `None` on an empty list.
    pub fn pop_node(&mut self) -> Option<NodeId> {
        let tail = self.tail?;
        self.detach_node(tail);
        Some(tail)
    }

    /// Removes the head node, releases it, and returns its value.
    ///
    /// `None` on an empty list.
    pub fn shift_value(&mut self) -> Option<T> {
        let node = self.shift_node()?;
        self.arena.remove(node).map(|n| n.value)
    }

    /// Detaches the head node and returns its handle.
    ///
    /// `None` on an empty list.
    pub fn shift_node(&mut self) -> Option<NodeId> {
        let head = self.head?;
        self.detach_node(head);
        Some(head)
    }

    // --- Indexed access ---

    /// The value at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        let node = self.get_node(index)?;
        self.value(node)
    }

    /// Mutable access to the value at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let node = self.get_node(index)?;
        self.value_mut(node)
    }

    /// The node at `index`, found by linear traversal from the head.
    ///
    /// Out-of-range indices return `None`.
    pub fn get_node(&self, index: usize) -> Option<NodeId> {
        if index >= self.len {
            return None;
        }
        let mut current = self.head?;
        for _ in 0..index {
            current = self.next(current)?;
        }
        Some(current)
    }

    // --- Relocation ---

    /// Moves the node at `from` so that it ends up at position `to`,
    /// shifting the nodes in between toward the vacated slot.
    ///
    /// Silent no-op when `from == to` or either index is out of range; the
    /// operation never fails. Moving index 1 to 3 in `[1, 2, 3, 4, 5]`
    /// yields `[1, 3, 4, 2, 5]`, and moving 3 to 1 yields `[1, 4, 2, 3, 5]`.
    pub fn move_node(&mut self, from: usize, to: usize) {
        if from == to || from >= self.len || to >= self.len {
            return;
        }

        let last = self.len - 1;
        let Some(node) = self.eject_node(from) else {
            return;
        };

        if to == last {
            self.append_node(node);
        } else if to == 0 {
            self.prepend_node(node);
        } else if let Some(dest) = self.get_node(to) {
            // Interior targets are resolved against the chain as it stands
            // after the ejection; only the endpoints use the original
            // indexing. `dest` always exists here: to < last == post-eject
            // length.
            let before = self.arena.get(dest).and_then(|d| d.prev);
            self.link_between(node, before, Some(dest));
        }
    }

    // --- Ejection and targeted insertion ---

    /// Detaches the node at `index` from any position, relinking its
    /// neighbors, and returns its handle.
    ///
    /// The node keeps its value and can be attached again later.
    /// Out-of-range indices return `None`.
    pub fn eject_node(&mut self, index: usize) -> Option<NodeId> {
        let node = self.get_node(index)?;
        self.detach_node(node);
        Some(node)
    }

    /// Attaches a detached `node` immediately before the attached `dest`.
    ///
    /// Fails with [`NodeError::Stale`] when either handle is dead,
    /// [`NodeError::Attached`] when `node` is already in the chain, and
    /// [`NodeError::Detached`] when `dest` is not.
    pub fn insert_node_before(&mut self, node: NodeId, dest: NodeId) -> Result<(), NodeError> {
        self.ensure_detached(node)?;
        let before = match self.arena.get(dest) {
            None => return Err(NodeError::Stale(dest)),
            Some(d) if !d.attached => return Err(NodeError::Detached(dest)),
            Some(d) => d.prev,
        };
        self.link_between(node, before, Some(dest));
        Ok(())
    }

    // --- Traversal and export ---

    /// Lazy forward traversal of the values, head to tail.
    ///
    /// Every call starts a fresh traversal, and partial consumption is
    /// fine. The iterator borrows the list, so the chain cannot change
    /// underneath it.
    pub fn values(&self) -> Values<'_, T> {
        Values::new(self)
    }

    /// Lazy forward traversal of the node handles, head to tail.
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes::new(self)
    }

    /// Snapshot of the value sequence.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values().cloned().collect()
    }

    /// Snapshot of the handle sequence.
    pub fn to_node_vec(&self) -> Vec<NodeId> {
        self.nodes().collect()
    }

    // --- Link surgery ---

    fn ensure_detached(&self, node: NodeId) -> Result<(), NodeError> {
        match self.arena.get(node) {
            None => Err(NodeError::Stale(node)),
            Some(n) if n.attached => Err(NodeError::Attached(node)),
            Some(_) => Ok(()),
        }
    }

    /// Links a detached node at the back of the chain.
    fn append_node(&mut self, node: NodeId) {
        let tail = self.tail;
        self.link_between(node, tail, None);
    }

    /// Links a detached node at the front of the chain.
    fn prepend_node(&mut self, node: NodeId) {
        let head = self.head;
        self.link_between(node, None, head);
    }

    /// Splices a detached `node` between `prev` and `next`, taking over the
    /// head/tail role at an absent end. Callers pass a `prev`/`next` pair
    /// that is adjacent in the chain (or an end of it).
    fn link_between(&mut self, node: NodeId, prev: Option<NodeId>, next: Option<NodeId>) {
        if let Some(n) = self.arena.get_mut(node) {
            n.prev = prev;
            n.next = next;
            n.attached = true;
        }
        match prev {
            Some(p) => {
                if let Some(p_node) = self.arena.get_mut(p) {
                    p_node.next = Some(node);
                }
            }
            None => self.head = Some(node),
        }
        match next {
            Some(s) => {
                if let Some(s_node) = self.arena.get_mut(s) {
                    s_node.prev = Some(node);
                }
            }
            None => self.tail = Some(node),
        }
        self.len += 1;
    }

    /// Unlinks an attached `node`, reconnecting its neighbors and clearing
    /// its own links. No-op for detached or stale handles.
    fn detach_node(&mut self, node: NodeId) {
        let (prev, next) = match self.arena.get(node) {
            Some(n) if n.attached => (n.prev, n.next),
            _ => return,
        };
        match prev {
            Some(p) => {
                if let Some(p_node) = self.arena.get_mut(p) {
                    p_node.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(s) => {
                if let Some(s_node) = self.arena.get_mut(s) {
                    s_node.prev = prev;
                }
            }
            None => self.tail = prev,
        }
        if let Some(n) = self.arena.get_mut(node) {
            n.prev = None;
            n.next = None;
            n.attached = false;
        }
        self.len -= 1;
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        DoublyLinkedList::from_values(iter)
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_values(iter);
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.values().eq(other.values())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Values<'a, T>;

    fn into_iter(self) -> Values<'a, T> {
        self.values()
    }
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the list into an iterator draining values front to back.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}
