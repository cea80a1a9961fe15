use core::error::Error;
use core::fmt;

use super::arena::NodeId;

/// Rejection of a node handle passed to a list operation.
///
/// Out-of-range indices are not errors anywhere in this crate — indexed
/// operations return `None` or no-op instead. `NodeError` covers the cases
/// where a handle itself is unusable for the requested operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeError {
    /// The handle does not name a live node of this list: it was never
    /// issued by it, or the node has since been released.
    Stale(NodeId),
    /// The node is already linked into the chain, but the operation needs a
    /// detached one.
    Attached(NodeId),
    /// The node is not linked into the chain, but the operation needs an
    /// attached one.
    Detached(NodeId),
}

impl NodeError {
    /// The handle the operation rejected.
    pub fn node(&self) -> NodeId {
        match *self {
            NodeError::Stale(node) | NodeError::Attached(node) | NodeError::Detached(node) => node,
        }
    }
}

impl fmt::Display for NodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            NodeError::Stale(node) => write!(f, "{node} does not name a live node of this list"),
            NodeError::Attached(node) => write!(f, "{node} is still attached to the chain"),
            NodeError::Detached(node) => write!(f, "{node} is not attached to the chain"),
        }
    }
}

impl Error for NodeError {}
