//! Type-safe node handles.
//!
//! Nodes of a [`Graph`][crate::graph::Graph] live in an arena: every node name is
//! interned once into a slot, and the slot index is the node's [`NodeId`].
//! Removing a node from a graph deactivates the slot but never reuses it, so ids
//! stay valid across all working copies cloned from the same graph.

use std::fmt;

/// A node identifier (0-indexed arena slot).
///
/// # Invariants
///
/// - Ids are assigned in insertion order, starting from 0.
/// - An id is never reassigned to a different name, even after the node is removed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Creates a node id from an arena index.
    ///
    /// # Panics
    ///
    /// Panics if `index` does not fit into `u32`.
    pub fn new(index: usize) -> Self {
        assert!(index <= u32::MAX as usize, "Node index {} is out of range", index);
        NodeId(index as u32)
    }

    /// Returns the arena index as a `usize`.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self {
        id.index()
    }
}

impl From<NodeId> for u32 {
    fn from(id: NodeId) -> Self {
        id.0
    }
}
