//! Core type definitions for the graph engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a node. Caller-assigned; unique within one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl NodeId {
    pub fn new(id: u64) -> Self {
        NodeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        NodeId(id)
    }
}

/// Node display label (e.g., "Person", "Router")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct Label(String);

impl Label {
    pub fn new(label: impl Into<String>) -> Self {
        Label(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Label(s)
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label(s.to_string())
    }
}

/// Heterogeneous type tag for a node or edge (e.g., "User", "FOLLOWS")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct TypeLabel(String);

impl TypeLabel {
    pub fn new(type_label: impl Into<String>) -> Self {
        TypeLabel(type_label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TypeLabel {
    fn from(s: String) -> Self {
        TypeLabel(s)
    }
}

impl From<&str> for TypeLabel {
    fn from(s: &str) -> Self {
        TypeLabel(s.to_string())
    }
}

/// Registry lookup key for a directed arc `(src, dst)`.
///
/// Stored as the exact node pair rather than a lossy 64-bit digest of the
/// packed pair, so two distinct arcs can never collide in the type registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeKey {
    pub src: NodeId,
    pub dst: NodeId,
}

impl EdgeKey {
    pub fn new(src: NodeId, dst: NodeId) -> Self {
        EdgeKey { src, dst }
    }

    /// The mirror arc's key.
    pub fn reversed(&self) -> Self {
        EdgeKey {
            src: self.dst,
            dst: self.src,
        }
    }

    /// Packed 128-bit form: `(src << 64) | dst`.
    pub fn pack(&self) -> u128 {
        ((self.src.as_u64() as u128) << 64) | self.dst.as_u64() as u128
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} -> {})", self.src.as_u64(), self.dst.as_u64())
    }
}

impl From<(NodeId, NodeId)> for EdgeKey {
    fn from((src, dst): (NodeId, NodeId)) -> Self {
        EdgeKey { src, dst }
    }
}
