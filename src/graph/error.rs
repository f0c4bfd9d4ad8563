//! Error taxonomy for graph operations

use super::types::{EdgeKey, NodeId};
use std::collections::TryReserveError;
use thiserror::Error;

/// Errors that can occur during graph operations.
///
/// All errors are synchronous return values; no operation retries
/// automatically, and every failed call leaves the graph in its pre-call
/// state.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    #[error("Node {0} already exists")]
    DuplicateNode(NodeId),

    #[error("Edge {0} not found")]
    EdgeNotFound(EdgeKey),

    #[error("Edge {0} already exists")]
    EdgeAlreadyExists(EdgeKey),

    #[error("Edge {0} does not exist")]
    EdgeDoesNotExist(EdgeKey),

    #[error("Edge {0} would create a cycle")]
    CycleDetected(EdgeKey),

    #[error("Graph is weighted but no weight was supplied for edge {0}")]
    MissingWeight(EdgeKey),

    #[error("Graph is not weighted but a weight was supplied for edge {0}")]
    GraphNotWeighted(EdgeKey),

    #[error("Graph is heterogeneous but no type was supplied for node {0}")]
    MissingNodeType(NodeId),

    #[error("Graph is heterogeneous but no type was supplied for edge {0}")]
    MissingEdgeType(EdgeKey),

    #[error("Graph is homogeneous; type arguments are not accepted")]
    GraphIsHomogeneous,

    #[error("Graph is already heterogeneous")]
    AlreadyHeterogeneous,

    #[error("Node {0} is not valid in this backend")]
    InvalidNode(NodeId),

    #[error("Invalid attribute key: {0:?}")]
    InvalidKey(String),

    #[error("Attribute key {0:?} not found")]
    KeyNotFound(String),

    #[error("Allocation failure while growing backend storage")]
    AllocationFailure(#[from] TryReserveError),
}

impl PartialEq for GraphError {
    fn eq(&self, other: &Self) -> bool {
        use GraphError::*;
        match (self, other) {
            (NodeNotFound(a), NodeNotFound(b)) => a == b,
            (DuplicateNode(a), DuplicateNode(b)) => a == b,
            (EdgeNotFound(a), EdgeNotFound(b)) => a == b,
            (EdgeAlreadyExists(a), EdgeAlreadyExists(b)) => a == b,
            (EdgeDoesNotExist(a), EdgeDoesNotExist(b)) => a == b,
            (CycleDetected(a), CycleDetected(b)) => a == b,
            (MissingWeight(a), MissingWeight(b)) => a == b,
            (GraphNotWeighted(a), GraphNotWeighted(b)) => a == b,
            (MissingNodeType(a), MissingNodeType(b)) => a == b,
            (MissingEdgeType(a), MissingEdgeType(b)) => a == b,
            (GraphIsHomogeneous, GraphIsHomogeneous) => true,
            (AlreadyHeterogeneous, AlreadyHeterogeneous) => true,
            (InvalidNode(a), InvalidNode(b)) => a == b,
            (InvalidKey(a), InvalidKey(b)) => a == b,
            (KeyNotFound(a), KeyNotFound(b)) => a == b,
            (AllocationFailure(_), AllocationFailure(_)) => true,
            _ => false,
        }
    }
}

pub type GraphResult<T> = Result<T, GraphError>;
