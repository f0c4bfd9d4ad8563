//! Storage backends for the graph engine
//!
//! Three interchangeable layouts behind one capability set: adjacency list,
//! adjacency matrix, and incidence matrix. Backends are selected at
//! construction time via a tagged union; each independently manages its own
//! memory layout for the same logical operations. Backends validate node
//! existence themselves and never silently accept operations referencing
//! missing nodes.

pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod incidence_matrix;

pub use adjacency_list::{AdjEntry, AdjacencyList};
pub use adjacency_matrix::AdjacencyMatrix;
pub use incidence_matrix::IncidenceMatrix;

use crate::graph::error::GraphResult;
use crate::graph::types::NodeId;

/// Backend layout selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    AdjacencyList,
    AdjacencyMatrix,
    IncidenceMatrix,
}

/// A storage backend instance.
///
/// Only the topology lives here; node and edge records (labels, attributes)
/// are owned by the [`crate::graph::store::Graph`] façade.
#[derive(Debug)]
pub enum StorageBackend {
    AdjacencyList(AdjacencyList),
    AdjacencyMatrix(AdjacencyMatrix),
    IncidenceMatrix(IncidenceMatrix),
}

impl StorageBackend {
    pub fn new(kind: BackendKind, directed: bool) -> Self {
        match kind {
            BackendKind::AdjacencyList => {
                StorageBackend::AdjacencyList(AdjacencyList::new(directed))
            }
            BackendKind::AdjacencyMatrix => {
                StorageBackend::AdjacencyMatrix(AdjacencyMatrix::new(directed))
            }
            BackendKind::IncidenceMatrix => {
                StorageBackend::IncidenceMatrix(IncidenceMatrix::new(directed))
            }
        }
    }

    pub fn kind(&self) -> BackendKind {
        match self {
            StorageBackend::AdjacencyList(_) => BackendKind::AdjacencyList,
            StorageBackend::AdjacencyMatrix(_) => BackendKind::AdjacencyMatrix,
            StorageBackend::IncidenceMatrix(_) => BackendKind::IncidenceMatrix,
        }
    }

    pub fn is_directed(&self) -> bool {
        match self {
            StorageBackend::AdjacencyList(b) => b.is_directed(),
            StorageBackend::AdjacencyMatrix(b) => b.is_directed(),
            StorageBackend::IncidenceMatrix(b) => b.is_directed(),
        }
    }

    pub fn add_node(&mut self, id: NodeId) -> GraphResult<()> {
        match self {
            StorageBackend::AdjacencyList(b) => b.add_node(id),
            StorageBackend::AdjacencyMatrix(b) => b.add_node(id),
            StorageBackend::IncidenceMatrix(b) => b.add_node(id),
        }
    }

    /// Remove a node and every edge incident on it. Returns the number of
    /// logical edges removed by the cascade.
    pub fn remove_node(&mut self, id: NodeId) -> GraphResult<usize> {
        match self {
            StorageBackend::AdjacencyList(b) => b.remove_node(id),
            StorageBackend::AdjacencyMatrix(b) => b.remove_node(id),
            StorageBackend::IncidenceMatrix(b) => b.remove_node(id),
        }
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        match self {
            StorageBackend::AdjacencyList(b) => b.has_node(id),
            StorageBackend::AdjacencyMatrix(b) => b.has_node(id),
            StorageBackend::IncidenceMatrix(b) => b.has_node(id),
        }
    }

    pub fn add_edge(&mut self, src: NodeId, dst: NodeId, weight: Option<f64>) -> GraphResult<()> {
        match self {
            StorageBackend::AdjacencyList(b) => b.add_edge(src, dst, weight),
            StorageBackend::AdjacencyMatrix(b) => b.add_edge(src, dst, weight),
            StorageBackend::IncidenceMatrix(b) => b.add_edge(src, dst, weight),
        }
    }

    pub fn remove_edge(&mut self, src: NodeId, dst: NodeId) -> GraphResult<()> {
        match self {
            StorageBackend::AdjacencyList(b) => b.remove_edge(src, dst),
            StorageBackend::AdjacencyMatrix(b) => b.remove_edge(src, dst),
            StorageBackend::IncidenceMatrix(b) => b.remove_edge(src, dst),
        }
    }

    pub fn has_edge(&self, src: NodeId, dst: NodeId) -> bool {
        match self {
            StorageBackend::AdjacencyList(b) => b.has_edge(src, dst),
            StorageBackend::AdjacencyMatrix(b) => b.has_edge(src, dst),
            StorageBackend::IncidenceMatrix(b) => b.has_edge(src, dst),
        }
    }

    /// Out-neighbors of a node (both endpoints' views for undirected graphs),
    /// normalized to a plain id sequence.
    pub fn neighbors(&self, id: NodeId) -> GraphResult<Vec<NodeId>> {
        match self {
            StorageBackend::AdjacencyList(b) => b.neighbors(id),
            StorageBackend::AdjacencyMatrix(b) => b.neighbors(id),
            StorageBackend::IncidenceMatrix(b) => b.neighbors(id),
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            StorageBackend::AdjacencyList(b) => b.node_count(),
            StorageBackend::AdjacencyMatrix(b) => b.node_count(),
            StorageBackend::IncidenceMatrix(b) => b.node_count(),
        }
    }

    /// Logical edge count: a mirrored undirected edge counts once.
    pub fn edge_count(&self) -> usize {
        match self {
            StorageBackend::AdjacencyList(b) => b.edge_count(),
            StorageBackend::AdjacencyMatrix(b) => b.edge_count(),
            StorageBackend::IncidenceMatrix(b) => b.edge_count(),
        }
    }
}
