//! Trellis Graph Engine
//!
//! An in-memory graph engine: one façade over three interchangeable storage
//! backends (adjacency list, adjacency matrix, incidence matrix), each
//! supporting directed/undirected and weighted/unweighted variants, with
//! optional per-node/per-edge type tagging ("heterogeneous" mode) and, for
//! the incidence-matrix backend, concurrent bulk edge construction.
//!
//! # Example
//!
//! ```rust
//! use trellis_graph::graph::{Graph, GraphConfig, NodeId};
//! use trellis_graph::storage::BackendKind;
//!
//! let mut graph = Graph::new(GraphConfig {
//!     backend: BackendKind::AdjacencyList,
//!     directed: true,
//!     weighted: true,
//!     acyclic: false,
//! });
//!
//! graph.add_node(NodeId::new(1), "Person", None).unwrap();
//! graph.add_node(NodeId::new(2), "Person", None).unwrap();
//! graph.add_edge(NodeId::new(1), NodeId::new(2), Some(5.0), None).unwrap();
//!
//! assert_eq!(graph.neighbors(NodeId::new(1)).unwrap(), vec![NodeId::new(2)]);
//! ```
//!
//! # Concurrency
//!
//! The façade and the list/matrix backends are single-threaded. The
//! incidence-matrix backend serializes all mutation behind one mutex and
//! offers a bulk-insert path that partitions the candidate pair space across
//! a fixed pool of worker threads:
//!
//! ```rust
//! use trellis_graph::graph::NodeId;
//! use trellis_graph::storage::IncidenceMatrix;
//!
//! let matrix = IncidenceMatrix::new(true);
//! for id in 0..10 {
//!     matrix.add_node(NodeId::new(id)).unwrap();
//! }
//! matrix.prepare_parallel_edges(45).unwrap();
//! let inserted = matrix.add_edges_parallel(0, 10).unwrap();
//! assert_eq!(inserted, 45);
//! ```

#![warn(clippy::all)]

pub mod graph;
pub mod storage;

// Re-export main types for convenience
pub use graph::{
    AttrMap, AttrValue, Edge, EdgeKey, Graph, GraphConfig, GraphError, GraphEvent, GraphResult,
    Label, Node, NodeId, TypeLabel, TypeRegistry,
};

pub use storage::{AdjacencyList, AdjacencyMatrix, BackendKind, IncidenceMatrix, StorageBackend};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
