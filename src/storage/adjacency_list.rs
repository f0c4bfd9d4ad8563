//! Adjacency-list storage backend
//!
//! Keyed map from node id to an ordered sequence of outgoing arcs.
//! Parallel edges between the same pair are permitted and counted
//! separately; removal takes the first matching entry.

use crate::graph::error::{GraphError, GraphResult};
use crate::graph::types::{EdgeKey, NodeId};
use indexmap::IndexMap;

/// One outgoing arc in a node's sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjEntry {
    pub dst: NodeId,
    pub weight: Option<f64>,
}

/// Adjacency-list backend.
///
/// Empty sequences are kept after removals rather than pruned, so membership
/// is decided by table presence alone: `neighbors` on a present node returns
/// an empty vector, on an absent node returns `InvalidNode`.
#[derive(Debug, Default)]
pub struct AdjacencyList {
    nodes: IndexMap<NodeId, Vec<AdjEntry>>,
    directed: bool,
    edge_count: usize,
}

impl AdjacencyList {
    pub fn new(directed: bool) -> Self {
        AdjacencyList {
            nodes: IndexMap::new(),
            directed,
            edge_count: 0,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Idempotent-safe: creates an empty sequence if the node is absent.
    pub fn add_node(&mut self, id: NodeId) -> GraphResult<()> {
        self.nodes.entry(id).or_default();
        Ok(())
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Remove a node, its own sequence, and every arc targeting it in other
    /// sequences. O(V+E). Returns the number of logical edges removed.
    pub fn remove_node(&mut self, id: NodeId) -> GraphResult<usize> {
        let own = self
            .nodes
            .shift_remove(&id)
            .ok_or(GraphError::NodeNotFound(id))?;

        let mut removed = own.len();
        if !self.directed {
            // Undirected: every non-loop incident edge also has a mirror in
            // another node's sequence; the own sequence already counted it.
            for seq in self.nodes.values_mut() {
                seq.retain(|entry| entry.dst != id);
            }
        } else {
            for seq in self.nodes.values_mut() {
                let before = seq.len();
                seq.retain(|entry| entry.dst != id);
                removed += before - seq.len();
            }
        }

        self.edge_count -= removed;
        Ok(removed)
    }

    /// Append an arc to `src`'s sequence (and the mirror to `dst`'s when
    /// undirected). Parallel edges are allowed.
    pub fn add_edge(&mut self, src: NodeId, dst: NodeId, weight: Option<f64>) -> GraphResult<()> {
        if !self.nodes.contains_key(&src) {
            return Err(GraphError::NodeNotFound(src));
        }
        if !self.nodes.contains_key(&dst) {
            return Err(GraphError::NodeNotFound(dst));
        }

        self.nodes[&src].push(AdjEntry { dst, weight });
        if !self.directed && src != dst {
            self.nodes[&dst].push(AdjEntry { dst: src, weight });
        }
        self.edge_count += 1;
        Ok(())
    }

    pub fn has_edge(&self, src: NodeId, dst: NodeId) -> bool {
        self.nodes
            .get(&src)
            .is_some_and(|seq| seq.iter().any(|entry| entry.dst == dst))
    }

    /// Remove the first matching `(src, dst)` entry, and the first matching
    /// mirror when undirected. One self-loop entry per call.
    pub fn remove_edge(&mut self, src: NodeId, dst: NodeId) -> GraphResult<()> {
        let seq = self
            .nodes
            .get_mut(&src)
            .ok_or(GraphError::NodeNotFound(src))?;
        let pos = seq
            .iter()
            .position(|entry| entry.dst == dst)
            .ok_or(GraphError::EdgeNotFound(EdgeKey::new(src, dst)))?;
        seq.remove(pos);

        if !self.directed && src != dst {
            if let Some(mirror) = self.nodes.get_mut(&dst) {
                if let Some(pos) = mirror.iter().position(|entry| entry.dst == src) {
                    mirror.remove(pos);
                }
            }
        }

        self.edge_count -= 1;
        Ok(())
    }

    pub fn neighbors(&self, id: NodeId) -> GraphResult<Vec<NodeId>> {
        let seq = self.nodes.get(&id).ok_or(GraphError::InvalidNode(id))?;
        Ok(seq.iter().map(|entry| entry.dst).collect())
    }

    /// Weighted view of a node's outgoing arcs.
    pub fn out_edges(&self, id: NodeId) -> GraphResult<&[AdjEntry]> {
        let seq = self.nodes.get(&id).ok_or(GraphError::InvalidNode(id))?;
        Ok(seq.as_slice())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
