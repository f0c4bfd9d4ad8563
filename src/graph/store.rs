//! Graph façade
//!
//! Composes one storage backend with the node/edge record tables and an
//! optional type registry, and enforces the cross-cutting invariants (node
//! existence before edge creation, weight presence, heterogeneous gating,
//! acyclicity) before delegating to the backend. Validation strictly
//! precedes mutation, and registry writes happen only after the backend
//! write succeeded, so a failed call never leaves the backend and registry
//! as an inconsistent pair.

use super::attr::AttrValue;
use super::edge::Edge;
use super::error::{GraphError, GraphResult};
use super::event::{GraphEvent, Observer};
use super::node::Node;
use super::registry::TypeRegistry;
use super::types::{EdgeKey, Label, NodeId, TypeLabel};
use crate::storage::{BackendKind, StorageBackend};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

/// Construction-time graph configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    pub backend: BackendKind,
    pub directed: bool,
    pub weighted: bool,
    pub acyclic: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            backend: BackendKind::AdjacencyList,
            directed: true,
            weighted: false,
            acyclic: false,
        }
    }
}

/// An in-memory graph over one storage backend.
///
/// The façade owns the node and edge records (labels, weights, attributes);
/// the backend owns only the topology. Single-threaded: callers must not
/// invoke mutating operations concurrently without external synchronization
/// (the incidence backend's own bulk path is the one concurrent surface,
/// and it lives on [`crate::storage::IncidenceMatrix`] directly).
pub struct Graph {
    backend: StorageBackend,
    weighted: bool,
    acyclic: bool,
    nodes: FxHashMap<NodeId, Node>,
    edges: FxHashMap<EdgeKey, Edge>,
    registry: Option<TypeRegistry>,
    observer: Option<Observer>,
}

impl Graph {
    pub fn new(config: GraphConfig) -> Self {
        Graph {
            backend: StorageBackend::new(config.backend, config.directed),
            weighted: config.weighted,
            acyclic: config.acyclic,
            nodes: FxHashMap::default(),
            edges: FxHashMap::default(),
            registry: None,
            observer: None,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.backend.is_directed()
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    pub fn is_acyclic(&self) -> bool {
        self.acyclic
    }

    pub fn is_heterogeneous(&self) -> bool {
        self.registry.is_some()
    }

    pub fn backend_kind(&self) -> BackendKind {
        self.backend.kind()
    }

    /// Install a callback invoked at every state-change boundary.
    pub fn set_observer(&mut self, observer: impl Fn(&GraphEvent) + Send + 'static) {
        self.observer = Some(Box::new(observer));
    }

    fn emit(&self, event: GraphEvent) {
        if let Some(observer) = &self.observer {
            observer(&event);
        }
    }

    // ========================================================================
    // Nodes
    // ========================================================================

    /// Add a node. Duplicate ids are rejected regardless of backend policy.
    pub fn add_node(
        &mut self,
        id: NodeId,
        label: impl Into<Label>,
        node_type: Option<TypeLabel>,
    ) -> GraphResult<()> {
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }
        match (&self.registry, &node_type) {
            (None, Some(_)) => return Err(GraphError::GraphIsHomogeneous),
            (Some(_), None) => return Err(GraphError::MissingNodeType(id)),
            _ => {}
        }

        // Last fallible step; nothing to roll back if it errors.
        self.backend.add_node(id)?;

        let label = label.into();
        self.nodes.insert(id, Node::new(id, label.clone()));
        if let (Some(registry), Some(ty)) = (&mut self.registry, node_type) {
            registry.set_node_type(id, ty);
        }

        debug!(node = %id, label = %label, "node added");
        self.emit(GraphEvent::NodeAdded { id, label });
        Ok(())
    }

    /// Remove a node and every edge incident on it, plus any registry
    /// entries for the node or its arcs.
    pub fn remove_node(&mut self, id: NodeId) -> GraphResult<()> {
        if !self.nodes.contains_key(&id) {
            return Err(GraphError::NodeNotFound(id));
        }

        let edges_removed = self.backend.remove_node(id)?;
        self.nodes.remove(&id);
        self.edges.retain(|key, _| key.src != id && key.dst != id);
        if let Some(registry) = &mut self.registry {
            registry.remove_incident(id);
        }

        debug!(node = %id, edges_removed, "node removed");
        self.emit(GraphEvent::NodeRemoved { id, edges_removed });
        Ok(())
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // ========================================================================
    // Edges
    // ========================================================================

    /// Add an edge. Undirected graphs materialize the mirror arc as a second
    /// logical edge with its own record and registry entry.
    pub fn add_edge(
        &mut self,
        src: NodeId,
        dst: NodeId,
        weight: Option<f64>,
        edge_type: Option<TypeLabel>,
    ) -> GraphResult<()> {
        let key = EdgeKey::new(src, dst);

        if !self.nodes.contains_key(&src) {
            return Err(GraphError::NodeNotFound(src));
        }
        if !self.nodes.contains_key(&dst) {
            return Err(GraphError::NodeNotFound(dst));
        }
        if self.weighted && weight.is_none() {
            return Err(GraphError::MissingWeight(key));
        }
        if !self.weighted && weight.is_some() {
            return Err(GraphError::GraphNotWeighted(key));
        }
        match (&self.registry, &edge_type) {
            (None, Some(_)) => return Err(GraphError::GraphIsHomogeneous),
            (Some(_), None) => return Err(GraphError::MissingEdgeType(key)),
            _ => {}
        }
        if self.acyclic && (src == dst || self.is_reachable(dst, src)?) {
            return Err(GraphError::CycleDetected(key));
        }

        // Last fallible step (duplicate pair, allocation).
        self.backend.add_edge(src, dst, weight)?;

        self.edges.insert(key, Edge::new(src, dst, weight));
        if !self.is_directed() && src != dst {
            self.edges
                .insert(key.reversed(), Edge::new(dst, src, weight));
        }
        if let (Some(registry), Some(ty)) = (&mut self.registry, edge_type) {
            registry.set_edge_type(key, ty.clone());
            if !self.backend.is_directed() && src != dst {
                registry.set_edge_type(key.reversed(), ty);
            }
        }

        debug!(edge = %key, ?weight, "edge added");
        self.emit(GraphEvent::EdgeAdded { key, weight });
        Ok(())
    }

    /// Remove an edge; undirected graphs drop both arcs atomically with
    /// respect to the caller's view.
    pub fn remove_edge(&mut self, src: NodeId, dst: NodeId) -> GraphResult<()> {
        let key = EdgeKey::new(src, dst);

        self.backend.remove_edge(src, dst)?;

        // Records and registry entries are per arc; drop each orientation
        // only once no arc remains for it (parallel edges in the adjacency
        // list keep the record alive, and the incidence backend removes both
        // orientations at once).
        if !self.backend.has_edge(src, dst) {
            self.edges.remove(&key);
            if let Some(registry) = &mut self.registry {
                registry.remove_edge_type(key);
            }
        }
        if !self.backend.has_edge(dst, src) {
            self.edges.remove(&key.reversed());
            if let Some(registry) = &mut self.registry {
                registry.remove_edge_type(key.reversed());
            }
        }

        debug!(edge = %key, "edge removed");
        self.emit(GraphEvent::EdgeRemoved { key });
        Ok(())
    }

    pub fn has_edge(&self, src: NodeId, dst: NodeId) -> bool {
        self.backend.has_edge(src, dst)
    }

    pub fn edge(&self, src: NodeId, dst: NodeId) -> Option<&Edge> {
        self.edges.get(&EdgeKey::new(src, dst))
    }

    pub fn edge_count(&self) -> usize {
        self.backend.edge_count()
    }

    /// Neighbor ids, normalized to one shape across backends.
    pub fn neighbors(&self, id: NodeId) -> GraphResult<Vec<NodeId>> {
        self.backend.neighbors(id)
    }

    // ========================================================================
    // Heterogeneous mode
    // ========================================================================

    /// One-way conversion to heterogeneous mode. After conversion every
    /// add-node/add-edge call must supply a type.
    pub fn convert_to_heterogeneous(&mut self) -> GraphResult<()> {
        if self.registry.is_some() {
            return Err(GraphError::AlreadyHeterogeneous);
        }
        self.registry = Some(TypeRegistry::new());

        debug!("graph converted to heterogeneous");
        self.emit(GraphEvent::ConvertedToHeterogeneous);
        Ok(())
    }

    pub fn node_type(&self, id: NodeId) -> Option<&TypeLabel> {
        self.registry.as_ref()?.node_type(id)
    }

    pub fn edge_type(&self, src: NodeId, dst: NodeId) -> Option<&TypeLabel> {
        self.registry.as_ref()?.edge_type(EdgeKey::new(src, dst))
    }

    // ========================================================================
    // Attributes
    // ========================================================================

    pub fn set_node_attr(
        &mut self,
        id: NodeId,
        key: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> GraphResult<()> {
        let key = key.into();
        if key.is_empty() {
            return Err(GraphError::InvalidKey(key));
        }
        let node = self
            .nodes
            .get_mut(&id)
            .ok_or(GraphError::NodeNotFound(id))?;
        node.set_attr(key, value);
        Ok(())
    }

    pub fn node_attr(&self, id: NodeId, key: &str) -> GraphResult<&AttrValue> {
        let node = self.nodes.get(&id).ok_or(GraphError::NodeNotFound(id))?;
        node.get_attr(key)
            .ok_or_else(|| GraphError::KeyNotFound(key.to_string()))
    }

    pub fn remove_node_attr(&mut self, id: NodeId, key: &str) -> GraphResult<AttrValue> {
        let node = self
            .nodes
            .get_mut(&id)
            .ok_or(GraphError::NodeNotFound(id))?;
        node.remove_attr(key)
            .ok_or_else(|| GraphError::KeyNotFound(key.to_string()))
    }

    /// Set an attribute on an edge; undirected graphs keep both arc records
    /// consistent.
    pub fn set_edge_attr(
        &mut self,
        src: NodeId,
        dst: NodeId,
        key: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> GraphResult<()> {
        let key = key.into();
        if key.is_empty() {
            return Err(GraphError::InvalidKey(key));
        }
        let edge_key = EdgeKey::new(src, dst);
        let value = value.into();
        if !self.edges.contains_key(&edge_key) {
            return Err(GraphError::EdgeNotFound(edge_key));
        }
        if let Some(edge) = self.edges.get_mut(&edge_key) {
            edge.set_attr(key.clone(), value.clone());
        }
        if let Some(mirror) = self.edges.get_mut(&edge_key.reversed()) {
            if !self.backend.is_directed() {
                mirror.set_attr(key, value);
            }
        }
        Ok(())
    }

    pub fn edge_attr(&self, src: NodeId, dst: NodeId, key: &str) -> GraphResult<&AttrValue> {
        let edge_key = EdgeKey::new(src, dst);
        let edge = self
            .edges
            .get(&edge_key)
            .ok_or(GraphError::EdgeNotFound(edge_key))?;
        edge.get_attr(key)
            .ok_or_else(|| GraphError::KeyNotFound(key.to_string()))
    }

    pub fn remove_edge_attr(
        &mut self,
        src: NodeId,
        dst: NodeId,
        key: &str,
    ) -> GraphResult<AttrValue> {
        let edge_key = EdgeKey::new(src, dst);
        let edge = self
            .edges
            .get_mut(&edge_key)
            .ok_or(GraphError::EdgeNotFound(edge_key))?;
        let removed = edge
            .remove_attr(key)
            .ok_or_else(|| GraphError::KeyNotFound(key.to_string()))?;
        if !self.backend.is_directed() {
            if let Some(mirror) = self.edges.get_mut(&edge_key.reversed()) {
                mirror.remove_attr(key);
            }
        }
        Ok(removed)
    }

    // ========================================================================
    // Reachability (acyclicity check)
    // ========================================================================

    /// Depth-first reachability over existing edges, O(V+E). Used to reject
    /// an insertion that would close a cycle.
    fn is_reachable(&self, from: NodeId, to: NodeId) -> GraphResult<bool> {
        if from == to {
            return Ok(true);
        }
        let mut visited = FxHashSet::default();
        let mut stack = vec![from];
        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            for neighbor in self.backend.neighbors(current)? {
                if neighbor == to {
                    return Ok(true);
                }
                if !visited.contains(&neighbor) {
                    stack.push(neighbor);
                }
            }
        }
        Ok(false)
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("backend", &self.backend.kind())
            .field("directed", &self.is_directed())
            .field("weighted", &self.weighted)
            .field("acyclic", &self.acyclic)
            .field("heterogeneous", &self.registry.is_some())
            .field("nodes", &self.nodes.len())
            .field("edges", &self.backend.edge_count())
            .finish()
    }
}
