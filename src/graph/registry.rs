//! Type registry for heterogeneous graphs
//!
//! Side maps from node id / edge key to a type label, kept in lockstep
//! with the storage backend by the graph façade. Present only after an
//! explicit one-way conversion to heterogeneous mode.

use super::types::{EdgeKey, NodeId, TypeLabel};
use rustc_hash::FxHashMap;

/// Side-map registry of node and edge types.
///
/// Edge entries are keyed by the exact `(src, dst)` pair; undirected graphs
/// carry one entry per arc, so the façade registers and removes both
/// directions together.
#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    node_types: FxHashMap<NodeId, TypeLabel>,
    edge_types: FxHashMap<EdgeKey, TypeLabel>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_node_type(&mut self, id: NodeId, ty: TypeLabel) {
        self.node_types.insert(id, ty);
    }

    pub fn node_type(&self, id: NodeId) -> Option<&TypeLabel> {
        self.node_types.get(&id)
    }

    pub fn remove_node_type(&mut self, id: NodeId) -> Option<TypeLabel> {
        self.node_types.remove(&id)
    }

    pub fn set_edge_type(&mut self, key: EdgeKey, ty: TypeLabel) {
        self.edge_types.insert(key, ty);
    }

    pub fn edge_type(&self, key: EdgeKey) -> Option<&TypeLabel> {
        self.edge_types.get(&key)
    }

    pub fn remove_edge_type(&mut self, key: EdgeKey) -> Option<TypeLabel> {
        self.edge_types.remove(&key)
    }

    /// Drop the node's type and the types of every arc touching it.
    /// Used by the node-removal cascade.
    pub fn remove_incident(&mut self, id: NodeId) {
        self.node_types.remove(&id);
        self.edge_types.retain(|key, _| key.src != id && key.dst != id);
    }

    pub fn node_type_count(&self) -> usize {
        self.node_types.len()
    }

    pub fn edge_type_count(&self) -> usize {
        self.edge_types.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_types() {
        let mut registry = TypeRegistry::new();
        registry.set_node_type(NodeId::new(1), TypeLabel::new("User"));

        assert_eq!(
            registry.node_type(NodeId::new(1)).map(|t| t.as_str()),
            Some("User")
        );
        assert_eq!(registry.node_type(NodeId::new(2)), None);

        let removed = registry.remove_node_type(NodeId::new(1));
        assert_eq!(removed, Some(TypeLabel::new("User")));
        assert_eq!(registry.node_type_count(), 0);
    }

    #[test]
    fn test_edge_types_are_per_arc() {
        let mut registry = TypeRegistry::new();
        let key = EdgeKey::new(NodeId::new(1), NodeId::new(2));

        registry.set_edge_type(key, TypeLabel::new("FOLLOWS"));
        registry.set_edge_type(key.reversed(), TypeLabel::new("FOLLOWS"));

        assert_eq!(registry.edge_type_count(), 2);
        assert_eq!(registry.edge_type(key), Some(&TypeLabel::new("FOLLOWS")));
        assert_eq!(
            registry.edge_type(key.reversed()),
            Some(&TypeLabel::new("FOLLOWS"))
        );
    }

    #[test]
    fn test_remove_incident() {
        let mut registry = TypeRegistry::new();
        let n1 = NodeId::new(1);
        let n2 = NodeId::new(2);
        let n3 = NodeId::new(3);

        registry.set_node_type(n1, TypeLabel::new("User"));
        registry.set_node_type(n2, TypeLabel::new("User"));
        registry.set_edge_type(EdgeKey::new(n1, n2), TypeLabel::new("KNOWS"));
        registry.set_edge_type(EdgeKey::new(n2, n1), TypeLabel::new("KNOWS"));
        registry.set_edge_type(EdgeKey::new(n2, n3), TypeLabel::new("KNOWS"));

        registry.remove_incident(n1);

        assert_eq!(registry.node_type(n1), None);
        assert_eq!(registry.node_type(n2), Some(&TypeLabel::new("User")));
        assert_eq!(registry.edge_type(EdgeKey::new(n1, n2)), None);
        assert_eq!(registry.edge_type(EdgeKey::new(n2, n1)), None);
        assert_eq!(
            registry.edge_type(EdgeKey::new(n2, n3)),
            Some(&TypeLabel::new("KNOWS"))
        );
    }
}
