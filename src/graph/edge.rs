//! Edge record for the graph engine

use super::attr::{AttrMap, AttrValue};
use super::types::{EdgeKey, NodeId};
use serde::{Deserialize, Serialize};

/// A directed arc in the graph.
///
/// Undirected graphs materialize the mirror arc `(dst, src)` as a second
/// logical edge; the two are kept consistent on every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// Source node (arc goes FROM this node)
    pub src: NodeId,

    /// Destination node (arc goes TO this node)
    pub dst: NodeId,

    /// Weight; present iff the owning graph is weighted
    pub weight: Option<f64>,

    /// Attributes associated with this edge
    pub attributes: AttrMap,
}

impl Edge {
    /// Create a new arc
    pub fn new(src: NodeId, dst: NodeId, weight: Option<f64>) -> Self {
        Edge {
            src,
            dst,
            weight,
            attributes: AttrMap::new(),
        }
    }

    /// Create a new arc with attributes
    pub fn new_with_attributes(
        src: NodeId,
        dst: NodeId,
        weight: Option<f64>,
        attributes: AttrMap,
    ) -> Self {
        Edge {
            src,
            dst,
            weight,
            attributes,
        }
    }

    /// Registry key for this arc
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.src, self.dst)
    }

    /// Check if this edge connects two specific nodes (in either direction)
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.src == a && self.dst == b) || (self.src == b && self.dst == a)
    }

    /// Check if this is a self-loop
    pub fn is_self_loop(&self) -> bool {
        self.src == self.dst
    }

    /// Set an attribute value
    pub fn set_attr(
        &mut self,
        key: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Option<AttrValue> {
        self.attributes.insert(key.into(), value.into())
    }

    /// Get an attribute value
    pub fn get_attr(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }

    /// Remove an attribute
    pub fn remove_attr(&mut self, key: &str) -> Option<AttrValue> {
        self.attributes.remove(key)
    }

    /// Check if attribute exists
    pub fn has_attr(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Get number of attributes
    pub fn attr_count(&self) -> usize {
        self.attributes.len()
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.src == other.src && self.dst == other.dst && self.weight == other.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_edge() {
        let edge = Edge::new(NodeId::new(1), NodeId::new(2), Some(5.0));
        assert_eq!(edge.src, NodeId::new(1));
        assert_eq!(edge.dst, NodeId::new(2));
        assert_eq!(edge.weight, Some(5.0));
        assert_eq!(edge.key(), EdgeKey::new(NodeId::new(1), NodeId::new(2)));
    }

    #[test]
    fn test_edge_connects() {
        let edge = Edge::new(NodeId::new(10), NodeId::new(20), None);

        assert!(edge.connects(NodeId::new(10), NodeId::new(20)));
        assert!(edge.connects(NodeId::new(20), NodeId::new(10))); // Order doesn't matter for connects()
        assert!(!edge.connects(NodeId::new(10), NodeId::new(30)));
    }

    #[test]
    fn test_self_loop() {
        let loop_edge = Edge::new(NodeId::new(3), NodeId::new(3), None);
        assert!(loop_edge.is_self_loop());

        let edge = Edge::new(NodeId::new(3), NodeId::new(4), None);
        assert!(!edge.is_self_loop());
    }

    #[test]
    fn test_edge_attributes() {
        let mut edge = Edge::new(NodeId::new(1), NodeId::new(2), None);

        edge.set_attr("since", 2020i64);
        edge.set_attr("strength", 0.95);
        edge.set_attr("verified", true);

        assert_eq!(edge.get_attr("since").unwrap().as_integer(), Some(2020));
        assert_eq!(edge.get_attr("strength").unwrap().as_float(), Some(0.95));
        assert_eq!(edge.get_attr("verified").unwrap().as_boolean(), Some(true));
        assert_eq!(edge.attr_count(), 3);

        let removed = edge.remove_attr("since");
        assert!(removed.is_some());
        assert!(!edge.has_attr("since"));
    }
}
