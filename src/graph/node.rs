//! Node record for the graph engine

use super::attr::{AttrMap, AttrValue};
use super::types::{Label, NodeId};
use serde::{Deserialize, Serialize};

/// A node in the graph.
///
/// Nodes carry:
/// - A caller-assigned unique ID
/// - A display label (duplicated into owned storage on creation)
/// - Attributes (opaque key-value pairs)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node
    pub id: NodeId,

    /// Display label
    pub label: Label,

    /// Attributes associated with this node
    pub attributes: AttrMap,
}

impl Node {
    /// Create a new node
    pub fn new(id: NodeId, label: impl Into<Label>) -> Self {
        Node {
            id,
            label: label.into(),
            attributes: AttrMap::new(),
        }
    }

    /// Create a new node with attributes
    pub fn new_with_attributes(id: NodeId, label: impl Into<Label>, attributes: AttrMap) -> Self {
        Node {
            id,
            label: label.into(),
            attributes,
        }
    }

    /// Set an attribute value, returning the previous value if any
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

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
