//! Structured mutation events
//!
//! Mutation paths report state changes through an injectable callback
//! instead of printing; see [`crate::graph::store::Graph::set_observer`].

use super::types::{EdgeKey, Label, NodeId};

#[derive(Debug, Clone, PartialEq)]
pub enum GraphEvent {
    NodeAdded { id: NodeId, label: Label },
    NodeRemoved { id: NodeId, edges_removed: usize },
    EdgeAdded { key: EdgeKey, weight: Option<f64> },
    EdgeRemoved { key: EdgeKey },
    ConvertedToHeterogeneous,
}

/// Observer callback invoked at state-change boundaries.
pub type Observer = Box<dyn Fn(&GraphEvent) + Send>;
