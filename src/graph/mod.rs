//! Core graph engine implementation
//!
//! This module implements the graph data model and façade:
//! - Node and edge records with opaque attribute storage
//! - A graph façade enforcing the cross-cutting invariants (endpoint
//!   existence, weight presence, acyclicity, heterogeneous type gating)
//! - An optional type registry for heterogeneous graphs
//! - Structured mutation events for observability

pub mod attr;
pub mod edge;
pub mod error;
pub mod event;
pub mod node;
pub mod registry;
pub mod store;
pub mod types;

// Re-export main types
pub use attr::{AttrMap, AttrValue};
pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use event::GraphEvent;
pub use node::Node;
pub use registry::TypeRegistry;
pub use store::{Graph, GraphConfig};
pub use types::{EdgeKey, Label, NodeId, TypeLabel};
