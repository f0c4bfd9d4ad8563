//! Walkthrough of the graph façade
//!
//! Shows:
//! - Backend selection via GraphConfig
//! - Weighted edges and attributes
//! - Heterogeneous conversion and type tagging
//! - Acyclic enforcement
//! - Concurrent bulk insertion on the incidence-matrix backend

use trellis_graph::storage::IncidenceMatrix;
use trellis_graph::{BackendKind, Graph, GraphConfig, GraphError, NodeId, TypeLabel};

fn main() -> Result<(), GraphError> {
    tracing_subscriber::fmt::init();

    println!("=== Trellis Graph Demo ===\n");

    // 1. Weighted directed graph on the adjacency-list backend
    println!("1. Building a weighted social graph");
    let mut graph = Graph::new(GraphConfig {
        backend: BackendKind::AdjacencyList,
        directed: true,
        weighted: true,
        acyclic: false,
    });

    graph.add_node(NodeId::new(1), "Person", None)?;
    graph.add_node(NodeId::new(2), "Person", None)?;
    graph.add_node(NodeId::new(3), "Person", None)?;
    graph.set_node_attr(NodeId::new(1), "name", "Alice")?;
    graph.set_node_attr(NodeId::new(2), "name", "Bob")?;
    graph.set_node_attr(NodeId::new(3), "name", "Carol")?;

    graph.add_edge(NodeId::new(1), NodeId::new(2), Some(0.9), None)?;
    graph.add_edge(NodeId::new(1), NodeId::new(3), Some(0.4), None)?;
    graph.set_edge_attr(NodeId::new(1), NodeId::new(2), "since", 2019i64)?;
    println!(
        "   ✓ {} nodes, {} edges, Alice follows {:?}\n",
        graph.node_count(),
        graph.edge_count(),
        graph.neighbors(NodeId::new(1))?
    );

    // 2. Heterogeneous conversion is one-way
    println!("2. Converting to heterogeneous mode");
    graph.convert_to_heterogeneous()?;
    graph.add_node(NodeId::new(4), "Company", Some(TypeLabel::new("Org")))?;
    graph.add_edge(
        NodeId::new(1),
        NodeId::new(4),
        Some(1.0),
        Some(TypeLabel::new("WORKS_AT")),
    )?;
    println!(
        "   ✓ node 4 type: {:?}, edge 1->4 type: {:?}\n",
        graph.node_type(NodeId::new(4)),
        graph.edge_type(NodeId::new(1), NodeId::new(4))
    );

    // 3. Acyclic graphs reject back edges
    println!("3. Acyclic enforcement");
    let mut dag = Graph::new(GraphConfig {
        acyclic: true,
        ..GraphConfig::default()
    });
    dag.add_node(NodeId::new(1), "Task", None)?;
    dag.add_node(NodeId::new(2), "Task", None)?;
    dag.add_edge(NodeId::new(1), NodeId::new(2), None, None)?;
    match dag.add_edge(NodeId::new(2), NodeId::new(1), None, None) {
        Err(GraphError::CycleDetected(key)) => {
            println!("   ✓ back edge {key} rejected\n");
        }
        other => println!("   unexpected: {other:?}\n"),
    }

    // 4. Bulk edge construction on the incidence-matrix backend
    println!("4. Concurrent bulk insertion");
    let n = 100;
    let matrix = IncidenceMatrix::new(true);
    for id in 0..n {
        matrix.add_node(NodeId::new(id))?;
    }
    matrix.prepare_parallel_edges((n * (n - 1) / 2) as usize)?;
    let inserted = matrix.add_edges_parallel(0, n)?;
    println!(
        "   ✓ inserted {} edges across a complete {}-node graph",
        inserted, n
    );

    Ok(())
}
