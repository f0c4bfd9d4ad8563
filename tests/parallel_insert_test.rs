//! Concurrent bulk insertion on the incidence-matrix backend.
//!
//! The worker pool funnels every insertion through one mutex, so the final
//! edge count must match the sequential result exactly: one edge per
//! unordered node pair, duplicates suppressed inside the critical section.

use trellis_graph::storage::IncidenceMatrix;
use trellis_graph::{GraphError, NodeId};

fn complete_pair_count(n: u64) -> usize {
    (n * (n - 1) / 2) as usize
}

#[test]
fn test_complete_graph_edge_count() {
    let n = 100;
    let matrix = IncidenceMatrix::new(true);
    for id in 0..n {
        matrix.add_node(NodeId::new(id)).unwrap();
    }

    matrix.prepare_parallel_edges(complete_pair_count(n)).unwrap();
    let inserted = matrix.add_edges_parallel(0, n).unwrap();

    assert_eq!(inserted, complete_pair_count(n));
    assert_eq!(matrix.edge_count(), complete_pair_count(n));
}

#[test]
fn test_parallel_matches_sequential() {
    let n = 60;

    let parallel = IncidenceMatrix::new(true);
    for id in 0..n {
        parallel.add_node(NodeId::new(id)).unwrap();
    }
    parallel.prepare_parallel_edges(complete_pair_count(n)).unwrap();
    parallel.add_edges_parallel(0, n).unwrap();

    let sequential = IncidenceMatrix::new(true);
    for id in 0..n {
        sequential.add_node(NodeId::new(id)).unwrap();
    }
    for src in 0..n {
        for dst in 0..n {
            if src == dst {
                continue;
            }
            match sequential.add_edge(NodeId::new(src), NodeId::new(dst), None) {
                Ok(()) | Err(GraphError::EdgeAlreadyExists(_)) => {}
                Err(e) => panic!("unexpected error: {e}"),
            }
        }
    }

    assert_eq!(parallel.edge_count(), sequential.edge_count());

    // Same pair membership, not just the same count.
    for src in 0..n {
        for dst in 0..n {
            assert_eq!(
                parallel.has_edge(NodeId::new(src), NodeId::new(dst)),
                sequential.has_edge(NodeId::new(src), NodeId::new(dst)),
                "pair ({src}, {dst})"
            );
        }
    }
}

#[test]
fn test_repeated_bulk_insert_is_idempotent() {
    let n = 40;
    let matrix = IncidenceMatrix::new(true);
    for id in 0..n {
        matrix.add_node(NodeId::new(id)).unwrap();
    }

    matrix.prepare_parallel_edges(complete_pair_count(n)).unwrap();
    let first = matrix.add_edges_parallel(0, n).unwrap();
    assert_eq!(first, complete_pair_count(n));

    // Every pair already exists; workers suppress EdgeAlreadyExists.
    let second = matrix.add_edges_parallel(0, n).unwrap();
    assert_eq!(second, 0);
    assert_eq!(matrix.edge_count(), complete_pair_count(n));
}

#[test]
fn test_partial_range_insert() {
    let n = 30;
    let matrix = IncidenceMatrix::new(true);
    for id in 0..n {
        matrix.add_node(NodeId::new(id)).unwrap();
    }

    // Sources [0, 10) against all 30 targets: pairs within [0,10) plus
    // pairs bridging into [10,30).
    let inserted = matrix.add_edges_parallel(0, 10).unwrap();
    let expected = complete_pair_count(10) + 10 * 20;
    assert_eq!(inserted, expected);
    assert_eq!(matrix.edge_count(), expected);

    assert!(matrix.has_edge(NodeId::new(0), NodeId::new(29)));
    assert!(!matrix.has_edge(NodeId::new(15), NodeId::new(29)));
}

#[test]
fn test_bulk_insert_missing_source_fails() {
    let matrix = IncidenceMatrix::new(true);
    for id in 0..5 {
        matrix.add_node(NodeId::new(id)).unwrap();
    }

    // Source range reaches past the node set; workers propagate the error.
    let err = matrix.add_edges_parallel(0, 6);
    assert!(matches!(err, Err(GraphError::NodeNotFound(_))));
}

#[test]
fn test_empty_range_is_noop() {
    let matrix = IncidenceMatrix::new(true);
    for id in 0..3 {
        matrix.add_node(NodeId::new(id)).unwrap();
    }

    assert_eq!(matrix.add_edges_parallel(2, 2).unwrap(), 0);
    assert_eq!(matrix.edge_count(), 0);
}
