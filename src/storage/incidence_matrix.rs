//! Incidence-matrix storage backend
//!
//! Rows are indexed by node, columns by edge: each live column carries two
//! signed endpoint entries (`+w` at the source row, `-w` at the destination
//! row; undirected columns use `+w`/`+w`). An exact-match pair index gives
//! O(1) duplicate and existence checks without scanning columns; the matrix
//! is the source of truth and the index is kept in lockstep under the same
//! lock.
//!
//! Removal tombstones the column (NaN fill, liveness flag cleared) instead
//! of shifting later columns left. Tombstoned columns are never reused.
//!
//! All shared state lives behind one mutex, and every mutating operation
//! holds it for its full duration. The bulk-insert path partitions the
//! candidate pair space across a fixed pool of OS threads that all funnel
//! through the same lock, so duplicate detection and the edge count stay
//! exact under concurrency.

use crate::graph::error::{GraphError, GraphResult};
use crate::graph::types::{EdgeKey, NodeId};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use std::thread;

/// Sentinel fill for tombstoned columns.
const TOMBSTONE: f64 = f64::NAN;

#[derive(Debug, Default)]
struct Inner {
    /// node rows x edge columns; 0.0 marks no incidence
    rows: Vec<Vec<f64>>,
    /// node id -> row index
    node_slots: FxHashMap<NodeId, usize>,
    /// row index -> node id
    slot_ids: Vec<NodeId>,
    /// row presence bitset
    node_alive: Vec<bool>,
    /// logically-deleted rows available for reuse
    free_slots: Vec<usize>,
    /// column index -> arc as inserted
    columns: Vec<EdgeKey>,
    /// column liveness; false marks a tombstone
    col_alive: Vec<bool>,
    /// normalized pair -> column index, kept in lockstep with the matrix
    edge_index: FxHashMap<EdgeKey, usize>,
    /// live columns
    edge_count: usize,
}

impl Inner {
    fn width(&self) -> usize {
        self.columns.len()
    }

    fn slot_of(&self, id: NodeId) -> GraphResult<usize> {
        match self.node_slots.get(&id) {
            Some(&slot) if self.node_alive[slot] => Ok(slot),
            _ => Err(GraphError::NodeNotFound(id)),
        }
    }
}

/// One edge per unordered node pair: `(a, b)` and `(b, a)` index the same
/// column even in directed mode (direction lives in the column signs).
fn canonical(src: NodeId, dst: NodeId) -> EdgeKey {
    if src <= dst {
        EdgeKey::new(src, dst)
    } else {
        EdgeKey::new(dst, src)
    }
}

/// Incidence-matrix backend.
pub struct IncidenceMatrix {
    inner: Mutex<Inner>,
    directed: bool,
}

impl IncidenceMatrix {
    pub fn new(directed: bool) -> Self {
        IncidenceMatrix {
            inner: Mutex::new(Inner::default()),
            directed,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn add_node(&self, id: NodeId) -> GraphResult<()> {
        let mut inner = self.inner.lock();
        if let Some(&slot) = inner.node_slots.get(&id) {
            if inner.node_alive[slot] {
                return Ok(());
            }
        }

        let width = inner.width();
        if let Some(slot) = inner.free_slots.pop() {
            inner.rows[slot].clear();
            inner.rows[slot].resize(width, 0.0);
            inner.slot_ids[slot] = id;
            inner.node_alive[slot] = true;
            inner.node_slots.insert(id, slot);
        } else {
            inner.rows.try_reserve(1)?;
            inner.rows.push(vec![0.0; width]);
            inner.slot_ids.push(id);
            inner.node_alive.push(true);
            let slot = inner.rows.len() - 1;
            inner.node_slots.insert(id, slot);
        }
        Ok(())
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        let inner = self.inner.lock();
        inner.slot_of(id).is_ok()
    }

    /// Tombstone every column incident on the node, then free its row.
    /// Returns the number of edges removed.
    pub fn remove_node(&self, id: NodeId) -> GraphResult<usize> {
        let mut inner = self.inner.lock();
        let slot = inner.slot_of(id)?;

        let incident: Vec<usize> = inner
            .columns
            .iter()
            .enumerate()
            .filter(|(col, key)| {
                inner.col_alive[*col] && (key.src == id || key.dst == id)
            })
            .map(|(col, _)| col)
            .collect();

        for &col in &incident {
            tombstone_column(&mut inner, col);
        }

        inner.node_slots.remove(&id);
        inner.node_alive[slot] = false;
        inner.free_slots.push(slot);
        Ok(incident.len())
    }

    /// Append a column for the pair. Fails with `EdgeAlreadyExists` if the
    /// pair is already indexed (in either orientation).
    pub fn add_edge(&self, src: NodeId, dst: NodeId, weight: Option<f64>) -> GraphResult<()> {
        let mut inner = self.inner.lock();
        let s = inner.slot_of(src)?;
        let d = inner.slot_of(dst)?;

        let canon = canonical(src, dst);
        if inner.edge_index.contains_key(&canon) {
            return Err(GraphError::EdgeAlreadyExists(EdgeKey::new(src, dst)));
        }

        let col = inner.width();
        let w = weight.unwrap_or(1.0);
        for row in inner.rows.iter_mut() {
            row.push(0.0);
        }
        inner.rows[s][col] = w;
        if s != d {
            inner.rows[d][col] = if self.directed { -w } else { w };
        }

        inner.columns.push(EdgeKey::new(src, dst));
        inner.col_alive.push(true);
        inner.edge_index.insert(canon, col);
        inner.edge_count += 1;
        Ok(())
    }

    /// O(1) existence check via the pair index.
    pub fn has_edge(&self, src: NodeId, dst: NodeId) -> bool {
        let inner = self.inner.lock();
        inner.edge_index.contains_key(&canonical(src, dst))
    }

    /// Tombstone the pair's column. Fails with `EdgeDoesNotExist` if the
    /// pair is not indexed.
    pub fn remove_edge(&self, src: NodeId, dst: NodeId) -> GraphResult<()> {
        let mut inner = self.inner.lock();
        let canon = canonical(src, dst);
        let col = match inner.edge_index.get(&canon) {
            Some(&col) => col,
            None => return Err(GraphError::EdgeDoesNotExist(EdgeKey::new(src, dst))),
        };
        tombstone_column(&mut inner, col);
        Ok(())
    }

    /// Scan live columns for arcs leaving the node (plus arcs touching it in
    /// either orientation when undirected).
    pub fn neighbors(&self, id: NodeId) -> GraphResult<Vec<NodeId>> {
        let inner = self.inner.lock();
        if inner.slot_of(id).is_err() {
            return Err(GraphError::InvalidNode(id));
        }

        let mut out = Vec::new();
        for (col, key) in inner.columns.iter().enumerate() {
            if !inner.col_alive[col] {
                continue;
            }
            if key.src == id {
                out.push(key.dst);
            } else if !self.directed && key.dst == id {
                out.push(key.src);
            }
        }
        Ok(out)
    }

    /// Signed weight of the arc at the source endpoint, if the pair exists.
    pub fn edge_weight(&self, src: NodeId, dst: NodeId) -> Option<f64> {
        let inner = self.inner.lock();
        let col = *inner.edge_index.get(&canonical(src, dst))?;
        let key = inner.columns[col];
        let slot = *inner.node_slots.get(&key.src)?;
        Some(inner.rows[slot][col])
    }

    pub fn node_count(&self) -> usize {
        self.inner.lock().node_slots.len()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.lock().edge_count
    }

    /// Total columns including tombstones.
    pub fn column_count(&self) -> usize {
        self.inner.lock().width()
    }

    /// Pre-grow every row (and the column tables) for `n` additional
    /// columns under the lock, so concurrent insertions never race a
    /// reallocation.
    pub fn prepare_parallel_edges(&self, n: usize) -> GraphResult<()> {
        let mut inner = self.inner.lock();
        for row in inner.rows.iter_mut() {
            row.try_reserve(n)?;
        }
        inner.columns.try_reserve(n)?;
        inner.col_alive.try_reserve(n)?;
        inner.edge_index.try_reserve(n)?;
        Ok(())
    }

    /// Bulk-insert the candidate pair space `[start, end) x all nodes`
    /// across a fixed worker pool. Every worker funnels through the same
    /// mutex-guarded [`add_edge`](Self::add_edge); `EdgeAlreadyExists` is
    /// suppressed per worker as the expected race outcome, self-pairs are
    /// skipped, and any other error aborts the batch. Returns the number of
    /// edges inserted.
    ///
    /// Which worker inserts a given pair first is nondeterministic, but the
    /// final edge count and pair index are not: the lock serializes every
    /// check-and-insert.
    pub fn add_edges_parallel(&self, start: u64, end: u64) -> GraphResult<usize> {
        let targets: Vec<NodeId> = {
            let inner = self.inner.lock();
            inner
                .node_slots
                .keys()
                .copied()
                .collect()
        };

        let workers = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        let span = (end.saturating_sub(start)) as usize;
        if span == 0 || targets.is_empty() {
            return Ok(0);
        }
        let chunk = span.div_ceil(workers);

        let mut inserted = 0;
        thread::scope(|scope| -> GraphResult<()> {
            let mut handles = Vec::with_capacity(workers);
            for w in 0..workers {
                let lo = start + (w * chunk) as u64;
                let hi = (lo + chunk as u64).min(end);
                if lo >= hi {
                    break;
                }
                let targets = &targets;
                handles.push(scope.spawn(move || -> GraphResult<usize> {
                    let mut count = 0;
                    for src in lo..hi {
                        let src = NodeId::new(src);
                        for &dst in targets {
                            if src == dst {
                                continue;
                            }
                            match self.add_edge(src, dst, None) {
                                Ok(()) => count += 1,
                                Err(GraphError::EdgeAlreadyExists(_)) => {}
                                Err(e) => return Err(e),
                            }
                        }
                    }
                    Ok(count)
                }));
            }

            for handle in handles {
                match handle.join() {
                    Ok(result) => inserted += result?,
                    Err(panic) => std::panic::resume_unwind(panic),
                }
            }
            Ok(())
        })?;

        Ok(inserted)
    }
}

fn tombstone_column(inner: &mut Inner, col: usize) {
    for row in inner.rows.iter_mut() {
        row[col] = TOMBSTONE;
    }
    inner.col_alive[col] = false;
    let key = inner.columns[col];
    inner.edge_index.remove(&canonical(key.src, key.dst));
    inner.edge_count -= 1;
}

impl std::fmt::Debug for IncidenceMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("IncidenceMatrix")
            .field("directed", &self.directed)
            .field("nodes", &inner.node_slots.len())
            .field("edges", &inner.edge_count)
            .field("columns", &inner.width())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn incidence_with_nodes(directed: bool, n: u64) -> IncidenceMatrix {
        let m = IncidenceMatrix::new(directed);
        for id in 0..n {
            m.add_node(NodeId::new(id)).unwrap();
        }
        m
    }

    #[test]
    fn test_signed_column_entries() {
        let m = incidence_with_nodes(true, 2);
        m.add_edge(NodeId::new(0), NodeId::new(1), Some(3.0)).unwrap();

        assert_eq!(m.edge_weight(NodeId::new(0), NodeId::new(1)), Some(3.0));
        assert_eq!(m.edge_count(), 1);
        assert!(m.has_edge(NodeId::new(0), NodeId::new(1)));
        // Same unordered pair from the other side.
        assert!(m.has_edge(NodeId::new(1), NodeId::new(0)));
    }

    #[test]
    fn test_duplicate_pair_rejected_both_orientations() {
        let m = incidence_with_nodes(true, 2);
        m.add_edge(NodeId::new(0), NodeId::new(1), None).unwrap();

        let err = m.add_edge(NodeId::new(0), NodeId::new(1), None);
        assert_eq!(
            err,
            Err(GraphError::EdgeAlreadyExists(EdgeKey::new(
                NodeId::new(0),
                NodeId::new(1)
            )))
        );
        let err = m.add_edge(NodeId::new(1), NodeId::new(0), None);
        assert_eq!(
            err,
            Err(GraphError::EdgeAlreadyExists(EdgeKey::new(
                NodeId::new(1),
                NodeId::new(0)
            )))
        );
    }

    #[test]
    fn test_tombstone_removal() {
        let m = incidence_with_nodes(true, 3);
        m.add_edge(NodeId::new(0), NodeId::new(1), None).unwrap();
        m.add_edge(NodeId::new(1), NodeId::new(2), None).unwrap();

        m.remove_edge(NodeId::new(0), NodeId::new(1)).unwrap();

        // Column stays allocated; liveness and count drop.
        assert_eq!(m.column_count(), 2);
        assert_eq!(m.edge_count(), 1);
        assert!(!m.has_edge(NodeId::new(0), NodeId::new(1)));
        assert!(m.has_edge(NodeId::new(1), NodeId::new(2)));

        let err = m.remove_edge(NodeId::new(0), NodeId::new(1));
        assert_eq!(
            err,
            Err(GraphError::EdgeDoesNotExist(EdgeKey::new(
                NodeId::new(0),
                NodeId::new(1)
            )))
        );
    }

    #[test]
    fn test_neighbors_directed_and_undirected() {
        let m = incidence_with_nodes(true, 3);
        m.add_edge(NodeId::new(0), NodeId::new(1), None).unwrap();
        m.add_edge(NodeId::new(2), NodeId::new(0), None).unwrap();

        // Directed: out-arcs only.
        assert_eq!(m.neighbors(NodeId::new(0)).unwrap(), vec![NodeId::new(1)]);

        let u = incidence_with_nodes(false, 3);
        u.add_edge(NodeId::new(0), NodeId::new(1), None).unwrap();
        u.add_edge(NodeId::new(2), NodeId::new(0), None).unwrap();

        let mut n = u.neighbors(NodeId::new(0)).unwrap();
        n.sort();
        assert_eq!(n, vec![NodeId::new(1), NodeId::new(2)]);
    }

    #[test]
    fn test_remove_node_cascades() {
        let m = incidence_with_nodes(true, 3);
        m.add_edge(NodeId::new(0), NodeId::new(1), None).unwrap();
        m.add_edge(NodeId::new(1), NodeId::new(2), None).unwrap();
        m.add_edge(NodeId::new(2), NodeId::new(0), None).unwrap();

        let removed = m.remove_node(NodeId::new(1)).unwrap();
        assert_eq!(removed, 2);
        assert_eq!(m.edge_count(), 1);
        assert!(!m.has_node(NodeId::new(1)));
        assert_eq!(
            m.neighbors(NodeId::new(1)),
            Err(GraphError::InvalidNode(NodeId::new(1)))
        );
        assert_eq!(m.neighbors(NodeId::new(2)).unwrap(), vec![NodeId::new(0)]);
    }

    #[test]
    fn test_node_slot_reuse() {
        let m = incidence_with_nodes(true, 2);
        m.add_edge(NodeId::new(0), NodeId::new(1), None).unwrap();
        m.remove_node(NodeId::new(0)).unwrap();

        m.add_node(NodeId::new(7)).unwrap();
        assert_eq!(m.node_count(), 2);
        m.add_edge(NodeId::new(7), NodeId::new(1), None).unwrap();
        assert_eq!(m.neighbors(NodeId::new(7)).unwrap(), vec![NodeId::new(1)]);
    }

    #[test]
    fn test_missing_endpoint() {
        let m = incidence_with_nodes(true, 1);
        let err = m.add_edge(NodeId::new(0), NodeId::new(5), None);
        assert_eq!(err, Err(GraphError::NodeNotFound(NodeId::new(5))));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let n = 20;
        let parallel = incidence_with_nodes(true, n);
        parallel
            .prepare_parallel_edges((n * (n - 1) / 2) as usize)
            .unwrap();
        let inserted = parallel.add_edges_parallel(0, n).unwrap();

        let sequential = incidence_with_nodes(true, n);
        let mut seq_inserted = 0;
        for src in 0..n {
            for dst in 0..n {
                if src == dst {
                    continue;
                }
                match sequential.add_edge(NodeId::new(src), NodeId::new(dst), None) {
                    Ok(()) => seq_inserted += 1,
                    Err(GraphError::EdgeAlreadyExists(_)) => {}
                    Err(e) => panic!("unexpected error: {e}"),
                }
            }
        }

        assert_eq!(inserted, seq_inserted);
        assert_eq!(parallel.edge_count(), sequential.edge_count());
        assert_eq!(parallel.edge_count(), (n * (n - 1) / 2) as usize);
    }
}
