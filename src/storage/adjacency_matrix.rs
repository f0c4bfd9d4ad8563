//! Adjacency-matrix storage backend
//!
//! Node-by-node grid with a presence bitset: removal clears a slot's row and
//! column and unsets its presence bit instead of compacting the matrix, and
//! freed slots are reused by later insertions. Storage never shrinks.

use crate::graph::error::{GraphError, GraphResult};
use crate::graph::types::{EdgeKey, NodeId};
use rustc_hash::FxHashMap;

/// One occupied cell. `weight` is `Some` only for weighted edges.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    weight: Option<f64>,
}

/// Adjacency-matrix backend.
#[derive(Debug, Default)]
pub struct AdjacencyMatrix {
    /// capacity x capacity grid; `None` cells are absent edges
    matrix: Vec<Vec<Option<Cell>>>,
    /// node id -> slot index
    slots: FxHashMap<NodeId, usize>,
    /// slot index -> node id (stale entries possible where `alive` is unset)
    slot_ids: Vec<NodeId>,
    /// presence bitset
    alive: Vec<bool>,
    /// logically-deleted slots available for reuse
    free: Vec<usize>,
    directed: bool,
    edge_count: usize,
}

impl AdjacencyMatrix {
    pub fn new(directed: bool) -> Self {
        AdjacencyMatrix {
            matrix: Vec::new(),
            slots: FxHashMap::default(),
            slot_ids: Vec::new(),
            alive: Vec::new(),
            free: Vec::new(),
            directed,
            edge_count: 0,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Reuse a logically-deleted slot when one exists; otherwise grow the
    /// grid by one row and one column, reallocating every row.
    pub fn add_node(&mut self, id: NodeId) -> GraphResult<()> {
        if self.slots.contains_key(&id) {
            return Ok(());
        }

        let slot = if let Some(slot) = self.free.pop() {
            // Row and column were cleared when the slot was freed.
            self.slot_ids[slot] = id;
            self.alive[slot] = true;
            slot
        } else {
            let capacity = self.matrix.len();
            for row in &mut self.matrix {
                row.try_reserve(1)?;
                row.push(None);
            }
            self.matrix.try_reserve(1)?;
            self.matrix.push(vec![None; capacity + 1]);
            self.slot_ids.push(id);
            self.alive.push(true);
            capacity
        };

        self.slots.insert(id, slot);
        Ok(())
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Clear the node's row and column and unset its presence bit; the
    /// matrix itself does not shrink. Returns the number of logical edges
    /// removed.
    pub fn remove_node(&mut self, id: NodeId) -> GraphResult<usize> {
        let slot = self
            .slots
            .remove(&id)
            .ok_or(GraphError::NodeNotFound(id))?;

        let mut removed = 0;
        let capacity = self.matrix.len();
        for j in 0..capacity {
            if self.matrix[slot][j].take().is_some() {
                removed += 1;
            }
        }
        for i in 0..capacity {
            if i != slot && self.matrix[i][slot].take().is_some() {
                // Undirected cells are mirrored; the row pass counted them.
                if self.directed {
                    removed += 1;
                }
            }
        }

        self.alive[slot] = false;
        self.free.push(slot);
        self.edge_count -= removed;
        Ok(removed)
    }

    /// O(1) cell write; mirrored when undirected. Writing over an occupied
    /// cell updates the weight without changing the edge count.
    pub fn add_edge(&mut self, src: NodeId, dst: NodeId, weight: Option<f64>) -> GraphResult<()> {
        let (s, d) = (self.slot_of(src)?, self.slot_of(dst)?);

        if self.matrix[s][d].is_none() {
            self.edge_count += 1;
        }
        self.matrix[s][d] = Some(Cell { weight });
        if !self.directed {
            self.matrix[d][s] = Some(Cell { weight });
        }
        Ok(())
    }

    pub fn has_edge(&self, src: NodeId, dst: NodeId) -> bool {
        match (self.slots.get(&src), self.slots.get(&dst)) {
            (Some(&s), Some(&d)) => self.matrix[s][d].is_some(),
            _ => false,
        }
    }

    pub fn edge_weight(&self, src: NodeId, dst: NodeId) -> Option<f64> {
        let s = self.slots.get(&src)?;
        let d = self.slots.get(&dst)?;
        self.matrix[*s][*d].and_then(|cell| cell.weight)
    }

    /// O(1) cell clear; fails if the cell is already absent.
    pub fn remove_edge(&mut self, src: NodeId, dst: NodeId) -> GraphResult<()> {
        let (s, d) = (self.slot_of(src)?, self.slot_of(dst)?);

        if self.matrix[s][d].take().is_none() {
            return Err(GraphError::EdgeNotFound(EdgeKey::new(src, dst)));
        }
        if !self.directed {
            self.matrix[d][s] = None;
        }
        self.edge_count -= 1;
        Ok(())
    }

    /// Row scan, O(V). Fails with `InvalidNode` when the presence bit is
    /// unset or the node was never inserted.
    pub fn neighbors(&self, id: NodeId) -> GraphResult<Vec<NodeId>> {
        let slot = *self.slots.get(&id).ok_or(GraphError::InvalidNode(id))?;
        if !self.alive[slot] {
            return Err(GraphError::InvalidNode(id));
        }

        Ok(self.matrix[slot]
            .iter()
            .enumerate()
            .filter_map(|(j, cell)| {
                if cell.is_some() && self.alive[j] {
                    Some(self.slot_ids[j])
                } else {
                    None
                }
            })
            .collect())
    }

    pub fn node_count(&self) -> usize {
        self.slots.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Current grid capacity (live plus logically-deleted slots).
    pub fn capacity(&self) -> usize {
        self.matrix.len()
    }

    fn slot_of(&self, id: NodeId) -> GraphResult<usize> {
        self.slots
            .get(&id)
            .copied()
            .ok_or(GraphError::NodeNotFound(id))
    }
}
