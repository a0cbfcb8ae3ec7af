//! Undirected weighted multigraphs.
//!
//! Purpose
//! - `WeightedMultigraph` is the capability the solvers need: dense vertex and
//!   edge indices, adjacency lists, per-edge weights, edge removal.
//! - `Graph` is the plain adjacency-list implementation.
//! - `GeometricGraph` wraps a `Graph` and attaches 3-D coordinates, vertex
//!   dedup by distance and the tolerance triple used by the path solver.
//!
//! Invariants
//! - Vertex ids are `0..num_vertex()`, edge ids are `0..num_edge()`.
//! - Adjacency lists always mirror the edge list; removing edge `k` shifts every
//!   higher edge id down by one.
//! - Parallel edges are allowed; `reachable_neighbors` reports the lightest.

use std::collections::BTreeMap;

mod geometric;
mod multigraph;

pub use geometric::GeometricGraph;
pub use multigraph::Graph;

pub type VertexId = usize;
pub type EdgeId = usize;
/// Unordered endpoint pair, stored in insertion order.
pub type Edge = (VertexId, VertexId);

/// Adjacency-list multigraph with dense indices and scalar edge weights.
pub trait WeightedMultigraph {
    fn num_vertex(&self) -> usize;
    fn num_edge(&self) -> usize;

    /// Insert an edge; returns its id, or `None` if the implementation rejects
    /// the endpoints.
    fn add_edge(&mut self, i: VertexId, j: VertexId, weight: f64) -> Option<EdgeId>;

    /// Some edge joining `i` and `j` (either orientation).
    fn find_edge(&self, i: VertexId, j: VertexId) -> Option<EdgeId>;

    /// Remove edge `k` and renumber higher edge ids; returns what was removed.
    fn remove_edge(&mut self, k: EdgeId) -> Option<(Edge, f64)>;

    /// Edge ids incident to `v` (empty for unknown vertices).
    fn adjacent_edges(&self, v: VertexId) -> &[EdgeId];

    fn edge(&self, k: EdgeId) -> Option<Edge>;
    fn weight(&self, k: EdgeId) -> Option<f64>;

    /// The endpoint of `k` that is not `v`; `None` if `v` is not on `k`.
    fn opposite(&self, v: VertexId, k: EdgeId) -> Option<VertexId> {
        let (a, b) = self.edge(k)?;
        if a == v {
            Some(b)
        } else if b == v {
            Some(a)
        } else {
            None
        }
    }

    /// Neighbours of `v` with the minimum weight over parallel edges.
    fn reachable_neighbors(&self, v: VertexId) -> BTreeMap<VertexId, f64> {
        let mut out = BTreeMap::new();
        for &k in self.adjacent_edges(v) {
            let (Some(u), Some(w)) = (self.opposite(v, k), self.weight(k)) else {
                continue;
            };
            out.entry(u)
                .and_modify(|best: &mut f64| *best = best.min(w))
                .or_insert(w);
        }
        out
    }

    /// Sum of weights of the given edges; unknown ids contribute nothing.
    fn total_weight(&self, edges: &[EdgeId]) -> f64 {
        edges.iter().filter_map(|&k| self.weight(k)).sum()
    }
}
