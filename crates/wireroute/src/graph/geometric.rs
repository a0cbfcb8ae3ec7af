//! Graph whose vertices carry 3-D coordinates.

use super::{Edge, EdgeId, Graph, VertexId, WeightedMultigraph};
use crate::cfg::TolCfg;
use crate::error::RouteError;
use crate::geom3::{Vec3, VecExt};

/// Multigraph with coordinates, vertex dedup and a tolerance triple.
///
/// Invariants:
/// - `vertices.len() == graph.num_vertex()`; edges only join known vertices.
/// - `add_vertex` never creates two vertices closer than `tol.abs_err`
///   (`add_vertex_simply` bypasses this for callers that know better).
/// - `add_edge` skips self-loops and returns the existing id for an already
///   connected pair.
#[derive(Clone, Debug, Default)]
pub struct GeometricGraph {
    graph: Graph,
    vertices: Vec<Vec3>,
    tol: TolCfg,
}

impl GeometricGraph {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty graph with the given tolerances; rejects tolerances that
    /// `TolCfg::validated` rejects.
    pub fn with_tol(tol: TolCfg) -> Result<Self, RouteError> {
        Ok(Self {
            tol: tol.validated()?,
            ..Self::default()
        })
    }

    #[inline]
    pub fn tol(&self) -> TolCfg {
        self.tol
    }

    /// Replace the tolerances; on error the current ones are kept.
    pub fn set_tol(&mut self, tol: TolCfg) -> Result<(), RouteError> {
        self.tol = tol.validated()?;
        Ok(())
    }

    /// Underlying topology (for algorithms that only need the multigraph).
    #[inline]
    pub fn as_graph(&self) -> &Graph {
        &self.graph
    }

    #[inline]
    pub fn vertex(&self, v: VertexId) -> Option<Vec3> {
        self.vertices.get(v).copied()
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// First vertex within `abs_err` of `p`.
    pub fn find_vertex(&self, p: &Vec3) -> Option<VertexId> {
        self.vertices
            .iter()
            .position(|q| q.metric_distance(p) < self.tol.abs_err)
    }

    /// Index of the vertex at `p`, inserting it if none is close enough.
    pub fn add_vertex(&mut self, p: Vec3) -> VertexId {
        match self.find_vertex(&p) {
            Some(v) => v,
            None => self.add_vertex_simply(p),
        }
    }

    /// Append a vertex without looking for duplicates.
    pub fn add_vertex_simply(&mut self, p: Vec3) -> VertexId {
        let v = self.vertices.len();
        self.vertices.push(p);
        self.graph.set_vertex_num(self.vertices.len());
        v
    }

    /// Append an edge without the duplicate-pair check.
    pub fn add_edge_simply(&mut self, i: VertexId, j: VertexId, weight: f64) -> Option<EdgeId> {
        if i == j || i.max(j) >= self.vertices.len() {
            return None;
        }
        self.graph.add_edge(i, j, weight)
    }

    /// Connect `i` and `j` with edges weighted by length, routing the
    /// connection through every existing vertex that lies strictly between
    /// them on the segment (parallelism within `rel_err`), in order.
    ///
    /// Returns the ids of the chain edges (new or already present).
    pub fn add_edge_safely(&mut self, i: VertexId, j: VertexId) -> Vec<EdgeId> {
        if i == j || i.max(j) >= self.vertices.len() {
            return Vec::new();
        }
        if let Some(k) = self.graph.find_edge(i, j) {
            return vec![k];
        }
        let rel = self.tol.rel_err;
        let pi = self.vertices[i];
        let u = self.vertices[j] - pi;
        let mut inner: Vec<(f64, VertexId)> = self
            .vertices
            .iter()
            .enumerate()
            .filter(|&(v, _)| v != i && v != j)
            .filter_map(|(v, q)| {
                let w = q - pi;
                if !w.is_parallel(&u, rel) {
                    return None;
                }
                let t = w.proj_ratio(&u);
                (rel < t && t < 1.0 - rel).then_some((t, v))
            })
            .collect();
        inner.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut chain = Vec::with_capacity(inner.len() + 1);
        let mut start = i;
        for v in inner.into_iter().map(|(_, v)| v).chain(std::iter::once(j)) {
            let w = self.vertices[start].metric_distance(&self.vertices[v]);
            if let Some(k) = self.add_edge(start, v, w) {
                chain.push(k);
            }
            start = v;
        }
        chain
    }

    /// Edge between the vertices at `p1` and `p2`.
    pub fn find_edge_by_points(&self, p1: &Vec3, p2: &Vec3) -> Option<EdgeId> {
        let i = self.find_vertex(p1)?;
        let j = self.find_vertex(p2)?;
        self.graph.find_edge(i, j)
    }

    /// Vector from the first to the second endpoint of `k`.
    pub fn edge_direction(&self, k: EdgeId, normalized: bool) -> Option<Vec3> {
        let (a, b) = self.graph.edge(k)?;
        let d = self.vertices[b] - self.vertices[a];
        Some(if normalized {
            d.unit_or_zero(self.tol.rel_err)
        } else {
            d
        })
    }

    /// Whether `p` lies strictly inside edge `k` (or the edge is shorter than
    /// `rel_err` and `p` sits on it).
    pub fn point_lies_in_edge(&self, p: &Vec3, k: EdgeId) -> bool {
        let Some((a, b)) = self.graph.edge(k) else {
            return false;
        };
        let rel = self.tol.rel_err;
        let (e0, e1) = (self.vertices[a], self.vertices[b]);
        if p.metric_distance(&e0) < rel && p.metric_distance(&e1) < rel {
            return true;
        }
        if e0.metric_distance(&e1) < rel {
            return false;
        }
        let u = e1 - e0;
        let w = p - e0;
        let t = w.proj_ratio(&u);
        u.is_parallel(&w, rel) && rel < t && t < 1.0 - rel
    }

    /// Split edge `k` at `p` (deduplicated against existing vertices) into two
    /// length-weighted edges. Returns the vertex at `p`.
    pub fn break_edge_with_point(&mut self, p: Vec3, k: EdgeId) -> Option<VertexId> {
        let (e0, e1) = self.graph.edge(k)?;
        let n = self.add_vertex(p);
        if n == e0 || n == e1 {
            return Some(n);
        }
        self.graph.remove_edge(k);
        let w0 = self.vertices[e0].metric_distance(&self.vertices[n]);
        let w1 = self.vertices[e1].metric_distance(&self.vertices[n]);
        self.add_edge(e0, n, w0);
        self.add_edge(e1, n, w1);
        Some(n)
    }

    /// Split edge `k` at a brand-new vertex placed at `p`, skipping dedup.
    pub fn break_edge_with_new_point(&mut self, p: Vec3, k: EdgeId) -> Option<VertexId> {
        let (e0, e1) = self.graph.edge(k)?;
        let n = self.add_vertex_simply(p);
        self.graph.remove_edge(k);
        let w0 = self.vertices[e0].metric_distance(&p);
        let w1 = self.vertices[e1].metric_distance(&p);
        self.add_edge_simply(e0, n, w0);
        self.add_edge_simply(e1, n, w1);
        Some(n)
    }

    #[inline]
    pub fn connected(&self) -> bool {
        self.graph.connected()
    }

    #[inline]
    pub fn check_connected(&self, subset: &[VertexId]) -> bool {
        self.graph.check_connected(subset)
    }

    #[inline]
    pub fn set_edge_weight(&mut self, k: EdgeId, w: f64) -> bool {
        self.graph.set_edge_weight(k, w)
    }
}

impl WeightedMultigraph for GeometricGraph {
    #[inline]
    fn num_vertex(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn num_edge(&self) -> usize {
        self.graph.num_edge()
    }

    /// Rejects self-loops and unknown vertices; an existing `i–j` edge is
    /// returned instead of adding a parallel one.
    fn add_edge(&mut self, i: VertexId, j: VertexId, weight: f64) -> Option<EdgeId> {
        if i == j || i.max(j) >= self.vertices.len() {
            return None;
        }
        if let Some(k) = self.graph.find_edge(i, j) {
            return Some(k);
        }
        self.graph.add_edge(i, j, weight)
    }

    #[inline]
    fn find_edge(&self, i: VertexId, j: VertexId) -> Option<EdgeId> {
        self.graph.find_edge(i, j)
    }

    #[inline]
    fn remove_edge(&mut self, k: EdgeId) -> Option<(Edge, f64)> {
        self.graph.remove_edge(k)
    }

    #[inline]
    fn adjacent_edges(&self, v: VertexId) -> &[EdgeId] {
        self.graph.adjacent_edges(v)
    }

    #[inline]
    fn edge(&self, k: EdgeId) -> Option<Edge> {
        self.graph.edge(k)
    }

    #[inline]
    fn weight(&self, k: EdgeId) -> Option<f64> {
        self.graph.weight(k)
    }
}
