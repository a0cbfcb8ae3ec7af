//! Plain adjacency-list multigraph.

use std::collections::VecDeque;

use super::{Edge, EdgeId, VertexId, WeightedMultigraph};

/// Undirected multigraph; vertices exist implicitly up to the highest index used.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    edges: Vec<Edge>,
    weights: Vec<f64>,
    adj: Vec<Vec<EdgeId>>,
}

impl Graph {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph with `n` isolated vertices.
    pub fn with_vertices(n: usize) -> Self {
        let mut g = Self::new();
        g.set_vertex_num(n);
        g
    }

    /// Grow (or shrink) the vertex set. Shrinking below an edge endpoint is
    /// the caller's responsibility.
    pub fn set_vertex_num(&mut self, n: usize) {
        self.adj.resize_with(n, Vec::new);
    }

    pub fn set_edge_weight(&mut self, k: EdgeId, w: f64) -> bool {
        match self.weights.get_mut(k) {
            Some(slot) => {
                *slot = w;
                true
            }
            None => false,
        }
    }

    /// `(id, endpoints, weight)` for every edge.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, Edge, f64)> + '_ {
        self.edges
            .iter()
            .zip(&self.weights)
            .enumerate()
            .map(|(k, (&e, &w))| (k, e, w))
    }

    /// Every vertex reachable from every other.
    pub fn connected(&self) -> bool {
        let all: Vec<VertexId> = (0..self.num_vertex()).collect();
        self.check_connected(&all)
    }

    /// Whether all of `subset` lies in one connected component. The search may
    /// pass through vertices outside the subset.
    pub fn check_connected(&self, subset: &[VertexId]) -> bool {
        let Some(&seed) = subset.first() else {
            return true;
        };
        let n = self.num_vertex();
        if subset.iter().any(|&v| v >= n) {
            return false;
        }
        let mut visited = vec![false; n];
        let mut queue = VecDeque::from([seed]);
        visited[seed] = true;
        while let Some(v) = queue.pop_front() {
            for &k in &self.adj[v] {
                if let Some(u) = self.opposite(v, k) {
                    if !visited[u] {
                        visited[u] = true;
                        queue.push_back(u);
                    }
                }
            }
        }
        subset.iter().all(|&v| visited[v])
    }
}

impl WeightedMultigraph for Graph {
    #[inline]
    fn num_vertex(&self) -> usize {
        self.adj.len()
    }

    #[inline]
    fn num_edge(&self) -> usize {
        self.edges.len()
    }

    /// Always accepts; grows the vertex set to cover both endpoints.
    fn add_edge(&mut self, i: VertexId, j: VertexId, weight: f64) -> Option<EdgeId> {
        let need = i.max(j) + 1;
        if need > self.adj.len() {
            self.set_vertex_num(need);
        }
        let k = self.edges.len();
        self.edges.push((i, j));
        self.weights.push(weight);
        self.adj[i].push(k);
        self.adj[j].push(k);
        Some(k)
    }

    fn find_edge(&self, i: VertexId, j: VertexId) -> Option<EdgeId> {
        let n = self.adj.len();
        if i >= n || j >= n {
            return None;
        }
        // scan the shorter adjacency list
        let v = if self.adj[i].len() <= self.adj[j].len() { i } else { j };
        self.adj[v].iter().copied().find(|&k| {
            let (a, b) = self.edges[k];
            (a == i && b == j) || (a == j && b == i)
        })
    }

    fn remove_edge(&mut self, k: EdgeId) -> Option<(Edge, f64)> {
        if k >= self.edges.len() {
            return None;
        }
        let (i, j) = self.edges[k];
        for v in [i, j] {
            if let Some(pos) = self.adj[v].iter().position(|&x| x == k) {
                self.adj[v].remove(pos);
            }
        }
        for list in &mut self.adj {
            for x in list.iter_mut() {
                if *x > k {
                    *x -= 1;
                }
            }
        }
        let e = self.edges.remove(k);
        let w = self.weights.remove(k);
        Some((e, w))
    }

    #[inline]
    fn adjacent_edges(&self, v: VertexId) -> &[EdgeId] {
        self.adj.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    fn edge(&self, k: EdgeId) -> Option<Edge> {
        self.edges.get(k).copied()
    }

    #[inline]
    fn weight(&self, k: EdgeId) -> Option<f64> {
        self.weights.get(k).copied()
    }
}
