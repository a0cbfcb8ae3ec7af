//! Bend-minimizing shortest paths (generalized Dijkstra over `CostBend`).
//!
//! Each vertex is finalized with the smallest `(length, bends)` reachable from
//! the root. Entering a vertex costs the edge weight plus one bend, unless the
//! edge continues weakly parallel to an edge from one of the current vertex's
//! best predecessors; those straight continuations are free of bends.
//!
//! Ties (same length within tolerance, same bends) keep every predecessor.
//! `get_path` later picks, among tied predecessors, the one that continues the
//! path straightest.

use tracing::{debug, trace};

use super::argheap::ArgHeap;
use super::cost::CostBend;
use crate::geom3::{Vec3, VecExt};
use crate::graph::{GeometricGraph, VertexId, WeightedMultigraph};

/// Why a `solve` run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// Every reachable vertex was finalized.
    Exhausted,
    /// The requested target was finalized.
    ReachedTarget,
    /// Only unreachable vertices were left in the heap.
    Unreachable,
}

/// Solver state for one graph. Results refer to the most recent `solve`.
///
/// The graph is borrowed for the solver's lifetime and never mutated.
#[derive(Clone, Debug)]
pub struct MinBendShortestPath<'g> {
    g: &'g GeometricGraph,
    root: Option<VertexId>,
    cost: Vec<CostBend>,
    preds: Vec<Vec<VertexId>>,
    settled: Vec<VertexId>,
}

impl<'g> MinBendShortestPath<'g> {
    pub fn new(g: &'g GeometricGraph) -> Self {
        Self {
            g,
            root: None,
            cost: Vec::new(),
            preds: Vec::new(),
            settled: Vec::new(),
        }
    }

    #[inline]
    pub fn graph(&self) -> &'g GeometricGraph {
        self.g
    }

    fn reset(&mut self) {
        let n = self.g.num_vertex();
        let tol = self.g.tol().abs_err;
        self.root = None;
        self.cost.clear();
        self.cost.resize(n, CostBend::infinite(tol));
        self.preds.clear();
        self.preds.resize_with(n, Vec::new);
        self.settled.clear();
    }

    #[inline]
    fn coord(&self, v: VertexId) -> Vec3 {
        self.g.vertices()[v]
    }

    /// Run from `root`. With `target = Some(t)` the run stops once `t` is
    /// final; vertices whose cost already exceeds the target's tentative cost
    /// are finalized but not expanded.
    pub fn solve(&mut self, root: VertexId, target: Option<VertexId>) -> StopReason {
        self.reset();
        let n = self.g.num_vertex();
        if root >= n {
            debug!(root, n, "mbsp root out of range");
            return StopReason::Unreachable;
        }
        self.root = Some(root);
        let tol = self.g.tol();
        let target = target.filter(|&t| t < n);
        let unreached = CostBend::infinite(tol.abs_err);

        let mut heap = ArgHeap::new(vec![unreached; n]);
        heap.update(root, CostBend::new(0.0, -1, tol.abs_err));

        let mut reason = StopReason::Exhausted;
        while let Some(v) = heap.pop() {
            let cv = heap.get(v).copied().unwrap_or(unreached);
            if cv.is_infinite() {
                reason = StopReason::Unreachable;
                break;
            }
            self.cost[v] = cv;
            self.settled.push(v);
            if Some(v) == target {
                reason = StopReason::ReachedTarget;
                break;
            }
            if let Some(t) = target {
                if heap.get(t).is_some_and(|ct| *ct < cv) {
                    // cannot improve the target through v; keep draining
                    continue;
                }
            }

            let pv = self.coord(v);
            for (u, w) in self.g.reachable_neighbors(v) {
                if !heap.contains(u) {
                    continue;
                }
                let d = self.coord(u) - pv;
                let mut cand = CostBend::new(cv.cost + w, cv.bends + 1, tol.abs_err);
                let straight = self.preds[v].iter().any(|&x| {
                    d.is_weak_parallel(&(pv - self.coord(x)), tol.rel_err, tol.weak_parallel_err)
                });
                if straight {
                    cand.bends -= 1;
                }
                let Some(&cu) = heap.get(u) else {
                    continue;
                };
                if cand < cu {
                    heap.update(u, cand);
                    self.preds[u].clear();
                    self.preds[u].push(v);
                } else if !(cu < cand) {
                    self.preds[u].push(v);
                }
            }
        }
        debug!(
            root,
            target = ?target,
            settled = self.settled.len(),
            reason = ?reason,
            "mbsp solve finished"
        );
        reason
    }

    /// Root of the last run.
    #[inline]
    pub fn root(&self) -> Option<VertexId> {
        self.root
    }

    /// Finalized vertices in the order they left the heap.
    #[inline]
    pub fn settled(&self) -> &[VertexId] {
        &self.settled
    }

    /// Final cost of `v`, or `None` if `v` was not reached.
    pub fn cost(&self, v: VertexId) -> Option<CostBend> {
        self.cost.get(v).copied().filter(|c| !c.is_infinite())
    }

    #[inline]
    pub fn is_reached(&self, v: VertexId) -> bool {
        self.cost(v).is_some()
    }

    /// Path length from the root to `v`.
    pub fn distance(&self, v: VertexId) -> Option<f64> {
        self.cost(v).map(|c| c.cost)
    }

    /// Bends along the best path to `v` (zero for the root).
    pub fn num_bend(&self, v: VertexId) -> Option<i64> {
        self.cost(v).map(|c| c.bends.max(0))
    }

    /// All tied-optimal predecessors of `v`; empty unless `v` was finalized.
    pub fn predecessors(&self, v: VertexId) -> &[VertexId] {
        if self.cost(v).is_none() {
            return &[];
        }
        self.preds.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn predecessor_count(&self, v: VertexId) -> usize {
        self.predecessors(v).len()
    }

    #[inline]
    pub fn predecessor(&self, v: VertexId, k: usize) -> Option<VertexId> {
        self.predecessors(v).get(k).copied()
    }

    /// Vertex sequence from the root to `v`, leaving `v` through predecessor
    /// `branch` (out-of-range branches fall back to 0). `None` if `v` was not
    /// reached.
    pub fn get_path(&self, v: VertexId, branch: usize) -> Option<Vec<VertexId>> {
        self.cost(v)?;
        if Some(v) == self.root {
            return Some(vec![v]);
        }
        let preds = self.predecessors(v);
        let first = *preds.get(branch).or_else(|| preds.first())?;
        let mut path = vec![v, first];
        let mut dir = self.coord(v) - self.coord(first);
        let mut u = first;
        while !self.preds[u].is_empty() {
            let next = self.straightest_predecessor(u, &dir);
            dir = self.coord(u) - self.coord(next);
            path.push(next);
            u = next;
        }
        path.reverse();
        trace!(v, branch, len = path.len(), "mbsp path");
        Some(path)
    }

    /// Among the predecessors of `u`, the one whose edge into `u` is weakly
    /// parallel to `dir`; the first recorded predecessor when none is.
    fn straightest_predecessor(&self, u: VertexId, dir: &Vec3) -> VertexId {
        let tol = self.g.tol();
        let pu = self.coord(u);
        let straight =
            |q: VertexId| dir.is_weak_parallel(&(pu - self.coord(q)), tol.rel_err, tol.weak_parallel_err);
        let preds = &self.preds[u];
        let mut best = preds[0];
        for &q in &preds[1..] {
            if !straight(best) && straight(q) {
                best = q;
            }
        }
        best
    }
}
