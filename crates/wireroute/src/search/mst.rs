//! Prim's minimum spanning tree under externally supplied `CostBend` weights.

use tracing::debug;

use super::argheap::ArgHeap;
use super::cost::CostBend;
use crate::error::RouteError;
use crate::graph::{EdgeId, WeightedMultigraph};

/// Edges committed by Prim, in commit order, and their summed weight.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningTree {
    pub edges: Vec<EdgeId>,
    pub total: CostBend,
}

impl SpanningTree {
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Grow a spanning tree from vertex 0.
///
/// `weights[k]` is the cost of edge `k`; the graph's stored weights are ignored,
/// so one topology can be reused with several cost vectors. Vertices not
/// connected to vertex 0 are left out of the tree.
pub fn prim_minimum_spanning_tree<G>(
    g: &G,
    weights: &[CostBend],
    tol: f64,
) -> Result<SpanningTree, RouteError>
where
    G: WeightedMultigraph + ?Sized,
{
    let n = g.num_vertex();
    if weights.len() < g.num_edge() {
        return Err(RouteError::WeightCountMismatch {
            expected: g.num_edge(),
            got: weights.len(),
        });
    }
    let mut tree = SpanningTree {
        edges: Vec::with_capacity(n.saturating_sub(1)),
        total: CostBend::zero(tol),
    };
    if n == 0 {
        return Ok(tree);
    }

    let unreached = CostBend::infinite(tol);
    let mut via: Vec<Option<EdgeId>> = vec![None; n];
    let mut heap = ArgHeap::new(vec![unreached; n]);
    heap.update(0, CostBend::zero(tol));

    while let Some(v) = heap.pop() {
        if heap.get(v).map_or(true, CostBend::is_infinite) {
            break;
        }
        if let Some(k) = via[v] {
            tree.edges.push(k);
            tree.total += weights[k].with_tol(tol);
        }
        for &k in g.adjacent_edges(v) {
            let Some(u) = g.opposite(v, k) else {
                continue;
            };
            if !heap.contains(u) {
                continue;
            }
            let w = weights[k].with_tol(tol);
            if heap.get(u).is_some_and(|cu| w < *cu) {
                heap.update(u, w);
                via[u] = Some(k);
            }
        }
    }
    debug!(
        vertices = n,
        edges = tree.edges.len(),
        total = %tree.total,
        "prim spanning tree"
    );
    Ok(tree)
}
