//! Connecting a source to a set of terminals along bend-minimizing paths.
//!
//! Two modes:
//! - `Direct`: every terminal gets its own path from the source.
//! - `SpanningTree`: the source is wired to its cheapest terminal, and the
//!   terminals are joined by a minimum spanning tree of their metric closure
//!   (pairwise MBSP costs). Each tree edge is realized by the MBSP path between
//!   its two terminals.
//!
//! Picking which terminals to connect is the caller's business.

use tracing::{debug, trace};

use super::cost::CostBend;
use super::mbsp::MinBendShortestPath;
use super::mst::prim_minimum_spanning_tree;
use crate::error::RouteError;
use crate::graph::{GeometricGraph, Graph, VertexId, WeightedMultigraph};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TerminalMode {
    Direct,
    #[default]
    SpanningTree,
}

/// Realized wiring: summed `CostBend` of all paths and the paths themselves
/// (vertex sequences of the input graph).
#[derive(Clone, Debug, PartialEq)]
pub struct TerminalTree {
    pub objective: CostBend,
    pub paths: Vec<Vec<VertexId>>,
}

/// Cost of the best path to `v` with the root's `-1` bend seed clamped to 0.
fn reached_cost(sp: &MinBendShortestPath<'_>, v: VertexId, tol: f64) -> Option<CostBend> {
    let c = sp.cost(v)?;
    Some(CostBend::new(c.cost, c.bends.max(0), tol))
}

fn path_or_err(
    sp: &MinBendShortestPath<'_>,
    from: VertexId,
    to: VertexId,
) -> Result<Vec<VertexId>, RouteError> {
    sp.get_path(to, 0).ok_or(RouteError::Unreachable { from, to })
}

/// Wire `source` to every vertex in `terminals`.
///
/// Fails if an index is out of range or a terminal cannot be reached. An empty
/// terminal set yields an empty tree with zero objective.
pub fn connect_terminals(
    g: &GeometricGraph,
    source: VertexId,
    terminals: &[VertexId],
    mode: TerminalMode,
) -> Result<TerminalTree, RouteError> {
    let n = g.num_vertex();
    let tol = g.tol().abs_err;
    for &v in std::iter::once(&source).chain(terminals) {
        if v >= n {
            return Err(RouteError::VertexOutOfRange {
                vertex: v,
                num_vertex: n,
            });
        }
    }
    let mut tree = TerminalTree {
        objective: CostBend::zero(tol),
        paths: Vec::new(),
    };
    if terminals.is_empty() {
        return Ok(tree);
    }

    let mut sp = MinBendShortestPath::new(g);
    sp.solve(source, None);
    let mut from_source = Vec::with_capacity(terminals.len());
    for &t in terminals {
        let c = reached_cost(&sp, t, tol).ok_or(RouteError::Unreachable { from: source, to: t })?;
        from_source.push(c);
    }

    match mode {
        TerminalMode::Direct => {
            for (&t, &c) in terminals.iter().zip(&from_source) {
                tree.paths.push(path_or_err(&sp, source, t)?);
                tree.objective += c;
            }
        }
        TerminalMode::SpanningTree => {
            let mut anchor = 0;
            for (k, c) in from_source.iter().enumerate().skip(1) {
                if *c < from_source[anchor] {
                    anchor = k;
                }
            }
            debug!(source, anchor = terminals[anchor], cost = %from_source[anchor], "terminal anchor");
            tree.paths.push(path_or_err(&sp, source, terminals[anchor])?);
            tree.objective += from_source[anchor];

            let m = terminals.len();
            let mut closure = Graph::with_vertices(m);
            let mut weights = Vec::with_capacity(m * (m - 1) / 2);
            let mut edge_paths = Vec::with_capacity(weights.capacity());
            for i in 0..m {
                sp.solve(terminals[i], None);
                for j in i + 1..m {
                    let (a, b) = (terminals[i], terminals[j]);
                    let c = reached_cost(&sp, b, tol).ok_or(RouteError::Unreachable { from: a, to: b })?;
                    closure.add_edge(i, j, c.cost);
                    weights.push(c);
                    edge_paths.push(path_or_err(&sp, a, b)?);
                }
            }
            let mst = prim_minimum_spanning_tree(&closure, &weights, tol)?;
            for &k in &mst.edges {
                trace!(edge = ?closure.edge(k), cost = %weights[k], "terminal tree edge");
                tree.paths.push(edge_paths[k].clone());
                tree.objective += weights[k];
            }
        }
    }
    debug!(
        source,
        terminals = terminals.len(),
        paths = tree.paths.len(),
        objective = %tree.objective,
        mode = ?mode,
        "terminals connected"
    );
    Ok(tree)
}
