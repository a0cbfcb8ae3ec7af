//! Seeded synthetic routing graphs (Manhattan grids, optional walls).
//!
//! Purpose
//! - Reproducible inputs for property tests and benchmarks of the search
//!   solvers. Every draw is addressed by a replay token `(seed, index)`.
//!
//! Model
//! - An `nx x ny` lattice in the `z = 0` plane with spacing `spacing`; vertex
//!   `(x, y)` has id `x + nx * y` and every lattice edge weighs its length.
//! - Each edge is dropped independently with probability `drop_prob`.
//! - The walls variant places thin axis-aligned boxes on the lattice and
//!   removes every edge that crosses one.

use nalgebra::vector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cfg::TolCfg;
use crate::error::RouteError;
use crate::geom3::{Cuboid, Relation, Vec3};
use crate::graph::{GeometricGraph, VertexId};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Lattice configuration.
#[derive(Clone, Copy, Debug)]
pub struct GridCfg {
    pub nx: usize,
    pub ny: usize,
    pub spacing: f64,
    /// Probability of dropping each lattice edge. Clamped to `[0, 1]`.
    pub drop_prob: f64,
    pub tol: TolCfg,
}

impl Default for GridCfg {
    fn default() -> Self {
        Self {
            nx: 8,
            ny: 8,
            spacing: 1.0,
            drop_prob: 0.1,
            tol: TolCfg::default(),
        }
    }
}

impl GridCfg {
    /// Vertex id of lattice point `(x, y)`.
    #[inline]
    pub fn vertex_id(&self, x: usize, y: usize) -> VertexId {
        x + self.nx * y
    }

    #[inline]
    pub fn num_vertex(&self) -> usize {
        self.nx * self.ny
    }
}

/// Wall placement on top of a lattice.
#[derive(Clone, Copy, Debug)]
pub struct WallsCfg {
    pub grid: GridCfg,
    pub walls: usize,
    /// Wall thickness as a fraction of the lattice spacing.
    pub thickness: f64,
}

impl Default for WallsCfg {
    fn default() -> Self {
        Self {
            grid: GridCfg::default(),
            walls: 4,
            thickness: 0.2,
        }
    }
}

fn lattice(cfg: &GridCfg) -> Result<GeometricGraph, RouteError> {
    let mut g = GeometricGraph::with_tol(cfg.tol)?;
    for y in 0..cfg.ny {
        for x in 0..cfg.nx {
            g.add_vertex_simply(vector![x as f64 * cfg.spacing, y as f64 * cfg.spacing, 0.0]);
        }
    }
    Ok(g)
}

/// Lattice edges as `(from, to)` pairs, horizontal edges first.
fn lattice_edges(cfg: &GridCfg) -> Vec<(VertexId, VertexId)> {
    let mut out = Vec::with_capacity(2 * cfg.num_vertex());
    for y in 0..cfg.ny {
        for x in 0..cfg.nx.saturating_sub(1) {
            out.push((cfg.vertex_id(x, y), cfg.vertex_id(x + 1, y)));
        }
    }
    for y in 0..cfg.ny.saturating_sub(1) {
        for x in 0..cfg.nx {
            out.push((cfg.vertex_id(x, y), cfg.vertex_id(x, y + 1)));
        }
    }
    out
}

/// Draw a lattice with randomly dropped edges. Fails only on invalid
/// tolerances in `cfg.tol`.
pub fn draw_grid(cfg: GridCfg, tok: ReplayToken) -> Result<GeometricGraph, RouteError> {
    let mut rng = tok.to_std_rng();
    let p = cfg.drop_prob.clamp(0.0, 1.0);
    let mut g = lattice(&cfg)?;
    for (i, j) in lattice_edges(&cfg) {
        if rng.gen::<f64>() < p {
            continue;
        }
        g.add_edge_simply(i, j, cfg.spacing);
    }
    Ok(g)
}

/// Draw a lattice and a set of walls, keeping only edges that do not cross a
/// wall. Each wall is a box halfway between two lattice lines, ending half a
/// spacing past its last blocked edge and spanning `[-0.5, 0.5]` in `z`.
pub fn draw_grid_with_walls(
    cfg: WallsCfg,
    tok: ReplayToken,
) -> Result<(GeometricGraph, Vec<Cuboid>), RouteError> {
    let mut rng = tok.to_std_rng();
    let grid = cfg.grid;
    let s = grid.spacing;
    let th = cfg.thickness.clamp(0.01, 0.9) * s;
    let mut walls = Vec::with_capacity(cfg.walls);
    if grid.nx >= 2 && grid.ny >= 2 {
        for _ in 0..cfg.walls {
            let vertical = rng.gen_bool(0.5);
            let (along, across) = if vertical { (grid.ny, grid.nx) } else { (grid.nx, grid.ny) };
            let start = rng.gen_range(0..along - 1);
            let len = rng.gen_range(1..=along - 1 - start);
            let at = (rng.gen_range(0..across - 1) as f64 + 0.5) * s;
            let (lo, hi) = ((start as f64 - 0.5) * s, ((start + len) as f64 + 0.5) * s);
            let wall = if vertical {
                Cuboid::new(
                    vector![at - th / 2.0, lo, -0.5],
                    vector![th, 0.0, 0.0],
                    vector![0.0, hi - lo, 0.0],
                    vector![0.0, 0.0, 1.0],
                )?
            } else {
                Cuboid::new(
                    vector![lo, at - th / 2.0, -0.5],
                    vector![hi - lo, 0.0, 0.0],
                    vector![0.0, th, 0.0],
                    vector![0.0, 0.0, 1.0],
                )?
            };
            walls.push(wall);
        }
    }

    let p = grid.drop_prob.clamp(0.0, 1.0);
    let tol = grid.tol;
    let mut g = lattice(&grid)?;
    for (i, j) in lattice_edges(&grid) {
        if rng.gen::<f64>() < p {
            continue;
        }
        let a: Vec3 = g.vertices()[i];
        let d = g.vertices()[j] - a;
        let blocked = walls.iter().any(|w| {
            w.intersect_segment(&a, &d, tol.abs_err, tol.rel_err).relation == Relation::Intersecting
        });
        if !blocked {
            g.add_edge_simply(i, j, s);
        }
    }
    Ok((g, walls))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WeightedMultigraph;

    #[test]
    fn replay_is_deterministic() {
        let cfg = GridCfg::default();
        let a = draw_grid(cfg, ReplayToken::new(7, 3)).unwrap();
        let b = draw_grid(cfg, ReplayToken::new(7, 3)).unwrap();
        let ea: Vec<_> = a.as_graph().edges().map(|(_, e, _)| e).collect();
        let eb: Vec<_> = b.as_graph().edges().map(|(_, e, _)| e).collect();
        assert_eq!(ea, eb);
        assert_eq!(a.num_vertex(), cfg.num_vertex());
    }

    #[test]
    fn full_lattice_without_drops() {
        let cfg = GridCfg {
            nx: 4,
            ny: 3,
            drop_prob: 0.0,
            ..GridCfg::default()
        };
        let g = draw_grid(cfg, ReplayToken::new(1, 0)).unwrap();
        assert_eq!(g.num_edge(), 3 * 3 + 4 * 2);
        assert!(g.connected());
        assert_eq!(g.vertex(cfg.vertex_id(2, 1)), Some(vector![2.0, 1.0, 0.0]));
    }

    #[test]
    fn invalid_tolerance_is_reported() {
        let cfg = GridCfg {
            tol: TolCfg {
                weak_parallel_err: 0.9,
                ..TolCfg::default()
            },
            ..GridCfg::default()
        };
        assert!(matches!(
            draw_grid(cfg, ReplayToken::new(0, 0)),
            Err(RouteError::InvalidTolerance { name: "weak_parallel_err", .. })
        ));
    }

    #[test]
    fn walls_block_crossing_edges() {
        let cfg = WallsCfg {
            grid: GridCfg {
                drop_prob: 0.0,
                ..GridCfg::default()
            },
            walls: 5,
            thickness: 0.2,
        };
        let (g, walls) = draw_grid_with_walls(cfg, ReplayToken::new(11, 2)).unwrap();
        assert_eq!(walls.len(), 5);
        assert!(g.num_edge() < 2 * 8 * 7);
        let tol = g.tol();
        for (_, (i, j), _) in g.as_graph().edges() {
            let a = g.vertices()[i];
            let d = g.vertices()[j] - a;
            for w in &walls {
                let hit = w.intersect_segment(&a, &d, tol.abs_err, tol.rel_err);
                assert_ne!(hit.relation, Relation::Intersecting);
            }
        }
    }
}
