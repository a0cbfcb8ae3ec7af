//! Geometric routing core for wire and cable runs through a building model.
//!
//! Layout
//! - `geom3`: vectors, lines, bounded planes and oriented boxes with explicit
//!   tolerances, used to classify straight runs against walls.
//! - `graph`: weighted multigraphs and the geometric graph the solvers read.
//! - `search`: indexed heap, `(length, bends)` costs, bend-minimizing shortest
//!   paths, Prim, terminal trees, interval sets.
//! - `rand`: seeded synthetic lattices for tests and benchmarks.
//!
//! API Policy
//! - `api` and `prelude` are convenience surfaces; module paths are the source
//!   of truth and may change between versions.

pub mod api;
pub mod cfg;
pub mod error;
pub mod geom3;
pub mod graph;
pub mod rand;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::TolCfg;
pub use error::{GeomError, RouteError};
pub use geom3::{Vec3, VecExt};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::TolCfg;
    pub use crate::error::{GeomError, RouteError};
    pub use crate::geom3::{Cuboid, CuboidHit, Face, LineType, Plane, Relation, Vec3, VecExt};
    pub use crate::graph::{GeometricGraph, Graph, VertexId, WeightedMultigraph};
    pub use crate::search::{
        connect_terminals, prim_minimum_spanning_tree, CostBend, MinBendShortestPath,
        TerminalMode,
    };
}
