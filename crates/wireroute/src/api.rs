//! Flat re-export surface for host applications.
//!
//! Everything here is also reachable through its module path; this file only
//! groups the names an obstacle-modelling layer usually needs.

// configuration and errors
pub use crate::cfg::{TolCfg, COLLINEAR_EPS, COST_EPS, LINE_EPS, MIN_EDGE_NORM, POINT_EQ_EPS};
pub use crate::error::{GeomError, RouteError};
// geometry
pub use crate::geom3::{
    change_coordinate, hanan_planes, line_contains_point, line_intersect_line, segments_intersect,
    Cuboid, CuboidHit, Face, LineCrossing, LineType, Plane, PlaneLineHit, PlanePlaneHit, Relation,
    Vec3, VecExt,
};
// graphs
pub use crate::graph::{Edge, EdgeId, GeometricGraph, Graph, VertexId, WeightedMultigraph};
// search
pub use crate::search::{
    connect_terminals, intervals_exclude, intervals_union, prim_minimum_spanning_tree, ArgHeap,
    CostBend, Interval, MinBendShortestPath, SpanningTree, StopReason, TerminalMode, TerminalTree,
};
// synthetic inputs
pub use crate::rand::{
    draw_grid, draw_grid_with_walls, GridCfg, ReplayToken as GridReplay, WallsCfg,
};
