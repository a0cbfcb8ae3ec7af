//! 3-D geometry for obstacle modelling.
//!
//! Purpose
//! - Classify straight wire runs against walls and doors modelled as planes
//!   and oriented boxes: clear, crossing, or running along a face.
//! - Keep every predicate tolerance-explicit; there is no exact arithmetic.
//!
//! Layout
//! - `vector`: `Vec3` alias and `VecExt` direction predicates.
//! - `line`: line/ray/segment containment and pairwise intersection.
//! - `plane`: bounded/unbounded planes, line and plane intersection.
//! - `cuboid`: oriented boxes and segment classification.

pub mod cuboid;
pub mod line;
pub mod plane;
pub mod vector;

pub use cuboid::{Cuboid, CuboidHit, Face};
pub use line::{
    change_coordinate, line_contains_point, line_intersect_line, segments_intersect, LineCrossing,
    LineType, Relation,
};
pub use plane::{hanan_planes, Plane, PlaneLineHit, PlanePlaneHit};
pub use vector::{Vec3, VecExt};

#[cfg(test)]
mod tests;
