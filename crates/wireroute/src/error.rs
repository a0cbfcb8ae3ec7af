//! Error types for geometric construction and routing entry points.
//!
//! Query paths (distances, predecessors, heap pops) never return these; they
//! report missing data through `Option` instead.

/// Errors raised while constructing geometric primitives.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum GeomError {
    /// A box edge, plane spanning vector, or plane normal is too short to span
    /// anything.
    #[error("degenerate geometry: {what} has norm {norm:e}")]
    DegenerateGeometry {
        /// Which input vector was rejected.
        what: &'static str,
        /// Its Euclidean norm.
        norm: f64,
    },
}

/// Errors raised by graph algorithms that cannot proceed with their input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum RouteError {
    /// A tolerance is non-finite, non-positive, or out of its admissible range.
    #[error("invalid tolerance {name} = {value}")]
    InvalidTolerance { name: &'static str, value: f64 },

    /// The external weight vector does not cover every edge of the graph.
    #[error("weight vector has {got} entries but the graph has {expected} edges")]
    WeightCountMismatch { expected: usize, got: usize },

    /// A vertex index is not part of the graph.
    #[error("vertex {vertex} out of range (graph has {num_vertex} vertices)")]
    VertexOutOfRange { vertex: usize, num_vertex: usize },

    /// A required vertex cannot be reached from the source.
    #[error("vertex {to} is unreachable from {from}")]
    Unreachable { from: usize, to: usize },

    /// Building obstacle geometry for a routing input failed.
    #[error(transparent)]
    Geometry(#[from] GeomError),
}

impl GeomError {
    #[inline]
    pub(crate) fn degenerate(what: &'static str, norm: f64) -> Self {
        Self::DegenerateGeometry { what, norm }
    }
}
