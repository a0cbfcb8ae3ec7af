//! Tolerances for geometric predicates and lexicographic costs.
//!
//! Policy
//! - Per-graph tolerances live in `TolCfg` and travel with `GeometricGraph`, so
//!   every solver run over the same graph uses the same numbers.
//! - A few thresholds are fixed constants (degenerate-shape rejection, point
//!   equality, collinearity); adjust them here, not at call sites.

use serde::{Deserialize, Serialize};

use crate::error::RouteError;

/// Minimum norm of a box edge, plane spanning vector, or plane normal.
pub const MIN_EDGE_NORM: f64 = 1e-6;
/// Absolute distance under which two points compare equal (`VecExt::approx_eq`).
pub const POINT_EQ_EPS: f64 = 1e-2;
/// Parametric slack used by line/line and point-on-line tests.
pub const LINE_EPS: f64 = 1e-6;
/// Perpendicular offset under which two parallel lines count as the same line.
pub const COLLINEAR_EPS: f64 = 1e-2;
/// Default fuzz band on the primary key of `CostBend`.
pub const COST_EPS: f64 = 1e-6;

/// Tolerance triple used by the geometric graph and the path solver.
///
/// - `abs_err`: absolute distance tolerance (vertex dedup, cost comparison).
/// - `rel_err`: relative tolerance for parallelism and near-zero vectors.
/// - `weak_parallel_err`: distance between unit directions under which two
///   directions count as "straight on". Must stay below `1/sqrt(2)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TolCfg {
    pub abs_err: f64,
    pub rel_err: f64,
    pub weak_parallel_err: f64,
}

impl Default for TolCfg {
    fn default() -> Self {
        Self {
            abs_err: 1e-3,
            rel_err: 1e-3,
            weak_parallel_err: 0.3,
        }
    }
}

impl TolCfg {
    /// Check that every tolerance is finite and positive and that the weak
    /// parallel band cannot swallow perpendicular directions.
    pub fn validated(self) -> Result<Self, RouteError> {
        let fields = [
            ("abs_err", self.abs_err),
            ("rel_err", self.rel_err),
            ("weak_parallel_err", self.weak_parallel_err),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(RouteError::InvalidTolerance { name, value });
            }
        }
        if self.weak_parallel_err >= std::f64::consts::FRAC_1_SQRT_2 {
            return Err(RouteError::InvalidTolerance {
                name: "weak_parallel_err",
                value: self.weak_parallel_err,
            });
        }
        Ok(self)
    }
}
