//! Lexicographic (length, bends) cost with a fuzz band on the length.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign};

use crate::cfg::COST_EPS;

/// Cumulative weight plus bend count.
///
/// Ordering: `a < b` iff `a.cost + tol < b.cost`, or the costs are within
/// `tol` of each other and `a.bends < b.bends`. Equality means costs within
/// `tol` and equal bend counts. The tolerance travels with each value; the
/// left operand's tolerance is used for comparisons.
#[derive(Clone, Copy, Debug)]
pub struct CostBend {
    pub cost: f64,
    pub bends: i64,
    pub tol: f64,
}

impl CostBend {
    #[inline]
    pub fn new(cost: f64, bends: i64, tol: f64) -> Self {
        Self { cost, bends, tol }
    }

    /// Zero cost and bends.
    #[inline]
    pub fn zero(tol: f64) -> Self {
        Self::new(0.0, 0, tol)
    }

    /// Sentinel larger than every finite cost.
    #[inline]
    pub fn infinite(tol: f64) -> Self {
        Self::new(f64::INFINITY, i64::MAX, tol)
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.cost.is_infinite() && self.cost > 0.0
    }

    /// Same value under a different tolerance.
    #[inline]
    pub fn with_tol(self, tol: f64) -> Self {
        Self { tol, ..self }
    }
}

impl Default for CostBend {
    fn default() -> Self {
        Self::zero(COST_EPS)
    }
}

impl PartialEq for CostBend {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for CostBend {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.cost + self.tol < other.cost {
            return Some(Ordering::Less);
        }
        if other.cost + self.tol < self.cost {
            return Some(Ordering::Greater);
        }
        Some(self.bends.cmp(&other.bends))
    }
}

impl AddAssign for CostBend {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.cost += rhs.cost;
        self.bends = self.bends.saturating_add(rhs.bends);
    }
}

impl Add for CostBend {
    type Output = CostBend;
    #[inline]
    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl std::iter::Sum for CostBend {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(CostBend::default(), |acc, c| acc + c)
    }
}

impl fmt::Display for CostBend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {} bends)", self.cost, self.bends)
    }
}
