//! 3-D vector kernel: `Vec3` plus tolerance-aware direction predicates.
//!
//! Points and vectors share one type (`nalgebra::Vector3<f64>`); arithmetic,
//! `norm`, `dot`, `cross`, `normalize` and `metric_distance` come from nalgebra.
//! The predicates below take their tolerances from the caller.

use nalgebra::Vector3;

use crate::cfg::POINT_EQ_EPS;

/// 3-D point or direction.
pub type Vec3 = Vector3<f64>;

/// Tolerance-aware predicates on `Vec3`.
pub trait VecExt {
    /// Equal within the fixed absolute point tolerance `POINT_EQ_EPS`.
    fn approx_eq(&self, v: &Vec3) -> bool;

    /// Component by index; negative indices count from the back (`-1 == z`).
    fn coord(&self, i: isize) -> Option<f64>;

    /// Projection ratio `self·v / |v|²`, i.e. the parameter of the orthogonal
    /// projection of `self` onto `v`. NaN when `v` is zero.
    fn proj_ratio(&self, v: &Vec3) -> f64;

    /// Unit vector, or the zero vector if the norm is below `eps`.
    fn unit_or_zero(&self, eps: f64) -> Vec3;

    /// True if either vector is shorter than `rel_err`, or the unit vectors are
    /// within `rel_err` of each other or of each other's negation.
    fn is_parallel(&self, v: &Vec3, rel_err: f64) -> bool;

    /// Parallel and pointing the same way.
    fn is_same_direction(&self, v: &Vec3, rel_err: f64) -> bool;

    /// Like `is_parallel`, but unit vectors only have to be within the wider
    /// `weak_err` band (about 35° for `weak_err = 0.3`).
    fn is_weak_parallel(&self, v: &Vec3, rel_err: f64, weak_err: f64) -> bool;

    /// Weakly parallel and pointing the same way.
    fn is_weak_same_direction(&self, v: &Vec3, rel_err: f64, weak_err: f64) -> bool;
}

impl VecExt for Vec3 {
    #[inline]
    fn approx_eq(&self, v: &Vec3) -> bool {
        (self - v).norm() < POINT_EQ_EPS
    }

    #[inline]
    fn coord(&self, i: isize) -> Option<f64> {
        match i {
            0 | -3 => Some(self.x),
            1 | -2 => Some(self.y),
            2 | -1 => Some(self.z),
            _ => None,
        }
    }

    #[inline]
    fn proj_ratio(&self, v: &Vec3) -> f64 {
        self.dot(v) / v.norm_squared()
    }

    #[inline]
    fn unit_or_zero(&self, eps: f64) -> Vec3 {
        let n = self.norm();
        if n < eps {
            Vec3::zeros()
        } else {
            self / n
        }
    }

    fn is_parallel(&self, v: &Vec3, rel_err: f64) -> bool {
        let (na, nb) = (self.norm(), v.norm());
        if na < rel_err || nb < rel_err {
            return true;
        }
        let a = self / na;
        let b = v / nb;
        (a - b).norm() < rel_err || (a + b).norm() < rel_err
    }

    #[inline]
    fn is_same_direction(&self, v: &Vec3, rel_err: f64) -> bool {
        self.is_parallel(v, rel_err) && self.proj_ratio(v) > 0.0
    }

    fn is_weak_parallel(&self, v: &Vec3, rel_err: f64, weak_err: f64) -> bool {
        let (na, nb) = (self.norm(), v.norm());
        if na < rel_err || nb < rel_err {
            return true;
        }
        let a = self / na;
        let b = v / nb;
        (a - b).norm() < weak_err || (a + b).norm() < weak_err
    }

    #[inline]
    fn is_weak_same_direction(&self, v: &Vec3, rel_err: f64, weak_err: f64) -> bool {
        self.is_weak_parallel(v, rel_err, weak_err) && self.dot(v) > 0.0
    }
}
