//! Planes and parallelogram patches.
//!
//! A `Plane` is `base + s u + t v`. Bounded planes restrict `(s, t)` to the
//! unit square; unbounded planes have no extent. The stored normal is always
//! `normalize(u × v)`.

use super::line::{LineType, Relation};
use super::vector::Vec3;
use crate::cfg::MIN_EDGE_NORM;
use crate::error::GeomError;

/// Plane or parallelogram patch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    base: Vec3,
    u: Vec3,
    v: Vec3,
    normal: Vec3,
    bounded: bool,
}

/// Result of intersecting a line object with a plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlaneLineHit {
    Disjoint,
    /// Transversal crossing at parameter `t`.
    Intersecting { t: f64 },
    /// The line lies in the plane; `[t1, t2]` is the part inside the patch
    /// (infinite ends for unbounded planes and lines/rays).
    Coincident { t1: f64, t2: f64 },
}

impl PlaneLineHit {
    #[inline]
    pub fn relation(&self) -> Relation {
        match self {
            PlaneLineHit::Disjoint => Relation::Disjoint,
            PlaneLineHit::Intersecting { .. } => Relation::Intersecting,
            PlaneLineHit::Coincident { .. } => Relation::Coincident,
        }
    }
}

/// Result of intersecting two planes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlanePlaneHit {
    Disjoint,
    /// Parallel planes at zero offset.
    Coincident,
    /// Common line `start + t direction`. For two unbounded planes `kind` is
    /// `Line` and `direction` is a unit vector; otherwise `kind` is `Segment`
    /// and `direction` spans the overlap.
    Intersecting {
        start: Vec3,
        direction: Vec3,
        kind: LineType,
    },
}

impl PlanePlaneHit {
    #[inline]
    pub fn relation(&self) -> Relation {
        match self {
            PlanePlaneHit::Disjoint => Relation::Disjoint,
            PlanePlaneHit::Coincident => Relation::Coincident,
            PlanePlaneHit::Intersecting { .. } => Relation::Intersecting,
        }
    }
}

#[inline]
fn check_norm(what: &'static str, x: &Vec3) -> Result<(), GeomError> {
    let n = x.norm();
    if !(n >= MIN_EDGE_NORM) {
        return Err(GeomError::degenerate(what, n));
    }
    Ok(())
}

#[inline]
fn kind_range(kind: LineType) -> (f64, f64) {
    match kind {
        LineType::Segment => (0.0, 1.0),
        LineType::Ray => (0.0, f64::INFINITY),
        LineType::Line => (f64::NEG_INFINITY, f64::INFINITY),
    }
}

impl Plane {
    fn from_parts(base: Vec3, u: Vec3, v: Vec3, bounded: bool) -> Self {
        Self {
            base,
            u,
            v,
            normal: u.cross(&v).normalize(),
            bounded,
        }
    }

    fn spanned(base: Vec3, u: Vec3, v: Vec3, bounded: bool) -> Result<Self, GeomError> {
        check_norm("plane u", &u)?;
        check_norm("plane v", &v)?;
        // sine of the spanning angle, independent of scale
        let sin = u.cross(&v).norm() / (u.norm() * v.norm());
        if !(sin >= MIN_EDGE_NORM) {
            return Err(GeomError::degenerate("plane u×v / (|u||v|)", sin));
        }
        Ok(Self::from_parts(base, u, v, bounded))
    }

    /// Parallelogram patch `base + s u + t v`, `(s, t) ∈ [0,1]²`.
    pub fn bounded(base: Vec3, u: Vec3, v: Vec3) -> Result<Self, GeomError> {
        Self::spanned(base, u, v, true)
    }

    /// Infinite plane through `base` spanned by `u` and `v`.
    pub fn unbounded(base: Vec3, u: Vec3, v: Vec3) -> Result<Self, GeomError> {
        Self::spanned(base, u, v, false)
    }

    /// Infinite plane through `base` with the given normal; the spanning
    /// vectors are an arbitrary orthonormal pair.
    pub fn from_normal(base: Vec3, normal: Vec3) -> Result<Self, GeomError> {
        check_norm("plane normal", &normal)?;
        let n = normal.normalize();
        let mut u = n.cross(&Vec3::z());
        if u.norm() < MIN_EDGE_NORM {
            u = n.cross(&Vec3::x());
        }
        let u = u.normalize();
        let v = n.cross(&u);
        Ok(Self {
            base,
            u,
            v,
            normal: n,
            bounded: false,
        })
    }

    #[inline]
    pub fn base(&self) -> Vec3 {
        self.base
    }
    #[inline]
    pub fn u(&self) -> Vec3 {
        self.u
    }
    #[inline]
    pub fn v(&self) -> Vec3 {
        self.v
    }
    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.bounded
    }

    /// Carrier plane of this patch.
    #[inline]
    pub fn to_unbounded(&self) -> Plane {
        Plane {
            bounded: false,
            ..*self
        }
    }

    #[inline]
    pub fn signed_distance(&self, p: &Vec3) -> f64 {
        self.normal.dot(&(p - self.base))
    }

    #[inline]
    pub fn distance(&self, p: &Vec3) -> f64 {
        self.signed_distance(p).abs()
    }

    /// Orthogonal projection of `p` onto the carrier plane.
    #[inline]
    pub fn projection(&self, p: &Vec3) -> Vec3 {
        p - self.normal * self.signed_distance(p)
    }

    /// Membership within `abs_err` of the plane and, if bounded, of the patch.
    pub fn contains_point(&self, p: &Vec3, abs_err: f64) -> bool {
        if self.distance(p) > abs_err {
            return false;
        }
        if !self.bounded {
            return true;
        }
        let r = p - self.base;
        let (us, vs) = (self.u.norm(), self.v.norm());
        let s = self.u.dot(&r) / (us * us);
        let t = self.v.dot(&r) / (vs * vs);
        let (ms, mt) = (abs_err / us, abs_err / vs);
        s >= -ms && s <= 1.0 + ms && t >= -mt && t <= 1.0 + mt
    }

    /// Intersect `p + t d` (restricted by `kind`) with the plane.
    ///
    /// A direction within `abs_err` of perpendicular to the normal counts as
    /// lying in the plane when `p` does; the in-plane case clips the line
    /// against the patch in `(s, t)` coordinates, skipping axes whose direction
    /// component is below `rel_err`.
    pub fn intersect_line(
        &self,
        p: &Vec3,
        d: &Vec3,
        kind: LineType,
        abs_err: f64,
        rel_err: f64,
    ) -> PlaneLineHit {
        let dn = d.dot(&self.normal);
        let dnorm = d.norm();
        if dn.abs() < abs_err {
            if self.distance(p) > abs_err {
                return PlaneLineHit::Disjoint;
            }
            let (mut t1, mut t2) = kind_range(kind);
            if !self.bounded {
                return PlaneLineHit::Coincident { t1, t2 };
            }
            let r = p - self.base;
            for axis in [self.u, self.v] {
                let sq = axis.norm_squared();
                let start = r.dot(&axis) / sq;
                let step = d.dot(&axis) / sq;
                if step.abs() > rel_err {
                    let mut lo = -start / step;
                    let mut hi = (1.0 - start) / step;
                    if lo > hi {
                        std::mem::swap(&mut lo, &mut hi);
                    }
                    t1 = t1.max(lo);
                    t2 = t2.min(hi);
                } else {
                    let m = abs_err / sq.sqrt();
                    if start < -m || start > 1.0 + m {
                        return PlaneLineHit::Disjoint;
                    }
                }
            }
            if t1 > t2 - abs_err / dnorm {
                return PlaneLineHit::Disjoint;
            }
            return PlaneLineHit::Coincident { t1, t2 };
        }

        let t = self.normal.dot(&(self.base - p)) / dn;
        if !kind.admits(t, abs_err / dnorm) {
            return PlaneLineHit::Disjoint;
        }
        if !self.bounded || self.contains_point(&(p + d * t), abs_err) {
            PlaneLineHit::Intersecting { t }
        } else {
            PlaneLineHit::Disjoint
        }
    }

    /// Intersect two planes or patches.
    pub fn intersect_plane(&self, other: &Plane, abs_err: f64, rel_err: f64) -> PlanePlaneHit {
        let along_u = other.normal.dot(&self.u) / self.u.norm();
        let along_v = other.normal.dot(&self.v) / self.v.norm();
        if along_u.abs() < abs_err && along_v.abs() < abs_err {
            return if self.distance(&other.base) > abs_err {
                PlanePlaneHit::Disjoint
            } else {
                PlanePlaneHit::Coincident
            };
        }

        let dir = other.normal.cross(&self.normal).normalize();
        // Walk inside `other` perpendicular to the common line until we hit
        // the carrier plane of `self`.
        let to = other.normal.cross(&dir);
        let s = self.normal.dot(&(self.base - other.base)) / to.dot(&self.normal);
        let start = other.base + to * s;

        let own = self.intersect_line(&start, &dir, LineType::Line, abs_err, rel_err);
        let theirs = other.intersect_line(&start, &dir, LineType::Line, abs_err, rel_err);
        let (a1, a2, b1, b2) = match (own, theirs) {
            (
                PlaneLineHit::Coincident { t1: a1, t2: a2 },
                PlaneLineHit::Coincident { t1: b1, t2: b2 },
            ) => (a1, a2, b1, b2),
            _ => return PlanePlaneHit::Disjoint,
        };
        if !self.bounded && !other.bounded {
            return PlanePlaneHit::Intersecting {
                start,
                direction: dir,
                kind: LineType::Line,
            };
        }
        let t1 = a1.max(b1);
        let t2 = a2.min(b2);
        if t1 > t2 - abs_err {
            return PlanePlaneHit::Disjoint;
        }
        PlanePlaneHit::Intersecting {
            start: start + dir * t1,
            direction: dir * (t2 - t1),
            kind: LineType::Segment,
        }
    }
}

/// Axis-aligned unbounded planes through `p`: the two vertical planes
/// (x–z and y–z), plus the horizontal x–y plane if requested.
pub fn hanan_planes(p: &Vec3, with_horizontal: bool) -> Vec<Plane> {
    let mut planes = vec![
        Plane::from_parts(*p, Vec3::x(), Vec3::z(), false),
        Plane::from_parts(*p, Vec3::y(), Vec3::z(), false),
    ];
    if with_horizontal {
        planes.push(Plane::from_parts(*p, Vec3::x(), Vec3::y(), false));
    }
    planes
}
