//! Lines, rays and segments in 3-D: containment and pairwise intersection.
//!
//! A line is `p + t d`. `LineType` restricts `t`: `Segment` to `[0,1]`, `Ray`
//! to `[0,∞)`, `Line` to all reals. Parametric comparisons use `LINE_EPS`
//! slack; parallel lines count as the same line when their perpendicular offset
//! is below `COLLINEAR_EPS`.

use super::vector::{Vec3, VecExt};
use crate::cfg::{COLLINEAR_EPS, LINE_EPS};

/// Parameter range of a line-like object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineType {
    Segment,
    Ray,
    Line,
}

impl LineType {
    /// Whether parameter `t` is admissible, with `eps` slack at the ends.
    #[inline]
    pub fn admits(self, t: f64, eps: f64) -> bool {
        match self {
            LineType::Line => true,
            LineType::Ray => t >= -eps,
            LineType::Segment => t >= -eps && t <= 1.0 + eps,
        }
    }
}

/// Classification shared by all intersection queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    Disjoint,
    Intersecting,
    Coincident,
}

/// Result of intersecting two lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineCrossing {
    Disjoint,
    /// Single crossing at `p1 + t1 d1 == p2 + t2 d2`.
    Intersecting { t1: f64, t2: f64 },
    /// The two objects share a common stretch of the same line.
    Coincident,
}

impl LineCrossing {
    #[inline]
    pub fn relation(&self) -> Relation {
        match self {
            LineCrossing::Disjoint => Relation::Disjoint,
            LineCrossing::Intersecting { .. } => Relation::Intersecting,
            LineCrossing::Coincident => Relation::Coincident,
        }
    }
}

/// Coordinates of `p` in the orthogonal basis `(x, y, z)`.
#[inline]
pub fn change_coordinate(p: &Vec3, x: &Vec3, y: &Vec3, z: &Vec3) -> Vec3 {
    Vec3::new(p.dot(x), p.dot(y), p.dot(z))
}

/// Parameter `t` with `start + t dir == p`, if `p` lies on the line object.
pub fn line_contains_point(start: &Vec3, dir: &Vec3, kind: LineType, p: &Vec3) -> Option<f64> {
    let w = p - start;
    if !w.is_parallel(dir, LINE_EPS) {
        return None;
    }
    if w.norm() < LINE_EPS {
        return Some(0.0);
    }
    let t = w.proj_ratio(dir);
    (t.is_finite() && kind.admits(t, LINE_EPS)).then_some(t)
}

/// Whether segments `[p1,p2]` and `[q1,q2]` touch.
///
/// Bounding boxes are compared with `abs_err` slack first. Zero-length
/// segments reduce to point-on-segment tests; collinear segments overlap only
/// if some endpoint projects strictly inside the other segment (`rel_err`
/// away from its ends).
pub fn segments_intersect(
    p1: &Vec3,
    p2: &Vec3,
    q1: &Vec3,
    q2: &Vec3,
    abs_err: f64,
    rel_err: f64,
) -> bool {
    for k in 0..3 {
        let (p_lo, p_hi) = (p1[k].min(p2[k]), p1[k].max(p2[k]));
        let (q_lo, q_hi) = (q1[k].min(q2[k]), q1[k].max(q2[k]));
        if p_hi < q_lo - abs_err || p_lo > q_hi + abs_err {
            return false;
        }
    }

    let ep = p2 - p1;
    let eq = q2 - q1;
    if ep.norm() < rel_err {
        let w = p1 - q1;
        let t = w.proj_ratio(&eq);
        return w.is_parallel(&eq, rel_err) && (0.0..=1.0).contains(&t);
    }
    if eq.norm() < rel_err {
        let w = q1 - p1;
        let t = w.proj_ratio(&ep);
        return ep.is_parallel(&w, rel_err) && (0.0..=1.0).contains(&t);
    }

    if ep.is_parallel(&eq, rel_err) {
        let collinear = ep.is_parallel(&(p2 - q1), rel_err)
            || ep.is_parallel(&(p1 - q1), rel_err)
            || ep.is_parallel(&(q2 - p1), rel_err);
        if !collinear {
            return false;
        }
        let candidates = [
            (q1 - p1).proj_ratio(&ep),
            (q2 - p1).proj_ratio(&ep),
            (p1 - q1).proj_ratio(&eq),
            (p2 - q1).proj_ratio(&eq),
        ];
        return candidates
            .iter()
            .any(|&c| c >= rel_err && c <= 1.0 - rel_err);
    }

    let n = ep.cross(&eq).normalize();
    if n.dot(&(p1 - q1)).abs() >= rel_err {
        // skew
        return false;
    }
    let side_q = (q1 - p1).cross(&ep).dot(&(q2 - p1).cross(&ep));
    let side_p = (p1 - q1).cross(&eq).dot(&(p2 - q1).cross(&eq));
    side_q <= 0.0 && side_p <= 0.0
}

/// Intersect `p1 + t1 d1` (restricted by `kind1`) with `p2 + t2 d2`.
pub fn line_intersect_line(
    p1: &Vec3,
    d1: &Vec3,
    kind1: LineType,
    p2: &Vec3,
    d2: &Vec3,
    kind2: LineType,
) -> LineCrossing {
    let (n1, n2) = (d1.norm(), d2.norm());
    if n1 < LINE_EPS && n2 < LINE_EPS {
        return if (p1 - p2).norm() < COLLINEAR_EPS {
            LineCrossing::Coincident
        } else {
            LineCrossing::Disjoint
        };
    }
    if n1 < LINE_EPS {
        return match line_contains_point(p2, d2, kind2, p1) {
            Some(t2) => LineCrossing::Intersecting { t1: 0.0, t2 },
            None => LineCrossing::Disjoint,
        };
    }
    if n2 < LINE_EPS {
        return match line_contains_point(p1, d1, kind1, p2) {
            Some(t1) => LineCrossing::Intersecting { t1, t2: 0.0 },
            None => LineCrossing::Disjoint,
        };
    }

    let e1 = d1 / n1;
    let e2 = d2 / n2;
    if e1.is_parallel(&e2, COLLINEAR_EPS) {
        if (p2 - p1).cross(&e1).norm() > COLLINEAR_EPS {
            return LineCrossing::Disjoint;
        }
        // Same carrier line: overlap iff some endpoint of one lies in the other.
        let probes = [
            ((p2 - p1).proj_ratio(d1), kind1),
            ((p2 + d2 - p1).proj_ratio(d1), kind1),
            ((p1 - p2).proj_ratio(d2), kind2),
            ((p1 + d1 - p2).proj_ratio(d2), kind2),
        ];
        let overlap = probes
            .iter()
            .any(|&(t, kind)| kind.admits(t, LINE_EPS));
        return if overlap {
            LineCrossing::Coincident
        } else {
            LineCrossing::Disjoint
        };
    }

    let n = e1.cross(&e2).normalize();
    if n.dot(&(p1 - p2)).abs() >= LINE_EPS {
        return LineCrossing::Disjoint;
    }
    // Closest points of two coplanar, non-parallel lines coincide.
    let w = p1 - p2;
    let a = d1.dot(d1);
    let b = d1.dot(d2);
    let c = d2.dot(d2);
    let d = d1.dot(&w);
    let e = d2.dot(&w);
    let denom = a * c - b * b;
    let t1 = (b * e - c * d) / denom;
    let t2 = (a * e - b * d) / denom;
    if !kind1.admits(t1, LINE_EPS) || !kind2.admits(t2, LINE_EPS) {
        return LineCrossing::Disjoint;
    }
    LineCrossing::Intersecting { t1, t2 }
}
