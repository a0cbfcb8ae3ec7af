//! Oriented boxes (cuboids) and segment classification against them.
//!
//! A cuboid is `base + a l + b w + c h` with `(a, b, c) ∈ [0,1]³`. The six
//! faces are bounded planes; segment queries report whether a segment misses
//! the box, crosses it, or runs along one of its faces.

use super::line::{LineType, Relation};
use super::plane::{Plane, PlaneLineHit};
use super::vector::Vec3;
use crate::cfg::MIN_EDGE_NORM;
use crate::error::GeomError;

/// Named faces; `h` is "up", `l` is "right", `w` is "front".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Top = 0,
    Right = 1,
    Front = 2,
    Bottom = 3,
    Left = 4,
    Back = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Right,
        Face::Front,
        Face::Bottom,
        Face::Left,
        Face::Back,
    ];
}

/// Segment-vs-cuboid classification.
///
/// `[t1, t2]` is the overlap of the segment parameter with the box (only
/// meaningful when `relation != Disjoint`); `coincident[f as usize]` is set for
/// every face the segment runs along.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CuboidHit {
    pub relation: Relation,
    pub t1: f64,
    pub t2: f64,
    pub coincident: [bool; 6],
}

impl CuboidHit {
    fn disjoint(t1: f64, t2: f64) -> Self {
        Self {
            relation: Relation::Disjoint,
            t1,
            t2,
            coincident: [false; 6],
        }
    }

    /// Faces flagged as coincident.
    pub fn coincident_faces(&self) -> impl Iterator<Item = Face> + '_ {
        Face::ALL
            .into_iter()
            .filter(move |f| self.coincident[*f as usize])
    }
}

/// Oriented box with edge vectors `l` (length), `w` (width), `h` (height).
#[derive(Clone, Debug, PartialEq)]
pub struct Cuboid {
    base: Vec3,
    l: Vec3,
    w: Vec3,
    h: Vec3,
    length: f64,
    width: f64,
    height: f64,
    faces: [Plane; 6],
}

impl Cuboid {
    /// Fails with `DegenerateGeometry` if any edge is shorter than
    /// `MIN_EDGE_NORM` or two edges are parallel.
    pub fn new(base: Vec3, l: Vec3, w: Vec3, h: Vec3) -> Result<Self, GeomError> {
        let (length, width, height) = (l.norm(), w.norm(), h.norm());
        for (what, n) in [("cuboid l", length), ("cuboid w", width), ("cuboid h", height)] {
            if !(n >= MIN_EDGE_NORM) {
                return Err(GeomError::degenerate(what, n));
            }
        }
        let faces = [
            Plane::bounded(base + h, l, w)?,
            Plane::bounded(base + l, w, h)?,
            Plane::bounded(base + w, l, h)?,
            Plane::bounded(base, l, w)?,
            Plane::bounded(base, w, h)?,
            Plane::bounded(base, l, h)?,
        ];
        Ok(Self {
            base,
            l,
            w,
            h,
            length,
            width,
            height,
            faces,
        })
    }

    #[inline]
    pub fn base(&self) -> Vec3 {
        self.base
    }
    #[inline]
    pub fn l(&self) -> Vec3 {
        self.l
    }
    #[inline]
    pub fn w(&self) -> Vec3 {
        self.w
    }
    #[inline]
    pub fn h(&self) -> Vec3 {
        self.h
    }
    #[inline]
    pub fn l_dir(&self) -> Vec3 {
        self.l / self.length
    }
    #[inline]
    pub fn w_dir(&self) -> Vec3 {
        self.w / self.width
    }
    #[inline]
    pub fn h_dir(&self) -> Vec3 {
        self.h / self.height
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }
    #[inline]
    pub fn face(&self, f: Face) -> &Plane {
        &self.faces[f as usize]
    }

    /// Local coordinates: the box maps to the unit cube.
    pub fn change_coordinate(&self, p: &Vec3) -> Vec3 {
        let r = p - self.base;
        Vec3::new(
            r.dot(&self.l) / (self.length * self.length),
            r.dot(&self.w) / (self.width * self.width),
            r.dot(&self.h) / (self.height * self.height),
        )
    }

    pub fn contains_point(&self, p: &Vec3, abs_err: f64) -> bool {
        let r = self.change_coordinate(p);
        let slack = [
            abs_err / self.length,
            abs_err / self.width,
            abs_err / self.height,
        ];
        (0..3).all(|k| r[k] >= -slack[k] && r[k] <= 1.0 + slack[k])
    }

    /// Classify segment `p + t d`, `t ∈ [0,1]`, against the box.
    ///
    /// Slab test in local coordinates gives the overlap `[t1, t2]`; axes whose
    /// local direction component is below `rel_err` require the start point to
    /// already lie in the slab. A non-empty overlap is reported as `Coincident`
    /// if the segment lies in any face, `Intersecting` otherwise.
    pub fn intersect_segment(&self, p: &Vec3, d: &Vec3, abs_err: f64, rel_err: f64) -> CuboidHit {
        let a = self.change_coordinate(p);
        let e = self.change_coordinate(&(p + d)) - a;
        let extents = [self.length, self.width, self.height];
        let scale = (self.l + self.w + self.h).norm();

        let (mut t1, mut t2) = (0.0_f64, 1.0_f64);
        for k in 0..3 {
            if e[k].abs() > rel_err {
                let mut lo = -a[k] / e[k];
                let mut hi = (1.0 - a[k]) / e[k];
                if lo > hi {
                    std::mem::swap(&mut lo, &mut hi);
                }
                t1 = t1.max(lo);
                t2 = t2.min(hi);
            } else {
                let m = abs_err / extents[k];
                if a[k] < -m || a[k] > 1.0 + m {
                    return CuboidHit::disjoint(t1, t2);
                }
            }
        }
        if t1 > t2 - abs_err / scale {
            return CuboidHit::disjoint(t1, t2);
        }

        let mut coincident = [false; 6];
        for f in Face::ALL {
            let hit = self.faces[f as usize].intersect_line(p, d, LineType::Segment, abs_err, rel_err);
            if matches!(hit, PlaneLineHit::Coincident { .. }) {
                coincident[f as usize] = true;
            }
        }
        let relation = if coincident.iter().any(|&c| c) {
            Relation::Coincident
        } else {
            Relation::Intersecting
        };
        CuboidHit {
            relation,
            t1,
            t2,
            coincident,
        }
    }
}
