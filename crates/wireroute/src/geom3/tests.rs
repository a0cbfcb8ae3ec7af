use super::*;
use crate::error::GeomError;
use nalgebra::vector;
use proptest::prelude::*;

const ABS: f64 = 1e-6;
const REL: f64 = 1e-4;

fn unit_cube() -> Cuboid {
    Cuboid::new(Vec3::zeros(), Vec3::x(), Vec3::y(), Vec3::z()).unwrap()
}

#[test]
fn parallel_predicates() {
    let a = vector![1.0, 0.0, 0.0];
    assert!(a.is_parallel(&vector![3.0, 0.0, 0.0], 1e-3));
    assert!(a.is_parallel(&vector![-2.0, 0.0, 0.0], 1e-3));
    assert!(!a.is_parallel(&vector![1.0, 0.1, 0.0], 1e-3));
    // near-zero vectors are parallel to everything
    assert!(a.is_parallel(&vector![1e-5, 1e-5, 0.0], 1e-3));
    assert!(a.is_same_direction(&vector![2.0, 0.0, 0.0], 1e-3));
    assert!(!a.is_same_direction(&vector![-2.0, 0.0, 0.0], 1e-3));
}

#[test]
fn weak_parallel_band() {
    let a = vector![1.0, 0.0, 0.0];
    let deg10 = 10f64.to_radians();
    let deg45 = 45f64.to_radians();
    let b10 = vector![deg10.cos(), deg10.sin(), 0.0];
    let b45 = vector![deg45.cos(), deg45.sin(), 0.0];
    assert!(a.is_weak_parallel(&b10, 1e-3, 0.3));
    assert!(a.is_weak_parallel(&(-b10), 1e-3, 0.3));
    assert!(!a.is_weak_parallel(&b45, 1e-3, 0.3));
    assert!(a.is_weak_same_direction(&b10, 1e-3, 0.3));
    assert!(!a.is_weak_same_direction(&(-b10), 1e-3, 0.3));
    // strictly parallel implies weakly parallel
    assert!(!a.is_parallel(&b10, 1e-3));
}

#[test]
fn coords_and_approx_eq() {
    let p = vector![1.0, 2.0, 3.0];
    assert_eq!(p.coord(0), Some(1.0));
    assert_eq!(p.coord(-1), Some(3.0));
    assert_eq!(p.coord(-3), Some(1.0));
    assert_eq!(p.coord(3), None);
    assert!(p.approx_eq(&vector![1.001, 2.0, 3.0]));
    assert!(!p.approx_eq(&vector![1.1, 2.0, 3.0]));
    assert!((p.proj_ratio(&vector![2.0, 0.0, 0.0]) - 0.5).abs() < 1e-12);
    assert_eq!(Vec3::zeros().unit_or_zero(1e-9), Vec3::zeros());
}

#[test]
fn change_coordinate_orthonormal_basis() {
    let p = vector![1.0, 2.0, 3.0];
    let q = change_coordinate(&p, &Vec3::y(), &Vec3::z(), &Vec3::x());
    assert_eq!(q, vector![2.0, 3.0, 1.0]);
}

#[test]
fn segments_crossing_skew_and_collinear() {
    let o = Vec3::zeros();
    // X in the xy-plane
    assert!(segments_intersect(
        &o,
        &vector![2.0, 2.0, 0.0],
        &vector![0.0, 2.0, 0.0],
        &vector![2.0, 0.0, 0.0],
        1e-6,
        1e-3
    ));
    // skew
    assert!(!segments_intersect(
        &o,
        &vector![2.0, 2.0, 0.0],
        &vector![0.0, 2.0, 1.0],
        &vector![2.0, 0.0, 1.0],
        1e-6,
        1e-3
    ));
    // collinear overlap
    assert!(segments_intersect(
        &o,
        &vector![2.0, 0.0, 0.0],
        &vector![1.0, 0.0, 0.0],
        &vector![3.0, 0.0, 0.0],
        1e-6,
        1e-3
    ));
    // collinear but apart
    assert!(!segments_intersect(
        &o,
        &vector![1.0, 0.0, 0.0],
        &vector![2.0, 0.0, 0.0],
        &vector![3.0, 0.0, 0.0],
        1e-6,
        1e-3
    ));
    // zero-length segment sitting on the other one
    let m = vector![1.0, 0.0, 0.0];
    assert!(segments_intersect(
        &m,
        &m,
        &o,
        &vector![2.0, 0.0, 0.0],
        1e-6,
        1e-3
    ));
}

#[test]
fn line_line_crossing_parameters() {
    let res = line_intersect_line(
        &vector![0.0, 0.0, 0.0],
        &vector![2.0, 0.0, 0.0],
        LineType::Segment,
        &vector![1.0, -1.0, 0.0],
        &vector![0.0, 2.0, 0.0],
        LineType::Segment,
    );
    match res {
        LineCrossing::Intersecting { t1, t2 } => {
            assert!((t1 - 0.5).abs() < 1e-12);
            assert!((t2 - 0.5).abs() < 1e-12);
        }
        other => panic!("expected crossing, got {other:?}"),
    }
    // same lines, but the second is a short segment that stops early
    let res = line_intersect_line(
        &vector![0.0, 0.0, 0.0],
        &vector![2.0, 0.0, 0.0],
        LineType::Segment,
        &vector![1.0, -1.0, 0.0],
        &vector![0.0, 0.5, 0.0],
        LineType::Segment,
    );
    assert_eq!(res, LineCrossing::Disjoint);
    // ... but crossing as an unbounded line
    let res = line_intersect_line(
        &vector![0.0, 0.0, 0.0],
        &vector![2.0, 0.0, 0.0],
        LineType::Segment,
        &vector![1.0, -1.0, 0.0],
        &vector![0.0, 0.5, 0.0],
        LineType::Line,
    );
    assert_eq!(res.relation(), Relation::Intersecting);
}

#[test]
fn line_line_parallel_cases() {
    let d = vector![1.0, 0.0, 0.0];
    let offset = line_intersect_line(
        &Vec3::zeros(),
        &d,
        LineType::Segment,
        &vector![0.0, 1.0, 0.0],
        &d,
        LineType::Segment,
    );
    assert_eq!(offset, LineCrossing::Disjoint);
    let overlap = line_intersect_line(
        &Vec3::zeros(),
        &d,
        LineType::Segment,
        &vector![0.5, 0.0, 0.0],
        &d,
        LineType::Segment,
    );
    assert_eq!(overlap, LineCrossing::Coincident);
    let apart = line_intersect_line(
        &Vec3::zeros(),
        &d,
        LineType::Segment,
        &vector![3.0, 0.0, 0.0],
        &d,
        LineType::Segment,
    );
    assert_eq!(apart, LineCrossing::Disjoint);
}

#[test]
fn point_on_line_types() {
    let s = Vec3::zeros();
    let d = vector![2.0, 0.0, 0.0];
    let p = vector![1.0, 0.0, 0.0];
    let behind = vector![-1.0, 0.0, 0.0];
    let t = line_contains_point(&s, &d, LineType::Segment, &p).unwrap();
    assert!((t - 0.5).abs() < 1e-12);
    assert!(line_contains_point(&s, &d, LineType::Segment, &behind).is_none());
    assert!(line_contains_point(&s, &d, LineType::Ray, &behind).is_none());
    assert!(line_contains_point(&s, &d, LineType::Line, &behind).is_some());
    assert!(line_contains_point(&s, &d, LineType::Line, &vector![1.0, 1.0, 0.0]).is_none());
}

#[test]
fn degenerate_shapes_rejected() {
    let err = Plane::bounded(Vec3::zeros(), Vec3::x(), Vec3::zeros()).unwrap_err();
    assert!(matches!(err, GeomError::DegenerateGeometry { .. }));
    assert!(Plane::unbounded(Vec3::zeros(), Vec3::x(), Vec3::x() * 2.0).is_err());
    assert!(Plane::from_normal(Vec3::zeros(), Vec3::zeros()).is_err());
    let err = Cuboid::new(Vec3::zeros(), Vec3::x(), Vec3::y(), Vec3::z() * 1e-9).unwrap_err();
    assert!(err.to_string().contains("degenerate"));
}

#[test]
fn sub_millimetre_shapes_are_valid() {
    let u = vector![5e-4, 0.0, 0.0];
    let v = vector![0.0, 1e-3, 0.0];
    let patch = Plane::bounded(Vec3::zeros(), u, v).unwrap();
    assert!((patch.normal() - Vec3::z()).norm() < 1e-12);
    let small = Cuboid::new(Vec3::zeros(), u, v, Vec3::z()).unwrap();
    assert!(small.contains_point(&vector![2.5e-4, 5e-4, 0.5], 1e-6));
    // near-parallel spanning vectors are still rejected at any scale
    let skew = vector![5e-4, 1e-13, 0.0];
    assert!(Plane::bounded(Vec3::zeros(), u, skew).is_err());
}

#[test]
fn plane_from_normal_is_orthonormal() {
    for n in [Vec3::z(), vector![1.0, 2.0, -0.5], Vec3::x()] {
        let pl = Plane::from_normal(vector![1.0, 1.0, 1.0], n).unwrap();
        assert!((pl.normal() - n.normalize()).norm() < 1e-12);
        assert!(pl.u().dot(&pl.normal()).abs() < 1e-12);
        assert!(pl.v().dot(&pl.normal()).abs() < 1e-12);
        assert!((pl.u().norm() - 1.0).abs() < 1e-12);
        assert!(!pl.is_bounded());
    }
}

#[test]
fn plane_point_queries() {
    let pl = Plane::bounded(Vec3::zeros(), vector![2.0, 0.0, 0.0], vector![0.0, 2.0, 0.0]).unwrap();
    let p = vector![1.0, 1.0, 3.0];
    assert!((pl.signed_distance(&p) - 3.0).abs() < 1e-12);
    assert_eq!(pl.projection(&p), vector![1.0, 1.0, 0.0]);
    assert!(pl.contains_point(&vector![1.0, 1.0, 0.0], 1e-6));
    assert!(!pl.contains_point(&vector![3.0, 1.0, 0.0], 1e-6));
    assert!(pl.to_unbounded().contains_point(&vector![3.0, 1.0, 0.0], 1e-6));
}

#[test]
fn plane_line_transversal_and_in_plane() {
    let pl = Plane::bounded(Vec3::zeros(), Vec3::x(), Vec3::y()).unwrap();
    let hit = pl.intersect_line(
        &vector![0.5, 0.5, -1.0],
        &vector![0.0, 0.0, 2.0],
        LineType::Segment,
        ABS,
        REL,
    );
    assert_eq!(hit, PlaneLineHit::Intersecting { t: 0.5 });
    // crosses the carrier plane outside the patch
    let miss = pl.intersect_line(
        &vector![1.5, 0.5, -1.0],
        &vector![0.0, 0.0, 2.0],
        LineType::Segment,
        ABS,
        REL,
    );
    assert_eq!(miss, PlaneLineHit::Disjoint);
    // in-plane segment clipped to the patch
    match pl.intersect_line(
        &vector![-1.0, 0.5, 0.0],
        &vector![4.0, 0.0, 0.0],
        LineType::Segment,
        ABS,
        REL,
    ) {
        PlaneLineHit::Coincident { t1, t2 } => {
            assert!((t1 - 0.25).abs() < 1e-12);
            assert!((t2 - 0.5).abs() < 1e-12);
        }
        other => panic!("expected coincident, got {other:?}"),
    }
    // in-plane but beside the patch
    let beside = pl.intersect_line(
        &vector![-1.0, 2.0, 0.0],
        &vector![4.0, 0.0, 0.0],
        LineType::Segment,
        ABS,
        REL,
    );
    assert_eq!(beside.relation(), Relation::Disjoint);
    // parallel above the plane
    let above = pl.intersect_line(
        &vector![0.0, 0.5, 1.0],
        &vector![1.0, 0.0, 0.0],
        LineType::Line,
        ABS,
        REL,
    );
    assert_eq!(above, PlaneLineHit::Disjoint);
}

#[test]
fn unbounded_plane_coincident_interval_follows_line_type() {
    let pl = Plane::from_normal(Vec3::zeros(), Vec3::z()).unwrap();
    let d = Vec3::x();
    let seg = pl.intersect_line(&Vec3::zeros(), &d, LineType::Segment, ABS, REL);
    assert_eq!(seg, PlaneLineHit::Coincident { t1: 0.0, t2: 1.0 });
    match pl.intersect_line(&Vec3::zeros(), &d, LineType::Ray, ABS, REL) {
        PlaneLineHit::Coincident { t1, t2 } => {
            assert_eq!(t1, 0.0);
            assert!(t2.is_infinite());
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn plane_plane_cases() {
    let floor = Plane::from_normal(Vec3::zeros(), Vec3::z()).unwrap();
    let wall = Plane::from_normal(vector![1.0, 0.0, 0.0], Vec3::x()).unwrap();
    match floor.intersect_plane(&wall, ABS, REL) {
        PlanePlaneHit::Intersecting {
            start,
            direction,
            kind,
        } => {
            assert_eq!(kind, LineType::Line);
            assert!(floor.contains_point(&start, 1e-9) && wall.contains_point(&start, 1e-9));
            assert!(direction.is_parallel(&Vec3::y(), 1e-9));
        }
        other => panic!("unexpected {other:?}"),
    }

    let shifted = Plane::from_normal(vector![0.0, 0.0, 2.0], Vec3::z()).unwrap();
    assert_eq!(floor.intersect_plane(&shifted, ABS, REL), PlanePlaneHit::Disjoint);
    let same = Plane::from_normal(vector![5.0, 5.0, 0.0], -Vec3::z()).unwrap();
    assert_eq!(floor.intersect_plane(&same, ABS, REL), PlanePlaneHit::Coincident);

    // a 2x2 floor tile and a 1-wide wall patch standing on it at x = 1
    let tile = Plane::bounded(Vec3::zeros(), vector![2.0, 0.0, 0.0], vector![0.0, 2.0, 0.0]).unwrap();
    let patch = Plane::bounded(vector![1.0, 0.5, 0.0], Vec3::y(), Vec3::z()).unwrap();
    match tile.intersect_plane(&patch, ABS, REL) {
        PlanePlaneHit::Intersecting {
            start,
            direction,
            kind,
        } => {
            assert_eq!(kind, LineType::Segment);
            assert!((direction.norm() - 1.0).abs() < 1e-9);
            let end = start + direction;
            let ys = [start.y.min(end.y), start.y.max(end.y)];
            assert!((ys[0] - 0.5).abs() < 1e-9 && (ys[1] - 1.5).abs() < 1e-9);
            assert!((start.x - 1.0).abs() < 1e-9);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn hanan_planes_through_point() {
    let p = vector![1.0, 2.0, 3.0];
    let planes = hanan_planes(&p, false);
    assert_eq!(planes.len(), 2);
    assert!(planes.iter().all(|pl| pl.contains_point(&p, 1e-12)));
    let planes = hanan_planes(&p, true);
    assert_eq!(planes.len(), 3);
    assert!(planes[2].normal().is_parallel(&Vec3::z(), 1e-12));
}

#[test]
fn cuboid_segment_through_unit_cube() {
    let cube = unit_cube();
    let p = vector![-1.0, 0.5, 0.5];
    let d = vector![2.0, 0.5, 0.5] - p;
    let hit = cube.intersect_segment(&p, &d, ABS, REL);
    assert_eq!(hit.relation, Relation::Intersecting);
    assert_eq!(hit.coincident, [false; 6]);
    // local x runs over [0, 1] exactly while the box is crossed
    let entry = cube.change_coordinate(&(p + d * hit.t1));
    let exit = cube.change_coordinate(&(p + d * hit.t2));
    assert!(entry.x.abs() < 1e-12);
    assert!((exit.x - 1.0).abs() < 1e-12);
    assert!((hit.t1 - 1.0 / 3.0).abs() < 1e-12);
    assert!((hit.t2 - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn cuboid_segment_along_top_face() {
    let cube = unit_cube();
    let p = vector![-1.0, 0.5, 1.0];
    let d = vector![3.0, 0.0, 0.0];
    let hit = cube.intersect_segment(&p, &d, ABS, REL);
    assert_eq!(hit.relation, Relation::Coincident);
    let faces: Vec<Face> = hit.coincident_faces().collect();
    assert_eq!(faces, vec![Face::Top]);
}

#[test]
fn cuboid_segment_misses() {
    let cube = unit_cube();
    // passes above
    let hit = cube.intersect_segment(&vector![-1.0, 0.5, 2.0], &vector![3.0, 0.0, 0.0], ABS, REL);
    assert_eq!(hit.relation, Relation::Disjoint);
    // stops before reaching the box
    let hit = cube.intersect_segment(&vector![-2.0, 0.5, 0.5], &vector![1.0, 0.0, 0.0], ABS, REL);
    assert_eq!(hit.relation, Relation::Disjoint);
}

#[test]
fn cuboid_rotated_box_contains_and_local_coords() {
    let s = std::f64::consts::FRAC_1_SQRT_2;
    let l = vector![2.0 * s, 2.0 * s, 0.0];
    let w = vector![-s, s, 0.0];
    let cube = Cuboid::new(vector![1.0, 0.0, 0.0], l, w, vector![0.0, 0.0, 3.0]).unwrap();
    assert!((cube.length() - 2.0).abs() < 1e-12);
    assert!((cube.l_dir().norm() - 1.0).abs() < 1e-12);
    let centre = cube.base() + (cube.l() + cube.w() + cube.h()) * 0.5;
    let local = cube.change_coordinate(&centre);
    assert!((local - vector![0.5, 0.5, 0.5]).norm() < 1e-12);
    assert!(cube.contains_point(&centre, 1e-9));
    assert!(!cube.contains_point(&vector![0.0, 0.0, 0.0], 1e-9));
    assert!(cube.face(Face::Bottom).contains_point(&cube.base(), 1e-9));
}

proptest! {
    #[test]
    fn cuboid_reversal_symmetry(
        p in prop::array::uniform3(-2.0f64..3.0),
        q in prop::array::uniform3(-2.0f64..3.0),
    ) {
        let p = Vec3::from(p);
        let q = Vec3::from(q);
        let d = q - p;
        prop_assume!((0..3).all(|k| d[k].abs() > 1e-2));
        let cube = unit_cube();
        let fwd = cube.intersect_segment(&p, &d, ABS, REL);
        let bwd = cube.intersect_segment(&q, &(-d), ABS, REL);
        prop_assume!((fwd.t2 - fwd.t1).abs() > 1e-6);
        prop_assert_eq!(fwd.relation, bwd.relation);
        if fwd.relation != Relation::Disjoint {
            prop_assert!((fwd.t1 - (1.0 - bwd.t2)).abs() < 1e-9);
            prop_assert!((fwd.t2 - (1.0 - bwd.t1)).abs() < 1e-9);
        }
    }
}
