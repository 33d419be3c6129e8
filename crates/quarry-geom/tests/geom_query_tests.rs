// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs, clippy::float_cmp)]
//! End-to-end checks of the public query surface.

use quarry_geom::barycentric::{barycentric, is_point_in_triangle};
use quarry_geom::extreme::{minimum_area_rectangle, most_separated_points_on_aabb};
use quarry_geom::stats::{covariance3, principal_axes};
use quarry_geom::{jacobi, Aabb2, JacobiSolver, Segment2, Segment3, Tetrahedron, Tolerances, Triangle};
use quarry_math::{Mat2x3, Mat3, Vec2, Vec3};

#[test]
fn point_inside_unit_triangle_has_positive_weights() {
    let (a, b, c) = (Vec3::ZERO, Vec3::UNIT_X, Vec3::UNIT_Y);
    let p = Vec3::new(0.25, 0.25, 0.0);
    let (u, v, w) = barycentric(&a, &b, &c, &p);
    assert!(u >= 0.0 && v >= 0.0 && w >= 0.0, "{:?}", (u, v, w));
    assert!((u + v + w - 1.0).abs() < 1e-6);
    assert!(is_point_in_triangle(&p, &a, &b, &c));
    // The closest point of an in-plane interior point is the point itself.
    let q = Triangle::new(a, b, c).closest_point(&p);
    assert!(q.sub(&p).length() < 1e-6, "{q:?}");
}

#[test]
fn parallel_segments_are_one_apart() {
    let s1 = Segment3::new(Vec3::ZERO, Vec3::UNIT_X);
    let s2 = Segment3::new(Vec3::UNIT_Y, Vec3::new(1.0, 1.0, 0.0));
    let pair = s1.closest_points(&s2);
    assert!((pair.distance_squared - 1.0).abs() < 1e-6, "{pair:?}");
    assert_eq!(pair.c1, Vec3::ZERO);
    assert_eq!(pair.c2, Vec3::UNIT_Y);
}

#[test]
fn crossing_planar_segments_meet() {
    let s1 = Segment2::new(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0));
    let s2 = Segment2::new(Vec2::new(0.0, -1.0), Vec2::new(0.0, 1.0));
    let pair = s1.closest_points(&s2);
    assert!(pair.distance_squared < 1e-12, "{pair:?}");
    assert!((pair.s - 0.5).abs() < 1e-6);
    assert!((pair.t - 0.5).abs() < 1e-6);
}

#[test]
fn collinear_points_have_x_as_dominant_axis() {
    let pts = [
        Vec3::new(-1.0, 0.0, 0.0),
        Vec3::ZERO,
        Vec3::new(1.0, 0.0, 0.0),
    ];
    let axes = principal_axes(&pts, &JacobiSolver::default());
    assert!(axes.is_some());
    if let Some(axes) = axes {
        let dominant = axes.principal_axis();
        assert!((dominant.x().abs() - 1.0).abs() < 1e-6, "{dominant:?}");
        assert!(dominant.y().abs() < 1e-6 && dominant.z().abs() < 1e-6);
    }
}

#[test]
fn tilted_line_principal_axis_follows_the_points() {
    let dir = Vec3::new(1.0, 2.0, 2.0).scale(1.0 / 3.0);
    let pts: Vec<Vec3> = (-3_i16..=3).map(|i| dir.scale(f32::from(i))).collect();
    let e = jacobi(covariance3(&pts)).sorted_descending();
    let axis = e.eigenvector(0);
    assert!((axis.dot(&dir).abs() - 1.0).abs() < 1e-4, "{axis:?}");
    assert!(e.eigenvalues()[1].abs() < 1e-4);
}

#[test]
fn tetrahedron_centroid_is_its_own_closest_point() {
    let tet = Tetrahedron::new(Vec3::ZERO, Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::UNIT_Z);
    let centroid = tet.centroid();
    assert_eq!(tet.closest_point(&centroid), centroid);
}

#[test]
fn rotated_box_grows_and_still_overlaps() {
    let unit = Aabb2::new(Vec2::ZERO, Vec2::new(1.0, 1.0));
    let rotated = unit.transformed(&Mat2x3::rotation(core::f32::consts::FRAC_PI_4));
    let r = core::f32::consts::SQRT_2;
    assert!((rotated.radius.x() - r).abs() < 1e-5);
    assert!((rotated.radius.y() - r).abs() < 1e-5);
    let neighbour = Aabb2::new(Vec2::new(2.4, 0.0), Vec2::new(1.0, 1.0));
    assert!(!unit.overlaps(&neighbour));
    assert!(rotated.overlaps(&neighbour));
}

#[test]
fn hull_helpers_agree_on_a_rectangle() {
    let pts = [
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(4.0, 1.0),
        Vec2::new(4.0, 0.0),
    ];
    // The x extremes are the diagonal corners.
    assert_eq!(most_separated_points_on_aabb(&pts), Some((0, 2)));
    let rect = minimum_area_rectangle(&pts);
    assert!(rect.is_some_and(|r| (r.area - 4.0).abs() < 1e-6));
}

#[test]
fn tolerances_drive_the_solver() {
    let json = br#"{ "max_sweeps": 2, "min_sweeps": 0 }"#;
    let tolerances = Tolerances::from_json(json);
    assert!(tolerances.is_ok());
    if let Ok(tolerances) = tolerances {
        let solver = JacobiSolver::from_tolerances(&tolerances);
        assert!(solver.is_ok_and(|s| s.max_sweeps() == 2));
    }
}

#[test]
fn loaded_tolerances_with_early_stop_still_diagonalize() {
    let tolerances = Tolerances::from_json(br#"{ "min_sweeps": 0 }"#);
    let solver = tolerances.and_then(|t| JacobiSolver::from_tolerances(&t));
    assert!(solver.is_ok());
    if let Ok(solver) = solver {
        let a = Mat3::symmetric(4.0, 3.0, 2.0, 1.0, 0.5, 0.25);
        let e = solver.solve(a);
        assert!(e.diagonalized.off_diagonal_norm_squared() < 1e-7, "{e:?}");
        for (got, want) in e.reconstruct().to_array().iter().zip(a.to_array()) {
            assert!((got - want).abs() < 5e-4, "{e:?}");
        }
    }
}

#[test]
fn loaded_segment_degeneracy_collapses_short_segments() {
    // Squared length 0.0025: a proper segment by default, a point under 0.01.
    let short = Segment3::new(Vec3::ZERO, Vec3::new(0.05, 0.0, 0.0));
    let post = Segment3::new(Vec3::new(0.05, -1.0, 0.0), Vec3::new(0.05, 1.0, 0.0));

    let proper = short.closest_points_with(&post, &Tolerances::default());
    assert_eq!(proper.s, 1.0);
    assert_eq!(proper.distance_squared, 0.0);
    assert_eq!(proper, short.closest_points(&post));

    let loose = Tolerances::from_json(br#"{ "segment_degeneracy": 0.01 }"#);
    assert!(loose.is_ok());
    if let Ok(loose) = loose {
        let collapsed = short.closest_points_with(&post, &loose);
        assert_eq!(collapsed.s, 0.0);
        assert_eq!(collapsed.c1, Vec3::ZERO);
        assert_eq!(collapsed.t, 0.5);
        assert!((collapsed.distance_squared - 0.0025).abs() < 1e-7);
    }
}
