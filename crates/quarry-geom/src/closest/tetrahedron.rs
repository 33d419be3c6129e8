// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use quarry_math::Vec3;

use super::closest_point_in_triangle;

/// Returns `true` if `p` and `d` lie strictly on opposite sides of the plane
/// through `a`, `b`, `c`.
///
/// Only the signs of `(p - a)·n` and `(d - a)·n` are compared, with
/// `n = (b - a) × (c - a)`, so the winding of `abc` does not matter. A point
/// on the plane is not outside.
pub fn is_point_outside_plane(p: &Vec3, a: &Vec3, b: &Vec3, c: &Vec3, d: &Vec3) -> bool {
    let n = b.sub(a).cross(&c.sub(a));
    let sign_p = p.sub(a).dot(&n);
    let sign_d = d.sub(a).dot(&n);
    sign_p * sign_d < 0.0
}

/// Returns the point in or on tetrahedron `abcd` closest to `p`.
///
/// Faces are visited as `abc`, `acd`, `adb`, `bdc`, each tested against the
/// vertex opposite it. For every face whose plane separates `p` from the
/// tetrahedron the closest point on that face is a candidate; the nearest
/// candidate wins and earlier faces win ties. A point outside no face is
/// inside and is returned unchanged.
pub fn closest_point_in_tetrahedron(p: &Vec3, a: &Vec3, b: &Vec3, c: &Vec3, d: &Vec3) -> Vec3 {
    let faces = [(a, b, c, d), (a, c, d, b), (a, d, b, c), (b, d, c, a)];

    let mut closest = *p;
    let mut best_sq_dist = f32::MAX;
    for (u, v, w, opposite) in faces {
        if !is_point_outside_plane(p, u, v, w, opposite) {
            continue;
        }
        let q = closest_point_in_triangle(p, u, v, w);
        let sq_dist = q.sub(p).length_squared();
        if sq_dist < best_sq_dist {
            best_sq_dist = sq_dist;
            closest = q;
        }
    }
    closest
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    const B: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    const C: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    const D: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    #[test]
    fn plane_test_is_winding_independent() {
        let p = Vec3::new(0.2, 0.2, -1.0);
        assert!(is_point_outside_plane(&p, &A, &B, &C, &D));
        assert!(is_point_outside_plane(&p, &A, &C, &B, &D));
        assert!(!is_point_outside_plane(&Vec3::new(0.1, 0.1, 0.1), &A, &B, &C, &D));
        // On the plane is not outside.
        assert!(!is_point_outside_plane(&Vec3::new(0.3, 0.3, 0.0), &A, &B, &C, &D));
    }

    #[test]
    fn interior_point_is_returned_unchanged() {
        let p = Vec3::new(0.1, 0.2, 0.3);
        assert_eq!(closest_point_in_tetrahedron(&p, &A, &B, &C, &D), p);
    }

    #[test]
    fn point_below_base_projects_onto_base() {
        let q = closest_point_in_tetrahedron(&Vec3::new(0.25, 0.25, -2.0), &A, &B, &C, &D);
        assert_eq!(q.to_array(), [0.25, 0.25, 0.0]);
    }

    #[test]
    fn point_beyond_slanted_face_lands_on_it() {
        // Outside the face bcd (x + y + z = 1), nearest point is its centroid.
        let q = closest_point_in_tetrahedron(&Vec3::new(1.0, 1.0, 1.0), &A, &B, &C, &D);
        let third = 1.0 / 3.0;
        for v in q.to_array() {
            assert!((v - third).abs() < 1e-6, "got {q:?}");
        }
    }

    #[test]
    fn point_near_vertex_snaps_to_vertex() {
        let q = closest_point_in_tetrahedron(&Vec3::new(-1.0, -1.0, -1.0), &A, &B, &C, &D);
        assert_eq!(q, A);
    }
}
