// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use quarry_math::Vec3;

/// Returns the point of the rectangle spanned by edges `ab` and `ac` (from
/// corner `a`) closest to `p`.
///
/// The projection of `p - a` is clamped onto each edge independently, each
/// scaled by that edge's squared length.
pub fn closest_point_on_rect(p: &Vec3, a: &Vec3, b: &Vec3, c: &Vec3) -> Vec3 {
    let d = p.sub(a);
    let mut closest = *a;
    for edge in [b.sub(a), c.sub(a)] {
        let dist = d.dot(&edge);
        let max_dist = edge.length_squared();
        if dist >= max_dist {
            closest = closest.add(&edge);
        } else if dist > 0.0 {
            closest = closest.add_scaled(dist / max_dist, &edge);
        }
    }
    closest
}

/// Returns the point in or on triangle `abc` closest to `p`.
///
/// Voronoi-region walk over the triangle's features, checked in order:
/// vertex `a`, vertex `b`, edge `ab`, vertex `c`, edge `ac`, edge `bc`, then
/// the face. Six dot products are computed once and shared by every test.
/// Boundary comparisons are inclusive, so a point on a region border resolves
/// to the feature tested first (vertices before edges before the face).
pub fn closest_point_in_triangle(p: &Vec3, a: &Vec3, b: &Vec3, c: &Vec3) -> Vec3 {
    let ab = b.sub(a);
    let ac = c.sub(a);

    let ap = p.sub(a);
    let d1 = ab.dot(&ap);
    let d2 = ac.dot(&ap);
    if d1 <= 0.0 && d2 <= 0.0 {
        return *a;
    }

    let bp = p.sub(b);
    let d3 = ab.dot(&bp);
    let d4 = ac.dot(&bp);
    if d3 >= 0.0 && d4 <= d3 {
        return *b;
    }

    let vc = d1 * d4 - d3 * d2;
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        return a.add_scaled(d1 / (d1 - d3), &ab);
    }

    let cp = p.sub(c);
    let d5 = ab.dot(&cp);
    let d6 = ac.dot(&cp);
    if d6 >= 0.0 && d5 <= d6 {
        return *c;
    }

    let vb = d5 * d2 - d1 * d6;
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        return a.add_scaled(d2 / (d2 - d6), &ac);
    }

    let va = d3 * d6 - d5 * d4;
    let d43 = d4 - d3;
    let d56 = d5 - d6;
    if va <= 0.0 && d43 >= 0.0 && d56 >= 0.0 {
        return b.add_scaled(d43 / (d43 + d56), &c.sub(b));
    }

    // Inside the face: blend with the signed sub-areas.
    let denom = 1.0 / (va + vb + vc);
    let v = vb * denom;
    let w = vc * denom;
    a.add_scaled(v, &ab).add_scaled(w, &ac)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(got: Vec3, want: [f32; 3]) {
        let g = got.to_array();
        for i in 0..3 {
            assert!((g[i] - want[i]).abs() < 1e-6, "got {g:?}, want {want:?}");
        }
    }

    const A: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    const B: Vec3 = Vec3::new(2.0, 0.0, 0.0);
    const C: Vec3 = Vec3::new(0.0, 2.0, 0.0);

    #[test]
    fn vertex_regions() {
        assert_close(closest_point_in_triangle(&Vec3::new(-1.0, -1.0, 3.0), &A, &B, &C), [0.0; 3]);
        assert_close(
            closest_point_in_triangle(&Vec3::new(3.0, -0.5, 0.0), &A, &B, &C),
            [2.0, 0.0, 0.0],
        );
        assert_close(
            closest_point_in_triangle(&Vec3::new(-0.5, 3.0, -1.0), &A, &B, &C),
            [0.0, 2.0, 0.0],
        );
    }

    #[test]
    fn edge_regions() {
        assert_close(
            closest_point_in_triangle(&Vec3::new(1.0, -1.0, 0.0), &A, &B, &C),
            [1.0, 0.0, 0.0],
        );
        assert_close(
            closest_point_in_triangle(&Vec3::new(-1.0, 1.5, 0.0), &A, &B, &C),
            [0.0, 1.5, 0.0],
        );
        assert_close(
            closest_point_in_triangle(&Vec3::new(2.0, 2.0, 0.0), &A, &B, &C),
            [1.0, 1.0, 0.0],
        );
    }

    #[test]
    fn face_region_projects_onto_plane() {
        assert_close(
            closest_point_in_triangle(&Vec3::new(0.5, 0.5, 4.0), &A, &B, &C),
            [0.5, 0.5, 0.0],
        );
    }

    #[test]
    fn rect_clamps_each_edge() {
        let a = Vec3::ZERO;
        let b = Vec3::new(4.0, 0.0, 0.0);
        let c = Vec3::new(0.0, 0.0, 2.0);
        assert_close(closest_point_on_rect(&Vec3::new(1.0, 5.0, 1.0), &a, &b, &c), [1.0, 0.0, 1.0]);
        assert_close(closest_point_on_rect(&Vec3::new(9.0, -1.0, 3.0), &a, &b, &c), [4.0, 0.0, 2.0]);
        assert_close(closest_point_on_rect(&Vec3::new(-2.0, 1.0, -3.0), &a, &b, &c), [0.0; 3]);
    }
}
