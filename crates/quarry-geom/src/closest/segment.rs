// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use quarry_math::{clamp, Vector};

use super::{SegmentPair, SegmentPoint};
use crate::config::DEFAULT_SEGMENT_DEGENERACY;

/// Returns the point on segment `ab` closest to `c`, with its parameter `t`.
///
/// The projection of `c` onto `ab` is computed without dividing by `|ab|²`;
/// the division only happens when the projection lands strictly inside the
/// segment. A zero-length segment yields `(0, a)`.
///
/// # Examples
/// ```
/// use quarry_geom::closest::closest_point_on_segment;
/// use quarry_math::Vec2;
/// let hit = closest_point_on_segment(&Vec2::ZERO, &Vec2::new(4.0, 0.0), &Vec2::new(1.0, 3.0));
/// assert_eq!(hit.t, 0.25);
/// assert_eq!(hit.point.to_array(), [1.0, 0.0]);
/// ```
pub fn closest_point_on_segment<V: Vector>(a: &V, b: &V, c: &V) -> SegmentPoint<V> {
    let ab = b.sub(a);
    let t = c.sub(a).dot(&ab);
    if t <= 0.0 {
        return SegmentPoint { t: 0.0, point: *a };
    }
    let denom = ab.dot(&ab);
    if t >= denom {
        return SegmentPoint { t: 1.0, point: *b };
    }
    let t = t / denom;
    SegmentPoint {
        t,
        point: a.add_scaled(t, &ab),
    }
}

/// Squared distance between point `c` and segment `ab`.
///
/// Resolves the three regions (before `a`, past `b`, alongside the segment)
/// without building the closest point. The interior case subtracts the squared
/// projection and is floored at zero against rounding.
pub fn squared_distance_point_segment<V: Vector>(a: &V, b: &V, c: &V) -> f32 {
    let ab = b.sub(a);
    let ac = c.sub(a);
    let e = ac.dot(&ab);
    if e <= 0.0 {
        return ac.length_squared();
    }
    let f = ab.length_squared();
    if e >= f {
        return c.sub(b).length_squared();
    }
    (ac.length_squared() - e * e / f).max(0.0)
}

/// Closest points between segments `p1q1` and `p2q2` using the default
/// degeneracy tolerance.
pub fn closest_points_segment_segment<V: Vector>(
    p1: &V,
    q1: &V,
    p2: &V,
    q2: &V,
) -> SegmentPair<V> {
    closest_points_segment_segment_with(p1, q1, p2, q2, DEFAULT_SEGMENT_DEGENERACY)
}

/// Closest points between segments `p1q1` and `p2q2`.
///
/// A segment whose squared length is at most `epsilon` is treated as the
/// single point at its start. For two proper segments the unclamped optimum of
/// the 2×2 normal equations is clamped onto the first segment, `t` is derived
/// from it, and `s` is recomputed only when `t` leaves `[0, 1]`. Parallel
/// segments pick `s = 0`.
pub fn closest_points_segment_segment_with<V: Vector>(
    p1: &V,
    q1: &V,
    p2: &V,
    q2: &V,
    epsilon: f32,
) -> SegmentPair<V> {
    let d1 = q1.sub(p1);
    let d2 = q2.sub(p2);
    let r = p1.sub(p2);
    let a = d1.length_squared();
    let e = d2.length_squared();
    let f = d2.dot(&r);

    if a <= epsilon && e <= epsilon {
        return SegmentPair {
            s: 0.0,
            t: 0.0,
            distance_squared: r.length_squared(),
            c1: *p1,
            c2: *p2,
        };
    }

    let (s, t) = if a <= epsilon {
        (0.0, clamp(f / e, 0.0, 1.0))
    } else {
        let c = d1.dot(&r);
        if e <= epsilon {
            (clamp(-c / a, 0.0, 1.0), 0.0)
        } else {
            let b = d1.dot(&d2);
            // Non-negative in exact arithmetic; zero for parallel segments.
            let denom = a * e - b * b;
            let s = if denom > 0.0 {
                clamp((b * f - c * e) / denom, 0.0, 1.0)
            } else {
                0.0
            };
            let t = (b * s + f) / e;
            if t < 0.0 {
                (clamp(-c / a, 0.0, 1.0), 0.0)
            } else if t > 1.0 {
                (clamp((b - c) / a, 0.0, 1.0), 1.0)
            } else {
                (s, t)
            }
        }
    };

    let c1 = p1.add_scaled(s, &d1);
    let c2 = p2.add_scaled(t, &d2);
    SegmentPair {
        s,
        t,
        distance_squared: c1.sub(&c2).length_squared(),
        c1,
        c2,
    }
}
