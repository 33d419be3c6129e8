// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scalar triangle measurements.

use quarry_math::Vec3;

/// Area of a triangle with side lengths `a`, `b`, `c` (Heron's formula).
///
/// Returns NaN when the lengths violate the triangle inequality.
pub fn triangle_area_from_lengths(a: f32, b: f32, c: f32) -> f32 {
    let s = (a + b + c) * 0.5;
    (s * (s - a) * (s - b) * (s - c)).sqrt()
}

/// Signed distance from `p` to the plane of triangle `abc`.
///
/// Measured along the unit normal `(c - a) × (b - a)`, so for a triangle wound
/// counter-clockwise when viewed from the front, points behind it are
/// positive. A degenerate triangle yields `0`.
pub fn signed_distance_to_triangle_plane(p: &Vec3, a: &Vec3, b: &Vec3, c: &Vec3) -> f32 {
    let n = c.sub(a).cross(&b.sub(a)).normalize();
    n.dot(&p.sub(a))
}
