// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Barycentric coordinates on triangles.
//!
//! Coordinates `(u, v, w)` satisfy `p = u·a + v·b + w·c` for `p` in the plane
//! of `abc`; points off the plane are projected first. The three always sum to
//! one. A degenerate triangle has a zero Gram determinant and the coordinates
//! come out infinite or NaN.

use quarry_math::Vec3;
use serde::{Deserialize, Serialize};

/// Barycentric coordinates of `p` with respect to triangle `abc`.
///
/// # Examples
/// ```
/// use quarry_geom::barycentric::barycentric;
/// use quarry_math::Vec3;
/// let (u, v, w) = barycentric(
///     &Vec3::ZERO,
///     &Vec3::UNIT_X,
///     &Vec3::UNIT_Y,
///     &Vec3::new(0.25, 0.5, 0.0),
/// );
/// assert_eq!((u, v, w), (0.25, 0.25, 0.5));
/// ```
pub fn barycentric(a: &Vec3, b: &Vec3, c: &Vec3, p: &Vec3) -> (f32, f32, f32) {
    BarycentricCache::new(a, b, c).coordinates(p)
}

/// Returns `true` if the projection of `p` onto the plane of `abc` lies inside
/// the triangle or on its boundary.
pub fn is_point_in_triangle(p: &Vec3, a: &Vec3, b: &Vec3, c: &Vec3) -> bool {
    let (_, v, w) = barycentric(a, b, c, p);
    v >= 0.0 && w >= 0.0 && v + w <= 1.0
}

/// Per-triangle terms of the barycentric solve, for repeated queries against
/// the same triangle.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarycentricCache {
    a: Vec3,
    v0: Vec3,
    v1: Vec3,
    d00: f32,
    d01: f32,
    d11: f32,
    inv_denom: f32,
}

impl BarycentricCache {
    /// Precomputes the edge vectors and Gram matrix of triangle `abc`.
    pub fn new(a: &Vec3, b: &Vec3, c: &Vec3) -> Self {
        let v0 = b.sub(a);
        let v1 = c.sub(a);
        let d00 = v0.dot(&v0);
        let d01 = v0.dot(&v1);
        let d11 = v1.dot(&v1);
        Self {
            a: *a,
            v0,
            v1,
            d00,
            d01,
            d11,
            inv_denom: 1.0 / (d00 * d11 - d01 * d01),
        }
    }

    /// Barycentric coordinates `(u, v, w)` of `p`.
    pub fn coordinates(&self, p: &Vec3) -> (f32, f32, f32) {
        let v2 = p.sub(&self.a);
        let d20 = v2.dot(&self.v0);
        let d21 = v2.dot(&self.v1);
        let v = (self.d11 * d20 - self.d01 * d21) * self.inv_denom;
        let w = (self.d00 * d21 - self.d01 * d20) * self.inv_denom;
        (1.0 - v - w, v, w)
    }

    /// Returns `true` if `p` projects inside the cached triangle.
    pub fn contains(&self, p: &Vec3) -> bool {
        let (_, v, w) = self.coordinates(p);
        v >= 0.0 && w >= 0.0 && v + w <= 1.0
    }
}
