// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Extreme-point scans and separating-axis helpers.
//!
//! Scans return indices into the caller's slice, or `None` when nothing
//! qualifies (an empty slice, or no point on the requested side of an edge).

use quarry_math::{Vec2, Vec3, Vector};
use serde::{Deserialize, Serialize};

/// Indices of the points with the smallest and largest projection onto
/// `direction`, as `(min, max)`.
///
/// `direction` need not be normalized. The first point reaching an extreme
/// keeps it on ties. Returns `None` for an empty slice.
pub fn extreme_points_along_direction<V: Vector>(
    direction: &V,
    points: &[V],
) -> Option<(usize, usize)> {
    if points.is_empty() {
        return None;
    }
    let (mut imin, mut imax) = (0, 0);
    let (mut min_proj, mut max_proj) = (f32::MAX, f32::MIN);
    for (n, point) in points.iter().enumerate() {
        let proj = point.dot(direction);
        if proj < min_proj {
            min_proj = proj;
            imin = n;
        }
        if proj > max_proj {
            max_proj = proj;
            imax = n;
        }
    }
    Some((imin, imax))
}

/// Index of the point farthest to the left of the directed line `a → b`.
///
/// Distance is measured along the counter-clockwise perpendicular of `b - a`
/// (unnormalized). Among equally distant points the one projecting farthest
/// along `b - a` wins, which keeps hull construction deterministic. Points on
/// or to the right of the line only qualify with a positive projection; if
/// none qualifies the result is `None`.
#[allow(clippy::float_cmp)]
pub fn farthest_point_from_edge(a: &Vec2, b: &Vec2, points: &[Vec2]) -> Option<usize> {
    let e = b.sub(a);
    let e_perp = e.perp();

    let mut index = None;
    let mut max_val = 0.0_f32;
    let mut right_most_val = 0.0_f32;
    for (n, point) in points.iter().enumerate() {
        let pma = point.sub(a);
        let d = pma.dot(&e_perp);
        let r = pma.dot(&e);
        if d > max_val || (d == max_val && r > right_most_val) {
            max_val = d;
            right_most_val = r;
            index = Some(n);
        }
    }
    index
}

/// Indices of the two most separated points among the per-axis extremes of
/// `points`, as `(min, max)`.
///
/// For every axis the minimum and maximum points are found; the pair with the
/// greatest squared separation is returned. An axis other than x is chosen only
/// when its separation strictly exceeds that of every other axis. Returns
/// `None` for an empty slice.
pub fn most_separated_points_on_aabb<V: Vector>(points: &[V]) -> Option<(usize, usize)> {
    if points.is_empty() {
        return None;
    }
    // (min index, max index) per axis; unused slots stay at (0, 0).
    let mut extremes = [(0usize, 0usize); 3];
    for (i, point) in points.iter().enumerate().skip(1) {
        for (axis, (lo, hi)) in extremes.iter_mut().enumerate().take(V::DIM) {
            if point.component(axis) < points[*lo].component(axis) {
                *lo = i;
            }
            if point.component(axis) > points[*hi].component(axis) {
                *hi = i;
            }
        }
    }

    let mut separation = [0.0_f32; 3];
    for (sep, &(lo, hi)) in separation.iter_mut().zip(&extremes).take(V::DIM) {
        *sep = points[hi].sub(&points[lo]).length_squared();
    }

    let axis = (1..V::DIM)
        .find(|&k| (0..V::DIM).all(|j| j == k || separation[k] > separation[j]))
        .unwrap_or(0);
    Some(extremes[axis])
}

/// Returns `true` if the quadrilateral `abcd` is convex.
///
/// Both diagonals must split the quad: `a` and `c` lie on opposite sides of
/// `bd`, and `b` and `d` lie on opposite sides of `ac`. Degenerate quads
/// (coincident vertices, collinear corners) are not convex.
pub fn is_convex_quad(a: &Vec3, b: &Vec3, c: &Vec3, d: &Vec3) -> bool {
    let dmb = d.sub(b);
    let bda = dmb.cross(&a.sub(b));
    let bdc = dmb.cross(&c.sub(b));
    if bda.dot(&bdc) >= 0.0 {
        return false;
    }

    let cma = c.sub(a);
    let acd = cma.cross(&d.sub(a));
    let acb = cma.cross(&b.sub(a));
    acd.dot(&acb) < 0.0
}

/// Minimum-area bounding rectangle of a convex polygon in the plane.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinAreaRect {
    /// Rectangle area.
    pub area: f32,
    /// Rectangle center.
    pub center: Vec2,
    /// Unit axes: the winning edge direction and its counter-clockwise
    /// perpendicular.
    pub axes: [Vec2; 2],
    /// Half-extents along `axes[0]` and `axes[1]`.
    pub half_extents: Vec2,
}

/// Finds the minimum-area rectangle enclosing the convex polygon `points`
/// (vertices in boundary order).
///
/// Every boundary edge is tried as a rectangle side: all points are projected
/// onto the edge direction and its perpendicular, relative to the edge's start
/// vertex, and the smallest extent product wins (first edge wins ties).
/// Zero-length edges are skipped. Runs in `O(n²)`; returns `None` when no edge
/// is usable.
pub fn minimum_area_rectangle(points: &[Vec2]) -> Option<MinAreaRect> {
    let mut best: Option<MinAreaRect> = None;
    let mut origin = *points.last()?;

    for vertex in points {
        let e0 = vertex.sub(&origin).normalize();
        if e0.length_squared() > 0.0 {
            let e1 = e0.perp();
            let (mut min0, mut max0, mut min1, mut max1) = (0.0_f32, 0.0_f32, 0.0_f32, 0.0_f32);
            for point in points {
                let d = point.sub(&origin);
                let dot0 = d.dot(&e0);
                let dot1 = d.dot(&e1);
                min0 = min0.min(dot0);
                max0 = max0.max(dot0);
                min1 = min1.min(dot1);
                max1 = max1.max(dot1);
            }
            let area = (max0 - min0) * (max1 - min1);

            if best.is_none_or(|b| area < b.area) {
                let offset = e0.scale(min0 + max0).add(&e1.scale(min1 + max1));
                best = Some(MinAreaRect {
                    area,
                    center: origin.add_scaled(0.5, &offset),
                    axes: [e0, e1],
                    half_extents: Vec2::new(max0 - min0, max1 - min1).scale(0.5),
                });
            }
        }
        origin = *vertex;
    }
    best
}
