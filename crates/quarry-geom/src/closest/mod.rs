// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Closest-point and distance queries.
//!
//! Every query is a pure function of its inputs. Degenerate primitives
//! (zero-length segments, collapsed triangles) are accepted and resolved to a
//! well-defined feature: a segment collapses to its start point, and the
//! triangle region tests favour the lower-dimensional feature on ties.
//!
//! Distances are reported squared; callers take the root only if they need
//! it.

mod segment;
mod tetrahedron;
mod triangle;

use serde::{Deserialize, Serialize};

pub use segment::{
    closest_point_on_segment, closest_points_segment_segment,
    closest_points_segment_segment_with, squared_distance_point_segment,
};
pub use tetrahedron::{closest_point_in_tetrahedron, is_point_outside_plane};
pub use triangle::{closest_point_in_triangle, closest_point_on_rect};

/// Closest point on a segment `a + t * (b - a)` together with its parameter.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentPoint<V> {
    /// Segment parameter in `[0, 1]`.
    pub t: f32,
    /// The closest point.
    pub point: V,
}

/// Closest points between two segments `S1(s) = p1 + s * d1` and
/// `S2(t) = p2 + t * d2`.
///
/// `c1` always lies on the first segment and `c2` on the second.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentPair<V> {
    /// Parameter of `c1` on the first segment, in `[0, 1]`.
    pub s: f32,
    /// Parameter of `c2` on the second segment, in `[0, 1]`.
    pub t: f32,
    /// Squared distance between `c1` and `c2`.
    pub distance_squared: f32,
    /// Closest point on the first segment.
    pub c1: V,
    /// Closest point on the second segment.
    pub c2: V,
}
