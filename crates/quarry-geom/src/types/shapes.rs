// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use quarry_math::{Vec2, Vec3, Vector};
use serde::{Deserialize, Serialize};

use crate::closest::{self, SegmentPair, SegmentPoint};
use crate::config::Tolerances;

/// Segment between `p` and `q`. Zero-length segments are valid input.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment<V> {
    /// Start point (`t = 0`).
    pub p: V,
    /// End point (`t = 1`).
    pub q: V,
}

/// Planar segment.
pub type Segment2 = Segment<Vec2>;
/// Segment in 3D.
pub type Segment3 = Segment<Vec3>;

impl<V: Vector> Segment<V> {
    /// Creates a segment from its endpoints.
    pub const fn new(p: V, q: V) -> Self {
        Self { p, q }
    }

    /// Point at parameter `t` (`p + t * (q - p)`), unclamped.
    pub fn at(&self, t: f32) -> V {
        self.p.add_scaled(t, &self.q.sub(&self.p))
    }

    /// Closest point on the segment to `c` with its parameter.
    pub fn closest_point(&self, c: &V) -> SegmentPoint<V> {
        closest::closest_point_on_segment(&self.p, &self.q, c)
    }

    /// Squared distance from `c` to the segment.
    pub fn squared_distance(&self, c: &V) -> f32 {
        closest::squared_distance_point_segment(&self.p, &self.q, c)
    }

    /// Closest points between this segment and `other`, using the default
    /// degeneracy tolerance.
    pub fn closest_points(&self, other: &Self) -> SegmentPair<V> {
        closest::closest_points_segment_segment(&self.p, &self.q, &other.p, &other.q)
    }

    /// Closest points between this segment and `other`; segments no longer
    /// than `tolerances.segment_degeneracy` (squared) collapse to their start.
    pub fn closest_points_with(&self, other: &Self, tolerances: &Tolerances) -> SegmentPair<V> {
        closest::closest_points_segment_segment_with(
            &self.p,
            &self.q,
            &other.p,
            &other.q,
            tolerances.segment_degeneracy,
        )
    }
}

/// Triangle `(a, b, c)`; counter-clockwise orientation defines the front face.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// First vertex.
    pub a: Vec3,
    /// Second vertex.
    pub b: Vec3,
    /// Third vertex.
    pub c: Vec3,
}

impl Triangle {
    /// Creates a triangle from its vertices.
    pub const fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// Unnormalized normal `(b - a) × (c - a)`.
    pub fn normal(&self) -> Vec3 {
        self.b.sub(&self.a).cross(&self.c.sub(&self.a))
    }

    /// Closest point in or on the triangle to `p`.
    pub fn closest_point(&self, p: &Vec3) -> Vec3 {
        closest::closest_point_in_triangle(p, &self.a, &self.b, &self.c)
    }
}

/// Tetrahedron `(a, b, c, d)`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tetrahedron {
    /// First vertex.
    pub a: Vec3,
    /// Second vertex.
    pub b: Vec3,
    /// Third vertex.
    pub c: Vec3,
    /// Fourth vertex.
    pub d: Vec3,
}

impl Tetrahedron {
    /// Creates a tetrahedron from its vertices.
    pub const fn new(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> Self {
        Self { a, b, c, d }
    }

    /// Vertex average.
    pub fn centroid(&self) -> Vec3 {
        self.a.add(&self.b).add(&self.c).add(&self.d).scale(0.25)
    }

    /// Closest point in or on the tetrahedron to `p`; `p` itself when inside.
    pub fn closest_point(&self, p: &Vec3) -> Vec3 {
        closest::closest_point_in_tetrahedron(p, &self.a, &self.b, &self.c, &self.d)
    }
}

/// Rectangle with corner `a` spanned by the edges `a → b` and `a → c`.
///
/// The edges are expected to be perpendicular; the closest-point query clamps
/// along each edge independently.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect3 {
    /// Corner shared by both edges.
    pub a: Vec3,
    /// End of the first edge.
    pub b: Vec3,
    /// End of the second edge.
    pub c: Vec3,
}

impl Rect3 {
    /// Creates a rectangle from a corner and the ends of its two edges.
    pub const fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// Closest point in or on the rectangle to `p`.
    pub fn closest_point(&self, p: &Vec3) -> Vec3 {
        closest::closest_point_on_rect(p, &self.a, &self.b, &self.c)
    }
}
