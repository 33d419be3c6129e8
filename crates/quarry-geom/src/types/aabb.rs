// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use quarry_math::{clamp, Mat2x3, Mat3, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Planar axis-aligned bounding box stored as center and half-extents.
///
/// Invariants:
/// - `radius` components are non-negative.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Aabb2 {
    /// Box center.
    pub center: Vec2,
    /// Half-extent along each axis.
    pub radius: Vec2,
}

impl Aabb2 {
    /// Creates a box from its center and half-extents.
    pub const fn new(center: Vec2, radius: Vec2) -> Self {
        Self { center, radius }
    }

    /// Minimum corner.
    pub fn min(&self) -> Vec2 {
        self.center.sub(&self.radius)
    }

    /// Maximum corner.
    pub fn max(&self) -> Vec2 {
        self.center.add(&self.radius)
    }

    /// Builds the tight box around `points`, or `None` when `points` is empty.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min = *first;
        let mut max = *first;
        for p in rest {
            min = Vec2::new(min.x().min(p.x()), min.y().min(p.y()));
            max = Vec2::new(max.x().max(p.x()), max.y().max(p.y()));
        }
        Some(Self {
            center: min.add(&max).scale(0.5),
            radius: max.sub(&min).scale(0.5),
        })
    }

    /// Returns `true` if this box overlaps `other` (inclusive on edges).
    ///
    /// The test is symmetric in its arguments.
    pub fn overlaps(&self, other: &Self) -> bool {
        for axis in 0..2 {
            let gap = (self.center.component(axis) - other.center.component(axis)).abs();
            if gap > self.radius.component(axis) + other.radius.component(axis) {
                return false;
            }
        }
        true
    }

    /// Computes the box enclosing this box after transformation by `t`.
    ///
    /// The center is transformed as a point; each output half-extent is the
    /// absolute-value projection of the input half-extents through the linear
    /// part. Returns a new box; `self` is not modified.
    pub fn transformed(&self, t: &Mat2x3) -> Self {
        let mut center = t.translation_part().to_array();
        let mut radius = [0.0; 2];
        for (i, (c, r)) in center.iter_mut().zip(radius.iter_mut()).enumerate() {
            for j in 0..2 {
                *c += t.at(i, j) * self.center.component(j);
                *r += t.at(i, j).abs() * self.radius.component(j);
            }
        }
        Self {
            center: Vec2::from(center),
            radius: Vec2::from(radius),
        }
    }

    /// Returns the point in or on the box closest to `p`.
    pub fn closest_point(&self, p: &Vec2) -> Vec2 {
        let min = self.min();
        let max = self.max();
        Vec2::new(
            clamp(p.x(), min.x(), max.x()),
            clamp(p.y(), min.y(), max.y()),
        )
    }

    /// Squared distance from `p` to the box; zero when `p` is inside.
    pub fn squared_distance(&self, p: &Vec2) -> f32 {
        let min = self.min().to_array();
        let max = self.max().to_array();
        excess_squared(&p.to_array(), &min, &max)
    }
}

/// Axis-aligned bounding box stored as center and half-extents.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Aabb3 {
    /// Box center.
    pub center: Vec3,
    /// Half-extent along each axis.
    pub radius: Vec3,
}

impl Aabb3 {
    /// Creates a box from its center and half-extents.
    pub const fn new(center: Vec3, radius: Vec3) -> Self {
        Self { center, radius }
    }

    /// Minimum corner.
    pub fn min(&self) -> Vec3 {
        self.center.sub(&self.radius)
    }

    /// Maximum corner.
    pub fn max(&self) -> Vec3 {
        self.center.add(&self.radius)
    }

    /// Builds the tight box around `points`, or `None` when `points` is empty.
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min = first.to_array();
        let mut max = min;
        for p in rest {
            for ((lo, hi), v) in min.iter_mut().zip(max.iter_mut()).zip(p.to_array()) {
                *lo = lo.min(v);
                *hi = hi.max(v);
            }
        }
        let (min, max) = (Vec3::from(min), Vec3::from(max));
        Some(Self {
            center: min.add(&max).scale(0.5),
            radius: max.sub(&min).scale(0.5),
        })
    }

    /// Returns `true` if this box overlaps `other` (inclusive on faces).
    pub fn overlaps(&self, other: &Self) -> bool {
        (0..3).all(|axis| {
            let gap = (self.center.component(axis) - other.center.component(axis)).abs();
            gap <= self.radius.component(axis) + other.radius.component(axis)
        })
    }

    /// Computes the box enclosing this box after rotating/scaling by `m` and
    /// then translating by `translation`.
    pub fn transformed(&self, m: &Mat3, translation: Vec3) -> Self {
        let mut radius = [0.0; 3];
        for (i, r) in radius.iter_mut().enumerate() {
            for j in 0..3 {
                *r += m.at(i, j).abs() * self.radius.component(j);
            }
        }
        Self {
            center: m.transform(&self.center).add(&translation),
            radius: Vec3::from(radius),
        }
    }

    /// Returns the point in or on the box closest to `p`.
    pub fn closest_point(&self, p: &Vec3) -> Vec3 {
        let min = self.min().to_array();
        let max = self.max().to_array();
        let q = p.to_array();
        Vec3::new(
            clamp(q[0], min[0], max[0]),
            clamp(q[1], min[1], max[1]),
            clamp(q[2], min[2], max[2]),
        )
    }

    /// Squared distance from `p` to the box; zero when `p` is inside.
    pub fn squared_distance(&self, p: &Vec3) -> f32 {
        let min = self.min().to_array();
        let max = self.max().to_array();
        excess_squared(&p.to_array(), &min, &max)
    }
}

// Per-axis excess outside [min, max], squared and summed.
fn excess_squared(p: &[f32], min: &[f32], max: &[f32]) -> f32 {
    let mut sq_dist = 0.0;
    for ((&v, &lo), &hi) in p.iter().zip(min).zip(max) {
        if v < lo {
            sq_dist += (lo - v) * (lo - v);
        }
        if v > hi {
            sq_dist += (v - hi) * (v - hi);
        }
    }
    sq_dist
}
