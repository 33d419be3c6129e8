// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::EPSILON;

/// Point or direction in 3D query space.
///
/// Queries index components by axis (`0 = x`, `1 = y`, `2 = z`) when they scan
/// extremes or clamp against boxes. Every operation returns a fresh value.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// Origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// `+x` basis vector.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);
    /// `+y` basis vector.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);
    /// `+z` basis vector.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Builds a vector from its `x`, `y`, `z` coordinates.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Coordinates in `[x, y, z]` order.
    pub fn to_array(self) -> [f32; 3] {
        self.data
    }

    /// Coordinate on axis `idx`.
    ///
    /// # Panics
    /// Panics if `idx > 2`.
    pub fn component(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    /// `x` coordinate.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// `y` coordinate.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// `z` coordinate.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// Component-wise `self + other`.
    pub fn add(&self, other: &Self) -> Self {
        let ([ax, ay, az], [bx, by, bz]) = (self.data, other.data);
        Self::new(ax + bx, ay + by, az + bz)
    }

    /// Component-wise `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        let ([ax, ay, az], [bx, by, bz]) = (self.data, other.data);
        Self::new(ax - bx, ay - by, az - bz)
    }

    /// Uniform scale by `scalar`.
    pub fn scale(&self, scalar: f32) -> Self {
        let [x, y, z] = self.data;
        Self::new(x * scalar, y * scalar, z * scalar)
    }

    /// `self + scalar * other`, the parametric step used along segments.
    pub fn add_scaled(&self, scalar: f32, other: &Self) -> Self {
        self.add(&other.scale(scalar))
    }

    /// Inner product.
    pub fn dot(&self, other: &Self) -> f32 {
        let ([ax, ay, az], [bx, by, bz]) = (self.data, other.data);
        ax * bx + ay * by + az * bz
    }

    /// Right-handed cross product; `UNIT_X × UNIT_Y = UNIT_Z`.
    pub fn cross(&self, other: &Self) -> Self {
        let ([ax, ay, az], [bx, by, bz]) = (self.data, other.data);
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Euclidean norm.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared norm; distance queries compare this to avoid the root.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Unit vector in the same direction.
    ///
    /// A vector no longer than `EPSILON` has no usable direction and maps to
    /// `ZERO`, which callers test for explicitly (for example to skip
    /// zero-length polygon edges).
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }
}

/// `[x, y, z]` into a vector.
///
/// # Examples
/// ```
/// use quarry_math::Vec3;
/// let v = Vec3::from([1.0, 2.0, 3.0]);
/// assert_eq!(v.z(), 3.0);
/// ```
impl From<[f32; 3]> for Vec3 {
    fn from(data: [f32; 3]) -> Self {
        Self { data }
    }
}
