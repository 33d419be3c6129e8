// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::Vec2;

/// Column‑major 2D affine transform (2 rows × 3 columns).
///
/// Layout: `[m00, m10, m01, m11, tx, ty]`. The first two columns hold the
/// linear part, the last column the translation; points are transformed with
/// an implicit `w = 1`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat2x3 {
    data: [f32; 6],
}

impl Default for Mat2x3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat2x3 {
    /// Returns the identity transform.
    pub const fn identity() -> Self {
        Self {
            data: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        }
    }

    /// Creates a transform from column-major array data.
    pub const fn new(data: [f32; 6]) -> Self {
        Self { data }
    }

    /// Builds a pure translation.
    pub const fn translation(tx: f32, ty: f32) -> Self {
        Self {
            data: [1.0, 0.0, 0.0, 1.0, tx, ty],
        }
    }

    /// Builds a counter-clockwise rotation by `angle` radians about the origin.
    pub fn rotation(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([c, s, -s, c, 0.0, 0.0])
    }

    /// Returns the transform as a column‑major array.
    pub fn to_array(self) -> [f32; 6] {
        self.data
    }

    /// Element of the linear part at `(row, col)`, `row, col ∈ {0, 1}`.
    ///
    /// # Panics
    /// Panics if `row > 1` or `col > 2`.
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.data[col * 2 + row]
    }

    /// Translation column.
    pub fn translation_part(&self) -> Vec2 {
        Vec2::new(self.data[4], self.data[5])
    }

    /// Transforms a point (applies translation).
    pub fn transform_point(&self, p: &Vec2) -> Vec2 {
        self.transform_direction(p).add(&self.translation_part())
    }

    /// Transforms a direction (linear part only).
    pub fn transform_direction(&self, d: &Vec2) -> Vec2 {
        let [x, y] = d.to_array();
        Vec2::new(
            self.at(0, 0) * x + self.at(0, 1) * y,
            self.at(1, 0) * x + self.at(1, 1) * y,
        )
    }
}

impl From<[f32; 6]> for Mat2x3 {
    fn from(value: [f32; 6]) -> Self {
        Self { data: value }
    }
}
