// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::Vec3;

/// Column‑major 3×3 matrix.
///
/// - Element `(row, col)` is stored at `data[col * 3 + row]`; every consumer
///   in the workspace (covariance, Jacobi rotations, AABB transforms) uses
///   this convention.
/// - Symmetric matrices (covariance) are stored in full; no packed form.
///
/// # Examples
/// ```
/// use quarry_math::{Mat3, Vec3};
/// let m = Mat3::from_cols(Vec3::UNIT_Y, Vec3::UNIT_X, Vec3::UNIT_Z);
/// assert_eq!(m.at(1, 0), 1.0);
/// assert_eq!(m.transform(&Vec3::UNIT_X).to_array(), [0.0, 1.0, 0.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3 {
    data: [f32; 9],
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat3 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, // col 1
                0.0, 0.0, 1.0, // col 2
            ],
        }
    }

    /// Returns the zero matrix.
    pub const fn zero() -> Self {
        Self { data: [0.0; 9] }
    }

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f32; 9]) -> Self {
        Self { data }
    }

    /// Builds a matrix from its three columns.
    pub fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        let [a, b, c] = c0.to_array();
        let [d, e, f] = c1.to_array();
        let [g, h, i] = c2.to_array();
        Self::new([a, b, c, d, e, f, g, h, i])
    }

    /// Builds a symmetric matrix from its diagonal and upper-triangle terms.
    pub const fn symmetric(xx: f32, yy: f32, zz: f32, xy: f32, xz: f32, yz: f32) -> Self {
        Self {
            data: [
                xx, xy, xz, // col 0
                xy, yy, yz, // col 1
                xz, yz, zz, // col 2
            ],
        }
    }

    /// Builds a diagonal matrix.
    pub const fn from_diagonal(d: [f32; 3]) -> Self {
        Self::symmetric(d[0], d[1], d[2], 0.0, 0.0, 0.0)
    }

    /// Returns the matrix as a column‑major array.
    pub fn to_array(self) -> [f32; 9] {
        self.data
    }

    /// Element at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is greater than 2.
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.data[col * 3 + row]
    }

    /// Overwrites the element at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is greater than 2.
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[col * 3 + row] = value;
    }

    /// Returns column `col` as a vector.
    pub fn column(&self, col: usize) -> Vec3 {
        Vec3::new(self.at(0, col), self.at(1, col), self.at(2, col))
    }

    /// Returns the diagonal `(m00, m11, m22)`.
    pub fn diagonal(&self) -> Vec3 {
        Vec3::new(self.at(0, 0), self.at(1, 1), self.at(2, 2))
    }

    /// Returns the transposed matrix.
    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 9];
        for row in 0..3 {
            for col in 0..3 {
                out[row * 3 + col] = self.at(row, col);
            }
        }
        Self::new(out)
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 9];
        for row in 0..3 {
            for col in 0..3 {
                let mut sum = 0.0;
                for k in 0..3 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[col * 3 + row] = sum;
            }
        }
        Self::new(out)
    }

    /// Multiplies a column vector (`self * v`).
    pub fn transform(&self, v: &Vec3) -> Vec3 {
        let [x, y, z] = v.to_array();
        Vec3::new(
            self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z,
            self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z,
            self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z,
        )
    }

    /// Sum of squares of the six off-diagonal elements.
    pub fn off_diagonal_norm_squared(&self) -> f32 {
        let mut off = 0.0;
        for row in 0..3 {
            for col in 0..3 {
                if row != col {
                    off += self.at(row, col) * self.at(row, col);
                }
            }
        }
        off
    }
}

impl From<[f32; 9]> for Mat3 {
    fn from(value: [f32; 9]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Mul for Mat3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}
