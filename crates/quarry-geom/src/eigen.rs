// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Jacobi eigen-decomposition of symmetric 3×3 matrices.
//!
//! Classical Jacobi: each sweep zeroes the largest off-diagonal element with a
//! plane rotation `J`, accumulating `V ← V·J` and `A ← Jᵀ·A·J`. Iteration is
//! bounded by a sweep cap and stops early once the off-diagonal energy stops
//! decreasing. There is no absolute convergence tolerance, so a tiny residual
//! (below the rotation threshold) may remain off the diagonal.
//!
//! The input matrix is taken by value and never written through; the
//! diagonalized matrix is part of the returned [`Eigen3`].
//!
//! Reference: Golub & Van Loan, *Matrix Computations*, §8.4.

use quarry_math::{Mat3, Vec3};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::{
    Tolerances, DEFAULT_MAX_SWEEPS, DEFAULT_MIN_SWEEPS, DEFAULT_ROTATION_THRESHOLD,
};
use crate::error::GeomError;

/// Result of a Jacobi eigen-decomposition.
///
/// Invariants (up to `f32` rounding and the residual described in the module
/// docs):
/// - `vectors` is orthonormal: `Vᵀ·V ≈ I`.
/// - `A ≈ V · diag(eigenvalues) · Vᵀ` for the input matrix `A`.
///
/// Eigenvalues are not ordered; use [`Eigen3::sorted_descending`] when the
/// principal axes are needed by magnitude.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Eigen3 {
    /// Eigenvectors as columns.
    pub vectors: Mat3,
    /// Input matrix after rotation; eigenvalues sit on its diagonal.
    pub diagonalized: Mat3,
    /// Number of sweeps run.
    pub sweeps: u32,
}

impl Eigen3 {
    /// Eigenvalues in column order of [`Eigen3::vectors`].
    pub fn eigenvalues(&self) -> [f32; 3] {
        self.diagonalized.diagonal().to_array()
    }

    /// Eigenvector for column `i`.
    ///
    /// # Panics
    /// Panics if `i > 2`.
    pub fn eigenvector(&self, i: usize) -> Vec3 {
        self.vectors.column(i)
    }

    /// Returns a copy with columns reordered by decreasing eigenvalue.
    ///
    /// Equal eigenvalues keep their original column order.
    pub fn sorted_descending(&self) -> Self {
        let values = self.eigenvalues();
        let mut order = [0usize, 1, 2];
        order.sort_by(|&i, &j| values[j].total_cmp(&values[i]));

        let vectors = Mat3::from_cols(
            self.vectors.column(order[0]),
            self.vectors.column(order[1]),
            self.vectors.column(order[2]),
        );
        let mut diagonalized = Mat3::zero();
        for (row, &src_row) in order.iter().enumerate() {
            for (col, &src_col) in order.iter().enumerate() {
                diagonalized.set(row, col, self.diagonalized.at(src_row, src_col));
            }
        }
        Self {
            vectors,
            diagonalized,
            sweeps: self.sweeps,
        }
    }

    /// Eigenvector of the largest eigenvalue (direction of greatest spread
    /// for a covariance matrix).
    pub fn principal_axis(&self) -> Vec3 {
        self.sorted_descending().vectors.column(0)
    }

    /// Rebuilds `V · diag(eigenvalues) · Vᵀ`.
    pub fn reconstruct(&self) -> Mat3 {
        let d = Mat3::from_diagonal(self.eigenvalues());
        self.vectors.multiply(&d).multiply(&self.vectors.transpose())
    }
}

/// 2×2 symmetric Schur decomposition for the `(p, q)` sub-problem of `a`.
///
/// Returns the cosine/sine pair `(c, s)` of the rotation that zeroes
/// `a[p][q]`. The tangent is taken from the root of smaller magnitude of
/// `t² + 2rt − 1 = 0`, which avoids cancellation. When `|a[p][q]|` is at most
/// `threshold` no rotation is needed and `(1, 0)` is returned.
pub fn sym_schur2(a: &Mat3, p: usize, q: usize, threshold: f32) -> (f32, f32) {
    let apq = a.at(p, q);
    if apq.abs() <= threshold {
        return (1.0, 0.0);
    }
    let r = (a.at(q, q) - a.at(p, p)) / (2.0 * apq);
    let root = (1.0 + r * r).sqrt();
    let t = if r >= 0.0 {
        1.0 / (r + root)
    } else {
        -1.0 / (-r + root)
    };
    let c = 1.0 / (1.0 + t * t).sqrt();
    (c, t * c)
}

/// Index pair of the off-diagonal element with the largest magnitude.
///
/// Scans rows then columns starting from `(0, 1)`; ties keep the element seen
/// first.
fn largest_off_diagonal(a: &Mat3) -> (usize, usize) {
    let (mut p, mut q) = (0, 1);
    for i in 0..3 {
        for j in 0..3 {
            if i != j && a.at(i, j).abs() > a.at(p, q).abs() {
                p = i;
                q = j;
            }
        }
    }
    (p, q)
}

/// Jacobi solver configuration.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JacobiSolver {
    max_sweeps: u32,
    min_sweeps: u32,
    rotation_threshold: f32,
}

impl Default for JacobiSolver {
    fn default() -> Self {
        Self {
            max_sweeps: DEFAULT_MAX_SWEEPS,
            min_sweeps: DEFAULT_MIN_SWEEPS,
            rotation_threshold: DEFAULT_ROTATION_THRESHOLD,
        }
    }
}

impl JacobiSolver {
    /// Builds a solver from validated tolerances.
    pub fn from_tolerances(tolerances: &Tolerances) -> Result<Self, GeomError> {
        tolerances.validate()?;
        Ok(Self {
            max_sweeps: tolerances.max_sweeps,
            min_sweeps: tolerances.min_sweeps,
            rotation_threshold: tolerances.rotation_threshold,
        })
    }

    /// Sweep cap.
    pub fn max_sweeps(&self) -> u32 {
        self.max_sweeps
    }

    /// Diagonalizes the symmetric matrix `a`.
    ///
    /// The caller guarantees symmetry; only the element at the selected pivot
    /// `(p, q)` is read for the rotation angle.
    pub fn solve(&self, a: Mat3) -> Eigen3 {
        let mut a = a;
        let mut v = Mat3::identity();
        // Measured from the input so the first sweep is judged against where
        // it started, not against zero.
        let mut prev_off = a.off_diagonal_norm_squared();

        for sweep in 0..self.max_sweeps {
            let (p, q) = largest_off_diagonal(&a);
            let (c, s) = sym_schur2(&a, p, q, self.rotation_threshold);

            let mut j = Mat3::identity();
            j.set(p, p, c);
            j.set(p, q, s);
            j.set(q, p, -s);
            j.set(q, q, c);

            v = v.multiply(&j);
            a = j.transpose().multiply(&a).multiply(&j);

            let off = a.off_diagonal_norm_squared();
            trace!(sweep, p, q, off, "jacobi sweep");

            if sweep >= self.min_sweeps && off >= prev_off {
                debug!(sweeps = sweep + 1, off, "jacobi stopped: off-diagonal norm stalled");
                return Eigen3 {
                    vectors: v,
                    diagonalized: a,
                    sweeps: sweep + 1,
                };
            }
            prev_off = off;
        }

        debug!(sweeps = self.max_sweeps, off = prev_off, "jacobi stopped: sweep cap reached");
        Eigen3 {
            vectors: v,
            diagonalized: a,
            sweeps: self.max_sweeps,
        }
    }
}

/// Diagonalizes `a` with the default solver settings.
pub fn jacobi(a: Mat3) -> Eigen3 {
    JacobiSolver::default().solve(a)
}
