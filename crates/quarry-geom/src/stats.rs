// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Point-set statistics: centroids, variance and covariance.
//!
//! All moments are normalised by `1/n`. The unchecked functions perform no
//! emptiness check; an empty slice divides by zero and yields NaN. Use
//! [`try_covariance3`] or [`principal_axes`] when the input may be empty.

use quarry_math::{Mat3, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::eigen::{Eigen3, JacobiSolver};
use crate::error::GeomError;

/// `1/n` for a slice length.
#[allow(clippy::cast_precision_loss)]
fn inv_len(len: usize) -> f32 {
    1.0 / len as f32
}

/// Arithmetic mean of `points`.
pub fn centroid3(points: &[Vec3]) -> Vec3 {
    points
        .iter()
        .fold(Vec3::ZERO, |acc, p| acc.add(p))
        .scale(inv_len(points.len()))
}

/// Arithmetic mean of planar `points`.
pub fn centroid2(points: &[Vec2]) -> Vec2 {
    points
        .iter()
        .fold(Vec2::ZERO, |acc, p| acc.add(p))
        .scale(inv_len(points.len()))
}

/// Population variance of `values`.
pub fn variance(values: &[f32]) -> f32 {
    let oon = inv_len(values.len());
    let mean = values.iter().sum::<f32>() * oon;
    values.iter().map(|x| (x - mean) * (x - mean)).sum::<f32>() * oon
}

/// Covariance matrix (second central moment about the centroid) of `points`.
///
/// The result is symmetric by construction.
pub fn covariance3(points: &[Vec3]) -> Mat3 {
    let oon = inv_len(points.len());
    let c = centroid3(points);

    let (mut e00, mut e11, mut e22) = (0.0, 0.0, 0.0);
    let (mut e01, mut e02, mut e12) = (0.0, 0.0, 0.0);
    for point in points {
        let [x, y, z] = point.sub(&c).to_array();
        e00 += x * x;
        e11 += y * y;
        e22 += z * z;
        e01 += x * y;
        e02 += x * z;
        e12 += y * z;
    }

    Mat3::symmetric(
        e00 * oon,
        e11 * oon,
        e22 * oon,
        e01 * oon,
        e02 * oon,
        e12 * oon,
    )
}

/// Like [`covariance3`], but rejects an empty point set.
pub fn try_covariance3(points: &[Vec3]) -> Result<Mat3, GeomError> {
    if points.is_empty() {
        return Err(GeomError::EmptyPointSet);
    }
    Ok(covariance3(points))
}

/// Planar covariance: the three unique terms of a symmetric 2×2 matrix.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Covariance2 {
    /// Variance along x.
    pub xx: f32,
    /// Variance along y.
    pub yy: f32,
    /// Covariance of x and y.
    pub xy: f32,
}

/// Covariance of the xy-coordinates of `points`.
pub fn covariance2(points: &[Vec2]) -> Covariance2 {
    let oon = inv_len(points.len());
    let c = centroid2(points);
    let (mut xx, mut yy, mut xy) = (0.0, 0.0, 0.0);
    for point in points {
        let [x, y] = point.sub(&c).to_array();
        xx += x * x;
        yy += y * y;
        xy += x * y;
    }
    Covariance2 {
        xx: xx * oon,
        yy: yy * oon,
        xy: xy * oon,
    }
}

/// Principal axes of `points`: covariance, Jacobi, then descending sort.
///
/// Returns `None` for an empty point set. Column 0 of the result's
/// `vectors` is the direction of greatest spread.
pub fn principal_axes(points: &[Vec3], solver: &JacobiSolver) -> Option<Eigen3> {
    let cov = try_covariance3(points).ok()?;
    Some(solver.solve(cov).sorted_descending())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn centroid_is_the_mean() {
        let pts = [Vec3::new(1.0, 2.0, 3.0), Vec3::new(3.0, 2.0, 1.0)];
        assert_eq!(centroid3(&pts).to_array(), [2.0, 2.0, 2.0]);
        let flat = [Vec2::new(0.0, 0.0), Vec2::new(4.0, 2.0)];
        assert_eq!(centroid2(&flat).to_array(), [2.0, 1.0]);
    }

    #[test]
    fn variance_of_constant_is_zero() {
        assert_eq!(variance(&[2.0, 2.0, 2.0]), 0.0);
        assert_eq!(variance(&[1.0, 3.0]), 1.0);
    }

    #[test]
    fn covariance_of_diagonal_line() {
        let pts = [
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
        ];
        let cov = covariance3(&pts);
        let two_thirds = 2.0 / 3.0;
        assert_eq!(cov.at(0, 0), two_thirds);
        assert_eq!(cov.at(1, 1), two_thirds);
        assert_eq!(cov.at(0, 1), two_thirds);
        assert_eq!(cov.at(1, 0), two_thirds);
        assert_eq!(cov.at(2, 2), 0.0);
        assert_eq!(cov, cov.transpose());
    }

    #[test]
    fn covariance2_matches_3d_terms() {
        let flat = [Vec2::new(-1.0, 2.0), Vec2::new(1.0, -2.0), Vec2::new(0.0, 0.0)];
        let c = covariance2(&flat);
        assert_eq!(c.xx, 2.0 / 3.0);
        assert_eq!(c.yy, 8.0 / 3.0);
        assert_eq!(c.xy, -4.0 / 3.0);
    }

    #[test]
    fn empty_sets_are_reported_or_nan() {
        assert!(matches!(try_covariance3(&[]), Err(GeomError::EmptyPointSet)));
        assert!(principal_axes(&[], &JacobiSolver::default()).is_none());
        assert!(centroid3(&[]).x().is_nan());
    }
}
