// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Numeric tolerances shared by the queries and the eigen solver.
//!
//! Tolerances are plain data: they serialize to JSON so host applications can
//! store them next to the rest of their settings. Missing fields fall back to
//! the defaults below.

use serde::{Deserialize, Serialize};

use crate::error::GeomError;

/// Squared-length threshold under which a segment is treated as a point.
pub const DEFAULT_SEGMENT_DEGENERACY: f32 = 1e-6;
/// Off-diagonal magnitude under which the Jacobi solver skips a rotation.
pub const DEFAULT_ROTATION_THRESHOLD: f32 = 1e-4;
/// Jacobi sweep cap.
pub const DEFAULT_MAX_SWEEPS: u32 = 50;
/// Sweeps that run before the Jacobi monotonicity stop is armed.
pub const DEFAULT_MIN_SWEEPS: u32 = 3;

/// Numeric configuration for degeneracy checks and the Jacobi solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    /// Squared segment length at or below which a segment is degenerate.
    pub segment_degeneracy: f32,
    /// Minimum `|a_pq|` for which a Jacobi rotation is computed.
    pub rotation_threshold: f32,
    /// Maximum number of Jacobi sweeps.
    pub max_sweeps: u32,
    /// Sweep index from which a non-decreasing off-norm stops the solver.
    pub min_sweeps: u32,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            segment_degeneracy: DEFAULT_SEGMENT_DEGENERACY,
            rotation_threshold: DEFAULT_ROTATION_THRESHOLD,
            max_sweeps: DEFAULT_MAX_SWEEPS,
            min_sweeps: DEFAULT_MIN_SWEEPS,
        }
    }
}

impl Tolerances {
    /// Parses tolerances from JSON and validates them.
    pub fn from_json(bytes: &[u8]) -> Result<Self, GeomError> {
        let tolerances: Self = serde_json::from_slice(bytes)?;
        tolerances.validate()?;
        Ok(tolerances)
    }

    /// Serializes tolerances as pretty-printed JSON.
    pub fn to_json(&self) -> Result<Vec<u8>, GeomError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Rejects negative or non-finite thresholds and a zero sweep cap.
    pub fn validate(&self) -> Result<(), GeomError> {
        check_threshold("segment_degeneracy", self.segment_degeneracy)?;
        check_threshold("rotation_threshold", self.rotation_threshold)?;
        if self.max_sweeps == 0 {
            return Err(GeomError::InvalidTolerance {
                name: "max_sweeps",
                value: self.max_sweeps.to_string(),
            });
        }
        Ok(())
    }
}

fn check_threshold(name: &'static str, value: f32) -> Result<(), GeomError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GeomError::InvalidTolerance {
            name,
            value: value.to_string(),
        })
    }
}
