// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Geometric queries for collision detection and spatial reasoning.

This crate provides:
- Closest-point and squared-distance queries on segments, rectangles,
  triangles and tetrahedra (`closest`).
- Center/half-extent bounding boxes with overlap tests and affine transforms
  (`Aabb2`, `Aabb3`).
- Point-set statistics and Jacobi eigen-decomposition of symmetric 3×3
  matrices (`stats`, `JacobiSolver`).
- Extreme-point scans, convexity tests and minimum-area rectangles
  (`extreme`).
- Barycentric coordinates and triangle measurements.

Design notes:
- Every query is a pure function of its inputs; nothing is written through
  references.
- Degenerate input yields a defined feature, `None`, or a non-finite value.
  Only configuration and empty point sets produce a `GeomError`.
- Float32 throughout; tolerances are gathered in `Tolerances`.
"]

pub mod barycentric;
pub mod closest;
pub mod config;
pub mod eigen;
pub mod error;
pub mod extreme;
pub mod metrics;
pub mod stats;
pub mod types;

pub use config::Tolerances;
pub use eigen::{jacobi, Eigen3, JacobiSolver};
pub use error::GeomError;
pub use types::aabb::{Aabb2, Aabb3};
pub use types::shapes::{Rect3, Segment, Segment2, Segment3, Tetrahedron, Triangle};
