// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shape value types consumed by the queries.
//!
//! Conventions:
//! - Bounding boxes are stored as center plus half-extents; overlap is
//!   inclusive on faces so touching boxes pair up.
//! - Transformed boxes are returned as new values; inputs are never
//!   written through.
//! - Shapes are plain `Copy` data with public fields; their methods forward
//!   to the free functions in [`crate::closest`].

#[doc = "Center/half-extent bounding boxes in 2D and 3D."]
pub mod aabb;
#[doc = "Segments, triangles, tetrahedra and rectangles."]
pub mod shapes;
