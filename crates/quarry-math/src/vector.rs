// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::{Vec2, Vec3};

/// Arithmetic shared by [`Vec2`] and [`Vec3`].
///
/// Queries that only need projections (segment clamping, extreme-point scans)
/// are written once against this trait and work in both dimensions.
pub trait Vector: Copy + core::fmt::Debug + PartialEq + Send + Sync + 'static {
    /// The zero vector.
    const ZERO: Self;

    /// Number of components.
    const DIM: usize;

    /// Component on axis `idx`, `idx < DIM`.
    fn component(&self, idx: usize) -> f32;

    /// Adds two vectors.
    fn add(&self, other: &Self) -> Self;

    /// Subtracts another vector.
    fn sub(&self, other: &Self) -> Self;

    /// Scales the vector by a scalar.
    fn scale(&self, scalar: f32) -> Self;

    /// Dot product with another vector.
    fn dot(&self, other: &Self) -> f32;

    /// Squared magnitude of the vector.
    fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Returns `self + other * scalar`.
    fn add_scaled(&self, scalar: f32, other: &Self) -> Self {
        self.add(&other.scale(scalar))
    }
}

impl Vector for Vec2 {
    const ZERO: Self = Self::ZERO;
    const DIM: usize = 2;

    fn component(&self, idx: usize) -> f32 {
        Self::component(self, idx)
    }

    fn add(&self, other: &Self) -> Self {
        Self::add(self, other)
    }

    fn sub(&self, other: &Self) -> Self {
        Self::sub(self, other)
    }

    fn scale(&self, scalar: f32) -> Self {
        Self::scale(self, scalar)
    }

    fn dot(&self, other: &Self) -> f32 {
        Self::dot(self, other)
    }
}

impl Vector for Vec3 {
    const ZERO: Self = Self::ZERO;
    const DIM: usize = 3;

    fn component(&self, idx: usize) -> f32 {
        Self::component(self, idx)
    }

    fn add(&self, other: &Self) -> Self {
        Self::add(self, other)
    }

    fn sub(&self, other: &Self) -> Self {
        Self::sub(self, other)
    }

    fn scale(&self, scalar: f32) -> Self {
        Self::scale(self, scalar)
    }

    fn dot(&self, other: &Self) -> f32 {
        Self::dot(self, other)
    }
}
