// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Math foundation for Quarry's geometry queries.

This crate provides:
- `Vec2` / `Vec3` value vectors addressable by axis index.
- `Mat3`, a column-major 3×3 matrix used for covariance and eigen work.
- `Mat2x3`, a column-major 2D affine transform.
- The `Vector` trait, the arithmetic surface shared by 2D and 3D queries.

All arithmetic is `f32`; no fused multiply-add is used so results stay
identical across targets.
"]

mod mat2x3;
mod mat3;
mod vec2;
mod vec3;
mod vector;

pub use mat2x3::Mat2x3;
pub use mat3::Mat3;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vector::Vector;

/// Global epsilon used by math routines when detecting degenerate values.
pub const EPSILON: f32 = 1e-6;

/// Clamps `value` to the inclusive `[min, max]` range using float32 rounding.
///
/// Never panics. A NaN in any argument yields NaN, so degenerate bounds (a
/// NaN-centred box, say) surface to the caller as a non-finite result. An
/// inverted range (`min > max`) resolves to `max`.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() || min.is_nan() || max.is_nan() {
        return f32::NAN;
    }
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn clamp_limits_both_sides() {
        assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
        assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
    }

    #[test]
    fn clamp_propagates_nan_and_tolerates_inverted_ranges() {
        assert!(clamp(0.5, f32::NAN, f32::NAN).is_nan());
        assert!(clamp(f32::NAN, 0.0, 1.0).is_nan());
        assert!(clamp(0.5, 0.0, f32::NAN).is_nan());
        assert_eq!(clamp(0.5, 1.0, -1.0), -1.0);
    }
}
