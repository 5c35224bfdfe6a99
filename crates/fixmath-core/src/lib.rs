// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![forbid(unsafe_code)]
#![doc = r"Deterministic fixed-point math core.

This crate provides:
- A Q32.32 fixed-point scalar (`Fix64`) with round-half-to-even
  multiplication, division and square root.
- Integer-only transcendentals (`sin`, `cos`, `atan2`, …).
- Vectors (`Vec2`, `Vec3`, `Vec4`), a row-major 4×4 matrix (`Mat4`) and
  quaternions (`Quat`).
- Bounds-checked batch transforms over slices.

Design notes:
- Deterministic: no float touches a computation path, so results are
  bit-identical on every platform.
- Row-vector convention throughout: `v' = v·M`, and `a * b` applies `a`
  first.
- Failures are values (`MathError`), never saturated sentinels.
"]

#[macro_use]
mod batch;
mod error;
mod fixed_q32_32;
mod mat4;
mod quat;
mod scalar;
mod text;
mod trig;
#[macro_use]
mod vector_ops;
mod vec2;
mod vec3;
mod vec4;

pub use error::MathError;
pub use fixed_q32_32::{FRAC_BITS, ONE_RAW};
pub use mat4::Mat4;
pub use quat::Quat;
pub use scalar::Fix64;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Degeneracy threshold (≈ `1e-6`) used for singular-matrix checks, parallel
/// rays and plane tolerances.
pub const EPSILON: Fix64 = Fix64::from_raw(4295);
