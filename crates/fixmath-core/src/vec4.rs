// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::vec3::QuatTerms;
use crate::{Fix64, Mat4, MathError, Quat, Vec2, Vec3};

/// Deterministic 4D vector, also used for homogeneous coordinates and plane
/// coefficients.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec4 {
    /// X component.
    pub x: Fix64,
    /// Y component.
    pub y: Fix64,
    /// Z component.
    pub z: Fix64,
    /// W component.
    pub w: Fix64,
}

impl_vector!(Vec4, 4, x, y, z, w);
impl_batch_transforms!(Vec4);

impl Vec4 {
    /// `(0, 0, 0, 0)`.
    pub const ZERO: Self = Self::splat(Fix64::ZERO);
    /// `(1, 1, 1, 1)`.
    pub const ONE: Self = Self::splat(Fix64::ONE);
    /// `(1, 0, 0, 0)`.
    pub const UNIT_X: Self = Self::new(Fix64::ONE, Fix64::ZERO, Fix64::ZERO, Fix64::ZERO);
    /// `(0, 1, 0, 0)`.
    pub const UNIT_Y: Self = Self::new(Fix64::ZERO, Fix64::ONE, Fix64::ZERO, Fix64::ZERO);
    /// `(0, 0, 1, 0)`.
    pub const UNIT_Z: Self = Self::new(Fix64::ZERO, Fix64::ZERO, Fix64::ONE, Fix64::ZERO);
    /// `(0, 0, 0, 1)`.
    pub const UNIT_W: Self = Self::new(Fix64::ZERO, Fix64::ZERO, Fix64::ZERO, Fix64::ONE);

    /// Extends a 3D vector with `w`.
    pub const fn from_vec3(v: Vec3, w: Fix64) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Extends a 2D vector with `z` and `w`.
    pub const fn from_vec2(v: Vec2, z: Fix64, w: Fix64) -> Self {
        Self::new(v.x, v.y, z, w)
    }

    /// The `(x, y, z)` part.
    pub const fn xyz(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Full homogeneous transform `self · matrix`.
    pub fn transform(&self, matrix: &Mat4) -> Self {
        let [m11, m12, m13, m14, m21, m22, m23, m24, m31, m32, m33, m34, m41, m42, m43, m44] =
            matrix.to_array();
        Self::new(
            self.x * m11 + self.y * m21 + self.z * m31 + self.w * m41,
            self.x * m12 + self.y * m22 + self.z * m32 + self.w * m42,
            self.x * m13 + self.y * m23 + self.z * m33 + self.w * m43,
            self.x * m14 + self.y * m24 + self.z * m34 + self.w * m44,
        )
    }

    /// Rotates the `(x, y, z)` part by `rotation`; `w` is unchanged.
    pub fn transform_quat(&self, rotation: &Quat) -> Self {
        Self::from_vec3(self.xyz().transform_quat(rotation), self.w)
    }
}
