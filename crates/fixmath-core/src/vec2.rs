// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::vec3::QuatTerms;
use crate::{Fix64, Mat4, MathError, Quat};

/// Deterministic 2D vector. Transforms treat it as `(x, y, 0, 1)`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    /// X component.
    pub x: Fix64,
    /// Y component.
    pub y: Fix64,
}

impl_vector!(Vec2, 2, x, y);
impl_batch_transforms!(Vec2);
impl_batch_normal_transforms!(Vec2);

impl Vec2 {
    /// `(0, 0)`.
    pub const ZERO: Self = Self::splat(Fix64::ZERO);
    /// `(1, 1)`.
    pub const ONE: Self = Self::splat(Fix64::ONE);
    /// `(1, 0)`.
    pub const UNIT_X: Self = Self::new(Fix64::ONE, Fix64::ZERO);
    /// `(0, 1)`.
    pub const UNIT_Y: Self = Self::new(Fix64::ZERO, Fix64::ONE);

    /// Vector from integer components.
    pub const fn from_ints(x: i32, y: i32) -> Self {
        Self::new(Fix64::from_int(x), Fix64::from_int(y))
    }

    /// Reflects `self` off a line with unit `normal`.
    pub fn reflect(&self, normal: &Self) -> Self {
        self.sub(&normal.scale(Fix64::TWO * self.dot(normal)))
    }

    /// Transforms a point, including the translation row.
    pub fn transform(&self, matrix: &Mat4) -> Self {
        let [m11, m12, _, _, m21, m22, _, _, _, _, _, _, m41, m42, _, _] = matrix.to_array();
        Self::new(
            self.x * m11 + self.y * m21 + m41,
            self.x * m12 + self.y * m22 + m42,
        )
    }

    /// Transforms a direction; translation is ignored.
    pub fn transform_normal(&self, matrix: &Mat4) -> Self {
        let [m11, m12, _, _, m21, m22, ..] = matrix.to_array();
        Self::new(self.x * m11 + self.y * m21, self.x * m12 + self.y * m22)
    }

    /// Rotates `(x, y, 0)` by `rotation` and keeps the XY plane result.
    pub fn transform_quat(&self, rotation: &Quat) -> Self {
        let r = QuatTerms::new(rotation);
        Self::new(
            self.x * (Fix64::ONE - r.yy - r.zz) + self.y * (r.xy - r.wz),
            self.x * (r.xy + r.wz) + self.y * (Fix64::ONE - r.xx - r.zz),
        )
    }
}
