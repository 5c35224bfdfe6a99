// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::{Fix64, Mat4, MathError, Quat};

/// Deterministic 3D vector.
///
/// * Components may represent either points or directions depending on the
///   calling context.
/// * Use [`Vec3::transform`] for points (translation row applied) and
///   [`Vec3::transform_normal`] for directions (translation ignored).
/// * Every operation is integer arithmetic on [`Fix64`], so results are
///   bit-identical everywhere.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    /// X component.
    pub x: Fix64,
    /// Y component.
    pub y: Fix64,
    /// Z component.
    pub z: Fix64,
}

impl_vector!(Vec3, 3, x, y, z);
impl_batch_transforms!(Vec3);
impl_batch_normal_transforms!(Vec3);

impl Vec3 {
    /// `(0, 0, 0)`.
    pub const ZERO: Self = Self::splat(Fix64::ZERO);
    /// `(1, 1, 1)`.
    pub const ONE: Self = Self::splat(Fix64::ONE);
    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(Fix64::ONE, Fix64::ZERO, Fix64::ZERO);
    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(Fix64::ZERO, Fix64::ONE, Fix64::ZERO);
    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(Fix64::ZERO, Fix64::ZERO, Fix64::ONE);

    /// Vector from integer components.
    pub const fn from_ints(x: i32, y: i32, z: i32) -> Self {
        Self::new(Fix64::from_int(x), Fix64::from_int(y), Fix64::from_int(z))
    }

    /// Right-handed cross product.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Reflects `self` off a surface with unit `normal`.
    pub fn reflect(&self, normal: &Self) -> Self {
        self.sub(&normal.scale(Fix64::TWO * self.dot(normal)))
    }

    /// Transforms a point: `(x, y, z, 1) · matrix`, dropping `w`.
    pub fn transform(&self, matrix: &Mat4) -> Self {
        let [m11, m12, m13, _, m21, m22, m23, _, m31, m32, m33, _, m41, m42, m43, _] =
            matrix.to_array();
        Self::new(
            self.x * m11 + self.y * m21 + self.z * m31 + m41,
            self.x * m12 + self.y * m22 + self.z * m32 + m42,
            self.x * m13 + self.y * m23 + self.z * m33 + m43,
        )
    }

    /// Transforms a direction: `(x, y, z, 0) · matrix`, so translation is
    /// ignored.
    pub fn transform_normal(&self, matrix: &Mat4) -> Self {
        let [m11, m12, m13, _, m21, m22, m23, _, m31, m32, m33, _, ..] = matrix.to_array();
        Self::new(
            self.x * m11 + self.y * m21 + self.z * m31,
            self.x * m12 + self.y * m22 + self.z * m32,
            self.x * m13 + self.y * m23 + self.z * m33,
        )
    }

    /// Rotates by `rotation` (`q · v · q⁻¹`, expanded for a unit quaternion).
    pub fn transform_quat(&self, rotation: &Quat) -> Self {
        let r = QuatTerms::new(rotation);
        Self::new(
            self.x * (Fix64::ONE - r.yy - r.zz) + self.y * (r.xy - r.wz) + self.z * (r.xz + r.wy),
            self.x * (r.xy + r.wz) + self.y * (Fix64::ONE - r.xx - r.zz) + self.z * (r.yz - r.wx),
            self.x * (r.xz - r.wy) + self.y * (r.yz + r.wx) + self.z * (Fix64::ONE - r.xx - r.yy),
        )
    }
}

/// Doubled quaternion products shared by the vector rotation formulas.
pub(crate) struct QuatTerms {
    pub(crate) wx: Fix64,
    pub(crate) wy: Fix64,
    pub(crate) wz: Fix64,
    pub(crate) xx: Fix64,
    pub(crate) xy: Fix64,
    pub(crate) xz: Fix64,
    pub(crate) yy: Fix64,
    pub(crate) yz: Fix64,
    pub(crate) zz: Fix64,
}

impl QuatTerms {
    pub(crate) fn new(q: &Quat) -> Self {
        let x2 = q.x + q.x;
        let y2 = q.y + q.y;
        let z2 = q.z + q.z;
        Self {
            wx: q.w * x2,
            wy: q.w * y2,
            wz: q.w * z2,
            xx: q.x * x2,
            xy: q.x * y2,
            xz: q.x * z2,
            yy: q.y * y2,
            yz: q.y * z2,
            zz: q.z * z2,
        }
    }
}
