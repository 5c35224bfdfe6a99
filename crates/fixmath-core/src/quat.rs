// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::{Fix64, Mat4, MathError, Vec3, EPSILON};

/// Quaternion stored as `(x, y, z, w)` with `w` the scalar part.
///
/// * All angles are expressed in radians.
/// * Unit length is expected for rotations but never enforced; callers
///   re-normalize after long chains of products.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    /// X component of the vector part.
    pub x: Fix64,
    /// Y component of the vector part.
    pub y: Fix64,
    /// Z component of the vector part.
    pub z: Fix64,
    /// Scalar part.
    pub w: Fix64,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    /// The identity rotation `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::new(Fix64::ZERO, Fix64::ZERO, Fix64::ZERO, Fix64::ONE);

    /// Creates a quaternion from components.
    pub const fn new(x: Fix64, y: Fix64, z: Fix64, w: Fix64) -> Self {
        Self { x, y, z, w }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns the components as `[x, y, z, w]`.
    pub const fn to_array(self) -> [Fix64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Constructs a quaternion from a rotation axis and angle in radians.
    ///
    /// The axis is normalized first; a zero-length axis yields the identity
    /// so the orientation is never undefined.
    pub fn from_axis_angle(axis: Vec3, angle: Fix64) -> Self {
        let axis = axis.normalize();
        if axis == Vec3::ZERO {
            return Self::identity();
        }
        let (sin_half, cos_half) = (angle * Fix64::HALF).sin_cos();
        let v = axis.scale(sin_half);
        Self::new(v.x, v.y, v.z, cos_half)
    }

    /// Rotation quaternion from the upper 3×3 of `matrix`.
    ///
    /// Branches on the trace, or on the largest diagonal element when the
    /// trace is not positive. A basis for which the chosen square root is zero
    /// (not a rotation) yields zero in the dependent components.
    pub fn from_rotation_matrix(matrix: &Mat4) -> Self {
        let [m11, m12, m13, _, m21, m22, m23, _, m31, m32, m33, ..] = matrix.to_array();
        let half = Fix64::HALF;
        // v / (2s), with s = 0 mapped to 0.
        let over = |v: Fix64, s: Fix64| v.checked_div(s + s).unwrap_or_default();

        let trace = m11 + m22 + m33;
        if trace > Fix64::ZERO {
            let s = (trace + Fix64::ONE).sqrt();
            Self::new(
                over(m23 - m32, s),
                over(m31 - m13, s),
                over(m12 - m21, s),
                s * half,
            )
        } else if m11 >= m22 && m11 >= m33 {
            let s = (Fix64::ONE + m11 - m22 - m33).sqrt();
            Self::new(
                s * half,
                over(m12 + m21, s),
                over(m13 + m31, s),
                over(m23 - m32, s),
            )
        } else if m22 > m33 {
            let s = (Fix64::ONE + m22 - m11 - m33).sqrt();
            Self::new(
                over(m21 + m12, s),
                s * half,
                over(m32 + m23, s),
                over(m31 - m13, s),
            )
        } else {
            let s = (Fix64::ONE + m33 - m11 - m22).sqrt();
            Self::new(
                over(m31 + m13, s),
                over(m32 + m23, s),
                s * half,
                over(m12 - m21, s),
            )
        }
    }

    /// Rotation from Euler angles: roll about +Z, then pitch about +X, then
    /// yaw about +Y. Matches [`Mat4::rotation_from_yaw_pitch_roll`].
    pub fn from_yaw_pitch_roll(yaw: Fix64, pitch: Fix64, roll: Fix64) -> Self {
        let (sr, cr) = (roll * Fix64::HALF).sin_cos();
        let (sp, cp) = (pitch * Fix64::HALF).sin_cos();
        let (sy, cy) = (yaw * Fix64::HALF).sin_cos();
        Self::new(
            cy * sp * cr + sy * cp * sr,
            sy * cp * cr - cy * sp * sr,
            cy * cp * sr - sy * sp * cr,
            cy * cp * cr + sy * sp * sr,
        )
    }

    /// Component-wise sum.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }

    /// Component-wise difference.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }

    /// Multiplies every component by `scalar`.
    pub fn scale(&self, scalar: Fix64) -> Self {
        Self::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }

    /// Negates every component (same rotation, opposite hemisphere).
    pub fn negate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> Fix64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Hamilton product `self ⊗ other`.
    ///
    /// Applied to a vector, the product rotates by `other` first and then by
    /// `self`. Use [`Quat::concatenate`] to compose in application order.
    pub fn multiply(&self, other: &Self) -> Self {
        let (ax, ay, az, aw) = (self.x, self.y, self.z, self.w);
        let (bx, by, bz, bw) = (other.x, other.y, other.z, other.w);
        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Rotation applying `first`, then `second` (`second ⊗ first`).
    ///
    /// Agrees with `Mat4::from_quat(first) * Mat4::from_quat(second)`.
    pub fn concatenate(first: &Self, second: &Self) -> Self {
        second.multiply(first)
    }

    /// Negates the vector part.
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Squared norm.
    pub fn length_squared(&self) -> Fix64 {
        self.dot(self)
    }

    /// Norm.
    pub fn length(&self) -> Fix64 {
        self.length_squared().sqrt()
    }

    /// Unit quaternion in the same direction; returns identity when the norm
    /// is at most `EPSILON`.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::identity();
        }
        let div = |c: Fix64| c.checked_div(len).unwrap_or_default();
        Self::new(div(self.x), div(self.y), div(self.z), div(self.w))
    }

    /// Multiplicative inverse `conjugate / |q|²`.
    pub fn inverse(&self) -> Result<Self, MathError> {
        let len_sq = self.length_squared();
        let c = self.conjugate();
        Ok(Self::new(
            c.x.checked_div(len_sq)?,
            c.y.checked_div(len_sq)?,
            c.z.checked_div(len_sq)?,
            c.w.checked_div(len_sq)?,
        ))
    }

    /// `self ⊗ other⁻¹`; fails when `other` is the zero quaternion.
    pub fn divide(&self, other: &Self) -> Result<Self, MathError> {
        Ok(self.multiply(&other.inverse()?))
    }

    /// Normalized linear blend along the shorter arc.
    pub fn lerp(&self, other: &Self, amount: Fix64) -> Self {
        let keep = Fix64::ONE - amount;
        let other = if self.dot(other) >= Fix64::ZERO {
            other.scale(amount)
        } else {
            other.scale(-amount)
        };
        self.scale(keep).add(&other).normalize()
    }

    /// Spherical linear interpolation along the shorter arc.
    ///
    /// Falls back to a linear blend when the inputs are within `EPSILON` of
    /// parallel, where `sin(θ)` would lose all precision.
    pub fn slerp(&self, other: &Self, amount: Fix64) -> Self {
        let mut cos_theta = self.dot(other);
        let flip = cos_theta < Fix64::ZERO;
        if flip {
            cos_theta = -cos_theta;
        }

        let (keep, take) = if cos_theta > Fix64::ONE - EPSILON {
            (Fix64::ONE - amount, amount)
        } else {
            let theta = cos_theta.acos();
            let sin_theta = theta.sin();
            let weight = |t: Fix64| (t * theta).sin().checked_div(sin_theta);
            match (weight(Fix64::ONE - amount), weight(amount)) {
                (Ok(keep), Ok(take)) => (keep, take),
                _ => (Fix64::ONE - amount, amount),
            }
        };
        let take = if flip { -take } else { take };
        self.scale(keep).add(&other.scale(take))
    }

    /// Rotation matrix for this quaternion.
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_quat(self)
    }

    /// Rotates `v` by this quaternion. Same as [`Vec3::transform_quat`].
    pub fn rotate(&self, v: &Vec3) -> Vec3 {
        v.transform_quat(self)
    }
}

/// Converts a 4‑element `[Fix64; 4]` array `(x, y, z, w)` into a `Quat`.
impl From<[Fix64; 4]> for Quat {
    fn from(value: [Fix64; 4]) -> Self {
        let [x, y, z, w] = value;
        Self::new(x, y, z, w)
    }
}

impl core::ops::Add for Quat {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Quat::add(&self, &rhs)
    }
}

impl core::ops::Sub for Quat {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Quat::sub(&self, &rhs)
    }
}

impl core::ops::Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl core::ops::Mul<Fix64> for Quat {
    type Output = Self;
    fn mul(self, rhs: Fix64) -> Self {
        self.scale(rhs)
    }
}

impl core::ops::Neg for Quat {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl core::ops::MulAssign for Quat {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}
