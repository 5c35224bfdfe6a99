// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::debug;

use crate::{Fix64, MathError, Quat, Vec3, Vec4, EPSILON};

const Z: Fix64 = Fix64::ZERO;
const O: Fix64 = Fix64::ONE;

/// Row‑major 4×4 matrix using the row‑vector convention.
///
/// - Element `mRC` sits at `data[(R - 1) * 4 + (C - 1)]`.
/// - Points transform as `v' = v · M`; translation occupies the fourth row.
/// - `a * b` applies `a` first, then `b`.
///
/// # Examples
/// ```
/// use fixmath_core::{Mat4, Vec3};
/// let t = Mat4::translation(Vec3::from_ints(5, -3, 2));
/// let p = Vec3::from_ints(2, 4, -1);
/// assert_eq!(p.transform(&t), Vec3::from_ints(7, 1, 1));
/// ```
///
/// # Precision
/// Every cell is a [`Fix64`]; products round half to even and sums saturate,
/// so long chains of multiplies accumulate rounding but never diverge across
/// platforms.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4 {
    data: [Fix64; 16],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    /// Identity matrix.
    pub const IDENTITY: Self = Self::new([
        O, Z, Z, Z, //
        Z, O, Z, Z, //
        Z, Z, O, Z, //
        Z, Z, Z, O, //
    ]);

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix from row-major data (`m11, m12, …, m44`).
    pub const fn new(data: [Fix64; 16]) -> Self {
        Self { data }
    }

    /// Builds a matrix from its four rows.
    pub const fn from_rows(r1: Vec4, r2: Vec4, r3: Vec4, r4: Vec4) -> Self {
        Self::new([
            r1.x, r1.y, r1.z, r1.w, //
            r2.x, r2.y, r2.z, r2.w, //
            r3.x, r3.y, r3.z, r3.w, //
            r4.x, r4.y, r4.z, r4.w, //
        ])
    }

    /// Returns the matrix as a row‑major array.
    pub const fn to_array(self) -> [Fix64; 16] {
        self.data
    }

    /// Element at zero-based `row` and `col`.
    ///
    /// # Panics
    /// Panics if either index is 4 or more.
    pub fn get(&self, row: usize, col: usize) -> Fix64 {
        self.data[row * 4 + col]
    }

    /// Zero-based row `index` as a vector.
    ///
    /// # Panics
    /// Panics if `index` is 4 or more.
    pub fn row(&self, index: usize) -> Vec4 {
        Vec4::new(
            self.get(index, 0),
            self.get(index, 1),
            self.get(index, 2),
            self.get(index, 3),
        )
    }

    /// Zero-based column `index` as a vector.
    ///
    /// # Panics
    /// Panics if `index` is 4 or more.
    pub fn column(&self, index: usize) -> Vec4 {
        Vec4::new(
            self.get(0, index),
            self.get(1, index),
            self.get(2, index),
            self.get(3, index),
        )
    }

    /// Translation stored in the fourth row.
    pub fn translation_part(&self) -> Vec3 {
        self.row(3).xyz()
    }

    /// Translation by `offset`.
    pub const fn translation(offset: Vec3) -> Self {
        Self::new([
            O, Z, Z, Z, //
            Z, O, Z, Z, //
            Z, Z, O, Z, //
            offset.x, offset.y, offset.z, O, //
        ])
    }

    /// Non-uniform scale.
    pub const fn scale(factors: Vec3) -> Self {
        Self::new([
            factors.x, Z, Z, Z, //
            Z, factors.y, Z, Z, //
            Z, Z, factors.z, Z, //
            Z, Z, Z, O, //
        ])
    }

    /// Uniform scale by `factor`.
    pub const fn uniform_scale(factor: Fix64) -> Self {
        Self::scale(Vec3::splat(factor))
    }

    /// Right-handed rotation about +X by `angle` radians.
    pub fn rotation_x(angle: Fix64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            O, Z, Z, Z, //
            Z, c, s, Z, //
            Z, -s, c, Z, //
            Z, Z, Z, O, //
        ])
    }

    /// Right-handed rotation about +Y by `angle` radians.
    pub fn rotation_y(angle: Fix64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c, Z, -s, Z, //
            Z, O, Z, Z, //
            s, Z, c, Z, //
            Z, Z, Z, O, //
        ])
    }

    /// Right-handed rotation about +Z by `angle` radians.
    pub fn rotation_z(angle: Fix64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c, s, Z, Z, //
            -s, c, Z, Z, //
            Z, Z, O, Z, //
            Z, Z, Z, O, //
        ])
    }

    /// Rotation of `angle` radians about `axis` (Rodrigues' formula).
    ///
    /// The axis is normalized internally; a zero-length axis yields the
    /// identity so callers never see a degenerate basis.
    pub fn rotation_axis_angle(axis: Vec3, angle: Fix64) -> Self {
        let axis = axis.normalize();
        if axis == Vec3::ZERO {
            return Self::identity();
        }
        let Vec3 { x, y, z } = axis;
        let (sa, ca) = angle.sin_cos();
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        Self::new([
            xx + ca * (O - xx),
            xy - ca * xy + sa * z,
            xz - ca * xz - sa * y,
            Z,
            xy - ca * xy - sa * z,
            yy + ca * (O - yy),
            yz - ca * yz + sa * x,
            Z,
            xz - ca * xz + sa * y,
            yz - ca * yz - sa * x,
            zz + ca * (O - zz),
            Z,
            Z,
            Z,
            Z,
            O,
        ])
    }

    /// Rotation matrix equivalent to the quaternion `q` (assumed unit length).
    pub fn from_quat(q: &Quat) -> Self {
        let (xx, yy, zz) = (q.x * q.x, q.y * q.y, q.z * q.z);
        let (xy, zw) = (q.x * q.y, q.z * q.w);
        let (zx, yw) = (q.z * q.x, q.y * q.w);
        let (yz, xw) = (q.y * q.z, q.x * q.w);
        let two = Fix64::TWO;
        Self::new([
            O - two * (yy + zz),
            two * (xy + zw),
            two * (zx - yw),
            Z,
            two * (xy - zw),
            O - two * (zz + xx),
            two * (yz + xw),
            Z,
            two * (zx + yw),
            two * (yz - xw),
            O - two * (yy + xx),
            Z,
            Z,
            Z,
            Z,
            O,
        ])
    }

    /// Rotation from Euler angles in radians.
    ///
    /// Ordering: roll about +Z first, then pitch about +X, then yaw about +Y
    /// (`Rz · Rx · Ry` in row-vector form). Agrees with
    /// [`Quat::from_yaw_pitch_roll`] up to rounding.
    pub fn rotation_from_yaw_pitch_roll(yaw: Fix64, pitch: Fix64, roll: Fix64) -> Self {
        Self::rotation_z(roll)
            .multiply(&Self::rotation_x(pitch))
            .multiply(&Self::rotation_y(yaw))
    }

    /// Right-handed view matrix looking from `eye` toward `target`.
    ///
    /// The basis is built by Gram–Schmidt: `z = normalize(eye - target)`,
    /// `x = normalize(up × z)`, `y = z × x`.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let z = eye.sub(&target).normalize();
        let x = up.cross(&z).normalize();
        let y = z.cross(&x);
        Self::new([
            x.x, y.x, z.x, Z, //
            x.y, y.y, z.y, Z, //
            x.z, y.z, z.z, Z, //
            -x.dot(&eye), -y.dot(&eye), -z.dot(&eye), O, //
        ])
    }

    /// World matrix placing an object at `position` facing `forward`.
    ///
    /// Rows are right, up, backward (`-forward`) and the translation.
    pub fn world(position: Vec3, forward: Vec3, up: Vec3) -> Self {
        let f = forward.normalize();
        let right = f.cross(&up).normalize();
        let up = right.cross(&f).normalize();
        Self::from_rows(
            Vec4::from_vec3(right, Z),
            Vec4::from_vec3(up, Z),
            Vec4::from_vec3(f.negate(), Z),
            Vec4::from_vec3(position, O),
        )
    }

    /// Right-handed perspective projection from a vertical field of view.
    ///
    /// Depth maps `[-near, -far]` to `[0, 1]`. Fails when `tan(fov/2)`,
    /// `aspect_ratio` or `near - far` is zero.
    pub fn perspective_field_of_view(
        field_of_view: Fix64,
        aspect_ratio: Fix64,
        near: Fix64,
        far: Fix64,
    ) -> Result<Self, MathError> {
        let y_scale = O.checked_div((field_of_view * Fix64::HALF).tan()?)?;
        let x_scale = y_scale.checked_div(aspect_ratio)?;
        let depth = near - far;
        Ok(Self::new([
            x_scale, Z, Z, Z, //
            Z, y_scale, Z, Z, //
            Z, Z, far.checked_div(depth)?, -O, //
            Z, Z, (near * far).checked_div(depth)?, Z, //
        ]))
    }

    /// Perspective projection from the view volume size at the near plane.
    pub fn perspective(
        width: Fix64,
        height: Fix64,
        near: Fix64,
        far: Fix64,
    ) -> Result<Self, MathError> {
        let depth = near - far;
        let two_near = Fix64::TWO * near;
        Ok(Self::new([
            two_near.checked_div(width)?, Z, Z, Z, //
            Z, two_near.checked_div(height)?, Z, Z, //
            Z, Z, far.checked_div(depth)?, -O, //
            Z, Z, (near * far).checked_div(depth)?, Z, //
        ]))
    }

    /// Perspective projection for an off-center view volume.
    pub fn perspective_off_center(
        left: Fix64,
        right: Fix64,
        bottom: Fix64,
        top: Fix64,
        near: Fix64,
        far: Fix64,
    ) -> Result<Self, MathError> {
        let width = right - left;
        let height = top - bottom;
        let depth = near - far;
        let two_near = Fix64::TWO * near;
        Ok(Self::new([
            two_near.checked_div(width)?, Z, Z, Z, //
            Z, two_near.checked_div(height)?, Z, Z, //
            (left + right).checked_div(width)?,
            (top + bottom).checked_div(height)?,
            far.checked_div(depth)?,
            -O, //
            Z, Z, (near * far).checked_div(depth)?, Z, //
        ]))
    }

    /// Orthographic projection of a `width × height` volume centred on the
    /// view axis.
    pub fn orthographic(
        width: Fix64,
        height: Fix64,
        near: Fix64,
        far: Fix64,
    ) -> Result<Self, MathError> {
        let depth = near - far;
        Ok(Self::new([
            Fix64::TWO.checked_div(width)?, Z, Z, Z, //
            Z, Fix64::TWO.checked_div(height)?, Z, Z, //
            Z, Z, O.checked_div(depth)?, Z, //
            Z, Z, near.checked_div(depth)?, O, //
        ]))
    }

    /// Orthographic projection of an off-center volume.
    pub fn orthographic_off_center(
        left: Fix64,
        right: Fix64,
        bottom: Fix64,
        top: Fix64,
        near: Fix64,
        far: Fix64,
    ) -> Result<Self, MathError> {
        let width = right - left;
        let height = top - bottom;
        let depth = near - far;
        Ok(Self::new([
            Fix64::TWO.checked_div(width)?, Z, Z, Z, //
            Z, Fix64::TWO.checked_div(height)?, Z, Z, //
            Z, Z, O.checked_div(depth)?, Z, //
            (left + right).checked_div(left - right)?,
            (top + bottom).checked_div(bottom - top)?,
            near.checked_div(depth)?,
            O, //
        ]))
    }

    /// Matrix product `self · rhs` (apply `self`, then `rhs`).
    ///
    /// # Examples
    /// ```
    /// use fixmath_core::{Mat4, Vec3};
    /// let b = Mat4::scale(Vec3::from_ints(2, 3, 4));
    /// assert_eq!(Mat4::identity().multiply(&b), b);
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [Z; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[row * 4 + col] = (0..4)
                    .fold(Z, |sum, k| sum + self.get(row, k) * rhs.get(k, col));
            }
        }
        Self::new(out)
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(Fix64, Fix64) -> Fix64) -> Self {
        let mut out = self.data;
        for (cell, other) in out.iter_mut().zip(rhs.data) {
            *cell = f(*cell, other);
        }
        Self::new(out)
    }

    fn map(&self, f: impl Fn(Fix64) -> Fix64) -> Self {
        Self::new(self.data.map(f))
    }

    /// Element-wise sum.
    pub fn add(&self, rhs: &Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }

    /// Element-wise difference.
    pub fn sub(&self, rhs: &Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }

    /// Multiplies every element by `factor`.
    pub fn scale_by(&self, factor: Fix64) -> Self {
        self.map(|a| a * factor)
    }

    /// Negates every element.
    pub fn negate(&self) -> Self {
        self.map(|a| -a)
    }

    /// Element-wise linear interpolation; `t` is not clamped.
    pub fn lerp(&self, other: &Self, t: Fix64) -> Self {
        self.zip_with(other, |a, b| a + (b - a) * t)
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        let mut out = [Z; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[col * 4 + row] = self.get(row, col);
            }
        }
        Self::new(out)
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> Fix64 {
        let [m11, m12, m13, m14, m21, m22, m23, m24, m31, m32, m33, m34, m41, m42, m43, m44] =
            self.data;
        let a = m33 * m44 - m34 * m43;
        let b = m32 * m44 - m34 * m42;
        let c = m32 * m43 - m33 * m42;
        let d = m31 * m44 - m34 * m41;
        let e = m31 * m43 - m33 * m41;
        let f = m31 * m42 - m32 * m41;
        m11 * (m22 * a - m23 * b + m24 * c) - m12 * (m21 * a - m23 * d + m24 * e)
            + m13 * (m21 * b - m22 * d + m24 * f)
            - m14 * (m21 * c - m22 * e + m23 * f)
    }

    /// Inverse by adjugate over determinant.
    ///
    /// Fails with [`MathError::SingularMatrix`] when `|det| <= EPSILON`.
    pub fn invert(&self) -> Result<Self, MathError> {
        let [m11, m12, m13, m14, m21, m22, m23, m24, m31, m32, m33, m34, m41, m42, m43, m44] =
            self.data;

        // 2×2 minors of the bottom two rows.
        let b0 = m33 * m44 - m34 * m43;
        let b1 = m32 * m44 - m34 * m42;
        let b2 = m32 * m43 - m33 * m42;
        let b3 = m31 * m44 - m34 * m41;
        let b4 = m31 * m43 - m33 * m41;
        let b5 = m31 * m42 - m32 * m41;

        let c11 = m22 * b0 - m23 * b1 + m24 * b2;
        let c21 = -(m21 * b0 - m23 * b3 + m24 * b4);
        let c31 = m21 * b1 - m22 * b3 + m24 * b5;
        let c41 = -(m21 * b2 - m22 * b4 + m23 * b5);

        let det = m11 * c11 + m12 * c21 + m13 * c31 + m14 * c41;
        if det.abs() <= EPSILON {
            debug!(det = det.raw(), "matrix inversion rejected: singular");
            return Err(MathError::SingularMatrix);
        }

        let c12 = -(m12 * b0 - m13 * b1 + m14 * b2);
        let c22 = m11 * b0 - m13 * b3 + m14 * b4;
        let c32 = -(m11 * b1 - m12 * b3 + m14 * b5);
        let c42 = m11 * b2 - m12 * b4 + m13 * b5;

        // 2×2 minors mixing rows two and four.
        let t0 = m23 * m44 - m24 * m43;
        let t1 = m22 * m44 - m24 * m42;
        let t2 = m22 * m43 - m23 * m42;
        let t3 = m21 * m44 - m24 * m41;
        let t4 = m21 * m43 - m23 * m41;
        let t5 = m21 * m42 - m22 * m41;

        let c13 = m12 * t0 - m13 * t1 + m14 * t2;
        let c23 = -(m11 * t0 - m13 * t3 + m14 * t4);
        let c33 = m11 * t1 - m12 * t3 + m14 * t5;
        let c43 = -(m11 * t2 - m12 * t4 + m13 * t5);

        // 2×2 minors of rows two and three.
        let u0 = m23 * m34 - m24 * m33;
        let u1 = m22 * m34 - m24 * m32;
        let u2 = m22 * m33 - m23 * m32;
        let u3 = m21 * m34 - m24 * m31;
        let u4 = m21 * m33 - m23 * m31;
        let u5 = m21 * m32 - m22 * m31;

        let c14 = -(m12 * u0 - m13 * u1 + m14 * u2);
        let c24 = m11 * u0 - m13 * u3 + m14 * u4;
        let c34 = -(m11 * u1 - m12 * u3 + m14 * u5);
        let c44 = m11 * u2 - m12 * u4 + m13 * u5;

        let adjugate = [
            c11, c12, c13, c14, //
            c21, c22, c23, c24, //
            c31, c32, c33, c34, //
            c41, c42, c43, c44, //
        ];
        let mut out = [Z; 16];
        for (cell, cofactor) in out.iter_mut().zip(adjugate) {
            *cell = cofactor.checked_div(det)?;
        }
        Ok(Self::new(out))
    }

    /// Splits an affine matrix into `(scale, rotation, translation)`.
    ///
    /// Scale is the length of each basis row; a negative basis determinant is
    /// attributed to the X axis. Fails with [`MathError::DegenerateScale`]
    /// when any basis row has zero length.
    pub fn decompose(&self) -> Result<(Vec3, Quat, Vec3), MathError> {
        let translation = self.translation_part();
        let rows = [self.row(0).xyz(), self.row(1).xyz(), self.row(2).xyz()];
        let mut scale = Vec3::new(rows[0].length(), rows[1].length(), rows[2].length());
        if scale.x == Z || scale.y == Z || scale.z == Z {
            debug!(
                sx = scale.x.raw(),
                sy = scale.y.raw(),
                sz = scale.z.raw(),
                "matrix decomposition rejected: zero scale"
            );
            return Err(MathError::DegenerateScale);
        }
        if rows[0].dot(&rows[1].cross(&rows[2])) < Z {
            scale.x = -scale.x;
        }
        let basis = Self::from_rows(
            Vec4::from_vec3(rows[0].div_scalar(scale.x)?, Z),
            Vec4::from_vec3(rows[1].div_scalar(scale.y)?, Z),
            Vec4::from_vec3(rows[2].div_scalar(scale.z)?, Z),
            Vec4::UNIT_W,
        );
        Ok((scale, Quat::from_rotation_matrix(&basis), translation))
    }

    /// Transforms a point (`w = 1`). Same as [`Vec3::transform`].
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        point.transform(self)
    }

    /// Transforms a direction (`w = 0`). Same as [`Vec3::transform_normal`].
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        direction.transform_normal(self)
    }
}

impl From<[Fix64; 16]> for Mat4 {
    fn from(value: [Fix64; 16]) -> Self {
        Self::new(value)
    }
}

impl core::ops::Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl core::ops::Mul<&Self> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: &Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl core::ops::Mul<Fix64> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Fix64) -> Self::Output {
        self.scale_by(rhs)
    }
}

impl core::ops::Add for Mat4 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Mat4::add(&self, &rhs)
    }
}

impl core::ops::Sub for Mat4 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Mat4::sub(&self, &rhs)
    }
}

impl core::ops::Neg for Mat4 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl core::ops::MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl core::ops::MulAssign<&Self> for Mat4 {
    fn mul_assign(&mut self, rhs: &Self) {
        *self = self.multiply(rhs);
    }
}
