// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Component-wise algebra shared by `Vec2`, `Vec3` and `Vec4`.
//!
//! Each vector type invokes [`impl_vector!`] with its dimension and field
//! list; anything specific to a dimension (cross products, transforms) lives
//! next to the struct definition instead.

macro_rules! impl_vector {
    ($name:ident, $dim:literal, $($field:ident),+) => {
        impl $name {
            /// Creates a vector from components.
            pub const fn new($($field: Fix64),+) -> Self {
                Self { $($field),+ }
            }

            /// Vector with every component set to `value`.
            pub const fn splat(value: Fix64) -> Self {
                Self { $($field: value),+ }
            }

            /// Returns the components as an array.
            pub const fn to_array(self) -> [Fix64; $dim] {
                [$(self.$field),+]
            }

            /// Component-wise sum.
            pub fn add(&self, other: &Self) -> Self {
                Self { $($field: self.$field + other.$field),+ }
            }

            /// Component-wise difference.
            pub fn sub(&self, other: &Self) -> Self {
                Self { $($field: self.$field - other.$field),+ }
            }

            /// Component-wise product.
            pub fn mul(&self, other: &Self) -> Self {
                Self { $($field: self.$field * other.$field),+ }
            }

            /// Component-wise quotient; fails if any component of `other` is zero.
            pub fn divide(&self, other: &Self) -> Result<Self, MathError> {
                Ok(Self { $($field: self.$field.checked_div(other.$field)?),+ })
            }

            /// Multiplies every component by `scalar`.
            pub fn scale(&self, scalar: Fix64) -> Self {
                Self { $($field: self.$field * scalar),+ }
            }

            /// Divides every component by `scalar`; fails when `scalar` is zero.
            pub fn div_scalar(&self, scalar: Fix64) -> Result<Self, MathError> {
                if scalar == Fix64::ZERO {
                    return Err(MathError::DivideByZero);
                }
                Ok(Self { $($field: self.$field.checked_div(scalar)?),+ })
            }

            /// Flips the sign of every component.
            pub fn negate(&self) -> Self {
                Self { $($field: -self.$field),+ }
            }

            /// Dot product, accumulated in field order.
            pub fn dot(&self, other: &Self) -> Fix64 {
                Fix64::ZERO $(+ self.$field * other.$field)+
            }

            /// Squared magnitude of the vector. Saturates at [`Fix64::MAX`]
            /// once a component passes about 46341.
            pub fn length_squared(&self) -> Fix64 {
                self.dot(self)
            }

            /// Vector length (magnitude).
            ///
            /// When the squared length saturates (components past about
            /// 46341), the vector is divided by its largest magnitude first
            /// and the result scaled back, so long vectors still measure
            /// correctly up to the `Fix64` range.
            pub fn length(&self) -> Fix64 {
                let sq = self.length_squared();
                if sq < Fix64::MAX {
                    return sq.sqrt();
                }
                let largest = Fix64::ZERO $(.max(self.$field.abs()))+;
                match self.div_scalar(largest) {
                    Ok(unit_box) => unit_box.length_squared().sqrt() * largest,
                    Err(_) => Fix64::ZERO,
                }
            }

            /// Squared distance to `other`.
            pub fn distance_squared(&self, other: &Self) -> Fix64 {
                self.sub(other).length_squared()
            }

            /// Distance to `other`.
            pub fn distance(&self, other: &Self) -> Fix64 {
                self.sub(other).length()
            }

            /// Unit vector in the same direction; the zero vector maps to itself.
            ///
            /// Components are first divided by the largest magnitude so the
            /// intermediate squared length cannot saturate.
            pub fn normalize(&self) -> Self {
                let largest = Fix64::ZERO $(.max(self.$field.abs()))+;
                let Ok(unit_box) = self.div_scalar(largest) else {
                    return Self::ZERO;
                };
                let len = unit_box.length();
                unit_box.div_scalar(len).unwrap_or(Self::ZERO)
            }

            /// Normalizes in place. See [`Self::normalize`].
            pub fn normalize_mut(&mut self) {
                *self = self.normalize();
            }

            /// Component-wise minimum.
            pub fn min(&self, other: &Self) -> Self {
                Self { $($field: self.$field.min(other.$field)),+ }
            }

            /// Component-wise maximum.
            pub fn max(&self, other: &Self) -> Self {
                Self { $($field: self.$field.max(other.$field)),+ }
            }

            /// Restricts each component to `[min, max]`.
            pub fn clamp(&self, min: &Self, max: &Self) -> Self {
                Self { $($field: self.$field.clamp(min.$field, max.$field)),+ }
            }

            /// Component-wise absolute value.
            pub fn abs(&self) -> Self {
                Self { $($field: self.$field.abs()),+ }
            }

            /// Component-wise floor.
            pub fn floor(&self) -> Self {
                Self { $($field: self.$field.floor()),+ }
            }

            /// Component-wise ceiling.
            pub fn ceiling(&self) -> Self {
                Self { $($field: self.$field.ceil()),+ }
            }

            /// Component-wise rounding, ties to even.
            pub fn round(&self) -> Self {
                Self { $($field: self.$field.round()),+ }
            }

            /// `self + (other - self) * t`; `t` is not clamped.
            pub fn lerp(&self, other: &Self, t: Fix64) -> Self {
                self.add(&other.sub(self).scale(t))
            }

            /// Cubic ease between `self` and `other`; `t` is clamped to `[0, 1]`.
            pub fn smooth_step(&self, other: &Self, t: Fix64) -> Self {
                let t = t.clamp(Fix64::ZERO, Fix64::ONE);
                let t = t * t * (Fix64::from_int(3) - Fix64::TWO * t);
                self.lerp(other, t)
            }

            /// Point `v1 + (v2 - v1)·amount1 + (v3 - v1)·amount2`.
            pub fn barycentric(
                v1: &Self,
                v2: &Self,
                v3: &Self,
                amount1: Fix64,
                amount2: Fix64,
            ) -> Self {
                v1.add(&v2.sub(v1).scale(amount1))
                    .add(&v3.sub(v1).scale(amount2))
            }

            /// Cubic Hermite spline from `v1` (tangent `t1`) to `v2` (tangent `t2`).
            pub fn hermite(v1: &Self, t1: &Self, v2: &Self, t2: &Self, amount: Fix64) -> Self {
                let s2 = amount * amount;
                let s3 = s2 * amount;
                let three = Fix64::from_int(3);
                let h1 = Fix64::TWO * s3 - three * s2 + Fix64::ONE;
                let h2 = three * s2 - Fix64::TWO * s3;
                let h3 = s3 - Fix64::TWO * s2 + amount;
                let h4 = s3 - s2;
                v1.scale(h1)
                    .add(&v2.scale(h2))
                    .add(&t1.scale(h3))
                    .add(&t2.scale(h4))
            }

            /// Catmull-Rom spline through `v2` and `v3`, shaped by `v1` and `v4`.
            pub fn catmull_rom(v1: &Self, v2: &Self, v3: &Self, v4: &Self, amount: Fix64) -> Self {
                let t1 = v3.sub(v1).scale(Fix64::HALF);
                let t2 = v4.sub(v2).scale(Fix64::HALF);
                Self::hermite(v2, &t1, v3, &t2, amount)
            }

            /// Builds a vector from decimal literals, one per component.
            pub fn from_literals(literals: &[&str]) -> Result<Self, MathError> {
                crate::text::parse_components::<$dim>(literals).map(Self::from)
            }

            /// Parses `separator`-delimited decimal literals.
            pub fn parse(text: &str, separator: &str) -> Result<Self, MathError> {
                let literals: Vec<&str> = text.split(separator).collect();
                Self::from_literals(&literals)
            }

            /// Formats the components as exact decimals joined by `separator`.
            ///
            /// The output parses back to the identical vector with
            /// [`Self::parse`].
            pub fn format(&self, separator: &str) -> String {
                crate::text::format_components(&self.to_array(), separator)
            }
        }

        impl From<[Fix64; $dim]> for $name {
            fn from(value: [Fix64; $dim]) -> Self {
                let [$($field),+] = value;
                Self { $($field),+ }
            }
        }

        impl From<$name> for [Fix64; $dim] {
            fn from(value: $name) -> Self {
                value.to_array()
            }
        }

        impl core::ops::Add for $name {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                $name::add(&self, &rhs)
            }
        }

        impl core::ops::Sub for $name {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                $name::sub(&self, &rhs)
            }
        }

        impl core::ops::Mul for $name {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                $name::mul(&self, &rhs)
            }
        }

        impl core::ops::Mul<Fix64> for $name {
            type Output = Self;
            fn mul(self, rhs: Fix64) -> Self {
                self.scale(rhs)
            }
        }

        impl core::ops::Mul<$name> for Fix64 {
            type Output = $name;
            fn mul(self, rhs: $name) -> $name {
                rhs.scale(self)
            }
        }

        impl core::ops::Div<Fix64> for $name {
            type Output = Self;

            /// # Panics
            /// Panics when `rhs` is zero, like [`Fix64`] division.
            fn div(self, rhs: Fix64) -> Self {
                Self { $($field: self.$field / rhs),+ }
            }
        }

        impl core::ops::Neg for $name {
            type Output = Self;
            fn neg(self) -> Self {
                self.negate()
            }
        }

        impl core::ops::AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                *self = $name::add(self, &rhs);
            }
        }

        impl core::ops::SubAssign for $name {
            fn sub_assign(&mut self, rhs: Self) {
                *self = $name::sub(self, &rhs);
            }
        }

        impl core::ops::MulAssign<Fix64> for $name {
            fn mul_assign(&mut self, rhs: Fix64) {
                *self = self.scale(rhs);
            }
        }

        impl core::ops::DivAssign<Fix64> for $name {
            fn div_assign(&mut self, rhs: Fix64) {
                *self = *self / rhs;
            }
        }
    };
}
