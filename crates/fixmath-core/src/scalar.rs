// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Deterministic Q32.32 fixed-point scalar.
//!
//! Determinism contract:
//! - All arithmetic is performed in integer space; no float ever touches a
//!   computation path.
//! - Multiplication, division and square root round to nearest with
//!   ties-to-even.
//! - Addition, subtraction, negation and multiplication saturate at
//!   [`Fix64::MIN`]/[`Fix64::MAX`] on overflow.
//! - Division by zero is an error ([`MathError::DivideByZero`]), never a
//!   saturated value.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

use crate::fixed_q32_32::{self as raw, FRAC_MASK, ONE_RAW};
use crate::trig;
use crate::MathError;

/// Decimal digits printed by `Display` when no precision is requested.
const DEFAULT_DISPLAY_DIGITS: usize = 10;

/// Deterministic fixed-point scalar with Q32.32 encoding stored in an `i64`.
///
/// ```text
/// real_value = raw / 2^32
/// ```
///
/// Equality is exact on the raw integer; there is no epsilon comparison.
///
/// # Examples
/// ```
/// use fixmath_core::Fix64;
/// let a = Fix64::from_int(3);
/// let b = Fix64::HALF;
/// assert_eq!((a * b).to_string(), "1.5");
/// assert_eq!(a.checked_div(Fix64::ZERO), Err(fixmath_core::MathError::DivideByZero));
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Fix64 {
    raw: i64,
}

impl Fix64 {
    /// `0`.
    pub const ZERO: Self = Self::from_raw(0);
    /// `0.5`.
    pub const HALF: Self = Self::from_raw(ONE_RAW / 2);
    /// `1`.
    pub const ONE: Self = Self::from_raw(ONE_RAW);
    /// `-1`.
    pub const NEG_ONE: Self = Self::from_raw(-ONE_RAW);
    /// `2`.
    pub const TWO: Self = Self::from_raw(2 * ONE_RAW);
    /// π rounded to the nearest Q32.32 value.
    pub const PI: Self = Self::from_raw(13_493_037_705);
    /// π/2.
    pub const PI_OVER_2: Self = Self::from_raw(6_746_518_852);
    /// π/4.
    pub const PI_OVER_4: Self = Self::from_raw(3_373_259_426);
    /// 2π.
    pub const TWO_PI: Self = Self::from_raw(26_986_075_409);
    /// Largest representable value (≈ 2147483648).
    pub const MAX: Self = Self::from_raw(i64::MAX);
    /// Smallest representable value (−2147483648).
    pub const MIN: Self = Self::from_raw(i64::MIN);
    /// Smallest positive value, one raw unit (`2^-32`).
    pub const DELTA: Self = Self::from_raw(1);

    /// Constructs a value from a raw Q32.32 integer (no scaling or rounding).
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        Self { raw }
    }

    /// Returns the underlying Q32.32 raw integer.
    pub const fn raw(self) -> i64 {
        self.raw
    }

    /// Constructs a value from an integer.
    #[allow(clippy::cast_lossless)]
    pub const fn from_int(value: i32) -> Self {
        Self::from_raw((value as i64) << raw::FRAC_BITS)
    }

    /// Deterministic conversion from `f32` (ties-to-even; NaN → 0; ±∞ saturate).
    ///
    /// Intended for boundary crossings and test scaffolding, never for
    /// simulation paths.
    pub fn from_f32(value: f32) -> Self {
        Self::from_raw(raw::from_f32(value))
    }

    /// Deterministic conversion to the nearest `f32`.
    pub fn to_f32(self) -> f32 {
        raw::to_f32(self.raw)
    }

    /// Converts to `f64` for diagnostics; exact for every value below `2^21`.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> f64 {
        self.raw as f64 / ONE_RAW as f64
    }

    /// `self / rhs`, rounded half to even.
    pub fn checked_div(self, rhs: Self) -> Result<Self, MathError> {
        raw::div(self.raw, rhs.raw)
            .map(Self::from_raw)
            .ok_or(MathError::DivideByZero)
    }

    /// `self / n` for a plain integer divisor, rounded half to even.
    pub fn div_int(self, n: i64) -> Result<Self, MathError> {
        raw::div_int(self.raw, n)
            .map(Self::from_raw)
            .ok_or(MathError::DivideByZero)
    }

    /// Square root, rounded to nearest.
    ///
    /// Runs a fixed number of digit-by-digit iterations for every input.
    /// Negative inputs yield [`Fix64::ZERO`].
    pub fn sqrt(self) -> Self {
        Self::from_raw(raw::sqrt(self.raw))
    }

    /// Absolute value (`MIN.abs()` saturates to `MAX`).
    pub fn abs(self) -> Self {
        if self.raw < 0 {
            -self
        } else {
            self
        }
    }

    /// `-1`, `0` or `1` depending on the sign.
    pub fn signum(self) -> i32 {
        match self.raw.cmp(&0) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Largest integer value not greater than `self`.
    pub fn floor(self) -> Self {
        Self::from_raw(self.raw & !FRAC_MASK)
    }

    /// Smallest integer value not less than `self` (saturating).
    pub fn ceil(self) -> Self {
        if (self.raw & FRAC_MASK) == 0 {
            self
        } else {
            self.floor() + Self::ONE
        }
    }

    /// Nearest integer value, ties to even.
    pub fn round(self) -> Self {
        let floor = self.floor();
        let frac = self.raw & FRAC_MASK;
        let half = ONE_RAW / 2;
        let odd = (floor.raw & ONE_RAW) != 0;
        if frac > half || (frac == half && odd) {
            floor + Self::ONE
        } else {
            floor
        }
    }

    /// Fractional part, always in `[0, 1)`.
    pub fn fract(self) -> Self {
        Self::from_raw(self.raw & FRAC_MASK)
    }

    /// Restricts `self` to `[min, max]`.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        if self < min {
            min
        } else if self > max {
            max
        } else {
            self
        }
    }

    /// Legacy 32-bit hash code folded from the raw integer.
    ///
    /// Known limitation: `MIN` (`0x8000_0000_0000_0000`) and `MAX`
    /// (`0x7fff_ffff_ffff_ffff`) fold to the same code. Kept as is because
    /// hash consumers may depend on the existing codes.
    #[allow(clippy::cast_possible_truncation)]
    pub fn hash_code(self) -> i32 {
        (self.raw as i32) ^ ((self.raw >> 32) as i32)
    }

    /// Sine of `self` (radians).
    pub fn sin(self) -> Self {
        trig::sin_cos(self).0
    }

    /// Cosine of `self` (radians).
    pub fn cos(self) -> Self {
        trig::sin_cos(self).1
    }

    /// Sine and cosine of `self` (radians) sharing one range reduction.
    pub fn sin_cos(self) -> (Self, Self) {
        trig::sin_cos(self)
    }

    /// Tangent of `self` (radians); fails where the cosine rounds to zero.
    pub fn tan(self) -> Result<Self, MathError> {
        let (s, c) = trig::sin_cos(self);
        s.checked_div(c)
    }

    /// Arctangent in `[-π/2, π/2]`.
    pub fn atan(self) -> Self {
        trig::atan(self)
    }

    /// Four-quadrant arctangent of `y / x` in `[-π, π]`. `atan2(0, 0) == 0`.
    pub fn atan2(y: Self, x: Self) -> Self {
        trig::atan2(y, x)
    }

    /// Arcsine; the input is clamped to `[-1, 1]`.
    pub fn asin(self) -> Self {
        let x = self.clamp(Self::NEG_ONE, Self::ONE);
        trig::atan2(x, (Self::ONE - x * x).sqrt())
    }

    /// Arccosine; the input is clamped to `[-1, 1]`.
    pub fn acos(self) -> Self {
        let x = self.clamp(Self::NEG_ONE, Self::ONE);
        trig::atan2((Self::ONE - x * x).sqrt(), x)
    }
}

impl Hash for Fix64 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_code().hash(state);
    }
}

impl From<i32> for Fix64 {
    fn from(value: i32) -> Self {
        Self::from_int(value)
    }
}

impl Add for Fix64 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::from_raw(raw::add(self.raw, rhs.raw))
    }
}

impl Sub for Fix64 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::from_raw(raw::sub(self.raw, rhs.raw))
    }
}

impl Mul for Fix64 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::from_raw(raw::mul(self.raw, rhs.raw))
    }
}

impl Div for Fix64 {
    type Output = Self;

    /// # Panics
    /// Panics when `rhs` is zero, like integer division. Use
    /// [`Fix64::checked_div`] to handle the error instead.
    #[allow(clippy::panic)]
    fn div(self, rhs: Self) -> Self {
        match self.checked_div(rhs) {
            Ok(q) => q,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Neg for Fix64 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::from_raw(raw::neg(self.raw))
    }
}

impl AddAssign for Fix64 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Fix64 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Fix64 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Fix64 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl FromStr for Fix64 {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        raw::parse_decimal(s)
            .map(Self::from_raw)
            .ok_or_else(|| MathError::InvalidLiteral(s.to_owned()))
    }
}

impl fmt::Display for Fix64 {
    /// Exact decimal rendering. With an explicit precision (`{:.3}`) exactly
    /// that many digits are printed (at most 19); otherwise up to ten digits
    /// with trailing zeros trimmed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f.precision().unwrap_or(DEFAULT_DISPLAY_DIGITS).min(19);
        let (negative, int_part, frac) = raw::decimal_parts(self.raw, digits);
        let mut text = int_part.to_string();
        if digits > 0 {
            let mut frac_text = format!("{frac:0digits$}");
            if f.precision().is_none() {
                let trimmed = frac_text.trim_end_matches('0').len();
                frac_text.truncate(trimmed);
            }
            if !frac_text.is_empty() {
                text.push('.');
                text.push_str(&frac_text);
            }
        }
        let shows_minus = negative && (int_part != 0 || frac != 0);
        f.pad_integral(!shows_minus, "", &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_helpers_follow_integer_grid() {
        let v = Fix64::from_f32(-2.5);
        assert_eq!(v.floor(), Fix64::from_int(-3));
        assert_eq!(v.ceil(), Fix64::from_int(-2));
        assert_eq!(v.round(), Fix64::from_int(-2));
        assert_eq!(Fix64::from_f32(3.5).round(), Fix64::from_int(4));
        assert_eq!(Fix64::from_f32(0.75).fract(), Fix64::from_f32(0.75));
        assert_eq!(Fix64::from_f32(-0.25).fract(), Fix64::from_f32(0.75));
    }

    #[test]
    fn min_and_max_share_a_hash_code() {
        assert_eq!(Fix64::MIN.hash_code(), Fix64::MAX.hash_code());
        assert_ne!(Fix64::ONE.hash_code(), Fix64::TWO.hash_code());
    }
}
