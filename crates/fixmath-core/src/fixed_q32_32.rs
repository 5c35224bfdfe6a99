// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Raw integer kernels for the Q32.32 encoding behind [`crate::Fix64`].
//!
//! The representation is an `i64` storing an integer scaled by `2^32`:
//! `real_value = raw / 2^32`. Everything in here is integer-only; every
//! rescale rounds to nearest with ties-to-even and saturates on overflow.

/// Number of fractional bits in the Q32.32 encoding.
pub const FRAC_BITS: u32 = 32;

/// The raw integer value corresponding to `1.0`.
pub const ONE_RAW: i64 = 1_i64 << FRAC_BITS;

/// Mask selecting the fractional bits of a raw value.
pub(crate) const FRAC_MASK: i64 = ONE_RAW - 1;

/// Iterations of the digit-by-digit square root. Fixed so the loop never
/// depends on the input: `(i64::MAX << 32)` needs 48 bit pairs.
const SQRT_ITERATIONS: u32 = 48;

pub(crate) fn saturate_i128(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value.is_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Shifts `value` right by `shift`, rounding half to even.
fn round_shift_right(value: u128, shift: u32) -> u128 {
    if shift == 0 {
        return value;
    }
    if shift >= 128 {
        return 0;
    }
    let q = value >> shift;
    let r = value & ((1_u128 << shift) - 1);
    let half = 1_u128 << (shift - 1);
    if r > half || (r == half && (q & 1) == 1) {
        q + 1
    } else {
        q
    }
}

/// Divides magnitudes, rounding half to even. `den` must be nonzero.
fn round_div(num: u128, den: u128) -> u128 {
    let q = num / den;
    let twice_r = (num % den).saturating_mul(2);
    if twice_r > den || (twice_r == den && (q & 1) == 1) {
        q + 1
    } else {
        q
    }
}

fn apply_sign(magnitude: u128, negative: bool) -> i64 {
    let magnitude = i128::try_from(magnitude).unwrap_or(i128::MAX);
    saturate_i128(if negative { -magnitude } else { magnitude })
}

pub(crate) fn add(a: i64, b: i64) -> i64 {
    saturate_i128(i128::from(a) + i128::from(b))
}

pub(crate) fn sub(a: i64, b: i64) -> i64 {
    saturate_i128(i128::from(a) - i128::from(b))
}

pub(crate) fn neg(a: i64) -> i64 {
    a.checked_neg().unwrap_or(i64::MAX)
}

/// Full-width product rescaled by `2^32`.
pub(crate) fn mul(a: i64, b: i64) -> i64 {
    let prod = i128::from(a) * i128::from(b);
    let rounded = round_shift_right(prod.unsigned_abs(), FRAC_BITS);
    apply_sign(rounded, prod.is_negative())
}

/// Quotient `a / b` in Q32.32, or `None` when `b == 0`.
pub(crate) fn div(a: i64, b: i64) -> Option<i64> {
    if b == 0 {
        return None;
    }
    let num = u128::from(a.unsigned_abs()) << FRAC_BITS;
    let q = round_div(num, u128::from(b.unsigned_abs()));
    Some(apply_sign(q, (a < 0) ^ (b < 0)))
}

/// Quotient of a raw value by a plain integer, or `None` when `n == 0`.
pub(crate) fn div_int(a: i64, n: i64) -> Option<i64> {
    if n == 0 {
        return None;
    }
    let q = round_div(
        u128::from(a.unsigned_abs()),
        u128::from(n.unsigned_abs()),
    );
    Some(apply_sign(q, (a < 0) ^ (n < 0)))
}

/// Square root of a raw value, rounded to nearest. Non-positive input → 0.
pub(crate) fn sqrt(a: i64) -> i64 {
    if a <= 0 {
        return 0;
    }
    // sqrt(raw / 2^32) * 2^32 == sqrt(raw * 2^32)
    let mut rem = u128::from(a.unsigned_abs()) << FRAC_BITS;
    let mut root = 0_u128;
    let mut bit = 1_u128 << 94;
    for _ in 0..SQRT_ITERATIONS {
        if rem >= root + bit {
            rem -= root + bit;
            root = (root >> 1) + bit;
        } else {
            root >>= 1;
        }
        bit >>= 2;
    }
    if rem > root {
        root += 1;
    }
    apply_sign(root, false)
}

/// Deterministically converts an `f32` to a raw Q32.32 value.
///
/// - `NaN` maps to `0`; `±∞` saturate to `i64::MAX`/`i64::MIN`.
/// - Finite values round to nearest with ties-to-even at `2^-32`.
pub fn from_f32(value: f32) -> i64 {
    if value.is_nan() {
        return 0;
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            i64::MAX
        } else {
            i64::MIN
        };
    }
    let bits = value.to_bits();
    // Masked to 0..=255.
    #[allow(clippy::cast_possible_truncation)]
    let exp_field = ((bits >> 23) & 0xff) as u8;
    let frac = u128::from(bits & 0x7f_ffff);
    // value = mantissa * 2^exponent
    let (mantissa, exponent) = if exp_field == 0 {
        (frac, -149_i32)
    } else {
        (frac | (1 << 23), i32::from(exp_field) - 150)
    };
    let shift = exponent + 32;
    let magnitude = if shift >= 0 {
        let shift = shift.unsigned_abs();
        if shift > 100 {
            u128::MAX
        } else {
            mantissa << shift
        }
    } else {
        round_shift_right(mantissa, shift.unsigned_abs())
    };
    apply_sign(magnitude, value.is_sign_negative())
}

/// Deterministically converts a raw Q32.32 value to the nearest `f32`
/// (ties-to-even).
pub fn to_f32(raw: i64) -> f32 {
    if raw == 0 {
        return 0.0;
    }
    let magnitude = raw.unsigned_abs();
    let top = 63 - magnitude.leading_zeros();
    #[allow(clippy::cast_possible_wrap)]
    let mut exponent = top as i32 - 32;
    let mut significand = if top > 23 {
        round_shift_right(u128::from(magnitude), top - 23)
    } else {
        u128::from(magnitude) << (23 - top)
    };
    if significand >= 1 << 24 {
        significand >>= 1;
        exponent += 1;
    }
    // exponent is within -32..=32, so the biased field is a normal exponent.
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let bits = (u32::from(raw < 0) << 31)
        | (((exponent + 127) as u32) << 23)
        | (significand as u32 & 0x7f_ffff);
    f32::from_bits(bits)
}

/// Parses `[+-]digits[.digits]` into a raw value.
///
/// The fraction is converted exactly (decimal long multiplication by `2^32`)
/// and then rounded half to even, so arbitrarily long literals still round
/// correctly. Returns `None` for malformed or out-of-range literals.
pub(crate) fn parse_decimal(text: &str) -> Option<i64> {
    let text = text.trim();
    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(int_part) || !is_digits(frac_part) {
        return None;
    }

    let mut int_value = 0_u128;
    for b in int_part.bytes() {
        int_value = int_value * 10 + u128::from(b - b'0');
        if int_value > 1 << 31 {
            return None;
        }
    }

    let mut digits: Vec<u8> = frac_part.bytes().map(|b| b - b'0').collect();
    let mut carry = 0_u64;
    for d in digits.iter_mut().rev() {
        let v = u64::from(*d) * (1_u64 << FRAC_BITS) + carry;
        // v % 10 < 10
        #[allow(clippy::cast_possible_truncation)]
        let digit = (v % 10) as u8;
        *d = digit;
        carry = v / 10;
    }
    // `digits` now holds the sub-ulp remainder as a decimal fraction.
    let round_up = match digits.split_first() {
        Some((&first, rest)) if first == 5 => {
            rest.iter().any(|&d| d != 0) || (carry & 1) == 1
        }
        Some((&first, _)) => first > 5,
        None => false,
    };

    let magnitude = (int_value << FRAC_BITS) + u128::from(carry) + u128::from(round_up);
    let limit = if negative {
        1_u128 << 63
    } else {
        (1_u128 << 63) - 1
    };
    if magnitude > limit {
        return None;
    }
    Some(apply_sign(magnitude, negative))
}

/// Splits a raw value into sign, integer part and `precision` rounded decimal
/// fraction digits (ties-to-even). `precision` is capped at 19.
pub(crate) fn decimal_parts(raw: i64, precision: usize) -> (bool, u64, u64) {
    let precision = u32::try_from(precision.min(19)).unwrap_or(19);
    let magnitude = raw.unsigned_abs();
    let mut int_part = magnitude >> FRAC_BITS;
    let frac = u128::from(magnitude & FRAC_MASK.unsigned_abs());
    let scale = 10_u128.pow(precision);
    let mut frac_digits = round_shift_right(frac * scale, FRAC_BITS);
    if frac_digits >= scale {
        frac_digits -= scale;
        int_part += 1;
    }
    let frac_digits = u64::try_from(frac_digits).unwrap_or(u64::MAX);
    (raw < 0, int_part, frac_digits)
}
