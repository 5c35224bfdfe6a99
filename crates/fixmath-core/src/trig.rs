// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Deterministic transcendentals for [`Fix64`].
//!
//! Nothing here calls platform math. Strategy for `sin`/`cos`:
//! - reduce `|angle|` into `[0, 2π)` on the raw integer
//! - split into quadrants by comparison (no division by `π/2`)
//! - fold each quadrant into `[0, π/4]` and evaluate fixed-degree Taylor
//!   polynomials in Horner form
//! - reapply quadrant symmetries and the sign of the input
//!
//! `atan` uses two half-angle reductions followed by a fixed series. Every
//! loop runs a fixed number of times regardless of the input.

use crate::fixed_q32_32 as raw;
use crate::Fix64;

const THREE_PI_OVER_2: Fix64 = Fix64::from_raw(20_239_556_557);

/// `2k(2k+1)` for the sine series, innermost term first (through `x^13`).
const SIN_DENOMINATORS: [i64; 6] = [156, 110, 72, 42, 20, 6];

/// `2k(2k-1)` for the cosine series, innermost term first (through `x^14`).
const COS_DENOMINATORS: [i64; 7] = [182, 132, 90, 56, 30, 12, 2];

/// Odd denominators of the arctangent series, innermost term first.
const ATAN_DENOMINATORS: [i64; 8] = [15, 13, 11, 9, 7, 5, 3, 1];

/// Half-angle reductions applied before the arctangent series.
const ATAN_REDUCTIONS: u32 = 2;

fn div_const(x: Fix64, n: i64) -> Fix64 {
    // Denominators above are nonzero constants.
    Fix64::from_raw(raw::div_int(x.raw(), n).unwrap_or_default())
}

fn sin_poly(x: Fix64) -> Fix64 {
    let x2 = x * x;
    let acc = SIN_DENOMINATORS
        .iter()
        .fold(Fix64::ONE, |acc, &n| Fix64::ONE - div_const(x2 * acc, n));
    x * acc
}

fn cos_poly(x: Fix64) -> Fix64 {
    let x2 = x * x;
    COS_DENOMINATORS
        .iter()
        .fold(Fix64::ONE, |acc, &n| Fix64::ONE - div_const(x2 * acc, n))
}

/// Sine and cosine of `a` in `[0, π/2]`.
fn first_quadrant(a: Fix64) -> (Fix64, Fix64) {
    if a <= Fix64::PI_OVER_4 {
        (sin_poly(a), cos_poly(a))
    } else {
        let b = Fix64::PI_OVER_2 - a;
        (cos_poly(b), sin_poly(b))
    }
}

/// Deterministic `(sin, cos)` of `angle` radians, both within `[-1, 1]`.
///
/// `sin(-x)` is the exact negation of `sin(x)` and `cos(-x)` equals `cos(x)`
/// bit-for-bit: the magnitude is reduced and the sign reapplied at the end.
pub(crate) fn sin_cos(angle: Fix64) -> (Fix64, Fix64) {
    let negative = angle < Fix64::ZERO;
    let r = Fix64::from_raw(angle.abs().raw() % Fix64::TWO_PI.raw());

    let (quadrant, a) = if r < Fix64::PI_OVER_2 {
        (0_u8, r)
    } else if r < Fix64::PI {
        (1, r - Fix64::PI_OVER_2)
    } else if r < THREE_PI_OVER_2 {
        (2, r - Fix64::PI)
    } else {
        (3, r - THREE_PI_OVER_2)
    };

    let (s, c) = first_quadrant(a);
    let (s, c) = match quadrant {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    };
    let s = if negative { -s } else { s };
    (
        s.clamp(Fix64::NEG_ONE, Fix64::ONE),
        c.clamp(Fix64::NEG_ONE, Fix64::ONE),
    )
}

/// Arctangent of `x` in `[0, 1]`.
fn atan_unit(x: Fix64) -> Fix64 {
    // atan(x) = 2·atan(x / (1 + sqrt(1 + x²))); the divisor is at least 1.
    let mut x = x;
    for _ in 0..ATAN_REDUCTIONS {
        let divisor = Fix64::ONE + (Fix64::ONE + x * x).sqrt();
        x = x.checked_div(divisor).unwrap_or_default();
    }
    let x2 = x * x;
    let series = ATAN_DENOMINATORS.iter().skip(1).fold(
        div_const(Fix64::ONE, ATAN_DENOMINATORS[0]),
        |acc, &n| div_const(Fix64::ONE, n) - x2 * acc,
    );
    Fix64::from_raw((x * series).raw() << ATAN_REDUCTIONS)
}

/// Arctangent in `[-π/2, π/2]`.
pub(crate) fn atan(x: Fix64) -> Fix64 {
    atan2(x, Fix64::ONE)
}

/// Four-quadrant arctangent of `y / x`; `atan2(0, 0)` is defined as `0`.
pub(crate) fn atan2(y: Fix64, x: Fix64) -> Fix64 {
    if x == Fix64::ZERO && y == Fix64::ZERO {
        return Fix64::ZERO;
    }
    let (ax, ay) = (x.abs(), y.abs());
    // Keep the ratio in [0, 1] so the series never sees a saturated input.
    let base = if ay <= ax {
        atan_unit(ay.checked_div(ax).unwrap_or_default())
    } else {
        Fix64::PI_OVER_2 - atan_unit(ax.checked_div(ay).unwrap_or_default())
    };
    let angle = if x < Fix64::ZERO {
        Fix64::PI - base
    } else {
        base
    };
    if y < Fix64::ZERO {
        -angle
    } else {
        angle
    }
}
