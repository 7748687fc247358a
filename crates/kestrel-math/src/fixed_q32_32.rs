// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Raw-integer kernels for the Q32.32 fixed-point lane.
//!
//! Every value is an `i64` storing a real number scaled by `2^32`:
//! `real_value = raw / 2^32`.
//!
//! Rounding rules (shared by `DFix64` and any wire encoding):
//! - add/sub/neg saturate at `i64::MIN`/`i64::MAX`;
//! - mul/div round to nearest, ties to even, then saturate;
//! - sqrt rounds to nearest (ties cannot occur for integer radicands);
//! - `f32` conversions go through `f64` basic operations only, so they are
//!   reproducible on every IEEE-754 target.

/// Number of fractional bits in the Q32.32 encoding.
pub(crate) const FRAC_BITS: u32 = 32;

/// The raw integer value corresponding to `1.0`.
pub(crate) const ONE_RAW: i64 = 1_i64 << FRAC_BITS;

/// `2^32` as `f64`; scaling by a power of two is exact in binary floating point.
const SCALE_F64: f64 = 4_294_967_296.0;

fn saturate(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value.is_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Divides `num` by `den` (both non-negative, `den > 0`), rounding to nearest
/// with ties to even.
fn div_round_even(num: u128, den: u128) -> u128 {
    let q = num / den;
    let r = num % den;
    let twice_r = r.saturating_mul(2);
    if twice_r > den || (twice_r == den && q & 1 == 1) {
        q.saturating_add(1)
    } else {
        q
    }
}

fn apply_sign(magnitude: u128, negative: bool) -> i64 {
    let signed = i128::try_from(magnitude).unwrap_or(i128::MAX);
    saturate(if negative { -signed } else { signed })
}

pub(crate) fn add(a: i64, b: i64) -> i64 {
    a.saturating_add(b)
}

pub(crate) fn sub(a: i64, b: i64) -> i64 {
    a.saturating_sub(b)
}

pub(crate) fn neg(a: i64) -> i64 {
    // `-i64::MIN` is not representable.
    a.checked_neg().unwrap_or(i64::MAX)
}

pub(crate) fn mul(a: i64, b: i64) -> i64 {
    let prod = i128::from(a) * i128::from(b);
    let magnitude = div_round_even(prod.unsigned_abs(), 1_u128 << FRAC_BITS);
    apply_sign(magnitude, prod.is_negative())
}

pub(crate) fn div(a: i64, b: i64) -> i64 {
    if b == 0 {
        // 0/0 stays 0 (no NaN in integer space); x/0 saturates toward sign(x).
        return match a.signum() {
            0 => 0,
            1 => i64::MAX,
            _ => i64::MIN,
        };
    }
    let num = u128::from(a.unsigned_abs()) << FRAC_BITS;
    let den = u128::from(b.unsigned_abs());
    apply_sign(div_round_even(num, den), (a < 0) != (b < 0))
}

/// Square root in Q32.32: `sqrt(raw / 2^32) * 2^32 == sqrt(raw * 2^32)`.
///
/// Negative inputs map to `0`.
pub(crate) fn sqrt(a: i64) -> i64 {
    if a <= 0 {
        return 0;
    }
    let radicand = u128::from(a.unsigned_abs()) << FRAC_BITS;
    let floor = radicand.isqrt();
    // (floor + 0.5)^2 = floor^2 + floor + 0.25; integers above floor^2 + floor round up.
    let rounded = if radicand - floor * floor > floor {
        floor + 1
    } else {
        floor
    };
    apply_sign(rounded, false)
}

/// Converts an `f32` to a raw Q32.32 value.
///
/// - `NaN` maps to `0`.
/// - Infinities and out-of-range magnitudes saturate to `i64::MAX`/`i64::MIN`.
/// - Finite values round to nearest with ties to even at the `2^-32` step.
#[allow(clippy::cast_possible_truncation)]
pub fn from_f32(value: f32) -> i64 {
    // f32 -> f64 is exact and so is the power-of-two scale; the only rounding
    // is the explicit ties-to-even step. `as` saturates and maps NaN to 0.
    (f64::from(value) * SCALE_F64).round_ties_even() as i64
}

/// Converts a raw Q32.32 value to `f32` (round to nearest at each IEEE step).
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn to_f32(raw: i64) -> f32 {
    ((raw as f64) / SCALE_F64) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_rounds_ties_to_even() {
        // 1.5 * 2^-32 rounds to 2 * 2^-32, 2.5 * 2^-32 rounds to 2 * 2^-32.
        assert_eq!(mul(3, 1_i64 << 31), 2);
        assert_eq!(mul(5, 1_i64 << 31), 2);
        assert_eq!(mul(-3, 1_i64 << 31), -2);
    }

    #[test]
    fn mul_saturates() {
        assert_eq!(mul(i64::MAX, 2 * ONE_RAW), i64::MAX);
        assert_eq!(mul(i64::MIN, 2 * ONE_RAW), i64::MIN);
    }

    #[test]
    fn div_by_zero_policy() {
        assert_eq!(div(0, 0), 0);
        assert_eq!(div(ONE_RAW, 0), i64::MAX);
        assert_eq!(div(-ONE_RAW, 0), i64::MIN);
    }

    #[test]
    fn sqrt_of_perfect_squares_is_exact() {
        assert_eq!(sqrt(4 * ONE_RAW), 2 * ONE_RAW);
        assert_eq!(sqrt(ONE_RAW / 4), ONE_RAW / 2);
        assert_eq!(sqrt(0), 0);
        assert_eq!(sqrt(-ONE_RAW), 0);
    }

    #[test]
    fn neg_of_min_saturates() {
        assert_eq!(neg(i64::MIN), i64::MAX);
    }
}
