// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Deterministic scalar lanes for Kestrel geometry.
//!
//! Narrow-phase code is written once against [`Scalar`] and bound to either
//! lane at the call site:
//!
//! - [`F32Scalar`]: canonicalizing float32 wrapper. Results are reproducible
//!   on IEEE-754 targets as long as no fused multiply-add is introduced.
//! - [`DFix64`]: Q32.32 fixed point in an `i64`. Every operation is integer
//!   arithmetic with documented rounding, so results are bit-identical across
//!   compilers and CPUs. Use this lane for lockstep replay.
//!
//! Determinism contract:
//! - Operations are pure and total over each lane's domain.
//! - `sqrt` is part of the contract: IEEE `sqrtf` is correctly rounded, and
//!   the fixed lane uses an integer square root rounded to nearest.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::fixed_q32_32;

/// Deterministic scalar arithmetic used by every geometric routine.
///
/// Arithmetic operators are required via the standard operator traits so
/// generic code can use `+`, `-`, `*`, `/`, unary `-`, and the comparison
/// operators directly.
pub trait Scalar:
    Copy
    + fmt::Debug
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Returns the additive identity (zero).
    fn zero() -> Self;

    /// Returns the multiplicative identity (one).
    fn one() -> Self;

    /// Returns the square root of `self` under the lane's rounding rules.
    fn sqrt(self) -> Self;

    /// Converts from `f32` into this scalar type.
    ///
    /// Intended for boundary crossings (configuration, scene files, tests).
    fn from_f32(value: f32) -> Self;

    /// Converts this scalar value to `f32` for interop and diagnostics.
    fn to_f32(self) -> f32;

    /// Smallest positive magnitude the lane resolves at full precision.
    ///
    /// Quantities that are products of several lengths (squared areas,
    /// barycentric weights) lose their relative precision once they approach
    /// this value: `2^-32` for `DFix64`, `f32::MIN_POSITIVE` for `F32Scalar`.
    fn resolution() -> Self;
}

/// Deterministic f32 value.
#[derive(Debug, Copy, Clone)]
pub struct F32Scalar {
    /// # Invariant
    /// Never `-0.0`, a non-canonical NaN, or a subnormal; enforced by `new()`.
    value: f32,
}

#[cfg(feature = "serde")]
impl serde::Serialize for F32Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for F32Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let v = f32::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

impl F32Scalar {
    /// Nil value
    pub const ZERO: Self = Self::new(0.0);

    /// Identity value
    pub const ONE: Self = Self::new(1.0);

    /// Constructs a canonical `F32Scalar`.
    ///
    /// NaN becomes the positive quiet NaN `0x7fc0_0000`, subnormals flush to
    /// `+0.0`, and `-0.0` becomes `+0.0`.
    pub const fn new(num: f32) -> Self {
        if num.is_nan() {
            Self {
                value: f32::from_bits(0x7fc0_0000),
            }
        } else if num.is_subnormal() {
            Self { value: 0.0 }
        } else {
            Self { value: num + 0.0 }
        }
    }

    /// Returns the wrapped `f32`.
    pub const fn value(self) -> f32 {
        self.value
    }
}

impl PartialEq for F32Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for F32Scalar {}

impl PartialOrd for F32Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for F32Scalar {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}

impl fmt::Display for F32Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<f32> for F32Scalar {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl Scalar for F32Scalar {
    fn zero() -> Self {
        Self::ZERO
    }

    fn one() -> Self {
        Self::ONE
    }

    fn sqrt(self) -> Self {
        Self::new(self.value.sqrt())
    }

    fn from_f32(value: f32) -> Self {
        Self::new(value)
    }

    fn to_f32(self) -> f32 {
        self.value
    }

    fn resolution() -> Self {
        Self::new(f32::MIN_POSITIVE)
    }
}

impl Add for F32Scalar {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value)
    }
}

impl Sub for F32Scalar {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value)
    }
}

impl Mul for F32Scalar {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.value * rhs.value)
    }
}

impl Div for F32Scalar {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(self.value / rhs.value)
    }
}

impl Neg for F32Scalar {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

/// Deterministic fixed-point scalar with Q32.32 encoding stored in an `i64`.
///
/// ```text
/// real_value = raw / 2^32
/// ```
///
/// Range is roughly ±2.1e9 with a resolution of `2^-32` (≈2.3e-10). Squared
/// distances of coordinates beyond ~46 000 units saturate.
///
/// # Minimum feature size
///
/// Closest-point weights on a triangle face scale with the fourth power of
/// its edge length, so faces whose squared area normal falls below about
/// `2^-22` (right-angle legs under ~2 cm) cannot be resolved in this lane.
/// `Triangle::is_degenerate` in `kestrel-collide` rejects such faces.
///
/// # Determinism contract
///
/// - All arithmetic is performed in integer space with saturating overflow.
/// - Multiplication/division use round-to-nearest, ties-to-even semantics.
/// - `sqrt` is an integer square root rounded to nearest; negative inputs yield zero.
/// - `from_f32`/`to_f32` use only IEEE basic operations.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DFix64 {
    raw: i64,
}

impl DFix64 {
    /// The fixed-point zero value.
    pub const ZERO: Self = Self { raw: 0 };

    /// The fixed-point one value.
    pub const ONE: Self = Self {
        raw: fixed_q32_32::ONE_RAW,
    };

    /// Constructs a fixed-point value from a raw Q32.32 integer (exact).
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        Self { raw }
    }

    /// Constructs a fixed-point value from an integer, saturating outside ±2^31.
    #[must_use]
    pub const fn from_i64(n: i64) -> Self {
        let max = i64::MAX >> fixed_q32_32::FRAC_BITS;
        let min = i64::MIN >> fixed_q32_32::FRAC_BITS;
        if n > max {
            Self { raw: i64::MAX }
        } else if n < min {
            Self { raw: i64::MIN }
        } else {
            Self {
                raw: n << fixed_q32_32::FRAC_BITS,
            }
        }
    }

    /// Exact rational construction `num / den` (rounded once, ties to even).
    #[must_use]
    pub fn from_ratio(num: i64, den: i64) -> Self {
        Self::from_i64(num) / Self::from_i64(den)
    }

    /// Returns the underlying Q32.32 raw storage value.
    pub const fn raw(self) -> i64 {
        self.raw
    }
}

impl fmt::Display for DFix64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f32())
    }
}

impl Scalar for DFix64 {
    fn zero() -> Self {
        Self::ZERO
    }

    fn one() -> Self {
        Self::ONE
    }

    fn sqrt(self) -> Self {
        Self::from_raw(fixed_q32_32::sqrt(self.raw))
    }

    fn from_f32(value: f32) -> Self {
        Self::from_raw(fixed_q32_32::from_f32(value))
    }

    fn to_f32(self) -> f32 {
        fixed_q32_32::to_f32(self.raw)
    }

    fn resolution() -> Self {
        Self::from_raw(1)
    }
}

impl Add for DFix64 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_raw(fixed_q32_32::add(self.raw, rhs.raw))
    }
}

impl Sub for DFix64 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_raw(fixed_q32_32::sub(self.raw, rhs.raw))
    }
}

impl Mul for DFix64 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_raw(fixed_q32_32::mul(self.raw, rhs.raw))
    }
}

impl Div for DFix64 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::from_raw(fixed_q32_32::div(self.raw, rhs.raw))
    }
}

impl Neg for DFix64 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_raw(fixed_q32_32::neg(self.raw))
    }
}
