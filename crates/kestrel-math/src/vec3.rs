// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::scalar::{F32Scalar, Scalar};
use crate::EPSILON;

/// Deterministic 3D vector generic over a [`Scalar`] lane.
///
/// * Components encode metres and may represent either points or directions
///   depending on the calling context.
/// * Arithmetic is delegated component-wise to the lane, so a `Vec3<DFix64>`
///   rounds exactly like the fixed-point scalars it is built from.
/// * Use [`crate::Mat3::transform`] to rotate; translation is added by the caller.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<S = F32Scalar> {
    data: [S; 3],
}

impl<S: Scalar> Vec3<S> {
    /// Creates a vector from components.
    pub const fn new(x: S, y: S, z: S) -> Self {
        Self { data: [x, y, z] }
    }

    /// Creates a vector from `f32` components converted into the lane.
    pub fn from_f32(x: f32, y: f32, z: f32) -> Self {
        Self::new(S::from_f32(x), S::from_f32(y), S::from_f32(z))
    }

    /// The zero vector.
    pub fn zero() -> Self {
        Self::new(S::zero(), S::zero(), S::zero())
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [S; 3] {
        self.data
    }

    /// Returns the components converted to `f32` (diagnostics and interop).
    pub fn to_f32_array(self) -> [f32; 3] {
        [
            self.data[0].to_f32(),
            self.data[1].to_f32(),
            self.data[2].to_f32(),
        ]
    }

    /// X component.
    pub fn x(&self) -> S {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> S {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> S {
        self.data[2]
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.x() + other.x(),
            self.y() + other.y(),
            self.z() + other.z(),
        )
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(
            self.x() - other.x(),
            self.y() - other.y(),
            self.z() - other.z(),
        )
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: S) -> Self {
        Self::new(self.x() * scalar, self.y() * scalar, self.z() * scalar)
    }

    /// Dot product with another vector.
    ///
    /// Summation order is fixed (`x`, then `y`, then `z`).
    pub fn dot(&self, other: &Self) -> S {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Cross product with another vector.
    pub fn cross(&self, other: &Self) -> Self {
        let (ax, ay, az) = (self.x(), self.y(), self.z());
        let (bx, by, bz) = (other.x(), other.y(), other.z());
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> S {
        self.dot(self)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> S {
        self.length_squared().sqrt()
    }

    /// Normalises the vector, returning the zero vector if length ≤ `EPSILON`.
    ///
    /// `EPSILON` is a degeneracy threshold: vectors at or below it normalise
    /// to zero so downstream callers can detect them deterministically.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= S::from_f32(EPSILON) {
            return Self::zero();
        }
        self.scale(S::one() / len)
    }
}

impl<S: Scalar> From<[S; 3]> for Vec3<S> {
    fn from(value: [S; 3]) -> Self {
        Self { data: value }
    }
}

impl<S: Scalar> Default for Vec3<S> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<S: Scalar> Add for Vec3<S> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::add(&self, &rhs)
    }
}

impl<S: Scalar> Sub for Vec3<S> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::sub(&self, &rhs)
    }
}

impl<S: Scalar> Mul<S> for Vec3<S> {
    type Output = Self;
    fn mul(self, rhs: S) -> Self {
        self.scale(rhs)
    }
}

impl<S: Scalar> Neg for Vec3<S> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z())
    }
}

impl<S: Scalar> AddAssign for Vec3<S> {
    fn add_assign(&mut self, rhs: Self) {
        *self = Self::add(self, &rhs);
    }
}

impl<S: Scalar> SubAssign for Vec3<S> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Self::sub(self, &rhs);
    }
}
