// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use kestrel_math::{F32Scalar, Scalar, Vec3};

use super::SupportMapping;
use crate::error::CollideError;

/// Sphere collider: a local center offset plus a radius.
///
/// Invariants:
/// - `radius` is finite and `>= 0` (enforced at construction).
/// - `center` is usually the origin; a non-zero offset places the sphere
///   away from its body's reference point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sphere<S = F32Scalar> {
    center: Vec3<S>,
    radius: S,
}

impl<S: Scalar> Sphere<S> {
    /// Sphere centered on the local origin.
    pub fn new(radius: S) -> Result<Self, CollideError> {
        Self::with_center(Vec3::zero(), radius)
    }

    /// Sphere centered at a local offset.
    pub fn with_center(center: Vec3<S>, radius: S) -> Result<Self, CollideError> {
        let as_f32 = radius.to_f32();
        // `F32Scalar` orders NaN above every number, so test finiteness first.
        if !as_f32.is_finite() || radius < S::zero() {
            return Err(CollideError::InvalidRadius { radius: as_f32 });
        }
        Ok(Self { center, radius })
    }

    /// Radius.
    pub fn radius(&self) -> S {
        self.radius
    }

    /// Local center offset.
    pub fn center(&self) -> Vec3<S> {
        self.center
    }
}

impl<S: Scalar> SupportMapping<S> for Sphere<S> {
    fn support_center(&self) -> Vec3<S> {
        self.center
    }
}
