// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use kestrel_math::{F32Scalar, Mat3, Scalar, Vec3};

/// Rigid transform placing a shape's local space in the world.
///
/// Conventions:
/// - `position` in metres (world space).
/// - `orientation` maps local offsets to world offsets (`world = R · local`).
/// - No scale: contact depths and radii stay in world units.
///
/// Determinism:
/// - `transform_point` rotates then translates using the lane's arithmetic
///   only; there is no fused multiply-add and no cached state.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RigidTransform<S = F32Scalar> {
    orientation: Mat3<S>,
    position: Vec3<S>,
}

impl<S: Scalar> RigidTransform<S> {
    /// Identity transform (no rotation, no translation).
    #[must_use]
    pub fn identity() -> Self {
        Self {
            orientation: Mat3::identity(),
            position: Vec3::zero(),
        }
    }

    /// Creates a transform from components.
    #[must_use]
    pub const fn new(orientation: Mat3<S>, position: Vec3<S>) -> Self {
        Self {
            orientation,
            position,
        }
    }

    /// Pure translation.
    #[must_use]
    pub fn from_position(position: Vec3<S>) -> Self {
        Self::new(Mat3::identity(), position)
    }

    /// Orientation component.
    #[must_use]
    pub fn orientation(&self) -> Mat3<S> {
        self.orientation
    }

    /// Position component.
    #[must_use]
    pub fn position(&self) -> Vec3<S> {
        self.position
    }

    /// Maps a local-space point to world space (`R · p + t`).
    #[must_use]
    pub fn transform_point(&self, point: &Vec3<S>) -> Vec3<S> {
        self.position + self.transform_vector(point)
    }

    /// Maps a local-space direction to world space (`R · v`, no translation).
    #[must_use]
    pub fn transform_vector(&self, vector: &Vec3<S>) -> Vec3<S> {
        self.orientation.transform(vector)
    }
}

impl<S: Scalar> Default for RigidTransform<S> {
    fn default() -> Self {
        Self::identity()
    }
}
