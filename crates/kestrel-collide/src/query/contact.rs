// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use kestrel_math::{F32Scalar, Scalar, Vec3};

/// Single contact between a triangle and a sphere, in world space.
///
/// Produced fresh by every detection call and owned by the caller. The
/// all-zero [`Default`] value stands for "no contact" when a caller needs the
/// zeroed outputs rather than an `Option`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Contact<S = F32Scalar> {
    /// Closest point on the triangle to the sphere center.
    pub point: Vec3<S>,
    /// Witness point on the triangle surface (equal to `point`).
    pub point_on_triangle: Vec3<S>,
    /// Witness point on the sphere surface: `center − normal · radius`.
    ///
    /// The normal is always the face normal, so `point_on_triangle −
    /// point_on_sphere` is parallel to it only when `point` lies inside the
    /// face. For edge and vertex contacts the same formula applies and the
    /// gap has a component along the triangle plane.
    pub point_on_sphere: Vec3<S>,
    /// Unit face normal pointing from the triangle toward the sphere side.
    pub normal: Vec3<S>,
    /// Overlap depth, `radius − distance`; zero at tangency, never negative.
    pub penetration: S,
}

impl<S: Scalar> Default for Contact<S> {
    fn default() -> Self {
        Self {
            point: Vec3::zero(),
            point_on_triangle: Vec3::zero(),
            point_on_sphere: Vec3::zero(),
            normal: Vec3::zero(),
            penetration: S::zero(),
        }
    }
}
