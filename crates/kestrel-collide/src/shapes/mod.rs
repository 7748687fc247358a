// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Collision shapes consumed by the narrow phase.

use kestrel_math::{Scalar, Vec3};

mod sphere;
mod triangle;

pub use sphere::Sphere;
pub use triangle::Triangle;

/// Port for shapes that expose a local-space support center.
///
/// The support center is the point a shape's placement transform carries into
/// world space to locate the shape (a sphere's center, a triangle's centroid).
pub trait SupportMapping<S: Scalar> {
    /// Local-space support center.
    fn support_center(&self) -> Vec3<S>;
}
