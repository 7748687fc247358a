// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use kestrel_math::Scalar;
use tracing::debug;

use super::closest_point::closest_point;
use super::contact::Contact;
use crate::config::{NarrowPhaseConfig, NormalFrame};
use crate::shapes::{Sphere, SupportMapping, Triangle};
use crate::types::transform::RigidTransform;

/// Sphere vs. triangle contact with the default [`NarrowPhaseConfig`].
///
/// Returns `None` when the sphere does not reach the triangle. Use
/// `detect(..).unwrap_or_default()` for the zeroed no-contact bundle.
pub fn detect<S: Scalar>(
    triangle: &Triangle<S>,
    sphere: &Sphere<S>,
    triangle_transform: &RigidTransform<S>,
    sphere_transform: &RigidTransform<S>,
) -> Option<Contact<S>> {
    detect_with(
        &NarrowPhaseConfig::default(),
        triangle,
        sphere,
        triangle_transform,
        sphere_transform,
    )
}

/// Sphere vs. triangle contact under an explicit policy.
///
/// Steps:
/// 1. Carry the triangle vertices and the sphere's support center into world space.
/// 2. Find the closest point on the triangle, passing the vertices as
///    `(v2, v1, v0)`; this order is part of the replay contract.
/// 3. Overlap when `distance² <= radius²` (tangency counts as contact).
///
/// The normal comes from world-space edges under [`NormalFrame::World`]
/// and from the untransformed local vertices under [`NormalFrame::Local`].
pub fn detect_with<S: Scalar>(
    config: &NarrowPhaseConfig,
    triangle: &Triangle<S>,
    sphere: &Sphere<S>,
    triangle_transform: &RigidTransform<S>,
    sphere_transform: &RigidTransform<S>,
) -> Option<Contact<S>> {
    let world = triangle.transformed(triangle_transform);
    if config.reject_degenerate && world.is_degenerate(S::from_f32(config.degenerate_epsilon)) {
        debug!(triangle = ?world, "degenerate triangle rejected");
        return None;
    }

    let center = sphere_transform.transform_point(&sphere.support_center());
    let [v0, v1, v2] = world.vertices();
    let point = closest_point(&center, &v2, &v1, &v0);

    let offset = point - center;
    let distance_sq = offset.dot(&offset);
    let radius = sphere.radius();
    if distance_sq > radius * radius {
        return None;
    }

    let normal = match config.normal_frame {
        NormalFrame::World => world.normal(),
        NormalFrame::Local => triangle.normal(),
    };
    let penetration = radius - distance_sq.sqrt();
    // sqrt of a rounded radius² can land one step above the radius.
    let penetration = if penetration < S::zero() {
        S::zero()
    } else {
        penetration
    };

    Some(Contact {
        point,
        point_on_triangle: point,
        point_on_sphere: center - normal * radius,
        normal,
        penetration,
    })
}
