// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![doc = r"Narrow-phase collision for Kestrel.

This crate provides:
- Shapes (`Sphere`, `Triangle`) and rigid placement (`RigidTransform`).
- The closest point on a solid triangle (`query::closest_point`).
- Sphere vs. triangle contact generation (`query::sphere_triangle`).
- A shape-pair dispatch table (`NarrowPhase`) over the `Shape` tagged union.
- Narrow-phase configuration and its storage port (`config`).

Design notes:
- Deterministic: every routine is generic over `kestrel_math::Scalar`; bind it
  to `DFix64` for bit-exact replay or to `F32Scalar` for tooling.
- Pure: no routine keeps state between calls, so independent pairs may be
  processed from any number of threads.
- Single contact: the sphere/triangle pair produces at most one contact point.
"]

/// Narrow-phase configuration and the config storage port.
pub mod config;
mod error;
/// Shape-pair dispatch over the `Shape` tagged union.
pub mod narrow_phase;
/// Geometric queries (closest point, contact generation).
pub mod query;
/// Collision shapes and the support-mapping port.
pub mod shapes;
/// Foundational placement types.
pub mod types;

pub use config::{NarrowPhaseConfig, NormalFrame};
pub use error::CollideError;
pub use narrow_phase::{NarrowPhase, PairContact, Shape, ShapeKind};
pub use query::closest_point::{closest_point, closest_point_with_region, TriangleRegion};
pub use query::contact::Contact;
pub use query::sphere_triangle::{detect, detect_with};
pub use shapes::{Sphere, SupportMapping, Triangle};
pub use types::transform::RigidTransform;
