// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Geometric queries used by the narrow phase.
//!
//! `closest_point` is a leaf routine; `sphere_triangle` builds on it and is
//! the only producer of [`contact::Contact`].

#[doc = "Closest point on a solid triangle (Voronoi-region classification)."]
pub mod closest_point;
#[doc = "Contact bundle produced by sphere/triangle detection."]
pub mod contact;
#[doc = "Sphere vs. triangle contact generation."]
pub mod sphere_triangle;
