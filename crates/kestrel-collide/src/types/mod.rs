// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Placement types shared by shapes and queries.
//!
//! Determinism notes:
//! - Rotation is applied before translation, component sums in a fixed order.
//! - Nothing is cached: every query transforms its inputs afresh so results
//!   depend only on the arguments of that call.

#[doc = "Rigid transforms (orientation + position)."]
pub mod transform;
