// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! kestrel-math: deterministic numeric core for Kestrel narrow-phase queries.
//!
//! Geometry is written against the [`Scalar`] trait and instantiated with one
//! of two lanes:
//! - [`F32Scalar`] for tooling and single-machine simulation;
//! - [`DFix64`] (Q32.32 fixed point) when results must replay bit for bit
//!   across machines.
//!
//! No operation in this crate consults ambient state; identical inputs yield
//! identical outputs on every supported target.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]

/// Raw Q32.32 kernels and deterministic `f32` conversions.
pub mod fixed_q32_32;
mod mat3;
/// Scalar lanes (`Scalar`, `F32Scalar`, `DFix64`).
pub mod scalar;
mod vec3;

pub use mat3::Mat3;
pub use scalar::{DFix64, F32Scalar, Scalar};
pub use vec3::Vec3;

/// Degeneracy threshold shared by normalisation helpers.
///
/// Converted into the active lane with [`Scalar::from_f32`].
pub const EPSILON: f32 = 1e-6;
