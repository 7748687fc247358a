// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

use crate::narrow_phase::ShapeKind;

/// Errors surfaced by shape construction and pair dispatch.
///
/// Contact queries themselves never fail: a pair either touches or it does
/// not. Errors are reserved for inputs the narrow phase refuses to process.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CollideError {
    /// A sphere radius was negative or not finite.
    #[error("invalid sphere radius {radius}: must be finite and non-negative")]
    InvalidRadius {
        /// The rejected radius, converted to `f32` for reporting.
        radius: f32,
    },
    /// No routine is registered for this ordered pair of shape kinds.
    #[error("unsupported shape pair: {a} vs {b}")]
    UnsupportedPair {
        /// Kind of the first shape.
        a: ShapeKind,
        /// Kind of the second shape.
        b: ShapeKind,
    },
}
