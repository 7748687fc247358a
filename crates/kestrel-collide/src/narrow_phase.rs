// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use kestrel_math::{F32Scalar, Scalar, Vec3};
use tracing::{debug, trace};

use crate::config::NarrowPhaseConfig;
use crate::error::CollideError;
use crate::query::contact::Contact;
use crate::query::sphere_triangle::detect_with;
use crate::shapes::{Sphere, SupportMapping, Triangle};
use crate::types::transform::RigidTransform;

/// Discriminant of [`Shape`], used in diagnostics and errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// [`Sphere`].
    Sphere,
    /// [`Triangle`].
    Triangle,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sphere => "sphere",
            Self::Triangle => "triangle",
        })
    }
}

/// Closed set of collider shapes the narrow phase dispatches over.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape<S = F32Scalar> {
    /// Sphere collider.
    Sphere(Sphere<S>),
    /// Single triangle face.
    Triangle(Triangle<S>),
}

impl<S: Scalar> Shape<S> {
    /// Kind tag of this shape.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Sphere(_) => ShapeKind::Sphere,
            Self::Triangle(_) => ShapeKind::Triangle,
        }
    }
}

impl<S: Scalar> SupportMapping<S> for Shape<S> {
    fn support_center(&self) -> Vec3<S> {
        match self {
            Self::Sphere(s) => s.support_center(),
            Self::Triangle(t) => t.support_center(),
        }
    }
}

impl<S> From<Sphere<S>> for Shape<S> {
    fn from(value: Sphere<S>) -> Self {
        Self::Sphere(value)
    }
}

impl<S> From<Triangle<S>> for Shape<S> {
    fn from(value: Triangle<S>) -> Self {
        Self::Triangle(value)
    }
}

/// Contact between an ordered pair `(a, b)`.
///
/// `normal` points from `a` toward `b`; `point_a` lies on `a` and `point_b`
/// on `b`. `point` is the closest point on the triangle whichever side it is on.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PairContact<S = F32Scalar> {
    /// Reference contact point.
    pub point: Vec3<S>,
    /// Witness point on shape `a`.
    pub point_a: Vec3<S>,
    /// Witness point on shape `b`.
    pub point_b: Vec3<S>,
    /// Unit normal from `a` toward `b`.
    pub normal: Vec3<S>,
    /// Overlap depth (`>= 0`).
    pub penetration: S,
}

impl<S: Scalar> PairContact<S> {
    /// The same contact seen from the other shape: witnesses swap and the
    /// normal is negated. `point` is unchanged.
    #[must_use]
    pub fn flipped(self) -> Self {
        Self {
            point: self.point,
            point_a: self.point_b,
            point_b: self.point_a,
            normal: -self.normal,
            penetration: self.penetration,
        }
    }
}

impl<S: Scalar> From<Contact<S>> for PairContact<S> {
    /// Triangle is `a`, sphere is `b`.
    fn from(c: Contact<S>) -> Self {
        Self {
            point: c.point,
            point_a: c.point_on_triangle,
            point_b: c.point_on_sphere,
            normal: c.normal,
            penetration: c.penetration,
        }
    }
}

/// Shape-pair dispatcher.
///
/// Routes each ordered pair to its contact routine. Supported pairs:
/// `(Triangle, Sphere)` and `(Sphere, Triangle)`; every other pair is an
/// [`CollideError::UnsupportedPair`]. The dispatcher holds only its config,
/// so one instance may serve many threads.
#[derive(Debug, Clone, Default)]
pub struct NarrowPhase {
    config: NarrowPhaseConfig,
}

impl NarrowPhase {
    /// Creates a dispatcher with the given policy.
    pub fn new(config: NarrowPhaseConfig) -> Self {
        Self { config }
    }

    /// Active policy.
    pub fn config(&self) -> &NarrowPhaseConfig {
        &self.config
    }

    /// Collides `a` placed by `ta` with `b` placed by `tb`.
    ///
    /// `Ok(None)` means the pair is supported but not touching.
    pub fn collide<S: Scalar>(
        &self,
        a: &Shape<S>,
        ta: &RigidTransform<S>,
        b: &Shape<S>,
        tb: &RigidTransform<S>,
    ) -> Result<Option<PairContact<S>>, CollideError> {
        trace!(a = %a.kind(), b = %b.kind(), "narrow phase pair");
        match (a, b) {
            (Shape::Triangle(t), Shape::Sphere(s)) => {
                Ok(detect_with(&self.config, t, s, ta, tb).map(PairContact::from))
            }
            (Shape::Sphere(s), Shape::Triangle(t)) => Ok(detect_with(&self.config, t, s, tb, ta)
                .map(PairContact::from)
                .map(PairContact::flipped)),
            _ => {
                debug!(a = %a.kind(), b = %b.kind(), "no routine for shape pair");
                Err(CollideError::UnsupportedPair {
                    a: a.kind(),
                    b: b.kind(),
                })
            }
        }
    }
}
