// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use kestrel_math::{F32Scalar, Scalar, Vec3};

use super::SupportMapping;
use crate::types::transform::RigidTransform;

const FACE_PRECISION_STEPS: f32 = 1024.0;

/// One face of a triangle-mesh collider, in the mesh's local space.
///
/// Vertex order is significant: the winding `v0, v1, v2` fixes the sign of
/// [`Triangle::area_normal`], which is `(v0 − v1) × (v0 − v2)`. Permuting the
/// vertices flips every reported contact normal.
///
/// No degeneracy check happens at construction; see [`Triangle::is_degenerate`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle<S = F32Scalar> {
    vertices: [Vec3<S>; 3],
}

impl<S: Scalar> Triangle<S> {
    /// Creates a triangle from its three vertices in winding order.
    pub const fn new(v0: Vec3<S>, v1: Vec3<S>, v2: Vec3<S>) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Creates a triangle from `f32` vertex coordinates.
    pub fn from_f32(vertices: [[f32; 3]; 3]) -> Self {
        let [a, b, c] = vertices.map(|[x, y, z]| Vec3::from_f32(x, y, z));
        Self::new(a, b, c)
    }

    /// Vertices in winding order.
    pub fn vertices(&self) -> [Vec3<S>; 3] {
        self.vertices
    }

    /// Unnormalised face normal `(v0 − v1) × (v0 − v2)`; its length is twice the area.
    pub fn area_normal(&self) -> Vec3<S> {
        let [v0, v1, v2] = self.vertices;
        (v0 - v1).cross(&(v0 - v2))
    }

    /// Unit face normal, or zero for a degenerate triangle.
    pub fn normal(&self) -> Vec3<S> {
        self.area_normal().normalize()
    }

    /// True when the face is too small or thin to resolve in lane `S`.
    ///
    /// Two tests, either one rejects:
    /// - the area-normal length is at most `epsilon` (the length, because
    ///   `epsilon²` of a small epsilon rounds to zero in fixed point);
    /// - the squared area-normal length is at most [`Triangle::precision_floor`].
    ///   The closest-point face weights divide by this quantity, so below the
    ///   floor they carry no significant bits.
    pub fn is_degenerate(&self, epsilon: S) -> bool {
        let n = self.area_normal();
        n.length() <= epsilon || n.length_squared() <= Self::precision_floor()
    }

    /// Smallest squared area-normal length the lane resolves: `1024` steps of
    /// [`Scalar::resolution`] (`2^-22` for `DFix64`), which keeps the face
    /// weights accurate to about one part in a thousand.
    pub fn precision_floor() -> S {
        S::resolution() * S::from_f32(FACE_PRECISION_STEPS)
    }

    /// The same face with every vertex carried into world space.
    pub fn transformed(&self, transform: &RigidTransform<S>) -> Self {
        Self {
            vertices: self.vertices.map(|v| transform.transform_point(&v)),
        }
    }
}

impl<S: Scalar> SupportMapping<S> for Triangle<S> {
    /// Centroid of the three vertices.
    fn support_center(&self) -> Vec3<S> {
        let [v0, v1, v2] = self.vertices;
        let three = S::one() + S::one() + S::one();
        (v0 + v1 + v2) * (S::one() / three)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kestrel_math::DFix64;

    fn unit() -> Triangle<DFix64> {
        Triangle::from_f32([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])
    }

    #[test]
    fn winding_sets_normal_sign() {
        assert_eq!(unit().normal().to_f32_array(), [0.0, 0.0, 1.0]);
        let [a, b, c] = unit().vertices();
        let flipped = Triangle::new(a, c, b);
        assert_eq!(flipped.normal().to_f32_array(), [0.0, 0.0, -1.0]);
    }

    #[test]
    fn collinear_vertices_are_degenerate() {
        let line: Triangle<DFix64> =
            Triangle::from_f32([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]]);
        let eps = DFix64::from_f32(1e-6);
        assert!(line.is_degenerate(eps));
        assert!(!unit().is_degenerate(eps));
        assert_eq!(line.normal(), Vec3::zero());
    }

    #[test]
    fn faces_below_the_fixed_lane_floor_are_degenerate() {
        let eps = DFix64::from_f32(1e-6);
        let tiny: Triangle<DFix64> =
            Triangle::from_f32([[0.0, 0.0, 0.0], [0.005, 0.0, 0.0], [0.0, 0.005, 0.0]]);
        // Area-normal length 2.5e-5 clears epsilon; its square does not clear the floor.
        assert!(tiny.area_normal().length() > eps);
        assert!(tiny.is_degenerate(eps));

        let small: Triangle<DFix64> =
            Triangle::from_f32([[0.0, 0.0, 0.0], [0.05, 0.0, 0.0], [0.0, 0.05, 0.0]]);
        assert!(!small.is_degenerate(eps));

        let tiny_f32: Triangle<F32Scalar> =
            Triangle::from_f32([[0.0, 0.0, 0.0], [0.005, 0.0, 0.0], [0.0, 0.005, 0.0]]);
        assert!(!tiny_f32.is_degenerate(F32Scalar::new(1e-6)));
    }

    #[test]
    fn centroid_is_support_center() {
        let t: Triangle<DFix64> =
            Triangle::from_f32([[0.0, 0.0, 0.0], [3.0, 0.0, 0.0], [0.0, 3.0, 0.0]]);
        let c = t.support_center().to_f32_array();
        assert!((c[0] - 1.0).abs() < 1e-6 && (c[1] - 1.0).abs() < 1e-6 && c[2] == 0.0);
    }
}
