// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use kestrel_math::{Scalar, Vec3};

/// Voronoi feature of the triangle `(a, b, c)` that contains the closest point.
///
/// Regions are tested in declaration order and the first match wins, so a
/// query that sits exactly on a shared boundary always reports the earlier
/// feature (e.g. a point on the shared edge of `VertexB` and `EdgeAb` reports
/// `VertexB`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TriangleRegion {
    /// Closest to vertex `a`.
    VertexA,
    /// Closest to vertex `b`.
    VertexB,
    /// Closest to the interior of edge `ab`.
    EdgeAb,
    /// Closest to vertex `c`.
    VertexC,
    /// Closest to the interior of edge `ac`.
    EdgeAc,
    /// Closest to the interior of edge `bc`.
    EdgeBc,
    /// Projection falls inside the face.
    Face,
}

/// Returns the point of the solid triangle `(a, b, c)` closest to `point`.
///
/// All inputs must share one coordinate frame. The triangle must not be
/// degenerate (zero area); callers guard that with
/// [`crate::Triangle::is_degenerate`].
///
/// # Examples
/// ```
/// use kestrel_collide::closest_point;
/// use kestrel_math::{F32Scalar, Vec3};
/// let v = |x, y, z| Vec3::<F32Scalar>::from_f32(x, y, z);
/// let q = closest_point(&v(0.25, 0.25, 3.0), &v(0.0, 0.0, 0.0), &v(1.0, 0.0, 0.0), &v(0.0, 1.0, 0.0));
/// assert_eq!(q.to_f32_array(), [0.25, 0.25, 0.0]);
/// ```
pub fn closest_point<S: Scalar>(point: &Vec3<S>, a: &Vec3<S>, b: &Vec3<S>, c: &Vec3<S>) -> Vec3<S> {
    closest_point_with_region(point, a, b, c).0
}

/// Like [`closest_point`], also reporting which Voronoi region matched.
///
/// Comparisons are non-strict; the region order is part of the contract and
/// must not be rearranged.
pub fn closest_point_with_region<S: Scalar>(
    point: &Vec3<S>,
    a: &Vec3<S>,
    b: &Vec3<S>,
    c: &Vec3<S>,
) -> (Vec3<S>, TriangleRegion) {
    let zero = S::zero();

    let ab = *b - *a;
    let ac = *c - *a;
    let ap = *point - *a;
    let d1 = ab.dot(&ap);
    let d2 = ac.dot(&ap);
    if d1 <= zero && d2 <= zero {
        // barycentric (1, 0, 0)
        return (*a, TriangleRegion::VertexA);
    }

    let bp = *point - *b;
    let d3 = ab.dot(&bp);
    let d4 = ac.dot(&bp);
    if d3 >= zero && d4 <= d3 {
        // barycentric (0, 1, 0)
        return (*b, TriangleRegion::VertexB);
    }

    let vc = d1 * d4 - d3 * d2;
    if vc <= zero && d1 >= zero && d3 <= zero {
        let v = d1 / (d1 - d3);
        return (*a + ab * v, TriangleRegion::EdgeAb);
    }

    let cp = *point - *c;
    let d5 = ab.dot(&cp);
    let d6 = ac.dot(&cp);
    if d6 >= zero && d5 <= d6 {
        // barycentric (0, 0, 1)
        return (*c, TriangleRegion::VertexC);
    }

    let vb = d5 * d2 - d1 * d6;
    if vb <= zero && d2 >= zero && d6 <= zero {
        let w = d2 / (d2 - d6);
        return (*a + ac * w, TriangleRegion::EdgeAc);
    }

    let va = d3 * d6 - d5 * d4;
    let d4_minus_d3 = d4 - d3;
    let d5_minus_d6 = d5 - d6;
    if va <= zero && d4_minus_d3 >= zero && d5_minus_d6 >= zero {
        let w = d4_minus_d3 / (d4_minus_d3 + d5_minus_d6);
        return (*b + (*c - *b) * w, TriangleRegion::EdgeBc);
    }

    // One reciprocal, two products: replays must round exactly like this.
    let denom = S::one() / (va + vb + vc);
    let v = vb * denom;
    let w = vc * denom;
    (*a + ab * v + ac * w, TriangleRegion::Face)
}
