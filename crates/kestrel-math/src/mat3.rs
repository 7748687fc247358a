// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::scalar::{F32Scalar, Scalar};
use crate::vec3::Vec3;
use crate::EPSILON;

/// Column‑major 3×3 matrix used as a rigid-body orientation.
///
/// - Maps a local-space offset into world space: `world = M · local`.
/// - Stored column by column; `at(row, col)` reads `data[col * 3 + row]`.
/// - Nothing enforces orthonormality; callers building orientations from
///   arbitrary data should go through [`Mat3::from_quat`].
///
/// # Examples
/// ```
/// use kestrel_math::{F32Scalar, Mat3, Vec3};
/// // 90° about +Z: X maps to Y.
/// let r: Mat3<F32Scalar> = Mat3::from_rows_f32([
///     [0.0, -1.0, 0.0],
///     [1.0, 0.0, 0.0],
///     [0.0, 0.0, 1.0],
/// ]);
/// let v = r.transform(&Vec3::from_f32(1.0, 0.0, 0.0));
/// assert_eq!(v.to_f32_array(), [0.0, 1.0, 0.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3<S = F32Scalar> {
    data: [S; 9],
}

impl<S: Scalar> Mat3<S> {
    /// Creates a matrix from column-major array data.
    pub const fn new(data: [S; 9]) -> Self {
        Self { data }
    }

    /// Returns the identity matrix.
    pub fn identity() -> Self {
        let (o, z) = (S::one(), S::zero());
        Self::new([
            o, z, z, // col 0
            z, o, z, // col 1
            z, z, o, // col 2
        ])
    }

    /// Builds a matrix from three column vectors.
    pub fn from_cols(c0: Vec3<S>, c1: Vec3<S>, c2: Vec3<S>) -> Self {
        let [a, b, c] = c0.to_array();
        let [d, e, f] = c1.to_array();
        let [g, h, i] = c2.to_array();
        Self::new([a, b, c, d, e, f, g, h, i])
    }

    /// Builds a matrix from rows (the layout humans usually write down).
    pub fn from_rows(rows: [[S; 3]; 3]) -> Self {
        let [r0, r1, r2] = rows;
        Self::new([
            r0[0], r1[0], r2[0], // col 0
            r0[1], r1[1], r2[1], // col 1
            r0[2], r1[2], r2[2], // col 2
        ])
    }

    /// Builds a matrix from `f32` rows converted into the lane.
    pub fn from_rows_f32(rows: [[f32; 3]; 3]) -> Self {
        Self::from_rows(rows.map(|row| row.map(S::from_f32)))
    }

    /// Rotation matrix from a quaternion `(x, y, z, w)`.
    ///
    /// The quaternion is normalised first; a norm ≤ `EPSILON` yields the
    /// identity so a zero quaternion never produces a singular orientation.
    pub fn from_quat(x: S, y: S, z: S, w: S) -> Self {
        let len = (x * x + y * y + z * z + w * w).sqrt();
        if len <= S::from_f32(EPSILON) {
            return Self::identity();
        }
        let inv = S::one() / len;
        let (x, y, z, w) = (x * inv, y * inv, z * inv, w * inv);
        let two = S::one() + S::one();
        let one = S::one();

        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        Self::new([
            one - two * (yy + zz),
            two * (xy + wz),
            two * (xz - wy),
            two * (xy - wz),
            one - two * (xx + zz),
            two * (yz + wx),
            two * (xz + wy),
            two * (yz - wx),
            one - two * (xx + yy),
        ])
    }

    /// Returns the matrix as a column-major array.
    pub fn to_array(self) -> [S; 9] {
        self.data
    }

    /// Element at `row`, `col` (both in `0..3`).
    ///
    /// # Panics
    /// Panics if `row` or `col` is 3 or more.
    pub fn at(&self, row: usize, col: usize) -> S {
        assert!(row < 3 && col < 3, "Mat3 index ({row}, {col}) out of range");
        self.data[col * 3 + row]
    }

    /// Column `col` as a vector.
    ///
    /// # Panics
    /// Panics if `col` is 3 or more.
    pub fn col(&self, col: usize) -> Vec3<S> {
        Vec3::new(self.at(0, col), self.at(1, col), self.at(2, col))
    }

    /// Applies the matrix to a vector (`self · v`).
    pub fn transform(&self, v: &Vec3<S>) -> Vec3<S> {
        let (x, y, z) = (v.x(), v.y(), v.z());
        Vec3::new(
            self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z,
            self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z,
            self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z,
        )
    }

    /// Transposed matrix; the inverse of a pure rotation.
    pub fn transpose(&self) -> Self {
        let d = self.data;
        Self::new([d[0], d[3], d[6], d[1], d[4], d[7], d[2], d[5], d[8]])
    }

    /// Matrix product `self · rhs` (apply `rhs` first, then `self`).
    pub fn multiply(&self, rhs: &Self) -> Self {
        Self::from_cols(
            self.transform(&rhs.col(0)),
            self.transform(&rhs.col(1)),
            self.transform(&rhs.col(2)),
        )
    }
}

impl<S: Scalar> Default for Mat3<S> {
    fn default() -> Self {
        Self::identity()
    }
}
