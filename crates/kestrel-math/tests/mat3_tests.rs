// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f32::consts::FRAC_1_SQRT_2;

use kestrel_math::{DFix64, F32Scalar, Mat3, Scalar, Vec3};

fn approx(a: [f32; 3], b: [f32; 3], tol: f32) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= tol)
}

#[test]
fn identity_is_neutral() {
    let m: Mat3<F32Scalar> = Mat3::identity();
    let p = Vec3::from_f32(1.5, -2.0, 3.25);
    assert_eq!(m.transform(&p), p);
    assert_eq!(m.multiply(&m), m);
}

#[test]
fn rows_and_cols_agree() {
    let m: Mat3<F32Scalar> =
        Mat3::from_rows_f32([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    assert_eq!(m.at(0, 2).value(), 3.0);
    assert_eq!(m.at(2, 0).value(), 7.0);
    assert_eq!(m.col(1).to_f32_array(), [2.0, 5.0, 8.0]);
    assert_eq!(m.transpose().at(0, 2).value(), 7.0);
}

#[test]
fn quarter_turn_quaternion_matches_matrix() {
    // 90° about +Z: (x, y, z, w) = (0, 0, sin 45°, cos 45°)
    let q: Mat3<F32Scalar> = Mat3::from_quat(
        F32Scalar::ZERO,
        F32Scalar::ZERO,
        F32Scalar::new(FRAC_1_SQRT_2),
        F32Scalar::new(FRAC_1_SQRT_2),
    );
    let out = q.transform(&Vec3::from_f32(1.0, 0.0, 0.0)).to_f32_array();
    assert!(approx(out, [0.0, 1.0, 0.0], 1e-6), "got {out:?}");
}

#[test]
fn zero_quaternion_yields_identity() {
    let z = DFix64::ZERO;
    assert_eq!(Mat3::from_quat(z, z, z, z), Mat3::<DFix64>::identity());
}

#[test]
fn rotation_composed_with_transpose_is_identity_on_fixed_lane() {
    let r: Mat3<DFix64> = Mat3::from_rows_f32([[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
    assert_eq!(r.multiply(&r.transpose()), Mat3::identity());
}

#[test]
#[should_panic(expected = "out of range")]
fn row_three_does_not_alias_the_next_column() {
    let m: Mat3<DFix64> = Mat3::identity();
    let _ = m.at(3, 0);
}
