// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]

use kestrel_math::{F32Scalar, Scalar};

#[test]
fn negative_zero_is_canonicalized() {
    let z = F32Scalar::new(-0.0);
    assert_eq!(z.value().to_bits(), 0);
    assert_eq!((F32Scalar::ZERO * F32Scalar::new(-1.0)).value().to_bits(), 0);
}

#[test]
fn nan_is_canonicalized() {
    let odd_nan = f32::from_bits(0xffc0_1234);
    assert_eq!(F32Scalar::new(odd_nan).value().to_bits(), 0x7fc0_0000);
    assert_eq!(F32Scalar::new(-1.0).sqrt().value().to_bits(), 0x7fc0_0000);
}

#[test]
fn subnormals_flush_to_zero() {
    let tiny = f32::from_bits(1);
    assert!(tiny.is_subnormal());
    assert_eq!(F32Scalar::new(tiny), F32Scalar::ZERO);
}

#[test]
fn sqrt_is_correctly_rounded() {
    assert_eq!(F32Scalar::new(0.25).sqrt(), F32Scalar::new(0.5));
    assert_eq!(F32Scalar::new(2.0).sqrt().value(), 2.0_f32.sqrt());
}

#[test]
fn ordering_is_total() {
    let a = F32Scalar::new(-1.0);
    let b = F32Scalar::new(0.0);
    let c = F32Scalar::new(f32::NAN);
    assert!(a < b);
    assert!(b < c);
    assert_eq!(c, F32Scalar::new(f32::NAN));
}
