// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use proptest::prelude::*;
use proptest::test_runner::{Config as PropConfig, RngAlgorithm, TestRng, TestRunner};

use kestrel_collide::{closest_point, closest_point_with_region, TriangleRegion};
use kestrel_math::{DFix64, F32Scalar, Scalar, Vec3};

// Re-run with another seed locally via PROPTEST_SEED, or edit SEED_BYTES.
const SEED_BYTES: [u8; 32] = [
    0x4b, 0x65, 0x73, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0,
];

const SAMPLES: u16 = 24;

fn runner() -> TestRunner {
    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &SEED_BYTES);
    TestRunner::new_with_rng(
        PropConfig {
            cases: 128,
            ..PropConfig::default()
        },
        rng,
    )
}

fn v<S: Scalar>(p: [f32; 3]) -> Vec3<S> {
    Vec3::from_f32(p[0], p[1], p[2])
}

fn dist<S: Scalar>(a: &Vec3<S>, b: &Vec3<S>) -> f32 {
    (*a - *b).length().to_f32()
}

fn point3(range: f32) -> impl Strategy<Value = [f32; 3]> {
    prop::array::uniform3(-range..range)
}

fn well_shaped<S: Scalar>(a: &Vec3<S>, b: &Vec3<S>, c: &Vec3<S>) -> bool {
    (*b - *a).cross(&(*c - *a)).length().to_f32() > 0.5
}

fn no_sampled_point_is_closer<S: Scalar>(vertex_range: f32) {
    let strategy = (
        point3(vertex_range),
        point3(vertex_range),
        point3(vertex_range),
        point3(2.0 * vertex_range),
    );
    runner()
        .run(&strategy, |(a, b, c, p)| {
            let (a, b, c, p) = (v::<S>(a), v::<S>(b), v::<S>(c), v::<S>(p));
            prop_assume!(well_shaped(&a, &b, &c));

            let q = closest_point(&p, &a, &b, &c);
            let best = dist(&p, &q);
            let tol = 1e-4 * (1.0 + best);

            let n = SAMPLES;
            for i in 0..=n {
                for j in 0..=(n - i) {
                    let s = S::from_f32(f32::from(i) / f32::from(n));
                    let t = S::from_f32(f32::from(j) / f32::from(n));
                    let sample = a + (b - a) * s + (c - a) * t;
                    let d = dist(&p, &sample);
                    prop_assert!(
                        best <= d + tol,
                        "sample {:?} at {} beats {:?} at {}",
                        sample.to_f32_array(),
                        d,
                        q.to_f32_array(),
                        best
                    );
                }
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn no_sampled_point_of_the_triangle_is_closer() {
    no_sampled_point_is_closer::<F32Scalar>(4.0);
}

#[test]
fn no_sampled_point_of_the_triangle_is_closer_in_fixed_point() {
    // Smaller vertex range keeps the reciprocal of the squared area within
    // the fixed-point lane's relative precision.
    no_sampled_point_is_closer::<DFix64>(2.0);
}

#[test]
fn projections_inside_the_face_are_returned_unchanged() {
    let strategy = (point3(4.0), point3(4.0), point3(4.0), 0.05f32..0.9, 0.05f32..0.9, -3.0f32..3.0);
    runner()
        .run(&strategy, |(a, b, c, s, t, lift)| {
            let (a, b, c) = (v::<F32Scalar>(a), v(b), v(c));
            prop_assume!(well_shaped(&a, &b, &c));
            prop_assume!(s + t < 0.95);

            let (s, t) = (F32Scalar::new(s), F32Scalar::new(t));
            let inside = a + (b - a) * s + (c - a) * t;
            let normal = (b - a).cross(&(c - a)).normalize();
            let p = inside + normal * F32Scalar::new(lift);

            let (q, region) = closest_point_with_region(&p, &a, &b, &c);
            prop_assert_eq!(region, TriangleRegion::Face);
            prop_assert!(dist(&q, &inside) <= 1e-3);
            Ok(())
        })
        .unwrap();
}

#[test]
fn vertex_queries_return_the_vertex_exactly() {
    let strategy = (point3(4.0), point3(4.0), point3(4.0));
    runner()
        .run(&strategy, |(a, b, c)| {
            let (a, b, c) = (v::<F32Scalar>(a), v(b), v(c));
            prop_assume!(well_shaped(&a, &b, &c));
            prop_assert_eq!(closest_point(&a, &a, &b, &c), a);
            prop_assert_eq!(closest_point(&b, &a, &b, &c), b);
            prop_assert_eq!(closest_point(&c, &a, &b, &c), c);
            Ok(())
        })
        .unwrap();
}
