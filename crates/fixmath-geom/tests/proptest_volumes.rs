// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use fixmath_core::{Fix64, Mat4, Vec3};
use fixmath_geom::{BoundingBox, BoundingFrustum, BoundingSphere, ContainmentType};
use proptest::collection::vec;
use proptest::prelude::*;
use proptest::test_runner::{Config as PropConfig, RngAlgorithm, TestRng, TestRunner};

const SEED_BYTES: [u8; 32] = [
    0x47, 0x45, 0x4f, 0x4d, 0x2d, 0x56, 0x4f, 0x4c, 0x55, 0x4d, 0x45, 0x53, 0x00, 0x01, 0x02, 0x03,
    0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, 0x10, 0x11, 0x12, 0x13,
];

fn runner() -> TestRunner {
    TestRunner::new_with_rng(
        PropConfig::default(),
        TestRng::from_seed(RngAlgorithm::ChaCha, &SEED_BYTES),
    )
}

/// Points with components in `[-100, 100]` at full raw resolution.
fn point() -> impl Strategy<Value = Vec3> {
    let c = -(100_i64 << 32)..=(100_i64 << 32);
    (c.clone(), c.clone(), c).prop_map(|(x, y, z)| {
        Vec3::new(Fix64::from_raw(x), Fix64::from_raw(y), Fix64::from_raw(z))
    })
}

fn sphere() -> impl Strategy<Value = BoundingSphere> {
    (point(), 0_i64..(50_i64 << 32))
        .prop_map(|(center, r)| BoundingSphere::new(center, Fix64::from_raw(r)))
}

#[test]
fn box_from_points_contains_every_point() {
    runner()
        .run(&vec(point(), 1..32), |points| {
            let bounds = BoundingBox::from_points(&points).unwrap();
            for p in &points {
                prop_assert_eq!(bounds.contains_point(p), ContainmentType::Contains);
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn box_point_test_is_binary() {
    runner()
        .run(&(point(), point(), point()), |(a, b, p)| {
            let bounds = BoundingBox::new(a.min(&b), a.max(&b));
            prop_assert_ne!(bounds.contains_point(&p), ContainmentType::Intersects);
            Ok(())
        })
        .unwrap();
}

#[test]
fn ritter_sphere_encloses_every_point() {
    runner()
        .run(&vec(point(), 1..32), |points| {
            let sphere = BoundingSphere::from_points(&points).unwrap();
            for p in &points {
                let slack = (sphere.radius - p.distance(&sphere.center)).to_f64();
                prop_assert!(slack >= -1e-6, "point {:?} outside by {}", p, slack);
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn merged_sphere_encloses_both() {
    runner()
        .run(&(sphere(), sphere()), |(a, b)| {
            prop_assert_eq!(a.merged(&a), a);
            let m = a.merged(&b);
            for s in [a, b] {
                let slack = (m.radius - (s.center.distance(&m.center) + s.radius)).to_f64();
                prop_assert!(slack >= -1e-6, "{:?} escapes {:?} by {}", s, m, slack);
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn orthographic_frustum_classifies_grid_points() {
    let sixteen = Fix64::from_int(16);
    let frustum = BoundingFrustum::new(
        Mat4::orthographic(sixteen, sixteen, Fix64::TWO, Fix64::from_int(10)).unwrap(),
    );
    let coord = -12_i32..=12;
    runner()
        .run(&(coord.clone(), coord.clone(), coord), |(x, y, z)| {
            let p = Vec3::from_ints(x, y, z);
            let inside = x.abs() <= 8 && y.abs() <= 8 && (-10..=-2).contains(&z);
            let expected = if inside {
                ContainmentType::Contains
            } else {
                ContainmentType::Disjoint
            };
            prop_assert_eq!(frustum.contains_point(&p), expected);
            Ok(())
        })
        .unwrap();
}
