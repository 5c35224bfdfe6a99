// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]

use fixmath_core::{Fix64, Mat4, MathError, Quat, Vec2, Vec3, Vec4, EPSILON};

fn fx(v: f32) -> Fix64 {
    Fix64::from_f32(v)
}

fn fifths(n: i32) -> Fix64 {
    Fix64::from_int(n).div_int(5).unwrap_or_default()
}

fn approx_eq3(a: Vec3, b: Vec3, tol: f64) {
    for (x, y) in a.to_array().into_iter().zip(b.to_array()) {
        let err = (x.to_f64() - y.to_f64()).abs();
        assert!(err <= tol, "{a:?} vs {b:?}: err={err}");
    }
}

#[test]
fn add_sub_scale_dot_cross() {
    let a = Vec3::from_ints(1, 2, 3);
    let b = Vec3::from_ints(4, -5, 6);
    assert_eq!(a.add(&b), Vec3::from_ints(5, -3, 9));
    assert_eq!(a.sub(&b), Vec3::from_ints(-3, 7, -3));
    assert_eq!(a.mul(&b), Vec3::from_ints(4, -10, 18));
    assert_eq!(a.scale(Fix64::TWO), Vec3::from_ints(2, 4, 6));
    assert_eq!(a.negate(), Vec3::from_ints(-1, -2, -3));
    assert_eq!(a.dot(&b), Fix64::from_int(12));
    assert_eq!(Vec3::UNIT_X.cross(&Vec3::UNIT_Y), Vec3::UNIT_Z);
    assert_eq!(Vec3::UNIT_Y.cross(&Vec3::UNIT_X), Vec3::UNIT_Z.negate());
    assert_eq!(a.cross(&a), Vec3::ZERO);
}

#[test]
fn operators_match_named_methods() {
    let a = Vec3::from_ints(1, 2, 3);
    let b = Vec3::from_ints(4, -5, 6);
    assert_eq!(a + b, a.add(&b));
    assert_eq!(a - b, a.sub(&b));
    assert_eq!(a * b, a.mul(&b));
    assert_eq!(a * Fix64::TWO, a.scale(Fix64::TWO));
    assert_eq!(Fix64::TWO * a, a.scale(Fix64::TWO));
    assert_eq!(-a, a.negate());
    assert_eq!(Vec3::from_ints(2, 4, 6) / Fix64::TWO, a);

    let mut c = a;
    c += b;
    c -= a;
    c *= Fix64::TWO;
    c /= Fix64::TWO;
    assert_eq!(c, b);
}

#[test]
fn division_by_zero_is_reported() {
    let a = Vec2::from_ints(1, 2);
    assert_eq!(a.div_scalar(Fix64::ZERO), Err(MathError::DivideByZero));
    assert_eq!(
        a.divide(&Vec2::new(Fix64::ONE, Fix64::ZERO)),
        Err(MathError::DivideByZero)
    );
    assert_eq!(
        a.divide(&Vec2::from_ints(2, 4)),
        Ok(Vec2::new(Fix64::HALF, Fix64::HALF))
    );
}

#[test]
fn lengths_and_distances() {
    let v = Vec3::from_ints(3, 4, 12);
    assert_eq!(v.length_squared(), Fix64::from_int(169));
    assert_eq!(v.length(), Fix64::from_int(13));
    assert_eq!(Vec2::from_ints(3, 4).length(), Fix64::from_int(5));
    let a = Vec4::new(Fix64::ONE, Fix64::ONE, Fix64::ONE, Fix64::ONE);
    assert_eq!(a.distance(&Vec4::ZERO), Fix64::TWO);
    assert_eq!(a.distance_squared(&Vec4::ZERO), Fix64::from_int(4));
}

#[test]
fn long_vectors_measure_past_squared_saturation() {
    let v = Vec3::from_ints(60_000, 80_000, 0);
    assert_eq!(v.length_squared(), Fix64::MAX);
    assert_eq!(v.length(), Fix64::from_int(100_000));

    let a = Vec3::from_ints(-30_000, 0, 5);
    let b = Vec3::from_ints(30_000, 80_000, 5);
    assert_eq!(a.distance(&b), Fix64::from_int(100_000));
    assert_eq!(Vec2::from_ints(0, -70_000).length(), Fix64::from_int(70_000));
}

#[test]
fn normalize_yields_unit_length() {
    let unit = Vec3::new(fifths(3), fifths(4), Fix64::ZERO);
    let v = Vec3::from_ints(3, 4, 0).normalize();
    assert_eq!(v, unit);
    let err = (v.length() - Fix64::ONE).abs();
    assert!(err <= EPSILON);

    // Large components would overflow a naive squared length.
    let big = Vec3::from_ints(60_000, 80_000, 0).normalize();
    assert_eq!(big, unit);

    assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
    let mut w = Vec2::from_ints(0, -7);
    w.normalize_mut();
    assert_eq!(w, Vec2::new(Fix64::ZERO, Fix64::NEG_ONE));
}

#[test]
fn component_wise_helpers() {
    let a = Vec3::new(fx(1.5), fx(-2.5), fx(0.25));
    let b = Vec3::from_ints(1, -1, 1);
    assert_eq!(a.min(&b), Vec3::new(Fix64::ONE, fx(-2.5), fx(0.25)));
    assert_eq!(a.max(&b), Vec3::new(fx(1.5), Fix64::NEG_ONE, Fix64::ONE));
    assert_eq!(a.abs(), Vec3::new(fx(1.5), fx(2.5), fx(0.25)));
    assert_eq!(a.floor(), Vec3::from_ints(1, -3, 0));
    assert_eq!(a.ceiling(), Vec3::from_ints(2, -2, 1));
    assert_eq!(a.round(), Vec3::from_ints(2, -2, 0));
    assert_eq!(
        a.clamp(&Vec3::splat(Fix64::NEG_ONE), &Vec3::splat(Fix64::ONE)),
        Vec3::new(Fix64::ONE, Fix64::NEG_ONE, fx(0.25))
    );
}

#[test]
fn interpolation_endpoints_are_exact() {
    let a = Vec3::from_ints(0, 10, -4);
    let b = Vec3::from_ints(8, 2, 4);
    assert_eq!(a.lerp(&b, Fix64::ZERO), a);
    assert_eq!(a.lerp(&b, Fix64::ONE), b);
    assert_eq!(a.lerp(&b, Fix64::HALF), Vec3::from_ints(4, 6, 0));
    assert_eq!(a.smooth_step(&b, Fix64::HALF), Vec3::from_ints(4, 6, 0));
    assert_eq!(a.smooth_step(&b, Fix64::from_int(7)), b);
    assert_eq!(a.smooth_step(&b, Fix64::NEG_ONE), a);

    let t1 = Vec3::from_ints(1, 1, 1);
    let t2 = Vec3::from_ints(-3, 0, 2);
    assert_eq!(Vec3::hermite(&a, &t1, &b, &t2, Fix64::ZERO), a);
    assert_eq!(Vec3::hermite(&a, &t1, &b, &t2, Fix64::ONE), b);

    let (p0, p1, p2, p3) = (
        Vec2::from_ints(0, 0),
        Vec2::from_ints(1, 1),
        Vec2::from_ints(2, 0),
        Vec2::from_ints(3, 1),
    );
    assert_eq!(Vec2::catmull_rom(&p0, &p1, &p2, &p3, Fix64::ZERO), p1);
    assert_eq!(Vec2::catmull_rom(&p0, &p1, &p2, &p3, Fix64::ONE), p2);
}

#[test]
fn barycentric_weights() {
    let v1 = Vec2::from_ints(0, 0);
    let v2 = Vec2::from_ints(4, 0);
    let v3 = Vec2::from_ints(0, 8);
    assert_eq!(Vec2::barycentric(&v1, &v2, &v3, Fix64::ZERO, Fix64::ZERO), v1);
    assert_eq!(Vec2::barycentric(&v1, &v2, &v3, Fix64::ONE, Fix64::ZERO), v2);
    assert_eq!(
        Vec2::barycentric(&v1, &v2, &v3, Fix64::HALF, Fix64::HALF),
        Vec2::from_ints(2, 4)
    );
}

#[test]
fn reflect_about_normal() {
    let incoming = Vec3::from_ints(1, -1, 0);
    assert_eq!(incoming.reflect(&Vec3::UNIT_Y), Vec3::from_ints(1, 1, 0));
    assert_eq!(
        Vec2::from_ints(3, -2).reflect(&Vec2::UNIT_Y),
        Vec2::from_ints(3, 2)
    );
}

#[test]
fn points_take_translation_normals_do_not() {
    let m = Mat4::translation(Vec3::from_ints(5, 6, 7));
    let p = Vec3::from_ints(1, 2, 3);
    assert_eq!(p.transform(&m), Vec3::from_ints(6, 8, 10));
    assert_eq!(p.transform_normal(&m), p);
    assert_eq!(
        Vec2::from_ints(1, 2).transform(&m),
        Vec2::from_ints(6, 8)
    );
    assert_eq!(Vec2::from_ints(1, 2).transform_normal(&m), Vec2::from_ints(1, 2));

    let h = Vec4::from_vec3(p, Fix64::ONE).transform(&m);
    assert_eq!(h, Vec4::from_vec3(Vec3::from_ints(6, 8, 10), Fix64::ONE));
    let d = Vec4::from_vec3(p, Fix64::ZERO).transform(&m);
    assert_eq!(d.xyz(), p);
}

#[test]
fn quaternion_transform_matches_matrix() {
    let q = Quat::from_axis_angle(Vec3::UNIT_Z, Fix64::PI_OVER_2);
    let v = Vec3::from_ints(2, 0, 5);
    approx_eq3(v.transform_quat(&q), Vec3::from_ints(0, 2, 5), 1e-8);
    approx_eq3(v.transform_quat(&q), v.transform(&q.to_mat4()), 1e-8);

    let w = Vec4::new(Fix64::ONE, Fix64::ZERO, Fix64::ZERO, Fix64::from_int(9));
    let r = w.transform_quat(&q);
    assert_eq!(r.w, Fix64::from_int(9));
    approx_eq3(r.xyz(), Vec3::UNIT_Y, 1e-8);
}

#[test]
fn array_conversions() {
    let v = Vec4::from([Fix64::ONE, Fix64::TWO, Fix64::ZERO, Fix64::NEG_ONE]);
    assert_eq!(v.y, Fix64::TWO);
    let arr: [Fix64; 4] = v.into();
    assert_eq!(arr, v.to_array());
    assert_eq!(Vec4::from_vec2(Vec2::from_ints(1, 2), Fix64::ZERO, Fix64::ONE).xyz(), Vec3::from_ints(1, 2, 0));
}
