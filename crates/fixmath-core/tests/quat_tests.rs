// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use fixmath_core::{Fix64, Mat4, MathError, Quat, Vec3};

fn fx(v: f32) -> Fix64 {
    Fix64::from_f32(v)
}

fn approx_eq_quat(a: &Quat, b: &Quat, tol: f64) {
    for (x, y) in a.to_array().into_iter().zip(b.to_array()) {
        let err = (x.to_f64() - y.to_f64()).abs();
        assert!(err <= tol, "{a:?} vs {b:?}: err={err}");
    }
}

fn approx_eq_mat(a: &Mat4, b: &Mat4, tol: f64) {
    for (x, y) in a.to_array().into_iter().zip(b.to_array()) {
        let err = (x.to_f64() - y.to_f64()).abs();
        assert!(err <= tol, "{x} vs {y}: err={err}");
    }
}

#[test]
fn identity_and_degenerate_axes() {
    assert_eq!(Quat::default(), Quat::IDENTITY);
    assert_eq!(Quat::identity().to_array(), [Fix64::ZERO, Fix64::ZERO, Fix64::ZERO, Fix64::ONE]);
    assert_eq!(Quat::from_axis_angle(Vec3::ZERO, fx(1.0)), Quat::IDENTITY);
    let v = Vec3::from_ints(3, -4, 5);
    assert_eq!(Quat::IDENTITY.rotate(&v), v);
}

#[test]
fn half_turn_about_z_is_exact() {
    let q = Quat::from_axis_angle(Vec3::UNIT_Z, Fix64::PI);
    assert_eq!(q, Quat::new(Fix64::ZERO, Fix64::ZERO, Fix64::ONE, Fix64::ZERO));
    assert_eq!(q.rotate(&Vec3::UNIT_X), Vec3::UNIT_X.negate());
}

#[test]
fn hamilton_product_and_operators() {
    let i = Quat::new(Fix64::ONE, Fix64::ZERO, Fix64::ZERO, Fix64::ZERO);
    let j = Quat::new(Fix64::ZERO, Fix64::ONE, Fix64::ZERO, Fix64::ZERO);
    let k = Quat::new(Fix64::ZERO, Fix64::ZERO, Fix64::ONE, Fix64::ZERO);
    assert_eq!(i.multiply(&j), k);
    assert_eq!(j.multiply(&i), k.negate());
    assert_eq!(i * j, k);
    assert_eq!(i + j, Quat::new(Fix64::ONE, Fix64::ONE, Fix64::ZERO, Fix64::ZERO));
    assert_eq!(i - i, Quat::new(Fix64::ZERO, Fix64::ZERO, Fix64::ZERO, Fix64::ZERO));
    assert_eq!(-i, i.negate());
    assert_eq!(i * Fix64::TWO, i.scale(Fix64::TWO));
    let mut m = i;
    m *= j;
    assert_eq!(m, k);
    assert_eq!(Quat::from([Fix64::ONE, Fix64::ZERO, Fix64::ZERO, Fix64::ZERO]), i);
}

#[test]
fn concatenate_matches_matrix_product() {
    let first = Quat::from_axis_angle(Vec3::UNIT_Y, fx(0.9));
    let second = Quat::from_axis_angle(Vec3::UNIT_X, fx(-0.5));
    let combined = Quat::concatenate(&first, &second);
    approx_eq_mat(
        &combined.to_mat4(),
        &(first.to_mat4() * second.to_mat4()),
        1e-8,
    );
}

#[test]
fn inverse_and_divide() {
    let q = Quat::from_axis_angle(Vec3::from_ints(1, 2, 3), fx(0.8)).scale(Fix64::TWO);
    let inv = q.inverse().unwrap();
    approx_eq_quat(&q.multiply(&inv), &Quat::IDENTITY, 1e-8);
    approx_eq_quat(&q.divide(&q).unwrap(), &Quat::IDENTITY, 1e-8);

    let zero = Quat::new(Fix64::ZERO, Fix64::ZERO, Fix64::ZERO, Fix64::ZERO);
    assert_eq!(zero.inverse(), Err(MathError::DivideByZero));
    assert_eq!(q.divide(&zero), Err(MathError::DivideByZero));
}

#[test]
fn normalize_and_conjugate() {
    let q = Quat::new(Fix64::ZERO, Fix64::from_int(3), Fix64::ZERO, Fix64::from_int(4));
    assert_eq!(q.length(), Fix64::from_int(5));
    let n = q.normalize();
    let fifths = |k: i32| Fix64::from_int(k).div_int(5).unwrap();
    assert_eq!(n, Quat::new(Fix64::ZERO, fifths(3), Fix64::ZERO, fifths(4)));
    assert_eq!(q.conjugate(), Quat::new(Fix64::ZERO, Fix64::from_int(-3), Fix64::ZERO, Fix64::from_int(4)));
    let zero = Quat::new(Fix64::ZERO, Fix64::ZERO, Fix64::ZERO, Fix64::ZERO);
    assert_eq!(zero.normalize(), Quat::IDENTITY);
}

#[test]
fn slerp_endpoints_and_midpoint() {
    let a = Quat::IDENTITY;
    let b = Quat::from_axis_angle(Vec3::UNIT_Y, Fix64::PI_OVER_2);
    approx_eq_quat(&a.slerp(&b, Fix64::ZERO), &a, 1e-9);
    approx_eq_quat(&a.slerp(&b, Fix64::ONE), &b, 1e-8);
    let mid = a.slerp(&b, Fix64::HALF);
    approx_eq_quat(&mid, &Quat::from_axis_angle(Vec3::UNIT_Y, Fix64::PI_OVER_4), 1e-8);
}

#[test]
fn slerp_takes_the_shorter_arc() {
    let a = Quat::IDENTITY;
    let b = Quat::from_axis_angle(Vec3::UNIT_Y, Fix64::PI_OVER_2);
    assert_eq!(a.slerp(&b.negate(), Fix64::HALF), a.slerp(&b, Fix64::HALF));
    // Nearly parallel inputs blend linearly.
    assert_eq!(a.slerp(&a, fx(0.3)), a);
}

#[test]
fn lerp_is_normalized() {
    let a = Quat::from_axis_angle(Vec3::UNIT_X, fx(0.2));
    let b = Quat::from_axis_angle(Vec3::UNIT_X, fx(1.4));
    let q = a.lerp(&b, fx(0.25));
    assert!((q.length().to_f64() - 1.0).abs() <= 1e-8);
    assert_eq!(a.lerp(&b.negate(), fx(0.25)), q);
}

#[test]
fn rotation_matrix_round_trip_covers_every_branch() {
    let cases = [
        (Vec3::UNIT_Y, fx(0.5)),  // positive trace
        (Vec3::UNIT_X, fx(3.0)),  // m11 largest
        (Vec3::UNIT_Y, fx(3.0)),  // m22 largest
        (Vec3::UNIT_Z, fx(-3.0)), // m33 largest
        (Vec3::from_ints(1, 1, 0), fx(2.5)),
    ];
    for (axis, angle) in cases {
        let q = Quat::from_axis_angle(axis, angle);
        let mut back = Quat::from_rotation_matrix(&q.to_mat4());
        if back.dot(&q) < Fix64::ZERO {
            back = back.negate();
        }
        approx_eq_quat(&back, &q, 1e-7);
    }
}

#[test]
fn yaw_pitch_roll_orders_roll_pitch_yaw() {
    let yaw = Quat::from_yaw_pitch_roll(fx(0.6), Fix64::ZERO, Fix64::ZERO);
    approx_eq_quat(&yaw, &Quat::from_axis_angle(Vec3::UNIT_Y, fx(0.6)), 1e-9);
    let combined = Quat::from_yaw_pitch_roll(fx(0.6), fx(0.3), fx(-0.2));
    let chained = Quat::concatenate(
        &Quat::concatenate(
            &Quat::from_axis_angle(Vec3::UNIT_Z, fx(-0.2)),
            &Quat::from_axis_angle(Vec3::UNIT_X, fx(0.3)),
        ),
        &Quat::from_axis_angle(Vec3::UNIT_Y, fx(0.6)),
    );
    approx_eq_quat(&combined, &chained, 1e-8);
}
