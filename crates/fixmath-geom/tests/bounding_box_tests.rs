// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use fixmath_core::{Fix64, Mat4, MathError, Vec3};
use fixmath_geom::{BoundingBox, BoundingFrustum, BoundingSphere, ContainmentType, Plane, PlaneIntersectionType};

fn cube(half: i32) -> BoundingBox {
    BoundingBox::new(Vec3::from_ints(-half, -half, -half), Vec3::from_ints(half, half, half))
}

fn ortho_frustum() -> BoundingFrustum {
    let sixteen = Fix64::from_int(16);
    BoundingFrustum::new(
        Mat4::orthographic(sixteen, sixteen, Fix64::TWO, Fix64::from_int(10)).unwrap(),
    )
}

#[test]
fn from_points_spans_all_points() {
    let points = [
        Vec3::from_ints(1, 5, -2),
        Vec3::from_ints(3, -1, 0),
        Vec3::from_ints(-4, 2, 7),
    ];
    let bounds = BoundingBox::from_points(&points).unwrap();
    assert_eq!(bounds.min, Vec3::from_ints(-4, -1, -2));
    assert_eq!(bounds.max, Vec3::from_ints(3, 5, 7));
    assert_eq!(BoundingBox::from_points(&points[..1]).unwrap(), BoundingBox::new(points[0], points[0]));
    assert_eq!(BoundingBox::from_points(&[]), Err(MathError::EmptyCollection));
}

#[test]
fn centre_extents_and_merge() {
    let bounds = BoundingBox::new(Vec3::from_ints(0, 0, 0), Vec3::from_ints(2, 4, 6));
    assert_eq!(bounds.center(), Vec3::from_ints(1, 2, 3));
    assert_eq!(bounds.extents(), Vec3::from_ints(1, 2, 3));
    assert_eq!(
        BoundingBox::from_center_half_extents(Vec3::from_ints(1, 2, 3), Vec3::from_ints(1, 2, 3)),
        bounds
    );
    let merged = bounds.merged(&cube(1));
    assert_eq!(merged, BoundingBox::new(Vec3::from_ints(-1, -1, -1), Vec3::from_ints(2, 4, 6)));
    let sphere = BoundingSphere::new(Vec3::from_ints(1, 2, 3), Fix64::TWO);
    assert_eq!(
        BoundingBox::from_sphere(&sphere),
        BoundingBox::new(Vec3::from_ints(-1, 0, 1), Vec3::from_ints(3, 4, 5))
    );
}

#[test]
fn corners_follow_documented_order() {
    let corners = BoundingBox::new(Vec3::ZERO, Vec3::from_ints(1, 2, 3)).corners();
    assert_eq!(corners.len(), BoundingBox::CORNER_COUNT);
    assert_eq!(
        corners,
        [
            Vec3::from_ints(0, 2, 3),
            Vec3::from_ints(1, 2, 3),
            Vec3::from_ints(1, 0, 3),
            Vec3::from_ints(0, 0, 3),
            Vec3::from_ints(0, 2, 0),
            Vec3::from_ints(1, 2, 0),
            Vec3::from_ints(1, 0, 0),
            Vec3::from_ints(0, 0, 0),
        ]
    );
}

#[test]
fn point_containment_is_closed_and_never_intersects() {
    let bounds = cube(10);
    assert_eq!(bounds.contains_point(&Vec3::ZERO), ContainmentType::Contains);
    assert_eq!(bounds.contains_point(&Vec3::from_ints(10, -10, 10)), ContainmentType::Contains);
    assert_eq!(bounds.contains_point(&Vec3::from_ints(11, 0, 0)), ContainmentType::Disjoint);
}

#[test]
fn box_containment() {
    let bounds = cube(10);
    assert_eq!(bounds.contains_box(&cube(3)), ContainmentType::Contains);
    assert_eq!(bounds.contains_box(&bounds), ContainmentType::Contains);
    let touching = BoundingBox::new(Vec3::from_ints(10, -1, -1), Vec3::from_ints(20, 1, 1));
    assert_eq!(bounds.contains_box(&touching), ContainmentType::Intersects);
    assert!(bounds.intersects_box(&touching));
    let apart = BoundingBox::new(Vec3::from_ints(11, -1, -1), Vec3::from_ints(20, 1, 1));
    assert_eq!(bounds.contains_box(&apart), ContainmentType::Disjoint);
    assert!(!bounds.intersects_box(&apart));
    assert_eq!(cube(3).contains_box(&bounds), ContainmentType::Intersects);
}

#[test]
fn sphere_containment_uses_nearest_point() {
    let bounds = cube(10);
    let five = Fix64::from_int(5);
    assert_eq!(bounds.contains_sphere(&BoundingSphere::new(Vec3::ZERO, five)), ContainmentType::Contains);
    assert_eq!(
        bounds.contains_sphere(&BoundingSphere::new(Vec3::from_ints(9, 0, 0), five)),
        ContainmentType::Intersects
    );
    assert_eq!(
        bounds.contains_sphere(&BoundingSphere::new(Vec3::from_ints(20, 0, 0), five)),
        ContainmentType::Disjoint
    );
    // Outside two face slabs at once: decided by the distance to the edge.
    let near_edge = Vec3::from_ints(12, 12, 0);
    assert_eq!(
        bounds.contains_sphere(&BoundingSphere::new(near_edge, Fix64::from_int(3))),
        ContainmentType::Intersects
    );
    assert_eq!(
        bounds.contains_sphere(&BoundingSphere::new(near_edge, Fix64::from_f32(2.5))),
        ContainmentType::Disjoint
    );
    assert!(!bounds.intersects_sphere(&BoundingSphere::new(near_edge, Fix64::from_f32(2.5))));
    assert_eq!(bounds.distance_squared_to(&near_edge), Fix64::from_int(8));
}

#[test]
fn plane_classification() {
    let bounds = cube(1);
    let ground = Plane::new(Vec3::UNIT_Y, Fix64::ZERO);
    assert_eq!(bounds.intersects_plane(&ground), PlaneIntersectionType::Intersecting);
    let above = Plane::new(Vec3::UNIT_Y, Fix64::from_int(-5));
    assert_eq!(bounds.intersects_plane(&above), PlaneIntersectionType::Back);
    let below = Plane::new(Vec3::UNIT_Y, Fix64::from_int(5));
    assert_eq!(bounds.intersects_plane(&below), PlaneIntersectionType::Front);
    let tilted = Plane::new(Vec3::from_ints(-1, 0, 0), Fix64::from_int(-1));
    assert_eq!(bounds.intersects_plane(&tilted), PlaneIntersectionType::Intersecting);
}

#[test]
fn frustum_containment() {
    let frustum = ortho_frustum();
    assert_eq!(cube(100).contains_frustum(&frustum), ContainmentType::Contains);
    let slab = BoundingBox::new(Vec3::from_ints(-1, -1, -5), Vec3::from_ints(1, 1, -3));
    assert_eq!(slab.contains_frustum(&frustum), ContainmentType::Intersects);
    assert!(slab.intersects_frustum(&frustum));
    let far_away = BoundingBox::new(Vec3::from_ints(50, 50, 50), Vec3::from_ints(60, 60, 60));
    assert_eq!(far_away.contains_frustum(&frustum), ContainmentType::Disjoint);
    assert!(!far_away.intersects_frustum(&frustum));
}
