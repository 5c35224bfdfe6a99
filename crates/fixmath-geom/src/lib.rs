// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![forbid(unsafe_code)]
#![doc = r"Deterministic fixed-point geometry.

This crate provides:
- Planes (`Plane`) and rays (`Ray`).
- Bounding volumes: axis-aligned boxes (`BoundingBox`), spheres
  (`BoundingSphere`) and view frusta (`BoundingFrustum`).
- Containment and intersection tests between every pair of them, reported
  as `ContainmentType` / `PlaneIntersectionType`.

Design notes:
- Built on `fixmath_core`: every test is integer arithmetic, so the same
  inputs classify identically on every platform.
- Tests are conservative where exact answers are expensive: the frustum
  tests are vertex-based rather than full separating-axis tests, and
  `BoundingSphere::from_points` is Ritter's approximation, not the minimal
  sphere.
"]

mod bounding_box;
mod bounding_frustum;
mod bounding_sphere;
mod containment;
mod plane;
mod ray;

pub use bounding_box::BoundingBox;
pub use bounding_frustum::BoundingFrustum;
pub use bounding_sphere::BoundingSphere;
pub use containment::{ContainmentType, PlaneIntersectionType};
pub use plane::Plane;
pub use ray::Ray;
