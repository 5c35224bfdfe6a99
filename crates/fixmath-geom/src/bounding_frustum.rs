// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! View frustum extracted from a view-projection matrix.
//!
//! Planes come from the clip-space functionals of the matrix columns
//! (Gribb/Hartmann) and face inward: a point `p` is inside a plane when
//! `dot(normal, p) + d >= 0`. Corners are the three-plane intersections of
//! adjacent planes, cached with the planes whenever the matrix changes.
//!
//! Under the row-vector convention clip coordinates are `p · M`, so the
//! N-th clip component is the dot product with column N of the matrix.
//! `cN` below is that N-th component functional `(M1N, M2N, M3N, M4N)`;
//! reading it from a column is not a transposition.

use fixmath_core::{Fix64, Mat4, Vec3, Vec4, EPSILON};
use tracing::trace;

use crate::{BoundingBox, BoundingSphere, ContainmentType, Plane, PlaneIntersectionType, Ray};

const PLANE_NEAR: usize = 0;
const PLANE_FAR: usize = 1;
const PLANE_LEFT: usize = 2;
const PLANE_RIGHT: usize = 3;
const PLANE_TOP: usize = 4;
const PLANE_BOTTOM: usize = 5;

/// Convex view volume bounded by six planes.
///
/// Depth follows the projection helpers in `fixmath_core`: clip-space `z` in
/// `[0, w]` is inside. Equality compares the source matrix only; the cached
/// planes and corners are derived from it.
///
/// Known limitation: containment is decided from corners against planes, not
/// by a separating-axis test, so volumes that cross a frustum edge without
/// any corner inside it can be reported as Intersects when they are not.
#[derive(Debug, Copy, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Mat4", into = "Mat4")
)]
pub struct BoundingFrustum {
    matrix: Mat4,
    planes: [Plane; 6],
    corners: [Vec3; 8],
}

impl BoundingFrustum {
    /// Number of corners returned by [`BoundingFrustum::corners`].
    pub const CORNER_COUNT: usize = 8;

    /// Builds the frustum of a combined view-projection matrix.
    pub fn new(matrix: Mat4) -> Self {
        let planes = extract_planes(&matrix);
        let corners = corners_of(&planes);
        trace!("frustum planes and corners rebuilt");
        Self {
            matrix,
            planes,
            corners,
        }
    }

    /// The source view-projection matrix.
    pub const fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// Replaces the matrix and recomputes planes and corners.
    pub fn set_matrix(&mut self, matrix: Mat4) {
        *self = Self::new(matrix);
    }

    /// The six inward-facing planes: near, far, left, right, top, bottom.
    pub const fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// Near plane.
    pub const fn near(&self) -> Plane {
        self.planes[PLANE_NEAR]
    }

    /// Far plane.
    pub const fn far(&self) -> Plane {
        self.planes[PLANE_FAR]
    }

    /// Left plane.
    pub const fn left(&self) -> Plane {
        self.planes[PLANE_LEFT]
    }

    /// Right plane.
    pub const fn right(&self) -> Plane {
        self.planes[PLANE_RIGHT]
    }

    /// Top plane.
    pub const fn top(&self) -> Plane {
        self.planes[PLANE_TOP]
    }

    /// Bottom plane.
    pub const fn bottom(&self) -> Plane {
        self.planes[PLANE_BOTTOM]
    }

    /// The eight corners: near-left-top, near-right-top, near-right-bottom,
    /// near-left-bottom, then the same four on the far plane.
    pub const fn corners(&self) -> [Vec3; 8] {
        self.corners
    }

    /// Contains when `point` is inside every plane (within `EPSILON`),
    /// Disjoint otherwise.
    pub fn contains_point(&self, point: &Vec3) -> ContainmentType {
        if self.planes.iter().all(|p| inside(p, point)) {
            ContainmentType::Contains
        } else {
            ContainmentType::Disjoint
        }
    }

    /// Classifies the box by counting its corners inside each plane.
    pub fn contains_box(&self, bounds: &BoundingBox) -> ContainmentType {
        self.classify_points(&bounds.corners())
    }

    /// Classifies the sphere by its signed distance to each plane.
    pub fn contains_sphere(&self, sphere: &BoundingSphere) -> ContainmentType {
        let mut result = ContainmentType::Contains;
        for plane in &self.planes {
            let dist = plane.dot_coordinate(&sphere.center);
            if dist < -sphere.radius {
                return ContainmentType::Disjoint;
            }
            if dist < sphere.radius {
                result = ContainmentType::Intersects;
            }
        }
        result
    }

    /// Classifies `other` by counting its corners inside each plane of
    /// `self`. Not symmetric; a frustum equal to `self` is Contains.
    pub fn contains_frustum(&self, other: &Self) -> ContainmentType {
        if self == other {
            return ContainmentType::Contains;
        }
        self.classify_points(&other.corners)
    }

    /// `true` unless the box is Disjoint.
    pub fn intersects_box(&self, bounds: &BoundingBox) -> bool {
        self.contains_box(bounds).overlaps()
    }

    /// `true` unless the sphere is Disjoint.
    pub fn intersects_sphere(&self, sphere: &BoundingSphere) -> bool {
        self.contains_sphere(sphere).overlaps()
    }

    /// `true` unless `other` is Disjoint.
    pub fn intersects_frustum(&self, other: &Self) -> bool {
        self.contains_frustum(other).overlaps()
    }

    /// Side of `plane` the frustum lies on.
    pub fn intersects_plane(&self, plane: &Plane) -> PlaneIntersectionType {
        plane.intersects_frustum(self)
    }

    /// Distance along `ray` to the frustum. See [`Ray::intersects_frustum`].
    pub fn intersects_ray(&self, ray: &Ray) -> Option<Fix64> {
        ray.intersects_frustum(self)
    }

    fn classify_points(&self, points: &[Vec3]) -> ContainmentType {
        let mut result = ContainmentType::Contains;
        for plane in &self.planes {
            let count = points.iter().filter(|p| inside(plane, p)).count();
            if count == 0 {
                return ContainmentType::Disjoint;
            }
            if count < points.len() {
                result = ContainmentType::Intersects;
            }
        }
        result
    }
}

impl PartialEq for BoundingFrustum {
    fn eq(&self, other: &Self) -> bool {
        self.matrix == other.matrix
    }
}

impl Eq for BoundingFrustum {}

impl From<Mat4> for BoundingFrustum {
    fn from(matrix: Mat4) -> Self {
        Self::new(matrix)
    }
}

impl From<BoundingFrustum> for Mat4 {
    fn from(frustum: BoundingFrustum) -> Self {
        frustum.matrix
    }
}

fn inside(plane: &Plane, point: &Vec3) -> bool {
    plane.dot_coordinate(point) >= -EPSILON
}

fn extract_planes(m: &Mat4) -> [Plane; 6] {
    let c1 = m.column(0);
    let c2 = m.column(1);
    let c3 = m.column(2);
    let c4 = m.column(3);
    let plane = |v: Vec4| Plane::from_vec4(v).normalize();
    let mut planes = [Plane::default(); 6];
    planes[PLANE_NEAR] = plane(c3);
    planes[PLANE_FAR] = plane(c4.sub(&c3));
    planes[PLANE_LEFT] = plane(c4.add(&c1));
    planes[PLANE_RIGHT] = plane(c4.sub(&c1));
    planes[PLANE_TOP] = plane(c4.sub(&c2));
    planes[PLANE_BOTTOM] = plane(c4.add(&c2));
    planes
}

fn corners_of(planes: &[Plane; 6]) -> [Vec3; 8] {
    let [near, far, left, right, top, bottom] = planes;
    [
        intersection(near, left, top),
        intersection(near, right, top),
        intersection(near, right, bottom),
        intersection(near, left, bottom),
        intersection(far, left, top),
        intersection(far, right, top),
        intersection(far, right, bottom),
        intersection(far, left, bottom),
    ]
}

/// Point shared by three planes; the origin when two of them are parallel.
fn intersection(a: &Plane, b: &Plane, c: &Plane) -> Vec3 {
    let bc = b.normal.cross(&c.normal);
    let ca = c.normal.cross(&a.normal);
    let ab = a.normal.cross(&b.normal);
    let numerator = bc
        .scale(a.d)
        .add(&ca.scale(b.d))
        .add(&ab.scale(c.d))
        .negate();
    numerator
        .div_scalar(a.normal.dot(&bc))
        .unwrap_or(Vec3::ZERO)
}
