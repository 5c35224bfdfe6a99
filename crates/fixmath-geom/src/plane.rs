// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use fixmath_core::{Fix64, Mat4, MathError, Quat, Vec3, Vec4};

use crate::{BoundingBox, BoundingFrustum, BoundingSphere, PlaneIntersectionType};

/// Plane `dot(normal, p) + d == 0`.
///
/// The normal points to the front side. Nothing normalizes implicitly; call
/// [`Plane::normalize`] before treating [`Plane::dot_coordinate`] as a
/// distance.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    /// Plane normal.
    pub normal: Vec3,
    /// Signed offset: `-dot(normal, p)` for any point `p` on the plane.
    pub d: Fix64,
}

impl Plane {
    /// Creates a plane from its normal and offset.
    pub const fn new(normal: Vec3, d: Fix64) -> Self {
        Self { normal, d }
    }

    /// Plane with coefficients `(x, y, z)` as normal and `w` as offset.
    pub const fn from_vec4(v: Vec4) -> Self {
        Self::new(v.xyz(), v.w)
    }

    /// Coefficients as `(normal.x, normal.y, normal.z, d)`.
    pub const fn to_vec4(&self) -> Vec4 {
        Vec4::from_vec3(self.normal, self.d)
    }

    /// Plane through three points, normal `normalize((b - a) × (c - a))`.
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let normal = b.sub(&a).cross(&c.sub(&a)).normalize();
        Self::new(normal, -normal.dot(&a))
    }

    /// Scales normal and offset so the normal has unit length. A zero normal
    /// is returned unchanged.
    pub fn normalize(&self) -> Self {
        let len = self.normal.length();
        match (self.normal.div_scalar(len), self.d.checked_div(len)) {
            (Ok(normal), Ok(d)) => Self::new(normal, d),
            _ => *self,
        }
    }

    /// Transforms the plane by `matrix` (multiplies by the inverse transpose).
    ///
    /// Fails with [`MathError::SingularMatrix`] when `matrix` cannot be
    /// inverted.
    pub fn transform(&self, matrix: &Mat4) -> Result<Self, MathError> {
        let inverse_transpose = matrix.invert()?.transpose();
        Ok(Self::from_vec4(self.to_vec4().transform(&inverse_transpose)))
    }

    /// Rotates the normal by `rotation`; the offset is unchanged.
    pub fn transform_quat(&self, rotation: &Quat) -> Self {
        Self::new(self.normal.transform_quat(rotation), self.d)
    }

    /// `dot(normal, v.xyz) + d · v.w`.
    pub fn dot(&self, v: &Vec4) -> Fix64 {
        self.to_vec4().dot(v)
    }

    /// `dot(normal, point) + d`: the signed distance for a unit normal.
    pub fn dot_coordinate(&self, point: &Vec3) -> Fix64 {
        self.normal.dot(point) + self.d
    }

    /// `dot(normal, direction)`.
    pub fn dot_normal(&self, direction: &Vec3) -> Fix64 {
        self.normal.dot(direction)
    }

    /// Side of the plane `point` lies on; exactly on the plane is
    /// `Intersecting`.
    pub fn intersects_point(&self, point: &Vec3) -> PlaneIntersectionType {
        classify(self.dot_coordinate(point), Fix64::ZERO)
    }

    /// Front if the center is further than the radius in front, Back if
    /// further than the radius behind, otherwise Intersecting.
    pub fn intersects_sphere(&self, sphere: &BoundingSphere) -> PlaneIntersectionType {
        classify(self.dot_coordinate(&sphere.center), sphere.radius)
    }

    /// Classifies the box by its corners nearest to and furthest along the
    /// normal.
    pub fn intersects_box(&self, bounds: &BoundingBox) -> PlaneIntersectionType {
        let pick = |n: Fix64, toward: Fix64, away: Fix64| {
            if n >= Fix64::ZERO {
                (toward, away)
            } else {
                (away, toward)
            }
        };
        let (fx, nx) = pick(self.normal.x, bounds.max.x, bounds.min.x);
        let (fy, ny) = pick(self.normal.y, bounds.max.y, bounds.min.y);
        let (fz, nz) = pick(self.normal.z, bounds.max.z, bounds.min.z);
        let nearest = Vec3::new(nx, ny, nz);
        let furthest = Vec3::new(fx, fy, fz);
        if self.dot_coordinate(&nearest) > Fix64::ZERO {
            PlaneIntersectionType::Front
        } else if self.dot_coordinate(&furthest) < Fix64::ZERO {
            PlaneIntersectionType::Back
        } else {
            PlaneIntersectionType::Intersecting
        }
    }

    /// Classifies the eight frustum corners.
    pub fn intersects_frustum(&self, frustum: &BoundingFrustum) -> PlaneIntersectionType {
        let corners = frustum.corners();
        let distances = corners.iter().map(|c| self.dot_coordinate(c));
        let (mut front, mut back) = (false, false);
        for dist in distances {
            front |= dist > Fix64::ZERO;
            back |= dist < Fix64::ZERO;
        }
        match (front, back) {
            (true, false) => PlaneIntersectionType::Front,
            (false, true) => PlaneIntersectionType::Back,
            _ => PlaneIntersectionType::Intersecting,
        }
    }
}

/// Front beyond `+margin`, Back beyond `-margin`, otherwise Intersecting.
fn classify(distance: Fix64, margin: Fix64) -> PlaneIntersectionType {
    if distance > margin {
        PlaneIntersectionType::Front
    } else if distance < -margin {
        PlaneIntersectionType::Back
    } else {
        PlaneIntersectionType::Intersecting
    }
}

impl From<Vec4> for Plane {
    fn from(value: Vec4) -> Self {
        Self::from_vec4(value)
    }
}
