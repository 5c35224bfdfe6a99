// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use fixmath_core::{Fix64, MathError, Vec3};
use tracing::debug;

use crate::{
    BoundingFrustum, BoundingSphere, ContainmentType, Plane, PlaneIntersectionType, Ray,
};

/// Axis-aligned bounding box.
///
/// Invariants:
/// - `min` components are expected to be less than or equal to their `max`
///   counterparts; this is not checked.
/// - Faces are closed: points on a face are inside.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl BoundingBox {
    /// Number of corners returned by [`BoundingBox::corners`].
    pub const CORNER_COUNT: usize = 8;

    /// Constructs a box from its minimum and maximum corners.
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Builds a box centered at `center` with half-extents `half`.
    pub fn from_center_half_extents(center: Vec3, half: Vec3) -> Self {
        Self::new(center.sub(&half), center.add(&half))
    }

    /// Smallest box containing all `points`.
    ///
    /// Fails with [`MathError::EmptyCollection`] when `points` is empty.
    pub fn from_points(points: &[Vec3]) -> Result<Self, MathError> {
        let Some((first, rest)) = points.split_first() else {
            debug!("bounding box from_points rejected: empty input");
            return Err(MathError::EmptyCollection);
        };
        Ok(rest.iter().fold(Self::new(*first, *first), |acc, p| {
            Self::new(acc.min.min(p), acc.max.max(p))
        }))
    }

    /// Smallest box containing `sphere`.
    pub fn from_sphere(sphere: &BoundingSphere) -> Self {
        Self::from_center_half_extents(sphere.center, Vec3::splat(sphere.radius))
    }

    /// Smallest box containing both boxes.
    pub fn merged(&self, other: &Self) -> Self {
        Self::new(self.min.min(&other.min), self.max.max(&other.max))
    }

    /// Midpoint of the box.
    pub fn center(&self) -> Vec3 {
        self.min.add(&self.max).scale(Fix64::HALF)
    }

    /// Half-size along each axis.
    pub fn extents(&self) -> Vec3 {
        self.max.sub(&self.min).scale(Fix64::HALF)
    }

    /// The eight corners: the `max.z` face first (`(min.x, max.y)`,
    /// `(max.x, max.y)`, `(max.x, min.y)`, `(min.x, min.y)`), then the same
    /// four on the `min.z` face.
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, lo.y, lo.z),
        ]
    }

    /// Contains when `point` is within the closed box, Disjoint otherwise.
    /// Never Intersects.
    pub fn contains_point(&self, point: &Vec3) -> ContainmentType {
        let inside = self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
            && self.min.z <= point.z
            && point.z <= self.max.z;
        if inside {
            ContainmentType::Contains
        } else {
            ContainmentType::Disjoint
        }
    }

    /// Relation of `other` to this box.
    pub fn contains_box(&self, other: &Self) -> ContainmentType {
        if !self.intersects_box(other) {
            return ContainmentType::Disjoint;
        }
        let inside = self.min.x <= other.min.x
            && other.max.x <= self.max.x
            && self.min.y <= other.min.y
            && other.max.y <= self.max.y
            && self.min.z <= other.min.z
            && other.max.z <= self.max.z;
        if inside {
            ContainmentType::Contains
        } else {
            ContainmentType::Intersects
        }
    }

    /// Contains when the sphere clears every face by its radius; otherwise
    /// Intersects when the nearest point of the box is within the radius.
    pub fn contains_sphere(&self, sphere: &BoundingSphere) -> ContainmentType {
        let (c, r) = (sphere.center, sphere.radius);
        let clears = c.x - self.min.x >= r
            && c.y - self.min.y >= r
            && c.z - self.min.z >= r
            && self.max.x - c.x >= r
            && self.max.y - c.y >= r
            && self.max.z - c.z >= r;
        if clears {
            return ContainmentType::Contains;
        }
        if self.distance_squared_to(&c) <= r * r {
            ContainmentType::Intersects
        } else {
            ContainmentType::Disjoint
        }
    }

    /// Contains when all frustum corners are inside; Intersects when some
    /// are, or when the frustum overlaps the box anyway.
    pub fn contains_frustum(&self, frustum: &BoundingFrustum) -> ContainmentType {
        let inside = frustum
            .corners()
            .iter()
            .filter(|c| self.contains_point(c) == ContainmentType::Contains)
            .count();
        if inside == BoundingFrustum::CORNER_COUNT {
            ContainmentType::Contains
        } else if inside > 0 || frustum.intersects_box(self) {
            ContainmentType::Intersects
        } else {
            ContainmentType::Disjoint
        }
    }

    /// Squared distance from `point` to the nearest point of the box.
    pub fn distance_squared_to(&self, point: &Vec3) -> Fix64 {
        let nearest = point.clamp(&self.min, &self.max);
        nearest.distance_squared(point)
    }

    /// `true` when the boxes overlap, touching faces included.
    pub fn intersects_box(&self, other: &Self) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y
            || self.max.z < other.min.z
            || self.min.z > other.max.z)
    }

    /// `true` when the sphere reaches the box.
    pub fn intersects_sphere(&self, sphere: &BoundingSphere) -> bool {
        self.contains_sphere(sphere).overlaps()
    }

    /// Side of `plane` the box lies on.
    pub fn intersects_plane(&self, plane: &Plane) -> PlaneIntersectionType {
        plane.intersects_box(self)
    }

    /// Distance along `ray` to the box. See [`Ray::intersects_box`].
    pub fn intersects_ray(&self, ray: &Ray) -> Option<Fix64> {
        ray.intersects_box(self)
    }

    /// `true` when the frustum overlaps the box.
    pub fn intersects_frustum(&self, frustum: &BoundingFrustum) -> bool {
        frustum.intersects_box(self)
    }
}
