// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use fixmath_core::{Fix64, Mat4, MathError, Vec3};
use tracing::{debug, trace};

use crate::{
    BoundingBox, BoundingFrustum, ContainmentType, Plane, PlaneIntersectionType, Ray,
};

/// Sphere with a `center` and a non-negative `radius` (not enforced).
///
/// Containment is decided on squared distances; exact tangency (a point on
/// the surface, or spheres touching internally or externally) is
/// [`ContainmentType::Intersects`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingSphere {
    /// Center of the sphere.
    pub center: Vec3,
    /// Radius of the sphere.
    pub radius: Fix64,
}

impl BoundingSphere {
    /// Creates a sphere from its center and radius.
    pub const fn new(center: Vec3, radius: Fix64) -> Self {
        Self { center, radius }
    }

    /// Approximate bounding sphere of `points` (Ritter's algorithm).
    ///
    /// The pair of axis-extreme points that lie furthest apart seeds the
    /// sphere (ties prefer X, then Y); one pass then grows it for every point
    /// outside. The result encloses every point (up to rounding) but is not
    /// minimal.
    ///
    /// Fails with [`MathError::EmptyCollection`] when `points` is empty.
    pub fn from_points(points: &[Vec3]) -> Result<Self, MathError> {
        let Some(first) = points.first() else {
            debug!("bounding sphere from_points rejected: empty input");
            return Err(MathError::EmptyCollection);
        };
        Ok(ritter(*first, points))
    }

    /// Sphere through the corners of `bounds`.
    pub fn from_box(bounds: &BoundingBox) -> Self {
        let center = bounds.center();
        Self::new(center, center.distance(&bounds.max))
    }

    /// Approximate sphere around the eight corners of `frustum`.
    pub fn from_frustum(frustum: &BoundingFrustum) -> Self {
        let corners = frustum.corners();
        ritter(corners[0], &corners)
    }

    /// Smallest sphere containing both spheres.
    ///
    /// When one sphere already encloses the other it is returned unchanged.
    pub fn merged(&self, other: &Self) -> Self {
        let offset = other.center.sub(&self.center);
        let distance = offset.length();
        if distance <= (self.radius - other.radius).abs() {
            return if self.radius >= other.radius {
                *self
            } else {
                *other
            };
        }
        let Ok(dir) = offset.div_scalar(distance) else {
            return *self;
        };
        let far_self = self.center.sub(&dir.scale(self.radius));
        let far_other = other.center.add(&dir.scale(other.radius));
        Self::new(
            far_self.add(&far_other).scale(Fix64::HALF),
            (self.radius + distance + other.radius) * Fix64::HALF,
        )
    }

    /// Transforms the center by `matrix` and scales the radius by the
    /// largest basis-row length.
    pub fn transform(&self, matrix: &Mat4) -> Self {
        let largest = (0..3)
            .map(|i| matrix.row(i).xyz().length_squared())
            .max()
            .unwrap_or(Fix64::ONE);
        Self::new(
            self.center.transform(matrix),
            self.radius * largest.sqrt(),
        )
    }

    /// Contains strictly inside, Intersects on the surface, Disjoint outside.
    pub fn contains_point(&self, point: &Vec3) -> ContainmentType {
        let sq_distance = point.distance_squared(&self.center);
        let sq_radius = self.radius * self.radius;
        if sq_distance > sq_radius {
            ContainmentType::Disjoint
        } else if sq_distance < sq_radius {
            ContainmentType::Contains
        } else {
            ContainmentType::Intersects
        }
    }

    /// Contains when no box corner is outside; otherwise decided by the
    /// nearest point of the box.
    pub fn contains_box(&self, bounds: &BoundingBox) -> ContainmentType {
        let all_inside = bounds
            .corners()
            .iter()
            .all(|c| self.contains_point(c).overlaps());
        if all_inside {
            return ContainmentType::Contains;
        }
        if bounds.distance_squared_to(&self.center) <= self.radius * self.radius {
            ContainmentType::Intersects
        } else {
            ContainmentType::Disjoint
        }
    }

    /// Relation of `other` to this sphere.
    ///
    /// Contains only when `other` fits strictly inside; spheres touching at a
    /// single point, inside or out, are Intersects.
    pub fn contains_sphere(&self, other: &Self) -> ContainmentType {
        let sq_distance = self.center.distance_squared(&other.center);
        let outer = self.radius + other.radius;
        let inner = self.radius - other.radius;
        if sq_distance > outer * outer {
            ContainmentType::Disjoint
        } else if inner >= Fix64::ZERO && sq_distance < inner * inner {
            ContainmentType::Contains
        } else {
            ContainmentType::Intersects
        }
    }

    /// Contains when every frustum corner is strictly inside; otherwise
    /// Intersects if the frustum reaches the sphere.
    pub fn contains_frustum(&self, frustum: &BoundingFrustum) -> ContainmentType {
        let corners = frustum.corners();
        if corners
            .iter()
            .all(|c| self.contains_point(c) == ContainmentType::Contains)
        {
            ContainmentType::Contains
        } else if frustum.intersects_sphere(self) {
            ContainmentType::Intersects
        } else {
            ContainmentType::Disjoint
        }
    }

    /// `true` when the sphere reaches the box.
    pub fn intersects_box(&self, bounds: &BoundingBox) -> bool {
        bounds.contains_sphere(self).overlaps()
    }

    /// `true` when the spheres overlap or touch.
    pub fn intersects_sphere(&self, other: &Self) -> bool {
        self.contains_sphere(other).overlaps()
    }

    /// Side of `plane` the sphere lies on.
    pub fn intersects_plane(&self, plane: &Plane) -> PlaneIntersectionType {
        plane.intersects_sphere(self)
    }

    /// Distance along `ray` to the sphere. See [`Ray::intersects_sphere`].
    pub fn intersects_ray(&self, ray: &Ray) -> Option<Fix64> {
        ray.intersects_sphere(self)
    }

    /// `true` when the frustum reaches the sphere.
    pub fn intersects_frustum(&self, frustum: &BoundingFrustum) -> bool {
        frustum.intersects_sphere(self)
    }
}

/// Ritter's single-pass sphere over `points`, seeded with `first`.
fn ritter(first: Vec3, points: &[Vec3]) -> BoundingSphere {
    let mut lo = [first; 3];
    let mut hi = [first; 3];
    for p in points {
        for (axis, value) in p.to_array().into_iter().enumerate() {
            if value < lo[axis].to_array()[axis] {
                lo[axis] = *p;
            }
            if value > hi[axis].to_array()[axis] {
                hi[axis] = *p;
            }
        }
    }

    let spans = [0, 1, 2].map(|axis| lo[axis].distance_squared(&hi[axis]));
    let axis = if spans[0] >= spans[1] && spans[0] >= spans[2] {
        0
    } else if spans[1] >= spans[2] {
        1
    } else {
        2
    };

    let mut center = lo[axis].add(&hi[axis]).scale(Fix64::HALF);
    let mut sq_radius = hi[axis].distance_squared(&center);
    let mut radius = sq_radius.sqrt();

    for p in points {
        let offset = p.sub(&center);
        let sq_distance = offset.length_squared();
        if sq_distance <= sq_radius {
            continue;
        }
        let Ok(dir) = offset.div_scalar(sq_distance.sqrt()) else {
            continue;
        };
        let opposite = center.sub(&dir.scale(radius));
        center = opposite.add(p).scale(Fix64::HALF);
        sq_radius = p.distance_squared(&center);
        radius = sq_radius.sqrt();
        trace!(radius = radius.raw(), "bounding sphere grown");
    }

    BoundingSphere::new(center, radius)
}
