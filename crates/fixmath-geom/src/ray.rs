// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use fixmath_core::{Fix64, Vec3, EPSILON};

use crate::{BoundingBox, BoundingFrustum, BoundingSphere, Plane};

/// Half-line `position + t · direction` for `t >= 0`.
///
/// The direction need not be unit length; returned parameters are in units
/// of `direction`. A zero direction never advances: it hits only volumes
/// that already contain the origin, at `t = 0`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray {
    /// Origin of the ray.
    pub position: Vec3,
    /// Direction of travel.
    pub direction: Vec3,
}

impl Ray {
    /// Creates a ray from its origin and direction.
    pub const fn new(position: Vec3, direction: Vec3) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// `position + direction · t`.
    pub fn point_at(&self, t: Fix64) -> Vec3 {
        self.position.add(&self.direction.scale(t))
    }

    /// Distance along the ray to `bounds` by the slab method.
    ///
    /// Axes with a (near) zero direction component only require the origin to
    /// lie within that slab. Returns `Some(0)` when the origin is inside and
    /// `None` when the slab interval is empty or lies behind the origin.
    pub fn intersects_box(&self, bounds: &BoundingBox) -> Option<Fix64> {
        let axes = [
            (self.position.x, self.direction.x, bounds.min.x, bounds.max.x),
            (self.position.y, self.direction.y, bounds.min.y, bounds.max.y),
            (self.position.z, self.direction.z, bounds.min.z, bounds.max.z),
        ];
        let mut t_min: Option<Fix64> = None;
        let mut t_max: Option<Fix64> = None;
        for (p, d, lo, hi) in axes {
            if d.abs() < EPSILON {
                if p < lo || p > hi {
                    return None;
                }
                continue;
            }
            let t1 = (lo - p).checked_div(d).ok()?;
            let t2 = (hi - p).checked_div(d).ok()?;
            let (near, far) = if t1 > t2 { (t2, t1) } else { (t1, t2) };
            t_min = Some(t_min.map_or(near, |t| t.max(near)));
            t_max = Some(t_max.map_or(far, |t| t.min(far)));
            if let (Some(lo_t), Some(hi_t)) = (t_min, t_max) {
                if lo_t > hi_t {
                    return None;
                }
            }
        }
        if t_max.is_some_and(|t| t < Fix64::ZERO) {
            return None;
        }
        Some(t_min.map_or(Fix64::ZERO, |t| t.max(Fix64::ZERO)))
    }

    /// Distance along the ray to `plane`.
    ///
    /// A ray parallel to the plane (within `EPSILON`) hits at `0` only when its
    /// origin lies on the plane; a plane behind the origin is a miss.
    pub fn intersects_plane(&self, plane: &Plane) -> Option<Fix64> {
        let den = plane.dot_normal(&self.direction);
        let dist = plane.dot_coordinate(&self.position);
        if den.abs() < EPSILON {
            return (dist.abs() <= EPSILON).then_some(Fix64::ZERO);
        }
        let t = (-dist).checked_div(den).ok()?;
        (t >= Fix64::ZERO).then_some(t)
    }

    /// Distance along the ray to the near surface of `sphere`.
    ///
    /// Solves `|m + t·u|² = r²` with `m = position - center` and `u` the unit
    /// direction, then divides by `|D|` to return `t` in units of
    /// `direction`. Intermediates stay at scene scale whatever the direction
    /// length. An origin inside or on the sphere hits at `0`.
    pub fn intersects_sphere(&self, sphere: &BoundingSphere) -> Option<Fix64> {
        let m = self.position.sub(&sphere.center);
        let c = m.length_squared() - sphere.radius * sphere.radius;
        if c <= Fix64::ZERO {
            return Some(Fix64::ZERO);
        }
        let len = self.direction.length();
        let unit = self.direction.div_scalar(len).ok()?;
        let b = m.dot(&unit);
        if b > Fix64::ZERO {
            return None;
        }
        let disc = b * b - c;
        if disc < Fix64::ZERO {
            return None;
        }
        let t = (-b - disc.sqrt()).checked_div(len).ok()?;
        Some(t.max(Fix64::ZERO))
    }

    /// Distance along the ray to `frustum`, clipping the parameter interval
    /// against each of its six inward-facing planes.
    pub fn intersects_frustum(&self, frustum: &BoundingFrustum) -> Option<Fix64> {
        let mut t_min = Fix64::ZERO;
        let mut t_max: Option<Fix64> = None;
        for plane in frustum.planes() {
            let dist = plane.dot_coordinate(&self.position);
            let den = plane.dot_normal(&self.direction);
            if den.abs() < EPSILON {
                if dist < Fix64::ZERO {
                    return None;
                }
                continue;
            }
            let t = (-dist).checked_div(den).ok()?;
            if den > Fix64::ZERO {
                t_min = t_min.max(t);
            } else {
                t_max = Some(t_max.map_or(t, |hi| hi.min(t)));
            }
            if t_max.is_some_and(|hi| t_min > hi) {
                return None;
            }
        }
        Some(t_min)
    }
}
