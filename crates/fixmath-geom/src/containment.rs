// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// How one volume relates to another.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContainmentType {
    /// No overlap at all.
    Disjoint,
    /// Partial overlap, including exact tangency.
    Intersects,
    /// The tested volume lies entirely inside.
    Contains,
}

impl ContainmentType {
    /// `true` unless [`ContainmentType::Disjoint`].
    pub const fn overlaps(self) -> bool {
        !matches!(self, Self::Disjoint)
    }
}

/// Which side of a plane a volume lies on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaneIntersectionType {
    /// Entirely on the side the normal points to.
    Front,
    /// Entirely on the opposite side.
    Back,
    /// Touches or straddles the plane.
    Intersecting,
}
