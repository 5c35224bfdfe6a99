// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Bounds-checked slice transforms.
//!
//! Both ranges are validated before the first write, so a rejected call
//! leaves the destination untouched.

use core::ops::Range;

use tracing::debug;

use crate::MathError;

/// `start..start + count` if it fits in a slice of `len`.
pub(crate) fn checked_range(
    start: usize,
    count: usize,
    len: usize,
) -> Result<Range<usize>, MathError> {
    match start.checked_add(count) {
        Some(end) if end <= len => Ok(start..end),
        _ => {
            debug!(start, count, len, "batch range rejected");
            Err(MathError::IndexOutOfRange { start, count, len })
        }
    }
}

/// Writes `f(source[source_index + i])` to `destination[destination_index + i]`
/// for `i` in `0..length`.
pub(crate) fn map_range<T: Copy>(
    source: &[T],
    source_index: usize,
    destination: &mut [T],
    destination_index: usize,
    length: usize,
    f: impl Fn(&T) -> T,
) -> Result<(), MathError> {
    let src = checked_range(source_index, length, source.len())?;
    let dst = checked_range(destination_index, length, destination.len())?;
    for (out, value) in destination[dst].iter_mut().zip(&source[src]) {
        *out = f(value);
    }
    Ok(())
}

/// Applies `f` to every element in place.
pub(crate) fn map_in_place<T: Copy>(values: &mut [T], f: impl Fn(&T) -> T) {
    for value in values {
        *value = f(value);
    }
}

/// Generates matrix and quaternion batch transforms for a vector type that
/// provides `transform(&Mat4)` and `transform_quat(&Quat)`.
macro_rules! impl_batch_transforms {
    ($name:ident) => {
        impl $name {
            /// Transforms `length` vectors starting at `source_index` by
            /// `matrix`, writing them from `destination_index` on.
            ///
            /// Fails with [`MathError::IndexOutOfRange`] before writing
            /// anything when either range exceeds its slice.
            pub fn transform_batch(
                source: &[Self],
                source_index: usize,
                matrix: &Mat4,
                destination: &mut [Self],
                destination_index: usize,
                length: usize,
            ) -> Result<(), MathError> {
                crate::batch::map_range(
                    source,
                    source_index,
                    destination,
                    destination_index,
                    length,
                    |v| v.transform(matrix),
                )
            }

            /// Transforms every vector of `source` into the front of
            /// `destination`, which must be at least as long.
            pub fn transform_slice(
                source: &[Self],
                matrix: &Mat4,
                destination: &mut [Self],
            ) -> Result<(), MathError> {
                Self::transform_batch(source, 0, matrix, destination, 0, source.len())
            }

            /// Transforms every vector of `values` by `matrix` in place.
            pub fn transform_in_place(values: &mut [Self], matrix: &Mat4) {
                crate::batch::map_in_place(values, |v| v.transform(matrix));
            }

            /// Rotates `length` vectors by `rotation`; ranges as in
            /// [`Self::transform_batch`].
            pub fn transform_quat_batch(
                source: &[Self],
                source_index: usize,
                rotation: &Quat,
                destination: &mut [Self],
                destination_index: usize,
                length: usize,
            ) -> Result<(), MathError> {
                crate::batch::map_range(
                    source,
                    source_index,
                    destination,
                    destination_index,
                    length,
                    |v| v.transform_quat(rotation),
                )
            }

            /// Rotates every vector of `source` into the front of `destination`.
            pub fn transform_quat_slice(
                source: &[Self],
                rotation: &Quat,
                destination: &mut [Self],
            ) -> Result<(), MathError> {
                Self::transform_quat_batch(source, 0, rotation, destination, 0, source.len())
            }

            /// Rotates every vector of `values` in place.
            pub fn transform_quat_in_place(values: &mut [Self], rotation: &Quat) {
                crate::batch::map_in_place(values, |v| v.transform_quat(rotation));
            }
        }
    };
}

/// Generates normal (translation-free) batch transforms.
macro_rules! impl_batch_normal_transforms {
    ($name:ident) => {
        impl $name {
            /// Applies [`Self::transform_normal`] to `length` vectors; ranges
            /// as in [`Self::transform_batch`].
            pub fn transform_normal_batch(
                source: &[Self],
                source_index: usize,
                matrix: &Mat4,
                destination: &mut [Self],
                destination_index: usize,
                length: usize,
            ) -> Result<(), MathError> {
                crate::batch::map_range(
                    source,
                    source_index,
                    destination,
                    destination_index,
                    length,
                    |v| v.transform_normal(matrix),
                )
            }

            /// Applies [`Self::transform_normal`] to every vector of `source`.
            pub fn transform_normal_slice(
                source: &[Self],
                matrix: &Mat4,
                destination: &mut [Self],
            ) -> Result<(), MathError> {
                Self::transform_normal_batch(source, 0, matrix, destination, 0, source.len())
            }

            /// Applies [`Self::transform_normal`] to `values` in place.
            pub fn transform_normal_in_place(values: &mut [Self], matrix: &Mat4) {
                crate::batch::map_in_place(values, |v| v.transform_normal(matrix));
            }
        }
    };
}
