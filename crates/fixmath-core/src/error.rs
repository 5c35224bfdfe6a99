// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type shared by every fallible fixmath operation.

use thiserror::Error;

/// Failure conditions raised by fixed-point math and geometry routines.
///
/// Everything not listed here is a total function over its value domain:
/// degenerate vectors, zero-radius spheres and singular matrices are valid
/// inputs unless an operation explicitly needs an inverse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// A fixed-point division had a zero divisor.
    ///
    /// Never replaced by a saturated value: `MAX` is a legitimate result and
    /// must stay distinguishable from a failed division.
    #[error("division by zero")]
    DivideByZero,
    /// A point-set constructor received no points.
    #[error("invalid argument: empty collection")]
    EmptyCollection,
    /// A batch range `[start, start + count)` does not fit a slice of `len`.
    #[error("range {start}..{start}+{count} out of bounds for slice of length {len}")]
    IndexOutOfRange {
        /// First index of the requested range.
        start: usize,
        /// Number of elements requested.
        count: usize,
        /// Length of the slice the range was checked against.
        len: usize,
    },
    /// The matrix determinant is within `EPSILON` of zero.
    #[error("matrix is singular")]
    SingularMatrix,
    /// A matrix basis row has zero length, so no rotation can be recovered.
    #[error("matrix has a zero scale component")]
    DegenerateScale,
    /// A scalar literal could not be parsed.
    #[error("invalid fixed-point literal: {0:?}")]
    InvalidLiteral(String),
    /// A vector literal list had the wrong number of components.
    #[error("expected {expected} components, found {found}")]
    ComponentCount {
        /// Components required by the target vector type.
        expected: usize,
        /// Components actually supplied.
        found: usize,
    },
}
