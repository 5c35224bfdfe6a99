// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Literal lists to and from vector components.

use crate::{Fix64, MathError};

/// Parses exactly `N` decimal literals.
pub(crate) fn parse_components<const N: usize>(
    literals: &[&str],
) -> Result<[Fix64; N], MathError> {
    if literals.len() != N {
        return Err(MathError::ComponentCount {
            expected: N,
            found: literals.len(),
        });
    }
    let mut out = [Fix64::ZERO; N];
    for (slot, literal) in out.iter_mut().zip(literals) {
        *slot = literal.parse()?;
    }
    Ok(out)
}

/// Joins the default `Display` form of each component.
///
/// Ten fractional digits resolve below half a raw unit, so the text always
/// parses back to the same raw values.
pub(crate) fn format_components(components: &[Fix64], separator: &str) -> String {
    components
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}
