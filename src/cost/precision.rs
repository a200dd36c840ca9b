//! Fractional precision resolution
//!
//! All tokens from one parsing unit are normalized at a single fractional
//! width so their canonical keys are comparable. That width is the widest
//! fractional part seen, optionally floored by a caller-supplied minimum.

use crate::cost::token::RawToken;

/// Resolve the shared fractional width for a set of tokens.
///
/// Returns 0 for an empty token list (or `floor`, when given).
pub fn resolve(tokens: &[RawToken], floor: Option<usize>) -> usize {
    let widest = tokens
        .iter()
        .map(|t| t.fractional_digits().len())
        .max()
        .unwrap_or(0);

    match floor {
        Some(floor) => widest.max(floor),
        None => widest,
    }
}
