//! Canonical sort keys for cost tokens
//!
//! A token normalized at precision `p` becomes a sign-aware digit string:
//! its fractional part right-padded with zeros to exactly `p` digits, the
//! decimal point dropped. `"12.5"` at precision 2 becomes `1250`, `"-3"`
//! becomes `-300`. Ordering two keys as signed integers then reproduces the
//! true numeric ordering of the underlying values — the load-bearing
//! invariant of the whole engine, and the reason min/max selection can run
//! on plain key comparison.
//!
//! `Ord` on [`CanonicalKey`] implements that signed-integer comparison
//! directly (sign first, then magnitude with leading zeros ignored), so the
//! invariant does not depend on keys sharing a width. Keys of different
//! widths compare correctly; equal values with different leading-zero
//! padding compare equal.

use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::cost::token::RawToken;

/// A fixed-fractional-width digit string standing in for a numeric value.
///
/// Two distinct raw values can normalize to equal keys (`"10"` and `"10.00"`
/// at precision 2); maps keyed by `CanonicalKey` then hold one entry, later
/// write winning. That collapsing is documented behavior, not an error.
#[derive(Debug, Clone)]
pub struct CanonicalKey {
    negative: bool,
    digits: String,
}

/// Normalize one token at the given precision.
///
/// `precision` must be at least the token's own fractional width; the
/// resolver guarantees that by construction, so padding is the only
/// operation ever needed — values are never truncated.
pub fn normalize(token: &RawToken, precision: usize) -> CanonicalKey {
    debug_assert!(
        token.fractional_digits().len() <= precision,
        "precision below token width"
    );

    let mut digits =
        String::with_capacity(token.integer_digits().len() + precision);
    digits.push_str(token.integer_digits());
    digits.push_str(token.fractional_digits());
    for _ in token.fractional_digits().len()..precision {
        digits.push('0');
    }

    CanonicalKey {
        negative: token.negative(),
        digits,
    }
}

impl CanonicalKey {
    /// The digit string, without sign.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Number of digits, sign excluded.
    pub fn width(&self) -> usize {
        self.digits.len()
    }

    /// Left-pad the digits with zeros to `width`. Value-preserving; used to
    /// give every key in one parsed range a uniform width.
    pub(crate) fn pad_to_width(&self, width: usize) -> CanonicalKey {
        let mut digits = String::with_capacity(width);
        for _ in self.digits.len()..width {
            digits.push('0');
        }
        digits.push_str(&self.digits);

        CanonicalKey {
            negative: self.negative,
            digits,
        }
    }

    /// Digits with leading zeros removed; empty means the value is zero.
    fn magnitude(&self) -> &str {
        self.digits.trim_start_matches('0')
    }
}

fn cmp_magnitude(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl Ord for CanonicalKey {
    fn cmp(&self, other: &Self) -> Ordering {
        let a = self.magnitude();
        let b = other.magnitude();

        // A zero magnitude is neither positive nor negative, whatever sign
        // the source text carried.
        let a_negative = self.negative && !a.is_empty();
        let b_negative = other.negative && !b.is_empty();

        match (a_negative, b_negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => cmp_magnitude(a, b),
            (true, true) => cmp_magnitude(b, a),
        }
    }
}

impl PartialOrd for CanonicalKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CanonicalKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CanonicalKey {}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.digits)
        } else {
            write!(f, "{}", self.digits)
        }
    }
}

impl Serialize for CanonicalKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
