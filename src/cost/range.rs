//! Min/max selection over a canonical-key-indexed cost map
//!
//! The aggregator receives entries keyed by [`CanonicalKey`] — from one raw
//! string's tokens, or pooled across many strings by the caller — and picks
//! the entry whose key is numerically smallest or largest. Pooled entries
//! must share one precision; the aggregator compares keys, it never
//! re-resolves precision across a pool.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::cost::key::CanonicalKey;
use crate::cost::token::TokenExtractor;

/// Which end of the range to select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Extreme {
    Min,
    Max,
}

/// The defined result of aggregating no data. "No cost recorded" and "cost
/// is zero" are intentionally indistinguishable at this layer.
pub const NEUTRAL_ZERO: &str = "0";

/// Select the original text of the minimum or maximum entry.
///
/// Returns [`NEUTRAL_ZERO`] for an empty map, and also when the selected
/// entry's stored text does not itself contain a numeric token — a guard
/// against non-numeric values injected by a misbehaving caller.
pub fn aggregate(
    entries: &BTreeMap<CanonicalKey, String>,
    which: Extreme,
    extractor: &TokenExtractor,
) -> String {
    let selected = match which {
        Extreme::Min => entries.iter().next(),
        Extreme::Max => entries.iter().next_back(),
    };

    match selected {
        Some((_, value)) if extractor.contains_token(value, true) => value.clone(),
        _ => NEUTRAL_ZERO.to_string(),
    }
}
