//! The cost engine: parsing, pooling, and formatted output
//!
//! [`CostEngine`] ties the components together behind the three entry points
//! surrounding application code uses per cost field:
//!
//! - [`CostEngine::parse_cost_range`] — text to canonical-key-indexed map,
//! - [`CostEngine::select_extreme`] — cheapest/most expensive across one or
//!   many raw strings, precision resolved over the pooled tokens,
//! - [`CostEngine::format_display`] — zero label, optional currency
//!   decoration, and escaping for one selected value.
//!
//! The engine is constructed explicitly with its separator policy and
//! collaborators; there is no process-wide singleton. It holds no mutable
//! state, so one engine is safely shared across threads when its
//! collaborators are.

use std::collections::BTreeMap;

use crate::cost::display::{self, CurrencyFormatter, DisplayEscaper, IdentityEscaper};
use crate::cost::key::{normalize, CanonicalKey};
use crate::cost::precision;
use crate::cost::range::{aggregate, Extreme};
use crate::cost::separators::{ConfigError, SeparatorSet};
use crate::cost::token::{RawToken, TokenExtractor};

/// Supplies every distinct recorded cost string, for whole-dataset extremes.
pub trait CostSource {
    fn distinct_costs(&self) -> Vec<String>;
}

/// Supplies the recorded cost strings of one entity, possibly several.
pub trait EntityCosts<Id> {
    fn costs_of(&self, entity: &Id) -> Vec<String>;
}

/// Parser and ranking engine for free-form cost text.
pub struct CostEngine {
    separators: SeparatorSet,
    extractor: TokenExtractor,
    zero_label: String,
    range_separator: String,
    currency: Option<Box<dyn CurrencyFormatter + Send + Sync>>,
    escaper: Box<dyn DisplayEscaper + Send + Sync>,
}

impl Default for CostEngine {
    fn default() -> Self {
        Self::new(SeparatorSet::default()).expect("default separator set is valid")
    }
}

impl CostEngine {
    /// Build an engine over the given separator policy. Labels default to
    /// `"Free"` and `" - "`; no currency formatter; identity escaping.
    pub fn new(separators: SeparatorSet) -> Result<Self, ConfigError> {
        let extractor = TokenExtractor::new(&separators)?;

        Ok(Self {
            separators,
            extractor,
            zero_label: "Free".to_string(),
            range_separator: " - ".to_string(),
            currency: None,
            escaper: Box::new(IdentityEscaper),
        })
    }

    /// Label substituted for a zero cost; localizable, caller-supplied.
    pub fn with_zero_label(mut self, label: impl Into<String>) -> Self {
        self.zero_label = label.into();
        self
    }

    /// Text joining the two endpoints of a formatted range.
    pub fn with_range_separator(mut self, separator: impl Into<String>) -> Self {
        self.range_separator = separator.into();
        self
    }

    pub fn with_currency_formatter(
        mut self,
        formatter: impl CurrencyFormatter + Send + Sync + 'static,
    ) -> Self {
        self.currency = Some(Box::new(formatter));
        self
    }

    pub fn with_escaper(mut self, escaper: impl DisplayEscaper + Send + Sync + 'static) -> Self {
        self.escaper = Box::new(escaper);
        self
    }

    pub fn separators(&self) -> &SeparatorSet {
        &self.separators
    }

    /// Whether `cost` contains at least one numeric token.
    pub fn is_valid_cost(&self, cost: &str, allow_negative: bool) -> bool {
        self.extractor.contains_token(cost.trim(), allow_negative)
    }

    /// Parse one raw cost string into a canonical-key-indexed map.
    ///
    /// Tokens are extracted in order of appearance and normalized at the
    /// precision resolved over this string's tokens (floored by
    /// `min_decimals` when given). Keys within the returned map share a
    /// uniform digit width. Tokens that normalize identically collapse to
    /// one entry, later write winning.
    pub fn parse_cost_range(
        &self,
        text: &str,
        min_decimals: Option<usize>,
    ) -> BTreeMap<CanonicalKey, String> {
        let tokens = self.extractor.extract(text);
        let precision = precision::resolve(&tokens, min_decimals);
        Self::keyed_at(&tokens, precision)
    }

    /// Select the minimum or maximum cost across one or many raw strings.
    ///
    /// Tokens are pooled first and precision is resolved over the whole
    /// pool, so `"5"` and `"10.25"` in different strings still compare at a
    /// shared width. Returns the original text of the selected token, or the
    /// neutral `"0"` when no string contains a token.
    pub fn select_extreme<I, S>(&self, costs: I, which: Extreme) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        aggregate(&self.pooled(costs), which, &self.extractor)
    }

    /// The cheapest cost in `costs`. See [`CostEngine::select_extreme`].
    pub fn minimum_cost<I, S>(&self, costs: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.select_extreme(costs, Extreme::Min)
    }

    /// The most expensive cost in `costs`. See [`CostEngine::select_extreme`].
    pub fn maximum_cost<I, S>(&self, costs: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.select_extreme(costs, Extreme::Max)
    }

    /// Pool every distinct cost string a source reports and select one
    /// extreme across the whole dataset.
    pub fn select_extreme_from_source(&self, source: &dyn CostSource, which: Extreme) -> String {
        self.select_extreme(source.distinct_costs(), which)
    }

    /// Merge the parsed ranges of every cost string recorded for one entity.
    ///
    /// Each string is parsed at its own precision and the per-string maps
    /// are merged with the first-written key preserved. Keys from different
    /// strings may therefore carry different precisions; for cross-string
    /// comparison use [`CostEngine::select_extreme`], which pools tokens
    /// before normalizing.
    pub fn entity_costs<Id>(
        &self,
        provider: &dyn EntityCosts<Id>,
        entity: &Id,
    ) -> BTreeMap<CanonicalKey, String> {
        let mut merged = BTreeMap::new();

        for raw in provider.costs_of(entity) {
            if raw.is_empty() {
                continue;
            }
            for (key, value) in self.parse_cost_range(&raw, None) {
                merged.entry(key).or_insert(value);
            }
        }

        merged
    }

    /// Format one selected value for display: zero label, then optional
    /// currency decoration, then escaping.
    pub fn format_display(&self, value: &str, with_currency: bool) -> String {
        let currency = if with_currency {
            self.currency.as_deref().map(|c| c as &dyn CurrencyFormatter)
        } else {
            None
        };

        let formatted = display::format(value, &self.zero_label, &self.separators, currency);
        self.escaper.escape(&formatted)
    }

    /// Format the full cost range of one or many raw strings.
    ///
    /// Both extremes are selected over the pooled tokens and run through
    /// [`CostEngine::format_display`]. Equal endpoints collapse to a single
    /// value; otherwise they are joined with the range separator. Empty
    /// input (no tokens anywhere) yields empty text.
    pub fn formatted_range<I, S>(&self, costs: I, with_currency: bool) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pooled = self.pooled(costs);
        if pooled.is_empty() {
            return String::new();
        }

        let min = self.format_display(&aggregate(&pooled, Extreme::Min, &self.extractor), with_currency);
        let max = self.format_display(&aggregate(&pooled, Extreme::Max, &self.extractor), with_currency);

        if min == max {
            min
        } else {
            format!("{}{}{}", min, self.range_separator, max)
        }
    }

    fn pooled<I, S>(&self, costs: I) -> BTreeMap<CanonicalKey, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens: Vec<RawToken> = Vec::new();
        for cost in costs {
            tokens.extend(self.extractor.extract(cost.as_ref()));
        }

        let precision = precision::resolve(&tokens, None);
        Self::keyed_at(&tokens, precision)
    }

    fn keyed_at(tokens: &[RawToken], precision: usize) -> BTreeMap<CanonicalKey, String> {
        let mut entries = BTreeMap::new();
        for token in tokens {
            // Later tokens overwrite earlier ones that normalize identically.
            entries.insert(normalize(token, precision), token.text().to_string());
        }

        let width = entries.keys().map(CanonicalKey::width).max().unwrap_or(0);
        entries
            .into_iter()
            .map(|(key, value)| (key.pad_to_width(width), value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_value() {
        let engine = CostEngine::default();
        let range = engine.parse_cost_range("10", None);
        assert_eq!(range.len(), 1);
        let (key, value) = range.iter().next().unwrap();
        assert_eq!(key.to_string(), "10");
        assert_eq!(value, "10");
    }

    #[test]
    fn test_parse_range_keys_share_a_width() {
        let engine = CostEngine::default();
        let range = engine.parse_cost_range("9.5, 10.25", None);
        let keys: Vec<String> = range.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["0950", "1025"]);
    }

    #[test]
    fn test_parse_respects_min_decimals_floor() {
        let engine = CostEngine::default();
        let range = engine.parse_cost_range("10", Some(2));
        let keys: Vec<String> = range.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["1000"]);
    }

    #[test]
    fn test_parse_empty_text_yields_empty_map() {
        let engine = CostEngine::default();
        assert!(engine.parse_cost_range("", None).is_empty());
        assert!(engine.parse_cost_range("call for pricing", None).is_empty());
    }

    #[test]
    fn test_identical_normalizations_collapse_later_write_wins() {
        let engine = CostEngine::default();
        let range = engine.parse_cost_range("5 5.00", None);
        assert_eq!(range.len(), 1);
        assert_eq!(range.values().next().unwrap(), "5.00");
    }

    #[test]
    fn test_select_extreme_pools_precision_across_strings() {
        let engine = CostEngine::default();
        let costs = ["5", "10.25"];
        assert_eq!(engine.select_extreme(costs, Extreme::Min), "5");
        assert_eq!(engine.select_extreme(costs, Extreme::Max), "10.25");
    }

    #[test]
    fn test_select_extreme_on_empty_input_is_neutral_zero() {
        let engine = CostEngine::default();
        let costs: [&str; 0] = [];
        assert_eq!(engine.select_extreme(costs, Extreme::Min), "0");
        assert_eq!(engine.select_extreme([""], Extreme::Max), "0");
    }

    #[test]
    fn test_minimum_and_maximum_cost_wrappers() {
        let engine = CostEngine::default();
        assert_eq!(engine.minimum_cost(["10 - 20"]), "10");
        assert_eq!(engine.maximum_cost(["10 - 20"]), "20");
    }

    #[test]
    fn test_is_valid_cost() {
        let engine = CostEngine::default();
        assert!(engine.is_valid_cost("$10", true));
        assert!(engine.is_valid_cost(" 9.5 ", true));
        assert!(engine.is_valid_cost("-5", false));
        assert!(!engine.is_valid_cost("free", true));
    }

    #[test]
    fn test_format_display_substitutes_zero_label() {
        let engine = CostEngine::default();
        assert_eq!(engine.format_display("0", false), "Free");
        assert_eq!(engine.format_display("10", false), "10");
    }

    #[test]
    fn test_custom_zero_label() {
        let engine = CostEngine::default().with_zero_label("Gratis");
        assert_eq!(engine.format_display("0", false), "Gratis");
    }

    struct DollarPrefix;

    impl CurrencyFormatter for DollarPrefix {
        fn render(&self, amount: &str) -> String {
            format!("${}", amount)
        }
    }

    #[test]
    fn test_format_display_with_currency() {
        let engine = CostEngine::default().with_currency_formatter(DollarPrefix);
        assert_eq!(engine.format_display("10.25", true), "$10.25");
        assert_eq!(engine.format_display("10.25", false), "10.25");
        assert_eq!(engine.format_display("0", true), "Free");
    }

    #[test]
    fn test_formatted_range_joins_extremes() {
        let engine = CostEngine::default();
        assert_eq!(engine.formatted_range(["10 - 20"], false), "10 - 20");
    }

    #[test]
    fn test_formatted_range_collapses_equal_endpoints() {
        let engine = CostEngine::default();
        assert_eq!(engine.formatted_range(["10"], false), "10");
    }

    #[test]
    fn test_formatted_range_zero_renders_label() {
        let engine = CostEngine::default();
        assert_eq!(engine.formatted_range(["0"], false), "Free");
    }

    #[test]
    fn test_formatted_range_empty_input_is_empty_text() {
        let engine = CostEngine::default();
        let costs: [&str; 0] = [];
        assert_eq!(engine.formatted_range(costs, false), "");
        assert_eq!(engine.formatted_range([""], false), "");
    }

    #[test]
    fn test_formatted_range_with_currency_and_escaping() {
        use crate::cost::display::HtmlEscaper;

        let engine = CostEngine::default()
            .with_currency_formatter(DollarPrefix)
            .with_escaper(HtmlEscaper);
        assert_eq!(engine.formatted_range(["9.5, 10.25"], true), "$9.5 - $10.25");
    }

    struct FixedSource(Vec<String>);

    impl CostSource for FixedSource {
        fn distinct_costs(&self) -> Vec<String> {
            self.0.clone()
        }
    }

    #[test]
    fn test_select_extreme_from_source() {
        let engine = CostEngine::default();
        let source = FixedSource(vec!["15".to_string(), "5 - 25".to_string()]);
        assert_eq!(engine.select_extreme_from_source(&source, Extreme::Min), "5");
        assert_eq!(engine.select_extreme_from_source(&source, Extreme::Max), "25");
    }

    struct FixedEntityCosts;

    impl EntityCosts<u64> for FixedEntityCosts {
        fn costs_of(&self, entity: &u64) -> Vec<String> {
            match entity {
                1 => vec!["10 - 20".to_string(), String::new(), "15".to_string()],
                _ => vec![],
            }
        }
    }

    #[test]
    fn test_entity_costs_merges_strings_first_key_wins() {
        let engine = CostEngine::default();
        let costs = engine.entity_costs(&FixedEntityCosts, &1);
        let values: Vec<&str> = costs.values().map(String::as_str).collect();
        assert_eq!(values, vec!["10", "15", "20"]);
    }

    #[test]
    fn test_entity_costs_unknown_entity_is_empty() {
        let engine = CostEngine::default();
        assert!(engine.entity_costs(&FixedEntityCosts, &2).is_empty());
    }

    #[test]
    fn test_custom_separator_engine() {
        let separators = SeparatorSet::from_entries([",", ".", "'"]).unwrap();
        let engine = CostEngine::new(separators).unwrap();
        assert!(engine.separators().contains('\''));
        assert_eq!(engine.maximum_cost(["12'5 13'5"]), "13'5");
    }
}
