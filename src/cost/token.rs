//! Numeric token extraction from free-form cost text
//!
//! The extractor scans text left to right with a pattern equivalent to
//! `(-?\d+)[<seps>]?(\d*)`, where `<seps>` is the configured separator class.
//! Every match becomes one [`RawToken`], in order of appearance. There is no
//! explicit range syntax: `"10 - 20"` is simply two tokens, and min/max
//! selection downstream is what turns juxtaposed tokens into a range.
//!
//! Extraction is total. Empty text, non-numeric text, lone signs, and lone
//! separators all yield zero matches rather than an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::cost::separators::{ConfigError, SeparatorSet};

/// One numeric substring matched from input text.
///
/// The matched text is kept untouched; everything shown to a user downstream
/// is this original text, never the normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawToken {
    negative: bool,
    integer_digits: String,
    fractional_digits: String,
    text: String,
}

impl RawToken {
    /// Build a token from its parts.
    ///
    /// # Panics
    ///
    /// Panics if `integer_digits` is empty. The extractor can never produce
    /// such a token (a leading separator with no integer part does not
    /// match), so an empty integer part is a caller bug, not a parse result.
    pub fn new(
        negative: bool,
        integer_digits: impl Into<String>,
        fractional_digits: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        let integer_digits = integer_digits.into();
        assert!(
            !integer_digits.is_empty(),
            "RawToken requires a non-empty integer part"
        );

        Self {
            negative,
            integer_digits,
            fractional_digits: fractional_digits.into(),
            text: text.into(),
        }
    }

    pub fn negative(&self) -> bool {
        self.negative
    }

    pub fn integer_digits(&self) -> &str {
        &self.integer_digits
    }

    /// The fractional digits, possibly empty. "No separator present" and
    /// "separator with nothing after it" both land here as the empty string;
    /// the two normalize identically.
    pub fn fractional_digits(&self) -> &str {
        &self.fractional_digits
    }

    /// The untouched matched text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Regex-backed token extractor for one separator configuration.
///
/// Patterns are compiled once, at construction, and reused for every scan.
pub struct TokenExtractor {
    signed: Regex,
    unsigned: Regex,
    separators: SeparatorSet,
}

impl TokenExtractor {
    pub fn new(separators: &SeparatorSet) -> Result<Self, ConfigError> {
        let class = separators.pattern_class();
        let signed = Regex::new(&format!(r"(-?\d+)[{}]?(\d*)", class))
            .map_err(|e| ConfigError::Pattern(e.to_string()))?;
        let unsigned = Regex::new(&format!(r"(\d+)[{}]?(\d*)", class))
            .map_err(|e| ConfigError::Pattern(e.to_string()))?;

        Ok(Self {
            signed,
            unsigned,
            separators: separators.clone(),
        })
    }

    /// Extract every numeric token from `text`, in order of appearance.
    pub fn extract(&self, text: &str) -> Vec<RawToken> {
        self.signed
            .captures_iter(text)
            .map(|caps| {
                let signed_digits = &caps[1];
                let negative = signed_digits.starts_with('-');
                let integer_digits = signed_digits.trim_start_matches('-');
                RawToken::new(negative, integer_digits, &caps[2], &caps[0])
            })
            .collect()
    }

    /// Whether `text` contains at least one numeric token.
    ///
    /// With `allow_negative` false, a leading minus is not part of the token,
    /// so `"-5"` still matches on its digits alone.
    pub fn contains_token(&self, text: &str, allow_negative: bool) -> bool {
        if allow_negative {
            self.signed.is_match(text)
        } else {
            self.unsigned.is_match(text)
        }
    }

    pub fn separators(&self) -> &SeparatorSet {
        &self.separators
    }
}

/// Shared extractor for the default separator set, compiled on first use.
pub fn default_extractor() -> &'static TokenExtractor {
    static DEFAULT: Lazy<TokenExtractor> = Lazy::new(|| {
        TokenExtractor::new(&SeparatorSet::default())
            .expect("default separator set compiles")
    });
    &DEFAULT
}
