//! Decimal separator policy
//!
//! Holds the ordered set of characters accepted as decimal separators when
//! scanning cost text. The default set is `{',', '.'}`, covering both
//! anglophone and European decimal notation. Callers may supply additional
//! separators at construction time; entries are validated once, here, rather
//! than on every parse.

use std::fmt;

/// Error type for separator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configured set contained no separators at all
    EmptySet,
    /// A configured entry was not exactly one character
    NotSingleChar(String),
    /// The same separator was listed more than once
    Duplicate(char),
    /// The extraction pattern built from the set failed to compile
    Pattern(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptySet => {
                write!(f, "Separator set must contain at least one separator")
            }
            ConfigError::NotSingleChar(entry) => {
                write!(f, "Separator '{}' must be exactly one character", entry)
            }
            ConfigError::Duplicate(sep) => {
                write!(f, "Separator '{}' is listed more than once", sep)
            }
            ConfigError::Pattern(msg) => write!(f, "Invalid extraction pattern: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// The ordered set of characters accepted as decimal separators.
///
/// Invariant: non-empty, all entries distinct single characters. Treated as
/// immutable configuration once constructed; an engine reads it for the
/// lifetime of the engine that holds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: Vec<char>,
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self {
            chars: vec![',', '.'],
        }
    }
}

impl SeparatorSet {
    /// Build a set from individual characters, preserving order.
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Result<Self, ConfigError> {
        let mut accepted: Vec<char> = Vec::new();

        for c in chars {
            if accepted.contains(&c) {
                return Err(ConfigError::Duplicate(c));
            }
            accepted.push(c);
        }

        if accepted.is_empty() {
            return Err(ConfigError::EmptySet);
        }

        Ok(Self { chars: accepted })
    }

    /// Build a set from string entries, as configuration usually delivers
    /// them. Each entry must be exactly one character.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut chars: Vec<char> = Vec::new();

        for entry in entries {
            let entry = entry.as_ref();
            let mut iter = entry.chars();
            let c = match (iter.next(), iter.next()) {
                (Some(c), None) => c,
                _ => return Err(ConfigError::NotSingleChar(entry.to_string())),
            };
            if chars.contains(&c) {
                return Err(ConfigError::Duplicate(c));
            }
            chars.push(c);
        }

        if chars.is_empty() {
            return Err(ConfigError::EmptySet);
        }

        Ok(Self { chars })
    }

    /// Return a new set with extra separators appended after the current ones.
    pub fn extended(&self, extra: impl IntoIterator<Item = char>) -> Result<Self, ConfigError> {
        Self::from_chars(self.chars.iter().copied().chain(extra))
    }

    /// The separators, in configuration order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// The body of a regex character class matching any configured separator,
    /// each character escaped.
    pub fn pattern_class(&self) -> String {
        self.chars
            .iter()
            .map(|c| regex::escape(&c.to_string()))
            .collect()
    }

    /// Remove every configured separator from `text`.
    pub fn strip(&self, text: &str) -> String {
        text.chars().filter(|c| !self.contains(*c)).collect()
    }
}
