//! Main module for cost parsing and ranking functionality

pub mod display;
pub mod engine;
pub mod formats;
pub mod key;
pub mod precision;
pub mod range;
pub mod separators;
pub mod token;

pub use self::engine::CostEngine;
pub use self::key::CanonicalKey;
pub use self::range::Extreme;
pub use self::separators::{ConfigError, SeparatorSet};
pub use self::token::{RawToken, TokenExtractor};
