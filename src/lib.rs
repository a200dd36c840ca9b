//! # costrange
//!
//! A parser and min/max ranking engine for free-form cost text.
//!
//! Cost fields in the wild hold anything from `"10"` to `"$9.5 - $10.25"`.
//! This crate extracts the numeric tokens from such text, normalizes them
//! into canonical sort keys whose integer ordering matches the true numeric
//! ordering, and selects the cheapest or most expensive value across one or
//! many raw strings. Data access, currency symbol rendering, localization of
//! the zero label, and output escaping stay outside the crate and are
//! injected as collaborators.
//!
//! ## Testing
//!
//! Every component carries unit tests next to its implementation; the
//! end-to-end scenarios and the ordering invariant live under `tests/`.

pub mod cost;
