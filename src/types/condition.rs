//! Search conditions.

use crate::client::sanitize;
use crate::protocol::constants::DEFAULT_AUXILIARY;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Retrieval strategy flags of a [`Condition`].
///
/// Flags combine with `|`:
///
/// ```
/// use estraier_http::SearchOptions;
///
/// let options = SearchOptions::SIMPLE | SearchOptions::FAST;
/// assert!(options.contains(SearchOptions::FAST));
/// assert_eq!(options.bits(), 1028);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchOptions(u32);

impl SearchOptions {
    /// Check every N-gram key
    pub const SURE: Self = Self(1 << 0);
    /// Check N-gram keys skipping by one
    pub const USUAL: Self = Self(1 << 1);
    /// Check N-gram keys skipping by two
    pub const FAST: Self = Self(1 << 2);
    /// Check N-gram keys skipping by three
    pub const AGITO: Self = Self(1 << 3);
    /// Without TF-IDF tuning
    pub const NOIDF: Self = Self(1 << 4);
    /// Simplified phrase
    pub const SIMPLE: Self = Self(1 << 10);
    /// Rough phrase
    pub const ROUGH: Self = Self(1 << 11);
    /// Union phrase
    pub const UNION: Self = Self(1 << 15);
    /// Intersection phrase
    pub const ISECT: Self = Self(1 << 16);

    /// No flags set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build from raw bits.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw bit value, as sent on the wire.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True when no flag is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every flag of `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for SearchOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for SearchOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for SearchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parameters of one search request.
///
/// Text values are sanitized on the way in: whitespace runs collapse to a
/// single space and the ends are trimmed. Negative `max`/`skip` values are
/// ignored, so `max >= -1` and `skip >= 0` always hold.
///
/// # Examples
///
/// ```
/// use estraier_http::{Condition, SearchOptions};
///
/// let cond = Condition::new()
///     .with_phrase("water  AND\tmind")
///     .with_attribute("@title STRINC rust")
///     .with_max(10)
///     .with_options(SearchOptions::SIMPLE);
///
/// assert_eq!(cond.phrase(), Some("water AND mind"));
/// assert_eq!(cond.max(), 10);
/// assert_eq!(cond.skip(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    phrase: Option<String>,
    attrs: Vec<String>,
    order: Option<String>,
    max: i64,
    skip: i64,
    options: SearchOptions,
    auxiliary: i32,
    distinct: Option<String>,
    mask: u32,
}

impl Condition {
    /// Create a condition with defaults: unlimited results, no skip,
    /// auxiliary threshold 32.
    pub fn new() -> Self {
        Condition {
            phrase: None,
            attrs: Vec::new(),
            order: None,
            max: -1,
            skip: 0,
            options: SearchOptions::empty(),
            auxiliary: DEFAULT_AUXILIARY,
            distinct: None,
            mask: 0,
        }
    }

    // ========== Setters ==========

    /// Set the search phrase.
    pub fn set_phrase(&mut self, phrase: &str) {
        self.phrase = Some(sanitize(phrase));
    }

    /// Append an attribute search expression, e.g. `@title STRINC rust`.
    pub fn add_attribute(&mut self, expr: &str) {
        self.attrs.push(sanitize(expr));
    }

    /// Set the order expression, e.g. `@mdate NUMD`.
    pub fn set_order(&mut self, order: &str) {
        self.order = Some(sanitize(order));
    }

    /// Set the maximum number of results. Negative values are ignored.
    pub fn set_max(&mut self, max: i64) {
        if max >= 0 {
            self.max = max;
        }
    }

    /// Set the number of results to skip. Negative values are ignored.
    pub fn set_skip(&mut self, skip: i64) {
        if skip >= 0 {
            self.skip = skip;
        }
    }

    /// Add retrieval flags. Flags accumulate across calls.
    pub fn set_options(&mut self, options: SearchOptions) {
        self.options |= options;
    }

    /// Set the auxiliary index threshold. Zero or less disables it.
    pub fn set_auxiliary(&mut self, min: i32) {
        self.auxiliary = min;
    }

    /// Set the attribute whose values must be distinct among results.
    pub fn set_distinct(&mut self, name: &str) {
        self.distinct = Some(sanitize(name));
    }

    /// Set the meta search mask. Bit `n` excludes the `n`-th target node.
    pub fn set_mask(&mut self, mask: u32) {
        self.mask = mask;
    }

    // ========== Builders ==========

    /// Builder form of [`set_phrase`](Self::set_phrase).
    pub fn with_phrase(mut self, phrase: &str) -> Self {
        self.set_phrase(phrase);
        self
    }

    /// Builder form of [`add_attribute`](Self::add_attribute).
    pub fn with_attribute(mut self, expr: &str) -> Self {
        self.add_attribute(expr);
        self
    }

    /// Builder form of [`set_order`](Self::set_order).
    pub fn with_order(mut self, order: &str) -> Self {
        self.set_order(order);
        self
    }

    /// Builder form of [`set_max`](Self::set_max).
    pub fn with_max(mut self, max: i64) -> Self {
        self.set_max(max);
        self
    }

    /// Builder form of [`set_skip`](Self::set_skip).
    pub fn with_skip(mut self, skip: i64) -> Self {
        self.set_skip(skip);
        self
    }

    /// Builder form of [`set_options`](Self::set_options).
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.set_options(options);
        self
    }

    /// Builder form of [`set_auxiliary`](Self::set_auxiliary).
    pub fn with_auxiliary(mut self, min: i32) -> Self {
        self.set_auxiliary(min);
        self
    }

    /// Builder form of [`set_distinct`](Self::set_distinct).
    pub fn with_distinct(mut self, name: &str) -> Self {
        self.set_distinct(name);
        self
    }

    /// Builder form of [`set_mask`](Self::set_mask).
    pub fn with_mask(mut self, mask: u32) -> Self {
        self.set_mask(mask);
        self
    }

    // ========== Getters ==========

    /// Search phrase, if set.
    pub fn phrase(&self) -> Option<&str> {
        self.phrase.as_deref()
    }

    /// Attribute expressions, in order added.
    pub fn attributes(&self) -> &[String] {
        &self.attrs
    }

    /// Order expression, if set.
    pub fn order(&self) -> Option<&str> {
        self.order.as_deref()
    }

    /// Maximum number of results, `-1` meaning unlimited.
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Number of results to skip.
    pub fn skip(&self) -> i64 {
        self.skip
    }

    /// Retrieval flags.
    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Auxiliary index threshold.
    pub fn auxiliary(&self) -> i32 {
        self.auxiliary
    }

    /// Attribute whose values must be distinct, if set.
    pub fn distinct(&self) -> Option<&str> {
        self.distinct.as_deref()
    }

    /// Meta search mask.
    pub fn mask(&self) -> u32 {
        self.mask
    }
}

impl Default for Condition {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cond = Condition::new();
        assert_eq!(cond.phrase(), None);
        assert_eq!(cond.max(), -1);
        assert_eq!(cond.skip(), 0);
        assert_eq!(cond.auxiliary(), 32);
        assert!(cond.options().is_empty());
        assert_eq!(cond.mask(), 0);
    }

    #[test]
    fn test_negative_skip_keeps_previous() {
        let mut cond = Condition::new();
        cond.set_skip(5);
        cond.set_skip(-1);
        assert_eq!(cond.skip(), 5);
    }

    #[test]
    fn test_negative_max_keeps_previous() {
        let mut cond = Condition::new();
        cond.set_max(20);
        cond.set_max(-3);
        assert_eq!(cond.max(), 20);
    }

    #[test]
    fn test_phrase_sanitized() {
        let cond = Condition::new().with_phrase("  hello \r\n\t world  ");
        assert_eq!(cond.phrase(), Some("hello world"));
    }

    #[test]
    fn test_options_accumulate() {
        let mut cond = Condition::new();
        cond.set_options(SearchOptions::SURE);
        cond.set_options(SearchOptions::UNION);
        assert!(cond.options().contains(SearchOptions::SURE));
        assert!(cond.options().contains(SearchOptions::UNION));
        assert_eq!(cond.options().bits(), 1 | 32768);
    }

    #[test]
    fn test_attributes_keep_order() {
        let cond = Condition::new()
            .with_attribute("@author STREQ alice")
            .with_attribute("@size  NUMGT 10");
        assert_eq!(
            cond.attributes(),
            &["@author STREQ alice".to_string(), "@size NUMGT 10".to_string()]
        );
    }
}
