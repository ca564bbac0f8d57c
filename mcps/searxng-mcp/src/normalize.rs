//! Query normalization
//!
//! Collapses every run of characters outside `[A-Za-z0-9]` into a single
//! `_`. The mapping is lossy: `"foo bar"`, `"foo-bar"` and `"foo!!bar"` all
//! become `"foo_bar"`.

use regex::Regex;

const NON_ALPHANUMERIC_RUN: &str = "[^A-Za-z0-9]+";

/// Compiled normalization pattern, owned by the client that uses it
#[derive(Debug, Clone)]
pub struct QueryNormalizer {
    pattern: Regex,
}

impl QueryNormalizer {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(NON_ALPHANUMERIC_RUN).expect("Invalid normalization regex"),
        }
    }

    pub fn normalize(&self, query: &str) -> String {
        self.pattern.replace_all(query, "_").into_owned()
    }
}

impl Default for QueryNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
