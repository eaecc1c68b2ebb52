//! Search request parameters.
//!
//! Callers hand over a loosely-typed parameter map (typically straight
//! from a query string). Only a fixed whitelist of keys is recognized;
//! everything else is silently dropped so unknown parameters can never
//! reach the index.

use std::collections::HashMap;

use sift_query::fields::{ID_FIELD, MATCH_ALL};

/// Default page offset.
pub const DEFAULT_START: usize = 0;

/// Default page size.
pub const DEFAULT_ROWS: usize = 1000;

/// Default sort: primary-key ascending.
pub fn default_sort() -> String {
    format!("{ID_FIELD} asc")
}

/// A validated, whitelist-filtered search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Requested object kind (builtin kind or data-bag name).
    pub kind: Option<String>,
    /// Raw user query, defaulting to match-all.
    pub q: String,
    /// Sort specification.
    pub sort: String,
    /// Page offset.
    pub start: usize,
    /// Page size.
    pub rows: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            kind: None,
            q: MATCH_ALL.to_string(),
            sort: default_sort(),
            start: DEFAULT_START,
            rows: DEFAULT_ROWS,
        }
    }
}

impl SearchParams {
    /// Creates default parameters for one object kind.
    pub fn for_kind(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    /// Builds parameters from a raw key/value map, keeping only the
    /// recognized keys: `type`, `q`, `sort`, `start`, `rows`.
    ///
    /// Unknown keys are dropped; unparseable numeric values fall back to
    /// their defaults.
    pub fn from_raw(raw: &HashMap<String, String>) -> Self {
        let defaults = Self::default();

        Self {
            kind: raw.get("type").cloned(),
            q: raw.get("q").cloned().unwrap_or(defaults.q),
            sort: raw.get("sort").cloned().unwrap_or(defaults.sort),
            start: parse_or(raw.get("start"), DEFAULT_START),
            rows: parse_or(raw.get("rows"), DEFAULT_ROWS),
        }
    }
}

/// Parses an optional numeric parameter, falling back to `default`.
fn parse_or(value: Option<&String>, default: usize) -> usize {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}
