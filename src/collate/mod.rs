//! Collation transform: locale-correct sort keys for text.
//! --------------------------------------------------------
//! A collation key is a byte sequence such that byte-wise comparison of two
//! keys agrees with the linguistic ordering of the underlying strings in a
//! given locale. The engine consumes this capability through the narrow
//! [`Collator`] trait so that an external collation library can be injected;
//! [`TailoredCollator`] is the built-in implementation covering the common
//! European tailorings.
//!
//! The `"C"` locale never reaches this module: its collation key is the raw
//! UTF-8 encoding of the value, produced directly by the key extractor.
//!
//! Keys must be stable across process invocations and platforms for a fixed
//! `(locale, value)` pair; that determinism is the reproducibility guarantee
//! the engine offers in place of environment-driven collation.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::OrderError;

mod cache;
mod tailor;

pub use cache::KeyCache;
pub use tailor::TailoredCollator;

/// A parsed locale identifier, e.g. `es`, `de_DE`, `sv-SE`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocaleId {
    /// ISO 639 language code, lowercased.
    pub language: String,
    /// Optional region code, uppercased. `None` for language-only locales.
    pub region: Option<String>,
}

impl LocaleId {
    /// Parse an identifier like `"de_DE"`, `"sv-SE"`, or `"es"`.
    /// Both `_` and `-` separate language and region.
    pub fn parse(s: &str) -> Result<Self, OrderError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(OrderError::invalid_locale(s));
        }
        let mut parts = trimmed.splitn(2, ['_', '-']);
        let language = parts.next().unwrap_or_default();
        if language.len() < 2
            || language.len() > 3
            || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(OrderError::invalid_locale(s));
        }
        let region = match parts.next() {
            None => None,
            Some(r) => {
                if r.len() != 2 || !r.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(OrderError::invalid_locale(s));
                }
                Some(r.to_ascii_uppercase())
            }
        };
        let id = LocaleId {
            language: language.to_ascii_lowercase(),
            region,
        };
        debug!(locale = %id, "parsed locale identifier");
        Ok(id)
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(r) => write!(f, "{}_{}", self.language, r),
            None => write!(f, "{}", self.language),
        }
    }
}

/// Pluggable collation capability.
///
/// Implementations must be pure: the same `(value, locale)` pair always
/// yields the same key, across calls, processes, and platforms.
pub trait Collator: Send + Sync {
    /// Produce a byte-comparable collation key for `text` under `locale`.
    fn key(&self, text: &str, locale: &LocaleId) -> Result<Vec<u8>, OrderError>;
}
