//! Ordering request types.
//! -----------------------
//! An ordering request is a sequence of [`OrderSpec`]s (primary key first),
//! a [`LocaleSelector`], and a [`Mode`]. Locale selection is a pure function
//! of the request: no process-wide setting participates unless the caller
//! explicitly opts into the deprecated legacy path.

use serde::{Deserialize, Serialize};

use crate::collate::LocaleId;
use crate::error::OrderError;

/// Per-column sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

/// Where a column's missing values land, independent of direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingPlacement {
    First,
    #[default]
    Last,
}

/// One participating column: reference, direction, missing-value placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSpec {
    pub column: String,
    pub direction: Direction,
    pub missing: MissingPlacement,
}

impl OrderSpec {
    /// Ascending spec with missing values last.
    pub fn new<S: Into<String>>(column: S) -> Self {
        Self {
            column: column.into(),
            direction: Direction::default(),
            missing: MissingPlacement::default(),
        }
    }

    pub fn descending(mut self) -> Self {
        self.direction = Direction::Descending;
        self
    }

    pub fn missing_first(mut self) -> Self {
        self.missing = MissingPlacement::First;
        self
    }
}

/// Global locale selector for the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocaleSelector {
    /// Raw byte order for text; no external data, identical on every
    /// platform. The default.
    C,
    /// Linguistic ordering via the installed collation capability.
    Named(LocaleId),
    /// Whatever collation the calling environment has configured; only
    /// meaningful together with the deprecated legacy path.
    Legacy,
}

impl Default for LocaleSelector {
    fn default() -> Self {
        LocaleSelector::C
    }
}

impl LocaleSelector {
    /// Parse the request-level locale token: the literal `"C"`, the literal
    /// `"legacy"`, or a locale identifier.
    pub fn parse(s: &str) -> Result<Self, OrderError> {
        match s.trim() {
            "C" => Ok(LocaleSelector::C),
            "legacy" => Ok(LocaleSelector::Legacy),
            other => Ok(LocaleSelector::Named(LocaleId::parse(other)?)),
        }
    }
}

/// Execution mode. `Legacy` bypasses the radix pipeline in favor of the
/// pre-existing comparison-based order; it exists for one release of
/// backward compatibility and is slated for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Normal,
    Legacy,
}
