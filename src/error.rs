//! Unified error model for the ordering engine.
//! All request-validation failures are detected before any sorting work
//! begins; there are no retryable failure modes. The enum is serde-tagged so
//! frontends can transport errors without re-encoding them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OrderError {
    /// The column's semantic type has no sort-key mapping.
    #[error("column '{column}' has no defined sort key mapping")]
    UnsupportedColumnType { column: String },

    /// The ordering request named no columns at all.
    #[error("ordering request contains no columns")]
    EmptyOrderSpec,

    /// A spec referenced a column that does not exist in the table.
    #[error("unknown column '{column}' in ordering request")]
    UnknownColumnReference { column: String },

    /// A named locale was requested but no collation capability is installed.
    #[error("locale '{locale}' requested but no collation capability is available")]
    LocaleUnavailable { locale: String },

    /// The locale string could not be parsed as "C", "legacy", or a
    /// language[-region] identifier.
    #[error("invalid locale identifier '{input}'")]
    InvalidLocaleIdentifier { input: String },

    /// Table construction failed: ragged column lengths or duplicate names.
    #[error("invalid table shape: {message}")]
    TableShape { message: String },
}

impl OrderError {
    pub fn unsupported<S: Into<String>>(column: S) -> Self {
        OrderError::UnsupportedColumnType { column: column.into() }
    }
    pub fn unknown_column<S: Into<String>>(column: S) -> Self {
        OrderError::UnknownColumnReference { column: column.into() }
    }
    pub fn locale_unavailable<S: Into<String>>(locale: S) -> Self {
        OrderError::LocaleUnavailable { locale: locale.into() }
    }
    pub fn invalid_locale<S: Into<String>>(input: S) -> Self {
        OrderError::InvalidLocaleIdentifier { input: input.into() }
    }
    pub fn shape<S: Into<String>>(message: S) -> Self {
        OrderError::TableShape { message: message.into() }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
