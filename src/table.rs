//! In-memory table model for the ordering engine.
//! ----------------------------------------------
//! A `Table` is an ordered sequence of named, typed columns of equal length.
//! Columns are immutable inputs: the engine reads them to build sort keys and
//! never mutates them. `None` is the missing-value marker for every kind.
//!
//! The set of column kinds is closed by design: each kind either has a
//! defined fixed-width key encoding (int, real, bool, categorical), delegates
//! to the collation transform (text), or has no defined ordering at all
//! (complex), in which case ordering requests fail up front with
//! `UnsupportedColumnType`.

use serde::{Deserialize, Serialize};

use crate::error::OrderError;

/// Typed storage for one column. `None` entries are missing values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum ColumnData {
    Int(Vec<Option<i64>>),
    Real(Vec<Option<f64>>),
    Bool(Vec<Option<bool>>),
    Text(Vec<Option<String>>),
    /// Values are codes into `levels`; the level order is the sort order.
    /// Codes outside `levels` are treated as missing.
    Categorical {
        levels: Vec<String>,
        codes: Vec<Option<u32>>,
    },
    /// Complex numbers carry no total order and cannot participate in an
    /// ordering request.
    Complex(Vec<Option<(f64, f64)>>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Int(v) => v.len(),
            ColumnData::Real(v) => v.len(),
            ColumnData::Bool(v) => v.len(),
            ColumnData::Text(v) => v.len(),
            ColumnData::Categorical { codes, .. } => codes.len(),
            ColumnData::Complex(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Human-readable kind name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ColumnData::Int(_) => "int",
            ColumnData::Real(_) => "real",
            ColumnData::Bool(_) => "bool",
            ColumnData::Text(_) => "text",
            ColumnData::Categorical { .. } => "categorical",
            ColumnData::Complex(_) => "complex",
        }
    }
}

/// A named column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    pub fn new<S: Into<String>>(name: S, data: ColumnData) -> Self {
        Self { name: name.into(), data }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// An ordered collection of equally sized named columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Build a table, enforcing equal column lengths and unique names.
    pub fn new(columns: Vec<Column>) -> Result<Self, OrderError> {
        if let Some(first) = columns.first() {
            let expected = first.len();
            for col in &columns {
                if col.len() != expected {
                    return Err(OrderError::shape(format!(
                        "column '{}' has {} rows, expected {}",
                        col.name(),
                        col.len(),
                        expected
                    )));
                }
            }
        }
        for (i, col) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.name() == col.name()) {
                return Err(OrderError::shape(format!(
                    "duplicate column name '{}'",
                    col.name()
                )));
            }
        }
        Ok(Self { columns })
    }

    /// Number of rows (0 for a table with no columns).
    pub fn n_rows(&self) -> usize {
        self.columns.first().map(|c| c.len()).unwrap_or(0)
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_ragged_columns() {
        let err = Table::new(vec![
            Column::new("a", ColumnData::Int(vec![Some(1), Some(2)])),
            Column::new("b", ColumnData::Int(vec![Some(1)])),
        ])
        .unwrap_err();
        assert!(matches!(err, OrderError::TableShape { .. }));
    }

    #[test]
    fn new_rejects_duplicate_names() {
        let err = Table::new(vec![
            Column::new("a", ColumnData::Int(vec![Some(1)])),
            Column::new("a", ColumnData::Bool(vec![Some(true)])),
        ])
        .unwrap_err();
        assert!(matches!(err, OrderError::TableShape { .. }));
    }

    #[test]
    fn lookup_and_row_count() {
        let t = Table::new(vec![
            Column::new("a", ColumnData::Int(vec![Some(1), None, Some(3)])),
            Column::new(
                "b",
                ColumnData::Text(vec![Some("x".into()), Some("y".into()), None]),
            ),
        ])
        .unwrap();
        assert_eq!(t.n_rows(), 3);
        assert_eq!(t.n_columns(), 2);
        assert_eq!(t.column("b").map(|c| c.data().kind_name()), Some("text"));
        assert!(t.column("missing").is_none());
    }

    #[test]
    fn empty_table_has_zero_rows() {
        let t = Table::new(vec![]).unwrap();
        assert_eq!(t.n_rows(), 0);
        assert_eq!(t.n_columns(), 0);
    }
}
