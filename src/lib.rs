//!
//! arrange — multi-column, locale-aware ordering engine
//! ----------------------------------------------------
//! Given an in-memory [`Table`] and an ordering request (a sequence of
//! [`OrderSpec`]s plus a [`LocaleSelector`]), produce a [`Permutation`] of
//! row positions. The sort is stable, linear-time (LSD radix over per-column
//! sort keys), and reproducible: locale is an explicit argument, never
//! ambient process state, so the same request yields the same permutation on
//! every platform.
//!
//! ```
//! use arrange::{order, Column, ColumnData, LocaleSelector, Mode, OrderSpec, Table};
//!
//! let table = Table::new(vec![
//!     Column::new("a", ColumnData::Int(vec![Some(1), Some(1), Some(2)])),
//!     Column::new("b", ColumnData::Int(vec![Some(2), Some(1), Some(3)])),
//! ])?;
//! let specs = [OrderSpec::new("a"), OrderSpec::new("b").descending()];
//! let perm = order(&table, &specs, &LocaleSelector::C, Mode::Normal)?;
//! assert_eq!(perm, vec![0, 1, 2]);
//! # Ok::<(), arrange::OrderError>(())
//! ```
//!
//! Text columns sort by collation key: raw bytes under the default `"C"`
//! locale, or linguistically correct keys from a [`Collator`] under a named
//! locale. The built-in [`TailoredCollator`] covers common European
//! tailorings; any external collation library can be injected through
//! [`Engine::with_collator`].

pub mod collate;
pub mod engine;
pub mod error;
pub mod keys;
pub mod radix;
pub mod request;
pub mod table;

pub use collate::{Collator, KeyCache, LocaleId, TailoredCollator};
pub use engine::{order, Engine, LegacyComparator, Permutation};
pub use error::OrderError;
pub use request::{Direction, LocaleSelector, MissingPlacement, Mode, OrderSpec};
pub use table::{Column, ColumnData, Table};
