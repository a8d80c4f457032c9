//! Ordering policy and public façade.
//! ----------------------------------
//! `Engine::order` validates an ordering request up front, then runs one
//! stable sorter pass per participating column, last spec first. Pass
//! stability makes the final order respect the first spec as primary key
//! and each later spec as a successive tie-break, without ever building a
//! concatenated composite key.
//!
//! Three paths:
//! - fast: `"C"` locale, text keys are raw bytes, no collation invoked;
//! - slow: named locale, one collation key per distinct text value,
//!   memoized in the shared cache;
//! - legacy: deprecated comparison-based sort honoring an injectable
//!   comparator, kept for one release of backward compatibility.
//!
//! A call is synchronous and runs to completion or fails during validation;
//! no partial permutation is ever returned.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::collate::{Collator, KeyCache, LocaleId, TailoredCollator};
use crate::error::OrderError;
use crate::keys::{self, ColumnKeys};
use crate::radix;
use crate::request::{Direction, LocaleSelector, MissingPlacement, Mode, OrderSpec};
use crate::table::{Column, ColumnData, Table};

/// Row positions (0-based) such that reading rows in this order satisfies
/// the ordering request.
pub type Permutation = Vec<u32>;

/// Comparison hook used by the legacy path in place of explicit collation.
pub type LegacyComparator = dyn Fn(&str, &str) -> Ordering + Send + Sync;

/// The ordering engine. Collation is a construction-time capability: an
/// engine built without a collator refuses named locales instead of
/// silently substituting another ordering.
pub struct Engine {
    collator: Option<Arc<dyn Collator>>,
    legacy_cmp: Arc<LegacyComparator>,
    cache: Arc<KeyCache>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Engine with the built-in tailored collator installed.
    pub fn new() -> Self {
        Self::with_collator(Arc::new(TailoredCollator))
    }

    /// Engine with an injected collation capability.
    pub fn with_collator(collator: Arc<dyn Collator>) -> Self {
        Self {
            collator: Some(collator),
            legacy_cmp: Arc::new(|a: &str, b: &str| a.cmp(b)),
            cache: Arc::new(KeyCache::new()),
        }
    }

    /// Engine without any collation capability; named locales fail with
    /// `LocaleUnavailable`.
    pub fn without_collation() -> Self {
        Self {
            collator: None,
            legacy_cmp: Arc::new(|a: &str, b: &str| a.cmp(b)),
            cache: Arc::new(KeyCache::new()),
        }
    }

    /// Replace the legacy path's text comparator. Models "whatever collation
    /// the calling environment has configured" without ambient global state.
    pub fn with_legacy_comparator(mut self, cmp: Arc<LegacyComparator>) -> Self {
        self.legacy_cmp = cmp;
        self
    }

    /// The shared collation key cache (pure memoization; safe to clear).
    pub fn cache(&self) -> &KeyCache {
        &self.cache
    }

    /// Produce the permutation ordering `table` by `specs` under `locale`.
    ///
    /// All validation happens before any sorting work: unknown columns,
    /// unorderable column kinds, empty spec lists, and unavailable locales
    /// are rejected up front.
    pub fn order(
        &self,
        table: &Table,
        specs: &[OrderSpec],
        locale: &LocaleSelector,
        mode: Mode,
    ) -> Result<Permutation, OrderError> {
        self.validate(table, specs, locale)?;

        if mode == Mode::Legacy || *locale == LocaleSelector::Legacy {
            warn!(
                "legacy ordering path is deprecated and will be removed; \
                 pass an explicit locale instead"
            );
            return self.order_legacy(table, specs);
        }

        let named = match locale {
            LocaleSelector::Named(id) => Some(id),
            _ => None,
        };
        self.order_radix(table, specs, named)
    }

    fn validate(
        &self,
        table: &Table,
        specs: &[OrderSpec],
        locale: &LocaleSelector,
    ) -> Result<(), OrderError> {
        if specs.is_empty() {
            return Err(OrderError::EmptyOrderSpec);
        }
        if table.n_rows() > u32::MAX as usize {
            return Err(OrderError::shape(format!(
                "table has {} rows, more than a permutation can index",
                table.n_rows()
            )));
        }
        for spec in specs {
            let column = table
                .column(&spec.column)
                .ok_or_else(|| OrderError::unknown_column(&spec.column))?;
            if matches!(column.data(), ColumnData::Complex(_)) {
                return Err(OrderError::unsupported(column.name()));
            }
        }
        if let LocaleSelector::Named(id) = locale {
            if self.collator.is_none() {
                return Err(OrderError::locale_unavailable(id.to_string()));
            }
        }
        Ok(())
    }

    /// Radix pipeline: LSD at column granularity, specs processed last to
    /// first so stability composes the multi-key order.
    fn order_radix(
        &self,
        table: &Table,
        specs: &[OrderSpec],
        locale: Option<&LocaleId>,
    ) -> Result<Permutation, OrderError> {
        let n = table.n_rows();
        let mut perm: Permutation = (0..n as u32).collect();

        for spec in specs.iter().rev() {
            let column = table
                .column(&spec.column)
                .ok_or_else(|| OrderError::unknown_column(&spec.column))?;
            debug!(
                column = %spec.column,
                direction = ?spec.direction,
                kind = column.data().kind_name(),
                "[ORDER] radix pass"
            );
            let keyed = self.extract_column(column, spec, locale)?;
            match keyed {
                ColumnKeys::Scalar { values, ranks } => {
                    radix::sort_scalar(&mut perm, &values, &ranks);
                }
                ColumnKeys::Bytes { values, ranks } => {
                    let complemented = spec.direction == Direction::Descending;
                    radix::sort_text(&mut perm, &values, &ranks, complemented);
                }
            }
        }
        Ok(perm)
    }

    fn extract_column(
        &self,
        column: &Column,
        spec: &OrderSpec,
        locale: Option<&LocaleId>,
    ) -> Result<ColumnKeys, OrderError> {
        match locale {
            // Fast path: raw bytes, no collation transform invoked.
            None => keys::extract(column, spec, &mut |text: &str| Ok(keys::c_locale_key(text))),
            // Slow path: one collation key per distinct value, memoized
            // across requests by the shared cache.
            Some(id) => {
                let collator = self
                    .collator
                    .as_ref()
                    .ok_or_else(|| OrderError::locale_unavailable(id.to_string()))?;
                let mut seen: HashMap<String, Arc<Vec<u8>>> = HashMap::new();
                keys::extract(column, spec, &mut |text: &str| {
                    if let Some(key) = seen.get(text) {
                        return Ok((**key).clone());
                    }
                    let key = match self.cache.get(id, text) {
                        Some(key) => key,
                        None => {
                            let key = Arc::new(collator.key(text, id)?);
                            self.cache.insert(id, text, key.clone());
                            key
                        }
                    };
                    seen.insert(text.to_string(), key.clone());
                    Ok((*key).clone())
                })
            }
        }
    }

    /// Deprecated comparison-based path. Text runs through the injected
    /// legacy comparator; everything else compares on its natural order.
    fn order_legacy(&self, table: &Table, specs: &[OrderSpec]) -> Result<Permutation, OrderError> {
        let columns: Vec<&Column> = specs
            .iter()
            .map(|spec| {
                table
                    .column(&spec.column)
                    .ok_or_else(|| OrderError::unknown_column(&spec.column))
            })
            .collect::<Result<_, _>>()?;

        let mut perm: Permutation = (0..table.n_rows() as u32).collect();
        perm.sort_by(|&a, &b| {
            for (spec, &column) in specs.iter().zip(&columns) {
                let ord =
                    compare_rows(column, spec, a as usize, b as usize, self.legacy_cmp.as_ref());
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            Ordering::Equal
        });
        Ok(perm)
    }
}

/// Compare one column's values at rows `a` and `b` under the spec's
/// direction and missing placement.
fn compare_rows(
    column: &Column,
    spec: &OrderSpec,
    a: usize,
    b: usize,
    text_cmp: &(impl Fn(&str, &str) -> Ordering + ?Sized),
) -> Ordering {
    match column.data() {
        ColumnData::Int(v) => compare_options(&v[a], &v[b], spec, |x, y| x.cmp(y)),
        ColumnData::Real(v) => compare_options(&v[a], &v[b], spec, |x, y| x.total_cmp(y)),
        ColumnData::Bool(v) => compare_options(&v[a], &v[b], spec, |x, y| x.cmp(y)),
        ColumnData::Text(v) => {
            compare_options(&v[a].as_deref(), &v[b].as_deref(), spec, |x, y| {
                text_cmp(*x, *y)
            })
        }
        ColumnData::Categorical { levels, codes } => {
            let in_range = |c: &Option<u32>| c.filter(|&c| (c as usize) < levels.len());
            compare_options(&in_range(&codes[a]), &in_range(&codes[b]), spec, |x, y| {
                x.cmp(y)
            })
        }
        // rejected during validation; treat as tie rather than panic
        ColumnData::Complex(_) => Ordering::Equal,
    }
}

fn compare_options<T>(
    a: &Option<T>,
    b: &Option<T>,
    spec: &OrderSpec,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => match spec.missing {
            MissingPlacement::First => Ordering::Less,
            MissingPlacement::Last => Ordering::Greater,
        },
        (Some(_), None) => match spec.missing {
            MissingPlacement::First => Ordering::Greater,
            MissingPlacement::Last => Ordering::Less,
        },
        (Some(x), Some(y)) => {
            let ord = cmp(x, y);
            if spec.direction == Direction::Descending {
                ord.reverse()
            } else {
                ord
            }
        }
    }
}

/// Order `table` by `specs` with a default-configured engine (built-in
/// tailored collator installed).
pub fn order(
    table: &Table,
    specs: &[OrderSpec],
    locale: &LocaleSelector,
    mode: Mode,
) -> Result<Permutation, OrderError> {
    Engine::new().order(table, specs, locale, mode)
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
