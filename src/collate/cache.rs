//! Shared memoization cache for collation keys.
//!
//! Keyed by `(locale, value)`. The cache is a pure performance optimization:
//! dropping or clearing it at any point cannot change any observable result,
//! because key computation is deterministic. Concurrent reads are safe and
//! population is idempotent, so a plain `RwLock` around the map is all the
//! coordination required.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::LocaleId;

#[derive(Debug, Default)]
pub struct KeyCache {
    map: RwLock<HashMap<(String, String), Arc<Vec<u8>>>>,
}

impl KeyCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the memoized key for `value` under `locale`.
    pub fn get(&self, locale: &LocaleId, value: &str) -> Option<Arc<Vec<u8>>> {
        self.map
            .read()
            .get(&(locale.to_string(), value.to_string()))
            .cloned()
    }

    /// Memoize a key. Re-inserting the same pair overwrites with an equal
    /// value and is harmless.
    pub fn insert(&self, locale: &LocaleId, value: &str, key: Arc<Vec<u8>>) {
        self.map
            .write()
            .insert((locale.to_string(), value.to_string()), key);
    }

    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.read().is_empty()
    }

    /// Discard all memoized keys.
    pub fn clear(&self) {
        self.map.write().clear();
    }
}
