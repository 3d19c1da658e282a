//! Per-query result caching.
//!
//! Entries are keyed by the normalized query, language mode, and optional year.
//! The cache is unbounded: entries are never evicted or revalidated, only
//! dropped all at once by [`QueryCache::clear`].

use crate::types::{Language, SearchResult};
use ahash::AHashMap;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

/// Immutable shared result sequence. Cache hits hand out clones of the same `Arc`.
pub type Results = Arc<[SearchResult]>;

type Slot = Arc<OnceLock<Results>>;

/// Cache key for search results.
///
/// `year` stays an `Option` so "no year" cannot collide with any real year.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub query: String,
    pub language: Language,
    pub year: Option<u16>,
}

impl CacheKey {
    pub fn new(query: impl Into<String>, language: Language, year: Option<u16>) -> Self {
        Self {
            query: query.into(),
            language,
            year,
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of stored entries
    pub entries: usize,
    /// Lookups answered from an existing entry
    pub hits: u64,
    /// Lookups that computed a fresh result (one corpus scan each)
    pub misses: u64,
}

/// Thread-safe query result cache.
///
/// The map lock is only held to find or insert a key's slot. Computation runs
/// inside the slot's `OnceLock`, so concurrent identical queries compute once
/// while different queries proceed in parallel.
#[derive(Debug, Default)]
pub struct QueryCache {
    slots: Mutex<AHashMap<CacheKey, Slot>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached results for `key`, computing and storing them on a miss.
    pub fn get_or_compute(&self, key: CacheKey, compute: impl FnOnce() -> Results) -> Results {
        let slot = {
            let mut slots = self.slots.lock();
            Arc::clone(slots.entry(key).or_default())
        };

        let mut computed = false;
        let results = slot.get_or_init(|| {
            computed = true;
            compute()
        });

        if computed {
            self.misses.fetch_add(1, Ordering::Relaxed);
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }

        Arc::clone(results)
    }

    /// Return the cached results for `key` without computing anything.
    pub fn get(&self, key: &CacheKey) -> Option<Results> {
        let slots = self.slots.lock();
        slots.get(key).and_then(|slot| slot.get()).cloned()
    }

    /// Check whether a completed entry exists for `key`.
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.get(key).is_some()
    }

    /// Drop every entry. Hit/miss counters are kept.
    pub fn clear(&self) {
        self.slots.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.slots.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
