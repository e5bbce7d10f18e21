//! Cache Statistics Module
//!
//! Counts lookups and evictions over the lifetime of a cache.

use serde::Serialize;

// == Cache Stats ==
/// Lookup and eviction counters.
///
/// Only `get` counts as a lookup; `contains` and `peek` are invisible here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Lookups that found their key
    pub hits: u64,
    /// Lookups that returned `NotFound`
    pub misses: u64,
    /// Entries dropped to make room for a new key
    pub evictions: u64,
    /// Entries currently held
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 before the first lookup.
    pub fn hit_rate(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }

    /// Total number of recorded lookups.
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    // == Recording ==
    pub(crate) fn record_lookup(&mut self, hit: bool) {
        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }
}
