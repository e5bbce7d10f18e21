//! Snapshot DTOs for cache diagnostics
//!
//! Read-only, serializable projections of a cache's contents.

use serde::Serialize;

use crate::cache::CacheStats;

/// Ordered copy of a cache's entries, most recently used first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheSnapshot<K, V> {
    /// Entries from front (MRU) to back (LRU)
    pub entries: Vec<SnapshotEntry<K, V>>,
    /// Number of entries at capture time
    pub size: usize,
    /// Fixed capacity of the cache
    pub capacity: usize,
    /// Capture time in RFC 3339 format
    pub taken_at: String,
}

/// A single key/value pair in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotEntry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> CacheSnapshot<K, V> {
    /// Builds a snapshot from pairs already in recency order.
    pub fn new(pairs: Vec<(K, V)>, capacity: usize) -> Self {
        let entries: Vec<_> = pairs
            .into_iter()
            .map(|(key, value)| SnapshotEntry { key, value })
            .collect();
        Self {
            size: entries.len(),
            entries,
            capacity,
            taken_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Statistics with the derived hit rate filled in.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsSnapshot {
    fn from(stats: CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}
