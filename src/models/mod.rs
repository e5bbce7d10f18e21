//! Data models for cache diagnostics
//!
//! Serializable views used when dumping cache state.

mod snapshot;

pub use snapshot::{CacheSnapshot, SnapshotEntry, StatsSnapshot};
