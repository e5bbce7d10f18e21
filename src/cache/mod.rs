//! Cache Module
//!
//! Provides a fixed-capacity in-memory cache with LRU eviction.

mod entry;
pub mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::{Entry, Handle};
pub use lru::RecencyList;
pub use stats::CacheStats;
pub use store::LruCache;
