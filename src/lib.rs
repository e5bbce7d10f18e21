//! LRU Cache - A fixed-capacity in-memory key-value cache
//!
//! Constant-time lookup, insertion, update and least-recently-used eviction,
//! backed by a hash index over an arena-allocated recency list.

pub mod cache;
pub mod config;
pub mod demo;
pub mod error;
pub mod models;

pub use cache::{CacheStats, LruCache};
pub use config::Config;
pub use demo::run_demo;
pub use error::{CacheError, Result};
