//! Error types for the LRU cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key not present in the cache
    #[error("Key not found")]
    NotFound,

    /// Cache constructed with a capacity that cannot hold any entry
    #[error("Invalid capacity: {0} (capacity must be at least 1)")]
    InvalidCapacity(usize),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
