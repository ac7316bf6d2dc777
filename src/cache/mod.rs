//! Key/value caching with per-entry TTL
//!
//! Pluggable backend trait consumed by the batch validator (word lookups) and
//! the word service (whole generation results). Backends are sync `&self`
//! traits; implementations needing mutation use interior mutability.
//!
//! Cache failures never fail a request: callers treat errors as misses.

mod memory;

pub use memory::InMemoryTtlCache;

use std::time::Duration;

/// Error type for cache backends
#[derive(Debug, Clone, thiserror::Error)]
#[error("Cache unavailable: {0}")]
pub struct CacheError(pub String);

/// A cached value together with its age
#[derive(Debug, Clone)]
pub struct CachedEntry<V> {
    pub value: V,
    /// Time since the entry was written
    pub age: Duration,
    /// TTL the entry was written with
    pub ttl: Duration,
}

/// Pluggable TTL cache backend
///
/// Writes are idempotent: re-writing a key with equivalent data is harmless,
/// so concurrent callers may duplicate work instead of serializing.
pub trait TtlCache<V: Clone>: Send + Sync {
    /// Look up a single key. Expired entries read as `None`.
    ///
    /// # Errors
    /// Returns `CacheError` when the backend is unreachable.
    fn get(&self, key: &str) -> Result<Option<CachedEntry<V>>, CacheError>;

    /// Look up many keys at once, preserving order
    ///
    /// # Errors
    /// Returns `CacheError` when the backend is unreachable.
    fn multi_get(&self, keys: &[String]) -> Result<Vec<Option<V>>, CacheError>;

    /// Store a value under a key with the given TTL
    ///
    /// # Errors
    /// Returns `CacheError` when the backend is unreachable.
    fn set(&self, key: &str, value: V, ttl: Duration) -> Result<(), CacheError>;
}
