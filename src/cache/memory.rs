//! In-process TTL cache

use super::{CacheError, CachedEntry, TtlCache};
use rustc_hash::FxHashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct Stored<V> {
    value: V,
    written: Instant,
    ttl: Duration,
}

impl<V> Stored<V> {
    fn expired(&self) -> bool {
        self.written.elapsed() >= self.ttl
    }
}

/// In-memory TTL cache backed by a mutex-guarded map
///
/// Expiry is lazy: entries are dropped when read after their TTL. Suitable as
/// the process-local store for a single service instance; a shared deployment
/// would implement [`TtlCache`] over an external store instead.
pub struct InMemoryTtlCache<V> {
    entries: Mutex<FxHashMap<String, Stored<V>>>,
}

impl<V> InMemoryTtlCache<V> {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(FxHashMap::default()),
        }
    }

    /// Number of live (unexpired) entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .map(|map| map.values().filter(|e| !e.expired()).count())
            .unwrap_or(0)
    }

    /// Whether the cache holds no live entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V> Default for InMemoryTtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Send> TtlCache<V> for InMemoryTtlCache<V> {
    fn get(&self, key: &str) -> Result<Option<CachedEntry<V>>, CacheError> {
        let mut map = self
            .entries
            .lock()
            .map_err(|_| CacheError("poisoned lock".to_string()))?;

        match map.get(key) {
            Some(stored) if !stored.expired() => Ok(Some(CachedEntry {
                value: stored.value.clone(),
                age: stored.written.elapsed(),
                ttl: stored.ttl,
            })),
            Some(_) => {
                map.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn multi_get(&self, keys: &[String]) -> Result<Vec<Option<V>>, CacheError> {
        let mut map = self
            .entries
            .lock()
            .map_err(|_| CacheError("poisoned lock".to_string()))?;

        let values = keys
            .iter()
            .map(|key| match map.get(key) {
                Some(stored) if !stored.expired() => Some(stored.value.clone()),
                Some(_) => {
                    map.remove(key);
                    None
                }
                None => None,
            })
            .collect();

        Ok(values)
    }

    fn set(&self, key: &str, value: V, ttl: Duration) -> Result<(), CacheError> {
        let mut map = self
            .entries
            .lock()
            .map_err(|_| CacheError("poisoned lock".to_string()))?;

        map.insert(
            key.to_string(),
            Stored {
                value,
                written: Instant::now(),
                ttl,
            },
        );

        Ok(())
    }
}
