//! In-memory TTL cache for API reads, backed by `DashMap` for concurrent access.

use std::time::{Duration, Instant};

use dashmap::DashMap;

struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

/// Thread-safe cache of query results with time-to-live expiration.
///
/// Expired entries are lazily evicted on the next `get` for that key. A zero
/// TTL disables caching entirely.
pub struct QueryCache<V> {
    store: DashMap<String, CacheEntry<V>>,
    ttl: Duration,
}

impl<V: Clone> QueryCache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            store: DashMap::new(),
            ttl,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    /// Returns the cached value for `key`, or `None` if missing or expired.
    pub fn get(&self, key: &str) -> Option<V> {
        let entry = self.store.get(key)?;
        if Instant::now() >= entry.expires_at {
            drop(entry);
            self.store.remove(key);
            return None;
        }
        Some(entry.value.clone())
    }

    /// Inserts or overwrites an entry. No-op when caching is disabled.
    pub fn set(&self, key: impl Into<String>, value: V) {
        if !self.is_enabled() {
            return;
        }
        self.store.insert(
            key.into(),
            CacheEntry {
                value,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    pub fn invalidate(&self, key: &str) {
        self.store.remove(key);
    }
}
