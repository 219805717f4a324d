//! In-memory TTL cache with lazy eviction

use std::time::Duration;

use chrono::Utc;
use dashmap::DashMap;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value as JsonValue;
use tracing::warn;

/// One cached value with its absolute expiry (epoch milliseconds)
#[derive(Debug, Clone)]
struct CacheEntry {
    value: JsonValue,
    expires_at: i64,
}

impl CacheEntry {
    fn is_expired(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at
    }
}

/// Process-local key/value cache with per-entry TTL.
///
/// Values are stored as JSON so heterogeneous payloads (stats, summaries,
/// chart series) share one map. Expiry is checked on every read and an
/// expired entry is deleted at that point - a value is never returned past
/// its TTL. The map is a `DashMap` because the runtime is multi-threaded;
/// individual operations are atomic, and the cache makes no cross-key
/// consistency promises.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: DashMap<String, CacheEntry>,
}

impl MemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Get the raw JSON value for a key, or None on miss or expiry.
    /// An expired entry is evicted here (lazy eviction, no background sweep).
    pub fn get(&self, key: &str) -> Option<JsonValue> {
        let now_ms = Utc::now().timestamp_millis();

        // Drop the read guard before removing to avoid deadlocking the shard
        let expired = match self.entries.get(key) {
            Some(entry) if entry.is_expired(now_ms) => true,
            Some(entry) => return Some(entry.value.clone()),
            None => return None,
        };

        if expired {
            self.entries.remove(key);
        }
        None
    }

    /// Get a typed value for a key. A value that no longer deserializes as
    /// `T` counts as a miss and is evicted.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.get(key)?;
        match serde_json::from_value(value) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(key, error = %e, "Evicting cache entry with stale shape");
                self.entries.remove(key);
                None
            }
        }
    }

    /// Store a value under a key with the given TTL
    ///
    /// # Errors
    /// Returns an error if the value cannot be serialized to JSON
    pub fn set<T: Serialize>(
        &self,
        key: impl Into<String>,
        value: &T,
        ttl: Duration,
    ) -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(value)?;
        let expires_at = Utc::now().timestamp_millis() + ttl.as_millis() as i64;
        self.entries.insert(key.into(), CacheEntry { value, expires_at });
        Ok(())
    }

    /// Remove one entry
    pub fn delete(&self, key: &str) {
        self.entries.remove(key);
    }

    /// Remove every entry
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Remove every entry whose key starts with `prefix`
    pub fn clear_by_prefix(&self, prefix: &str) {
        self.entries.retain(|key, _| !key.starts_with(prefix));
    }

    /// Number of entries currently held, including not-yet-evicted expired ones
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
