//! Response cache for showcase lookups.
//!
//! [`ResponseCache`] memoizes decoded JSON bodies keyed on the exact request
//! URL, so `/api/uid/{uid}` and `/api/uid/{uid}?info` are distinct entries.
//!
//! # Expiry and eviction
//!
//! Entries live for a fixed `ttl` measured from insertion; reads never extend
//! that lifetime. Independently of TTL, the cache holds at most
//! `max_entries` bodies and evicts the least-recently-used one when a new
//! key arrives at capacity.
//!
//! moka buffers reads and writes and applies them in a maintenance pass.
//! [`ResponseCache::insert`] runs that pass after every write, so recorded
//! reads reorder recency before the capacity bound is enforced and the entry
//! evicted is always the least recently used one. Expired entries are never
//! returned, but [`ResponseCache::entry_count`] only drops them after the
//! next maintenance pass.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use moka::policy::EvictionPolicy;
use serde_json::Value;

use crate::telemetry;

/// Configuration for the response cache.
///
/// ```rust
/// # use enka::CacheConfig;
/// # use std::time::Duration;
/// let config = CacheConfig::new()
///     .max_entries(500)
///     .ttl(Duration::from_secs(120));
/// ```
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached bodies. Default: 100.
    pub max_entries: u64,
    /// Time-to-live for cached bodies. Default: 60 seconds.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 100,
            ttl: Duration::from_secs(60),
        }
    }
}

impl CacheConfig {
    /// Create a new config with the default bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of cached bodies.
    pub fn max_entries(mut self, n: u64) -> Self {
        self.max_entries = n;
        self
    }

    /// Set the time-to-live for cached bodies.
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

/// In-memory LRU + TTL memo of request URL → decoded JSON body.
///
/// Clones share the same underlying storage.
#[derive(Clone)]
pub struct ResponseCache {
    cache: Cache<String, Arc<Value>>,
}

impl ResponseCache {
    /// Create a cache with the given bounds. The bounds are fixed for the
    /// cache's lifetime.
    pub fn new(config: &CacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_entries)
            .time_to_live(config.ttl)
            .eviction_policy(EvictionPolicy::lru())
            .build();
        Self { cache }
    }

    /// Look up a cached body.
    ///
    /// Returns `None` on miss or expiry. Emits cache hit/miss metrics.
    pub async fn get(&self, url: &str) -> Option<Arc<Value>> {
        match self.cache.get(url).await {
            Some(body) => {
                metrics::counter!(telemetry::CACHE_HITS_TOTAL).increment(1);
                Some(body)
            }
            None => {
                metrics::counter!(telemetry::CACHE_MISSES_TOTAL).increment(1);
                None
            }
        }
    }

    /// Insert (or overwrite) a body. Overwriting restarts the entry's TTL.
    ///
    /// The capacity bound is enforced before returning.
    pub async fn insert(&self, url: impl Into<String>, body: Arc<Value>) {
        self.cache.insert(url.into(), body).await;
        self.cache.run_pending_tasks().await;
    }

    /// Evict all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }

    /// Number of entries currently held, as of the last maintenance pass.
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Apply pending evictions and expirations now.
    pub async fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn miss_then_hit() {
        let cache = ResponseCache::new(&CacheConfig::default());
        assert!(cache.get("https://x/api/uid/1").await.is_none());

        cache
            .insert("https://x/api/uid/1", Arc::new(json!({"uid": "1"})))
            .await;
        let body = cache.get("https://x/api/uid/1").await.unwrap();
        assert_eq!(body["uid"], "1");
    }

    #[tokio::test]
    async fn info_variant_is_a_distinct_key() {
        let cache = ResponseCache::new(&CacheConfig::default());
        cache
            .insert("https://x/api/uid/1", Arc::new(json!({"full": true})))
            .await;
        assert!(cache.get("https://x/api/uid/1?info").await.is_none());
    }

    #[tokio::test]
    async fn clear_drops_everything() {
        let cache = ResponseCache::new(&CacheConfig::default());
        cache.insert("a", Arc::new(json!(1))).await;
        cache.insert("b", Arc::new(json!(2))).await;

        cache.clear();
        cache.run_pending_tasks().await;

        assert!(cache.get("a").await.is_none());
        assert!(cache.get("b").await.is_none());
        assert_eq!(cache.entry_count(), 0);
    }
}
