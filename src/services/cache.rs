use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::SearchResponse;

/// Process-lifetime cache of computed search responses
///
/// Backed by a sharded concurrent map: reads proceed without blocking
/// writers and an inserted entry becomes visible atomically. Unbounded and
/// without TTL — entries live until the process exits. Responses are stored
/// behind `Arc` so cached entries are shared with in-flight requests
/// without cloning the payload.
pub struct ResponseCache {
    entries: moka::sync::Cache<String, Arc<SearchResponse>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self {
            entries: moka::sync::Cache::builder().build(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Look up a cached response by key
    pub fn get(&self, key: &str) -> Option<Arc<SearchResponse>> {
        match self.entries.get(key) {
            Some(response) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                tracing::debug!("Cache hit: {}", key);
                Some(response)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                tracing::trace!("Cache miss: {}", key);
                None
            }
        }
    }

    /// Store a response under `key`; a later insert overwrites an earlier one
    pub fn insert(&self, key: &str, response: Arc<SearchResponse>) {
        self.entries.insert(key.to_string(), response);
        tracing::trace!("Cache set: {}", key);
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        // Flush pending maintenance so the entry count is accurate
        self.entries.run_pending_tasks();

        CacheStats {
            entry_count: self.entries.entry_count(),
            hit_count: self.hits.load(Ordering::Relaxed),
            miss_count: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub entry_count: u64,
    pub hit_count: u64,
    pub miss_count: u64,
}
