//! Process-local result cache.
//!
//! Entries live until the process exits. There is no eviction and no
//! single-flight guard: two identical concurrent misses both store, and the
//! last write wins.

use cognify_application::ports::result_cache::ResultCache;
use cognify_domain::{CacheKey, CanonicalResult};
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::warn;

#[derive(Debug, Default)]
pub struct InMemoryResultCache {
    entries: RwLock<HashMap<CacheKey, CanonicalResult>>,
}

impl InMemoryResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResultCache for InMemoryResultCache {
    fn get(&self, key: &CacheKey) -> Option<CanonicalResult> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn put(&self, key: CacheKey, result: CanonicalResult) {
        match self.entries.write() {
            Ok(mut entries) => {
                entries.insert(key, result);
            }
            Err(_) => warn!("Result cache lock poisoned; dropping entry {}", key),
        }
    }
}
