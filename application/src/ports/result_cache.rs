//! Port for the best-effort result cache.
//!
//! Entries never expire and are never evicted. Two identical concurrent
//! requests may both miss and both store; the last write wins.

use cognify_domain::{CacheKey, CanonicalResult};

pub trait ResultCache: Send + Sync {
    fn get(&self, key: &CacheKey) -> Option<CanonicalResult>;

    fn put(&self, key: CacheKey, result: CanonicalResult);
}

/// No-op implementation for tests and when caching is disabled.
pub struct NoResultCache;

impl ResultCache for NoResultCache {
    fn get(&self, _key: &CacheKey) -> Option<CanonicalResult> {
        None
    }

    fn put(&self, _key: CacheKey, _result: CanonicalResult) {}
}
