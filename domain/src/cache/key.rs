//! Cache key derivation
//!
//! The key hashes a prefix of the source text together with its length,
//! the topic, the difficulty and the request kind. Two inputs that agree on
//! all of these collide; that is an accepted limitation of prefix hashing.

use crate::core::text::take_chars;
use crate::study::RequestKind;
use sha2::{Digest, Sha256};

/// Number of leading characters of the source text that feed the hash.
pub const CACHE_KEY_PREFIX_CHARS: usize = 100;

/// Hex-encoded SHA-256 digest identifying a cacheable request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(kind: RequestKind, text: &str, topic: &str, difficulty: &str) -> Self {
        let raw = format!(
            "{}-{}-{}-{}-{}",
            kind.as_str(),
            take_chars(text, CACHE_KEY_PREFIX_CHARS),
            text.chars().count(),
            topic,
            difficulty
        );
        Self(format!("{:x}", Sha256::digest(raw.as_bytes())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
