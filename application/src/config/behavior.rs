//! Behavior configuration for study-aid use cases.

use cognify_domain::DEFAULT_MAX_CONTEXT_CHARS;
use std::time::Duration;

/// Application behavior configuration.
///
/// Controls how the fallback chain and the use case run: an optional
/// per-provider timeout, the size cap on embedded source text and whether
/// normalized results are cached.
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// Maximum time to wait for one provider before moving to the next.
    pub timeout: Option<Duration>,
    /// Characters of source material embedded in each prompt.
    pub max_context_chars: usize,
    /// Consult and populate the result cache.
    pub cache_enabled: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            max_context_chars: DEFAULT_MAX_CONTEXT_CHARS,
            cache_enabled: true,
        }
    }
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig with a timeout specified in seconds.
    pub fn with_timeout_seconds(seconds: u64) -> Self {
        Self {
            timeout: Some(Duration::from_secs(seconds)),
            ..Default::default()
        }
    }

    /// Creates a BehaviorConfig from an optional timeout in seconds.
    ///
    /// If `seconds` is `None`, no timeout is applied.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            timeout: seconds.map(Duration::from_secs),
            ..Default::default()
        }
    }

    pub fn with_max_context_chars(mut self, max_context_chars: usize) -> Self {
        self.max_context_chars = max_context_chars;
        self
    }

    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }
}
