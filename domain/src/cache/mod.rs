//! Result cache keys

mod key;

pub use key::{CACHE_KEY_PREFIX_CHARS, CacheKey};
