//! Generation, cache, usage and logging sections

use cognify_domain::DEFAULT_MAX_CONTEXT_CHARS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[generation]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Characters of source material embedded in each prompt
    pub max_context_chars: usize,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self {
            max_context_chars: DEFAULT_MAX_CONTEXT_CHARS,
        }
    }
}

/// `[cache]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCacheConfig {
    pub enabled: bool,
}

impl Default for FileCacheConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// `[usage]`: cost/latency audit log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileUsageConfig {
    pub enabled: bool,
    /// JSONL file the records are appended to
    pub log_path: PathBuf,
}

impl Default for FileUsageConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_path: PathBuf::from("logs/cost_audit.jsonl"),
        }
    }
}

/// `[logging]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for daily-rotated log files; stderr only when unset
    pub dir: Option<PathBuf>,
}
