//! Configuration file loading for cognify
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `COGNIFY_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./cognify.toml` or `./.cognify.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/cognify/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, DEFAULT_MAX_UPLOAD_BYTES, FileCacheConfig, FileConfig, FileGeminiConfig,
    FileGenerationConfig, FileLoggingConfig, FileProvidersConfig, FileServerConfig,
    FileUsageConfig, Severity,
};
pub use loader::ConfigLoader;
