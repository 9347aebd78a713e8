//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types at
//! the composition root.

mod providers;
mod runtime;
mod server;

pub use providers::{FileGeminiConfig, FileProvidersConfig};
pub use runtime::{FileCacheConfig, FileGenerationConfig, FileLoggingConfig, FileUsageConfig};
pub use server::{DEFAULT_MAX_UPLOAD_BYTES, FileServerConfig};

use cognify_application::BehaviorConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP listener settings
    pub server: FileServerConfig,
    /// Provider chain settings
    pub providers: FileProvidersConfig,
    /// Prompt rendering settings
    pub generation: FileGenerationConfig,
    /// Result cache settings
    pub cache: FileCacheConfig,
    /// Cost/latency audit log settings
    pub usage: FileUsageConfig,
    /// Diagnostic log output
    pub logging: FileLoggingConfig,
}

/// How serious a configuration problem is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The value is questionable but the service can start
    Warning,
    /// The service cannot start with this value
    Error,
}

/// A single problem found by [`FileConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted path of the offending key, e.g. `server.bind_address`
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn warning(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.to_string(),
            message: message.into(),
        }
    }

    fn error(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.server.bind_address.parse::<SocketAddr>().is_err() {
            issues.push(ConfigIssue::error(
                "server.bind_address",
                format!("'{}' is not a socket address", self.server.bind_address),
            ));
        }

        if self.server.max_upload_bytes == 0 {
            issues.push(ConfigIssue::error(
                "server.max_upload_bytes",
                "must be greater than zero",
            ));
        }

        if self.generation.max_context_chars == 0 {
            issues.push(ConfigIssue::error(
                "generation.max_context_chars",
                "must be greater than zero",
            ));
        }

        if self.providers.timeout_seconds == Some(0) {
            issues.push(ConfigIssue::warning(
                "providers.timeout_seconds",
                "0 makes every provider attempt time out immediately",
            ));
        }

        if self.providers.gemini.retry_attempts == 0 {
            issues.push(ConfigIssue::warning(
                "providers.gemini.retry_attempts",
                "0 is treated as a single attempt",
            ));
        }

        if self.providers.gemini.api_key.is_some() {
            issues.push(ConfigIssue::warning(
                "providers.gemini.api_key",
                format!(
                    "API key stored in config; prefer the {} environment variable",
                    self.providers.gemini.api_key_env
                ),
            ));
        }

        issues
    }

    /// Application behavior derived from the file settings.
    pub fn behavior(&self) -> BehaviorConfig {
        BehaviorConfig::from_timeout_seconds(self.providers.timeout_seconds)
            .with_max_context_chars(self.generation.max_context_chars)
            .with_cache(self.cache.enabled)
    }
}
