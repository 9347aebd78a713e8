//! HTTP server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};

/// Default upload cap for PDFs: 10 MiB
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Raw server configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Socket address to listen on
    pub bind_address: String,
    /// Largest accepted request body for PDF uploads (bytes)
    pub max_upload_bytes: usize,
    /// Allow cross-origin requests from any origin
    pub cors_allow_any: bool,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8000".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            cors_allow_any: true,
        }
    }
}
