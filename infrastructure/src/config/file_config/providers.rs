//! Provider configuration from TOML (`[providers]` section)

use serde::{Deserialize, Serialize};

/// Google Gemini provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Put Gemini at the head of the chain when a key resolves.
    pub enabled: bool,
    /// Direct API key; prefer the env var.
    pub api_key: Option<String>,
    /// Environment variable name for the API key (default: "GOOGLE_API_KEY").
    pub api_key_env: String,
    /// Model identifier used in the request path.
    pub model: String,
    /// Base URL for the Generative Language API.
    pub base_url: String,
    /// Attempts per request, counting the first; timeouts, connection
    /// errors, 429 and 5xx responses are repeated with 2-10 s backoff.
    pub retry_attempts: u32,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: None,
            api_key_env: "GOOGLE_API_KEY".to_string(),
            model: "gemini-flash-latest".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            retry_attempts: 3,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Per-attempt timeout applied by the fallback chain (seconds).
    /// Unset means each provider's own HTTP timeout is the only bound.
    pub timeout_seconds: Option<u64>,
    /// Gemini settings.
    pub gemini: FileGeminiConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_partial_override() {
        let toml_str = r#"
[gemini]
model = "gemini-2.0-flash"
"#;
        let config: FileProvidersConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.model, "gemini-2.0-flash");
        assert_eq!(config.gemini.api_key_env, "GOOGLE_API_KEY");
        assert!(config.gemini.enabled);
        assert!(config.timeout_seconds.is_none());
        assert_eq!(config.gemini.retry_attempts, 3);
    }

    #[test]
    fn test_retry_attempts_override() {
        let toml_str = r#"
[gemini]
retry_attempts = 1
"#;
        let config: FileProvidersConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.retry_attempts, 1);
        assert_eq!(config.gemini.model, "gemini-flash-latest");
    }
}
