//! Text provider adapters and the chain factory.
//!
//! The chain is assembled once at startup: Gemini first when it has a
//! usable credential, the offline stand-in always last.

pub mod gemini;
pub mod retry;
pub mod stand_in;

pub use gemini::GeminiProvider;
pub use retry::{CallFailure, RetryPolicy};
pub use stand_in::StandInProvider;

use crate::config::FileProvidersConfig;
use cognify_application::ports::text_provider::TextProvider;
use cognify_application::use_cases::fallback_chain::FallbackChain;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while assembling the provider chain.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

const PLACEHOLDER_KEYS: &[&str] = &["your_api_key_here", "changeme", "none", "null"];

/// True for values that are obviously not a real credential.
pub fn is_placeholder_key(key: &str) -> bool {
    let key = key.trim().to_lowercase();
    key.is_empty()
        || PLACEHOLDER_KEYS.contains(&key.as_str())
        || key.starts_with("your_")
        || key.starts_with("xxx")
}

/// Resolve the Gemini key: the direct value wins, else the named env var.
pub fn resolve_gemini_key(
    config: &FileProvidersConfig,
    env: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    let gemini = &config.gemini;
    if let Some(key) = gemini.api_key.as_deref()
        && !is_placeholder_key(key)
    {
        return Some(key.trim().to_string());
    }

    env(&gemini.api_key_env)
        .filter(|key| !is_placeholder_key(key))
        .map(|key| key.trim().to_string())
}

/// Build the ordered provider list.
///
/// `env` looks up environment variables; the binary passes
/// `|name| std::env::var(name).ok()`.
pub fn build_provider_chain(
    config: &FileProvidersConfig,
    env: impl Fn(&str) -> Option<String>,
) -> Result<FallbackChain, ProviderError> {
    let mut providers: Vec<Arc<dyn TextProvider>> = Vec::new();

    if config.gemini.enabled {
        match resolve_gemini_key(config, env) {
            Some(key) => {
                let gemini = GeminiProvider::new(key)?
                    .with_model(&config.gemini.model)
                    .with_base_url(&config.gemini.base_url)
                    .with_retry(RetryPolicy::new(config.gemini.retry_attempts));
                info!(
                    "Gemini provider enabled (model: {}, attempts: {})",
                    config.gemini.model, config.gemini.retry_attempts
                );
                providers.push(Arc::new(gemini));
            }
            None => warn!(
                "No usable Gemini API key (set {}); serving offline responses only",
                config.gemini.api_key_env
            ),
        }
    }

    providers.push(Arc::new(StandInProvider::new()));

    Ok(FallbackChain::new(providers))
}
