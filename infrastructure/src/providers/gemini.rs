//! Google Gemini provider.
//!
//! Calls the Generative Language API `generateContent` endpoint with a
//! single user turn and returns the concatenated text parts of the first
//! candidate. Transient failures are retried per [`RetryPolicy`]; whatever
//! is left is reported as one error outcome so the fallback chain can
//! move on.

use super::retry::{CallFailure, RetryPolicy};
use async_trait::async_trait;
use cognify_application::ports::text_provider::{ProviderKind, TextProvider};
use cognify_domain::ProviderOutcome;
use cognify_domain::core::text::preview;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT_SECS: u64 = 60;
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-flash-latest";

/// Google Gemini API provider
#[derive(Clone)]
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    retry: RetryPolicy,
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl GeminiProvider {
    /// Create a new Gemini provider
    pub fn new(api_key: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: GEMINI_BASE_URL.to_string(),
            retry: RetryPolicy::default(),
        })
    }

    /// Create with custom model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point at a different API root (proxies, tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    async fn send(&self, prompt: &str) -> Result<String, String> {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        debug!("Sending {} chars to Gemini model {}", prompt.len(), self.model);

        let request = &request;
        self.retry
            .execute(move || self.send_once(request))
            .await
            .map_err(|failure| failure.message)
    }

    async fn send_once(&self, request: &GeminiRequest) -> Result<String, CallFailure> {
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await
            .map_err(|e| {
                let is_transient = e.is_timeout() || e.is_connect();
                let message = format!("Failed to send request to Gemini API: {}", e.without_url());
                if is_transient {
                    CallFailure::transient(message)
                } else {
                    CallFailure::permanent(message)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = format!(
                "Gemini API request failed with status {}: {}",
                status,
                preview(&body, 300)
            );
            return Err(if is_transient_status(status) {
                CallFailure::transient(message)
            } else {
                CallFailure::permanent(message)
            });
        }

        let body: GeminiResponse = response.json().await.map_err(|e| {
            CallFailure::permanent(format!(
                "Failed to parse Gemini API response: {}",
                e.without_url()
            ))
        })?;

        let text = body.first_candidate_text();
        if text.trim().is_empty() {
            return Err(CallFailure::permanent(
                "Gemini returned no text in its first candidate",
            ));
        }
        Ok(text)
    }
}

/// Rate limiting and server-side errors are worth another attempt.
fn is_transient_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

#[async_trait]
impl TextProvider for GeminiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    fn name(&self) -> &str {
        ProviderKind::Gemini.as_str()
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> ProviderOutcome {
        match self.send(prompt).await {
            Ok(text) => ProviderOutcome::success(text),
            Err(diagnostic) => ProviderOutcome::error(diagnostic),
        }
    }
}

// ==================== Wire types ====================

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

impl GeminiResponse {
    fn first_candidate_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}
