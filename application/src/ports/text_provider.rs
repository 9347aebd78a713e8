//! Text provider port
//!
//! Defines the single capability the generation core needs from a
//! provider: prompt in, raw text or failure out.

use async_trait::async_trait;
use cognify_domain::ProviderOutcome;

/// The closed set of provider variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// Google Gemini over HTTPS
    Gemini,
    /// Deterministic offline stand-in; always succeeds
    StandIn,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini",
            ProviderKind::StandIn => "stand-in",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A source of generated text for a prompt.
///
/// Implementations (adapters) live in the infrastructure layer.
/// `generate` never fails: network errors, authentication failures and
/// malformed upstream responses are reported as an error outcome whose
/// content is a diagnostic.
#[async_trait]
pub trait TextProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Display name used in logs and usage records.
    fn name(&self) -> &str;

    /// Model identifier used for pricing.
    fn model(&self) -> &str;

    async fn generate(&self, prompt: &str) -> ProviderOutcome;
}
