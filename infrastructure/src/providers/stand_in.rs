//! Offline stand-in provider.
//!
//! Always succeeds with a canned payload shaped for the prompt's request
//! kind, so the service stays usable with no network provider configured.

use async_trait::async_trait;
use cognify_application::ports::text_provider::{ProviderKind, TextProvider};
use cognify_domain::{ProviderOutcome, STAND_IN_MODEL, StandInPayload};
use tracing::info;

#[derive(Debug, Clone, Copy, Default)]
pub struct StandInProvider;

impl StandInProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextProvider for StandInProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::StandIn
    }

    fn name(&self) -> &str {
        ProviderKind::StandIn.as_str()
    }

    fn model(&self) -> &str {
        STAND_IN_MODEL
    }

    async fn generate(&self, prompt: &str) -> ProviderOutcome {
        let payload = StandInPayload::for_prompt(prompt);
        info!("Serving offline {} payload", payload.kind());
        ProviderOutcome::success(payload.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cognify_domain::{RequestKind, normalize};

    #[tokio::test]
    async fn test_stand_in_output_normalizes_for_its_kind() {
        let provider = StandInProvider::new();
        let cases = [
            ("Generate a 5-question multiple-choice quiz.", RequestKind::Quiz),
            ("Summarize the following study material.", RequestKind::Summary),
            (
                "Extract a glossary of key terms from the following study material.",
                RequestKind::Glossary,
            ),
        ];

        for (prompt, kind) in cases {
            let outcome = provider.generate(prompt).await;
            assert!(outcome.is_success());
            let result = normalize(&outcome.content, kind).unwrap();
            assert!(!result.topic().is_empty());
        }
    }

    #[tokio::test]
    async fn test_stand_in_quiz_uses_fallback_title() {
        let outcome = StandInProvider::new().generate("Generate a quiz").await;
        let result = normalize(&outcome.content, RequestKind::Quiz).unwrap();
        assert_eq!(result.topic(), "Fallback Quiz");
        assert_eq!(result.questions()[0].options.len(), 4);
    }

    #[test]
    fn test_identity() {
        let provider = StandInProvider::new();
        assert_eq!(provider.kind(), ProviderKind::StandIn);
        assert_eq!(provider.name(), "stand-in");
        assert_eq!(provider.model(), "stand-in");
    }
}
