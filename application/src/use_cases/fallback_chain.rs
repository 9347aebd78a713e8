//! Fallback chain executor
//!
//! Tries providers strictly in priority order and stops at the first
//! success. Failures are logged and swallowed here; callers only ever see
//! a value or "no result".

use crate::config::BehaviorConfig;
use crate::ports::text_provider::{ProviderKind, TextProvider};
use cognify_domain::ProviderOutcome;
use cognify_domain::core::text::preview;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// The winning provider's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainSuccess {
    pub kind: ProviderKind,
    pub provider: String,
    pub model: String,
    pub content: String,
}

/// Ordered providers; built once at startup and shared read-only.
#[derive(Clone)]
pub struct FallbackChain {
    providers: Vec<Arc<dyn TextProvider>>,
    attempt_timeout: Option<Duration>,
}

impl FallbackChain {
    pub fn new(providers: Vec<Arc<dyn TextProvider>>) -> Self {
        Self {
            providers,
            attempt_timeout: None,
        }
    }

    pub fn with_behavior(mut self, behavior: &BehaviorConfig) -> Self {
        self.attempt_timeout = behavior.timeout;
        self
    }

    pub fn providers(&self) -> &[Arc<dyn TextProvider>] {
        &self.providers
    }

    pub fn provider_names(&self) -> Vec<String> {
        self.providers.iter().map(|p| p.name().to_string()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Run `prompt` through the providers until one succeeds.
    ///
    /// Returns `None` only when every provider reported an error.
    pub async fn run(&self, prompt: &str) -> Option<ChainSuccess> {
        for (position, provider) in self.providers.iter().enumerate() {
            debug!(
                "Trying provider {} ({}/{})",
                provider.name(),
                position + 1,
                self.providers.len()
            );

            let outcome = self.attempt(provider.as_ref(), prompt).await;
            if outcome.is_success() {
                info!("Provider {} succeeded", provider.name());
                return Some(ChainSuccess {
                    kind: provider.kind(),
                    provider: provider.name().to_string(),
                    model: provider.model().to_string(),
                    content: outcome.content,
                });
            }

            warn!(
                "Provider {} failed: {}",
                provider.name(),
                preview(&outcome.content, 200)
            );
        }

        warn!("All {} providers failed", self.providers.len());
        None
    }

    /// One provider call, bounded by the configured timeout if any.
    async fn attempt(&self, provider: &dyn TextProvider, prompt: &str) -> ProviderOutcome {
        let Some(limit) = self.attempt_timeout else {
            return provider.generate(prompt).await;
        };

        match tokio::time::timeout(limit, provider.generate(prompt)).await {
            Ok(outcome) => outcome,
            Err(_) => ProviderOutcome::error(format!(
                "{} timed out after {}s",
                provider.name(),
                limit.as_secs_f64()
            )),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Test Doubles ====================

    pub(crate) struct ScriptedProvider {
        name: String,
        outcome: ProviderOutcome,
        delay: Option<Duration>,
        pub(crate) calls: AtomicUsize,
    }

    impl ScriptedProvider {
        pub(crate) fn ok(name: &str, content: &str) -> Arc<Self> {
            Arc::new(Self {
                name: name.to_string(),
                outcome: ProviderOutcome::success(content),
                delay: None,
                calls: AtomicUsize::new(0),
            })
        }

        pub(crate) fn failing(name: &str) -> Arc<Self> {
            Arc::new(Self {
                name: name.to_string(),
                outcome: ProviderOutcome::error(format!("{name} is down")),
                delay: None,
                calls: AtomicUsize::new(0),
            })
        }

        pub(crate) fn slow(name: &str, content: &str, delay: Duration) -> Arc<Self> {
            Arc::new(Self {
                name: name.to_string(),
                outcome: ProviderOutcome::success(content),
                delay: Some(delay),
                calls: AtomicUsize::new(0),
            })
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextProvider for ScriptedProvider {
        fn kind(&self) -> ProviderKind {
            ProviderKind::Gemini
        }

        fn name(&self) -> &str {
            &self.name
        }

        fn model(&self) -> &str {
            "test-model"
        }

        async fn generate(&self, _prompt: &str) -> ProviderOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.outcome.clone()
        }
    }

    fn chain(providers: &[Arc<ScriptedProvider>]) -> FallbackChain {
        FallbackChain::new(
            providers
                .iter()
                .map(|p| Arc::clone(p) as Arc<dyn TextProvider>)
                .collect(),
        )
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_first_success_wins() {
        let first = ScriptedProvider::ok("first", "one");
        let second = ScriptedProvider::ok("second", "two");
        let result = chain(&[first.clone(), second.clone()]).run("p").await.unwrap();

        assert_eq!(result.provider, "first");
        assert_eq!(result.content, "one");
        assert_eq!(result.model, "test-model");
        assert_eq!(second.call_count(), 0, "no provider runs after a success");
    }

    #[tokio::test]
    async fn test_failures_fall_through_in_order() {
        let a = ScriptedProvider::failing("a");
        let b = ScriptedProvider::failing("b");
        let c = ScriptedProvider::ok("c", "from c");
        let d = ScriptedProvider::ok("d", "from d");
        let result = chain(&[a.clone(), b.clone(), c.clone(), d.clone()])
            .run("p")
            .await
            .unwrap();

        assert_eq!(result.provider, "c");
        assert_eq!(result.content, "from c");
        assert_eq!(
            [a.call_count(), b.call_count(), c.call_count(), d.call_count()],
            [1, 1, 1, 0]
        );
    }

    #[tokio::test]
    async fn test_exhaustion_is_none() {
        let result = chain(&[ScriptedProvider::failing("a"), ScriptedProvider::failing("b")])
            .run("p")
            .await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_empty_chain_is_none() {
        let empty = FallbackChain::new(vec![]);
        assert!(empty.is_empty());
        assert!(empty.run("p").await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_moves_to_next_provider() {
        let slow = ScriptedProvider::slow("slow", "late", Duration::from_secs(30));
        let backup = ScriptedProvider::ok("backup", "on time");
        let chain = chain(&[slow.clone(), backup]).with_behavior(&BehaviorConfig::with_timeout_seconds(5));

        let result = chain.run("p").await.unwrap();
        assert_eq!(result.provider, "backup");
        assert_eq!(slow.call_count(), 1);
    }

    #[tokio::test]
    async fn test_provider_names_keep_order() {
        let names = chain(&[ScriptedProvider::ok("gemini", ""), ScriptedProvider::ok("stand-in", "")])
            .provider_names();
        assert_eq!(names, vec!["gemini", "stand-in"]);
    }
}
