//! Generate Study Aid use case.
//!
//! One entry point per [`RequestKind`]. Each call renders the kind's
//! prompt, runs it through the [`FallbackChain`] and normalizes the winning
//! text into a [`CanonicalResult`]:
//!
//! ```text
//! request ──► cache? ──hit──► StudyAid { cached: true }
//!               │
//!              miss
//!               ▼
//!         prompt ──► FallbackChain ──► normalize ──► cache.put ──► StudyAid
//! ```
//!
//! Every call is wrapped by [`observe_usage`], which emits exactly one
//! [`UsageRecord`] whatever the outcome.

use crate::config::BehaviorConfig;
use crate::ports::result_cache::{NoResultCache, ResultCache};
use crate::ports::text_provider::ProviderKind;
use crate::ports::usage_recorder::{NoUsageRecorder, UsageRecorder};
use crate::use_cases::fallback_chain::FallbackChain;
use cognify_domain::{
    CacheKey, CanonicalResult, GlossaryRequest, NormalizeError, QuizRequest, RequestKind,
    StudyPromptTemplate, SummaryRequest, UsageRecord, normalize,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while generating a study aid.
///
/// Both variants mean "no result"; they are kept apart so callers and logs
/// can tell an outage from a provider that answered with garbage.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerateError {
    #[error("All providers failed to produce a response")]
    Exhausted,

    #[error("Provider response could not be normalized: {0}")]
    Normalization(#[from] NormalizeError),
}

/// A generated study aid and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyAid {
    pub result: CanonicalResult,
    /// Winning provider; `None` when served from the cache
    pub provider: Option<String>,
    pub cached: bool,
}

/// What the observer needs to know about a finished call.
#[derive(Debug)]
pub struct Observed {
    pub aid: StudyAid,
    pub model: String,
    /// Raw provider text, used for output token estimation
    pub raw: String,
}

/// Run `call` and emit exactly one [`UsageRecord`] for it.
///
/// The record is chosen from the outcome: `cache_hit` for cached aids,
/// `success` with token/cost estimates for fresh ones, `failure` carrying
/// the error message otherwise.
pub async fn observe_usage<F>(
    recorder: &dyn UsageRecorder,
    kind: RequestKind,
    prompt: &str,
    call: F,
) -> Result<StudyAid, GenerateError>
where
    F: Future<Output = Result<Observed, GenerateError>>,
{
    let started = Instant::now();
    let result = call.await;
    let elapsed = started.elapsed();

    let record = match &result {
        Ok(observed) if observed.aid.cached => UsageRecord::cache_hit(kind, elapsed),
        Ok(observed) => UsageRecord::success(
            kind,
            observed.aid.provider.clone().unwrap_or_default(),
            observed.model.clone(),
            elapsed,
            prompt,
            &observed.raw,
        ),
        Err(e) => UsageRecord::failure(kind, elapsed, e.to_string()),
    };
    recorder.record(record);

    result.map(|observed| observed.aid)
}

/// Use case producing quizzes, summaries and glossaries.
pub struct GenerateStudyAidUseCase {
    chain: FallbackChain,
    templates: StudyPromptTemplate,
    cache: Arc<dyn ResultCache>,
    usage: Arc<dyn UsageRecorder>,
    behavior: BehaviorConfig,
}

impl GenerateStudyAidUseCase {
    pub fn new(chain: FallbackChain) -> Self {
        Self {
            chain,
            templates: StudyPromptTemplate::default(),
            cache: Arc::new(NoResultCache),
            usage: Arc::new(NoUsageRecorder),
            behavior: BehaviorConfig::default(),
        }
    }

    pub fn with_cache(mut self, cache: Arc<dyn ResultCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_usage_recorder(mut self, usage: Arc<dyn UsageRecorder>) -> Self {
        self.usage = usage;
        self
    }

    /// Apply behavior settings; the chain picks up the attempt timeout.
    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.templates = StudyPromptTemplate::new(behavior.max_context_chars);
        self.chain = self.chain.with_behavior(&behavior);
        self.behavior = behavior;
        self
    }

    pub fn chain(&self) -> &FallbackChain {
        &self.chain
    }

    pub async fn generate_quiz(&self, request: &QuizRequest) -> Result<StudyAid, GenerateError> {
        let prompt = self.templates.quiz(request);
        // Question count joins the difficulty so 5- and 10-question quizzes differ.
        let key = CacheKey::new(
            RequestKind::Quiz,
            &request.context_text,
            &request.topic,
            &format!("{}/{}", request.difficulty, request.num_questions),
        );
        self.execute(RequestKind::Quiz, &prompt, key).await
    }

    pub async fn generate_summary(
        &self,
        request: &SummaryRequest,
    ) -> Result<StudyAid, GenerateError> {
        let prompt = self.templates.summary(request);
        let key = CacheKey::new(
            RequestKind::Summary,
            &request.context_text,
            &request.topic,
            "",
        );
        self.execute(RequestKind::Summary, &prompt, key).await
    }

    pub async fn generate_glossary(
        &self,
        request: &GlossaryRequest,
    ) -> Result<StudyAid, GenerateError> {
        let prompt = self.templates.glossary(request);
        let key = CacheKey::new(
            RequestKind::Glossary,
            &request.context_text,
            &request.topic,
            "",
        );
        self.execute(RequestKind::Glossary, &prompt, key).await
    }

    async fn execute(
        &self,
        kind: RequestKind,
        prompt: &str,
        key: CacheKey,
    ) -> Result<StudyAid, GenerateError> {
        observe_usage(
            self.usage.as_ref(),
            kind,
            prompt,
            self.produce(kind, prompt, key),
        )
        .await
    }

    async fn produce(
        &self,
        kind: RequestKind,
        prompt: &str,
        key: CacheKey,
    ) -> Result<Observed, GenerateError> {
        if self.behavior.cache_enabled {
            if let Some(result) = self.cache.get(&key) {
                info!("Cache hit for {} ({})", kind, key);
                return Ok(Observed {
                    aid: StudyAid {
                        result,
                        provider: None,
                        cached: true,
                    },
                    model: "cache".to_string(),
                    raw: String::new(),
                });
            }
            debug!("Cache miss for {} ({})", kind, key);
        }

        debug!("Prompt for {}: {} chars", kind, prompt.chars().count());

        let Some(success) = self.chain.run(prompt).await else {
            warn!("No provider produced a {}", kind);
            return Err(GenerateError::Exhausted);
        };

        let result = normalize(&success.content, kind).map_err(|e| {
            warn!("Output from {} could not be normalized: {}", success.provider, e);
            GenerateError::from(e)
        })?;

        // Stand-in output is a placeholder; caching it would outlive the outage.
        if self.behavior.cache_enabled && success.kind != ProviderKind::StandIn {
            self.cache.put(key, result.clone());
        }

        Ok(Observed {
            aid: StudyAid {
                result,
                provider: Some(success.provider),
                cached: false,
            },
            model: success.model,
            raw: success.content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::text_provider::TextProvider;
    use crate::use_cases::fallback_chain::tests::ScriptedProvider;
    use cognify_domain::{StandInPayload, UsageStatus};
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    // ==================== Test Doubles ====================

    #[derive(Default)]
    struct MapCache {
        entries: Mutex<HashMap<CacheKey, CanonicalResult>>,
    }

    impl ResultCache for MapCache {
        fn get(&self, key: &CacheKey) -> Option<CanonicalResult> {
            self.entries.lock().unwrap().get(key).cloned()
        }

        fn put(&self, key: CacheKey, result: CanonicalResult) {
            self.entries.lock().unwrap().insert(key, result);
        }
    }

    impl MapCache {
        fn len(&self) -> usize {
            self.entries.lock().unwrap().len()
        }
    }

    #[derive(Default)]
    struct CollectingRecorder {
        records: Mutex<Vec<UsageRecord>>,
    }

    impl UsageRecorder for CollectingRecorder {
        fn record(&self, record: UsageRecord) {
            self.records.lock().unwrap().push(record);
        }
    }

    impl CollectingRecorder {
        fn statuses(&self) -> Vec<UsageStatus> {
            self.records
                .lock()
                .unwrap()
                .iter()
                .map(|r| r.status)
                .collect()
        }
    }

    /// Offline provider that answers like the production stand-in.
    struct EchoStandIn;

    #[async_trait::async_trait]
    impl TextProvider for EchoStandIn {
        fn kind(&self) -> ProviderKind {
            ProviderKind::StandIn
        }

        fn name(&self) -> &str {
            "stand-in"
        }

        fn model(&self) -> &str {
            "stand-in"
        }

        async fn generate(&self, prompt: &str) -> cognify_domain::ProviderOutcome {
            cognify_domain::ProviderOutcome::success(StandInPayload::for_prompt(prompt).render())
        }
    }

    /// Records every prompt it receives and answers like the stand-in.
    #[derive(Default)]
    struct CapturingProvider {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait::async_trait]
    impl TextProvider for CapturingProvider {
        fn kind(&self) -> ProviderKind {
            ProviderKind::Gemini
        }

        fn name(&self) -> &str {
            "capture"
        }

        fn model(&self) -> &str {
            "test-model"
        }

        async fn generate(&self, prompt: &str) -> cognify_domain::ProviderOutcome {
            self.prompts.lock().unwrap().push(prompt.to_string());
            cognify_domain::ProviderOutcome::success(StandInPayload::for_prompt(prompt).render())
        }
    }

    fn dyn_p(provider: Arc<impl TextProvider + 'static>) -> Arc<dyn TextProvider> {
        provider
    }

    fn use_case(providers: Vec<Arc<dyn TextProvider>>) -> GenerateStudyAidUseCase {
        GenerateStudyAidUseCase::new(FallbackChain::new(providers))
    }

    const QUIZ_JSON: &str = r#"```json
{"quizTitle": "Python Basics", "questions": [
  {"id": 1, "question": "Who created Python?", "options": ["Guido", "Linus", "Dennis", "Bjarne"], "answer": "Guido", "explanation": "Guido van Rossum."}
]}
```"#;

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_quiz_from_primary_provider() {
        let primary = ScriptedProvider::ok("gemini", QUIZ_JSON);
        let uc = use_case(vec![dyn_p(primary.clone()), dyn_p(Arc::new(EchoStandIn))]);

        let aid = uc
            .generate_quiz(&QuizRequest::new("Python was created by Guido.", "Python"))
            .await
            .unwrap();

        assert_eq!(aid.provider.as_deref(), Some("gemini"));
        assert!(!aid.cached);
        assert_eq!(aid.result.topic(), "Python Basics");
        let questions = aid.result.questions();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].answer, "Guido");
    }

    #[tokio::test]
    async fn test_stand_in_serves_every_kind() {
        let uc = use_case(vec![dyn_p(ScriptedProvider::failing("gemini")), dyn_p(Arc::new(EchoStandIn))]);

        let quiz = uc
            .generate_quiz(&QuizRequest::new("Some text", "Biology"))
            .await
            .unwrap();
        assert_eq!(quiz.provider.as_deref(), Some("stand-in"));
        assert_eq!(quiz.result.topic(), "Fallback Quiz");
        assert_eq!(quiz.result.questions()[0].options.len(), 4);

        let summary = uc
            .generate_summary(&SummaryRequest::new("Some text", "Biology"))
            .await
            .unwrap();
        assert!(!summary.result.summary().is_empty());

        let glossary = uc
            .generate_glossary(&GlossaryRequest::new("Some text", "Biology"))
            .await
            .unwrap();
        assert!(!glossary.result.terms().is_empty());
    }

    #[tokio::test]
    async fn test_exhausted_when_all_providers_fail() {
        let recorder = Arc::new(CollectingRecorder::default());
        let uc = use_case(vec![dyn_p(ScriptedProvider::failing("a")), dyn_p(ScriptedProvider::failing("b"))])
            .with_usage_recorder(recorder.clone());

        let err = uc
            .generate_summary(&SummaryRequest::new("text", "Topic"))
            .await
            .unwrap_err();

        assert_eq!(err, GenerateError::Exhausted);
        assert_eq!(recorder.statuses(), vec![UsageStatus::Error]);
        let records = recorder.records.lock().unwrap();
        assert_eq!(records[0].query_type, "generate_summary");
        assert!(records[0].error.as_deref().unwrap().contains("All providers"));
    }

    #[tokio::test]
    async fn test_unparsable_output_is_normalization_error() {
        let uc = use_case(vec![dyn_p(ScriptedProvider::ok("gemini", "Sorry, I cannot help."))]);

        let err = uc
            .generate_quiz(&QuizRequest::new("text", "Topic"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            GenerateError::Normalization(NormalizeError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn test_cache_short_circuits_chain() {
        let primary = ScriptedProvider::ok("gemini", QUIZ_JSON);
        let cache = Arc::new(MapCache::default());
        let recorder = Arc::new(CollectingRecorder::default());
        let uc = use_case(vec![dyn_p(primary.clone())])
            .with_cache(cache.clone())
            .with_usage_recorder(recorder.clone());
        let request = QuizRequest::new("Python was created by Guido.", "Python");

        let first = uc.generate_quiz(&request).await.unwrap();
        let second = uc.generate_quiz(&request).await.unwrap();

        assert!(!first.cached);
        assert!(second.cached);
        assert_eq!(second.provider, None);
        assert_eq!(first.result, second.result);
        assert_eq!(primary.call_count(), 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(
            recorder.statuses(),
            vec![UsageStatus::Success, UsageStatus::CacheHit]
        );
    }

    #[tokio::test]
    async fn test_cache_separates_kinds_and_question_counts() {
        let primary = ScriptedProvider::ok("gemini", QUIZ_JSON);
        let cache = Arc::new(MapCache::default());
        let uc = use_case(vec![dyn_p(primary.clone())]).with_cache(cache.clone());

        uc.generate_quiz(&QuizRequest::new("text", "T").with_num_questions(3))
            .await
            .unwrap();
        uc.generate_quiz(&QuizRequest::new("text", "T").with_num_questions(4))
            .await
            .unwrap();

        assert_eq!(primary.call_count(), 2);
        assert_eq!(cache.len(), 2);
    }

    #[tokio::test]
    async fn test_cache_disabled_by_behavior() {
        let primary = ScriptedProvider::ok("gemini", QUIZ_JSON);
        let cache = Arc::new(MapCache::default());
        let uc = use_case(vec![dyn_p(primary.clone())])
            .with_cache(cache.clone())
            .with_behavior(BehaviorConfig::default().with_cache(false));
        let request = QuizRequest::new("text", "T");

        uc.generate_quiz(&request).await.unwrap();
        uc.generate_quiz(&request).await.unwrap();

        assert_eq!(primary.call_count(), 2);
        assert_eq!(cache.len(), 0);
    }

    #[tokio::test]
    async fn test_stand_in_results_are_not_cached() {
        let cache = Arc::new(MapCache::default());
        let uc = use_case(vec![dyn_p(Arc::new(EchoStandIn))]).with_cache(cache.clone());

        let aid = uc
            .generate_glossary(&GlossaryRequest::new("text", "T"))
            .await
            .unwrap();

        assert!(!aid.cached);
        assert_eq!(cache.len(), 0);
    }

    #[tokio::test]
    async fn test_success_record_carries_provider_and_model() {
        let recorder = Arc::new(CollectingRecorder::default());
        let uc = use_case(vec![dyn_p(ScriptedProvider::ok("gemini", QUIZ_JSON))])
            .with_usage_recorder(recorder.clone());

        uc.generate_quiz(&QuizRequest::new("text", "T")).await.unwrap();

        let records = recorder.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].provider.as_deref(), Some("gemini"));
        assert_eq!(records[0].model, "test-model");
        assert!(records[0].input_tokens > 0);
        assert!(records[0].output_tokens > 0);
    }

    #[tokio::test]
    async fn test_concurrent_requests_each_record_usage() {
        let recorder = Arc::new(CollectingRecorder::default());
        let uc = use_case(vec![dyn_p(ScriptedProvider::ok("gemini", QUIZ_JSON))])
            .with_usage_recorder(recorder.clone());
        let requests: Vec<QuizRequest> = (1..=4)
            .map(|n| QuizRequest::new("text", "T").with_num_questions(n))
            .collect();

        let results =
            futures::future::join_all(requests.iter().map(|r| uc.generate_quiz(r))).await;

        assert!(results.iter().all(Result::is_ok));
        assert_eq!(recorder.statuses(), vec![UsageStatus::Success; 4]);
    }

    #[tokio::test]
    async fn test_observe_usage_passes_result_through() {
        let recorder = CollectingRecorder::default();
        let result = observe_usage(&recorder, RequestKind::Glossary, "prompt", async {
            Err(GenerateError::Exhausted)
        })
        .await;

        assert_eq!(result, Err(GenerateError::Exhausted));
        assert_eq!(recorder.statuses(), vec![UsageStatus::Error]);
    }

    #[tokio::test]
    async fn test_behavior_truncates_prompt_source() {
        let capture = Arc::new(CapturingProvider::default());
        let uc = use_case(vec![dyn_p(capture.clone())])
            .with_behavior(BehaviorConfig::default().with_max_context_chars(5));

        uc.generate_summary(&SummaryRequest::new("a very long source text", "T"))
            .await
            .unwrap();

        let prompts = capture.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].ends_with("SOURCE MATERIAL:\na ver"), "{}", prompts[0]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_behavior_timeout_reaches_chain() {
        let slow = ScriptedProvider::slow("gemini", QUIZ_JSON, Duration::from_secs(30));
        let uc = use_case(vec![dyn_p(slow.clone()), dyn_p(Arc::new(EchoStandIn))])
            .with_behavior(BehaviorConfig::with_timeout_seconds(1));

        let aid = uc
            .generate_quiz(&QuizRequest::new("text", "T"))
            .await
            .unwrap();

        assert_eq!(aid.provider.as_deref(), Some("stand-in"));
        assert_eq!(slow.call_count(), 1);
    }
}
