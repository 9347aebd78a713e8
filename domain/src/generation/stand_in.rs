//! Canned payloads for the offline stand-in provider.
//!
//! The shape is chosen from the prompt's instruction line (its first
//! non-empty line), so keywords that only occur in the topic or the source
//! material never change the shape:
//!
//! | Keywords in instruction | Shape |
//! |-------------------------|-------|
//! | `summary`, `summarize` | summary |
//! | `glossary`, `terms`, `extract` | glossary |
//! | anything else | quiz |

use crate::study::RequestKind;
use serde_json::{Value, json};

const SUMMARY_KEYWORDS: &[&str] = &["summary", "summarize"];
const GLOSSARY_KEYWORDS: &[&str] = &["glossary", "terms", "extract"];

/// Deterministic response used when no network provider is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandInPayload {
    kind: RequestKind,
}

impl StandInPayload {
    /// Pick the payload shape for a prompt.
    pub fn for_prompt(prompt: &str) -> Self {
        let instruction = prompt
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or_default()
            .to_lowercase();

        let kind = if SUMMARY_KEYWORDS.iter().any(|k| instruction.contains(k)) {
            RequestKind::Summary
        } else if GLOSSARY_KEYWORDS.iter().any(|k| instruction.contains(k)) {
            RequestKind::Glossary
        } else {
            RequestKind::Quiz
        };

        Self { kind }
    }

    pub fn kind(&self) -> RequestKind {
        self.kind
    }

    pub fn to_value(&self) -> Value {
        match self.kind {
            // Uses `quizTitle` on purpose: the normalizer promotes it to `topic`.
            RequestKind::Quiz => json!({
                "quizTitle": "Fallback Quiz",
                "questions": [
                    {
                        "id": 1,
                        "question": "The AI provider is at capacity. This is a sample question.",
                        "options": ["A", "B", "C", "D"],
                        "answer": "A",
                        "explanation": "Sample answer served by the offline fallback."
                    }
                ]
            }),
            RequestKind::Summary => json!({
                "topic": "Fallback Summary",
                "summary": "The AI provider is currently unavailable, so this placeholder summary was served by the offline fallback. Try again shortly for a summary of your material."
            }),
            RequestKind::Glossary => json!({
                "topic": "Fallback Glossary",
                "terms": [
                    {
                        "term": "Fallback",
                        "definition": "A substitute response used when the primary AI provider is unavailable."
                    },
                    {
                        "term": "Provider",
                        "definition": "A service that generates text for a given prompt."
                    }
                ]
            }),
        }
    }

    /// JSON text exactly as a provider would return it.
    pub fn render(&self) -> String {
        self.to_value().to_string()
    }
}
