//! Request kind value object
//!
//! A request kind selects the prompt template, the canonical payload key
//! and the alias keys the normalizer will accept in its place.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Canonical key every normalized result carries.
pub const TOPIC_KEY: &str = "topic";

/// Keys accepted in place of `topic`, in priority order.
pub const TOPIC_ALIASES: &[&str] = &["quizTitle", "quiz_title", "title"];

/// Topic used when neither `topic` nor any alias is present.
pub const PLACEHOLDER_TOPIC: &str = "Study Material";

/// The three study aids Cognify can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    Quiz,
    Summary,
    Glossary,
}

impl RequestKind {
    pub const ALL: [RequestKind; 3] = [RequestKind::Quiz, RequestKind::Summary, RequestKind::Glossary];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::Quiz => "quiz",
            RequestKind::Summary => "summary",
            RequestKind::Glossary => "glossary",
        }
    }

    /// Key under which the kind-specific payload lives in a canonical result.
    pub fn payload_key(&self) -> &'static str {
        match self {
            RequestKind::Quiz => "questions",
            RequestKind::Summary => "summary",
            RequestKind::Glossary => "terms",
        }
    }

    /// Keys accepted in place of [`payload_key`](Self::payload_key), in priority order.
    pub fn payload_aliases(&self) -> &'static [&'static str] {
        match self {
            RequestKind::Quiz => &["quiz", "quiz_questions", "items"],
            RequestKind::Summary => &["text", "content"],
            RequestKind::Glossary => &["vocabulary", "definitions", "items"],
        }
    }

    /// Payload substituted when no key or alias matched.
    pub fn empty_payload(&self) -> Value {
        match self {
            RequestKind::Quiz | RequestKind::Glossary => Value::Array(Vec::new()),
            RequestKind::Summary => Value::String(String::new()),
        }
    }

    /// Whether a bare JSON list may stand in for the whole result.
    pub fn accepts_bare_list(&self) -> bool {
        matches!(self, RequestKind::Quiz)
    }

    /// Operation name used in usage records (`generate_quiz`, ...).
    pub fn query_type(&self) -> &'static str {
        match self {
            RequestKind::Quiz => "generate_quiz",
            RequestKind::Summary => "generate_summary",
            RequestKind::Glossary => "generate_glossary",
        }
    }
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quiz" => Ok(RequestKind::Quiz),
            "summary" => Ok(RequestKind::Summary),
            "glossary" => Ok(RequestKind::Glossary),
            other => Err(format!("unknown request kind: {}", other)),
        }
    }
}
