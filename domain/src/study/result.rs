//! Canonical result entity
//!
//! [`CanonicalResult`] is the only value that crosses from the generation
//! core to its callers. It wraps the normalized JSON mapping and guarantees
//! that `topic` and the kind's payload key are present. Typed views
//! ([`QuestionRecord`], [`GlossaryTermRecord`]) are derived tolerantly:
//! malformed provider output degrades to defaults instead of failing.

use super::kind::{PLACEHOLDER_TOPIC, RequestKind, TOPIC_KEY};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: u64,
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    pub explanation: String,
}

/// A single glossary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryTermRecord {
    pub term: String,
    pub definition: String,
}

/// Normalized, schema-consistent output for one request kind.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalResult {
    kind: RequestKind,
    fields: Map<String, Value>,
}

impl CanonicalResult {
    /// Wrap a mapping that already carries `topic` and the payload key.
    ///
    /// Only the normalizer builds results, so the invariant is checked in
    /// debug builds rather than reported.
    pub(crate) fn from_fields(kind: RequestKind, fields: Map<String, Value>) -> Self {
        debug_assert!(fields.contains_key(TOPIC_KEY));
        debug_assert!(fields.contains_key(kind.payload_key()));
        Self { kind, fields }
    }

    pub fn kind(&self) -> RequestKind {
        self.kind
    }

    /// The full normalized mapping, including any extra keys the provider sent.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    /// Raw payload value under the kind's canonical key.
    pub fn payload(&self) -> &Value {
        // Present by construction.
        self.fields
            .get(self.kind.payload_key())
            .unwrap_or(&Value::Null)
    }

    pub fn topic(&self) -> String {
        match self.fields.get(TOPIC_KEY) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => PLACEHOLDER_TOPIC.to_string(),
            Some(other) => other.to_string(),
        }
    }

    /// Questions of a quiz result. A single question object is accepted as
    /// a one-element list; non-object entries are skipped.
    pub fn questions(&self) -> Vec<QuestionRecord> {
        match self.payload() {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .filter_map(|(index, item)| item.as_object().map(|obj| question_from(index, obj)))
                .collect(),
            Value::Object(obj) if obj.contains_key("question") => vec![question_from(0, obj)],
            _ => Vec::new(),
        }
    }

    /// Summary text. A list of strings is joined line by line.
    pub fn summary(&self) -> String {
        match self.payload() {
            Value::Array(parts) => parts
                .iter()
                .map(text_of)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("\n"),
            other => text_of(other),
        }
    }

    /// Glossary terms. Besides a list of `{term, definition}` objects, a
    /// plain `{"term": "definition"}` mapping is accepted.
    pub fn terms(&self) -> Vec<GlossaryTermRecord> {
        match self.payload() {
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_object)
                .map(|obj| GlossaryTermRecord {
                    term: field_text(obj, "term"),
                    definition: field_text(obj, "definition"),
                })
                .collect(),
            Value::Object(obj) => obj
                .iter()
                .map(|(term, definition)| GlossaryTermRecord {
                    term: term.clone(),
                    definition: text_of(definition),
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

fn question_from(index: usize, obj: &Map<String, Value>) -> QuestionRecord {
    let id = match obj.get("id") {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
    .filter(|id| *id >= 1)
    .unwrap_or(index as u64 + 1);

    let options = match obj.get("options") {
        Some(Value::Array(options)) => options.iter().map(text_of).collect(),
        _ => Vec::new(),
    };

    QuestionRecord {
        id,
        question: field_text(obj, "question"),
        options,
        answer: field_text(obj, "answer"),
        explanation: field_text(obj, "explanation"),
    }
}

fn field_text(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key).map(text_of).unwrap_or_default()
}

/// Render a scalar as text; null and containers become empty strings.
fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}
