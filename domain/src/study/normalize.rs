//! Response normalization.
//!
//! Providers are not bound to a fixed JSON shape, so their raw text is
//! coerced into a [`CanonicalResult`] on a best-effort basis:
//!
//! 1. Strip Markdown fence markers (` ```json ` and ` ``` `) and trim
//! 2. Parse as JSON; failure is terminal ([`NormalizeError::Malformed`])
//! 3. A bare list becomes the question sequence (quiz only); any other
//!    non-object is rejected ([`NormalizeError::UnexpectedShape`])
//! 4. Ensure `topic`, promoting the first alias or using a placeholder
//! 5. Ensure the payload key, promoting the first alias or using an empty payload
//!
//! The pass is idempotent: a result that already has both canonical keys
//! is returned unchanged.

use super::kind::{PLACEHOLDER_TOPIC, RequestKind, TOPIC_ALIASES, TOPIC_KEY};
use super::result::CanonicalResult;
use crate::core::error::NormalizeError;
use serde_json::{Map, Value};

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Remove every ` ```json ` and ` ``` ` marker and surrounding whitespace.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace(JSON_FENCE, "").replace(FENCE, "").trim().to_string()
}

/// Normalize raw provider text into the canonical schema for `kind`.
pub fn normalize(raw: &str, kind: RequestKind) -> Result<CanonicalResult, NormalizeError> {
    let cleaned = strip_code_fences(raw);
    let parsed: Value =
        serde_json::from_str(&cleaned).map_err(|e| NormalizeError::Malformed(e.to_string()))?;

    let mut fields = match parsed {
        Value::Object(map) => map,
        Value::Array(items) if kind.accepts_bare_list() => {
            let mut map = Map::new();
            map.insert(kind.payload_key().to_string(), Value::Array(items));
            map
        }
        other => {
            return Err(NormalizeError::UnexpectedShape {
                kind,
                found: json_type_name(&other),
            });
        }
    };

    ensure_key(&mut fields, TOPIC_KEY, TOPIC_ALIASES, || {
        Value::String(PLACEHOLDER_TOPIC.to_string())
    });
    ensure_key(&mut fields, kind.payload_key(), kind.payload_aliases(), || {
        kind.empty_payload()
    });

    Ok(CanonicalResult::from_fields(kind, fields))
}

/// Make sure `key` exists: keep it if present, otherwise move the first
/// alias found into it, otherwise insert the fallback.
fn ensure_key(
    fields: &mut Map<String, Value>,
    key: &str,
    aliases: &[&str],
    fallback: impl FnOnce() -> Value,
) {
    if fields.contains_key(key) {
        return;
    }

    let promoted = aliases.iter().find_map(|alias| fields.remove(*alias));
    fields.insert(key.to_string(), promoted.unwrap_or_else(fallback));
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
