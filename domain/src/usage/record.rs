//! Cost/latency record emitted once per study-aid call.

use super::pricing::{ModelPricing, estimate_tokens};
use crate::study::RequestKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome of an observed call as it appears in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageStatus {
    Success,
    Error,
    CacheHit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub timestamp: DateTime<Utc>,
    /// `generate_quiz`, `generate_summary` or `generate_glossary`
    pub query_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    pub model: String,
    pub latency_ms: f64,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub cost_usd: f64,
    pub status: UsageStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UsageRecord {
    /// A provider answered and its output normalized.
    pub fn success(
        kind: RequestKind,
        provider: impl Into<String>,
        model: impl Into<String>,
        elapsed: Duration,
        prompt: &str,
        output: &str,
    ) -> Self {
        let model = model.into();
        let input_tokens = estimate_tokens(prompt);
        let output_tokens = estimate_tokens(output);
        let cost = ModelPricing::for_model(&model).cost(input_tokens, output_tokens);
        Self {
            timestamp: Utc::now(),
            query_type: kind.query_type().to_string(),
            provider: Some(provider.into()),
            model,
            latency_ms: round_to(elapsed.as_secs_f64() * 1000.0, 2),
            input_tokens,
            output_tokens,
            cost_usd: round_to(cost, 6),
            status: UsageStatus::Success,
            error: None,
        }
    }

    /// No result was produced.
    pub fn failure(kind: RequestKind, elapsed: Duration, error: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            query_type: kind.query_type().to_string(),
            provider: None,
            model: "unknown".to_string(),
            latency_ms: round_to(elapsed.as_secs_f64() * 1000.0, 2),
            input_tokens: 0,
            output_tokens: 0,
            cost_usd: 0.0,
            status: UsageStatus::Error,
            error: Some(error.into()),
        }
    }

    /// Served from the result cache; always free.
    pub fn cache_hit(kind: RequestKind, elapsed: Duration) -> Self {
        Self {
            timestamp: Utc::now(),
            query_type: kind.query_type().to_string(),
            provider: None,
            model: "cache".to_string(),
            latency_ms: round_to(elapsed.as_secs_f64() * 1000.0, 2),
            input_tokens: 0,
            output_tokens: 0,
            cost_usd: 0.0,
            status: UsageStatus::CacheHit,
            error: None,
        }
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
