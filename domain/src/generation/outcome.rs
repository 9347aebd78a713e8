//! Provider outcome value object

use serde::{Deserialize, Serialize};

/// Whether a single provider invocation produced usable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Success,
    Error,
}

/// Result of one `generate` call.
///
/// On success `content` is the provider's raw text; on error it is a
/// human-readable diagnostic that is logged and then discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderOutcome {
    pub content: String,
    pub status: OutcomeStatus,
}

impl ProviderOutcome {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            status: OutcomeStatus::Success,
        }
    }

    pub fn error(diagnostic: impl Into<String>) -> Self {
        Self {
            content: diagnostic.into(),
            status: OutcomeStatus::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Success
    }
}
