//! Response bodies for the HTTP API.
//!
//! Request bodies are the domain request types themselves
//! ([`QuizRequest`](cognify_domain::QuizRequest) and friends).

use cognify_domain::{GlossaryTermRecord, QuestionRecord};
use serde::{Deserialize, Serialize};

/// Everything the service can do, as listed by `GET /`.
pub const SERVICE_FEATURES: [&str; 4] = ["quiz", "summary", "glossary", "pdf_upload"];
/// Generation features, as listed by `GET /health`.
pub const GENERATION_FEATURES: [&str; 3] = ["quiz", "summary", "glossary"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    pub success: bool,
    pub topic: String,
    pub questions: Vec<QuestionRecord>,
    pub total: usize,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub success: bool,
    pub topic: String,
    pub summary: String,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlossaryResponse {
    pub success: bool,
    pub topic: String,
    pub terms: Vec<GlossaryTermRecord>,
    pub total: usize,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfUploadResponse {
    pub success: bool,
    pub extracted_text: String,
    pub page_count: usize,
    pub message: Option<String>,
}

/// `GET /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceBanner {
    pub message: String,
    pub status: String,
    pub version: String,
    pub features: Vec<String>,
}

/// `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Provider names in fallback order
    pub providers: Vec<String>,
    pub features: Vec<String>,
}
