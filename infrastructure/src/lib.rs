//! Infrastructure layer for cognify
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the Gemini and stand-in providers, the
//! in-memory result cache, the JSONL usage log, PDF text extraction and
//! configuration file loading.

pub mod cache;
pub mod config;
pub mod logging;
pub mod pdf;
pub mod providers;

// Re-export commonly used types
pub use cache::InMemoryResultCache;
pub use config::{ConfigIssue, ConfigLoader, FileConfig, Severity};
pub use logging::{DEFAULT_USAGE_LOG_PATH, JsonlUsageLogger};
pub use pdf::{ExtractedDocument, PdfError, extract_pdf_text};
pub use providers::{
    CallFailure, GeminiProvider, ProviderError, RetryPolicy, StandInProvider,
    build_provider_chain, resolve_gemini_key,
};
