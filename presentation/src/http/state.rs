//! Shared state handed to every handler.

use cognify_application::GenerateStudyAidUseCase;
use cognify_infrastructure::config::DEFAULT_MAX_UPLOAD_BYTES;
use std::sync::Arc;

/// Read-only after startup; cloned per request via `Arc`.
pub struct AppState {
    pub use_case: Arc<GenerateStudyAidUseCase>,
    /// Provider names in fallback order, reported by `/health`
    pub providers: Vec<String>,
    pub max_upload_bytes: usize,
    pub cors_allow_any: bool,
}

impl AppState {
    pub fn new(use_case: GenerateStudyAidUseCase) -> Self {
        let providers = use_case.chain().provider_names();
        Self {
            use_case: Arc::new(use_case),
            providers,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            cors_allow_any: true,
        }
    }

    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }

    pub fn with_cors_allow_any(mut self, cors_allow_any: bool) -> Self {
        self.cors_allow_any = cors_allow_any;
        self
    }
}
