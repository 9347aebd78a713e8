//! HTTP surface (axum).
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/` | service banner |
//! | GET | `/health` | provider list and features |
//! | POST | `/api/generate-quiz` | quiz from source text |
//! | POST | `/api/generate-summary` | summary from source text |
//! | POST | `/api/generate-glossary` | glossary from source text |
//! | POST | `/api/upload-pdf` | text extraction from a PDF upload |

pub mod dto;
pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the application router with body limit, CORS and request tracing.
pub fn create_router(state: AppState) -> Router {
    let max_upload_bytes = state.max_upload_bytes;
    let cors_allow_any = state.cors_allow_any;

    let mut router = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/api/generate-quiz", post(handlers::generate_quiz))
        .route("/api/generate-summary", post(handlers::generate_summary))
        .route("/api/generate-glossary", post(handlers::generate_glossary))
        .route("/api/upload-pdf", post(handlers::upload_pdf))
        .with_state(Arc::new(state))
        .layer(DefaultBodyLimit::max(max_upload_bytes));

    if cors_allow_any {
        router = router.layer(CorsLayer::permissive());
    }

    router.layer(TraceLayer::new_for_http())
}
