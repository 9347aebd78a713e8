//! Route handlers.

use super::dto::{
    GENERATION_FEATURES, GlossaryResponse, HealthResponse, PdfUploadResponse, QuizResponse,
    SERVICE_FEATURES, ServiceBanner, SummaryResponse,
};
use super::error::ApiError;
use super::state::AppState;
use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, State};
use cognify_application::GenerateError;
use cognify_domain::{GlossaryRequest, QuizRequest, RequestKind, SummaryRequest};
use cognify_infrastructure::pdf::{PdfError, extract_pdf_text};
use std::sync::Arc;
use tracing::{info, warn};

const UPLOAD_FIELD: &str = "file";

/// `GET /`
pub async fn root() -> Json<ServiceBanner> {
    Json(ServiceBanner {
        message: "Cognify API - AI-Powered Study Assistant (Full Study Suite)".to_string(),
        status: "running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        features: SERVICE_FEATURES.iter().map(|f| f.to_string()).collect(),
    })
}

/// `GET /health`
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        providers: state.providers.clone(),
        features: GENERATION_FEATURES.iter().map(|f| f.to_string()).collect(),
    })
}

/// `POST /api/generate-quiz`
pub async fn generate_quiz(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let aid = state
        .use_case
        .generate_quiz(&request)
        .await
        .map_err(|e| generation_failed(RequestKind::Quiz, e))?;

    let questions = aid.result.questions();
    if questions.is_empty() {
        return Err(ApiError::Internal(
            "No questions found in AI response. The AI may not have generated valid quiz questions."
                .to_string(),
        ));
    }

    Ok(Json(QuizResponse {
        success: true,
        topic: aid.result.topic(),
        total: questions.len(),
        questions,
        message: Some("Quiz generated successfully".to_string()),
    }))
}

/// `POST /api/generate-summary`
pub async fn generate_summary(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let Json(request) = payload?;

    let aid = state
        .use_case
        .generate_summary(&request)
        .await
        .map_err(|e| generation_failed(RequestKind::Summary, e))?;

    let summary = aid.result.summary();
    if summary.trim().is_empty() {
        return Err(ApiError::Internal(
            "No summary found in AI response.".to_string(),
        ));
    }

    Ok(Json(SummaryResponse {
        success: true,
        topic: aid.result.topic(),
        summary,
        message: Some("Summary generated successfully".to_string()),
    }))
}

/// `POST /api/generate-glossary`
pub async fn generate_glossary(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GlossaryRequest>, JsonRejection>,
) -> Result<Json<GlossaryResponse>, ApiError> {
    let Json(request) = payload?;

    let aid = state
        .use_case
        .generate_glossary(&request)
        .await
        .map_err(|e| generation_failed(RequestKind::Glossary, e))?;

    let terms = aid.result.terms();
    if terms.is_empty() {
        return Err(ApiError::Internal("No terms found in AI response.".to_string()));
    }

    Ok(Json(GlossaryResponse {
        success: true,
        topic: aid.result.topic(),
        total: terms.len(),
        terms,
        message: Some("Glossary generated successfully".to_string()),
    }))
}

/// `POST /api/upload-pdf`
pub async fn upload_pdf(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<PdfUploadResponse>, ApiError> {
    let mut multipart = multipart?;
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(UPLOAD_FIELD) {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await?;
            upload = Some((file_name, bytes));
            break;
        }
    }

    let Some((file_name, bytes)) = upload else {
        return Err(ApiError::Validation(format!(
            "Missing multipart field '{}'",
            UPLOAD_FIELD
        )));
    };

    if !file_name.ends_with(".pdf") {
        return Err(ApiError::BadRequest("File must be a PDF (.pdf)".to_string()));
    }

    info!("Extracting text from {} ({} bytes)", file_name, bytes.len());

    let extracted = tokio::task::spawn_blocking(move || extract_pdf_text(&bytes))
        .await
        .map_err(ApiError::internal)?;

    match extracted {
        Ok(document) => Ok(Json(PdfUploadResponse {
            success: true,
            message: Some(format!(
                "Successfully extracted text from {} page(s)",
                document.page_count
            )),
            extracted_text: document.text,
            page_count: document.page_count,
        })),
        Err(PdfError::NoText) => Err(ApiError::BadRequest(PdfError::NoText.to_string())),
        Err(e) => {
            warn!("PDF extraction failed for {}: {}", file_name, e);
            Err(ApiError::Internal(format!(
                "Error extracting text from PDF: {}",
                e
            )))
        }
    }
}

fn generation_failed(kind: RequestKind, err: GenerateError) -> ApiError {
    warn!("{} generation failed: {}", kind, err);
    match err {
        GenerateError::Exhausted => ApiError::Internal(format!(
            "Failed to generate {}. No AI provider returned a response.",
            kind
        )),
        GenerateError::Normalization(e) => {
            ApiError::Internal(format!("Error generating {}: {}", kind, e))
        }
    }
}
