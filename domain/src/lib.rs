//! Domain layer for cognify
//!
//! This crate contains the core study-aid logic: request kinds, the
//! canonical result, response normalization and prompt templates.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Request kinds
//!
//! Cognify generates three study aids: a **quiz**, a **summary** and a
//! **glossary**. The kind decides the prompt and the canonical payload key
//! (`questions`, `summary`, `terms`).
//!
//! ## Normalization
//!
//! Provider output is free-form text. [`normalize`] strips Markdown fences,
//! parses JSON and reconciles inconsistent field names (alias promotion)
//! so callers always receive a [`CanonicalResult`] with `topic` and the
//! payload key present.

pub mod cache;
pub mod core;
pub mod generation;
pub mod prompt;
pub mod study;
pub mod usage;

// Re-export commonly used types
pub use cache::CacheKey;
pub use core::error::{NormalizeError, ValidationError};
pub use generation::{OutcomeStatus, ProviderOutcome, StandInPayload};
pub use prompt::{DEFAULT_MAX_CONTEXT_CHARS, StudyPromptTemplate};
pub use study::{
    CanonicalResult, GlossaryRequest, GlossaryTermRecord, PLACEHOLDER_TOPIC, QuestionRecord,
    QuizRequest, RequestKind, SummaryRequest, normalize, strip_code_fences,
};
pub use usage::{ModelPricing, STAND_IN_MODEL, UsageRecord, UsageStatus};
