//! Application layer for cognify
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    result_cache::{NoResultCache, ResultCache},
    text_provider::{ProviderKind, TextProvider},
    usage_recorder::{NoUsageRecorder, UsageRecorder},
};
pub use use_cases::fallback_chain::{ChainSuccess, FallbackChain};
pub use use_cases::generate_study_aid::{
    GenerateError, GenerateStudyAidUseCase, Observed, StudyAid, observe_usage,
};
