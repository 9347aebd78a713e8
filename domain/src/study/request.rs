//! Study request value objects

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Smallest quiz Cognify will generate.
pub const MIN_QUESTIONS: u32 = 1;
/// Largest quiz Cognify will generate.
pub const MAX_QUESTIONS: u32 = 15;

fn default_difficulty() -> String {
    "medium".to_string()
}

fn default_num_questions() -> u32 {
    5
}

/// Request for a multiple-choice quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRequest {
    /// Source material the questions are drawn from
    pub context_text: String,
    pub topic: String,
    /// Free-form difficulty label, usually "easy", "medium" or "hard"
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(default = "default_num_questions")]
    pub num_questions: u32,
}

impl QuizRequest {
    pub fn new(context_text: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            context_text: context_text.into(),
            topic: topic.into(),
            difficulty: default_difficulty(),
            num_questions: default_num_questions(),
        }
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    pub fn with_num_questions(mut self, num_questions: u32) -> Self {
        self.num_questions = num_questions;
        self
    }

    /// Only the question count is checked; blank text and topic are
    /// passed through to the provider unchanged.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&self.num_questions) {
            return Err(ValidationError::QuestionCountOutOfRange {
                min: MIN_QUESTIONS,
                max: MAX_QUESTIONS,
                actual: self.num_questions,
            });
        }
        Ok(())
    }
}

/// Request for a summary of the source material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub context_text: String,
    pub topic: String,
}

impl SummaryRequest {
    pub fn new(context_text: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            context_text: context_text.into(),
            topic: topic.into(),
        }
    }
}

/// Request for a glossary of key terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryRequest {
    pub context_text: String,
    pub topic: String,
}

impl GlossaryRequest {
    pub fn new(context_text: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            context_text: context_text.into(),
            topic: topic.into(),
        }
    }
}
