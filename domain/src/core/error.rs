//! Domain error types

use crate::study::RequestKind;
use thiserror::Error;

/// Reasons a provider's raw text could not become a canonical result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalizeError {
    #[error("Response is not valid JSON: {0}")]
    Malformed(String),

    #[error("Unexpected {found} for {kind} response; expected a JSON object")]
    UnexpectedShape {
        kind: RequestKind,
        found: &'static str,
    },
}

/// Validation failures for incoming study requests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("num_questions must be between {min} and {max}, got {actual}")]
    QuestionCountOutOfRange { min: u32, max: u32, actual: u32 },
}
