//! Study aid domain
//!
//! Request kinds, incoming requests, the canonical result and the
//! normalizer that produces it from free-form provider text.

pub mod kind;
pub mod normalize;
pub mod request;
pub mod result;

pub use kind::{PLACEHOLDER_TOPIC, RequestKind, TOPIC_ALIASES, TOPIC_KEY};
pub use normalize::{normalize, strip_code_fences};
pub use request::{GlossaryRequest, MAX_QUESTIONS, MIN_QUESTIONS, QuizRequest, SummaryRequest};
pub use result::{CanonicalResult, GlossaryTermRecord, QuestionRecord};
