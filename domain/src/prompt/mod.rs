//! Prompt domain
//!
//! Templates that turn study requests into provider prompts.

mod template;

pub use template::{DEFAULT_MAX_CONTEXT_CHARS, StudyPromptTemplate};
