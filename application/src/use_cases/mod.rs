//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod fallback_chain;
pub mod generate_study_aid;
