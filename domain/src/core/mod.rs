//! Core domain concepts shared across all subdomains.
//!
//! - [`error::NormalizeError`] / [`error::ValidationError`]: domain-level errors
//! - [`text`]: whitespace and truncation helpers for prompt text

pub mod error;
pub mod text;
