//! Presentation layer for cognify
//!
//! This crate contains the CLI definition and the HTTP surface:
//! routes, request/response bodies and error mapping.

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use http::{ApiError, AppState, create_router};
