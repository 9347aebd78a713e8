//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod result_cache;
pub mod text_provider;
pub mod usage_recorder;
