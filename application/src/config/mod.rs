//! Application-level configuration.
//!
//! - [`BehaviorConfig`]: provider timeout, prompt size cap, caching

pub mod behavior;

pub use behavior::BehaviorConfig;
