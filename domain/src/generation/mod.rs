//! Generation domain
//!
//! - [`outcome::ProviderOutcome`]: what a single provider call returns
//! - [`stand_in::StandInPayload`]: canned output of the offline provider

pub mod outcome;
pub mod stand_in;

pub use outcome::{OutcomeStatus, ProviderOutcome};
pub use stand_in::StandInPayload;
