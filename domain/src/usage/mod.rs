//! Usage accounting: per-call cost and latency records.

pub mod pricing;
pub mod record;

pub use pricing::{ModelPricing, STAND_IN_MODEL, estimate_tokens};
pub use record::{UsageRecord, UsageStatus};
