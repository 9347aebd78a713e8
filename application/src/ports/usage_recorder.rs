//! Port for cost/latency accounting.
//!
//! Defines the [`UsageRecorder`] trait that receives one [`UsageRecord`]
//! per study-aid call. This is separate from `tracing`-based diagnostics:
//! tracing carries human-readable messages, while this port captures a
//! machine-readable audit trail (JSONL).

use cognify_domain::UsageRecord;

/// Recording is synchronous and infallible so that accounting problems
/// never disrupt a request; implementations swallow their own I/O errors.
pub trait UsageRecorder: Send + Sync {
    fn record(&self, record: UsageRecord);
}

/// No-op implementation for tests and when usage logging is disabled.
pub struct NoUsageRecorder;

impl UsageRecorder for NoUsageRecorder {
    fn record(&self, _record: UsageRecord) {}
}
