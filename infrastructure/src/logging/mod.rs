//! Logging infrastructure: structured usage logging.
//!
//! Provides [`JsonlUsageLogger`], a JSONL file writer that implements
//! the [`UsageRecorder`](cognify_application::UsageRecorder) port.

mod jsonl_logger;

pub use jsonl_logger::{DEFAULT_USAGE_LOG_PATH, JsonlUsageLogger};
