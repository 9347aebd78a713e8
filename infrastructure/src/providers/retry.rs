//! Bounded exponential backoff for transient provider failures.
//!
//! Only failures marked transient (timeouts, connection errors, 429 and
//! 5xx responses) are repeated. The provider still reports a single
//! outcome to the fallback chain once the attempts run out.

use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// A failed call and whether repeating it may help.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFailure {
    pub message: String,
    pub transient: bool,
}

impl CallFailure {
    pub fn transient(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            transient: true,
        }
    }

    pub fn permanent(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            transient: false,
        }
    }
}

impl std::fmt::Display for CallFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// How often and how patiently a provider call is repeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first; at least one is always made
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    /// Three attempts, waiting 2 s then 4 s, never more than 10 s.
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(2),
            max_delay: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Default::default()
        }
    }

    /// A single attempt.
    pub fn no_retry() -> Self {
        Self::new(1)
    }

    pub fn with_delays(mut self, base_delay: Duration, max_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self.max_delay = max_delay;
        self
    }

    /// Run `operation` until it succeeds, fails permanently or the attempts
    /// are used up. The last failure is returned.
    pub async fn execute<F, Fut, T>(&self, mut operation: F) -> Result<T, CallFailure>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, CallFailure>>,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut delay = self.base_delay;
        let mut attempts = 0;

        loop {
            attempts += 1;

            match operation().await {
                Ok(value) => {
                    if attempts > 1 {
                        info!("Provider call succeeded after {} attempts", attempts);
                    }
                    return Ok(value);
                }
                Err(failure) if !failure.transient => {
                    debug!("Non-retryable provider failure: {}", failure);
                    return Err(failure);
                }
                Err(failure) if attempts >= max_attempts => {
                    warn!(
                        "Provider call failed after {} attempts, giving up: {}",
                        attempts, failure
                    );
                    return Err(failure);
                }
                Err(failure) => {
                    warn!(
                        "Attempt {}/{} failed, retrying in {:?}: {}",
                        attempts, max_attempts, delay, failure
                    );
                    sleep(delay).await;
                    delay = (delay * 2).min(self.max_delay);
                }
            }
        }
    }
}
