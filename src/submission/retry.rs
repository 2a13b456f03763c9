//! Retry with backoff around a submission backend

use super::{SubmissionBackend, SubmissionReceipt, SubmitError};
use crate::state::ApplicationDraft;
use std::time::Duration;

/// Delay between attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryStrategy {
    /// Retry immediately without delay
    Immediate,

    /// Retry with a fixed delay between attempts
    FixedDelay { delay: Duration },

    /// Double the delay after every failed attempt, up to `max_delay`
    ExponentialBackoff {
        initial_delay: Duration,
        max_delay: Duration,
    },
}

impl RetryStrategy {
    /// Delay before retry number `attempt` (0 for the first retry)
    pub fn delay_for(&self, attempt: u32) -> Duration {
        match self {
            Self::Immediate => Duration::ZERO,
            Self::FixedDelay { delay } => *delay,
            Self::ExponentialBackoff {
                initial_delay,
                max_delay,
            } => {
                let factor = 2u32.saturating_pow(attempt);
                initial_delay
                    .checked_mul(factor)
                    .unwrap_or(*max_delay)
                    .min(*max_delay)
            }
        }
    }
}

/// How often and how patiently to submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first one, at least 1
    pub max_attempts: u32,
    pub strategy: RetryStrategy,
    /// Upper bound for a single attempt
    pub attempt_timeout: Option<Duration>,
}

impl RetryPolicy {
    /// Single attempt, no timeout
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            strategy: RetryStrategy::Immediate,
            attempt_timeout: None,
        }
    }
}

impl RetryPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_millis(500);
    pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(5);
    pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Exponential backoff with the default attempt timeout
    pub fn exponential(max_attempts: u32, initial_delay: Duration, max_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            strategy: RetryStrategy::ExponentialBackoff {
                initial_delay,
                max_delay,
            },
            attempt_timeout: Some(Self::DEFAULT_ATTEMPT_TIMEOUT),
        }
    }

    pub fn with_attempt_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.attempt_timeout = timeout;
        self
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::exponential(
            Self::DEFAULT_MAX_ATTEMPTS,
            Self::DEFAULT_INITIAL_DELAY,
            Self::DEFAULT_MAX_DELAY,
        )
    }
}

async fn attempt(
    backend: &dyn SubmissionBackend,
    draft: &ApplicationDraft,
    timeout: Option<Duration>,
) -> Result<SubmissionReceipt, SubmitError> {
    match timeout {
        Some(limit) => tokio::time::timeout(limit, backend.submit(draft))
            .await
            .unwrap_or(Err(SubmitError::Timeout(limit))),
        None => backend.submit(draft).await,
    }
}

/// Submit `draft`, retrying transient failures according to `policy`.
///
/// Non-retryable errors and the error of the last attempt are returned as is.
pub async fn submit_with_retry(
    backend: &dyn SubmissionBackend,
    draft: &ApplicationDraft,
    policy: &RetryPolicy,
) -> Result<SubmissionReceipt, SubmitError> {
    let max_attempts = policy.max_attempts.max(1);
    let mut retries = 0;

    loop {
        match attempt(backend, draft, policy.attempt_timeout).await {
            Ok(receipt) => return Ok(receipt),
            Err(err) if err.is_retryable() && retries + 1 < max_attempts => {
                let delay = policy.strategy.delay_for(retries);
                retries += 1;
                tracing::warn!(
                    error = %err,
                    attempt = retries,
                    max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    "submission failed, retrying"
                );
                tokio::time::sleep(delay).await;
            }
            Err(err) => return Err(err),
        }
    }
}
