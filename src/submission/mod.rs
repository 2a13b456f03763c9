//! Application submission
//!
//! The wizard hands a finished draft to a [`SubmissionBackend`]. The default
//! backend simulates a slow endpoint and always succeeds; the retry layer and
//! background task work with any backend.

mod retry;
mod simulated;
mod task;
mod traits;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub use retry::{submit_with_retry, RetryPolicy, RetryStrategy};
pub use simulated::SimulatedBackend;
pub use task::PendingSubmission;
pub use traits::SubmissionBackend;

#[cfg(test)]
pub use traits::MockSubmissionBackend;

/// Confirmation returned by a successful submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    /// Identifier without the leading `#`, e.g. `AP2024417`
    pub application_id: String,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn new(application_id: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            submitted_at: Utc::now(),
        }
    }

    /// Identifier as shown to the applicant
    pub fn display_id(&self) -> String {
        format!("#{}", self.application_id)
    }
}

/// Why a submission did not go through
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("submission service unavailable")]
    Unavailable,

    #[error("submission timed out after {0:?}")]
    Timeout(Duration),

    #[error("application rejected: {reason}")]
    Rejected { reason: String },
}

impl SubmitError {
    /// Transient failures are worth another attempt
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable | Self::Timeout(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_id_has_hash_prefix() {
        let receipt = SubmissionReceipt::new("AP2024417");
        assert_eq!(receipt.display_id(), "#AP2024417");
    }

    #[test]
    fn test_retryable_errors() {
        assert!(SubmitError::Unavailable.is_retryable());
        assert!(SubmitError::Timeout(Duration::from_secs(1)).is_retryable());
        assert!(!SubmitError::Rejected {
            reason: "duplicate".to_string()
        }
        .is_retryable());
    }

    #[test]
    fn test_error_messages() {
        let err = SubmitError::Rejected {
            reason: "position closed".to_string(),
        };
        assert_eq!(err.to_string(), "application rejected: position closed");
    }
}
