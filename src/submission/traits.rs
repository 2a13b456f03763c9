//! Trait abstraction for submission backends to enable mocking in tests

use super::{SubmissionReceipt, SubmitError};
use crate::state::ApplicationDraft;
use async_trait::async_trait;

/// Destination for finished applications
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionBackend: Send + Sync {
    /// Submit a complete draft, returning the assigned application id
    async fn submit(&self, draft: &ApplicationDraft) -> Result<SubmissionReceipt, SubmitError>;
}
