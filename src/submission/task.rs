//! Background submission task polled from the event loop

use super::{submit_with_retry, RetryPolicy, SubmissionBackend, SubmissionReceipt, SubmitError};
use crate::state::ApplicationDraft;
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};
use uuid::Uuid;

/// A submission running on the tokio runtime.
///
/// Cannot be cancelled; dropping it only discards the result.
pub struct PendingSubmission {
    session_id: Uuid,
    rx: oneshot::Receiver<Result<SubmissionReceipt, SubmitError>>,
}

impl PendingSubmission {
    /// Spawn the submission of a snapshot of `draft`
    pub fn spawn(
        backend: Arc<dyn SubmissionBackend>,
        draft: ApplicationDraft,
        policy: RetryPolicy,
        session_id: Uuid,
    ) -> Self {
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let result = submit_with_retry(backend.as_ref(), &draft, &policy).await;
            match &result {
                Ok(receipt) => tracing::info!(
                    %session_id,
                    application_id = %receipt.application_id,
                    "application submitted"
                ),
                Err(err) => {
                    tracing::error!(%session_id, error = %err, "application submission failed")
                }
            }
            // Receiver gone means the session was discarded
            let _ = tx.send(result);
        });

        Self { session_id, rx }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Non-blocking check for the result
    pub fn poll(&mut self) -> Option<Result<SubmissionReceipt, SubmitError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => {
                tracing::error!(
                    session_id = %self.session_id,
                    "submission task ended without a result"
                );
                Some(Err(SubmitError::Unavailable))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::{MockSubmissionBackend, SimulatedBackend};
    use std::time::Duration;

    async fn wait_for(pending: &mut PendingSubmission) -> Result<SubmissionReceipt, SubmitError> {
        loop {
            if let Some(result) = pending.poll() {
                return result;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_is_empty_while_running() {
        let backend = Arc::new(SimulatedBackend::new(Duration::from_secs(2)));
        let mut pending = PendingSubmission::spawn(
            backend,
            ApplicationDraft::default(),
            RetryPolicy::none(),
            Uuid::new_v4(),
        );

        assert!(pending.poll().is_none());
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(pending.poll().is_none());

        let result = wait_for(&mut pending).await;
        assert!(result.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_is_delivered() {
        let mut backend = MockSubmissionBackend::new();
        backend
            .expect_submit()
            .returning(|_| Err(SubmitError::Rejected {
                reason: "closed".to_string(),
            }));

        let mut pending = PendingSubmission::spawn(
            Arc::new(backend),
            ApplicationDraft::default(),
            RetryPolicy::default(),
            Uuid::new_v4(),
        );

        let result = wait_for(&mut pending).await;
        assert!(matches!(result, Err(SubmitError::Rejected { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_keeps_session_id() {
        let id = Uuid::new_v4();
        let pending = PendingSubmission::spawn(
            Arc::new(SimulatedBackend::default()),
            ApplicationDraft::default(),
            RetryPolicy::none(),
            id,
        );
        assert_eq!(pending.session_id(), id);
    }
}
