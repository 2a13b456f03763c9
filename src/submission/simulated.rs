//! Stand-in backend that fakes a slow endpoint

use super::{SubmissionBackend, SubmissionReceipt, SubmitError};
use crate::state::ApplicationDraft;
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

/// Waits a fixed delay, then always accepts the application
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
}

impl SimulatedBackend {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);
    const ID_PREFIX: &'static str = "AP2024";

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// `AP2024` followed by a number in `0..1000`, unpadded
    fn fabricate_id() -> String {
        let n: u32 = rand::thread_rng().gen_range(0..1000);
        format!("{}{n}", Self::ID_PREFIX)
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl SubmissionBackend for SimulatedBackend {
    async fn submit(&self, draft: &ApplicationDraft) -> Result<SubmissionReceipt, SubmitError> {
        tracing::debug!(
            delay_ms = self.delay.as_millis() as u64,
            position = %draft.position,
            "simulating submission"
        );
        tokio::time::sleep(self.delay).await;
        Ok(SubmissionReceipt::new(Self::fabricate_id()))
    }
}
