//! Simulated submission backend
//!
//! Stand-in for a real transport: waits a fixed delay, then acknowledges.
//! It cannot fail and cannot be cancelled; no data leaves the process.

use std::time::Duration;

use async_trait::async_trait;

use super::traits::{SubmissionAck, SubmissionBackend, SubmissionError, SubmissionPayload};
use crate::format::current_date;

#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
}

impl SimulatedBackend {
    /// Fixed round-trip delay of the simulation
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

    pub fn new() -> Self {
        Self {
            delay: Self::DEFAULT_DELAY,
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubmissionBackend for SimulatedBackend {
    async fn submit(&self, payload: SubmissionPayload) -> Result<SubmissionAck, SubmissionError> {
        tracing::debug!(form = %payload.form_name, delay_ms = self.delay.as_millis() as u64, "simulating submission");
        tokio::time::sleep(self.delay).await;
        Ok(SubmissionAck {
            reference: format!("{}-{}", payload.form_name, current_date()),
        })
    }
}
