//! Trait abstraction for the submission backend to enable mocking in tests

use async_trait::async_trait;
use thiserror::Error;

/// Everything a form hands over at submit time. Nothing in it is
/// persisted; the payload lives for the duration of one attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    pub form_name: String,
    /// Field name/value pairs in declaration order, hidden values last
    pub fields: Vec<(String, String)>,
}

/// Acknowledgement returned by a backend on success
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionAck {
    pub reference: String,
}

/// Ways a submission can fail. The simulated backend never produces
/// these; a real transport would.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("the backend rejected the submission: {0}")]
    Rejected(String),
    #[error("the backend is unavailable")]
    Unavailable,
}

/// Asynchronous submission capability, injected into the app so the
/// delivery mechanism can be swapped without touching validation logic
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionBackend: Send + Sync {
    /// Deliver one form submission and wait for the acknowledgement
    async fn submit(&self, payload: SubmissionPayload) -> Result<SubmissionAck, SubmissionError>;
}
