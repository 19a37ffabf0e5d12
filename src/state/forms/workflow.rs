//! Submission lifecycle for one form
//!
//! Owns the `FormSubmission` state machine: idle, validating, submitting,
//! then succeeded or failed. The workflow mutates only the form it is
//! given; rendering is a projection of that state elsewhere.

use std::time::Instant;

use super::form::Form;
use super::validate::{validate, FieldCheck};
use crate::backend::{SubmissionAck, SubmissionError, SubmissionPayload};
use crate::state::notification::NotificationRequest;

/// Banner text after a successful submission
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! We will be in touch soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// One submission attempt; discarded after a terminal status is reached
/// and the form has been reset
#[derive(Debug)]
pub struct FormSubmission {
    pub checks: Vec<FieldCheck>,
    pub status: SubmissionStatus,
    pub started_at: Instant,
}

/// What `begin_submit` decided to do
#[derive(Debug)]
pub enum SubmitDecision {
    /// A prior attempt is still in its delay window; nothing was started
    Rejected,
    /// Validation failed; inline errors were applied to the form
    Invalid,
    /// Validation passed; hand the payload to the backend
    Accepted(SubmissionPayload),
}

/// Orchestrates one submit attempt from user intent to terminal feedback
#[derive(Debug, Default)]
pub struct FormWorkflow {
    submission: Option<FormSubmission>,
}

impl FormWorkflow {
    pub fn status(&self) -> SubmissionStatus {
        self.submission
            .as_ref()
            .map(|s| s.status)
            .unwrap_or_default()
    }

    /// True while an attempt is between validation and backend completion
    pub fn in_flight(&self) -> bool {
        matches!(
            self.status(),
            SubmissionStatus::Validating | SubmissionStatus::Submitting
        )
    }

    pub fn submission(&self) -> Option<&FormSubmission> {
        self.submission.as_ref()
    }

    /// Start a submit attempt. Validates every required field (no
    /// short-circuit), projects failing checks onto the form as inline
    /// errors, and on full success marks the form busy and returns the
    /// payload for the backend. A second call while an attempt is in
    /// flight is rejected.
    pub fn begin_submit(&mut self, form: &mut Form) -> SubmitDecision {
        if self.in_flight() {
            tracing::debug!(form = %form.name, "submit rejected, attempt already in flight");
            return SubmitDecision::Rejected;
        }

        let mut submission = FormSubmission {
            checks: Vec::new(),
            status: SubmissionStatus::Validating,
            started_at: Instant::now(),
        };

        let checks = validate(&form.fields);

        // Re-validation replaces prior annotations instead of stacking them
        form.clear_errors();
        let mut all_valid = true;
        for check in &checks {
            if !check.valid {
                all_valid = false;
                if let Some(field) = form.field_mut(&check.field) {
                    field.set_error(check.message.clone().unwrap_or_default());
                }
            }
        }
        submission.checks = checks;

        if !all_valid {
            tracing::debug!(form = %form.name, "validation failed");
            submission.status = SubmissionStatus::Failed;
            self.submission = Some(submission);
            return SubmitDecision::Invalid;
        }

        submission.status = SubmissionStatus::Submitting;
        self.submission = Some(submission);
        form.busy = true;
        tracing::info!(form = %form.name, "submission started");
        SubmitDecision::Accepted(form.payload())
    }

    /// Complete the in-flight attempt with the backend's result. Restores
    /// the submit control, resets the fields on success, and returns the
    /// banner to show. The submission value is discarded afterwards.
    pub fn finish(
        &mut self,
        form: &mut Form,
        result: Result<SubmissionAck, SubmissionError>,
    ) -> NotificationRequest {
        form.busy = false;
        let elapsed_ms = self
            .submission
            .as_ref()
            .map(|s| s.started_at.elapsed().as_millis() as u64)
            .unwrap_or_default();
        let request = match result {
            Ok(ack) => {
                tracing::info!(form = %form.name, reference = %ack.reference, elapsed_ms, "submission acknowledged");
                if let Some(submission) = &mut self.submission {
                    submission.status = SubmissionStatus::Succeeded;
                }
                form.reset_fields();
                NotificationRequest::success(SUCCESS_MESSAGE)
            }
            Err(err) => {
                tracing::warn!(form = %form.name, error = %err, "submission failed");
                if let Some(submission) = &mut self.submission {
                    submission.status = SubmissionStatus::Failed;
                }
                NotificationRequest::error(format!("Submission failed: {err}"))
            }
        };
        self.submission = None;
        request
    }
}
