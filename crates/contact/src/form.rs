//! Client side of the contact flow.
//!
//! [`ContactForm`] owns the four editable fields and the submit status. It
//! never performs I/O: the caller sends the [`ContactSubmission`] returned by
//! [`ContactForm::submit`] and feeds the outcome back through
//! [`ContactForm::complete`]. Time is passed in so resets are deterministic.

use std::time::{Duration, Instant};

use strum::{AsRefStr, Display};
use thiserror::Error;

use crate::ContactSubmission;

pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(6);
pub const ERROR_RESET_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl FormStatus {
    /// Submitting is disabled while a request is in flight and while the
    /// success notice is shown.
    pub fn can_submit(self) -> bool {
        matches!(self, Self::Idle | Self::Error)
    }
}

/// Outcome of one submission attempt, as seen by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success,
    Error(String),
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

#[derive(Display, AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("a submission is already {0:?}")]
    Busy(FormStatus),

    #[error("{0} is required")]
    MissingField(Field),
}

#[derive(Debug, Default)]
pub struct ContactForm {
    fields: ContactSubmission,
    status: FormStatus,
    reset_at: Option<Instant>,
}

impl ContactForm {
    pub fn new(fields: ContactSubmission) -> Self {
        Self {
            fields,
            ..Default::default()
        }
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut ContactSubmission {
        &mut self.fields
    }

    pub fn reset_at(&self) -> Option<Instant> {
        self.reset_at
    }

    /// Start a submission. Returns the payload to send exactly once.
    pub fn submit(&mut self) -> Result<ContactSubmission, FormError> {
        if !self.status.can_submit() {
            return Err(FormError::Busy(self.status));
        }

        if let Some(field) = self.first_empty_field() {
            return Err(FormError::MissingField(field));
        }

        self.status = FormStatus::Sending;
        self.reset_at = None;

        Ok(self.fields.clone())
    }

    /// Record the response for the in-flight submission. Ignored unless a
    /// submission is in flight.
    pub fn complete(&mut self, result: &SubmissionResult, now: Instant) {
        if self.status != FormStatus::Sending {
            tracing::debug!(status = ?self.status, "Ignoring result without an in-flight submission");
            return;
        }

        match result {
            SubmissionResult::Success => {
                self.status = FormStatus::Success;
                self.fields = ContactSubmission::default();
                self.reset_at = Some(now + SUCCESS_RESET_DELAY);
            }
            SubmissionResult::Error(_) => {
                self.status = FormStatus::Error;
                self.reset_at = Some(now + ERROR_RESET_DELAY);
            }
        }
    }

    /// Return to idle once the pending reset is due.
    pub fn tick(&mut self, now: Instant) {
        let Some(reset_at) = self.reset_at else {
            return;
        };

        if now >= reset_at {
            self.status = FormStatus::Idle;
            self.reset_at = None;
        }
    }

    fn first_empty_field(&self) -> Option<Field> {
        let fields = &self.fields;

        [
            (Field::Name, &fields.name),
            (Field::Email, &fields.email),
            (Field::Subject, &fields.subject),
            (Field::Message, &fields.message),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm::new(ContactSubmission::new(
            "Jane",
            "jane@x.com",
            "Hi",
            "Hello",
        ))
    }

    #[test]
    fn test_success_clears_fields_and_resets_after_six_seconds() {
        let mut form = filled();
        let now = Instant::now();

        let submission = form.submit().unwrap();
        assert_eq!(submission.name, "Jane");
        assert_eq!(form.status(), FormStatus::Sending);

        form.complete(&SubmissionResult::Success, now);
        assert_eq!(form.status(), FormStatus::Success);
        assert_eq!(form.fields(), &ContactSubmission::default());

        form.tick(now + Duration::from_secs(5));
        assert_eq!(form.status(), FormStatus::Success);

        form.tick(now + SUCCESS_RESET_DELAY);
        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.reset_at(), None);
    }

    #[test]
    fn test_error_keeps_fields_and_resets_after_five_seconds() {
        let mut form = filled();
        let now = Instant::now();

        form.submit().unwrap();
        form.complete(&SubmissionResult::Error("boom".to_owned()), now);

        assert_eq!(form.status(), FormStatus::Error);
        assert_eq!(form.fields().message, "Hello");

        form.tick(now + Duration::from_millis(4999));
        assert_eq!(form.status(), FormStatus::Error);

        form.tick(now + ERROR_RESET_DELAY);
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[test]
    fn test_submit_disabled_while_sending_and_on_success() {
        let mut form = filled();

        form.submit().unwrap();
        assert_eq!(form.submit(), Err(FormError::Busy(FormStatus::Sending)));

        form.complete(&SubmissionResult::Success, Instant::now());
        form.fields_mut().name = "Jane".to_owned();
        assert_eq!(form.submit(), Err(FormError::Busy(FormStatus::Success)));
    }

    #[test]
    fn test_resubmit_after_error_cancels_pending_reset() {
        let mut form = filled();
        let now = Instant::now();

        form.submit().unwrap();
        form.complete(&SubmissionResult::Error("boom".to_owned()), now);

        form.submit().unwrap();
        form.tick(now + ERROR_RESET_DELAY);

        assert_eq!(form.status(), FormStatus::Sending);
    }

    #[test]
    fn test_empty_field_blocks_submit() {
        let mut form = filled();
        form.fields_mut().subject.clear();

        assert_eq!(form.submit(), Err(FormError::MissingField(Field::Subject)));
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[test]
    fn test_complete_without_submit_is_ignored() {
        let mut form = filled();
        form.complete(&SubmissionResult::Success, Instant::now());

        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.fields().name, "Jane");
    }
}
