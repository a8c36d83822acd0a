use std::sync::Arc;

use askama::Template;
use portfolio_contact::{ContactSubmission, ErrorKind};
use thiserror::Error;

use crate::{EmailConfig, Mailer, OutgoingEmail, build_mailer};

pub const SUBJECT_PREFIX: &str = "[Portfolio] ";

#[derive(Template)]
#[template(path = "emails/contact.txt")]
struct ContactEmailTemplate<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Email service not configured")]
    NotConfigured,

    #[error("Failed to send message")]
    Dispatch(#[source] anyhow::Error),
}

impl NotifyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotConfigured => ErrorKind::Configuration,
            Self::Dispatch(_) => ErrorKind::Dependency,
        }
    }
}

/// Relays validated contact submissions to the site owner.
#[derive(Clone)]
pub struct ContactNotifier {
    mailer: Option<Arc<dyn Mailer>>,
    from: String,
    to: String,
}

impl ContactNotifier {
    pub fn new(
        mailer: Option<Arc<dyn Mailer>>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            mailer,
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn from_config(config: &EmailConfig) -> anyhow::Result<Self> {
        Ok(Self::new(
            build_mailer(config)?,
            &config.from_address,
            &config.contact_address,
        ))
    }

    pub fn is_configured(&self) -> bool {
        self.mailer.is_some()
    }

    pub fn compose(&self, submission: &ContactSubmission) -> Result<OutgoingEmail, askama::Error> {
        let text = ContactEmailTemplate {
            name: &submission.name,
            email: &submission.email,
            message: &submission.message,
        }
        .render()?;

        Ok(OutgoingEmail {
            from: self.from.clone(),
            to: self.to.clone(),
            reply_to: submission.email.clone(),
            subject: format!("{SUBJECT_PREFIX}{}", submission.subject),
            text,
        })
    }

    /// Send one email for `submission`. Never retries.
    pub async fn notify(&self, submission: &ContactSubmission) -> Result<(), NotifyError> {
        let Some(mailer) = &self.mailer else {
            return Err(NotifyError::NotConfigured);
        };

        let email = self
            .compose(submission)
            .map_err(|e| NotifyError::Dispatch(e.into()))?;

        mailer.send(&email).await.map_err(NotifyError::Dispatch)?;

        tracing::info!(to = %email.to, "Contact email sent");

        Ok(())
    }
}
