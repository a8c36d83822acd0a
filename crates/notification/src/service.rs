//! Outbound email seam.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::{EmailConfig, EmailProvider, ResendMailer, SmtpMailer};

/// A single plain-text email ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub text: String,
}

/// Anything able to deliver an [`OutgoingEmail`]. Failures carry provider
/// detail and are meant for logs, not for end users.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> anyhow::Result<()>;
}

/// Build the configured mailer, or `None` when its credential is missing.
pub fn build_mailer(config: &EmailConfig) -> anyhow::Result<Option<Arc<dyn Mailer>>> {
    let Some(credential) = config.credential() else {
        tracing::warn!(
            provider = ?config.provider,
            "Email credential not configured, contact submissions will be rejected"
        );
        return Ok(None);
    };

    let mailer: Arc<dyn Mailer> = match config.provider {
        EmailProvider::Resend => {
            tracing::info!(api_url = %config.api_url, "Email service initialized with Resend");
            Arc::new(ResendMailer::new(&config.api_url, credential))
        }
        EmailProvider::Smtp => {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "Email service initialized with authentication and TLS"
            );
            Arc::new(SmtpMailer::new(config, credential)?)
        }
    };

    Ok(Some(mailer))
}
