use anyhow::Context;
use async_trait::async_trait;
use serde::Serialize;

use crate::{Mailer, OutgoingEmail};

/// Resend transactional email API (`POST /emails`).
#[derive(Clone)]
pub struct ResendMailer {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: &'a str,
    text: &'a str,
}

impl ResendMailer {
    pub fn new(api_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/emails", api_url.trim_end_matches('/')),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    #[tracing::instrument(skip_all, fields(to = %email.to, subject = %email.subject))]
    async fn send(&self, email: &OutgoingEmail) -> anyhow::Result<()> {
        tracing::info!("Sending email");

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&SendEmailRequest {
                from: &email.from,
                to: [&email.to],
                reply_to: &email.reply_to,
                subject: &email.subject,
                text: &email.text,
            })
            .send()
            .await
            .context("Resend request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Resend returned {status}: {body}");
        }

        Ok(())
    }
}
