//! SMTP delivery using lettre

use anyhow::Context;
use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, header},
    transport::smtp::authentication::Credentials,
};

use crate::{EmailConfig, Mailer, OutgoingEmail};

#[derive(Clone)]
pub struct SmtpMailer {
    mailer: SmtpTransport,
}

impl SmtpMailer {
    pub fn new(config: &EmailConfig, password: &str) -> anyhow::Result<Self> {
        // relay() negotiates STARTTLS, which is what port 587 expects
        let creds = Credentials::new(config.smtp_username.clone(), password.to_owned());

        let mailer = SmtpTransport::relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(creds)
            .build();

        Ok(Self { mailer })
    }
}

fn build_message(email: &OutgoingEmail) -> anyhow::Result<Message> {
    let message = Message::builder()
        .from(email.from.parse::<Mailbox>().context("Invalid from address")?)
        .to(email.to.parse::<Mailbox>().context("Invalid to address")?)
        .reply_to(email.reply_to.parse::<Mailbox>().context("Invalid reply-to address")?)
        .subject(email.subject.clone())
        .header(header::ContentType::TEXT_PLAIN)
        .body(email.text.clone())?;

    Ok(message)
}

#[async_trait]
impl Mailer for SmtpMailer {
    #[tracing::instrument(skip_all, fields(to = %email.to, subject = %email.subject))]
    async fn send(&self, email: &OutgoingEmail) -> anyhow::Result<()> {
        tracing::info!("Sending email text plain");

        let message = build_message(email)?;

        let mailer = self.mailer.clone();
        tokio::task::spawn_blocking(move || mailer.send(&message))
            .await
            .context("SMTP task panicked")??;

        Ok(())
    }
}
