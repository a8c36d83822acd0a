use std::time::Instant;

use clap::Args;
use portfolio_contact::{ContactClient, ContactForm, ContactSubmission, SubmissionResult};

#[derive(Args)]
pub struct SendArgs {
    /// Base URL of the portfolio server
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    pub url: String,

    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub subject: String,

    #[arg(long)]
    pub message: String,
}

pub async fn send(args: SendArgs) -> anyhow::Result<()> {
    let client = ContactClient::new(&args.url);
    let mut form = ContactForm::new(ContactSubmission::new(
        args.name,
        args.email,
        args.subject,
        args.message,
    ));

    let submission = form.submit()?;
    let result = client.submit(&submission).await;
    form.complete(&result, Instant::now());

    match result {
        SubmissionResult::Success => {
            tracing::info!(endpoint = client.endpoint(), "Message sent");
            Ok(())
        }
        SubmissionResult::Error(reason) => {
            tracing::error!(endpoint = client.endpoint(), %reason, "Message not sent");
            anyhow::bail!(reason)
        }
    }
}
