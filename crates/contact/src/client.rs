use serde::Deserialize;

use crate::{ContactSubmission, SubmissionResult};

pub const CONTACT_PATH: &str = "/api/contact";

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Posts submissions to a running contact endpoint. One request per call,
/// no retries.
#[derive(Clone)]
pub struct ContactClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ContactClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            endpoint: format!("{}{CONTACT_PATH}", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[tracing::instrument(skip_all, fields(endpoint = %self.endpoint))]
    pub async fn submit(&self, submission: &ContactSubmission) -> SubmissionResult {
        let response = match self.http.post(&self.endpoint).json(submission).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "Contact request failed");
                return SubmissionResult::Error(e.to_string());
            }
        };

        let status = response.status();
        if status.is_success() {
            return SubmissionResult::Success;
        }

        let reason = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Unexpected response")
                .to_owned(),
        };

        tracing::warn!(%status, %reason, "Contact submission rejected");

        SubmissionResult::Error(reason)
    }
}
