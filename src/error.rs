use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use portfolio_contact::{ErrorKind, SubmitError};
use portfolio_notification::NotifyError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Submission(#[from] SubmitError),

    #[error(transparent)]
    Notification(#[from] NotifyError),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Submission(e) => e.kind(),
            AppError::Notification(e) => e.kind(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::ClientInput => StatusCode::BAD_REQUEST,
            ErrorKind::Configuration => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Dependency => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.kind() {
            ErrorKind::ClientInput => {
                tracing::debug!(error = %self, "Contact submission rejected");
            }
            ErrorKind::Configuration => {
                tracing::warn!(error = %self, "Contact submission received but email service is not configured");
            }
            ErrorKind::Dependency => {
                tracing::error!(error = ?self, "Failed to send contact email");
            }
        }

        // Display is the public message; provider detail only lives in the source chain
        (
            self.status_code(),
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::from(SubmitError::MissingFields).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(NotifyError::NotConfigured).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::from(NotifyError::Dispatch(anyhow::anyhow!("smtp 554"))).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_kind_follows_source_error() {
        assert_eq!(
            AppError::from(SubmitError::InvalidEmail).kind(),
            ErrorKind::ClientInput
        );
        assert_eq!(
            AppError::from(NotifyError::NotConfigured).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            AppError::from(NotifyError::Dispatch(anyhow::anyhow!("timeout"))).kind(),
            ErrorKind::Dependency
        );
    }

    #[test]
    fn test_dispatch_message_is_generic() {
        let err = AppError::from(NotifyError::Dispatch(anyhow::anyhow!("re_secret rejected")));

        assert_eq!(err.to_string(), "Failed to send message");
    }
}
