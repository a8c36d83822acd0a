use thiserror::Error;

/// Which side of the relay an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed, missing or invalid fields. Safe to show verbatim.
    ClientInput,
    /// The email capability is missing its credential.
    Configuration,
    /// The email provider call failed.
    Dependency,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Invalid request body")]
    InvalidBody(#[source] serde_json::Error),

    #[error("All fields are required")]
    MissingFields,

    #[error("Invalid email address")]
    InvalidEmail,
}

impl SubmitError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::ClientInput
    }
}
