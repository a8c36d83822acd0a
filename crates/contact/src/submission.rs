use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::SubmitError;

/// Deliberately loose: something, `@`, something, `.`, something, no whitespace.
pub static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

const BLANK: &str = "blank";

/// A contact form submission. Lives for one request and is never stored.
#[derive(Validate, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(
        custom(function = "not_blank"),
        regex(path = *EMAIL_REGEX, code = "email")
    )]
    pub email: String,
    #[validate(custom(function = "not_blank"))]
    pub subject: String,
    #[validate(custom(function = "not_blank"))]
    pub message: String,
}

/// Wire shape of the request body. Absent and `null` fields are tolerated
/// here and rejected later as missing. Only ever built from a JSON object:
/// the derive would also fill it positionally from an array.
#[derive(Deserialize, Default)]
#[serde(default)]
struct ContactPayload {
    name: Option<String>,
    email: Option<String>,
    subject: Option<String>,
    message: Option<String>,
}

impl From<ContactPayload> for ContactSubmission {
    fn from(payload: ContactPayload) -> Self {
        Self {
            name: payload.name.unwrap_or_default(),
            email: payload.email.unwrap_or_default(),
            subject: payload.subject.unwrap_or_default(),
            message: payload.message.unwrap_or_default(),
        }
    }
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Parse a raw request body and run it through the input checks.
    ///
    /// Fails at the first broken step: shape, then required fields, then
    /// the email pattern.
    pub fn from_json(body: &[u8]) -> Result<Self, SubmitError> {
        let object: Map<String, Value> =
            serde_json::from_slice(body).map_err(SubmitError::InvalidBody)?;
        let payload: ContactPayload =
            serde_json::from_value(Value::Object(object)).map_err(SubmitError::InvalidBody)?;

        let submission = Self::from(payload);
        submission.check()?;

        Ok(submission)
    }

    pub fn check(&self) -> Result<(), SubmitError> {
        match self.validate() {
            Ok(()) => Ok(()),
            Err(errors) if has_code(&errors, BLANK) => Err(SubmitError::MissingFields),
            Err(_) => Err(SubmitError::InvalidEmail),
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(BLANK));
    }

    Ok(())
}

fn has_code(errors: &ValidationErrors, code: &str) -> bool {
    errors
        .field_errors()
        .values()
        .flat_map(|errors| errors.iter())
        .any(|error| error.code == code)
}
