use axum::{Json, body::Bytes, extract::State};
use portfolio_contact::ContactSubmission;
use serde::Serialize;

use crate::{error::AppError, routes::AppState};

#[derive(Serialize)]
pub struct ContactResponse {
    pub success: bool,
}

/// POST /api/contact
///
/// The body is read raw so a missing or wrong `Content-Type` still goes
/// through the same validation and error messages.
#[tracing::instrument(skip_all)]
pub async fn action(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<ContactResponse>, AppError> {
    let submission = ContactSubmission::from_json(&body)?;

    app_state.notifier.notify(&submission).await?;

    Ok(Json(ContactResponse { success: true }))
}
