use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
///
/// Stays ready without an email credential: contact submissions answer 503
/// on their own and the portfolio data is still served.
pub async fn ready(State(app_state): State<AppState>) -> impl IntoResponse {
    let email = if app_state.notifier.is_configured() {
        "configured"
    } else {
        tracing::warn!("Readiness check: email service not configured");
        "not_configured"
    };

    (StatusCode::OK, Json(json!({"status": "ready", "email": email})))
}
