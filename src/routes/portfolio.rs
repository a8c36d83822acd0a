use axum::{Json, extract::State, response::IntoResponse};

use crate::routes::AppState;

/// GET /api/portfolio
pub async fn page(State(app_state): State<AppState>) -> impl IntoResponse {
    Json(app_state.portfolio.as_ref().clone())
}
