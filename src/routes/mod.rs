use std::sync::Arc;

use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use portfolio_notification::ContactNotifier;

use crate::{error::ErrorBody, portfolio::Portfolio};

mod contact;
mod health;
mod portfolio;

#[derive(Clone)]
pub struct AppState {
    pub notifier: ContactNotifier,
    pub portfolio: Arc<Portfolio>,
}

pub async fn fallback() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Not found".to_owned(),
        }),
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/api/portfolio", get(portfolio::page))
        .route("/api/contact", post(contact::action))
        .fallback(fallback)
        .with_state(app_state)
}
