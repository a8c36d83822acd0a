//! Shared fixtures for router and client tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use portfolio::{AppState, portfolio::Portfolio};
use portfolio_notification::{ContactNotifier, Mailer, OutgoingEmail};
use serde_json::Value;
use tower::ServiceExt;

pub const FROM: &str = "Portfolio <onboarding@resend.dev>";
pub const OWNER: &str = "owner@site.dev";

/// Records every email it is asked to send. Fails on demand.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
    fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutgoingEmail) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(email.clone());

        if self.fail {
            anyhow::bail!("resend returned 401: invalid api key re_live_xxx");
        }

        Ok(())
    }
}

pub fn app_state(mailer: Option<Arc<RecordingMailer>>) -> AppState {
    let mailer = mailer.map(|mailer| mailer as Arc<dyn Mailer>);

    AppState {
        notifier: ContactNotifier::new(mailer, FROM, OWNER),
        portfolio: Arc::new(Portfolio::load().unwrap()),
    }
}

pub fn app(mailer: Option<Arc<RecordingMailer>>) -> Router {
    portfolio::router(app_state(mailer))
}

pub async fn post_contact(app: Router, body: impl Into<String>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap();

    send(app, request).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

/// Serve `app` on an ephemeral port and return its base URL.
pub async fn spawn(app: Router) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move { axum::serve(listener, app).await });

    Ok(format!("http://{addr}"))
}
