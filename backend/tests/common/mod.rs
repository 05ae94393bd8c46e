//! Helpers shared by the HTTP-level tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use devconnect_adapters::{CredentialVerifier, StubVerifier};
use devconnect_backend::config::Config;
use devconnect_backend::{app, AppState};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub fn quick_config() -> Config {
    Config {
        latency: Duration::ZERO,
        ..Config::default()
    }
}

/// App backed by the stub verifier with no artificial delay.
pub fn test_app() -> (Router, AppState) {
    test_app_with(Arc::new(StubVerifier::with_latency(Duration::ZERO)))
}

pub fn test_app_with(verifier: Arc<dyn CredentialVerifier>) -> (Router, AppState) {
    let state = AppState::new(verifier, &quick_config());
    (app(state.clone()), state)
}

pub async fn get(app: &Router, path: &str) -> Response {
    app.clone()
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_form(app: &Router, path: &str, body: &str) -> Response {
    app.clone()
        .oneshot(
            Request::post(path)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_text(resp: Response) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&bytes).to_string()
}

pub fn location(resp: &Response) -> Option<&str> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

pub fn assert_redirect(resp: &Response, to: &str) {
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(resp), Some(to));
}
