//! End-to-end sign-in, guard and logout behaviour through the HTTP router.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use devconnect_adapters::{AdapterError, CredentialAttempt, CredentialVerifier, Role, Verdict};

use common::{assert_redirect, body_text, get, post_form, test_app, test_app_with};

#[tokio::test]
async fn user_login_lands_on_the_user_dashboard() {
    let (app, state) = test_app();

    let resp = post_form(&app, "/login", "email=x%40y.com&password=pw").await;
    assert_redirect(&resp, "/user/dashboard");

    let user = state.session.current_user().await.expect("session filled");
    assert_eq!(user.role, Role::User);
    assert_eq!(user.email, "x@y.com");

    let resp = get(&app, "/user/dashboard").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Welcome back, Test User!"));
    assert!(html.contains("Recent Messages"));
}

#[tokio::test]
async fn developer_login_lands_on_the_developer_dashboard() {
    let (app, _state) = test_app();

    let resp = post_form(&app, "/developer/login", "email=dev%40x.io&password=pw").await;
    assert_redirect(&resp, "/developer/dashboard");

    let resp = get(&app, "/developer/dashboard").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Recent Bids"));
}

#[tokio::test]
async fn anonymous_dashboard_visit_goes_to_login() {
    let (app, _state) = test_app();

    assert_redirect(&get(&app, "/developer/dashboard").await, "/login");
    assert_redirect(&get(&app, "/user/dashboard").await, "/login");
}

#[tokio::test]
async fn wrong_role_goes_home() {
    let (app, _state) = test_app();
    post_form(&app, "/user/login", "email=x%40y.com&password=pw").await;

    assert_redirect(&get(&app, "/developer/dashboard").await, "/");
    // The guard keeps no memory: the matching dashboard still renders.
    assert_eq!(get(&app, "/user/dashboard").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn second_login_replaces_the_session() {
    let (app, state) = test_app();
    post_form(&app, "/user/login", "email=x%40y.com&password=pw").await;
    post_form(&app, "/developer/login", "email=dev%40x.io&password=pw").await;

    let user = state.session.current_user().await.unwrap();
    assert_eq!(user.role, Role::Developer);
    assert_redirect(&get(&app, "/user/dashboard").await, "/");
}

#[tokio::test]
async fn empty_fields_are_reported_on_the_form() {
    let (app, state) = test_app();

    let resp = post_form(&app, "/developer/login", "email=&password=").await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(resp).await;
    assert!(html.contains("Email is required"));
    assert!(html.contains("Password is required"));
    assert!(html.contains("Developer Login"));
    assert!(!state.session.is_authenticated().await);
}

struct Refusing;

#[async_trait]
impl CredentialVerifier for Refusing {
    async fn verify(&self, _attempt: &CredentialAttempt) -> Result<Verdict, AdapterError> {
        Ok(Verdict::Rejected {
            message: "Invalid credentials".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "refusing"
    }
}

struct Unreachable;

#[async_trait]
impl CredentialVerifier for Unreachable {
    async fn verify(&self, _attempt: &CredentialAttempt) -> Result<Verdict, AdapterError> {
        Err(AdapterError::ConnectionError("connection refused".to_string()))
    }

    fn name(&self) -> &'static str {
        "unreachable"
    }
}

#[tokio::test]
async fn rejection_is_a_whole_form_message_and_keeps_the_email() {
    let (app, state) = test_app_with(Arc::new(Refusing));

    let resp = post_form(&app, "/login", "email=x%40y.com&password=bad").await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(resp).await;
    assert!(html.contains(r#"role="alert">Invalid credentials</div>"#));
    assert!(html.contains(r#"value="x@y.com""#));
    assert!(!html.contains(r#"value="bad""#));
    assert!(!state.session.is_authenticated().await);
}

#[tokio::test]
async fn unreachable_verifier_is_reported_without_detail() {
    let (app, _state) = test_app_with(Arc::new(Unreachable));

    let resp = post_form(&app, "/login", "email=x%40y.com&password=pw").await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let html = body_text(resp).await;
    assert!(html.contains("An error occurred. Please try again."));
    assert!(!html.contains("connection refused"));
}

#[tokio::test]
async fn logout_clears_the_session_and_is_repeatable() {
    let (app, state) = test_app();
    post_form(&app, "/login", "email=x%40y.com&password=pw").await;

    assert_redirect(&post_form(&app, "/logout", "").await, "/");
    assert!(!state.session.is_authenticated().await);
    assert_redirect(&post_form(&app, "/logout", "").await, "/");
    assert!(!state.session.is_authenticated().await);

    assert_redirect(&get(&app, "/user/dashboard").await, "/login");
}

#[tokio::test]
async fn api_me_reflects_the_session() {
    let (app, _state) = test_app();

    let resp = get(&app, "/api/me").await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
    assert_eq!(body["error"], "not authenticated");

    post_form(&app, "/developer/login", "email=dev%40x.io&password=pw").await;
    let resp = get(&app, "/api/me").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
    assert_eq!(body["role"], "developer");
    assert_eq!(body["email"], "dev@x.io");
    assert_eq!(body["name"], "Test User");
}

#[tokio::test]
async fn api_dashboard_follows_the_session_role() {
    let (app, _state) = test_app();

    assert_eq!(get(&app, "/api/dashboard").await.status(), StatusCode::UNAUTHORIZED);

    post_form(&app, "/developer/login", "email=dev%40x.io&password=pw").await;
    let resp = get(&app, "/api/dashboard").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
    assert_eq!(body["recent_bids"][0]["status"], "pending");
    assert_eq!(body["stats"][0]["title"], "Active Projects");

    post_form(&app, "/user/login", "email=x%40y.com&password=pw").await;
    let body: serde_json::Value =
        serde_json::from_str(&body_text(get(&app, "/api/dashboard").await).await).unwrap();
    assert!(body.get("recent_bids").is_none());
    assert!(body["recent_messages"].is_array());
}
