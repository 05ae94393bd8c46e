//! Central module for the JSON endpoints under `/api`.
//!
//! Pages and form posts are served by `navigation`; this router only exposes
//! machine-readable views of the same state.

pub mod user;

use axum::{extract::OriginalUri, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::AppState;

pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/me", get(user::handlers::me))
        .route("/dashboard", get(user::handlers::dashboard))
        .fallback(unknown_endpoint)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn unknown_endpoint(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
