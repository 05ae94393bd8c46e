//! DevConnect web front.
//!
//! Serves the landing page, role selection, login/signup/forgot-password forms
//! and the two role dashboards. Sign-in goes through a pluggable credential
//! verifier (see the `devconnect-adapters` crate); the resulting session lives
//! in memory for the lifetime of the process.

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod middleware;
pub mod navigation;
pub mod services;
pub mod views;

use std::sync::Arc;

use axum::Router;
use devconnect_adapters::CredentialVerifier;

use crate::auth::{AuthService, SessionHandle};
use crate::config::Config;

/// Shared by every handler. `session` is the same store `auth` writes to.
///
/// There is one session and one in-flight set per process, shared by every
/// client: whoever signs in last is the signed-in user for all visitors.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub session: SessionHandle,
}

impl AppState {
    pub fn new(verifier: Arc<dyn CredentialVerifier>, config: &Config) -> Self {
        let session = SessionHandle::new();
        let auth = AuthService::new(verifier, session.clone(), config.latency);
        Self { auth, session }
    }
}

/// Full application: pages, form posts, `/api`, request tracing.
pub fn app(state: AppState) -> Router {
    navigation::page_router(&state)
        .nest("/api", api::api_router())
        .layer(middleware::trace_layer())
        .with_state(state)
}
