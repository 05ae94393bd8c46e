//! Defines the HTTP routes specifically for authentication.
//!
//! Form pages are registered from the navigation table, which knows each
//! path's role; this module turns an auth view into its GET/POST pair and adds
//! the routes that have no page of their own.

use axum::{
    extract::State,
    routing::{get, post, MethodRouter},
    Form, Router,
};

use super::handlers;
use super::models::{LoginForm, Role};
use crate::AppState;

/// GET shows the login form for `role`; POST submits it. Both post back to `path`.
pub fn login_routes(role: Role, path: &'static str) -> MethodRouter<AppState> {
    get(move |State(state): State<AppState>| handlers::show_login(state, role, path)).post(
        move |State(state): State<AppState>, Form(form): Form<LoginForm>| {
            handlers::submit_login(state, role, path, form)
        },
    )
}

pub fn signup_routes(role: Role) -> MethodRouter<AppState> {
    match role {
        Role::Developer => {
            get(handlers::show_developer_signup).post(handlers::submit_developer_signup)
        }
        Role::User => get(handlers::show_user_signup).post(handlers::submit_user_signup),
    }
}

pub fn forgot_password_routes() -> MethodRouter<AppState> {
    get(handlers::show_forgot_password).post(handlers::submit_forgot_password)
}

/// Routes outside the page table.
pub fn auth_router() -> Router<AppState> {
    Router::new().route("/logout", post(handlers::logout))
}
