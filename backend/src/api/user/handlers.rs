//! Handler functions for the current-user endpoints.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::auth::models::{Role, UserRecord};
use crate::errors::{AppError, AppResult};
use crate::services::dashboard_data;
use crate::AppState;

/// `GET /api/me`: the session's user, or 401 when nobody is signed in.
pub async fn me(State(state): State<AppState>) -> AppResult<Json<UserRecord>> {
    state
        .session
        .current_user()
        .await
        .map(Json)
        .ok_or(AppError::Unauthenticated)
}

/// `GET /api/dashboard`: the data behind the signed-in user's dashboard page.
pub async fn dashboard(State(state): State<AppState>) -> AppResult<Response> {
    let user = state
        .session
        .current_user()
        .await
        .ok_or(AppError::Unauthenticated)?;
    let body = match user.role {
        Role::Developer => Json(dashboard_data::developer_dashboard()).into_response(),
        Role::User => Json(dashboard_data::user_dashboard()).into_response(),
    };
    Ok(body)
}
