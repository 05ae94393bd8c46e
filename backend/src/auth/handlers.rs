//! Handler functions for the login, signup, forgot-password and logout pages.
//!
//! GET handlers render the empty form. POST handlers hand the decoded form to
//! `AuthService`; on success they redirect (or show a confirmation), on failure
//! they re-render the form with its messages and a matching status code.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use super::models::{
    DeveloperSignupForm, ForgotPasswordForm, FormErrors, LoginForm, Role, UserSignupForm,
};
use crate::navigation;
use crate::views;
use crate::AppState;

/// Login form for `role`, posting back to `action`.
pub async fn show_login(state: AppState, role: Role, action: &'static str) -> Html<String> {
    let user = state.session.current_user().await;
    Html(views::forms::login(
        user.as_ref(),
        role,
        action,
        "",
        &FormErrors::new(),
    ))
}

pub async fn submit_login(
    state: AppState,
    role: Role,
    action: &'static str,
    form: LoginForm,
) -> Response {
    match state.auth.login(role, &form).await {
        Ok(_) => Redirect::to(navigation::dashboard_path(role)).into_response(),
        Err(err) => {
            let status = err.status();
            let user = state.session.current_user().await;
            let html = views::forms::login(
                user.as_ref(),
                role,
                action,
                &form.email,
                &err.into_form_errors(),
            );
            (status, Html(html)).into_response()
        }
    }
}

pub async fn logout(State(state): State<AppState>) -> Redirect {
    state.auth.logout().await;
    Redirect::to("/")
}

pub async fn show_forgot_password(State(state): State<AppState>) -> Html<String> {
    let user = state.session.current_user().await;
    Html(views::forms::forgot_password(user.as_ref(), "", &FormErrors::new()))
}

pub async fn submit_forgot_password(
    State(state): State<AppState>,
    Form(form): Form<ForgotPasswordForm>,
) -> Response {
    let user = state.session.current_user().await;
    match state.auth.request_password_reset(&form) {
        Ok(()) => Html(views::forms::reset_link_sent(user.as_ref(), &form.email)).into_response(),
        Err(err) => {
            let status = err.status();
            let html =
                views::forms::forgot_password(user.as_ref(), &form.email, &err.into_form_errors());
            (status, Html(html)).into_response()
        }
    }
}

pub async fn show_developer_signup(State(state): State<AppState>) -> Html<String> {
    let user = state.session.current_user().await;
    Html(views::forms::developer_signup(
        user.as_ref(),
        &DeveloperSignupForm::default(),
        &FormErrors::new(),
    ))
}

pub async fn submit_developer_signup(
    State(state): State<AppState>,
    Form(form): Form<DeveloperSignupForm>,
) -> Response {
    let result = state.auth.register_developer(&form).await;
    let user = state.session.current_user().await;
    match result {
        Ok(()) => Html(views::forms::signup_complete(user.as_ref(), Role::Developer)).into_response(),
        Err(err) => {
            let status = err.status();
            let html = views::forms::developer_signup(user.as_ref(), &form, &err.into_form_errors());
            (status, Html(html)).into_response()
        }
    }
}

pub async fn show_user_signup(State(state): State<AppState>) -> Html<String> {
    let user = state.session.current_user().await;
    Html(views::forms::user_signup(
        user.as_ref(),
        &UserSignupForm::default(),
        &FormErrors::new(),
    ))
}

pub async fn submit_user_signup(
    State(state): State<AppState>,
    Form(form): Form<UserSignupForm>,
) -> Response {
    let result = state.auth.register_user(&form).await;
    let user = state.session.current_user().await;
    match result {
        Ok(()) => Html(views::forms::signup_complete(user.as_ref(), Role::User)).into_response(),
        Err(err) => {
            let status = err.status();
            let html = views::forms::user_signup(user.as_ref(), &form, &err.into_form_errors());
            (status, Html(html)).into_response()
        }
    }
}
