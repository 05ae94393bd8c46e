//! Page table and router construction.
//!
//! `ROUTES` is the single list of page paths. Each entry names the view it
//! renders and, for dashboards, the role a visitor must hold. The axum router
//! is generated from it, so a path cannot be served without its guard.

use axum::{
    extract::{OriginalUri, State},
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, MethodRouter},
    Router,
};

use crate::auth::middleware::{require_role, RoleGate, LOGIN_REDIRECT};
use crate::auth::models::Role;
use crate::auth::routes as auth_routes;
use crate::services::dashboard_data;
use crate::views;
use crate::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    RoleSelection,
    Login(Role),
    Signup(Role),
    Dashboard(Role),
    ForgotPassword,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub required_role: Option<Role>,
    pub view: View,
}

const fn open(path: &'static str, view: View) -> RouteDescriptor {
    RouteDescriptor {
        path,
        required_role: None,
        view,
    }
}

const fn guarded(path: &'static str, role: Role) -> RouteDescriptor {
    RouteDescriptor {
        path,
        required_role: Some(role),
        view: View::Dashboard(role),
    }
}

pub static ROUTES: [RouteDescriptor; 10] = [
    open("/", View::Landing),
    open("/select-role", View::RoleSelection),
    open("/login", View::Login(Role::User)),
    open("/user/login", View::Login(Role::User)),
    open("/developer/login", View::Login(Role::Developer)),
    open("/user/signup", View::Signup(Role::User)),
    open("/developer/signup", View::Signup(Role::Developer)),
    guarded("/developer/dashboard", Role::Developer),
    guarded("/user/dashboard", Role::User),
    open("/forgot-password", View::ForgotPassword),
];

/// Exact-match lookup; there are no path parameters.
pub fn resolve(path: &str) -> Option<&'static RouteDescriptor> {
    ROUTES.iter().find(|route| route.path == path)
}

pub fn login_path(role: Role) -> &'static str {
    match role {
        Role::Developer => "/developer/login",
        Role::User => "/user/login",
    }
}

pub fn signup_path(role: Role) -> &'static str {
    match role {
        Role::Developer => "/developer/signup",
        Role::User => "/user/signup",
    }
}

pub fn dashboard_path(role: Role) -> &'static str {
    match role {
        Role::Developer => "/developer/dashboard",
        Role::User => "/user/dashboard",
    }
}

/// Page routes from `ROUTES`, the auth-only routes and the not-found fallback.
pub fn page_router(state: &AppState) -> Router<AppState> {
    let mut router = Router::new();
    for route in ROUTES.iter() {
        let mut method_router = method_router_for(route);
        if let Some(required) = route.required_role {
            let gate = RoleGate {
                session: state.session.clone(),
                required: Some(required),
            };
            method_router =
                method_router.route_layer(middleware::from_fn_with_state(gate, require_role));
        }
        router = router.route(route.path, method_router);
    }
    router.merge(auth_routes::auth_router()).fallback(not_found)
}

fn method_router_for(route: &RouteDescriptor) -> MethodRouter<AppState> {
    match route.view {
        View::Landing => get(landing),
        View::RoleSelection => get(role_selection),
        View::Login(role) => auth_routes::login_routes(role, route.path),
        View::Signup(role) => auth_routes::signup_routes(role),
        View::ForgotPassword => auth_routes::forgot_password_routes(),
        View::Dashboard(Role::Developer) => get(developer_dashboard),
        View::Dashboard(Role::User) => get(user_dashboard),
    }
}

async fn landing(State(state): State<AppState>) -> Html<String> {
    let user = state.session.current_user().await;
    Html(views::pages::landing(user.as_ref()))
}

async fn role_selection(State(state): State<AppState>) -> Html<String> {
    let user = state.session.current_user().await;
    Html(views::pages::role_selection(user.as_ref()))
}

// The guard has already checked the session; a user that vanished in between
// (concurrent logout) gets the same treatment as the guard would give.
async fn developer_dashboard(State(state): State<AppState>) -> Response {
    match state.session.current_user().await {
        Some(user) => Html(views::dashboards::developer(
            &user,
            &dashboard_data::developer_dashboard(),
        ))
        .into_response(),
        None => Redirect::to(LOGIN_REDIRECT).into_response(),
    }
}

async fn user_dashboard(State(state): State<AppState>) -> Response {
    match state.session.current_user().await {
        Some(user) => {
            Html(views::dashboards::user(&user, &dashboard_data::user_dashboard())).into_response()
        }
        None => Redirect::to(LOGIN_REDIRECT).into_response(),
    }
}

async fn not_found(State(state): State<AppState>, OriginalUri(uri): OriginalUri) -> Response {
    let user = state.session.current_user().await;
    (
        StatusCode::NOT_FOUND,
        Html(views::pages::not_found(user.as_ref(), uri.path())),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_has_unique_paths() {
        let paths: HashSet<&str> = ROUTES.iter().map(|r| r.path).collect();
        assert_eq!(paths.len(), ROUTES.len());
    }

    #[test]
    fn only_dashboards_are_guarded_and_by_their_own_role() {
        for route in ROUTES.iter() {
            match route.view {
                View::Dashboard(role) => assert_eq!(route.required_role, Some(role)),
                _ => assert_eq!(route.required_role, None, "{} should be open", route.path),
            }
        }
    }

    #[test]
    fn role_parameterized_logins() {
        assert_eq!(resolve("/login").map(|r| r.view), Some(View::Login(Role::User)));
        assert_eq!(resolve("/user/login").map(|r| r.view), Some(View::Login(Role::User)));
        assert_eq!(
            resolve("/developer/login").map(|r| r.view),
            Some(View::Login(Role::Developer))
        );
        assert_eq!(
            resolve("/developer/dashboard").and_then(|r| r.required_role),
            Some(Role::Developer)
        );
        assert!(resolve("/developer/profile").is_none());
    }

    #[test]
    fn helper_paths_are_in_the_table() {
        for role in Role::ALL {
            assert_eq!(resolve(login_path(role)).map(|r| r.view), Some(View::Login(role)));
            assert_eq!(resolve(signup_path(role)).map(|r| r.view), Some(View::Signup(role)));
            assert_eq!(
                resolve(dashboard_path(role)).map(|r| r.view),
                Some(View::Dashboard(role))
            );
        }
    }
}
