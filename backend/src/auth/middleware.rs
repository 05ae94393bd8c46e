//! Middleware for protecting role-specific pages.
//!
//! `decide` is the route guard itself: a pure function of the session's user
//! and the route's required role. `require_role` runs it on every request to a
//! guarded route and turns a refusal into a silent redirect.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use super::models::{Role, UserRecord};
use super::service::SessionHandle;

pub const LOGIN_REDIRECT: &str = "/login";
pub const HOME_REDIRECT: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
}

pub fn decide(user: Option<&UserRecord>, required: Option<Role>) -> GuardDecision {
    match (user, required) {
        (None, _) => GuardDecision::Redirect(LOGIN_REDIRECT),
        (Some(user), Some(required)) if user.role != required => {
            GuardDecision::Redirect(HOME_REDIRECT)
        }
        (Some(_), _) => GuardDecision::Render,
    }
}

/// State handed to `require_role`: the session to consult and the role the
/// route was registered with.
#[derive(Debug, Clone)]
pub struct RoleGate {
    pub session: SessionHandle,
    pub required: Option<Role>,
}

pub async fn require_role(State(gate): State<RoleGate>, request: Request, next: Next) -> Response {
    let user = gate.session.current_user().await;
    match decide(user.as_ref(), gate.required) {
        GuardDecision::Render => next.run(request).await,
        GuardDecision::Redirect(to) => {
            debug!(
                path = %request.uri().path(),
                role = ?user.as_ref().map(|u| u.role),
                required = ?gate.required,
                "guard redirect to {}",
                to
            );
            Redirect::to(to).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> UserRecord {
        UserRecord {
            id: 1,
            name: "Test User".to_string(),
            email: "t@x.io".to_string(),
            role,
        }
    }

    #[test]
    fn anonymous_goes_to_login_whatever_the_route() {
        assert_eq!(decide(None, Some(Role::Developer)), GuardDecision::Redirect("/login"));
        assert_eq!(decide(None, Some(Role::User)), GuardDecision::Redirect("/login"));
        assert_eq!(decide(None, None), GuardDecision::Redirect("/login"));
    }

    #[test]
    fn wrong_role_goes_home() {
        let dev = user(Role::Developer);
        assert_eq!(decide(Some(&dev), Some(Role::User)), GuardDecision::Redirect("/"));
        let plain = user(Role::User);
        assert_eq!(decide(Some(&plain), Some(Role::Developer)), GuardDecision::Redirect("/"));
    }

    #[test]
    fn matching_or_absent_requirement_renders() {
        let dev = user(Role::Developer);
        assert_eq!(decide(Some(&dev), Some(Role::Developer)), GuardDecision::Render);
        assert_eq!(decide(Some(&dev), None), GuardDecision::Render);
    }
}
