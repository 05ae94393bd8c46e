//! Authentication module for sessions, form validation and access control.
//!
//! This module provides the session store, the validators behind every form,
//! the login/signup flows that talk to the credential verifier, and the route
//! guard that keeps each dashboard to its own role.

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;
pub mod validation;

// Re-exports for convenience
pub use errors::AuthError;
pub use middleware::{decide, require_role, GuardDecision, RoleGate};
pub use models::{Field, FieldError, FormErrors, Role, UserRecord};
pub use routes::auth_router;
pub use service::{AuthService, SessionHandle, SessionStore};
pub use validation::Validate;
