//! Custom error types specific to authentication failures.
//!
//! Every failure of a form submission ends up as a `FormErrors` list shown on
//! the re-rendered form; `AuthError` keeps the cause so handlers can pick the
//! HTTP status and logs can tell a rejection from an unreachable verifier.

use axum::http::StatusCode;
use devconnect_adapters::AdapterError;
use thiserror::Error;

use super::models::FormErrors;

pub const VERIFIER_UNAVAILABLE: &str = "An error occurred. Please try again.";
pub const REQUEST_IN_PROGRESS: &str = "A request is already in progress";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("form has {} invalid field(s)", .0.len())]
    Validation(FormErrors),
    #[error("credentials rejected: {0}")]
    Rejected(String),
    #[error("verifier failed: {0}")]
    Verifier(#[from] AdapterError),
    #[error("a submission of this form is already in progress")]
    InProgress,
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) | AuthError::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AuthError::Verifier(_) => StatusCode::BAD_GATEWAY,
            AuthError::InProgress => StatusCode::CONFLICT,
        }
    }

    /// Messages to show on the form.
    pub fn into_form_errors(self) -> FormErrors {
        match self {
            AuthError::Validation(errors) => errors,
            AuthError::Rejected(message) => FormErrors::whole_form(message),
            AuthError::Verifier(_) => FormErrors::whole_form(VERIFIER_UNAVAILABLE),
            AuthError::InProgress => FormErrors::whole_form(REQUEST_IN_PROGRESS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::models::Field;

    #[test]
    fn verifier_detail_is_not_shown_to_the_user() {
        let err = AuthError::from(AdapterError::ConnectionError("10.0.0.7 refused".to_string()));
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        let errors = err.into_form_errors();
        assert_eq!(errors.get(Field::Form), Some(VERIFIER_UNAVAILABLE));
    }

    #[test]
    fn rejection_message_goes_to_the_form_key() {
        let errors = AuthError::Rejected("Invalid credentials".to_string()).into_form_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Form), Some("Invalid credentials"));
    }
}
