//! Data structures for authentication-related entities.
//!
//! This module defines the typed records behind each DevConnect form (login,
//! forgot-password, developer and user signup) and the structured error list
//! the validators produce. Roles and user records come from the adapters crate
//! so the session and the verifier share one definition.

use std::fmt;

use serde::Deserialize;

pub use devconnect_adapters::{Role, UserRecord};

/// Login form as posted by the browser. The role is not a field; it comes from
/// the route the form was served on.
#[derive(Deserialize, Clone, Default)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// Checkbox value. Accepted and ignored: sessions never outlive the process.
    #[serde(default, rename = "remember-me")]
    pub remember_me: Option<String>,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            remember_me: None,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ForgotPasswordForm {
    #[serde(default)]
    pub email: String,
}

#[derive(Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperSignupForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
    #[serde(default)]
    pub tech_stack: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub linkedin_url: String,
}

impl DeveloperSignupForm {
    /// Comma separated tech stack, trimmed, blanks dropped.
    pub fn tech_stack_items(&self) -> Vec<&str> {
        self.tech_stack
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .collect()
    }
}

#[derive(Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserSignupForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
    #[serde(default)]
    pub terms: Option<String>,
}

impl UserSignupForm {
    /// An unticked checkbox is simply absent from the posted form.
    pub fn accepted_terms(&self) -> bool {
        self.terms.as_deref().is_some_and(|value| !value.is_empty())
    }
}

/// Form fields that can carry a message. `Form` is the whole submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    TechStack,
    Terms,
    Form,
}

impl Field {
    /// Name of the field in the posted form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::TechStack => "techStack",
            Field::Terms => "terms",
            Field::Form => "form",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Validation outcome of one form. Empty means the form may be submitted.
/// At most one message is kept per field; the first one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Error list carrying a single whole-form message.
    pub fn whole_form(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(Field::Form, message);
        errors
    }

    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.0.push(FieldError {
                field,
                message: message.into(),
            });
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0
            .iter()
            .find(|err| err.field == field)
            .map(|err| err.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}
