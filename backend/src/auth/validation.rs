//! Client-side style validation for the DevConnect forms.
//!
//! Each validator is a pure function over its form record. Fields are checked
//! in the order they appear on the page, so the resulting `FormErrors` lists
//! messages top to bottom.

use std::sync::LazyLock;

use regex::Regex;

use super::models::{
    DeveloperSignupForm, Field, ForgotPasswordForm, FormErrors, LoginForm, UserSignupForm,
};

pub const MIN_PASSWORD_LEN: usize = 8;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match";
pub const TECH_STACK_REQUIRED: &str = "Tech stack is required";
pub const TERMS_REQUIRED: &str = "You must accept the Terms and Conditions";

// Shape check only: something@something.something, no whitespace, one '@'.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Implemented by every form record so handlers can validate generically.
pub trait Validate {
    fn validate(&self) -> FormErrors;
}

pub fn validate_login(form: &LoginForm) -> FormErrors {
    let mut errors = FormErrors::new();
    if form.email.is_empty() {
        errors.push(Field::Email, EMAIL_REQUIRED);
    }
    if form.password.is_empty() {
        errors.push(Field::Password, PASSWORD_REQUIRED);
    }
    errors
}

pub fn validate_forgot_password(form: &ForgotPasswordForm) -> FormErrors {
    let mut errors = FormErrors::new();
    check_email_shape(&mut errors, &form.email);
    errors
}

pub fn validate_developer_signup(form: &DeveloperSignupForm) -> FormErrors {
    let mut errors = FormErrors::new();
    if form.name.is_empty() {
        errors.push(Field::Name, NAME_REQUIRED);
    }
    if form.email.is_empty() {
        errors.push(Field::Email, EMAIL_REQUIRED);
    }
    if form.password.is_empty() {
        errors.push(Field::Password, PASSWORD_REQUIRED);
    }
    if form.password != form.confirm_password {
        errors.push(Field::ConfirmPassword, PASSWORDS_DIFFER);
    }
    if form.tech_stack.is_empty() {
        errors.push(Field::TechStack, TECH_STACK_REQUIRED);
    }
    errors
}

pub fn validate_user_signup(form: &UserSignupForm) -> FormErrors {
    let mut errors = FormErrors::new();
    if form.name.is_empty() {
        errors.push(Field::Name, NAME_REQUIRED);
    }
    check_email_shape(&mut errors, &form.email);
    if form.password.is_empty() {
        errors.push(Field::Password, PASSWORD_REQUIRED);
    } else if form.password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(Field::Password, PASSWORD_TOO_SHORT);
    }
    if form.password != form.confirm_password {
        errors.push(Field::ConfirmPassword, PASSWORDS_DIFFER);
    }
    if !form.accepted_terms() {
        errors.push(Field::Terms, TERMS_REQUIRED);
    }
    errors
}

fn check_email_shape(errors: &mut FormErrors, email: &str) {
    if email.is_empty() {
        errors.push(Field::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(email) {
        errors.push(Field::Email, EMAIL_INVALID);
    }
}

impl Validate for LoginForm {
    fn validate(&self) -> FormErrors {
        validate_login(self)
    }
}

impl Validate for ForgotPasswordForm {
    fn validate(&self) -> FormErrors {
        validate_forgot_password(self)
    }
}

impl Validate for DeveloperSignupForm {
    fn validate(&self) -> FormErrors {
        validate_developer_signup(self)
    }
}

impl Validate for UserSignupForm {
    fn validate(&self) -> FormErrors {
        validate_user_signup(self)
    }
}
