//! Login, signup and forgot-password forms, plus their confirmation pages.
//!
//! Forms are re-rendered with the values the user typed and the messages from
//! `FormErrors`. Password inputs always come back empty.

use super::{escape, page, redirecting_page, role_label};
use crate::auth::models::{
    DeveloperSignupForm, Field, FormErrors, Role, UserRecord, UserSignupForm,
};
use crate::navigation;

/// Seconds before a signup confirmation moves on to the login page.
pub const SIGNUP_REDIRECT_SECS: u32 = 2;

fn header_class(role: Role) -> &'static str {
    match role {
        Role::Developer => "header-developer",
        Role::User => "header-user",
    }
}

fn form_error(errors: &FormErrors) -> String {
    match errors.get(Field::Form) {
        Some(message) => format!(r#"<div class="form-error" role="alert">{}</div>"#, escape(message)),
        None => String::new(),
    }
}

struct Input<'a> {
    id: &'a str,
    label: &'a str,
    kind: &'a str,
    value: &'a str,
    placeholder: &'a str,
    error: Option<&'a str>,
}

impl Input<'_> {
    fn render(&self) -> String {
        let (class, message) = match self.error {
            Some(message) => (
                r#" class="invalid""#,
                format!(r#"<p class="field-error">{}</p>"#, escape(message)),
            ),
            None => ("", String::new()),
        };
        format!(
            r#"<label for="{id}">{label}</label>
        <input type="{kind}" id="{id}" name="{id}" value="{value}" placeholder="{placeholder}"{class}>
        {message}"#,
            id = self.id,
            label = self.label,
            kind = self.kind,
            value = escape(self.value),
            placeholder = escape(self.placeholder),
            class = class,
            message = message,
        )
    }
}

pub fn login(
    user: Option<&UserRecord>,
    role: Role,
    action: &str,
    email: &str,
    errors: &FormErrors,
) -> String {
    let title = format!("{} Login", role_label(role));
    let body = format!(
        r#"<section class="card narrow">
    <div class="card {header}">
        <h2>{title}</h2>
        <p>Welcome back! Please enter your credentials</p>
    </div>
    <form method="post" action="{action}" novalidate>
        {form_error}
        {email}
        {password}
        <p>
            <input type="checkbox" id="remember-me" name="remember-me">
            <label for="remember-me" style="display:inline">Remember me</label>
            <a href="/forgot-password" style="float:right">Forgot password?</a>
        </p>
        <button type="submit">Log In</button>
    </form>
    <p>No account yet? <a href="{signup}">Sign up as {role_label}</a></p>
</section>"#,
        header = header_class(role),
        title = title,
        action = escape(action),
        form_error = form_error(errors),
        email = Input {
            id: "email",
            label: "Email",
            kind: "email",
            value: email,
            placeholder: "your@email.com",
            error: errors.get(Field::Email),
        }
        .render(),
        password = Input {
            id: "password",
            label: "Password",
            kind: "password",
            value: "",
            placeholder: "••••••••",
            error: errors.get(Field::Password),
        }
        .render(),
        signup = navigation::signup_path(role),
        role_label = role_label(role),
    );
    page(&title, user, &body)
}

pub fn forgot_password(user: Option<&UserRecord>, email: &str, errors: &FormErrors) -> String {
    let body = format!(
        r#"<section class="card narrow">
    <div class="card header-user">
        <h2>Forgot Password</h2>
        <p>Enter your email to reset your password</p>
    </div>
    <form method="post" action="/forgot-password" novalidate>
        {form_error}
        {email}
        <button type="submit">Send Reset Link</button>
    </form>
    <p><a href="/login">&larr; Back to login</a></p>
</section>"#,
        form_error = form_error(errors),
        email = Input {
            id: "email",
            label: "Email",
            kind: "email",
            value: email,
            placeholder: "your@email.com",
            error: errors.get(Field::Email),
        }
        .render(),
    );
    page("Forgot Password", user, &body)
}

pub fn reset_link_sent(user: Option<&UserRecord>, email: &str) -> String {
    let body = format!(
        r#"<section class="card narrow">
    <div class="card header-user">
        <h2>Email Sent!</h2>
        <p>We've sent a password reset link to your email</p>
    </div>
    <p>Please check your inbox at <strong>{email}</strong> and follow the instructions to reset your password.</p>
    <a href="/login"><button type="button">Back to Login</button></a>
</section>"#,
        email = escape(email)
    );
    page("Email Sent", user, &body)
}

pub fn developer_signup(
    user: Option<&UserRecord>,
    form: &DeveloperSignupForm,
    errors: &FormErrors,
) -> String {
    let fields = [
        Input {
            id: "name",
            label: "Full Name",
            kind: "text",
            value: &form.name,
            placeholder: "John Doe",
            error: errors.get(Field::Name),
        },
        Input {
            id: "email",
            label: "Email",
            kind: "email",
            value: &form.email,
            placeholder: "your@email.com",
            error: errors.get(Field::Email),
        },
        Input {
            id: "password",
            label: "Password",
            kind: "password",
            value: "",
            placeholder: "••••••••",
            error: errors.get(Field::Password),
        },
        Input {
            id: "confirmPassword",
            label: "Confirm Password",
            kind: "password",
            value: "",
            placeholder: "••••••••",
            error: errors.get(Field::ConfirmPassword),
        },
        Input {
            id: "techStack",
            label: "Tech Stack (comma separated)",
            kind: "text",
            value: &form.tech_stack,
            placeholder: "React, Node.js, MongoDB",
            error: errors.get(Field::TechStack),
        },
        Input {
            id: "githubUrl",
            label: "GitHub URL",
            kind: "url",
            value: &form.github_url,
            placeholder: "https://github.com/username",
            error: None,
        },
        Input {
            id: "linkedinUrl",
            label: "LinkedIn URL",
            kind: "url",
            value: &form.linkedin_url,
            placeholder: "https://linkedin.com/in/username",
            error: None,
        },
    ];
    signup_page(user, Role::Developer, "Join as a Developer", &fields, "", errors)
}

pub fn user_signup(user: Option<&UserRecord>, form: &UserSignupForm, errors: &FormErrors) -> String {
    let fields = [
        Input {
            id: "name",
            label: "Full Name",
            kind: "text",
            value: &form.name,
            placeholder: "John Doe",
            error: errors.get(Field::Name),
        },
        Input {
            id: "email",
            label: "Email",
            kind: "email",
            value: &form.email,
            placeholder: "your@email.com",
            error: errors.get(Field::Email),
        },
        Input {
            id: "password",
            label: "Password",
            kind: "password",
            value: "",
            placeholder: "••••••••",
            error: errors.get(Field::Password),
        },
        Input {
            id: "confirmPassword",
            label: "Confirm Password",
            kind: "password",
            value: "",
            placeholder: "••••••••",
            error: errors.get(Field::ConfirmPassword),
        },
    ];
    let terms_error = match errors.get(Field::Terms) {
        Some(message) => format!(r#"<p class="field-error">{}</p>"#, escape(message)),
        None => String::new(),
    };
    let terms = format!(
        r#"<p>
            <input type="checkbox" id="terms" name="terms" required{checked}>
            <label for="terms" style="display:inline">I agree to the Terms and Conditions</label>
        </p>
        {terms_error}"#,
        checked = if form.accepted_terms() { " checked" } else { "" },
        terms_error = terms_error,
    );
    signup_page(user, Role::User, "Create your account", &fields, &terms, errors)
}

fn signup_page(
    user: Option<&UserRecord>,
    role: Role,
    heading: &str,
    fields: &[Input<'_>],
    extra: &str,
    errors: &FormErrors,
) -> String {
    let inputs: String = fields.iter().map(Input::render).collect();
    let body = format!(
        r#"<section class="card narrow">
    <div class="card {header}">
        <h2>{heading}</h2>
    </div>
    <form method="post" action="{action}" novalidate>
        {form_error}
        {inputs}
        {extra}
        <button type="submit">Create Account</button>
    </form>
    <p>Already have an account? <a href="{login}">Log in</a></p>
</section>"#,
        header = header_class(role),
        heading = heading,
        action = navigation::signup_path(role),
        form_error = form_error(errors),
        inputs = inputs,
        extra = extra,
        login = navigation::login_path(role),
    );
    page(&format!("{} Signup", role_label(role)), user, &body)
}

/// Confirmation shown after a successful signup; moves on to the role's login.
pub fn signup_complete(user: Option<&UserRecord>, role: Role) -> String {
    let login = navigation::login_path(role);
    let message = match role {
        Role::Developer => {
            "Your developer account has been created successfully. Please proceed to login."
        }
        Role::User => "Your account has been created. You'll be redirected to the login page shortly...",
    };
    let body = format!(
        r#"<section class="card narrow">
    <div class="card {header}">
        <h2>Account Created!</h2>
    </div>
    <p>{message}</p>
    <a href="{login}"><button type="button">Go to Login</button></a>
</section>"#,
        header = header_class(role),
        message = message,
        login = login,
    );
    redirecting_page("Account Created", user, &body, login, SIGNUP_REDIRECT_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_form_shows_field_and_form_errors() {
        let mut errors = FormErrors::new();
        errors.push(Field::Password, "Password is required");
        errors.push(Field::Form, "Invalid credentials");

        let html = login(None, Role::Developer, "/developer/login", "dev@x.io", &errors);
        assert!(html.contains("Developer Login"));
        assert!(html.contains(r#"action="/developer/login""#));
        assert!(html.contains(r#"value="dev@x.io""#));
        assert!(html.contains("Password is required"));
        assert!(html.contains(r#"<div class="form-error" role="alert">Invalid credentials</div>"#));
    }

    #[test]
    fn signup_never_echoes_passwords() {
        let form = UserSignupForm {
            name: "Ann".to_string(),
            email: "ann@x.io".to_string(),
            password: "s3cret-value".to_string(),
            confirm_password: "s3cret-valuX".to_string(),
            terms: None,
        };
        let mut errors = FormErrors::new();
        errors.push(Field::ConfirmPassword, "Passwords do not match");

        let html = user_signup(None, &form, &errors);
        assert!(!html.contains("s3cret"));
        assert!(html.contains(r#"value="Ann""#));
        assert!(html.contains("Passwords do not match"));
    }

    #[test]
    fn user_signup_shows_terms_message_and_keeps_the_tick() {
        let mut form = UserSignupForm {
            name: "Ann".to_string(),
            ..Default::default()
        };
        let mut errors = FormErrors::new();
        errors.push(Field::Terms, "You must accept the Terms and Conditions");

        let html = user_signup(None, &form, &errors);
        assert!(html.contains("You must accept the Terms and Conditions"));
        assert!(!html.contains(" checked>"));

        form.terms = Some("on".to_string());
        let html = user_signup(None, &form, &FormErrors::new());
        assert!(html.contains(r#"name="terms" required checked>"#));
    }

    #[test]
    fn signup_complete_redirects_to_role_login() {
        let html = signup_complete(None, Role::Developer);
        assert!(html.contains("url=/developer/login"));
        assert!(html.contains("Please proceed to login."));
    }

    #[test]
    fn reset_confirmation_escapes_email() {
        let html = reset_link_sent(None, "a<b>@c.com");
        assert!(html.contains("a&lt;b&gt;@c.com"));
    }
}
