//! Core business logic for the authentication system.
//!
//! This service owns the session store, guards against duplicate in-flight
//! submissions and orchestrates validate → verify → login for each form. It
//! sits between the handlers and the credential verifier adapter.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use devconnect_adapters::{CredentialAttempt, CredentialVerifier, Verdict};
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::errors::AuthError;
use super::models::{
    DeveloperSignupForm, ForgotPasswordForm, LoginForm, Role, UserRecord, UserSignupForm,
};
use super::validation::Validate;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Authenticated {
    user: UserRecord,
    token: String,
}

/// Who is signed in, if anyone. User and token are stored together so one can
/// never be present without the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStore {
    current: Option<Authenticated>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever session exists.
    pub fn login(&mut self, user: UserRecord, token: impl Into<String>) {
        self.current = Some(Authenticated {
            user,
            token: token.into(),
        });
    }

    pub fn logout(&mut self) {
        self.current = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_user(&self) -> Option<&UserRecord> {
        self.current.as_ref().map(|auth| &auth.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|auth| auth.token.as_str())
    }

    pub fn role(&self) -> Option<Role> {
        self.current_user().map(|user| user.role)
    }
}

/// Shared handle to the process-wide session. Cloning shares the store.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    inner: Arc<RwLock<SessionStore>>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn login(&self, user: UserRecord, token: impl Into<String>) {
        self.inner.write().await.login(user, token);
    }

    pub async fn logout(&self) {
        self.inner.write().await.logout();
    }

    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.is_authenticated()
    }

    pub async fn current_user(&self) -> Option<UserRecord> {
        self.inner.read().await.current_user().cloned()
    }

    #[cfg(test)]
    async fn snapshot(&self) -> SessionStore {
        self.inner.read().await.clone()
    }
}

/// Forms whose submission involves a wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Login(Role),
    Signup(Role),
}

/// Set of forms with a submission currently awaiting an answer.
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    pending: Arc<Mutex<HashSet<FormKind>>>,
}

impl InFlight {
    /// Marks `kind` as pending, or returns `None` if it already is. The mark
    /// is cleared when the returned guard drops, including when the request
    /// future is abandoned mid-wait.
    pub fn begin(&self, kind: FormKind) -> Option<PendingGuard> {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if !pending.insert(kind) {
            return None;
        }
        Some(PendingGuard {
            pending: Arc::clone(&self.pending),
            kind,
        })
    }

    #[cfg(test)]
    fn is_pending(&self, kind: FormKind) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(&kind)
    }
}

#[derive(Debug)]
pub struct PendingGuard {
    pending: Arc<Mutex<HashSet<FormKind>>>,
    kind: FormKind,
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&self.kind);
    }
}

#[derive(Clone)]
pub struct AuthService {
    verifier: Arc<dyn CredentialVerifier>,
    session: SessionHandle,
    in_flight: InFlight,
    registration_latency: Duration,
}

impl AuthService {
    pub fn new(
        verifier: Arc<dyn CredentialVerifier>,
        session: SessionHandle,
        registration_latency: Duration,
    ) -> Self {
        Self {
            verifier,
            session,
            in_flight: InFlight::default(),
            registration_latency,
        }
    }

    #[cfg(test)]
    fn session(&self) -> &SessionHandle {
        &self.session
    }

    #[cfg(test)]
    fn in_flight(&self) -> &InFlight {
        &self.in_flight
    }

    /// Validates the form, asks the verifier and, on acceptance, replaces the
    /// session. The verifier is not called when validation fails.
    pub async fn login(&self, role: Role, form: &LoginForm) -> Result<UserRecord, AuthError> {
        let errors = form.validate();
        if !errors.is_empty() {
            return Err(AuthError::Validation(errors));
        }

        let _pending = self
            .in_flight
            .begin(FormKind::Login(role))
            .ok_or(AuthError::InProgress)?;

        let attempt = CredentialAttempt::new(form.email.clone(), form.password.clone(), role);
        match self.verifier.verify(&attempt).await {
            Ok(Verdict::Accepted { user, token }) => {
                info!(email = %user.email, role = %role, verifier = self.verifier.name(), "login accepted");
                self.session.login(user.clone(), token).await;
                Ok(user)
            }
            Ok(Verdict::Rejected { message }) => {
                info!(email = %attempt.email, role = %role, "login rejected: {}", message);
                Err(AuthError::Rejected(message))
            }
            Err(err) => {
                warn!(email = %attempt.email, role = %role, verifier = self.verifier.name(), "verifier failed: {}", err);
                Err(AuthError::Verifier(err))
            }
        }
    }

    pub async fn logout(&self) {
        if let Some(user) = self.session.current_user().await {
            info!(email = %user.email, role = %user.role, "logout");
        }
        self.session.logout().await;
    }

    /// Developer signup has no backend yet: a valid form is acknowledged at once.
    pub async fn register_developer(&self, form: &DeveloperSignupForm) -> Result<(), AuthError> {
        let errors = form.validate();
        if !errors.is_empty() {
            return Err(AuthError::Validation(errors));
        }

        info!(
            name = %form.name,
            email = %form.email,
            tech_stack = ?form.tech_stack_items(),
            github = %form.github_url,
            linkedin = %form.linkedin_url,
            "developer signup received"
        );
        Ok(())
    }

    /// User signup waits out the simulated registration round trip.
    pub async fn register_user(&self, form: &UserSignupForm) -> Result<(), AuthError> {
        let errors = form.validate();
        if !errors.is_empty() {
            return Err(AuthError::Validation(errors));
        }

        let _pending = self
            .in_flight
            .begin(FormKind::Signup(Role::User))
            .ok_or(AuthError::InProgress)?;

        if !self.registration_latency.is_zero() {
            tokio::time::sleep(self.registration_latency).await;
        }
        info!(name = %form.name, email = %form.email, "user signup received");
        Ok(())
    }

    /// No mail is sent; a valid request is only logged.
    pub fn request_password_reset(&self, form: &ForgotPasswordForm) -> Result<(), AuthError> {
        let errors = form.validate();
        if !errors.is_empty() {
            return Err(AuthError::Validation(errors));
        }

        info!(email = %form.email, "password reset requested");
        Ok(())
    }
}
