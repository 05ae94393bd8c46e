//! Stand-in verifier used until a real identity backend exists.
//!
//! It performs no authentication: any attempt with a non-empty email and a
//! non-empty password is accepted after a fixed delay that imitates a network
//! round trip.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use crate::errors::AdapterError;
use crate::models::{CredentialAttempt, UserRecord, Verdict};
use crate::CredentialVerifier;

pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);
pub const STUB_TOKEN: &str = "fake-jwt-token";
pub const STUB_USER_ID: u64 = 1;
pub const STUB_USER_NAME: &str = "Test User";
pub const REJECTION_MESSAGE: &str = "Invalid credentials";

#[derive(Debug, Clone)]
pub struct StubVerifier {
    latency: Duration,
}

impl StubVerifier {
    pub fn new() -> Self {
        Self::with_latency(DEFAULT_LATENCY)
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    /// The stub's rule, without the delay.
    pub fn judge(attempt: &CredentialAttempt) -> Verdict {
        if attempt.email.is_empty() || attempt.password.is_empty() {
            return Verdict::Rejected {
                message: REJECTION_MESSAGE.to_string(),
            };
        }

        Verdict::Accepted {
            user: UserRecord {
                id: STUB_USER_ID,
                name: STUB_USER_NAME.to_string(),
                email: attempt.email.clone(),
                role: attempt.role,
            },
            token: STUB_TOKEN.to_string(),
        }
    }
}

impl Default for StubVerifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialVerifier for StubVerifier {
    async fn verify(&self, attempt: &CredentialAttempt) -> Result<Verdict, AdapterError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let verdict = Self::judge(attempt);
        debug!(
            "stub verifier judged {} ({}): accepted={}",
            attempt.email,
            attempt.role,
            verdict.is_accepted()
        );
        Ok(verdict)
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}
