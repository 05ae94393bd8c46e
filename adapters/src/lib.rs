//! Core `adapters` crate for abstracting credential verification.
//!
//! This crate defines the `CredentialVerifier` trait, which outlines the single
//! operation the DevConnect front needs from an identity backend, and provides
//! the concrete implementations: a latency-simulating stub and an HTTP client
//! speaking the verifier JSON contract.

pub mod errors;
pub mod models;
pub mod remote;
pub mod stub;

use async_trait::async_trait;

pub use errors::AdapterError;
pub use models::{CredentialAttempt, Role, UserRecord, Verdict, VerifierResponse};
pub use remote::HttpVerifier;
pub use stub::StubVerifier;

/// Checks a credential attempt against an identity backend.
///
/// A `Verdict::Rejected` is a normal answer from the backend. `Err` is reserved
/// for failures to obtain an answer at all (connectivity, malformed replies).
/// Dropping the returned future abandons the attempt; implementations keep no
/// state between calls.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, attempt: &CredentialAttempt) -> Result<Verdict, AdapterError>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}
