//! Connects the credential verifier selected by the configuration.
//!
//! The rest of the backend only sees `Arc<dyn CredentialVerifier>`, so moving
//! from the stub to a real identity service is a configuration change.

use std::sync::Arc;
use std::time::Duration;

use devconnect_adapters::{AdapterError, CredentialVerifier, HttpVerifier, StubVerifier};
use tracing::info;

use crate::config::VerifierSettings;

pub fn connect(
    settings: &VerifierSettings,
    latency: Duration,
) -> Result<Arc<dyn CredentialVerifier>, AdapterError> {
    let verifier: Arc<dyn CredentialVerifier> = match settings {
        VerifierSettings::Stub => {
            info!(latency_ms = latency.as_millis() as u64, "using stub credential verifier");
            Arc::new(StubVerifier::with_latency(latency))
        }
        VerifierSettings::Http { url, timeout } => {
            info!(%url, timeout_ms = timeout.as_millis() as u64, "using HTTP credential verifier");
            Arc::new(HttpVerifier::new(url.clone(), *timeout)?)
        }
    };
    Ok(verifier)
}
