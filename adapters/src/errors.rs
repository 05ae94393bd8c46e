//! Custom error types specific to the `adapters` crate.
//!
//! These cover failures to obtain a verdict from an identity backend. A
//! credential rejection is not an error; it is a `Verdict`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("cannot reach verifier: {0}")]
    ConnectionError(String),
    #[error("verifier timed out after {0} ms")]
    Timeout(u64),
    #[error("verifier answered with HTTP status {0}")]
    StatusError(u16),
    #[error("cannot decode verifier response: {0}")]
    DecodeError(String),
}

impl From<reqwest::Error> for AdapterError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AdapterError::DecodeError(err.to_string())
        } else if let Some(status) = err.status() {
            AdapterError::StatusError(status.as_u16())
        } else {
            AdapterError::ConnectionError(err.to_string())
        }
    }
}
