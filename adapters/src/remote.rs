//! HTTP implementation of the `CredentialVerifier` trait.
//!
//! The attempt is POSTed as JSON to a single endpoint which answers with the
//! `VerifierResponse` shape. Transport failures, non-success statuses and
//! undecodable bodies are reported as `AdapterError`s so callers can tell them
//! apart from a rejection.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;

use crate::errors::AdapterError;
use crate::models::{CredentialAttempt, Verdict, VerifierResponse};
use crate::CredentialVerifier;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct HttpVerifier {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpVerifier {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, AdapterError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| {
                AdapterError::ConnectionError(format!("Cannot build HTTP client: {}", err))
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }
}

#[async_trait]
impl CredentialVerifier for HttpVerifier {
    async fn verify(&self, attempt: &CredentialAttempt) -> Result<Verdict, AdapterError> {
        debug!("posting credential attempt for {} to {}", attempt.email, self.endpoint);

        let resp = self
            .client
            .post(&self.endpoint)
            .json(attempt)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    AdapterError::Timeout(self.timeout.as_millis() as u64)
                } else {
                    AdapterError::from(err)
                }
            })?;

        let status = resp.status();
        // A 401/403 with a well-formed body is still a verdict.
        if !status.is_success() && status.as_u16() != 401 && status.as_u16() != 403 {
            warn!("verifier at {} answered {}", self.endpoint, status);
            return Err(AdapterError::StatusError(status.as_u16()));
        }

        let body = resp.bytes().await.map_err(AdapterError::from)?;
        let decoded: VerifierResponse = serde_json::from_slice(&body)
            .map_err(|err| AdapterError::DecodeError(err.to_string()))?;

        Verdict::try_from(decoded)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, UserRecord};
    use axum::{http::StatusCode, routing::post, Json, Router};

    async fn fake_identity_service(Json(attempt): Json<CredentialAttempt>) -> (StatusCode, Json<VerifierResponse>) {
        if attempt.password == "right" {
            let verdict = Verdict::Accepted {
                user: UserRecord {
                    id: 42,
                    name: "Grace".to_string(),
                    email: attempt.email,
                    role: attempt.role,
                },
                token: "tok-42".to_string(),
            };
            (StatusCode::OK, Json(verdict.into()))
        } else {
            let verdict = Verdict::Rejected {
                message: "Wrong password".to_string(),
            };
            (StatusCode::UNAUTHORIZED, Json(verdict.into()))
        }
    }

    async fn spawn(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/verify", addr)
    }

    #[tokio::test]
    async fn maps_success_reply_to_accepted() {
        let url = spawn(Router::new().route("/verify", post(fake_identity_service))).await;
        let verifier = HttpVerifier::new(url, DEFAULT_TIMEOUT).unwrap();

        let verdict = verifier
            .verify(&CredentialAttempt::new("g@h.io", "right", Role::Developer))
            .await
            .unwrap();

        match verdict {
            Verdict::Accepted { user, token } => {
                assert_eq!(user.id, 42);
                assert_eq!(user.role, Role::Developer);
                assert_eq!(token, "tok-42");
            }
            other => panic!("expected acceptance, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn unauthorized_reply_is_a_rejection_not_an_error() {
        let url = spawn(Router::new().route("/verify", post(fake_identity_service))).await;
        let verifier = HttpVerifier::new(url, DEFAULT_TIMEOUT).unwrap();

        let verdict = verifier
            .verify(&CredentialAttempt::new("g@h.io", "wrong", Role::User))
            .await
            .unwrap();

        assert_eq!(
            verdict,
            Verdict::Rejected {
                message: "Wrong password".to_string()
            }
        );
    }

    #[tokio::test]
    async fn server_error_is_reported_as_status() {
        let app = Router::new().route(
            "/verify",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let url = spawn(app).await;
        let verifier = HttpVerifier::new(url, DEFAULT_TIMEOUT).unwrap();

        let err = verifier
            .verify(&CredentialAttempt::new("g@h.io", "right", Role::User))
            .await
            .unwrap_err();

        assert!(matches!(err, AdapterError::StatusError(500)));
    }

    #[tokio::test]
    async fn garbage_body_is_a_decode_error() {
        let app = Router::new().route("/verify", post(|| async { "definitely not json" }));
        let url = spawn(app).await;
        let verifier = HttpVerifier::new(url, DEFAULT_TIMEOUT).unwrap();

        let err = verifier
            .verify(&CredentialAttempt::new("g@h.io", "right", Role::User))
            .await
            .unwrap_err();

        assert!(matches!(err, AdapterError::DecodeError(_)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_connection_error() {
        // Bind then drop to get a port nobody listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let verifier =
            HttpVerifier::new(format!("http://{}/verify", addr), Duration::from_secs(2)).unwrap();
        let err = verifier
            .verify(&CredentialAttempt::new("g@h.io", "right", Role::User))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AdapterError::ConnectionError(_) | AdapterError::Timeout(_)
        ));
    }
}
