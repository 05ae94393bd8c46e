//! Generic data models for the `adapters` crate.
//!
//! These models define the roles, user records and credential attempts shared
//! by every verifier implementation, plus the JSON shape exchanged with a
//! remote verifier.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::AdapterError;

/// The two kinds of DevConnect account.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Developer,
    User,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Developer, Role::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Developer => "developer",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Email/password pair submitted from a login form, tagged with the role of
/// the form it came from.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CredentialAttempt {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl CredentialAttempt {
    pub fn new(email: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            role,
        }
    }
}

impl fmt::Debug for CredentialAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialAttempt")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Answer of a verifier for one attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted { user: UserRecord, token: String },
    Rejected { message: String },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted { .. })
    }
}

/// Wire shape of a verifier reply:
/// `{"success": true, "token": .., "user": ..}` or `{"success": false, "message": ..}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VerifierResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<Verdict> for VerifierResponse {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Accepted { user, token } => VerifierResponse {
                success: true,
                token: Some(token),
                user: Some(user),
                message: None,
            },
            Verdict::Rejected { message } => VerifierResponse {
                success: false,
                token: None,
                user: None,
                message: Some(message),
            },
        }
    }
}

impl TryFrom<VerifierResponse> for Verdict {
    type Error = AdapterError;

    fn try_from(resp: VerifierResponse) -> Result<Self, Self::Error> {
        if !resp.success {
            return Ok(Verdict::Rejected {
                message: resp.message.unwrap_or_else(|| "Login failed".to_string()),
            });
        }

        match (resp.user, resp.token) {
            (Some(user), Some(token)) => Ok(Verdict::Accepted { user, token }),
            (None, _) => Err(AdapterError::DecodeError(
                "successful response without `user`".to_string(),
            )),
            (_, None) => Err(AdapterError::DecodeError(
                "successful response without `token`".to_string(),
            )),
        }
    }
}
