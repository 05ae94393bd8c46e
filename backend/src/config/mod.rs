//! Central module for application-wide configuration settings.
//!
//! Settings come from `DEVCONNECT_*` environment variables (a `.env` file is
//! honoured by `main`): listen address, which credential verifier to use and
//! how to reach it, the simulated latency, and the default log filter.

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

pub const ENV_BIND: &str = "DEVCONNECT_BIND";
pub const ENV_VERIFIER: &str = "DEVCONNECT_VERIFIER";
pub const ENV_VERIFIER_URL: &str = "DEVCONNECT_VERIFIER_URL";
pub const ENV_VERIFIER_TIMEOUT_MS: &str = "DEVCONNECT_VERIFIER_TIMEOUT_MS";
pub const ENV_LATENCY_MS: &str = "DEVCONNECT_LATENCY_MS";
pub const ENV_LOG: &str = "DEVCONNECT_LOG";

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_LOG_FILTER: &str =
    "devconnect_backend=info,devconnect_adapters=info,tower_http=info";
const DEFAULT_LATENCY_MS: u64 = 1000;
const DEFAULT_VERIFIER_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: cannot parse `{value}`: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
    #[error("{0} must be set when {1}=http")]
    Missing(&'static str, &'static str),
}

/// Which credential verifier the server talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifierSettings {
    /// Built-in stand-in that accepts any non-empty email/password pair.
    Stub,
    /// Remote identity service speaking the verifier JSON contract.
    Http { url: String, timeout: Duration },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub verifier: VerifierSettings,
    /// Delay of the stub verifier and of the simulated user registration.
    pub latency: Duration,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            verifier: VerifierSettings::Stub,
            latency: Duration::from_millis(DEFAULT_LATENCY_MS),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from any variable source; unset variables fall back
    /// to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = lookup(ENV_BIND).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind.parse::<SocketAddr>().map_err(|err| ConfigError::Invalid {
            var: ENV_BIND,
            value: bind.clone(),
            reason: err.to_string(),
        })?;

        let latency = Duration::from_millis(parse_millis(
            ENV_LATENCY_MS,
            lookup(ENV_LATENCY_MS),
            DEFAULT_LATENCY_MS,
        )?);

        let kind = lookup(ENV_VERIFIER).unwrap_or_else(|| "stub".to_string());
        let verifier = match kind.as_str() {
            "stub" => VerifierSettings::Stub,
            "http" => {
                let url = lookup(ENV_VERIFIER_URL)
                    .filter(|url| !url.is_empty())
                    .ok_or(ConfigError::Missing(ENV_VERIFIER_URL, ENV_VERIFIER))?;
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(ConfigError::Invalid {
                        var: ENV_VERIFIER_URL,
                        value: url,
                        reason: "expected an http:// or https:// URL".to_string(),
                    });
                }
                let timeout = Duration::from_millis(parse_millis(
                    ENV_VERIFIER_TIMEOUT_MS,
                    lookup(ENV_VERIFIER_TIMEOUT_MS),
                    DEFAULT_VERIFIER_TIMEOUT_MS,
                )?);
                VerifierSettings::Http { url, timeout }
            }
            other => {
                return Err(ConfigError::Invalid {
                    var: ENV_VERIFIER,
                    value: other.to_string(),
                    reason: "expected `stub` or `http`".to_string(),
                })
            }
        };

        let log_filter = lookup(ENV_LOG).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            bind_addr,
            verifier,
            latency,
            log_filter,
        })
    }
}

fn parse_millis(var: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => {
            let parsed = value.trim().parse::<u64>();
            parsed.map_err(|err| ConfigError::Invalid {
                var,
                value,
                reason: err.to_string(),
            })
        }
    }
}
