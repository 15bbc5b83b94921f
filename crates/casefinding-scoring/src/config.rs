use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::error::ScoringError;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the scoring service.
///
/// Resolved once at startup and handed to [`crate::client::ScoringClient`];
/// nothing in this crate reads credentials from anywhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub endpoint: String,
    #[serde(default)]
    pub credentials: Credentials,
    /// Value of the `Access-Control-Allow-Origin` request header, if sent.
    #[serde(default = "default_allow_origin")]
    pub allow_origin: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_allow_origin() -> Option<String> {
    Some("*".to_string())
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ScoringConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            credentials: Credentials::None,
            allow_origin: default_allow_origin(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(ScoringError::Config("endpoint cannot be empty".into()));
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ScoringError::Config(format!(
                "endpoint must be an http(s) URL, got {endpoint:?}"
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ScoringError::Config("timeout_secs must be positive".into()));
        }
        Ok(())
    }
}

/// How requests authenticate against the scoring service.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Credentials {
    Basic {
        username: String,
        password: String,
    },
    /// A pre-built `Authorization` header value, sent as-is.
    Header {
        value: String,
    },
    #[default]
    None,
}

impl Credentials {
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The `Authorization` header value for these credentials.
    pub fn authorization(&self) -> Option<String> {
        match self {
            Credentials::Basic { username, password } => {
                Some(format!("Basic {}", STANDARD.encode(format!("{username}:{password}"))))
            }
            Credentials::Header { value } => Some(value.clone()),
            Credentials::None => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Credentials::Basic { .. } => "basic",
            Credentials::Header { .. } => "header",
            Credentials::None => "none",
        }
    }

    /// A redacted description that is safe to log or display.
    pub fn hint(&self) -> String {
        match self {
            Credentials::Basic { username, .. } => format!("basic ({username}, password ****)"),
            Credentials::Header { value } => format!("header ({})", redact(value)),
            Credentials::None => "none".to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hint())
    }
}

fn redact(secret: &str) -> String {
    if secret.len() <= 8 || !secret.is_ascii() {
        return "****".to_string();
    }
    let prefix = &secret[..4];
    let suffix = &secret[secret.len() - 4..];
    format!("{prefix}...{suffix}")
}
