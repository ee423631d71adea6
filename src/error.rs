//! Error types for config, storage, transport, and the login exchange.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as a typed `Result`. Only [`LoginError`] is ever
//! shown to the user, and only through [`LoginError::user_message`], which
//! collapses it to one of a handful of fixed strings.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Fallback shown when the server rejects a login without a usable detail.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

/// Shown when the login request could not complete.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error";

/// A configuration value could not be accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `AUTHGATE_REDIRECT_DELAY_MS` was not a non-negative integer.
    #[error("invalid redirect delay: {0}")]
    InvalidDelay(String),

    /// A path variable did not start with `/`.
    #[error("invalid path in {var}: {value}")]
    InvalidPath { var: &'static str, value: String },

    /// Login and root page resolve to the same path.
    #[error("login and root pages share path {0}")]
    PathCollision(String),

    /// Token and username would be stored under the same key.
    #[error("token and username share storage key {0}")]
    DuplicateKey(String),
}

/// The client-side key-value store failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No storage is reachable (no window, storage disabled, non-browser build).
    #[error("storage unavailable")]
    Unavailable,

    #[error("storage read failed for {key}: {reason}")]
    Read { key: String, reason: String },

    #[error("storage write failed for {key}: {reason}")]
    Write { key: String, reason: String },
}

/// The HTTP request could not be completed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request failed before a response arrived.
    #[error("network failure: {0}")]
    Network(String),

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),
}

/// Outcome of a failed login attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// The server answered with a non-success status.
    #[error("login rejected: status {status}")]
    Rejected { status: u16, detail: Option<String> },

    /// The request never produced a response.
    #[error("login request failed: {0}")]
    Network(String),

    /// A success status arrived with a body that carries no usable token.
    #[error("malformed login response: {0}")]
    MalformedResponse(String),

    /// The token was accepted but could not be persisted.
    #[error("session storage failed: {0}")]
    Storage(#[from] StoreError),
}

impl From<TransportError> for LoginError {
    fn from(err: TransportError) -> Self {
        Self::Network(err.to_string())
    }
}

impl LoginError {
    /// Text for the login page message region.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { detail: Some(detail), .. } if !detail.is_empty() => detail.clone(),
            Self::Rejected { .. } | Self::Storage(_) => LOGIN_FAILED_MESSAGE.to_owned(),
            Self::Network(_) | Self::MalformedResponse(_) => NETWORK_ERROR_MESSAGE.to_owned(),
        }
    }
}
