//! JSON bodies exchanged with the login endpoint.
//!
//! DESIGN
//! ======
//! Success bodies are strict: a 2xx without a token is a protocol fault.
//! Failure bodies are lenient: anything that is not `{ "detail": string }`
//! decodes to an empty [`ErrorBody`] so the caller falls back to a generic
//! message.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Serialize};

/// Trimmed form input ready to send.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Build from raw input values, trimming surrounding whitespace from both.
    #[must_use]
    pub fn from_form(username: &str, password: &str) -> Self {
        Self { username: username.trim().to_owned(), password: password.trim().to_owned() }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of a successful login response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub username: Option<String>,
}

/// Body of a rejected login response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorBody {
    /// Decode a failure body, treating anything unrecognized as "no detail".
    #[must_use]
    pub fn parse_lenient(body: &str) -> Self {
        match serde_json::from_str::<Self>(body) {
            Ok(parsed) => Self { detail: parsed.detail.filter(|d| !d.is_empty()) },
            Err(_) => Self::default(),
        }
    }
}

/// Raw HTTP reply as seen by the login flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
