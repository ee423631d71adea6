//! Gate configuration: endpoint, page paths, storage keys, redirect delay.
//!
//! Defaults match the deployed login page. Overrides come from a key lookup so
//! the same parser serves process env (native) and `option_env!` (WASM build).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_LOGIN_ENDPOINT: &str = "/custom-login";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_ROOT_PATH: &str = "/";
pub const DEFAULT_TOKEN_KEY: &str = "SECURITY_TOKEN";
pub const DEFAULT_USERNAME_KEY: &str = "LOGGED_IN_USER";
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 600;

pub const ENV_LOGIN_ENDPOINT: &str = "AUTHGATE_LOGIN_ENDPOINT";
pub const ENV_LOGIN_PATH: &str = "AUTHGATE_LOGIN_PATH";
pub const ENV_ROOT_PATH: &str = "AUTHGATE_ROOT_PATH";
pub const ENV_TOKEN_KEY: &str = "AUTHGATE_TOKEN_KEY";
pub const ENV_USERNAME_KEY: &str = "AUTHGATE_USERNAME_KEY";
pub const ENV_REDIRECT_DELAY_MS: &str = "AUTHGATE_REDIRECT_DELAY_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateConfig {
    /// `POST` target for credentials.
    pub login_endpoint: String,
    /// Path of the login page.
    pub login_path: String,
    /// Path of the protected root page.
    pub root_path: String,
    /// Storage key holding the session token.
    pub token_key: String,
    /// Storage key holding the display username.
    pub username_key: String,
    /// Pause between the success message and the redirect to root.
    pub redirect_delay: Duration,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            login_endpoint: DEFAULT_LOGIN_ENDPOINT.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            root_path: DEFAULT_ROOT_PATH.to_owned(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            username_key: DEFAULT_USERNAME_KEY.to_owned(),
            redirect_delay: Duration::from_millis(DEFAULT_REDIRECT_DELAY_MS),
        }
    }
}

impl GateConfig {
    /// Build config from a variable lookup.
    ///
    /// Optional (default in parentheses):
    /// - `AUTHGATE_LOGIN_ENDPOINT` (`/custom-login`)
    /// - `AUTHGATE_LOGIN_PATH` (`/login`)
    /// - `AUTHGATE_ROOT_PATH` (`/`)
    /// - `AUTHGATE_TOKEN_KEY` (`SECURITY_TOKEN`)
    /// - `AUTHGATE_USERNAME_KEY` (`LOGGED_IN_USER`)
    /// - `AUTHGATE_REDIRECT_DELAY_MS` (600)
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a non-numeric delay, a path without a
    /// leading `/`, login and root pages on the same path, or identical token
    /// and username keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| {
            lookup(var)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let login_endpoint = parse_path(
            ENV_LOGIN_ENDPOINT,
            get(ENV_LOGIN_ENDPOINT),
            defaults.login_endpoint,
        )?;
        let login_path = parse_path(ENV_LOGIN_PATH, get(ENV_LOGIN_PATH), defaults.login_path)?;
        let root_path = parse_path(ENV_ROOT_PATH, get(ENV_ROOT_PATH), defaults.root_path)?;
        // The guard tells the two pages apart by path alone.
        if normalize_path(&login_path) == normalize_path(&root_path) {
            return Err(ConfigError::PathCollision(login_path));
        }
        let token_key = get(ENV_TOKEN_KEY).unwrap_or(defaults.token_key);
        let username_key = get(ENV_USERNAME_KEY).unwrap_or(defaults.username_key);
        if token_key == username_key {
            return Err(ConfigError::DuplicateKey(token_key));
        }
        let redirect_delay = match get(ENV_REDIRECT_DELAY_MS) {
            Some(raw) => {
                let millis = raw.parse::<u64>().map_err(|_| ConfigError::InvalidDelay(raw))?;
                Duration::from_millis(millis)
            }
            None => defaults.redirect_delay,
        };

        Ok(Self {
            login_endpoint,
            login_path,
            root_path,
            token_key,
            username_key,
            redirect_delay,
        })
    }

    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Same as [`GateConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| match std::env::var(var) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    #[must_use]
    pub fn with_redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }
}

fn parse_path(
    var: &'static str,
    raw: Option<String>,
    default: String,
) -> Result<String, ConfigError> {
    match raw {
        Some(value) if value.starts_with('/') => Ok(value),
        Some(value) => Err(ConfigError::InvalidPath { var, value }),
        None => Ok(default),
    }
}

/// Path with query, fragment and trailing slashes removed; empty becomes `/`.
pub(crate) fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}
