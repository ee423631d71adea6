//! Build-time configuration for the browser bundle.
//!
//! The browser has no process environment, so the `AUTHGATE_*` variables are
//! captured with `option_env!` when the WASM crate is compiled and fed through
//! the same parser native code uses.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use authgate::GateConfig;
use authgate::config::{
    ENV_LOGIN_ENDPOINT, ENV_LOGIN_PATH, ENV_REDIRECT_DELAY_MS, ENV_ROOT_PATH, ENV_TOKEN_KEY,
    ENV_USERNAME_KEY,
};

fn compiled_value(var: &str) -> Option<&'static str> {
    match var {
        ENV_LOGIN_ENDPOINT => option_env!("AUTHGATE_LOGIN_ENDPOINT"),
        ENV_LOGIN_PATH => option_env!("AUTHGATE_LOGIN_PATH"),
        ENV_ROOT_PATH => option_env!("AUTHGATE_ROOT_PATH"),
        ENV_TOKEN_KEY => option_env!("AUTHGATE_TOKEN_KEY"),
        ENV_USERNAME_KEY => option_env!("AUTHGATE_USERNAME_KEY"),
        ENV_REDIRECT_DELAY_MS => option_env!("AUTHGATE_REDIRECT_DELAY_MS"),
        _ => None,
    }
}

/// Gate config baked into this build. Invalid values fall back to defaults.
pub fn load() -> GateConfig {
    load_with(|var| compiled_value(var).map(str::to_owned))
}

fn load_with<F>(lookup: F) -> GateConfig
where
    F: Fn(&str) -> Option<String>,
{
    match GateConfig::from_lookup(lookup) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("config: {e}; using defaults");
            GateConfig::default()
        }
    }
}

/// Console log level, from `AUTHGATE_LOG` at build time (default `info`).
pub fn log_level() -> log::Level {
    parse_log_level(option_env!("AUTHGATE_LOG"))
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(log::Level::Info)
}
