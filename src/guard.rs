//! Page-load checks and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page calls [`check_page_load`] once, synchronously, when it mounts.
//! The check is not reactive: clearing the session later in the same page
//! lifetime does not re-run it. Every redirect produced here replaces the
//! current history entry.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::time::Duration;

use crate::config::{GateConfig, normalize_path};
use crate::session::{Session, SessionStore};

/// A history-replacing navigation, optionally deferred.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: String,
    pub delay: Duration,
}

impl Redirect {
    #[must_use]
    pub fn now(to: impl Into<String>) -> Self {
        Self { to: to.into(), delay: Duration::ZERO }
    }

    #[must_use]
    pub fn after(to: impl Into<String>, delay: Duration) -> Self {
        Self { to: to.into(), delay }
    }
}

/// Which load-time rule applies to a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Login,
    Root,
    Other,
}

impl PageKind {
    /// Classify `path`. A trailing slash is tolerated on non-root paths.
    #[must_use]
    pub fn classify(path: &str, config: &GateConfig) -> Self {
        let path = normalize_path(path);
        if path == normalize_path(&config.login_path) {
            Self::Login
        } else if path == normalize_path(&config.root_path) {
            Self::Root
        } else {
            Self::Other
        }
    }
}

/// Load-time redirect for `path`, if any.
///
/// - login page with a token: go to root (the form flow never starts)
/// - root page without a token: go to login
pub fn check_page_load<S: SessionStore>(
    path: &str,
    session: &Session<S>,
    config: &GateConfig,
) -> Option<Redirect> {
    match PageKind::classify(path, config) {
        PageKind::Login if session.is_authenticated() => {
            log::debug!("guard: already signed in on {path}, redirecting to {}", config.root_path);
            Some(Redirect::now(&config.root_path))
        }
        PageKind::Root if !session.is_authenticated() => {
            log::debug!("guard: no session on {path}, redirecting to {}", config.login_path);
            Some(Redirect::now(&config.login_path))
        }
        _ => None,
    }
}

/// Clear the session and return the redirect to the login page.
///
/// Storage failures are logged; the redirect is returned regardless.
pub fn logout<S: SessionStore>(session: &Session<S>, config: &GateConfig) -> Redirect {
    if let Err(e) = session.clear() {
        log::warn!("logout: session clear failed: {e}");
    } else {
        log::info!("logout: session cleared");
    }
    Redirect::now(&config.login_path)
}
