//! Login exchange: post credentials, persist the issued session, describe
//! what the page should show next.
//!
//! ARCHITECTURE
//! ============
//! [`login`] is the request logic and returns a plain `Result`.
//! [`Feedback::from_result`] turns that result into a message plus an
//! optional delayed redirect. The page binding only renders [`Feedback`] and
//! executes the redirect, so none of this needs a browser to test.
//!
//! Re-entrant submissions are refused by [`SubmitGate`]: while a request is in
//! flight, further submits are ignored without touching the network.
//!
//! [`open_login_page`] is the page's entry point. A visitor who already holds a
//! session gets a [`Redirect`] and the transport is dropped with it; only a
//! [`LoginForm`] can ever submit.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::GateConfig;
use crate::error::LoginError;
use crate::guard::{Redirect, check_page_load};
use crate::session::{Session, SessionStore};
use crate::transport::LoginTransport;
use crate::wire::{Credentials, ErrorBody, LoginResponse};

/// Session established by a successful login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginSuccess {
    pub token: String,
    /// Name stored for display: the server's, else the submitted one.
    pub username: String,
}

/// Post `credentials` and persist the session on success.
///
/// Storage is only written after a 2xx response with a non-empty token.
///
/// # Errors
///
/// - [`LoginError::Network`] when no response arrives
/// - [`LoginError::Rejected`] on a non-2xx status
/// - [`LoginError::MalformedResponse`] when a 2xx body has no usable token
/// - [`LoginError::Storage`] when the session cannot be written
pub async fn login<T, S>(
    transport: &T,
    session: &Session<S>,
    config: &GateConfig,
    credentials: &Credentials,
) -> Result<LoginSuccess, LoginError>
where
    T: LoginTransport + ?Sized,
    S: SessionStore,
{
    log::debug!("login: submitting for {}", credentials.username);
    let reply = transport.post_credentials(&config.login_endpoint, credentials).await?;

    if !reply.is_success() {
        let detail = ErrorBody::parse_lenient(&reply.body).detail;
        log::info!("login: rejected for {} (status {})", credentials.username, reply.status);
        return Err(LoginError::Rejected { status: reply.status, detail });
    }

    let body: LoginResponse = serde_json::from_str(&reply.body)
        .map_err(|e| LoginError::MalformedResponse(e.to_string()))?;
    if body.token.is_empty() {
        return Err(LoginError::MalformedResponse("empty token".to_owned()));
    }
    let username = body
        .username
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| credentials.username.clone());

    if let Err(e) = session.establish(&body.token, &username) {
        // Do not leave a token behind without its name.
        if let Err(clear_err) = session.clear() {
            log::warn!("login: rollback after failed write also failed: {clear_err}");
        }
        return Err(e.into());
    }

    log::info!("login: session established for {username}");
    Ok(LoginSuccess { token: body.token, username })
}

/// Presentation of the message region when visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Error,
    Success,
}

/// A visible message. A hidden region is `Option::<Notice>::None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub tone: Tone,
}

impl Notice {
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Error }
    }

    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Success }
    }

    /// Class attribute for the message element.
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self.tone {
            Tone::Error => "msg error",
            Tone::Success => "msg success",
        }
    }
}

/// What the login page does after a submission settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub notice: Notice,
    pub redirect: Option<Redirect>,
}

impl Feedback {
    #[must_use]
    pub fn from_result(result: &Result<LoginSuccess, LoginError>, config: &GateConfig) -> Self {
        match result {
            Ok(success) => Self {
                notice: Notice::success(format!("Welcome {}. Redirecting...", success.username)),
                redirect: Some(Redirect::after(&config.root_path, config.redirect_delay)),
            },
            Err(e) => {
                if let LoginError::Storage(_) | LoginError::MalformedResponse(_) = e {
                    log::warn!("login: {e}");
                }
                Self { notice: Notice::error(e.user_message()), redirect: None }
            }
        }
    }
}

/// Refuses overlapping submissions from one login form.
#[derive(Clone, Debug, Default)]
pub struct SubmitGate {
    in_flight: Arc<AtomicBool>,
}

impl SubmitGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the gate, or `None` if a submission is already running.
    #[must_use]
    pub fn begin(&self) -> Option<LoginAttempt> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
            .then(|| LoginAttempt { in_flight: Arc::clone(&self.in_flight) })
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Held for the duration of one submission; releases the gate on drop.
#[derive(Debug)]
pub struct LoginAttempt {
    in_flight: Arc<AtomicBool>,
}

impl Drop for LoginAttempt {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}

/// Run one gated submission and describe the outcome.
pub async fn submit<T, S>(
    attempt: LoginAttempt,
    transport: &T,
    session: &Session<S>,
    config: &GateConfig,
    credentials: &Credentials,
) -> Feedback
where
    T: LoginTransport + ?Sized,
    S: SessionStore,
{
    let result = login(transport, session, config, credentials).await;
    drop(attempt);
    Feedback::from_result(&result, config)
}

/// What the login page becomes once its load-time check has run.
#[derive(Debug)]
pub enum LoginEntry<T, S> {
    /// Already signed in: leave for the root page without showing the form.
    Redirect(Redirect),
    /// Signed out: show the form.
    Form(LoginForm<T, S>),
}

/// Run the login page's load-time check and hand back either the redirect or
/// the form that owns the transport.
pub fn open_login_page<T, S>(
    path: &str,
    transport: T,
    session: Session<S>,
    config: GateConfig,
) -> LoginEntry<T, S>
where
    T: LoginTransport,
    S: SessionStore,
{
    match check_page_load(path, &session, &config) {
        Some(redirect) => LoginEntry::Redirect(redirect),
        None => {
            LoginEntry::Form(LoginForm { transport, session, config, gate: SubmitGate::new() })
        }
    }
}

/// A rendered login form: the only holder of the transport.
#[derive(Clone, Debug)]
pub struct LoginForm<T, S> {
    transport: T,
    session: Session<S>,
    config: GateConfig,
    gate: SubmitGate,
}

impl<T, S> LoginForm<T, S>
where
    T: LoginTransport,
    S: SessionStore,
{
    /// Claim the form for one submission, or `None` while one is in flight.
    #[must_use]
    pub fn begin(&self) -> Option<LoginAttempt> {
        self.gate.begin()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    /// Submit `credentials` under `attempt`.
    pub async fn submit(&self, attempt: LoginAttempt, credentials: &Credentials) -> Feedback {
        submit(attempt, &self.transport, &self.session, &self.config, credentials).await
    }
}
