//! # authgate
//!
//! Browser session gate logic, independent of any DOM or HTTP binding:
//!
//! - [`login`] posts credentials and persists the issued token
//! - [`guard`] decides load-time redirects and performs logout
//! - [`session`] owns the two persisted fields behind [`session::SessionStore`]
//!
//! The `client` crate binds these to Leptos pages, `localStorage`, and
//! `fetch`.

pub mod config;
pub mod error;
pub mod guard;
pub mod login;
pub mod session;
pub mod transport;
pub mod wire;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use config::GateConfig;
pub use error::{ConfigError, LoginError, StoreError, TransportError};
pub use guard::{PageKind, Redirect, check_page_load, logout};
pub use login::{
    Feedback, LoginAttempt, LoginEntry, LoginForm, LoginSuccess, Notice, SubmitGate, Tone, login,
    open_login_page, submit,
};
pub use session::{MemoryStore, Session, SessionStore};
pub use transport::LoginTransport;
pub use wire::{Credentials, ErrorBody, HttpReply, LoginResponse};
