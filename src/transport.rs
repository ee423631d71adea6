//! HTTP seam for the login exchange.
//!
//! The browser crate implements [`LoginTransport`] over `fetch`; tests use a
//! scripted mock. Futures are `?Send` because the browser runs everything on
//! one thread.

use crate::error::TransportError;
use crate::wire::{Credentials, HttpReply};

#[async_trait::async_trait(?Send)]
pub trait LoginTransport {
    /// `POST` `credentials` as JSON to `endpoint` and return whatever the
    /// server answered, success status or not.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] only when no response was received.
    async fn post_credentials(
        &self,
        endpoint: &str,
        credentials: &Credentials,
    ) -> Result<HttpReply, TransportError>;
}

#[async_trait::async_trait(?Send)]
impl<T: LoginTransport + ?Sized> LoginTransport for &T {
    async fn post_credentials(
        &self,
        endpoint: &str,
        credentials: &Credentials,
    ) -> Result<HttpReply, TransportError> {
        (**self).post_credentials(endpoint, credentials).await
    }
}
