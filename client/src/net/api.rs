//! `fetch`-backed login transport.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: every request fails with a network error, which the login
//! flow already renders as "Network error".

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use authgate::{Credentials, HttpReply, LoginTransport, TransportError};

/// Posts credentials with the browser's `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[async_trait::async_trait(?Send)]
impl LoginTransport for FetchTransport {
    async fn post_credentials(
        &self,
        endpoint: &str,
        credentials: &Credentials,
    ) -> Result<HttpReply, TransportError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(endpoint)
                .json(credentials)
                .map_err(|e| TransportError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| TransportError::Network(e.to_string()))?;
            Ok(HttpReply::new(status, body))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(TransportError::Network(unavailable_message(endpoint)))
        }
    }
}

#[cfg(any(test, not(feature = "csr")))]
fn unavailable_message(endpoint: &str) -> String {
    format!("fetch unavailable: POST {endpoint}")
}
