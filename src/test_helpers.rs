//! Shared fakes for unit tests.

use std::cell::RefCell;

use crate::config::GateConfig;
use crate::error::{StoreError, TransportError};
use crate::session::{MemoryStore, Session, SessionStore};
use crate::transport::LoginTransport;
use crate::wire::{Credentials, HttpReply};

// =========================================================================
// MockTransport
// =========================================================================

/// Replays one scripted reply and records every request it sees.
pub struct MockTransport {
    reply: Result<HttpReply, TransportError>,
    pub calls: RefCell<Vec<(String, Credentials)>>,
}

impl MockTransport {
    pub fn replying(status: u16, body: serde_json::Value) -> Self {
        Self::raw(status, body.to_string())
    }

    pub fn raw(status: u16, body: impl Into<String>) -> Self {
        Self { reply: Ok(HttpReply::new(status, body)), calls: RefCell::new(Vec::new()) }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            reply: Err(TransportError::Network(reason.to_owned())),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

#[async_trait::async_trait(?Send)]
impl LoginTransport for MockTransport {
    async fn post_credentials(
        &self,
        endpoint: &str,
        credentials: &Credentials,
    ) -> Result<HttpReply, TransportError> {
        self.calls.borrow_mut().push((endpoint.to_owned(), credentials.clone()));
        self.reply.clone()
    }
}

// =========================================================================
// FlakyStore
// =========================================================================

/// Store that fails writes to, reads of, or removals of chosen keys.
#[derive(Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub fail_get: Option<String>,
    pub fail_set: Option<String>,
    pub fail_remove: Option<String>,
}

impl SessionStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_get.as_deref() == Some(key) {
            return Err(StoreError::Read { key: key.to_owned(), reason: "denied".to_owned() });
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_set.as_deref() == Some(key) {
            return Err(StoreError::Write {
                key: key.to_owned(),
                reason: "quota exceeded".to_owned(),
            });
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        if self.fail_remove.as_deref() == Some(key) {
            return Err(StoreError::Write { key: key.to_owned(), reason: "denied".to_owned() });
        }
        self.inner.remove(key)
    }
}

// =========================================================================
// Builders
// =========================================================================

pub fn memory_session(config: &GateConfig) -> Session<MemoryStore> {
    Session::new(MemoryStore::new(), config)
}

pub fn signed_in_session(config: &GateConfig, token: &str, username: &str) -> Session<MemoryStore> {
    let session = memory_session(config);
    session.establish(token, username).unwrap();
    session
}
