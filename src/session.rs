//! Session state: the token and display name persisted across page loads.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`Session`] is the only code that knows the storage keys. The route guard,
//! the login flow, and the logout control all go through it, so the key-value
//! store behind it can be `localStorage` in the browser or [`MemoryStore`] in
//! tests.
//!
//! Token presence is the sole "authenticated" signal. The token is opaque and
//! never inspected.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::config::GateConfig;
use crate::error::StoreError;

/// String key-value storage scoped to the browser origin.
pub trait SessionStore {
    /// Read `key`; `Ok(None)` when unset.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`; removing an unset key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store rejects the removal.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-process store for native use and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Accessors for the persisted session token and display username.
#[derive(Debug, Clone)]
pub struct Session<S> {
    store: S,
    token_key: String,
    username_key: String,
}

impl<S: SessionStore> Session<S> {
    #[must_use]
    pub fn new(store: S, config: &GateConfig) -> Self {
        Self {
            store,
            token_key: config.token_key.clone(),
            username_key: config.username_key.clone(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored session token. An empty string counts as absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if storage cannot be read.
    pub fn token(&self) -> Result<Option<String>, StoreError> {
        Ok(self.store.get(&self.token_key)?.filter(|t| !t.is_empty()))
    }

    /// Stored display username.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if storage cannot be read.
    pub fn username(&self) -> Result<Option<String>, StoreError> {
        self.store.get(&self.username_key)
    }

    /// Whether a token is present. Unreadable storage reads as signed out.
    pub fn is_authenticated(&self) -> bool {
        match self.token() {
            Ok(token) => token.is_some(),
            Err(e) => {
                log::warn!("session: token read failed: {e}");
                false
            }
        }
    }

    /// Persist a freshly issued token and the name to display for it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if either write fails.
    pub fn establish(&self, token: &str, username: &str) -> Result<(), StoreError> {
        self.store.set(&self.token_key, token)?;
        self.store.set(&self.username_key, username)
    }

    /// Remove both fields. Both removals are attempted; the first error wins.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if either removal fails.
    pub fn clear(&self) -> Result<(), StoreError> {
        let token = self.store.remove(&self.token_key);
        let username = self.store.remove(&self.username_key);
        token.and(username)
    }
}
