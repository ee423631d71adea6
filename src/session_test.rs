use super::*;
use crate::test_helpers::{FlakyStore, memory_session, signed_in_session};

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_set_get_remove() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    assert_eq!(store.len(), 1);
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn memory_store_remove_missing_key_is_ok() {
    assert!(MemoryStore::new().remove("absent").is_ok());
}

// =============================================================
// Session accessors
// =============================================================

#[test]
fn fresh_session_is_signed_out() {
    let session = memory_session(&GateConfig::default());
    assert!(!session.is_authenticated());
    assert_eq!(session.token().unwrap(), None);
    assert_eq!(session.username().unwrap(), None);
}

#[test]
fn establish_writes_both_configured_keys() {
    let config = GateConfig::default();
    let session = signed_in_session(&config, "T", "U");
    assert!(session.is_authenticated());
    assert_eq!(session.store().get("SECURITY_TOKEN").unwrap().as_deref(), Some("T"));
    assert_eq!(session.store().get("LOGGED_IN_USER").unwrap().as_deref(), Some("U"));
}

#[test]
fn session_uses_custom_keys() {
    let config = GateConfig {
        token_key: "tok".to_owned(),
        username_key: "who".to_owned(),
        ..GateConfig::default()
    };
    let session = signed_in_session(&config, "T", "U");
    assert_eq!(session.store().get("tok").unwrap().as_deref(), Some("T"));
    assert_eq!(session.store().get("SECURITY_TOKEN").unwrap(), None);
}

#[test]
fn empty_token_counts_as_absent() {
    let config = GateConfig::default();
    let session = memory_session(&config);
    session.store().set(&config.token_key, "").unwrap();
    assert!(!session.is_authenticated());
    assert_eq!(session.token().unwrap(), None);
}

#[test]
fn clear_removes_both_fields() {
    let session = signed_in_session(&GateConfig::default(), "T", "U");
    session.clear().unwrap();
    assert!(!session.is_authenticated());
    assert_eq!(session.username().unwrap(), None);
    assert!(session.store().is_empty());
}

#[test]
fn clear_on_empty_session_is_ok() {
    assert!(memory_session(&GateConfig::default()).clear().is_ok());
}

// =============================================================
// Storage failures
// =============================================================

#[test]
fn unreadable_token_reads_as_signed_out() {
    let config = GateConfig::default();
    let store = FlakyStore { fail_get: Some(config.token_key.clone()), ..FlakyStore::default() };
    let session = Session::new(store, &config);
    assert!(!session.is_authenticated());
    assert!(session.token().is_err());
}

#[test]
fn clear_still_removes_username_when_token_removal_fails() {
    let config = GateConfig::default();
    let store = FlakyStore { fail_remove: Some(config.token_key.clone()), ..FlakyStore::default() };
    store.inner.set(&config.token_key, "T").unwrap();
    store.inner.set(&config.username_key, "U").unwrap();
    let session = Session::new(store, &config);

    let err = session.clear().unwrap_err();
    assert!(matches!(err, StoreError::Write { ref key, .. } if key == "SECURITY_TOKEN"));
    assert_eq!(session.store().inner.get(&config.username_key).unwrap(), None);
}

#[test]
fn session_over_borrowed_store() {
    let config = GateConfig::default();
    let store = MemoryStore::new();
    Session::new(&store, &config).establish("T", "U").unwrap();
    assert_eq!(store.len(), 2);
}
