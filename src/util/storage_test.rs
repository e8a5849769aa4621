use std::sync::Arc;

use super::*;

#[test]
fn memory_storage_set_then_get() {
    let storage = MemoryStorage::new();
    storage.set("k", "v").unwrap();
    assert_eq!(storage.get("k"), Some("v".to_owned()));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_overwrites_existing_value() {
    let storage = MemoryStorage::with_entries([("k", "old")]);
    storage.set("k", "new").unwrap();
    assert_eq!(storage.get("k"), Some("new".to_owned()));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_remove_is_idempotent() {
    let storage = MemoryStorage::with_entries([("k", "v")]);
    storage.remove("k").unwrap();
    storage.remove("k").unwrap();
    assert_eq!(storage.get("k"), None);
    assert!(storage.is_empty());
}

#[test]
fn arc_storage_shares_entries() {
    let shared = Arc::new(MemoryStorage::new());
    let handle: Arc<MemoryStorage> = Arc::clone(&shared);
    handle.set("k", "v").unwrap();
    assert_eq!(shared.get("k"), Some("v".to_owned()));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_without_browser() {
    let storage = BrowserStorage;
    assert_eq!(storage.get("isAuthenticated"), None);
    assert_eq!(storage.set("isAuthenticated", "true"), Err(StorageError::Unavailable));
    assert_eq!(storage.remove("isAuthenticated"), Err(StorageError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_session_over_browser_storage_restores_nothing() {
    let mut store = crate::state::session::SessionStore::new(BrowserStorage);
    store.initialize();
    let snapshot = store.read();
    assert!(!snapshot.authenticated);
    assert_eq!(snapshot.profile, None);
}

#[test]
fn write_error_names_key() {
    let err = StorageError::Write { key: "user".to_owned(), reason: "QuotaExceededError".to_owned() };
    assert_eq!(err.to_string(), "failed to write `user`: QuotaExceededError");
}
