use super::*;
use crate::util::navigation::RecordingNavigator;
use crate::util::storage::MemoryStore;

// =============================================================
// Helpers
// =============================================================

fn make_store() -> (TokenStore, MemoryStore, RecordingNavigator) {
    let memory = MemoryStore::new();
    let nav = RecordingNavigator::at("/videos");
    let tokens = TokenStore::new(Arc::new(memory.clone()), Arc::new(nav.clone()));
    (tokens, memory, nav)
}

struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Option<String> {
        Some("stale".to_owned())
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write { key: key.to_owned(), reason: "quota".to_owned() })
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

// =============================================================
// set_tokens / getters
// =============================================================

#[test]
fn set_tokens_round_trips_both_values() {
    let (tokens, _, _) = make_store();
    tokens.set_tokens(Some("access-1"), Some("refresh-1")).unwrap();
    assert_eq!(tokens.access_token().as_deref(), Some("access-1"));
    assert_eq!(tokens.refresh_token().as_deref(), Some("refresh-1"));
}

#[test]
fn set_tokens_with_omitted_refresh_keeps_previous_refresh() {
    let (tokens, _, _) = make_store();
    tokens.set_tokens(Some("access-1"), Some("refresh-1")).unwrap();
    tokens.set_tokens(Some("access-2"), None).unwrap();
    assert_eq!(tokens.access_token().as_deref(), Some("access-2"));
    assert_eq!(tokens.refresh_token().as_deref(), Some("refresh-1"));
}

#[test]
fn set_tokens_ignores_empty_strings() {
    let (tokens, _, _) = make_store();
    tokens.set_tokens(Some("access-1"), Some("refresh-1")).unwrap();
    tokens.set_tokens(Some(""), Some("")).unwrap();
    assert_eq!(tokens.access_token().as_deref(), Some("access-1"));
    assert_eq!(tokens.refresh_token().as_deref(), Some("refresh-1"));
}

#[test]
fn set_tokens_writes_expected_keys() {
    let (tokens, memory, _) = make_store();
    tokens.set_tokens(Some("a"), Some("r")).unwrap();
    assert_eq!(memory.get("accessToken").as_deref(), Some("a"));
    assert_eq!(memory.get("refreshToken").as_deref(), Some("r"));
}

#[test]
fn set_tokens_surfaces_storage_failure() {
    let tokens = TokenStore::new(Arc::new(FailingStore), Arc::new(RecordingNavigator::default()));
    let err = tokens.set_tokens(Some("a"), None).unwrap_err();
    assert!(matches!(err, StorageError::Write { ref key, .. } if key == "accessToken"));
}

// =============================================================
// is_authenticated
// =============================================================

#[test]
fn is_authenticated_false_when_empty() {
    let (tokens, _, _) = make_store();
    assert!(!tokens.is_authenticated());
}

#[test]
fn is_authenticated_ignores_refresh_only() {
    let (tokens, _, _) = make_store();
    tokens.set_tokens(None, Some("refresh-1")).unwrap();
    assert!(!tokens.is_authenticated());
}

#[test]
fn is_authenticated_false_for_stored_empty_access_token() {
    let (tokens, memory, _) = make_store();
    memory.set(ACCESS_TOKEN_KEY, "").unwrap();
    assert!(!tokens.is_authenticated());
}

// =============================================================
// remove_tokens / logout
// =============================================================

#[test]
fn remove_tokens_twice_leaves_storage_empty() {
    let (tokens, memory, _) = make_store();
    tokens.set_tokens(Some("a"), Some("r")).unwrap();
    tokens.remove_tokens();
    assert!(memory.is_empty());
    assert!(!tokens.is_authenticated());
    tokens.remove_tokens();
    assert!(memory.is_empty());
    assert!(!tokens.is_authenticated());
}

#[test]
fn remove_tokens_swallows_storage_failure() {
    let tokens = TokenStore::new(Arc::new(FailingStore), Arc::new(RecordingNavigator::default()));
    tokens.remove_tokens();
}

#[test]
fn logout_clears_tokens_and_redirects_to_login() {
    let (tokens, memory, nav) = make_store();
    tokens.set_tokens(Some("a"), Some("r")).unwrap();
    tokens.logout();
    assert!(memory.is_empty());
    assert_eq!(nav.redirects(), vec!["/login".to_owned()]);
}
