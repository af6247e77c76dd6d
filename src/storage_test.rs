use super::*;

// =============================================================
// MemoryStore token
// =============================================================

#[test]
fn token_absent_initially() {
    let store = MemoryStore::default();
    assert_eq!(store.token(), None);
}

#[test]
fn save_token_then_read() {
    let store = MemoryStore::default();
    store.save_token("t1");
    assert_eq!(store.token(), Some("t1".to_owned()));
}

#[test]
fn save_token_overwrites() {
    let store = MemoryStore::default();
    store.save_token("t1");
    store.save_token("t2");
    assert_eq!(store.token(), Some("t2".to_owned()));
}

// =============================================================
// MemoryStore user
// =============================================================

#[test]
fn user_absent_initially() {
    let store = MemoryStore::default();
    assert_eq!(store.user(), None);
}

#[test]
fn save_user_then_read() {
    let store = MemoryStore::default();
    store.save_user(r#"{"id":"u1"}"#);
    assert_eq!(store.user(), Some(r#"{"id":"u1"}"#.to_owned()));
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_removes_token_and_user_together() {
    let store = MemoryStore::default();
    store.save_token("t1");
    store.save_user(r#"{"id":"u1"}"#);
    store.clear();
    assert_eq!(store.token(), None);
    assert_eq!(store.user(), None);
}

#[test]
fn clear_on_empty_store_is_harmless() {
    let store = MemoryStore::default();
    store.clear();
    assert_eq!(store.token(), None);
}
