use super::*;
use crate::storage::MemoryStore;

fn ann() -> User {
    User {
        id: "u1".to_owned(),
        name: "Ann".to_owned(),
        email: "a@b.com".to_owned(),
    }
}

fn ann_response() -> AuthResponse {
    AuthResponse {
        token: "t1".to_owned(),
        user: ann(),
    }
}

// =============================================================
// defaults and constructors
// =============================================================

#[test]
fn default_session_is_hydrating() {
    let session = Session::default();
    assert!(session.loading);
    assert!(session.user.is_none());
}

#[test]
fn authenticated_always_carries_a_user() {
    let session = Session::authenticated(ann());
    assert!(session.is_authenticated());
    assert!(!session.loading);
}

#[test]
fn unauthenticated_never_carries_a_user() {
    let session = Session::unauthenticated();
    assert!(!session.is_authenticated());
    assert!(!session.loading);
}

// =============================================================
// hydration
// =============================================================

#[test]
fn hydrated_empty_store_is_unauthenticated() {
    let store = MemoryStore::default();
    let session = Session::hydrated(&store);
    assert_eq!(session, Session::unauthenticated());
}

#[test]
fn hydrated_with_token_and_cached_user_is_authenticated() {
    let store = MemoryStore::default();
    store.save_token("t1");
    store.save_user(&serde_json::to_string(&ann()).unwrap());
    let session = Session::hydrated(&store);
    assert_eq!(session.user, Some(ann()));
    assert!(!session.loading);
}

#[test]
fn hydrated_token_without_cached_user_is_unauthenticated() {
    let store = MemoryStore::default();
    store.save_token("t1");
    assert_eq!(Session::hydrated(&store), Session::unauthenticated());
}

#[test]
fn hydrated_cached_user_without_token_is_unauthenticated() {
    let store = MemoryStore::default();
    store.save_user(&serde_json::to_string(&ann()).unwrap());
    assert_eq!(Session::hydrated(&store), Session::unauthenticated());
}

#[test]
fn hydrated_corrupt_cached_user_is_unauthenticated() {
    let store = MemoryStore::default();
    store.save_token("t1");
    store.save_user("not json");
    assert_eq!(Session::hydrated(&store), Session::unauthenticated());
}

// =============================================================
// establish
// =============================================================

#[test]
fn establish_persists_token() {
    let store = MemoryStore::default();
    establish(&store, &ann_response());
    assert_eq!(store.token(), Some("t1".to_owned()));
}

#[test]
fn establish_caches_user_for_reload() {
    let store = MemoryStore::default();
    establish(&store, &ann_response());
    let cached: User = serde_json::from_str(&store.user().unwrap()).unwrap();
    assert_eq!(cached, ann());
}

#[test]
fn establish_returns_authenticated_session() {
    let store = MemoryStore::default();
    let session = establish(&store, &ann_response());
    assert_eq!(session, Session::authenticated(ann()));
}

#[test]
fn establish_survives_a_reload() {
    // Sign in, then hydrate a fresh session from the same store.
    let store = MemoryStore::default();
    establish(&store, &ann_response());
    let session = Session::hydrated(&store);
    assert_eq!(session.user, Some(ann()));
}

#[test]
fn establish_replaces_previous_credentials_wholesale() {
    let store = MemoryStore::default();
    establish(&store, &ann_response());
    let bob = AuthResponse {
        token: "t2".to_owned(),
        user: User {
            id: "u2".to_owned(),
            name: "Bob".to_owned(),
            email: String::new(),
        },
    };
    let session = establish(&store, &bob);
    assert_eq!(store.token(), Some("t2".to_owned()));
    assert_eq!(session.user.unwrap().name, "Bob");
}

// =============================================================
// clear_session / logout
// =============================================================

#[test]
fn clear_session_empties_the_store() {
    let store = MemoryStore::default();
    establish(&store, &ann_response());
    let session = clear_session(&store);
    assert_eq!(store.token(), None);
    assert_eq!(store.user(), None);
    assert_eq!(session, Session::unauthenticated());
}

#[test]
fn clear_session_then_hydrate_stays_unauthenticated() {
    let store = MemoryStore::default();
    establish(&store, &ann_response());
    clear_session(&store);
    assert_eq!(Session::hydrated(&store), Session::unauthenticated());
}
