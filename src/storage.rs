//! Durable token/user persistence.
//!
//! The session credential and the cached user record live behind the
//! [`TokenStore`] trait so the session logic never touches `localStorage`
//! directly: the browser-backed store is used at runtime, an in-memory
//! store in native tests (and any non-browser target).

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;

/// `localStorage` key for the auth token.
pub const TOKEN_KEY: &str = "token";
/// `localStorage` key for the serialized user record.
pub const USER_KEY: &str = "user";

/// Key-value persistence for the auth token and cached user.
///
/// No token-shape validation happens here; the backend is authoritative.
pub trait TokenStore {
    fn save_token(&self, token: &str);
    fn token(&self) -> Option<String>;
    fn save_user(&self, json: &str);
    fn user(&self) -> Option<String>;
    /// Remove token and cached user together.
    fn clear(&self);
}

/// `localStorage`-backed store. Outside a browser every operation
/// degrades to a no-op read of nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for BrowserStore {
    fn save_token(&self, token: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn token(&self) -> Option<String> {
        local_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
    }

    fn save_user(&self, json: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(USER_KEY, json);
        }
    }

    fn user(&self) -> Option<String> {
        local_storage().and_then(|s| s.get_item(USER_KEY).ok().flatten())
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}

/// In-memory store for tests and non-browser targets.
#[derive(Debug, Default)]
pub struct MemoryStore {
    token: RefCell<Option<String>>,
    user: RefCell<Option<String>>,
}

impl TokenStore for MemoryStore {
    fn save_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save_user(&self, json: &str) {
        *self.user.borrow_mut() = Some(json.to_owned());
    }

    fn user(&self) -> Option<String> {
        self.user.borrow().clone()
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
        *self.user.borrow_mut() = None;
    }
}
