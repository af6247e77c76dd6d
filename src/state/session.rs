//! Session state machine and auth actions.
//!
//! ARCHITECTURE
//! ============
//! Three states, encoded in `Session { user, loading }`:
//! Hydrating (`loading`), Unauthenticated (no user), Authenticated (user).
//! Hydration from the token store happens exactly once, when the root
//! component constructs the session signal; it is never re-checked.
//! The session signal has one writer (the actions here) and many readers
//! (route guard, navbar, pages).

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, User};
use crate::storage::TokenStore;

/// Current authentication state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
    /// True only before hydration has run.
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl Session {
    #[must_use]
    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    #[must_use]
    pub fn unauthenticated() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Restore the session from durable storage.
    ///
    /// A stored token together with a parseable cached user yields an
    /// authenticated session; anything else an unauthenticated one.
    #[must_use]
    pub fn hydrated(store: &dyn TokenStore) -> Self {
        let user = store
            .token()
            .and_then(|_| store.user())
            .and_then(|json| serde_json::from_str::<User>(&json).ok());
        match user {
            Some(user) => Self::authenticated(user),
            None => Self::unauthenticated(),
        }
    }
}

/// Persist a successful auth response and return the resulting session.
///
/// Failed sign-in/sign-up attempts never reach this point, which is what
/// keeps storage and session state untouched on failure.
pub fn establish(store: &dyn TokenStore, resp: &AuthResponse) -> Session {
    store.save_token(&resp.token);
    if let Ok(json) = serde_json::to_string(&resp.user) {
        store.save_user(&json);
    }
    Session::authenticated(resp.user.clone())
}

/// Drop the stored credentials and return an unauthenticated session.
pub fn clear_session(store: &dyn TokenStore) -> Session {
    store.clear();
    Session::unauthenticated()
}

/// Sign in and, on success, persist the credentials and update the session.
pub async fn login(
    session: RwSignal<Session>,
    store: &dyn TokenStore,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    let resp = api::sign_in(email, password).await?;
    log::info!("signed in as {}", resp.user.name);
    session.set(establish(store, &resp));
    Ok(())
}

/// Create an account; symmetric to [`login`] via the sign-up endpoint.
pub async fn register(
    session: RwSignal<Session>,
    store: &dyn TokenStore,
    name: &str,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    let resp = api::sign_up(name, email, password).await?;
    log::info!("registered account for {}", resp.user.name);
    session.set(establish(store, &resp));
    Ok(())
}

/// Clear the stored credentials and the session. The caller is expected
/// to navigate to a public view afterwards.
pub fn logout(session: RwSignal<Session>, store: &dyn TokenStore) {
    session.set(clear_session(store));
    log::info!("signed out");
}
