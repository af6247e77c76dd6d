//! Top navigation bar with session-aware links.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, Session};
use crate::storage::BrowserStore;
use crate::util;

/// Brand link plus Dashboard/Jobs/Logout when authenticated,
/// Login/Register otherwise.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session::logout(session, &BrowserStore);
        navigate("/", NavigateOptions::default());
    };

    let avatar = move || {
        session
            .get()
            .user
            .map(|u| util::initial(&u.name))
            .unwrap_or_default()
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">
                "JobPortal"
            </a>
            <nav class="navbar__links">
                <Show
                    when=move || session.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <a class="navbar__link" href="/login">
                                "Login"
                            </a>
                            <a class="navbar__link" href="/register">
                                "Register"
                            </a>
                        }
                    }
                >
                    <a class="navbar__link" href="/dashboard">
                        "Dashboard"
                    </a>
                    <a class="navbar__link" href="/jobs">
                        "Jobs"
                    </a>
                    <span class="navbar__avatar" title="Signed in">
                        {avatar}
                    </span>
                    <button class="navbar__link navbar__logout" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </Show>
            </nav>
        </header>
    }
}
