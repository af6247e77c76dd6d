//! Route guard for authenticated views.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;

/// Gates its children on the session state.
///
/// While hydrating, only a spinner is rendered. An unauthenticated session
/// triggers a redirect to `/login` and renders nothing. The check is
/// reactive: it re-runs on every session change, not just at mount.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=move || {
                view! {
                    <Show when=move || session.get().loading>
                        <div class="spinner" aria-label="Loading"></div>
                    </Show>
                }
            }
        >
            {children()}
        </Show>
    }
}
