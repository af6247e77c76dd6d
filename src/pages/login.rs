//! Login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, Session};
use crate::state::toast::{self, ToastState};
use crate::storage::BrowserStore;

/// Email/password sign-in form. On success navigates to the dashboard;
/// on failure shows the error as a toast and leaves the session unchanged.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let email = email.get_untracked();
            let password = password.get_untracked();
            match session::login(session, &BrowserStore, &email, &password).await {
                Ok(()) => navigate("/dashboard", NavigateOptions::default()),
                Err(err) => toast::notify_error(toasts, err.to_string()),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Login"</h1>
                <label class="auth-form__label">
                    "Email"
                    <input
                        class="auth-form__input"
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Password"
                    <input
                        class="auth-form__input"
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                </button>
                <p class="auth-form__alt">
                    "No account yet? " <a href="/register">"Register"</a>
                </p>
            </form>
        </div>
    }
}
