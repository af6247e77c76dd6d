//! Registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, Session};
use crate::state::toast::{self, ToastState};
use crate::storage::BrowserStore;

/// Account creation form; symmetric to the login page via the sign-up
/// endpoint.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
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
            let name = name.get_untracked();
            let email = email.get_untracked();
            let password = password.get_untracked();
            match session::register(session, &BrowserStore, &name, &email, &password).await {
                Ok(()) => navigate("/dashboard", NavigateOptions::default()),
                Err(err) => toast::notify_error(toasts, err.to_string()),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Register"</h1>
                <label class="auth-form__label">
                    "Name"
                    <input
                        class="auth-form__input"
                        type="text"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
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
                    {move || if submitting.get() { "Creating account..." } else { "Create Account" }}
                </button>
                <p class="auth-form__alt">
                    "Already registered? " <a href="/login">"Login"</a>
                </p>
            </form>
        </div>
    }
}
