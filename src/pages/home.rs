//! Public landing page.

use leptos::prelude::*;

use crate::state::session::Session;

/// Hero section with calls to action that follow the session state.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Find Your Next Hire"</h1>
                <p class="hero__tagline">
                    "Post job openings, manage applications, and grow your team from one dashboard."
                </p>
                <div class="hero__actions">
                    <Show
                        when=move || session.get().is_authenticated()
                        fallback=|| {
                            view! {
                                <a class="btn btn--primary" href="/register">
                                    "Get Started"
                                </a>
                                <a class="btn" href="/login">
                                    "Login"
                                </a>
                            }
                        }
                    >
                        <a class="btn btn--primary" href="/dashboard">
                            "Go to Dashboard"
                        </a>
                    </Show>
                </div>
            </section>
        </div>
    }
}
