//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, jobs::JobsPage, login::LoginPage,
    register::RegisterPage,
};
use crate::state::jobs::JobsState;
use crate::state::session::Session;
use crate::state::toast::ToastState;
use crate::storage::BrowserStore;

/// Root component.
///
/// Hydrates the session from durable storage exactly once, provides the
/// shared state contexts, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::hydrated(&BrowserStore));
    let jobs = RwSignal::new(JobsState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(session);
    provide_context(jobs);
    provide_context(toasts);

    view! {
        <Title text="JobPortal"/>

        <Router>
            <Navbar/>
            <ToastHost/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("jobs") view=JobsPage/>
                </Routes>
            </main>
        </Router>
    }
}
