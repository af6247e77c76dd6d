//! Dashboard: greeting, posting count, and an expandable list of postings.

use leptos::prelude::*;

use crate::components::require_auth::RequireAuth;
use crate::state::jobs::{self, JobsState};
use crate::state::session::Session;
use crate::state::toast::{self, ToastState};
use crate::util;

/// Guarded dashboard route.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <DashboardContent/>
        </RequireAuth>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let jobs = expect_context::<RwSignal<JobsState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    // Fetch on mount; the list itself is the reconciliation authority.
    jobs.set(JobsState::fetching());
    leptos::task::spawn_local(async move {
        if let Err(err) = jobs::load_jobs(jobs).await {
            toast::notify_error(toasts, format!("Failed to load jobs: {err}"));
        }
    });

    let greeting = move || {
        session
            .get()
            .user
            .map(|u| format!("Welcome back, {}!", u.name))
            .unwrap_or_default()
    };
    let job_count = move || jobs.get().items.len();

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{greeting}</h1>
                <p class="dashboard-page__subtitle">
                    "Manage your job postings and track your hiring progress"
                </p>
            </header>

            <section class="stat-card">
                <span class="stat-card__count">{job_count}</span>
                <span class="stat-card__label">"Total Jobs Posted"</span>
                <a class="btn btn--primary" href="/jobs">
                    "Manage Jobs"
                </a>
            </section>

            <section class="dashboard-page__postings">
                <h2>"Your Job Postings"</h2>
                <Show
                    when=move || !jobs.get().loading
                    fallback=|| view! { <div class="spinner" aria-label="Loading"></div> }
                >
                    <Show
                        when=move || !jobs.get().items.is_empty()
                        fallback=|| {
                            view! {
                                <div class="empty-state">
                                    <p>"No jobs posted yet"</p>
                                    <a class="btn btn--primary" href="/jobs">
                                        "Create Your First Job"
                                    </a>
                                </div>
                            }
                        }
                    >
                        <For
                            each=move || jobs.get().items.clone()
                            key=|job| job.id.clone()
                            let:job
                        >
                            {
                                let delete_id = job.id.clone();
                                let on_delete = move |_| {
                                    if !util::confirm("Are you sure you want to delete this job?") {
                                        return;
                                    }
                                    let id = delete_id.clone();
                                    leptos::task::spawn_local(async move {
                                        match jobs::delete_job(jobs, &id).await {
                                            Ok(()) => {
                                                toast::notify_success(toasts, "Job deleted successfully");
                                            }
                                            Err(err) => {
                                                toast::notify_error(
                                                    toasts,
                                                    format!("Failed to delete job: {err}"),
                                                );
                                            }
                                        }
                                    });
                                };
                                view! {
                                    <details class="posting">
                                        <summary class="posting__summary">{job.title.clone()}</summary>
                                        <div class="posting__body">
                                            <div class="posting__meta">
                                                <span class="chip">{job.job_type.clone()}</span>
                                                <span class="posting__salary">{job.salary.clone()}</span>
                                            </div>
                                            <p class="posting__origin">
                                                {format!("{} • {}", job.company, job.location)}
                                            </p>
                                            <p>{job.description.clone()}</p>
                                            <button class="btn btn--danger" on:click=on_delete>
                                                "Delete"
                                            </button>
                                        </div>
                                    </details>
                                }
                            }
                        </For>
                    </Show>
                </Show>
            </section>
        </div>
    }
}
