//! Job manager: the full create/edit/delete flow over the postings list.

use leptos::prelude::*;

use crate::components::job_card::JobCard;
use crate::components::job_form_dialog::JobFormDialog;
use crate::components::require_auth::RequireAuth;
use crate::net::types::{Job, JobDraft, JobUpdate};
use crate::state::jobs::{self, JobsState};
use crate::state::toast::{self, ToastState};
use crate::util;

/// Guarded job management route.
#[component]
pub fn JobsPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <JobsContent/>
        </RequireAuth>
    }
}

#[component]
fn JobsContent() -> impl IntoView {
    let jobs = expect_context::<RwSignal<JobsState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    jobs.set(JobsState::fetching());
    leptos::task::spawn_local(async move {
        if let Err(err) = jobs::load_jobs(jobs).await {
            toast::notify_error(toasts, format!("Failed to fetch jobs: {err}"));
        }
    });

    // Dialog state: the draft lives only while the dialog is open.
    let dialog_open = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<String>);
    let draft = RwSignal::new(JobDraft::default());
    let submitting = RwSignal::new(false);

    let open_create = move |_| {
        draft.set(JobDraft::default());
        editing_id.set(None);
        dialog_open.set(true);
    };

    let open_edit = Callback::new(move |job: Job| {
        draft.set(JobDraft::from_job(&job));
        editing_id.set(Some(job.id));
        dialog_open.set(true);
    });

    let close_dialog = Callback::new(move |()| {
        dialog_open.set(false);
        draft.set(JobDraft::default());
        editing_id.set(None);
    });

    let on_submit = Callback::new(move |()| {
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);

        leptos::task::spawn_local(async move {
            let current = draft.get_untracked();
            let action = if editing_id.get_untracked().is_some() { "update" } else { "create" };
            let result = match editing_id.get_untracked() {
                Some(id) => jobs::update_job(jobs, &id, &JobUpdate::from_draft(&current)).await,
                None => jobs::create_job(jobs, &current).await,
            };
            match result {
                Ok(()) => {
                    toast::notify_success(toasts, format!("Job {action}d successfully!"));
                    dialog_open.set(false);
                    draft.set(JobDraft::default());
                    editing_id.set(None);
                }
                Err(err) => {
                    log::error!("{action} failed: {err}");
                    toast::notify_error(toasts, format!("Failed to {action} job"));
                }
            }
            submitting.set(false);
        });
    });

    let on_delete = Callback::new(move |id: String| {
        if !util::confirm("Are you sure you want to delete this job?") {
            return;
        }
        leptos::task::spawn_local(async move {
            match jobs::delete_job(jobs, &id).await {
                Ok(()) => toast::notify_success(toasts, "Job deleted successfully!"),
                Err(err) => {
                    toast::notify_error(toasts, format!("Failed to delete job: {err}"));
                }
            }
        });
    });

    view! {
        <div class="jobs-page">
            <header class="jobs-page__header">
                <h1>"Job Management"</h1>
                <div class="jobs-page__actions">
                    <a class="btn" href="/dashboard">
                        "Back"
                    </a>
                    <button class="btn btn--primary" on:click=open_create>
                        "Post New Job"
                    </button>
                </div>
            </header>

            <Show
                when=move || !jobs.get().loading
                fallback=|| view! { <div class="spinner" aria-label="Loading"></div> }
            >
                <Show
                    when=move || !jobs.get().items.is_empty()
                    fallback=move || {
                        view! {
                            <div class="empty-state">
                                <h2>"No jobs posted yet"</h2>
                                <p>"Start by creating your first job posting"</p>
                                <button class="btn btn--primary" on:click=open_create>
                                    "Post Your First Job"
                                </button>
                            </div>
                        }
                    }
                >
                    <div class="jobs-page__grid">
                        <For
                            each=move || jobs.get().items.clone()
                            key=|job| job.id.clone()
                            let:job
                        >
                            <JobCard job=job on_edit=open_edit on_delete=on_delete/>
                        </For>
                    </div>
                </Show>
            </Show>

            <Show when=move || dialog_open.get()>
                <JobFormDialog
                    draft=draft
                    submitting=submitting
                    editing=Signal::derive(move || editing_id.get().is_some())
                    on_submit=on_submit
                    on_cancel=close_dialog
                />
            </Show>
        </div>
    }
}
