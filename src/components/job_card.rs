//! Card for a single job posting with edit/delete actions.

use leptos::prelude::*;

use crate::net::types::Job;
use crate::util;

/// Preview length for the description text.
const DESCRIPTION_PREVIEW: usize = 150;

/// A job posting card: title, company, location, clipped description,
/// type chip and salary, plus edit/delete buttons.
#[component]
pub fn JobCard(
    job: Job,
    #[prop(into)] on_edit: Callback<Job>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let edit_target = job.clone();
    let delete_id = job.id.clone();

    view! {
        <article class="job-card">
            <div class="job-card__header">
                <h2 class="job-card__title">{job.title.clone()}</h2>
                <div class="job-card__actions">
                    <button
                        class="btn btn--icon"
                        title="Edit"
                        on:click=move |_| on_edit.run(edit_target.clone())
                    >
                        "Edit"
                    </button>
                    <button
                        class="btn btn--icon btn--danger"
                        title="Delete"
                        on:click=move |_| on_delete.run(delete_id.clone())
                    >
                        "Delete"
                    </button>
                </div>
            </div>
            <p class="job-card__company">{job.company.clone()}</p>
            <p class="job-card__location">{job.location.clone()}</p>
            <p class="job-card__description">
                {util::preview(&job.description, DESCRIPTION_PREVIEW)}
            </p>
            <div class="job-card__footer">
                <span class="chip">{job.job_type.clone()}</span>
                <span class="job-card__salary">{job.salary.clone()}</span>
            </div>
        </article>
    }
}
