//! Modal dialog holding the create/edit job form.

use leptos::prelude::*;

use crate::net::types::JobDraft;

/// Options for the job type select; the first is the form default.
pub const JOB_TYPES: &[&str] = &["Full-time", "Part-time", "Contract", "Remote"];

/// Create/edit form over a [`JobDraft`] signal.
///
/// Required-field enforcement is left to the form controls. The draft is
/// owned by the page, which discards it on submit success or cancel; the
/// submit button stays disabled while a request is in flight.
#[component]
pub fn JobFormDialog(
    draft: RwSignal<JobDraft>,
    submitting: RwSignal<bool>,
    editing: Signal<bool>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || if editing.get() { "Edit Job" } else { "Post New Job" }}</h2>
                <form on:submit=submit>
                    <label class="dialog__label">
                        "Job Title"
                        <input
                            class="dialog__input"
                            type="text"
                            required
                            prop:value=move || draft.get().title
                            on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Company"
                        <input
                            class="dialog__input"
                            type="text"
                            required
                            prop:value=move || draft.get().company
                            on:input=move |ev| draft.update(|d| d.company = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Location"
                        <input
                            class="dialog__input"
                            type="text"
                            required
                            prop:value=move || draft.get().location
                            on:input=move |ev| draft.update(|d| d.location = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Salary"
                        <input
                            class="dialog__input"
                            type="text"
                            required
                            prop:value=move || draft.get().salary
                            on:input=move |ev| draft.update(|d| d.salary = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Job Type"
                        <select
                            class="dialog__input"
                            prop:value=move || draft.get().job_type
                            on:change=move |ev| draft.update(|d| d.job_type = event_target_value(&ev))
                        >
                            {JOB_TYPES
                                .iter()
                                .map(|t| view! { <option value=*t>{*t}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Job Description"
                        <textarea
                            class="dialog__input dialog__textarea"
                            rows="4"
                            required
                            prop:value=move || draft.get().description
                            on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                            {move || {
                                if submitting.get() {
                                    "Saving..."
                                } else if editing.get() {
                                    "Update Job"
                                } else {
                                    "Post Job"
                                }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
