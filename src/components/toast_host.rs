//! Renders the transient notification queue.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Fixed-position stack of live toasts. Clicking a toast dismisses it
/// early; otherwise each one expires on its own timer.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.get().toasts().to_vec()
                key=|toast| toast.id
                let:toast
            >
                {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class on:click=move |_| toasts.update(|t| t.dismiss(id))>
                            {toast.message.clone()}
                        </div>
                    }
                }
            </For>
        </div>
    }
}
