//! Transient notification queue.
//!
//! Pages push success/error toasts here; `ToastHost` renders the queue and
//! each toast dismisses itself after a few seconds.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// How long a toast stays on screen.
const TOAST_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A single notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Ordered queue of live notifications.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove the toast with the given id, if still present.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Push a toast and schedule its auto-dismissal.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let mut id = 0;
    toasts.update(|t| id = t.push(kind, message.into()));
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
        toasts.update(|t| t.dismiss(id));
    });
}

pub fn notify_success(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    notify(toasts, ToastKind::Success, message);
}

pub fn notify_error(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    let message = message.into();
    log::error!("{message}");
    notify(toasts, ToastKind::Error, message);
}
