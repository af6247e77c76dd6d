//! Job list state and CRUD actions.
//!
//! ARCHITECTURE
//! ============
//! The local list is an advisory cache of the server's `/jobs` collection.
//! Create trusts the returned entity and prepends it; update and delete
//! always re-fetch the full list afterwards so the cache reflects server
//! truth (computed fields, cascades). On any failure the cache is left
//! exactly as it was and the error propagates to the calling page.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{Job, JobDraft, JobUpdate};

/// Local cache of the job collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobsState {
    pub items: Vec<Job>,
    /// True until the first fetch resolves.
    pub loading: bool,
}

impl JobsState {
    #[must_use]
    pub fn fetching() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
        }
    }

    /// Wholesale replacement from a fresh `GET /jobs`.
    pub fn replace_all(&mut self, jobs: Vec<Job>) {
        self.items = jobs;
        self.loading = false;
    }

    /// Prepend a newly created job. Any stale entry with the same id is
    /// dropped first, so the entity ends up in the cache exactly once,
    /// at the head.
    pub fn insert_created(&mut self, job: Job) {
        self.items.retain(|j| j.id != job.id);
        self.items.insert(0, job);
    }

    /// Replace the matching entry field-for-field with the server's
    /// canonical entity. Unknown ids are ignored.
    pub fn apply_updated(&mut self, job: Job) {
        if let Some(slot) = self.items.iter_mut().find(|j| j.id == job.id) {
            *slot = job;
        }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|j| j.id == id)
    }
}

/// Fetch the full collection and replace the cache.
pub async fn load_jobs(jobs: RwSignal<JobsState>) -> Result<(), ApiError> {
    let list = api::fetch_jobs().await?;
    log::debug!("fetched {} jobs", list.len());
    jobs.update(|s| s.replace_all(list));
    Ok(())
}

/// Create a posting; the backend-assigned entity is prepended optimistically.
pub async fn create_job(jobs: RwSignal<JobsState>, draft: &JobDraft) -> Result<(), ApiError> {
    let created = api::create_job(draft).await?;
    jobs.update(|s| s.insert_created(created));
    Ok(())
}

/// Update a posting, then re-fetch the full list to pick up any
/// server-side computed fields.
pub async fn update_job(
    jobs: RwSignal<JobsState>,
    id: &str,
    changes: &JobUpdate,
) -> Result<(), ApiError> {
    let updated = api::update_job(id, changes).await?;
    jobs.update(|s| s.apply_updated(updated));
    load_jobs(jobs).await
}

/// Delete a posting, then re-fetch rather than filtering locally; the
/// delete may have server-side effects the client cannot see.
pub async fn delete_job(jobs: RwSignal<JobsState>, id: &str) -> Result<(), ApiError> {
    api::delete_job(id).await?;
    load_jobs(jobs).await
}
