//! Wire types for the job-board REST API.
//!
//! The backend stores jobs in Mongo style, so the wire names are `_id`,
//! `createdAt`, and `type`; Rust-side names are mapped with serde renames.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account owning the session. Replaced wholesale on login/register,
/// cleared on logout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Sign-in responses may omit the email.
    #[serde(default)]
    pub email: String,
}

/// Body of both `POST /sign_up` and `POST /sign_in`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// A job posting as stored by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub salary: String,
    #[serde(rename = "type")]
    pub job_type: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

/// Fields of the create/edit form. Scoped to the dialog; discarded on
/// submit success or cancel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JobDraft {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub salary: String,
    #[serde(rename = "type")]
    pub job_type: String,
}

impl Default for JobDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            company: String::new(),
            location: String::new(),
            description: String::new(),
            salary: String::new(),
            job_type: "Full-time".to_owned(),
        }
    }
}

impl JobDraft {
    /// Prefill the form from an existing posting, for editing.
    #[must_use]
    pub fn from_job(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            description: job.description.clone(),
            salary: job.salary.clone(),
            job_type: job.job_type.clone(),
        }
    }
}

/// Partial update for `PUT /jobs/:id`; absent fields are left off the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct JobUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
}

impl JobUpdate {
    /// Full update carrying every field of the form draft.
    #[must_use]
    pub fn from_draft(draft: &JobDraft) -> Self {
        Self {
            title: Some(draft.title.clone()),
            company: Some(draft.company.clone()),
            location: Some(draft.location.clone()),
            description: Some(draft.description.clone()),
            salary: Some(draft.salary.clone()),
            job_type: Some(draft.job_type.clone()),
        }
    }
}
