//! REST endpoint wrappers for the job-board backend.
//!
//! Auth endpoints return the token alongside the user; job endpoints
//! operate on the `/jobs` collection and all carry the bearer header
//! (attached by the `http` layer).

use serde_json::json;

use crate::net::error::ApiError;
use crate::net::http;
use crate::net::types::{AuthResponse, Job, JobDraft, JobUpdate};

/// `POST /sign_up`.
pub async fn sign_up(name: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    http::post_json(
        "/sign_up",
        &json!({ "name": name, "email": email, "password": password }),
    )
    .await
}

/// `POST /sign_in`.
pub async fn sign_in(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    http::post_json("/sign_in", &json!({ "email": email, "password": password })).await
}

/// `GET /jobs` — the full collection.
pub async fn fetch_jobs() -> Result<Vec<Job>, ApiError> {
    http::get_json("/jobs").await
}

/// `POST /jobs` — returns the backend-assigned entity.
pub async fn create_job(draft: &JobDraft) -> Result<Job, ApiError> {
    http::post_json("/jobs", draft).await
}

/// `PUT /jobs/:id` — partial update, returns the canonical entity.
pub async fn update_job(id: &str, changes: &JobUpdate) -> Result<Job, ApiError> {
    http::put_json(&format!("/jobs/{id}"), changes).await
}

/// `DELETE /jobs/:id`.
pub async fn delete_job(id: &str) -> Result<(), ApiError> {
    http::delete(&format!("/jobs/{id}")).await
}
