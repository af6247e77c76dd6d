//! Reusable view components.

pub mod job_card;
pub mod job_form_dialog;
pub mod navbar;
pub mod require_auth;
pub mod toast_host;
