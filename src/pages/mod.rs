//! Route views.

pub mod dashboard;
pub mod home;
pub mod jobs;
pub mod login;
pub mod register;
