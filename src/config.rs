//! API endpoint configuration.
//!
//! The backend base URL is baked in at compile time from the
//! `JOBPORTAL_API_URL` environment variable. When unset, requests go to
//! same-origin paths, which is what a reverse-proxied deployment wants.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend base URL, fixed at build time.
pub const API_BASE_URL: &str = match option_env!("JOBPORTAL_API_URL") {
    Some(url) => url,
    None => "",
};

/// Full URL for an API path such as `/jobs`.
#[must_use]
pub fn endpoint(path: &str) -> String {
    join(API_BASE_URL, path)
}

fn join(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}
