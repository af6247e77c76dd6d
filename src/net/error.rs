//! Typed failures for backend calls.
//!
//! Two kinds are distinguished: the server answered with a non-2xx status
//! (`Http`, carrying the status and a message), or no response arrived at
//! all (`Network`). Callers that only care about "it failed" can treat both
//! uniformly; callers that need the status ask for it.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure of a backend request.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server responded with a non-2xx status.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    /// HTTP status code, when the server did respond.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Network(_) => None,
        }
    }

    /// Build the error for a non-2xx response from its status and raw body.
    ///
    /// A body parseable as JSON with a `message` field supplies the message;
    /// anything else falls back to a generic text with the status.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            message: String,
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .map_or_else(|_| format!("HTTP error! status: {status}"), |b| b.message);
        Self::Http { status, message }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Network(err.to_string())
    }
}
