//! Error taxonomy for catalog fetches.
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged where they happen (see `api`) and then handed back to
//! the caller unchanged. Payloads are plain strings so the error can ride
//! through SSR resource serialization.

use serde::{Deserialize, Serialize};

/// Errors produced while fetching catalog data from the mock API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ApiError {
    /// The API answered with a non-success HTTP status.
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// The request never produced a response (DNS, connect, TLS, reset).
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not the expected JSON shape.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

impl ApiError {
    /// Stable machine-readable code, used as a structured log field.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Http { .. } => "E_HTTP_STATUS",
            Self::Network(_) => "E_NETWORK",
            Self::Parse(_) => "E_PARSE",
            Self::ClientBuild(_) => "E_CLIENT_BUILD",
        }
    }

    /// HTTP status carried by the error, if the server responded at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
