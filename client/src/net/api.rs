//! HTTP access to the mock catalog API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `CatalogSource` is the seam between the fetch service and the network.
//! `MockApiClient` is the reqwest implementation used in production; tests
//! swap in stub sources. Each call issues exactly one GET, with no retry.
//!
//! ERROR HANDLING
//! ==============
//! Status, transport and parse failures are logged here, at the point of
//! failure, and returned unchanged as [`ApiError`]. Status and body parsing
//! are pure functions so they can be tested without a socket.

use std::time::Duration;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{Course, User};

/// Path of the course listing endpoint.
pub const COURSE_PATH: &str = "/api/v1/course";
/// Path of the user listing endpoint.
pub const USER_PATH: &str = "/api/v1/user";

/// Source of catalog listings.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every course.
    async fn list_courses(&self) -> Result<Vec<Course>, ApiError>;

    /// Fetch every user.
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;
}

// =============================================================================
// CLIENT
// =============================================================================

/// Reqwest-backed client for the mockapi.io catalog endpoints.
pub struct MockApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl MockApiClient {
    /// Build a client rooted at `base_url` (scheme + host, no path).
    ///
    /// `timeout` of `None` leaves requests unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ClientBuild`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    /// Base URL with any trailing slash removed.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let url = self.endpoint(path);
        let result = self.fetch_list(&url).await;
        match &result {
            Ok(items) => tracing::debug!(%url, count = items.len(), "catalog fetch succeeded"),
            Err(err) => tracing::error!(%url, code = err.error_code(), error = %err, "catalog fetch failed"),
        }
        result
    }

    async fn fetch_list<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, ApiError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        check_status(response.status().as_u16())?;

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        parse_list(&body)
    }
}

#[async_trait::async_trait]
impl CatalogSource for MockApiClient {
    async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.get_list(COURSE_PATH).await
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_list(USER_PATH).await
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// Reject any status outside `200..=299`.
fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Http { status })
    }
}

/// Decode a JSON array body.
fn parse_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;
