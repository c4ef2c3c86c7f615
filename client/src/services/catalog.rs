//! Catalog fetch service used by the pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Built once at start-up and handed to the Leptos render through context.
//! Courses are fetched fresh on every call. Users go through a TTL cache keyed
//! by the endpoint path, since the listing takes no parameters.

use std::sync::Arc;
use std::time::Duration;

use crate::net::api::{CatalogSource, MockApiClient, USER_PATH};
use crate::net::error::ApiError;
use crate::net::types::{Course, User};

use super::cache::{Clock, SystemClock, TtlCache};

pub const DEFAULT_API_BASE_URL: &str = "https://690da16aa6d92d83e8525a6e.mockapi.io";
pub const DEFAULT_USER_CACHE_TTL_SECS: u64 = 60;

/// Settings needed to build a [`CatalogService`] against the live API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// API origin, without trailing slash.
    pub base_url: String,
    /// How long a successful user listing is reused.
    pub user_cache_ttl: Duration,
    /// Per-request timeout; `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_owned(),
            user_cache_ttl: Duration::from_secs(DEFAULT_USER_CACHE_TTL_SECS),
            request_timeout: None,
        }
    }
}

/// Explicitly constructed catalog service. Cheap to clone; clones share the
/// source and the user cache.
#[derive(Clone)]
pub struct CatalogService {
    source: Arc<dyn CatalogSource>,
    users: Arc<TtlCache<&'static str, Vec<User>>>,
}

impl CatalogService {
    /// Service over `source` with a wall-clock user cache.
    #[must_use]
    pub fn new(source: Arc<dyn CatalogSource>, user_cache_ttl: Duration) -> Self {
        Self::with_clock(source, user_cache_ttl, Arc::new(SystemClock))
    }

    /// Service over `source` whose cache reads time from `clock`.
    #[must_use]
    pub fn with_clock(source: Arc<dyn CatalogSource>, user_cache_ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self { source, users: Arc::new(TtlCache::new(user_cache_ttl, clock)) }
    }

    /// Service backed by [`MockApiClient`] as described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ClientBuild`] if the HTTP client cannot be built.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, ApiError> {
        let client = MockApiClient::new(&config.base_url, config.request_timeout)?;
        Ok(Self::new(Arc::new(client), config.user_cache_ttl))
    }

    /// Every course, straight from the API. One request per call.
    ///
    /// # Errors
    ///
    /// Propagates the source's [`ApiError`] unchanged.
    pub async fn get_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.source.list_courses().await
    }

    /// Every user, served from the cache while it is fresh.
    ///
    /// # Errors
    ///
    /// Propagates the source's [`ApiError`] on a miss. The previous cache
    /// entry is left as it was.
    pub async fn get_users(&self) -> Result<Vec<User>, ApiError> {
        let source = Arc::clone(&self.source);
        self.users
            .get_or_try_fetch(USER_PATH, || async move { source.list_users().await })
            .await
    }

    /// Every user, bypassing the cache. One request per call.
    ///
    /// # Errors
    ///
    /// Propagates the source's [`ApiError`] unchanged.
    pub async fn get_users_fresh(&self) -> Result<Vec<User>, ApiError> {
        self.source.list_users().await
    }

    /// Configured user cache TTL.
    #[must_use]
    pub fn user_cache_ttl(&self) -> Duration {
        self.users.ttl()
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;
