//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped fetching and delegates rendering details
//! to `components`. Pages read the `CatalogService` from context.
//!
//! ERROR HANDLING
//! ==============
//! Listings that block the response head report failures through
//! `FailedRender`, which turns the whole response into a 500. Streamed
//! listings can only log, since the status has already been sent.

pub mod about;
pub mod course;
pub mod home;
pub mod user;

use crate::net::error::ApiError;

/// Failure hook for a listing that resolves before the response head is sent.
#[derive(Clone)]
pub(crate) struct FailedRender {
    #[cfg(feature = "ssr")]
    response: Option<leptos_axum::ResponseOptions>,
}

impl FailedRender {
    /// Capture the current request's response options, if any.
    pub(crate) fn from_context() -> Self {
        Self {
            #[cfg(feature = "ssr")]
            response: leptos::prelude::use_context::<leptos_axum::ResponseOptions>(),
        }
    }

    /// Log `err` and mark the response as a server error.
    pub(crate) fn report(&self, listing: &'static str, err: &ApiError) {
        tracing::error!(
            listing,
            code = err.error_code(),
            upstream_status = ?err.status(),
            error = %err,
            "blocking listing failed, failing render"
        );
        #[cfg(feature = "ssr")]
        if let Some(response) = &self.response {
            response.set_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
