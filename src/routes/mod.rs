//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single Axum router serves the liveness probe and the four Leptos SSR
//! pages. Each render gets the shared `CatalogService` through Leptos context.
//! Requests are traced and responses gzip-compressed when the client accepts it.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use client::app::{App, shell};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState) -> Router {
    let routes = generate_route_list(App);
    let catalog = state.catalog.clone();

    let leptos_router = Router::new()
        .leptos_routes_with_context(&state, routes, move || provide_context(catalog.clone()), {
            let opts = state.leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(state);

    Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
