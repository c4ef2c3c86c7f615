//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` carries the catalog service handed to every Leptos render plus
//! the `LeptosOptions` the SSR handlers extract through `FromRef`. Clone is
//! cheap; the service shares its source and cache across clones.

use axum::extract::FromRef;
use client::services::CatalogService;
use leptos::prelude::LeptosOptions;

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub leptos_options: LeptosOptions,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: CatalogService) -> Self {
        Self { catalog, leptos_options: LeptosOptions::builder().output_name("classroom").build() }
    }
}

impl FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}
