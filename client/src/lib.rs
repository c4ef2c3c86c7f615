//! # client
//!
//! Leptos front-end for the course catalog. Server-rendered pages list courses
//! and users fetched from a mock REST API.
//!
//! This crate contains the record types, the HTTP catalog source, the
//! `CatalogService` with its TTL-cached user listing, list components, and the
//! route-level pages. The `classroom` binary mounts `app::App` on axum.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod services;
pub mod util;
