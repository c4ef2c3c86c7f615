//! Data services consumed by pages.
//!
//! ARCHITECTURE
//! ============
//! `catalog` wraps the network source with the caching policy; `cache` is the
//! generic TTL store it relies on.

pub mod cache;
pub mod catalog;

pub use catalog::{CatalogConfig, CatalogService};
