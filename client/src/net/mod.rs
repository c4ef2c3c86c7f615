//! Networking modules for the mock catalog REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the record schema, and
//! `error` the failure taxonomy shared with the services layer.

pub mod api;
pub mod error;
pub mod types;
