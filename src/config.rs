//! Server configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! `from_env` is a thin wrapper over `from_lookup`, which takes the variable
//! source as a function so parsing can be tested without touching the process
//! environment. Malformed numbers fall back to their defaults; a malformed
//! API base URL is rejected.

use std::time::Duration;

use client::services::CatalogConfig;
use client::services::catalog::{DEFAULT_API_BASE_URL, DEFAULT_USER_CACHE_TTL_SECS};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("CATALOG_API_BASE_URL must be an http(s) URL, got '{0}'")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub catalog: CatalogConfig,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CATALOG_API_BASE_URL`: default mock API origin
    /// - `USER_CACHE_TTL_SECS`: default 60
    /// - `CATALOG_REQUEST_TIMEOUT_SECS`: unset or 0 disables the timeout
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or(lookup("PORT").as_deref(), DEFAULT_PORT);
        let base_url = match lookup("CATALOG_API_BASE_URL") {
            Some(raw) => parse_base_url(&raw)?,
            None => DEFAULT_API_BASE_URL.to_owned(),
        };
        let ttl_secs = parse_or(lookup("USER_CACHE_TTL_SECS").as_deref(), DEFAULT_USER_CACHE_TTL_SECS);
        let request_timeout = parse_or(lookup("CATALOG_REQUEST_TIMEOUT_SECS").as_deref(), 0_u64);

        Ok(Self {
            port,
            catalog: CatalogConfig {
                base_url,
                user_cache_ttl: Duration::from_secs(ttl_secs),
                request_timeout: (request_timeout > 0).then(|| Duration::from_secs(request_timeout)),
            },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|v| v.trim().parse::<T>().ok()).unwrap_or(default)
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let url = raw.trim().trim_end_matches('/');
    let host = url.strip_prefix("https://").or_else(|| url.strip_prefix("http://"));
    match host {
        Some(host) if !host.is_empty() => Ok(url.to_owned()),
        _ => Err(ConfigError::InvalidBaseUrl(raw.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
