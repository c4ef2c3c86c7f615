use std::collections::HashMap;

use super::*;

fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_nothing_set() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.catalog, CatalogConfig::default());
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn overrides_are_applied() {
    let cfg = config_from(&[
        ("PORT", "8080"),
        ("CATALOG_API_BASE_URL", "http://localhost:9000/"),
        ("USER_CACHE_TTL_SECS", "5"),
        ("CATALOG_REQUEST_TIMEOUT_SECS", "2"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.catalog.base_url, "http://localhost:9000");
    assert_eq!(cfg.catalog.user_cache_ttl, Duration::from_secs(5));
    assert_eq!(cfg.catalog.request_timeout, Some(Duration::from_secs(2)));
}

#[test]
fn malformed_numbers_fall_back_to_defaults() {
    let cfg = config_from(&[
        ("PORT", "eighty"),
        ("USER_CACHE_TTL_SECS", "-1"),
        ("CATALOG_REQUEST_TIMEOUT_SECS", "soon"),
    ])
    .unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.catalog.user_cache_ttl, Duration::from_secs(DEFAULT_USER_CACHE_TTL_SECS));
    assert_eq!(cfg.catalog.request_timeout, None);
}

#[test]
fn zero_timeout_disables_it() {
    let cfg = config_from(&[("CATALOG_REQUEST_TIMEOUT_SECS", "0")]).unwrap();
    assert_eq!(cfg.catalog.request_timeout, None);
}

#[test]
fn zero_ttl_is_kept() {
    let cfg = config_from(&[("USER_CACHE_TTL_SECS", "0")]).unwrap();
    assert_eq!(cfg.catalog.user_cache_ttl, Duration::ZERO);
}

#[test]
fn non_http_base_url_is_rejected() {
    for raw in ["ftp://example.test", "example.test", "https://", ""] {
        assert_eq!(config_from(&[("CATALOG_API_BASE_URL", raw)]), Err(ConfigError::InvalidBaseUrl(raw.to_owned())));
    }
}
