use std::collections::HashMap;

use pretty_assertions::assert_eq;
use registrar_api::config::ApiConfig;
use tracing::Level;

fn config_from(pairs: &[(&str, &str)]) -> eyre::Result<ApiConfig> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ApiConfig::from_vars(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults_apply_when_only_database_url_is_set() {
    let config = config_from(&[("DATABASE_URL", "postgres://localhost/registrar")]).unwrap();

    assert_eq!(config.server_addr(), "0.0.0.0:3000");
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.request_timeout, 30);
    assert_eq!(config.db_max_connections, 5);
    assert!(config.cors_origins.is_none());
}

#[test]
fn test_database_url_is_required() {
    assert!(config_from(&[("API_PORT", "8080")]).is_err());
}

#[test]
fn test_explicit_values_are_used() {
    let config = config_from(&[
        ("DATABASE_URL", "postgres://db/registrar"),
        ("API_HOST", "127.0.0.1"),
        ("API_PORT", "8080"),
        ("LOG_LEVEL", "DEBUG"),
        ("API_CORS_ORIGINS", "http://localhost:5173, https://school.example,"),
        ("API_REQUEST_TIMEOUT_SECONDS", "5"),
        ("DB_MAX_CONNECTIONS", "20"),
    ])
    .unwrap();

    assert_eq!(config.server_addr(), "127.0.0.1:8080");
    assert_eq!(config.log_level, Level::DEBUG);
    assert_eq!(
        config.cors_origins,
        Some(vec![
            "http://localhost:5173".to_string(),
            "https://school.example".to_string()
        ])
    );
    assert_eq!(config.request_timeout, 5);
    assert_eq!(config.db_max_connections, 20);
}

#[test]
fn test_invalid_port_is_an_error() {
    let result = config_from(&[("DATABASE_URL", "postgres://db/registrar"), ("API_PORT", "http")]);
    assert!(result.is_err());
}
