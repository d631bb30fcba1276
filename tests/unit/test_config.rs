//! Unit tests for environment-driven configuration

use blog_writer_api::config::{ApiConfig, LogFormat};
use std::collections::HashMap;

fn load(vars: &[(&str, &str)]) -> anyhow::Result<ApiConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ApiConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = load(&[]).unwrap();
    assert_eq!(config, ApiConfig::default());
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    assert_eq!(config.log_level, "info");
    assert_eq!(config.log_format, LogFormat::Text);
    assert!(config.allowed_origins.is_empty());
}

#[test]
fn test_overrides() {
    let config = load(&[
        ("HOST", "127.0.0.1"),
        ("PORT", "9000"),
        ("RUST_LOG", "debug"),
        ("CORS_ALLOWED_ORIGINS", "http://a.test, ,http://b.test"),
    ])
    .unwrap();

    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9000");
    assert_eq!(config.log_level, "debug");
    assert_eq!(
        config.allowed_origins,
        vec!["http://a.test".to_string(), "http://b.test".to_string()]
    );
}

#[test]
fn test_invalid_port_is_an_error() {
    let err = load(&[("PORT", "eighty")]).unwrap_err();
    assert!(err.to_string().contains("Invalid PORT"));
    assert!(load(&[("PORT", "70000")]).is_err());
}

#[test]
fn test_invalid_host_is_an_error() {
    assert!(load(&[("HOST", "not a host")]).is_err());
}

#[test]
fn test_log_format() {
    assert_eq!(load(&[("LOG_FORMAT", "json")]).unwrap().log_format, LogFormat::Json);
    assert_eq!(load(&[("LOG_FORMAT", "JSON")]).unwrap().log_format, LogFormat::Json);
    assert_eq!(load(&[("LOG_FORMAT", "text")]).unwrap().log_format, LogFormat::Text);
    assert_eq!(load(&[("LOG_FORMAT", "")]).unwrap().log_format, LogFormat::Text);

    let err = load(&[("LOG_FORMAT", "yaml")]).unwrap_err();
    assert!(err.to_string().contains("Invalid LOG_FORMAT"));
}
