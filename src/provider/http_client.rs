//! HTTP client creation and configuration utilities

use crate::config::Config;
use crate::constants;
use crate::error::AppError;
use reqwest::{Client, Proxy};
use std::time::Duration;

/// Creates the shared HTTP client with an explicit request timeout,
/// connection pooling and the configured proxy, if any. The proxy value is
/// treated as opaque transport configuration.
pub fn create_http_client(config: &Config) -> Result<Client, AppError> {
    let mut builder = Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_seconds))
        .pool_max_idle_per_host(constants::HTTP_POOL_MAX_IDLE_PER_HOST);

    if let Some(proxy_url) = config.http_proxy.as_deref().filter(|p| !p.is_empty()) {
        builder = builder.proxy(Proxy::all(proxy_url)?);
    }

    Ok(builder.build()?)
}

/// Creates an HTTP client for testing with default settings
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client(&Config {
        api_domain: "http://localhost".to_string(),
        ..Config::default()
    })
    .expect("Failed to create test HTTP client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client_without_proxy() {
        let config = Config {
            api_domain: "https://api.example.com".to_string(),
            ..Config::default()
        };
        assert!(create_http_client(&config).is_ok());
    }

    #[test]
    fn test_create_client_with_proxy() {
        let config = Config {
            api_domain: "https://api.example.com".to_string(),
            http_proxy: Some("http://proxy.example.com:3128".to_string()),
            ..Config::default()
        };
        assert!(create_http_client(&config).is_ok());
    }

    #[test]
    fn test_create_client_with_invalid_proxy() {
        let config = Config {
            api_domain: "https://api.example.com".to_string(),
            http_proxy: Some("not a proxy url".to_string()),
            ..Config::default()
        };
        assert!(create_http_client(&config).is_err());
    }

    #[test]
    fn test_empty_proxy_means_direct_connection() {
        let config = Config {
            api_domain: "https://api.example.com".to_string(),
            http_proxy: Some(String::new()),
            ..Config::default()
        };
        assert!(create_http_client(&config).is_ok());
    }
}
