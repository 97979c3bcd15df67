use crate::constants;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Base domain of the stats provider API. Should include https:// prefix.
    pub api_domain: String,
    /// Optional HTTP(S) proxy for all provider requests. Treated as an opaque
    /// transport setting; empty or absent means a direct connection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_proxy: Option<String>,
    /// HTTP timeout in seconds for provider requests. Defaults to 30 seconds.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Pacing delay in seconds observed between consecutive provider requests.
    #[serde(default = "default_request_delay")]
    pub request_delay_seconds: u64,
    /// Destination file for the exported match document.
    #[serde(default = "default_output_file")]
    pub output_file: String,
    /// Path to the log file. If not specified, logs go to the default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_request_delay() -> u64 {
    constants::DEFAULT_REQUEST_DELAY_SECONDS
}

fn default_output_file() -> String {
    constants::DEFAULT_OUTPUT_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: String::new(),
            http_proxy: None,
            http_timeout_seconds: default_http_timeout(),
            request_delay_seconds: default_request_delay(),
            output_file: default_output_file(),
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `MATCHSNAP_API_DOMAIN` - Override API domain
    /// - `MATCHSNAP_HTTP_PROXY` - Override proxy URL
    /// - `MATCHSNAP_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    /// - `MATCHSNAP_REQUEST_DELAY` - Override pacing delay in seconds
    /// - `MATCHSNAP_OUTPUT_FILE` - Override export destination
    /// - `MATCHSNAP_LOG_FILE` - Override log file path
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies `MATCHSNAP_*` environment variable overrides in place.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_domain) = std::env::var("MATCHSNAP_API_DOMAIN") {
            self.api_domain = api_domain;
        }

        if let Ok(proxy) = std::env::var("MATCHSNAP_HTTP_PROXY") {
            self.http_proxy = if proxy.is_empty() { None } else { Some(proxy) };
        }

        if let Some(timeout) = std::env::var("MATCHSNAP_HTTP_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        if let Some(delay) = std::env::var("MATCHSNAP_REQUEST_DELAY")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.request_delay_seconds = delay;
        }

        if let Ok(output) = std::env::var("MATCHSNAP_OUTPUT_FILE") {
            self.output_file = output;
        }

        if let Ok(log_file_path) = std::env::var("MATCHSNAP_LOG_FILE") {
            self.log_file_path = Some(log_file_path);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        if self.api_domain.is_empty() {
            return Err(AppError::config_error(
                "API domain cannot be empty. Set it in the config file or MATCHSNAP_API_DOMAIN.",
            ));
        }

        if !self.api_domain.starts_with("http://") && !self.api_domain.starts_with("https://") {
            // If it doesn't start with a protocol, it should at least look like a domain
            if !self.api_domain.contains('.') && !self.api_domain.starts_with("localhost") {
                return Err(AppError::config_error(
                    "API domain must be a valid URL or domain name",
                ));
            }
        }

        if self.output_file.is_empty() {
            return Err(AppError::config_error("Output file cannot be empty"));
        }

        if let Some(log_path) = &self.log_file_path
            && log_path.is_empty()
        {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        Ok(())
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Saves current configuration to a specific path, creating parent
    /// directories as needed. Uses TOML format for storage.
    pub async fn save_to_path(&self, config_path: &str) -> Result<(), AppError> {
        if let Some(config_dir) = Path::new(config_path).parent()
            && !config_dir.exists()
        {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(config_path, content).await?;

        Ok(())
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        get_log_dir_path()
    }

    /// Prints the current configuration to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("API Domain: {}", config.api_domain);
            println!(
                "HTTP Proxy: {}",
                config.http_proxy.as_deref().unwrap_or("(none)")
            );
            println!("HTTP Timeout: {}s", config.http_timeout_seconds);
            println!("Request Delay: {}s", config.request_delay_seconds);
            println!("Output File: {}", config.output_file);
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }
}

/// Platform-specific config file path, falling back to the current directory
/// if no config directory is available.
fn get_config_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("matchsnap")
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Platform-specific log directory path.
fn get_log_dir_path() -> String {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("matchsnap")
        .join("logs")
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.api_domain.is_empty());
        assert_eq!(config.http_proxy, None);
        assert_eq!(
            config.http_timeout_seconds,
            constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
        assert_eq!(
            config.request_delay_seconds,
            constants::DEFAULT_REQUEST_DELAY_SECONDS
        );
        assert_eq!(config.output_file, constants::DEFAULT_OUTPUT_FILE);
    }

    #[test]
    fn test_validate_rejects_empty_api_domain() {
        let config = Config::default();
        let result = config.validate();
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_bogus_api_domain() {
        let config = Config {
            api_domain: "not-a-domain".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_localhost() {
        let config = Config {
            api_domain: "http://localhost:8080".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_output_file() {
        let config = Config {
            api_domain: "https://api.example.com".to_string(),
            output_file: String::new(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip_applies_defaults() {
        let toml_content = r#"api_domain = "https://api.example.com""#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.api_domain, "https://api.example.com");
        assert_eq!(config.http_proxy, None);
        assert_eq!(
            config.http_timeout_seconds,
            constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
        assert_eq!(
            config.request_delay_seconds,
            constants::DEFAULT_REQUEST_DELAY_SECONDS
        );
        assert_eq!(config.output_file, constants::DEFAULT_OUTPUT_FILE);

        let serialized = toml::to_string_pretty(&config).unwrap();
        let reparsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(reparsed.api_domain, config.api_domain);
        assert_eq!(reparsed.output_file, config.output_file);
    }

    #[tokio::test]
    async fn test_save_to_path_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir
            .path()
            .join("nested")
            .join("config.toml")
            .to_string_lossy()
            .to_string();

        let config = Config {
            api_domain: "https://api.example.com".to_string(),
            http_proxy: Some("http://proxy.example.com:3128".to_string()),
            ..Config::default()
        };
        config.save_to_path(&config_path).await.unwrap();

        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        let loaded: Config = toml::from_str(&content).unwrap();
        assert_eq!(loaded.api_domain, "https://api.example.com");
        assert_eq!(
            loaded.http_proxy.as_deref(),
            Some("http://proxy.example.com:3128")
        );
    }
}
