//! Configuration management
//!
//! This module provides YAML-based configuration management with support for:
//! - Environment variable overrides
//! - Multiple configuration file locations
//! - Default values for all settings

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend API connection configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the Campus backend API, e.g. `https://api.campus.example/api/v1`
    pub base_url: String,
    /// Request timeout in seconds, applied uniformly to every call
    #[serde(default = "default_timeout", alias = "timeout")]
    pub timeout_secs: u64,
    /// Optional bearer token attached to every request
    #[serde(default)]
    pub auth_token: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
    Compact,
}

fn default_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000/api/v1".to_string(),
            timeout_secs: default_timeout(),
            auth_token: None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file (YAML)
    /// 3. Environment variables (prefixed with CAMPUS_)
    pub fn load() -> Result<Self> {
        // Try to load .env file if it exists
        let _ = dotenvy::dotenv();

        // Check for config path override from environment
        let config_path = std::env::var("CAMPUS_CONFIG")
            .map(PathBuf::from)
            .ok()
            .or_else(Self::find_config_file);

        let mut config = if let Some(ref path) = config_path {
            if path.exists() {
                eprintln!("[CONFIG] Loading configuration from: {:?}", path);
                let contents = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file: {:?}", path))?;
                serde_norway::from_str(&contents)
                    .with_context(|| format!("Failed to parse config file: {:?}", path))?
            } else {
                eprintln!(
                    "[CONFIG] Config file path exists but file not found: {:?}",
                    path
                );
                AppConfig::default()
            }
        } else {
            eprintln!("[CONFIG] No config file found, using defaults");
            AppConfig::default()
        };

        // Apply environment variable overrides
        config.apply_env_overrides();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Find the configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let paths = [
            // Current directory
            PathBuf::from("config.yaml"),
            PathBuf::from("config/config.yaml"),
            // System config directory
            PathBuf::from("/etc/campus-admin/config.yaml"),
            // User config directory
            dirs::config_dir()
                .map(|p| p.join("campus-admin/config.yaml"))
                .unwrap_or_default(),
        ];

        paths.into_iter().find(|p| p.exists())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("CAMPUS_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(timeout) = std::env::var("CAMPUS_API_TIMEOUT") {
            if let Ok(secs) = timeout.parse() {
                self.api.timeout_secs = secs;
            }
        }
        if let Ok(token) = std::env::var("CAMPUS_API_TOKEN") {
            self.api.auth_token = Some(token);
        }
        if let Ok(level) = std::env::var("RUST_LOG") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("CAMPUS_LOG_FORMAT") {
            self.logging.format = match format.to_lowercase().as_str() {
                "json" => LogFormat::Json,
                "compact" => LogFormat::Compact,
                _ => LogFormat::Pretty,
            };
        }
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if self.api.base_url.is_empty() {
            anyhow::bail!("api.base_url must not be empty");
        }
        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            anyhow::bail!(
                "api.base_url must start with http:// or https://, got: {}",
                self.api.base_url
            );
        }
        if self.api.timeout_secs == 0 {
            anyhow::bail!("api.timeout_secs must be greater than zero");
        }
        Ok(())
    }
}
