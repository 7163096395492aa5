//! Configuration management for the `skypanel` widget server
//!
//! Handles loading configuration from a TOML file and environment
//! variables, and provides validation for all settings.

use anyhow::{Context, Result, bail};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the widget server
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SkypanelConfig {
    /// Remote lookup services
    #[serde(default)]
    pub services: ServicesConfig,
    /// Web delivery settings
    #[serde(default)]
    pub web: WebConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Endpoints and client settings for the two lookup services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    /// Base URL of the geocoding search endpoint
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,
    /// Base URL of the forecast endpoint
    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,
    /// Request timeout in seconds, applied to both services
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
}

/// Web server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    /// Port to bind on all interfaces
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding the host page's static assets
    #[serde(default = "default_frontend_dir")]
    pub frontend_dir: String,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_geocoding_url() -> String {
    "https://geocoding-api.open-meteo.com/v1/search".to_string()
}

fn default_forecast_url() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}

fn default_timeout_seconds() -> u32 {
    30
}

fn default_port() -> u16 {
    8080
}

fn default_frontend_dir() -> String {
    "frontend/dist".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            geocoding_url: default_geocoding_url(),
            forecast_url: default_forecast_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            frontend_dir: default_frontend_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl SkypanelConfig {
    /// Load configuration from `config.toml` (if present) and environment
    /// variables with the `SKYPANEL_` prefix
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from the given path instead of the default one
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| PathBuf::from("config.toml"));
        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix("SKYPANEL")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: SkypanelConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        for url in [&self.services.geocoding_url, &self.services.forecast_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                bail!("Service URL must be a valid HTTP or HTTPS URL, got '{url}'");
            }
        }

        if self.services.timeout_seconds == 0 || self.services.timeout_seconds > 300 {
            bail!(
                "Request timeout must be between 1 and 300 seconds, got {}",
                self.services.timeout_seconds
            );
        }

        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            );
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            );
        }

        Ok(())
    }
}
