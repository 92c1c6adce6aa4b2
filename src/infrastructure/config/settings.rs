//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//!
//! # Example
//!
//! ```no_run
//! use polyfeed::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use url::Url;

use super::logging::LoggingConfig;
use crate::adapter::outbound::polymarket::settings::PolymarketConfig;
use crate::domain::EventSlug;
use crate::error::{ConfigError, Result};

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "POLYFEED_CONFIG";

/// Config file used when neither `--config` nor the environment names one.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Polymarket endpoints, events, and client settings.
    #[serde(default)]
    pub polymarket: PolymarketConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Initialize tracing from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Configured event slugs, failing when none are configured.
    #[allow(clippy::result_large_err)]
    pub fn require_events(&self) -> Result<Vec<EventSlug>> {
        if self.polymarket.events.is_empty() {
            return Err(ConfigError::MissingField { field: "events" }.into());
        }
        Ok(self.polymarket.slugs())
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are present and values are within
    /// acceptable ranges.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        let pm = &self.polymarket;
        validate_url("ws_url", &pm.ws_url, &["ws", "wss"])?;
        validate_url("gamma_url", &pm.gamma_url, &["http", "https"])?;
        validate_url("clob_url", &pm.clob_url, &["http", "https"])?;

        let mut seen = HashSet::new();
        for event in &pm.events {
            if event.slug.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "events",
                    reason: "slug must not be empty".to_string(),
                }
                .into());
            }
            if !seen.insert(event.slug.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "events",
                    reason: format!("duplicate slug '{}'", event.slug),
                }
                .into());
            }
        }

        if pm.http.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "http.timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if pm.stream.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "stream.connect_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if pm.stream.close_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "stream.close_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if pm.stream.resolve_concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                field: "stream.resolve_concurrency",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

#[allow(clippy::result_large_err)]
fn validate_url(field: &'static str, value: &str, schemes: &[&str]) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingField { field }.into());
    }
    let parsed = Url::parse(value).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })?;
    if !schemes.contains(&parsed.scheme()) {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!(
                "scheme must be one of {}, got '{}'",
                schemes.join("/"),
                parsed.scheme()
            ),
        }
        .into());
    }
    Ok(())
}
