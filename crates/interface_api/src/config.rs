//! API configuration
//!
//! Values come from `API_`-prefixed environment variables (after `.env` is
//! loaded by the binary) and fall back to the defaults below. `DATABASE_URL`
//! is honoured when `API_DATABASE_URL` is not set.

use std::time::Duration;

use serde::Deserialize;

use core_kernel::{CoreError, Timezone};

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL
    pub database_url: String,
    /// Maximum size of the database pool
    pub max_db_connections: u32,
    /// Log level, used when `RUST_LOG` is unset
    pub log_level: String,
    pub log_format: LogFormat,
    /// Seconds between policy expiry scans
    pub expiry_check_interval_secs: u64,
    /// Timezone in which "today" is evaluated by the expiry scan
    pub timezone: Timezone,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "postgres://localhost/carins".to_string(),
            max_db_connections: 10,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            expiry_check_interval_secs: 3600,
            timezone: Timezone::default(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        let mut builder = config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("database_url", defaults.database_url)?
            .set_default("max_db_connections", i64::from(defaults.max_db_connections))?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", "pretty")?
            .set_default("expiry_check_interval_secs", defaults.expiry_check_interval_secs as i64)?
            .set_default("timezone", "UTC")?;

        if let Ok(url) = std::env::var("DATABASE_URL") {
            builder = builder.set_default("database_url", url)?;
        }

        builder
            .add_source(config::Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn expiry_check_interval(&self) -> Duration {
        Duration::from_secs(self.expiry_check_interval_secs)
    }

    /// Rejects values the server cannot run with
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.expiry_check_interval_secs == 0 {
            return Err(CoreError::configuration("expiry_check_interval_secs must be greater than zero"));
        }
        if self.max_db_connections == 0 {
            return Err(CoreError::configuration("max_db_connections must be greater than zero"));
        }
        if self.database_url.trim().is_empty() {
            return Err(CoreError::configuration("database_url must not be empty"));
        }
        Ok(())
    }
}
