//! services/api/src/config.rs
//!
//! Defines the service configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    /// How long a transient alert banner stays up.
    pub alert_ttl: Duration,
    /// Browser origin allowed to call the API (the renderer's dev server).
    pub allowed_origin: String,
    /// Argon2 PHC string. When set, logins must match this password.
    pub password_hash: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 3000)),
            log_level: Level::INFO,
            alert_ttl: media_monitor_core::DEFAULT_ALERT_TTL,
            allowed_origin: "http://localhost:3000".to_string(),
            password_hash: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_vars(std::env::vars().collect())
    }

    /// Builds a configuration from an explicit variable map.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let defaults = Config::default();
        let var = |name: &str| lookup(&vars, name);

        // --- Server Settings ---
        let bind_address = match var("BIND_ADDRESS") {
            Some(raw) => raw.parse::<SocketAddr>().map_err(|e| {
                ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string())
            })?,
            None => defaults.bind_address,
        };

        let log_level = match var("RUST_LOG") {
            Some(raw) => raw.parse::<Level>().map_err(|_| {
                ConfigError::InvalidValue(
                    "RUST_LOG".to_string(),
                    format!("'{}' is not a valid log level", raw),
                )
            })?,
            None => defaults.log_level,
        };

        let allowed_origin = var("ALLOWED_ORIGIN")
            .map(str::to_string)
            .unwrap_or(defaults.allowed_origin);

        // --- Dashboard Behaviour ---
        let alert_ttl = match var("ALERT_DISMISS_MS") {
            Some(raw) => {
                let millis = raw.parse::<u64>().map_err(|e| {
                    ConfigError::InvalidValue("ALERT_DISMISS_MS".to_string(), e.to_string())
                })?;
                if millis == 0 {
                    return Err(ConfigError::InvalidValue(
                        "ALERT_DISMISS_MS".to_string(),
                        "must be greater than zero".to_string(),
                    ));
                }
                Duration::from_millis(millis)
            }
            None => defaults.alert_ttl,
        };

        // --- Credential Verification (optional) ---
        let password_hash = var("DASHBOARD_PASSWORD_HASH").map(str::to_string);

        Ok(Self {
            bind_address,
            log_level,
            alert_ttl,
            allowed_origin,
            password_hash,
        })
    }
}

/// Returns the trimmed value of `name`, treating blank values as unset.
fn lookup<'a>(vars: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    vars.get(name).map(|v| v.trim()).filter(|v| !v.is_empty())
}
