//! Application configuration management.

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Session configuration.
    #[serde(default)]
    pub session: SessionConfig,
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Root directory holding the JSON collection files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Subdirectory for receipt blobs (relative to `data_dir`).
    #[serde(default = "default_receipts_dir")]
    pub receipts_dir: String,
    /// Subdirectory for generated reports (relative to `data_dir`).
    #[serde(default = "default_reports_dir")]
    pub reports_dir: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_receipts_dir() -> String {
    "Receipts".to_string()
}

fn default_reports_dir() -> String {
    "Reports".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            receipts_dir: default_receipts_dir(),
            reports_dir: default_reports_dir(),
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Session token lifetime in days.
    #[serde(default = "default_session_ttl_days")]
    pub ttl_days: i64,
}

fn default_session_ttl_days() -> i64 {
    7
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_days: default_session_ttl_days(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("ORGLEDGER").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
