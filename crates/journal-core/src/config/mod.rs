//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod identity;
pub mod intake;
pub mod logging;
pub mod store;

use serde::{Deserialize, Serialize};

use self::app::ServerConfig;
use self::identity::IdentityConfig;
use self::intake::IntakeConfig;
use self::logging::LoggingConfig;
use self::store::StoreConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Hosted data store and object storage settings.
    pub store: StoreConfig,
    /// Identity provider settings.
    pub identity: IdentityConfig,
    /// Submission intake limits.
    #[serde(default)]
    pub intake: IntakeConfig,
    /// Document text extraction settings.
    #[serde(default)]
    pub extraction: ExtractionConfig,
    /// Catalog search settings.
    #[serde(default)]
    pub search: SearchConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Document text extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Overall budget for a single extraction, fetch included, in seconds.
    #[serde(default = "default_extraction_timeout")]
    pub timeout_seconds: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_extraction_timeout(),
        }
    }
}

/// Catalog search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Debounce window between keystroke-driven queries, in milliseconds.
    #[serde(default = "default_debounce_millis")]
    pub debounce_millis: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_millis: default_debounce_millis(),
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `JOURNAL__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("JOURNAL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

fn default_extraction_timeout() -> u64 {
    30
}

fn default_debounce_millis() -> u64 {
    300
}
