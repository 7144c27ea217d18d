//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `NAMESMITH` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use namesmith::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod error;
mod probe;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use probe::ProbeConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Completion service configuration
    #[serde(default)]
    pub ai: AiConfig,

    /// Domain probe configuration
    #[serde(default)]
    pub probe: ProbeConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present, then reads environment variables with
    /// the `NAMESMITH` prefix, `__` separating nested values:
    ///
    /// - `NAMESMITH__AI__API_KEY=sk-...` -> `ai.api_key`
    /// - `NAMESMITH__PROBE__TIMEOUT_SECS=3` -> `probe.timeout_secs`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("NAMESMITH")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.probe.validate()?;
        Ok(())
    }
}
