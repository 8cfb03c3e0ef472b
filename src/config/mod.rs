//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DECISION_RULES` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a usable configuration.
//!
//! # Example
//!
//! ```no_run
//! use decision_rules::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Default Hurwitz degree: {}", config.evaluation.hurwitz_degree);
//! ```

mod error;
mod evaluation;
mod features;
mod logging;
mod output;

pub use error::{ConfigError, ValidationError};
pub use evaluation::EvaluationConfig;
pub use features::FeatureFlags;
pub use logging::LoggingConfig;
pub use output::{OutputConfig, OutputFormat};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Rule evaluation defaults (Hurwitz degree, table lookup)
    #[serde(default)]
    pub evaluation: EvaluationConfig,

    /// Report output
    #[serde(default)]
    pub output: OutputConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,

    /// Log filtering and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DECISION_RULES` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DECISION_RULES__EVALUATION__HURWITZ_DEGREE=0.3` -> `evaluation.hurwitz_degree = 0.3`
    /// - `DECISION_RULES__FEATURES__INCLUDE_SAVAGE=true` -> `features.include_savage = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DECISION_RULES")
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
    /// Returns `ValidationError` if the Hurwitz degree is outside [0, 1] or
    /// the log filter is empty or malformed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.evaluation.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
