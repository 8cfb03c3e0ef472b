//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Hurwitz degree must be within [0, 1], got {0}")]
    InvalidHurwitzDegree(f64),

    #[error("Log filter must not be empty")]
    EmptyLogFilter,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
