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
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Medium confidence threshold must not exceed the high threshold")]
    ThresholdOrder,

    #[error("Category weight for {0} must be a non-negative number")]
    InvalidCategoryWeight(String),

    #[error("Invalid AI request timeout")]
    InvalidTimeout,

    #[error("Invalid AI base URL")]
    InvalidBaseUrl,

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

impl ValidationError {
    pub(crate) fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), Self> {
        if value.is_finite() && (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(Self::OutOfRange {
                field,
                min,
                max,
                actual: value,
            })
        }
    }
}
