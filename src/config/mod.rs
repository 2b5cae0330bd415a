//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CYBER_PROFILER` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use cyber_profiler::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Minimum answers: {}", config.scoring.min_responses);
//! ```

mod ai;
mod error;
mod logging;
mod scoring;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use scoring::ScoringConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Scoring pipeline parameters and catalog source
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Optional narrative provider
    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CYBER_PROFILER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CYBER_PROFILER__SCORING__MIN_RESPONSES=12` -> `scoring.min_responses = 12`
    /// - `CYBER_PROFILER__SCORING__CATEGORY_WEIGHTS__WORK_STYLE=1.0` -> weight override
    /// - `CYBER_PROFILER__AI__OPENAI_API_KEY=...` -> enables the narrative provider
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
                    .prefix("CYBER_PROFILER")
                    .prefix_separator("__")
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
        self.scoring.validate()?;
        self.ai.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "CYBER_PROFILER__SCORING__MIN_RESPONSES",
        "CYBER_PROFILER__SCORING__BOOST_MAGNITUDE",
        "CYBER_PROFILER__SCORING__CATEGORY_WEIGHTS__WORK_STYLE",
        "CYBER_PROFILER__AI__OPENAI_API_KEY",
        "CYBER_PROFILER__LOGGING__JSON",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.scoring.min_responses, 10);
        assert!(!config.ai.is_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CYBER_PROFILER__SCORING__MIN_RESPONSES", "12");
        env::set_var("CYBER_PROFILER__SCORING__BOOST_MAGNITUDE", "10.5");
        env::set_var("CYBER_PROFILER__AI__OPENAI_API_KEY", "sk-test");
        env::set_var("CYBER_PROFILER__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.scoring.min_responses, 12);
        assert_eq!(config.scoring.boost_magnitude, 10.5);
        assert!(config.ai.is_enabled());
        assert!(config.logging.json);
    }

    #[test]
    fn test_category_weight_override_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CYBER_PROFILER__SCORING__CATEGORY_WEIGHTS__WORK_STYLE", "2.5");
        let result = AppConfig::load();
        clear_env();

        let params = result.unwrap().scoring.parameters();
        assert_eq!(
            params.category_weights.weight(crate::domain::catalog::Category::WorkStyle),
            2.5
        );
    }

    #[test]
    fn test_validate_rejects_bad_section() {
        let mut config = AppConfig::default();
        config.scoring.pattern_threshold = -0.1;
        assert!(config.validate().is_err());
    }
}
