//! Configuration management for the grain grader
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code (the national standard's threshold tables)
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. An explicit file passed on the command line
//! 4. Environment variable overrides with GRAIN_ prefix

use std::path::Path;

use config::{ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use shared::ThresholdTables;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Default tracing filter when RUST_LOG is not set
    pub log_filter: String,

    /// Emit logs as JSON lines instead of human readable text
    pub log_json: bool,

    /// Threshold tables used for every grading run
    #[serde(default)]
    pub tables: ThresholdTables,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let environment =
            std::env::var("GRAIN_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let mut builder = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("log_filter", "grain_grader=info")?
            .set_default("log_json", false)?
            // Standard tables, so partial overrides only replace what they name
            .add_source(config::Config::try_from(&TableDefaults::default())?)
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config = builder
            // Override with environment variables (GRAIN_ prefix)
            .add_source(
                Environment::with_prefix("GRAIN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[derive(Serialize, Default)]
struct TableDefaults {
    tables: ThresholdTables,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            log_filter: "grain_grader=info".to_string(),
            log_json: false,
            tables: ThresholdTables::default(),
        }
    }
}
