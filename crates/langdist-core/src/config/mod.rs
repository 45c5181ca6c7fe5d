//! Configuration management for a distance run.

mod sub_configs;


use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LangDistError, LangDistResult};

pub use sub_configs::{ComputeConfig, InputConfig, LoggingConfig, OutputConfig};

/// Environment variable prefix; nested keys use `__` (`LANGDIST__OUTPUT__DIR`).
pub const ENV_PREFIX: &str = "LANGDIST";

/// Top-level configuration.
///
/// # Example
///
/// ```
/// use langdist_core::config::LangDistConfig;
///
/// let config = LangDistConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.output.kl_file, "kl.txt");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LangDistConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub compute: ComputeConfig,
    pub logging: LoggingConfig,
}

impl LangDistConfig {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in order:
    /// 1. config/default.toml (base settings)
    /// 2. config/{LANGDIST_ENV}.toml (environment-specific)
    /// 3. Environment variables with LANGDIST__ prefix
    pub fn load() -> LangDistResult<Self> {
        let env = std::env::var("LANGDIST_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            );

        let config: LangDistConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> LangDistResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LangDistError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: LangDistConfig = toml::from_str(&content)
            .map_err(|e| LangDistError::ConfigError(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> LangDistResult<()> {
        self.input
            .validate()
            .and_then(|_| self.output.validate())
            .and_then(|_| self.logging.validate())
            .map_err(LangDistError::ConfigError)
    }
}
