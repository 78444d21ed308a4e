//! Configuration loading with hierarchical merging.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid max_recursion_depth: {0}. Must be between 1 and 64")]
    InvalidRecursionDepth(u32),

    #[error("Invalid max_stall_retries: {0}. Cannot be 0")]
    InvalidStallRetries(u32),

    #[error("Invalid run_timeout_secs: {0}. Cannot be 0")]
    InvalidRunTimeout(u64),

    #[error("Invalid stall_delay_ms: {0}. Cannot be 0")]
    InvalidStallDelay(u64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidLogRotation(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .quillboard/config.yaml (project config)
    /// 3. .quillboard/local.yaml (project local overrides, optional)
    /// 4. Environment variables (QUILLBOARD_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".quillboard/config.yaml"))
            .merge(Yaml::file(".quillboard/local.yaml"))
            .merge(Env::prefixed("QUILLBOARD_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let executor = &config.executor;
        if executor.max_recursion_depth == 0 || executor.max_recursion_depth > 64 {
            return Err(ConfigError::InvalidRecursionDepth(
                executor.max_recursion_depth,
            ));
        }
        if executor.max_stall_retries == 0 {
            return Err(ConfigError::InvalidStallRetries(executor.max_stall_retries));
        }
        if executor.run_timeout_secs == 0 {
            return Err(ConfigError::InvalidRunTimeout(executor.run_timeout_secs));
        }
        if executor.stall_delay_ms == 0 {
            return Err(ConfigError::InvalidStallDelay(executor.stall_delay_ms));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidLogRotation(
                config.logging.rotation.clone(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(ConfigLoader::validate(&config).is_ok());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "executor:\n  run_timeout_secs: 120\n  stall_delay_ms: 50\nlogging:\n  level: debug"
        )
        .unwrap();

        let config = ConfigLoader::load_from_file(file.path()).unwrap();
        assert_eq!(config.executor.run_timeout_secs, 120);
        assert_eq!(config.executor.stall_delay_ms, 50);
        assert_eq!(config.logging.level, "debug");
        // Unset fields keep their defaults.
        assert_eq!(config.executor.max_recursion_depth, 10);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "executor:\n  max_stall_retries: 0").unwrap();
        assert!(ConfigLoader::load_from_file(file.path()).is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "logging:\n  level: loud").unwrap();
        assert!(ConfigLoader::load_from_file(file.path()).is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "logging:\n  format: xml").unwrap();
        assert!(ConfigLoader::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_env_overrides() {
        temp_env::with_var("QUILLBOARD_EXECUTOR__RUN_TIMEOUT_SECS", Some("42"), || {
            let config = ConfigLoader::load().unwrap();
            assert_eq!(config.executor.run_timeout_secs, 42);
        });
    }
}
