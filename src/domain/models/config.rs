//! Configuration models.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Main configuration structure for Quillboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Executor bounds (recursion ceiling, retry cap, timeout)
    #[serde(default)]
    pub executor: ExecutorConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            executor: ExecutorConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Bounds applied to one board execution session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ExecutorConfig {
    /// Ceiling on scheduling rounds driven by task progress. A safety valve
    /// against runaway self-scheduling, not a correctness mechanism.
    #[serde(default = "default_max_recursion_depth")]
    pub max_recursion_depth: u32,

    /// Cap on consecutive stall-recovery attempts before all remaining
    /// pending tasks are failed.
    #[serde(default = "default_max_stall_retries")]
    pub max_stall_retries: u32,

    /// Wall-clock bound on a whole run (seconds). On expiry every
    /// non-terminal task is failed and the executor disposes itself.
    #[serde(default = "default_run_timeout_secs")]
    pub run_timeout_secs: u64,

    /// How long a stall attempt sleeps before rescanning (milliseconds).
    #[serde(default = "default_stall_delay_ms")]
    pub stall_delay_ms: u64,
}

const fn default_max_recursion_depth() -> u32 {
    10
}

const fn default_max_stall_retries() -> u32 {
    10
}

const fn default_run_timeout_secs() -> u64 {
    600
}

const fn default_stall_delay_ms() -> u64 {
    500
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            max_recursion_depth: default_max_recursion_depth(),
            max_stall_retries: default_max_stall_retries(),
            run_timeout_secs: default_run_timeout_secs(),
            stall_delay_ms: default_stall_delay_ms(),
        }
    }
}

impl ExecutorConfig {
    /// Wall-clock run bound as a [`Duration`].
    pub fn run_timeout(&self) -> Duration {
        Duration::from_secs(self.run_timeout_secs)
    }

    /// Stall sleep as a [`Duration`].
    pub fn stall_delay(&self) -> Duration {
        Duration::from_millis(self.stall_delay_ms)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rotating file output; stdout-only when absent
    #[serde(default)]
    pub log_dir: Option<String>,

    /// File rotation policy: daily, hourly, or never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executor_defaults() {
        let config = ExecutorConfig::default();
        assert_eq!(config.max_recursion_depth, 10);
        assert_eq!(config.max_stall_retries, 10);
        assert_eq!(config.run_timeout(), Duration::from_secs(600));
        assert_eq!(config.stall_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_config_deserializes_from_partial_yaml() {
        let config: Config =
            serde_yaml::from_str("executor:\n  run_timeout_secs: 30\n").unwrap();
        assert_eq!(config.executor.run_timeout_secs, 30);
        // Unspecified fields keep their defaults.
        assert_eq!(config.executor.max_stall_retries, 10);
        assert_eq!(config.logging.level, "info");
    }
}
