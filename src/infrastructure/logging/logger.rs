//! Logger initialization built on `tracing`.

use anyhow::{anyhow, Result};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::domain::models::LoggingConfig;

/// Keeps the non-blocking file writer alive for the process lifetime.
///
/// Dropping the guard flushes and stops the background writer, so hold it
/// for as long as logging should run.
pub struct LogGuard {
    _guard: Option<WorkerGuard>,
}

/// Initialize the global tracing subscriber from configuration.
///
/// Stdout output uses the configured format; file output (when `log_dir` is
/// set) is always JSON for structured ingestion. Returns an error when a
/// global subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<LogGuard> {
    let default_level = parse_log_level(&config.level)?;
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let json_stdout = config.format == "json";

    if let Some(ref log_dir) = config.log_dir {
        let file_appender = match config.rotation.as_str() {
            "hourly" => rolling::hourly(log_dir, "quillboard.log"),
            "never" => rolling::never(log_dir, "quillboard.log"),
            _ => rolling::daily(log_dir, "quillboard.log"),
        };
        let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(non_blocking_file)
            .with_ansi(false)
            .with_target(true);

        if json_stdout {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(file_layer)
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()
                .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(file_layer)
                .with(tracing_subscriber::fmt::layer())
                .try_init()
                .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;
        }

        Ok(LogGuard {
            _guard: Some(guard),
        })
    } else {
        if json_stdout {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()
                .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .try_init()
                .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;
        }

        Ok(LogGuard { _guard: None })
    }
}

fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => Err(anyhow!("unknown log level: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
        assert_eq!(parse_log_level("WARN").unwrap(), Level::WARN);
        assert!(parse_log_level("loud").is_err());
    }
}
