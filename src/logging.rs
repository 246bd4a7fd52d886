//! Tracing setup
//!
//! The terminal belongs to the UI, so log output goes to a file only:
//! `~/.payout-tui/logs/payout-tui.log`, or the system temp directory when
//! HOME is unset. `RUST_LOG` overrides the configured filter.

use crate::config::Config;
use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_NAME: &str = "payout-tui.log";

/// Path of the log file
pub fn log_file_path() -> PathBuf {
    Config::log_dir()
        .unwrap_or_else(|| std::env::temp_dir().join("payout-tui"))
        .join(LOG_FILE_NAME)
}

/// Resolve the filter directive: RUST_LOG first, then config
fn filter_directive(config: &Config) -> String {
    std::env::var("RUST_LOG")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| config.log_filter.clone())
}

/// Install the global tracing subscriber
pub fn initialize(config: &Config) -> anyhow::Result<PathBuf> {
    let log_file_path = log_file_path();
    if let Some(dir) = log_file_path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create log directory {}", dir.display()))?;
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)
        .with_context(|| format!("Cannot open log file {}", log_file_path.display()))?;

    let filter = EnvFilter::try_new(filter_directive(config))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false),
        )
        .try_init()
        .context("Tracing subscriber already installed")?;

    Ok(log_file_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_name() {
        assert!(log_file_path().ends_with(LOG_FILE_NAME));
    }

    #[test]
    fn test_filter_falls_back_to_config() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let config = Config {
            log_filter: "debug".to_string(),
            ..Config::default()
        };
        assert_eq!(filter_directive(&config), "debug");
    }
}
