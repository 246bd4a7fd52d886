use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Event poll timeout, which is also the timer resolution
    pub tick_rate_ms: u64,
    /// Tracing filter used when RUST_LOG is unset
    pub log_filter: String,
    /// Directory the file path input starts from
    pub upload_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            log_filter: "info".to_string(),
            upload_dir: String::new(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".payout-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Directory for log files
    pub fn log_dir() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("logs"))
    }

    /// Load the user config
    ///
    /// Returns `Ok(None)` when no config file exists yet.
    pub fn load() -> anyhow::Result<Option<Config>> {
        let Some(config_path) = Self::config_path() else {
            return Ok(None);
        };
        if !config_path.exists() {
            return Ok(None);
        }
        Self::load_from(&config_path).map(Some)
    }

    /// Load from a specific file
    pub fn load_from(path: &Path) -> anyhow::Result<Config> {
        let contents = fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;
        self.save_to(&config_path)
    }

    /// Save to a specific file, creating its directory
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }

    /// Initial contents of the file path input
    ///
    /// A non-empty `upload_dir` is returned with a trailing separator so the
    /// user can type the file name directly.
    pub fn initial_upload_input(&self) -> String {
        if self.upload_dir.is_empty() {
            return String::new();
        }
        let sep = std::path::MAIN_SEPARATOR;
        if self.upload_dir.ends_with(sep) {
            self.upload_dir.clone()
        } else {
            format!("{}{}", self.upload_dir, sep)
        }
    }
}
