//! Run configuration
//!
//! Accepts either snake_case keys or the legacy spelling used by older
//! region files:
//!
//! ```yaml
//! Region Layout: region1.csv
//! Time Limit: 20
//! Refresh Rate: 1
//! ```
//!
//! Legacy lines may also omit the space after the colon (`Time Limit:20`).

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

fn default_time_limit() -> u64 {
    20
}

fn default_refresh_rate() -> u64 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(alias = "Region Layout")]
    pub region_layout: PathBuf,
    #[serde(alias = "Time Limit", default = "default_time_limit")]
    pub time_limit: u64,
    #[serde(alias = "Refresh Rate", default = "default_refresh_rate")]
    pub refresh_rate: u64,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

const LEGACY_KEYS: [&str; 3] = ["Region Layout", "Time Limit", "Refresh Rate"];

/// Rewrites legacy `Key:value` lines as `Key: value` with every space dropped
/// from the value, so `Region Layout:region1.csv` parses as a mapping entry.
fn normalize_legacy(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        match line.split_once(':') {
            Some((key, value)) if LEGACY_KEYS.contains(&key.trim()) => {
                let value: String = value.chars().filter(|c| *c != ' ').collect();
                out.push_str(key.trim());
                out.push_str(": ");
                out.push_str(value.trim());
            }
            _ => out.push_str(line),
        }
        out.push('\n');
    }
    out
}

impl SimulationConfig {
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: SimulationConfig = serde_yaml::from_str(&normalize_legacy(text))
            .context("Failed to parse simulation config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.refresh_rate == 0 {
            bail!("refresh rate must be at least 1");
        }
        if self.region_layout.as_os_str().is_empty() {
            bail!("region layout path must not be empty");
        }
        Ok(())
    }
}

pub struct ConfigLoader {
    base_dir: PathBuf,
}

impl ConfigLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Loads the config and resolves the layout path against the config's directory.
    pub fn load(&self, file: impl AsRef<Path>) -> Result<SimulationConfig> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = SimulationConfig::from_yaml(&data)
            .with_context(|| format!("Failed to load {}", path.display()))?;
        if config.region_layout.is_relative() {
            let dir = path.parent().unwrap_or_else(|| Path::new(""));
            config.region_layout = dir.join(&config.region_layout);
        }
        Ok(config)
    }
}
