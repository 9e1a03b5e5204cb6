//! Monitoring parameters (TOML)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::Result;

/// Number of system samples kept for the charts
pub const HISTORY_LEN: usize = 60;
/// Trailing window of per-process CPU samples checked for anomalies
pub const ANOMALY_WINDOW: usize = 5;
/// CPU/memory percentage above which an alert is raised
pub const THRESHOLD_PERCENT: f32 = 80.0;

/// Delay between the end of one tick and the start of the next
pub const DEFAULT_UPDATE_INTERVAL_MS: u64 = 500;
/// CPU usage is only meaningful when refreshed at least this far apart.
pub const MIN_UPDATE_INTERVAL_MS: u64 = sysinfo::MINIMUM_CPU_UPDATE_INTERVAL.as_millis() as u64;
pub const MAX_UPDATE_INTERVAL_MS: u64 = 5_000;

/// Runtime-tunable part of the monitor. Buffer length, anomaly window and
/// threshold are fixed and live in the constants above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    pub update_interval_ms: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
        }
    }
}

impl MonitorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: MonitorConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn update_interval(&self) -> Duration {
        clamp_interval(self.update_interval_ms)
    }
}

pub fn clamp_interval(ms: u64) -> Duration {
    Duration::from_millis(ms.clamp(MIN_UPDATE_INTERVAL_MS, MAX_UPDATE_INTERVAL_MS))
}
