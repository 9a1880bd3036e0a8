use std::{env, path::PathBuf};

use healthfirst_core::appointments::DEFAULT_PAGE_SIZE;

/// Minutes between time picker options when nothing else is configured.
pub const DEFAULT_TIME_OPTION_INTERVAL: u32 = 15;

/// CLI configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Rows per appointment page (default: 10)
    pub page_size: usize,
    /// Schedule snapshot to load instead of the built-in sample
    pub schedule_path: Option<PathBuf>,
    /// Appointment list to load instead of the built-in sample
    pub appointments_path: Option<PathBuf>,
    /// Minutes between time picker options (default: 15)
    pub time_option_interval: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HEALTHFIRST_PAGE_SIZE` - Rows per appointment page (default: 10)
    /// - `HEALTHFIRST_SCHEDULE_PATH` - JSON schedule snapshot (default: built-in sample)
    /// - `HEALTHFIRST_APPOINTMENTS_PATH` - JSON appointment list (default: built-in sample)
    /// - `HEALTHFIRST_TIME_OPTION_INTERVAL` - Picker interval in minutes (default: 15)
    pub fn from_env() -> Self {
        Self {
            page_size: env::var("HEALTHFIRST_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PAGE_SIZE),
            schedule_path: env::var("HEALTHFIRST_SCHEDULE_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            appointments_path: env::var("HEALTHFIRST_APPOINTMENTS_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            time_option_interval: env::var("HEALTHFIRST_TIME_OPTION_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIME_OPTION_INTERVAL),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
