use std::path::PathBuf;
use std::time::Duration;

use crate::system::platform::root_mount_point;

/// Compiled-in tuning for the dashboard. There is no config file; tests build
/// their own values to exercise edge cases.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub general: GeneralConfig,
    pub panels: PanelsConfig,
}

#[derive(Debug, Clone)]
pub struct GeneralConfig {
    pub refresh_interval: Duration,
    /// Time the "starting" line stays readable before the screen is taken over.
    pub startup_pause: Duration,
}

#[derive(Debug, Clone)]
pub struct PanelsConfig {
    pub disk_mount_point: PathBuf,
    pub max_core_rows: usize,
    pub max_processes: usize,
    pub process_name_width: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            refresh_interval: Duration::from_millis(1000),
            startup_pause: Duration::from_millis(1000),
        }
    }
}

impl Default for PanelsConfig {
    fn default() -> Self {
        PanelsConfig {
            disk_mount_point: root_mount_point().to_path_buf(),
            max_core_rows: 8,
            max_processes: 10,
            process_name_width: 28,
        }
    }
}
