use std::path::PathBuf;

use super::platform::FsUsage;
use super::process::ProcessRecord;

/// Static identity of the machine, shown in the header strip.
#[derive(Debug, Clone, PartialEq)]
pub struct HostSnapshot {
    pub system: String,
    pub release: String,
    pub node: String,
    pub arch: String,
}

/// Per-core and aggregate utilization from one sampling window.
#[derive(Debug, Clone, PartialEq)]
pub struct CpuSnapshot {
    pub per_core: Vec<f32>,
    pub aggregate: f32,
}

impl CpuSnapshot {
    pub fn core_count(&self) -> usize {
        self.per_core.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemorySnapshot {
    pub total: u64,
    pub used: u64,
    /// Includes reclaimable cache, so it is not `total - used`.
    pub available: u64,
    pub used_percent: f32,
    pub swap_used: u64,
    pub swap_percent: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiskSnapshot {
    pub mount_point: PathBuf,
    pub total: u64,
    pub used: u64,
    pub used_percent: f32,
}

impl DiskSnapshot {
    /// `used` is everything not free, reserved blocks included. The percentage
    /// is taken against the space a regular user can reach (`used + available`),
    /// so a disk reads 100% once unprivileged writes start failing.
    pub fn from_usage(mount_point: PathBuf, usage: FsUsage) -> Self {
        let used = usage.total.saturating_sub(usage.free);
        DiskSnapshot {
            mount_point,
            total: usage.total,
            used,
            used_percent: percent_of(used, used.saturating_add(usage.available)),
        }
    }
}

/// Lifetime counters summed over every interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkSnapshot {
    pub bytes_sent: u64,
    pub bytes_received: u64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProcessSnapshot {
    pub records: Vec<ProcessRecord>,
}

pub fn percent_of(part: u64, total: u64) -> f32 {
    if total == 0 {
        return 0.0;
    }
    ((part as f64 / total as f64) * 100.0) as f32
}
