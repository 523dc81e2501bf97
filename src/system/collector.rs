use std::collections::HashSet;
use std::path::Path;

use color_eyre::Result;
use color_eyre::eyre::eyre;
use sysinfo::{
    Disks, MINIMUM_CPU_UPDATE_INTERVAL, Networks, ProcessRefreshKind, ProcessStatus,
    ProcessesToUpdate, System, Uid, UpdateKind, Users,
};

use super::platform::{self, FsUsage};
use super::process::ProcessRecord;
use super::snapshot::{
    CpuSnapshot, DiskSnapshot, HostSnapshot, MemorySnapshot, NetworkSnapshot, ProcessSnapshot,
    percent_of,
};

/// Everything the dashboard needs from the operating system.
///
/// Each read produces one immutable snapshot. A failing read only affects the
/// panel built from it.
pub trait MetricsSource {
    fn read_host(&mut self) -> Result<HostSnapshot>;

    /// Blocks for one sampling window. Per-core and aggregate values come from
    /// the same window.
    fn read_cpu(&mut self) -> Result<CpuSnapshot>;

    fn read_memory(&mut self) -> Result<MemorySnapshot>;

    fn read_disk(&mut self, mount_point: &Path) -> Result<DiskSnapshot>;

    fn read_network(&mut self) -> Result<NetworkSnapshot>;

    /// Processes in ascending pid order. Entries that vanish or cannot be read
    /// are left out.
    fn list_processes(&mut self) -> Result<ProcessSnapshot>;
}

pub struct SysinfoCollector {
    sys: System,
    disks: Disks,
    networks: Networks,
    owners: OwnerCache<Users>,
    measured_pids: HashSet<u32>,
}

impl Default for SysinfoCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoCollector {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu_usage();
        sys.refresh_processes_specifics(ProcessesToUpdate::All, true, process_refresh_kind());
        let measured_pids = sys.processes().keys().map(|pid| pid.as_u32()).collect();

        SysinfoCollector {
            sys,
            disks: Disks::new_with_refreshed_list(),
            networks: Networks::new_with_refreshed_list(),
            owners: OwnerCache::new(Users::new_with_refreshed_list()),
            measured_pids,
        }
    }
}

fn process_refresh_kind() -> ProcessRefreshKind {
    ProcessRefreshKind::nothing()
        .with_cpu()
        .with_user(UpdateKind::OnlyIfNotSet)
}

/// Uid to account name mapping that can be reloaded from the system.
trait UserTable {
    type Id: ?Sized;

    fn name_of(&self, id: &Self::Id) -> Option<String>;

    fn reload(&mut self);
}

impl UserTable for Users {
    type Id = Uid;

    fn name_of(&self, id: &Uid) -> Option<String> {
        self.get_user_by_id(id).map(|user| user.name().to_string())
    }

    fn reload(&mut self) {
        self.refresh();
    }
}

/// Resolves process owners, reloading the table at most once per listing so
/// accounts created after startup still get a name.
struct OwnerCache<T> {
    table: T,
    reloaded: bool,
}

impl<T: UserTable> OwnerCache<T> {
    fn new(table: T) -> Self {
        OwnerCache {
            table,
            reloaded: false,
        }
    }

    fn begin_listing(&mut self) {
        self.reloaded = false;
    }

    fn owner(&mut self, id: &T::Id) -> Option<String> {
        if let Some(name) = self.table.name_of(id) {
            return Some(name);
        }
        if self.reloaded {
            return None;
        }
        self.reloaded = true;
        self.table.reload();
        self.table.name_of(id)
    }
}

impl MetricsSource for SysinfoCollector {
    fn read_host(&mut self) -> Result<HostSnapshot> {
        Ok(HostSnapshot {
            system: platform::kernel_name().to_string(),
            release: System::kernel_version().unwrap_or_else(|| "unknown".to_string()),
            node: System::host_name().unwrap_or_else(|| "unknown".to_string()),
            arch: std::env::consts::ARCH.to_string(),
        })
    }

    fn read_cpu(&mut self) -> Result<CpuSnapshot> {
        #[cfg(feature = "trace-capture")]
        let _span = tracing::debug_span!("collector.read_cpu").entered();

        self.sys.refresh_cpu_usage();
        std::thread::sleep(MINIMUM_CPU_UPDATE_INTERVAL);
        self.sys.refresh_cpu_usage();

        let per_core = self.sys.cpus().iter().map(|cpu| cpu.cpu_usage()).collect();
        Ok(CpuSnapshot {
            per_core,
            aggregate: self.sys.global_cpu_usage(),
        })
    }

    fn read_memory(&mut self) -> Result<MemorySnapshot> {
        self.sys.refresh_memory();

        let total = self.sys.total_memory();
        if total == 0 {
            return Err(eyre!("memory statistics are not available"));
        }
        let used = self.sys.used_memory();
        let swap_used = self.sys.used_swap();

        Ok(MemorySnapshot {
            total,
            used,
            available: self.sys.available_memory(),
            used_percent: percent_of(used, total),
            swap_used,
            swap_percent: percent_of(swap_used, self.sys.total_swap()),
        })
    }

    fn read_disk(&mut self, mount_point: &Path) -> Result<DiskSnapshot> {
        self.disks.refresh(true);

        let disk = self
            .disks
            .list()
            .iter()
            .find(|disk| disk.mount_point() == mount_point)
            .ok_or_else(|| eyre!("no filesystem mounted at {}", mount_point.display()))?;

        // sysinfo only reports space available to unprivileged users, which
        // would count root-reserved blocks as used.
        let usage = platform::filesystem_usage(mount_point).unwrap_or(FsUsage {
            total: disk.total_space(),
            free: disk.available_space(),
            available: disk.available_space(),
        });
        Ok(DiskSnapshot::from_usage(mount_point.to_path_buf(), usage))
    }

    fn read_network(&mut self) -> Result<NetworkSnapshot> {
        self.networks.refresh(true);

        let (bytes_sent, bytes_received) = self
            .networks
            .list()
            .values()
            .fold((0u64, 0u64), |(sent, received), data| {
                (
                    sent.saturating_add(data.total_transmitted()),
                    received.saturating_add(data.total_received()),
                )
            });
        Ok(NetworkSnapshot {
            bytes_sent,
            bytes_received,
        })
    }

    fn list_processes(&mut self) -> Result<ProcessSnapshot> {
        #[cfg(feature = "trace-capture")]
        let _span = tracing::debug_span!("collector.list_processes").entered();

        self.sys
            .refresh_processes_specifics(ProcessesToUpdate::All, true, process_refresh_kind());

        self.owners.begin_listing();
        let mut records = Vec::with_capacity(self.sys.processes().len());
        let mut alive = HashSet::with_capacity(records.capacity());

        for (pid, process) in self.sys.processes() {
            // Threads are listed next to their process on Linux.
            if process.thread_kind().is_some() || process.status() == ProcessStatus::Zombie {
                continue;
            }
            let pid = pid.as_u32();
            alive.insert(pid);

            let owner = process.user_id().and_then(|uid| self.owners.owner(uid));
            let cpu_share = self
                .measured_pids
                .contains(&pid)
                .then(|| process.cpu_usage());

            records.push(ProcessRecord {
                pid,
                name: process.name().to_string_lossy().to_string(),
                owner,
                cpu_share,
            });
        }

        records.sort_by_key(|record| record.pid);
        self.measured_pids = alive;

        if records.is_empty() {
            return Err(eyre!("process table is not readable"));
        }
        Ok(ProcessSnapshot { records })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::system::platform::root_mount_point;

    /// Accounts in `pending` only become visible after a reload.
    #[derive(Default)]
    struct FakeUsers {
        known: HashMap<u32, String>,
        pending: HashMap<u32, String>,
        reloads: usize,
    }

    impl UserTable for FakeUsers {
        type Id = u32;

        fn name_of(&self, id: &u32) -> Option<String> {
            self.known.get(id).cloned()
        }

        fn reload(&mut self) {
            self.reloads += 1;
            self.known.extend(self.pending.drain());
        }
    }

    #[test]
    fn owner_created_after_startup_is_resolved() {
        let mut table = FakeUsers::default();
        table.known.insert(0, "root".into());
        table.pending.insert(1001, "deploy".into());
        let mut owners = OwnerCache::new(table);

        owners.begin_listing();
        assert_eq!(owners.owner(&0).as_deref(), Some("root"));
        assert_eq!(owners.table.reloads, 0);
        assert_eq!(owners.owner(&1001).as_deref(), Some("deploy"));
        assert_eq!(owners.table.reloads, 1);
    }

    #[test]
    fn unknown_uids_reload_once_per_listing() {
        let mut owners = OwnerCache::new(FakeUsers::default());

        owners.begin_listing();
        assert_eq!(owners.owner(&4242), None);
        assert_eq!(owners.owner(&4243), None);
        assert_eq!(owners.table.reloads, 1);

        owners.begin_listing();
        assert_eq!(owners.owner(&4242), None);
        assert_eq!(owners.table.reloads, 2);
    }

    #[test]
    fn live_cpu_read_pairs_core_and_aggregate() {
        let mut collector = SysinfoCollector::new();
        let cpu = collector.read_cpu().unwrap();
        assert!(!cpu.per_core.is_empty());
        assert!(cpu.aggregate >= 0.0);
    }

    #[test]
    fn live_memory_available_comes_from_collector() {
        let mut collector = SysinfoCollector::new();
        let mem = collector.read_memory().unwrap();
        assert!(mem.total > 0);
        assert!(mem.available <= mem.total);
    }

    #[test]
    fn live_process_list_is_sorted_and_contains_self() {
        let mut collector = SysinfoCollector::new();
        let procs = collector.list_processes().unwrap();
        let pids: Vec<u32> = procs.records.iter().map(|p| p.pid).collect();
        let mut sorted = pids.clone();
        sorted.sort_unstable();
        assert_eq!(pids, sorted);
        assert!(pids.contains(&std::process::id()));
    }

    #[test]
    fn live_host_reports_kernel_name() {
        let mut collector = SysinfoCollector::new();
        let host = collector.read_host().unwrap();
        assert_eq!(host.system, platform::kernel_name());
        assert_eq!(host.arch, std::env::consts::ARCH);
    }

    #[test]
    fn live_disk_read_does_not_panic() {
        let mut collector = SysinfoCollector::new();
        // Containers may not expose the root mount; either answer is fine.
        let _ = collector.read_disk(root_mount_point());
        let _ = collector.read_network();
        let _ = collector.read_host();
    }
}
