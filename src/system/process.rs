use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq)]
pub struct ProcessRecord {
    pub pid: u32,
    pub name: String,
    pub owner: Option<String>,
    /// `None` until the process has been observed across two refreshes.
    pub cpu_share: Option<f32>,
}

/// Heaviest `limit` processes by CPU share, descending.
///
/// Records without a measured share are dropped rather than treated as zero.
/// The sort is stable, so equal shares keep their enumeration order.
pub fn rank_by_cpu(records: &[ProcessRecord], limit: usize) -> Vec<ProcessRecord> {
    let mut measured: Vec<&ProcessRecord> =
        records.iter().filter(|p| p.cpu_share.is_some()).collect();
    measured.sort_by(|a, b| compare_share(b.cpu_share, a.cpu_share));
    measured.into_iter().take(limit).cloned().collect()
}

fn compare_share(a: Option<f32>, b: Option<f32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        _ => Ordering::Equal,
    }
}
