use hostwatch::system::process::{ProcessRecord, rank_by_cpu};
use insta::assert_debug_snapshot;

fn record(pid: u32, name: &str, cpu_share: Option<f32>) -> ProcessRecord {
    ProcessRecord {
        pid,
        name: name.to_string(),
        owner: Some("tester".to_string()),
        cpu_share,
    }
}

#[test]
fn top_processes_ranked() {
    let records = vec![
        record(1, "booting", None),
        record(2, "low", Some(5.0)),
        record(3, "hot_a", Some(90.0)),
        record(4, "hot_b", Some(90.0)),
        record(5, "idle", Some(0.0)),
    ];

    let ranked: Vec<(u32, String)> = rank_by_cpu(&records, 10)
        .into_iter()
        .map(|p| (p.pid, p.name))
        .collect();

    assert_debug_snapshot!("top_processes_ranked", ranked);
}
