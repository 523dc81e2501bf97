use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::eyre::{Result, eyre};
use tracing_subscriber::fmt::format::FmtSpan;

const TRACE_FILE_NAME: &str = "hostwatch-trace.jsonl";

/// Trace output goes to a file: the terminal is owned by the dashboard.
pub fn default_trace_path() -> PathBuf {
    std::env::temp_dir().join(TRACE_FILE_NAME)
}

pub fn init_tracing_json(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(output_path)?;

    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .json()
        .with_span_events(FmtSpan::CLOSE)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(Mutex::new(file))
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| eyre!("failed to set tracing subscriber: {e}"))?;
    Ok(())
}
