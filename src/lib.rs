pub mod app;
pub mod config;
pub mod event;
pub mod format;
pub mod screen;
pub mod system;
#[cfg(feature = "trace-capture")]
pub mod telemetry;
pub mod ui;
