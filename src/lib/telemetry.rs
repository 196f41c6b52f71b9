//! Telemetry initialization and launcher session events.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crate::launcher::{Platform, RunMode};

/// Initialize `tracing` and format developer logs.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Launcher session state worth recording once at startup.
#[derive(Debug)]
pub struct SessionTelemetry<'a> {
    pub mode: RunMode,
    pub platform: Platform,
    pub config_path: Option<&'a str>,
    pub dry_run: bool,
}

pub fn emit_session(telemetry: &SessionTelemetry<'_>) {
    info!(
        target: "vplot_launcher::session",
        mode = %telemetry.mode,
        platform = telemetry.platform.as_str(),
        config_path = telemetry.config_path.unwrap_or(""),
        dry_run = telemetry.dry_run,
        "Launcher session started"
    );
}
