use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::settings::Settings;

/// Install the global subscriber. Output goes to the log file, never the
/// terminal, which the TUI owns.
pub(crate) fn init(settings: &Settings) -> Result<()> {
    if let Some(parent) = settings.log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&settings.log_path)
        .with_context(|| format!("Failed to open log file: {}", settings.log_path.display()))?;

    let filter = EnvFilter::try_new(format!("ledgertui={}", settings.log_level))
        .with_context(|| format!("Invalid log level: {}", settings.log_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))
}
