use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::run::Cli;

const DEFAULT_LOG_LEVEL: &str = "info";
const DB_FILE: &str = "ledgertui.db";
const LOG_FILE: &str = "ledgertui.log";

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Settings {
    pub(crate) db_path: PathBuf,
    pub(crate) log_level: String,
    pub(crate) log_path: PathBuf,
}

/// What the config file and `LEDGERTUI_*` environment may set.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileSettings {
    db_path: Option<PathBuf>,
    log_level: Option<String>,
    log_path: Option<PathBuf>,
}

impl Settings {
    /// Flags win over environment, environment over the config file, and
    /// the config file over built-in defaults under the platform data dir.
    pub(crate) fn load(cli: &Cli) -> Result<Self> {
        let dirs = directories::ProjectDirs::from("com", "ledgertui", "LedgerTUI")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| dirs.config_dir().join("config.toml"));
        Self::resolve(cli, &config_path, dirs.data_dir())
    }

    pub(crate) fn resolve(cli: &Cli, config_path: &Path, data_dir: &Path) -> Result<Self> {
        let file: FileSettings = config::Config::builder()
            .add_source(config::File::from(config_path).required(false))
            .add_source(config::Environment::with_prefix("LEDGERTUI"))
            .build()
            .and_then(|c| c.try_deserialize())
            .with_context(|| format!("Failed to read configuration: {}", config_path.display()))?;

        Ok(Self {
            db_path: cli
                .db
                .clone()
                .or(file.db_path)
                .unwrap_or_else(|| data_dir.join(DB_FILE)),
            log_level: cli
                .log_level
                .clone()
                .or(file.log_level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_path: file.log_path.unwrap_or_else(|| data_dir.join(LOG_FILE)),
        })
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod settings_tests;
