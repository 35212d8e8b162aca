mod db;
mod export;
mod ledger;
mod logging;
mod models;
mod run;
mod settings;
mod summary;
mod ui;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = run::Cli::parse();
    let settings = settings::Settings::load(&cli)?;
    logging::init(&settings)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        db = %settings.db_path.display(),
        "starting ledgertui"
    );

    let mut ledger = ledger::Ledger::open(&settings.db_path)?;

    match cli.command {
        Some(command) => run::as_cli(command, &mut ledger),
        None => run::as_tui(&mut ledger),
    }
}
