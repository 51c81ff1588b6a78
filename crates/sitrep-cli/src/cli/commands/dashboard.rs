//! Dashboard command handler.

use anyhow::{Context, Result};
use sitrep_core::config::Config;
use sitrep_core::logging;

pub fn run(config: &Config) -> Result<()> {
    // Held for the lifetime of the TUI so buffered log lines flush on exit.
    let _guard = logging::init().context("init logging")?;
    tracing::info!(systems = config.systems.len(), "dashboard starting");

    sitrep_tui::run_dashboard(config)
}
