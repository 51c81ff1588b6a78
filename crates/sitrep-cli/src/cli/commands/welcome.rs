//! Welcome screen command handler.

use anyhow::{Context, Result};
use sitrep_core::config::Config;
use sitrep_core::logging;

pub fn run(config: &Config) -> Result<()> {
    let _guard = logging::init().context("init logging")?;
    tracing::info!("welcome screen starting");

    sitrep_tui::run_welcome(config)
}
