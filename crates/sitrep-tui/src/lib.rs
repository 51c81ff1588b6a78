//! Full-screen TUI for the sitrep status page.

pub mod effects;
pub mod events;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod text;
pub mod ticker;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
use chrono::Utc;
pub use runtime::TuiRuntime;
use sitrep_core::config::Config;

use crate::state::{AppState, Screen};

/// Runs the status dashboard until the user quits.
pub fn run_dashboard(config: &Config) -> Result<()> {
    run_screen(config, Screen::Dashboard)
}

/// Runs the placeholder welcome screen until the user quits.
pub fn run_welcome(config: &Config) -> Result<()> {
    run_screen(config, Screen::Welcome)
}

fn run_screen(config: &Config, screen: Screen) -> Result<()> {
    // The TUI draws to stdout, so that is the stream that must be a tty.
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The dashboard requires a terminal.\n\
             Use `sitrep systems` for non-interactive output."
        );
    }

    let now = Utc::now();
    let state = AppState::new(config, screen, now);
    tracing::info!(records = state.records.len(), ?screen, "starting TUI");

    let mut runtime = TuiRuntime::new(state)?;
    runtime.run()
}
