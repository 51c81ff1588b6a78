//! File logging for TUI commands.
//!
//! The dashboard owns the terminal while it runs, so nothing may print to
//! stdout or stderr. Logs go to a daily-rolling file under
//! ${SITREP_HOME}/logs instead, filtered by RUST_LOG.

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::paths;

/// Initializes the global subscriber with a single file layer.
///
/// Returns the writer guard; dropping it flushes buffered lines, so the
/// caller holds it for the lifetime of the command.
pub fn init() -> Result<WorkerGuard> {
    let logs_dir = paths::logs_dir();
    fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let file_appender = rolling::daily(&logs_dir, "sitrep.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false); // no ANSI colors in the file

    // Default to `info` if RUST_LOG is not set.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(guard)
}
