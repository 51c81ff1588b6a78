//! Application state for the status TUI.
//!
//! Everything here is assembled once at startup. The only values that change
//! afterwards are the clock cell (`now`) and the tick counter, both rewritten
//! exclusively by the reducer's Tick arm; the record list itself is never
//! mutated.

use chrono::{DateTime, Utc};
use sitrep_core::catalog::ServiceRecord;
use sitrep_core::config::Config;

/// Which screen the binary was asked to show.
///
/// Screens are independent; there is no in-app navigation between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The status dashboard (default).
    Dashboard,
    /// The placeholder welcome screen.
    Welcome,
}

/// Top-level TUI state.
pub struct AppState {
    /// Set via the Quit effect; the event loop exits when true.
    pub should_quit: bool,
    /// Screen selected at startup.
    pub screen: Screen,
    /// Dashboard heading.
    pub title: String,
    /// Line shown under the heading.
    pub subtitle: String,
    /// Records on display, immutable for the lifetime of the run.
    pub records: Vec<ServiceRecord>,
    /// Clock value all relative ages and the header readout derive from.
    /// Replaced once per second by the Tick event.
    pub now: DateTime<Utc>,
    /// Ticks since startup; parity drives the badge pulse.
    pub tick_count: u64,
}

impl AppState {
    /// Builds the state for one run.
    ///
    /// `now` is both the initial clock value and the anchor the catalog's
    /// check-time offsets are applied to.
    pub fn new(config: &Config, screen: Screen, now: DateTime<Utc>) -> Self {
        Self {
            should_quit: false,
            screen,
            title: config.title.clone(),
            subtitle: config.subtitle.clone(),
            records: config.records(now),
            now,
            tick_count: 0,
        }
    }
}
