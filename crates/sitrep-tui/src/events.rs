//! UI event types.

use chrono::{DateTime, Utc};
use crossterm::event::Event;

/// Events fed to the reducer by the runtime.
#[derive(Debug)]
pub enum UiEvent {
    /// The per-second clock tick, carrying the instant it fired.
    ///
    /// The runtime captures the timestamp when the ticker fires so the
    /// reducer stays pure; its Tick arm is the only writer of the clock
    /// cell in `AppState`.
    Tick { now: DateTime<Utc> },

    /// Raw terminal input (keys, resize).
    Terminal(Event),
}
