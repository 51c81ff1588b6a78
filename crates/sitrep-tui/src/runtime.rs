//! TUI runtime - owns the terminal, runs the event loop.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.

use std::io::Stdout;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use crossterm::event::{self, Event};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::ticker::Ticker;
use crate::{render, terminal, update};

/// Interval between clock ticks. Every relative age on screen and the
/// header readout refresh at this cadence.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Full-screen TUI runtime.
///
/// Owns the terminal, state, and ticker. Terminal state is guaranteed to be
/// restored on drop, panic, or Ctrl+C, and the ticker is released with the
/// runtime.
pub struct TuiRuntime {
    /// Terminal instance.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state.
    pub state: AppState,
    /// The per-second clock tick source.
    ticker: Ticker,
}

impl TuiRuntime {
    /// Creates a new TUI runtime.
    pub fn new(state: AppState) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();

        // Enter alternate screen and raw mode
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        Ok(Self {
            terminal,
            state,
            ticker: Ticker::new(TICK_INTERVAL),
        })
    }

    /// Runs the main event loop.
    pub fn run(&mut self) -> Result<()> {
        tracing::debug!(screen = ?self.state.screen, "entering event loop");
        let result = self.event_loop();
        tracing::debug!("event loop finished");
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.should_quit {
            // Render before blocking for input so the first frame appears
            // immediately and updates land right after their events.
            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }

            for event in self.collect_events()? {
                // Only Tick and Resize change what is on screen; key input
                // produces effects without touching the frame.
                if matches!(
                    &event,
                    UiEvent::Tick { .. } | UiEvent::Terminal(Event::Resize(_, _))
                ) {
                    dirty = true;
                }

                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }
        }

        Ok(())
    }

    /// Collects pending terminal events, then the tick if it came due.
    ///
    /// Blocks on the terminal for at most the ticker's remaining time, so
    /// the loop wakes exactly when the clock should advance and sleeps
    /// otherwise.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        if event::poll(self.ticker.timeout())? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events (non-blocking)
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        // Emit Tick after the poll - we either waited out the interval or
        // woke early for input, in which case this stays quiet.
        if self.ticker.tick() {
            events.push(UiEvent::Tick { now: Utc::now() });
        }

        Ok(events)
    }

    /// Executes effects returned by the reducer.
    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            match effect {
                UiEffect::Quit => {
                    self.state.should_quit = true;
                }
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
