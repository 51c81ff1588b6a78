//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(state, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(state: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick { now } => {
            // Sole writer of the clock cell. Every relative age and the
            // header readout recompute from this value on the next render.
            state.now = now;
            state.tick_count = state.tick_count.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(Event::Key(key)) => handle_key(key),
        UiEvent::Terminal(_) => vec![],
    }
}

fn handle_key(key: KeyEvent) -> Vec<UiEffect> {
    // Some platforms report key releases too; only presses act.
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![UiEffect::Quit],
        // Raw mode swallows the SIGINT, so Ctrl+C arrives as a key event.
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            vec![UiEffect::Quit]
        }
        _ => vec![],
    }
}
