//! Use-Cases: Undo/Redo-Operationen.

use crate::app::history::Snapshot;
use crate::app::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState) {
    let label = state.history.undo_label().map(str::to_string);
    let current = Snapshot::from_state(state);
    if let Some(prev) = state.history.pop_undo_with_current(current) {
        prev.apply_to(state);
        state.dirty = true;
        log::info!("Undo: {}", label.as_deref().unwrap_or("?"));
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) {
    let label = state.history.redo_label().map(str::to_string);
    let current = Snapshot::from_state(state);
    if let Some(next) = state.history.pop_redo_with_current(current) {
        next.apply_to(state);
        state.dirty = true;
        log::info!("Redo: {}", label.as_deref().unwrap_or("?"));
    } else {
        log::debug!("Redo: nichts zu tun");
    }
}
