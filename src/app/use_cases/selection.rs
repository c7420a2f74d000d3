//! Use-Cases: Objekt-Selektion.

use crate::app::AppState;

/// Selektiert ein Objekt; `additive` erweitert die bestehende Selektion.
/// Unbekannte IDs sind ein No-op.
pub fn select_object(state: &mut AppState, object_id: &str, additive: bool) {
    if !state.scene.contains_object(object_id) {
        log::debug!("Selektion: Objekt {} existiert nicht", object_id);
        return;
    }
    if !additive {
        state.selection.ids_mut().clear();
    }
    state.selection.ids_mut().insert(object_id.to_string());
    state.selection.selection_anchor_object_id = Some(object_id.to_string());

    log::debug!(
        "Objekt {} selektiert ({} insgesamt)",
        object_id,
        state.selection.selected_object_ids.len()
    );
}

/// Ersetzt die Selektion durch die gegebenen Objekte (unbekannte IDs
/// werden übersprungen).
pub fn select_objects(state: &mut AppState, object_ids: &[String]) {
    let existing: Vec<String> = object_ids
        .iter()
        .filter(|id| state.scene.contains_object(id))
        .cloned()
        .collect();

    let ids = state.selection.ids_mut();
    ids.clear();
    for object_id in &existing {
        ids.insert(object_id.clone());
    }
    state.selection.selection_anchor_object_id = existing.last().cloned();

    log::debug!("{} Objekte selektiert", existing.len());
}

/// Hebt die Objekt-Selektion vollständig auf.
pub fn deselect_all(state: &mut AppState) {
    state.selection.ids_mut().clear();
    state.selection.selection_anchor_object_id = None;
    log::debug!("Objekt-Selektion aufgehoben");
}
