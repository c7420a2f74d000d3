//! Use-Cases: Layer-Verwaltung.

use crate::app::AppState;
use crate::core::{Layer, SceneError};

/// Legt einen neuen Layer an.
pub fn add_layer(state: &mut AppState, layer: Layer) -> Result<(), SceneError> {
    if state.scene.layer(&layer.id).is_some() {
        return Err(SceneError::DuplicateId(layer.id));
    }

    state.record_undo_snapshot("Layer anlegen");
    let layer_id = layer.id.clone();
    state.scene_mut().add_layer(layer)?;
    state.dirty = true;

    log::info!("Layer {} angelegt", layer_id);
    Ok(())
}

/// Entfernt einen Layer; die Referenzen der Objekte werden gelöst,
/// die Objekte bleiben erhalten. Fehlende IDs sind ein No-op.
pub fn remove_layer(state: &mut AppState, layer_id: &str) {
    if state.scene.layer(layer_id).is_none() {
        log::debug!("Entfernen: Layer {} existiert nicht", layer_id);
        return;
    }
    let referencing = state.scene.objects_on_layer(layer_id).len();

    state.record_undo_snapshot("Layer entfernen");
    state.scene_mut().remove_layer(layer_id);
    state.dirty = true;

    log::info!(
        "Layer {} entfernt, {} Objekt-Referenzen gelöst",
        layer_id,
        referencing
    );
}

/// Schaltet die Sichtbarkeit eines Layers um. Fehlende IDs sind ein No-op.
pub fn toggle_layer_visibility(state: &mut AppState, layer_id: &str) {
    match state.scene_mut().toggle_layer_visibility(layer_id) {
        Some(visible) => {
            state.dirty = true;
            log::info!("Layer {}: sichtbar = {}", layer_id, visible);
        }
        None => log::debug!("Sichtbarkeit: Layer {} existiert nicht", layer_id),
    }
}

/// Sperrt oder entsperrt einen Layer. Fehlende IDs sind ein No-op.
pub fn set_layer_locked(state: &mut AppState, layer_id: &str, locked: bool) {
    if state.scene_mut().set_layer_locked(layer_id, locked) {
        state.dirty = true;
        log::info!("Layer {}: gesperrt = {}", layer_id, locked);
    } else {
        log::debug!("Sperren: Layer {} existiert nicht", layer_id);
    }
}

/// Setzt den aktiven Layer für neu platzierte Objekte.
pub fn set_active_layer(state: &mut AppState, layer_id: Option<String>) -> Result<(), SceneError> {
    state.scene_mut().set_active_layer(layer_id.clone())?;
    match layer_id {
        Some(id) => log::info!("Aktiver Layer: {}", id),
        None => log::info!("Kein aktiver Layer"),
    }
    Ok(())
}
