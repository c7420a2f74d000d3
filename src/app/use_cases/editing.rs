//! Use-Cases: Objekte einfügen, ändern und löschen.

use crate::app::AppState;
use crate::core::{BimObject, ObjectPatch, SceneError, TransformPatch};

/// Fügt ein neues Objekt in die Szene ein.
///
/// Ohne Layer-Angabe wird der aktive Layer übernommen (falls konfiguriert).
/// Das neue Objekt wird anschließend als einziges selektiert.
pub fn add_object(state: &mut AppState, mut object: BimObject) -> Result<(), SceneError> {
    if state.scene.contains_object(&object.id) {
        return Err(SceneError::DuplicateId(object.id));
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot("Objekt hinzufügen");

    if object.layer_id.is_none() && state.options.auto_assign_active_layer {
        object.layer_id = state.scene.active_layer_id().map(str::to_string);
    }
    let object_id = object.id.clone();
    let kind = object.kind;
    state.scene_mut().add_object(object)?;

    state.selection.ids_mut().clear();
    state.selection.ids_mut().insert(object_id.clone());
    state.selection.selection_anchor_object_id = Some(object_id.clone());
    state.dirty = true;

    log::info!("Objekt {} ({}) hinzugefügt", object_id, kind.as_str());
    Ok(())
}

/// Löscht ein Objekt samt Selektions-Eintrag und Geschoss-Registrierung.
/// Fehlende IDs sind ein No-op.
pub fn delete_object(state: &mut AppState, object_id: &str) {
    if !state.scene.contains_object(object_id) {
        log::debug!("Löschen: Objekt {} existiert nicht", object_id);
        return;
    }

    state.record_undo_snapshot("Objekt löschen");

    state.scene_mut().remove_object(object_id);
    state.selection.ids_mut().shift_remove(object_id);
    if state.selection.selection_anchor_object_id.as_deref() == Some(object_id) {
        state.selection.selection_anchor_object_id = None;
    }
    // Registrierung im Baum lösen, falls vorhanden
    state.hierarchy.remove_object_from_level(object_id);
    state.dirty = true;

    log::info!("Objekt {} gelöscht", object_id);
}

/// Löscht alle aktuell selektierten Objekte.
pub fn delete_selected_objects(state: &mut AppState) {
    let selected: Vec<String> = state.selection.selected_object_ids.iter().cloned().collect();
    if selected.is_empty() {
        log::debug!("Löschen: keine Objekte selektiert");
        return;
    }

    state.record_undo_snapshot("Selektierte Objekte löschen");

    for object_id in &selected {
        state.scene_mut().remove_object(object_id);
        state.hierarchy.remove_object_from_level(object_id);
    }
    state.selection.ids_mut().clear();
    state.selection.selection_anchor_object_id = None;
    state.dirty = true;

    log::info!("{} selektierte Objekte gelöscht", selected.len());
}

/// Übernimmt ein Teil-Update in ein Objekt (shallow merge).
pub fn update_object(
    state: &mut AppState,
    object_id: &str,
    patch: ObjectPatch,
) -> Result<(), SceneError> {
    if !state.scene.contains_object(object_id) {
        return Err(SceneError::ObjectNotFound(object_id.to_string()));
    }

    state.record_undo_snapshot("Objekt ändern");
    state.scene_mut().update_object(object_id, patch)?;

    // Namensänderungen in die Baum-Registrierung spiegeln
    if let Some(object) = state.scene.object(object_id) {
        let name = object.name.clone();
        if state.hierarchy.object_ref(object_id).is_some() {
            state.hierarchy.rename_node(object_id, name).ok();
        }
    }
    state.dirty = true;

    log::info!("Objekt {} aktualisiert", object_id);
    Ok(())
}

/// Ändert nur die Transform-Komponenten eines Objekts.
pub fn transform_object(
    state: &mut AppState,
    object_id: &str,
    patch: &TransformPatch,
) -> Result<(), SceneError> {
    if !state.scene.contains_object(object_id) {
        return Err(SceneError::ObjectNotFound(object_id.to_string()));
    }

    state.record_undo_snapshot("Objekt transformieren");
    state.scene_mut().transform_object(object_id, patch)?;
    state.dirty = true;

    log::debug!("Objekt {} transformiert", object_id);
    Ok(())
}
