//! Use-Cases: Hierarchie-Struktur (Standorte, Gebäude, Geschosse).
//!
//! Strukturänderungen laufen außerhalb der Undo-History; ein Snapshot wird
//! nur aufgezeichnet, wenn die Szene mitbetroffen ist (gelöste
//! Geschoss-Referenzen).

use crate::app::AppState;
use crate::core::{Building, HierarchyError, Level, RemovalResult, Site};

/// Fügt einen Standort hinzu.
pub fn add_site(state: &mut AppState, site: Site) -> Result<(), HierarchyError> {
    let site_id = site.id.clone();
    state.hierarchy.add_site(site)?;
    state.dirty = true;
    log::info!("Standort {} angelegt", site_id);
    Ok(())
}

/// Fügt ein Gebäude unter seinem Standort hinzu.
pub fn add_building(state: &mut AppState, building: Building) -> Result<(), HierarchyError> {
    let building_id = building.id.clone();
    let site_id = building.site_id.clone();
    state.hierarchy.add_building(building)?;
    state.dirty = true;
    log::info!("Gebäude {} unter Standort {} angelegt", building_id, site_id);
    Ok(())
}

/// Fügt ein Geschoss unter seinem Gebäude hinzu.
pub fn add_level(state: &mut AppState, level: Level) -> Result<(), HierarchyError> {
    let level_id = level.id.clone();
    let building_id = level.building_id.clone();
    state.hierarchy.add_level(level)?;
    state.dirty = true;
    log::info!("Geschoss {} unter Gebäude {} angelegt", level_id, building_id);
    Ok(())
}

/// Entfernt einen Standort samt Unterbaum und löst die Geschoss-Referenzen
/// der betroffenen Szenen-Objekte.
pub fn remove_site(state: &mut AppState, site_id: &str) {
    let result = state.hierarchy.remove_site(site_id);
    sync_scene_after_removal(state, &result);
    if !result.is_empty() {
        state.dirty = true;
        log::info!(
            "Standort {} entfernt ({} Gebäude, {} Geschosse, {} Objekte gelöst)",
            site_id,
            result.removed_buildings.len(),
            result.removed_levels.len(),
            result.detached_objects.len()
        );
    }
}

/// Entfernt ein Gebäude samt Geschossen.
pub fn remove_building(state: &mut AppState, building_id: &str) {
    let result = state.hierarchy.remove_building(building_id);
    sync_scene_after_removal(state, &result);
    if !result.is_empty() {
        state.dirty = true;
        log::info!(
            "Gebäude {} entfernt ({} Geschosse, {} Objekte gelöst)",
            building_id,
            result.removed_levels.len(),
            result.detached_objects.len()
        );
    }
}

/// Entfernt ein Geschoss; die registrierten Objekte bleiben in der Szene.
pub fn remove_level(state: &mut AppState, level_id: &str) {
    let result = state.hierarchy.remove_level(level_id);
    sync_scene_after_removal(state, &result);
    if !result.is_empty() {
        state.dirty = true;
        log::info!(
            "Geschoss {} entfernt, {} Objekte gelöst",
            level_id,
            result.detached_objects.len()
        );
    }
}

/// Löst die `level_id`-Referenzen der Szene für alle entfernten Geschosse.
fn sync_scene_after_removal(state: &mut AppState, result: &RemovalResult) {
    if result.removed_levels.is_empty() {
        return;
    }
    let affected: usize = result
        .removed_levels
        .iter()
        .map(|level_id| state.scene.objects_on_level(level_id).len())
        .sum();
    if affected == 0 {
        return;
    }
    state.record_undo_snapshot("Geschoss-Zuordnung lösen");
    for level_id in &result.removed_levels {
        state.scene_mut().detach_level(level_id);
    }
}

/// Hängt ein Gebäude an einen anderen Standort um.
pub fn move_building(
    state: &mut AppState,
    building_id: &str,
    target_site_id: &str,
) -> Result<(), HierarchyError> {
    state.hierarchy.move_building(building_id, target_site_id)?;
    state.dirty = true;
    log::info!("Gebäude {} → Standort {}", building_id, target_site_id);
    Ok(())
}

/// Hängt ein Geschoss an ein anderes Gebäude um.
pub fn move_level(
    state: &mut AppState,
    level_id: &str,
    target_building_id: &str,
) -> Result<(), HierarchyError> {
    state.hierarchy.move_level(level_id, target_building_id)?;
    state.dirty = true;
    log::info!("Geschoss {} → Gebäude {}", level_id, target_building_id);
    Ok(())
}

/// Hängt eine Objekt-Registrierung an ein anderes Geschoss um und hält die
/// Szenen-Referenz synchron.
pub fn move_object(
    state: &mut AppState,
    object_id: &str,
    target_level_id: &str,
) -> Result<(), HierarchyError> {
    state.hierarchy.move_object(object_id, target_level_id)?;

    if state.scene.contains_object(object_id) {
        state.record_undo_snapshot("Objekt umhängen");
        state
            .scene_mut()
            .set_object_level(object_id, Some(target_level_id.to_string()))
            .ok();
    }
    state.dirty = true;
    log::info!("Objekt {} → Geschoss {}", object_id, target_level_id);
    Ok(())
}

/// Ersetzt die Geschoss-Reihenfolge eines Gebäudes.
pub fn reorder_levels(
    state: &mut AppState,
    building_id: &str,
    ordered_level_ids: &[String],
) -> Result<(), HierarchyError> {
    state.hierarchy.reorder_levels(building_id, ordered_level_ids)?;
    state.dirty = true;
    log::info!("Geschoss-Reihenfolge von Gebäude {} geändert", building_id);
    Ok(())
}

/// Benennt einen Knoten um.
pub fn rename_node(state: &mut AppState, node_id: &str, name: String) -> Result<(), HierarchyError> {
    state.hierarchy.rename_node(node_id, name.clone())?;

    // Objekt-Knoten: Anzeigename auch im Szenen-Objekt nachziehen
    if state.scene.contains_object(node_id) && state.hierarchy.object_ref(node_id).is_some() {
        state.record_undo_snapshot("Objekt umbenennen");
        state
            .scene_mut()
            .update_object(
                node_id,
                crate::core::ObjectPatch {
                    name: Some(name),
                    ..crate::core::ObjectPatch::default()
                },
            )
            .ok();
    }
    state.dirty = true;
    log::info!("Knoten {} umbenannt", node_id);
    Ok(())
}

/// Führt einen validierten Drag-und-Drop aus.
pub fn drop_node(
    state: &mut AppState,
    source_id: &str,
    target_id: &str,
) -> Result<(), HierarchyError> {
    // Objekt-Drops halten die Szenen-Referenz synchron
    if state.hierarchy.object_ref(source_id).is_some() {
        if !state.hierarchy.can_drop(source_id, target_id) {
            return Err(HierarchyError::InvalidDrop {
                source_id: source_id.to_string(),
                target_id: target_id.to_string(),
            });
        }
        return move_object(state, source_id, target_id);
    }

    state.hierarchy.drop_node(source_id, target_id)?;
    state.dirty = true;
    log::info!("Drop: {} → {}", source_id, target_id);
    Ok(())
}
