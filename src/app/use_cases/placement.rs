//! Use-Case: Objekt-Platzierung über die Komponentengrenze hinweg.
//!
//! Die Geschoss-Zuordnung lebt doppelt — als `level_id` im Szenen-Objekt und
//! als Registrierung im Hierarchie-Baum. Beide Seiten werden hier in einem
//! Aufruf aktualisiert; kein anderer Pfad fasst beide an.

use crate::app::AppState;
use anyhow::bail;

/// Ordnet ein Szenen-Objekt einem Geschoss zu.
///
/// Registriert das Objekt im Baum (oder hängt es um, falls bereits
/// registriert) und setzt die `level_id`-Referenz in der Szene.
pub fn assign_object_to_level(
    state: &mut AppState,
    object_id: &str,
    level_id: &str,
) -> anyhow::Result<()> {
    let Some(object) = state.scene.object(object_id) else {
        bail!("Objekt nicht gefunden: {object_id}");
    };
    let name = object.name.clone();
    if state.hierarchy.level(level_id).is_none() {
        bail!("Geschoss nicht gefunden: {level_id}");
    }

    state.record_undo_snapshot("Objekt zuordnen");

    if state.hierarchy.object_ref(object_id).is_some() {
        state.hierarchy.move_object(object_id, level_id)?;
    } else {
        state
            .hierarchy
            .add_object_to_level(object_id.to_string(), name, level_id.to_string())?;
    }
    state
        .scene_mut()
        .set_object_level(object_id, Some(level_id.to_string()))?;
    state.dirty = true;

    log::info!("Objekt {} dem Geschoss {} zugeordnet", object_id, level_id);
    Ok(())
}

/// Löst die Geschoss-Zuordnung eines Objekts auf beiden Seiten.
/// Nicht zugeordnete Objekte sind ein No-op.
pub fn detach_object_from_level(state: &mut AppState, object_id: &str) {
    let registered = state.hierarchy.object_ref(object_id).is_some();
    let referenced = state
        .scene
        .object(object_id)
        .map(|o| o.level_id.is_some())
        .unwrap_or(false);
    if !registered && !referenced {
        log::debug!("Lösen: Objekt {} ist keinem Geschoss zugeordnet", object_id);
        return;
    }

    if referenced {
        state.record_undo_snapshot("Objekt-Zuordnung lösen");
        state.scene_mut().set_object_level(object_id, None).ok();
    }
    if registered {
        state.hierarchy.remove_object_from_level(object_id);
    }
    state.dirty = true;

    log::info!("Geschoss-Zuordnung von Objekt {} gelöst", object_id);
}
