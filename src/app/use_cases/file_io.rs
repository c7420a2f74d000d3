//! Use-Cases: Projekt laden und speichern.

use crate::app::history::EditHistory;
use crate::app::{AppState, SelectionState};
use crate::project;
use anyhow::{bail, Context, Result};
use std::sync::Arc;

/// Setzt den Zustand auf ein leeres Projekt zurück.
pub fn new_project(state: &mut AppState) {
    state.scene = Arc::new(crate::core::SceneModel::new());
    state.hierarchy = crate::core::HierarchyManager::new();
    state.selection = SelectionState::new();
    state.history = EditHistory::new_with_capacity(state.options.history_max_depth);
    state.project_path = None;
    state.dirty = false;
    log::info!("Neues Projekt angelegt");
}

/// Lädt ein Projektdokument und ersetzt Szene, Hierarchie und Selektion.
/// Die Undo-History beginnt leer.
pub fn load_project(state: &mut AppState, path: &str) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Projektdatei nicht lesbar: {path}"))?;
    let document = project::parse_project_json(&content)?;
    let (scene, hierarchy) = project::project_from_document(document)?;

    log::info!(
        "Projekt geladen: {} Objekte, {} Layer, {} Standorte ({})",
        scene.object_count(),
        scene.layer_count(),
        hierarchy.site_count(),
        path
    );

    state.scene = Arc::new(scene);
    state.hierarchy = hierarchy;
    state.selection = SelectionState::new();
    state.history = EditHistory::new_with_capacity(state.options.history_max_depth);
    state.project_path = Some(path.to_string());
    state.dirty = false;
    Ok(())
}

/// Speichert das Projekt unter dem gegebenen oder dem aktuellen Pfad.
pub fn save_project(state: &mut AppState, path: Option<String>) -> Result<()> {
    let Some(path) = path.or_else(|| state.project_path.clone()) else {
        bail!("Kein Speicherpfad: Projekt wurde noch nie gespeichert");
    };

    let json = project::write_project_json(&state.scene, &state.hierarchy, None)?;
    std::fs::write(&path, json).with_context(|| format!("Projektdatei nicht schreibbar: {path}"))?;

    state.project_path = Some(path.clone());
    state.dirty = false;
    log::info!("Projekt gespeichert nach: {}", path);
    Ok(())
}
