//! Reader für JSON-Projektdokumente.

use super::document::{ProjectDocument, PROJECT_FORMAT_VERSION};
use crate::core::{HierarchyManager, SceneModel};
use anyhow::{bail, Context, Result};

/// Parst ein Projektdokument aus JSON und prüft die Format-Version.
pub fn parse_project_json(json: &str) -> Result<ProjectDocument> {
    let document: ProjectDocument =
        serde_json::from_str(json).context("Projektdokument ist kein gültiges JSON")?;
    if document.version > PROJECT_FORMAT_VERSION {
        bail!(
            "Nicht unterstützte Dokumentversion {} (erwartet ≤ {})",
            document.version,
            PROJECT_FORMAT_VERSION
        );
    }
    Ok(document)
}

/// Baut Szene und Hierarchie aus einem Dokument auf.
///
/// Die Hierarchie wird auf beidseitige Verknüpfung geprüft; anschließend
/// werden alle Objekte mit gültiger `level_id` im Baum registriert.
/// Verwaiste Geschoss-Referenzen werden gelöst.
pub fn project_from_document(
    document: ProjectDocument,
) -> Result<(SceneModel, HierarchyManager)> {
    let mut scene = document
        .scene
        .into_model()
        .context("Szenen-Anteil des Dokuments ist inkonsistent")?;
    let mut hierarchy = HierarchyManager::from_document(document.hierarchy)
        .context("Hierarchie-Anteil des Dokuments ist inkonsistent")?;

    // Objekte anhand ihrer Geschoss-Referenz neu registrieren
    let placements: Vec<(String, String, String)> = scene
        .objects_iter()
        .filter_map(|o| {
            o.level_id
                .as_ref()
                .map(|level_id| (o.id.clone(), o.name.clone(), level_id.clone()))
        })
        .collect();
    let mut orphaned = 0usize;
    for (object_id, name, level_id) in placements {
        if hierarchy.level(&level_id).is_some() {
            hierarchy
                .add_object_to_level(object_id, name, level_id)
                .context("Objekt-Registrierung fehlgeschlagen")?;
        } else {
            scene.set_object_level(&object_id, None).ok();
            orphaned += 1;
        }
    }
    if orphaned > 0 {
        log::warn!(
            "{} Objekte verwiesen auf nicht vorhandene Geschosse, Referenzen gelöst",
            orphaned
        );
    }

    Ok((scene, hierarchy))
}
