//! Writer für JSON-Projektdokumente.

use super::document::{ProjectDocument, SceneDocument, PROJECT_FORMAT_VERSION};
use crate::core::{HierarchyManager, SceneModel};
use anyhow::{Context, Result};

/// Baut das Projektdokument aus Szene und Hierarchie.
pub fn build_project_document(
    scene: &SceneModel,
    hierarchy: &HierarchyManager,
    name: Option<&str>,
) -> ProjectDocument {
    ProjectDocument {
        version: PROJECT_FORMAT_VERSION,
        name: name.map(str::to_string),
        scene: SceneDocument::from_model(scene),
        hierarchy: hierarchy.to_document(),
    }
}

/// Serialisiert Szene und Hierarchie als deterministisches, lesbares JSON.
pub fn write_project_json(
    scene: &SceneModel,
    hierarchy: &HierarchyManager,
    name: Option<&str>,
) -> Result<String> {
    let document = build_project_document(scene, hierarchy, name);
    serde_json::to_string_pretty(&document).context("Projektdokument nicht serialisierbar")
}
