//! Serde-Typen des Projektdokuments.

use crate::core::{BimObject, HierarchyDocument, Layer, SceneError, SceneModel};
use serde::{Deserialize, Serialize};

/// Aktuelle Version des Dokumentformats.
pub const PROJECT_FORMAT_VERSION: u32 = 1;

/// Vollständiges Projektdokument: Szene und Hierarchie.
///
/// Die Hierarchie enthält keine Objekte — die leben in der Szenen-Sammlung
/// und werden beim Laden anhand ihrer `level_id` neu registriert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDocument {
    /// Format-Version (für spätere Migrationen)
    pub version: u32,
    /// Projektname (optional)
    #[serde(default)]
    pub name: Option<String>,
    /// Szenen-Anteil: Objekte und Layer
    pub scene: SceneDocument,
    /// Hierarchie-Anteil: Standorte, Gebäude, Geschosse
    pub hierarchy: HierarchyDocument,
}

/// Serialisierte Gestalt des Szenen-Modells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    /// Objekte in Einfügereihenfolge
    #[serde(default)]
    pub objects: Vec<BimObject>,
    /// Layer in Einfügereihenfolge
    #[serde(default)]
    pub layers: Vec<Layer>,
    /// Aktiver Layer (ID)
    #[serde(default)]
    pub active_layer_id: Option<String>,
}

impl SceneDocument {
    /// Exportiert das Szenen-Modell in Einfügereihenfolge.
    pub fn from_model(scene: &SceneModel) -> Self {
        Self {
            objects: scene.objects_iter().cloned().collect(),
            layers: scene.layers_iter().cloned().collect(),
            active_layer_id: scene.active_layer_id().map(str::to_string),
        }
    }

    /// Baut das Szenen-Modell wieder auf und prüft dabei ID-Eindeutigkeit.
    ///
    /// Referenzen auf nicht vorhandene Layer werden gelöst statt das Laden
    /// abzubrechen (Dokumente fremder Herkunft).
    pub fn into_model(self) -> Result<SceneModel, SceneError> {
        let mut scene = SceneModel::new();
        for layer in self.layers {
            scene.add_layer(layer)?;
        }
        for mut object in self.objects {
            if let Some(ref layer_id) = object.layer_id {
                if scene.layer(layer_id).is_none() {
                    object.layer_id = None;
                }
            }
            scene.add_object(object)?;
        }
        if let Some(active) = self.active_layer_id {
            if scene.layer(&active).is_some() {
                scene.set_active_layer(Some(active))?;
            }
        }
        Ok(scene)
    }
}
