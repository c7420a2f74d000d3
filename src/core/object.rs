//! Platzierte Design-Objekte (Wände, Türen, Schränke, …).

use super::Transform;
use super::TransformPatch;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Geschlossene Menge der Element-Arten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BimObjectKind {
    /// Wand
    Wall,
    /// Tür
    Door,
    /// Fenster
    Window,
    /// Boden-/Deckenplatte
    Slab,
    /// Stütze
    Column,
    /// Träger
    Beam,
    /// Dach
    Roof,
    /// Treppe
    Stair,
    /// Schrank/Korpus
    Cabinet,
    /// Arbeitsplatte
    Countertop,
    /// Einbaugerät
    Appliance,
    /// Freistehendes Möbel
    Furniture,
}

impl BimObjectKind {
    /// Anzeigename der Element-Art.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Door => "door",
            Self::Window => "window",
            Self::Slab => "slab",
            Self::Column => "column",
            Self::Beam => "beam",
            Self::Roof => "roof",
            Self::Stair => "stair",
            Self::Cabinet => "cabinet",
            Self::Countertop => "countertop",
            Self::Appliance => "appliance",
            Self::Furniture => "furniture",
        }
    }
}

/// Ein platziertes Design-Element im Szenen-Modell.
///
/// Die Geometrie ist werkzeugspezifisch und für den Store opak; Layer und
/// Geschoss sind reine ID-Referenzen, kein Besitz (Löschen eines Layers
/// löst nur die Referenz, nie das Objekt).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BimObject {
    /// Eindeutige Objekt-ID (vom Aufrufer vergeben, typischerweise UUID)
    pub id: String,
    /// Element-Art
    pub kind: BimObjectKind,
    /// Anzeigename
    pub name: String,
    /// Werkzeugspezifische Geometrie-Nutzlast (opak)
    #[serde(default)]
    pub geometry: serde_json::Value,
    /// Material-Referenz (ID)
    #[serde(default)]
    pub material_id: Option<String>,
    /// Freie Eigenschaften (deterministische Reihenfolge)
    #[serde(default)]
    pub properties: IndexMap<String, String>,
    /// Layer-Referenz (ID)
    #[serde(default)]
    pub layer_id: Option<String>,
    /// Geschoss-Referenz (ID)
    #[serde(default)]
    pub level_id: Option<String>,
    /// 3D-Transformation
    #[serde(default)]
    pub transform: Transform,
}

impl BimObject {
    /// Erstellt ein neues Objekt ohne Layer-/Geschoss-Zuordnung.
    pub fn new(id: String, kind: BimObjectKind, name: String) -> Self {
        Self {
            id,
            kind,
            name,
            geometry: serde_json::Value::Null,
            material_id: None,
            properties: IndexMap::new(),
            layer_id: None,
            level_id: None,
            transform: Transform::default(),
        }
    }

    /// Übernimmt die im Patch gesetzten Felder (shallow merge).
    ///
    /// `properties` wird als Ganzes ersetzt, nicht elementweise gemischt —
    /// wer einzelne Einträge erhalten will, übergibt die vollständige Map.
    pub fn apply_patch(&mut self, patch: ObjectPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(geometry) = patch.geometry {
            self.geometry = geometry;
        }
        if let Some(material_id) = patch.material_id {
            self.material_id = Some(material_id);
        }
        if let Some(properties) = patch.properties {
            self.properties = properties;
        }
        if let Some(layer_id) = patch.layer_id {
            self.layer_id = Some(layer_id);
        }
        if let Some(transform) = patch.transform {
            self.transform.apply(&transform);
        }
    }
}

/// Teil-Update eines Objekts; `None`-Felder bleiben unverändert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectPatch {
    /// Neuer Anzeigename
    pub name: Option<String>,
    /// Neue Element-Art
    pub kind: Option<BimObjectKind>,
    /// Neue Geometrie-Nutzlast
    pub geometry: Option<serde_json::Value>,
    /// Neue Material-Referenz
    pub material_id: Option<String>,
    /// Vollständiger Ersatz der Eigenschaften-Map
    pub properties: Option<IndexMap<String, String>>,
    /// Neue Layer-Referenz
    pub layer_id: Option<String>,
    /// Teil-Update der Transformation
    pub transform: Option<TransformPatch>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_patch_merge_keeps_unset_fields() {
        let mut obj = BimObject::new("w1".into(), BimObjectKind::Wall, "Wand Nord".into());
        obj.material_id = Some("mat-beton".into());
        obj.properties.insert("thickness".into(), "0.24".into());

        obj.apply_patch(ObjectPatch {
            name: Some("Wand Nord-Ost".into()),
            ..ObjectPatch::default()
        });

        assert_eq!(obj.name, "Wand Nord-Ost");
        assert_eq!(obj.material_id.as_deref(), Some("mat-beton"));
        assert_eq!(obj.properties.get("thickness").map(String::as_str), Some("0.24"));
    }

    #[test]
    fn test_patch_replaces_properties_wholesale() {
        let mut obj = BimObject::new("c1".into(), BimObjectKind::Cabinet, "Unterschrank".into());
        obj.properties.insert("width".into(), "600".into());
        obj.properties.insert("depth".into(), "560".into());

        let mut replacement = IndexMap::new();
        replacement.insert("width".into(), "800".into());
        obj.apply_patch(ObjectPatch {
            properties: Some(replacement),
            ..ObjectPatch::default()
        });

        // Kein Mischen: "depth" ist weg
        assert_eq!(obj.properties.len(), 1);
        assert_eq!(obj.properties.get("width").map(String::as_str), Some("800"));
    }

    #[test]
    fn test_patch_transform_merges_components() {
        let mut obj = BimObject::new("d1".into(), BimObjectKind::Door, "Tür".into());
        obj.transform = Transform::at_position(Vec3::new(1.0, 0.0, 0.0));

        obj.apply_patch(ObjectPatch {
            transform: Some(TransformPatch {
                scale: Some(Vec3::splat(2.0)),
                ..TransformPatch::default()
            }),
            ..ObjectPatch::default()
        });

        assert_eq!(obj.transform.position, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(obj.transform.scale, Vec3::splat(2.0));
    }
}
