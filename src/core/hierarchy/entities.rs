//! Konkrete Hierarchie-Entitäten: Standort, Gebäude, Geschoss, Objekt-Referenz.
//!
//! Die Entitäten sind die einzige Quelle der Wahrheit; die generische
//! Knoten-Sicht (`NodeView`) wird bei Bedarf daraus abgeleitet und nie
//! separat gespeichert.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Knoten-Art im Hierarchie-Baum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    /// Standort (Wurzel)
    Site,
    /// Gebäude
    Building,
    /// Geschoss
    Level,
    /// Platziertes Objekt (Referenz in ein Geschoss)
    Object,
}

/// Ein Standort — Wurzel des Baums, besitzt Gebäude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Eindeutige ID
    pub id: String,
    /// Anzeigename
    pub name: String,
    /// Geographische Breite (Grad)
    pub latitude: f64,
    /// Geographische Länge (Grad)
    pub longitude: f64,
    /// Sichtbarkeit
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Gesperrt gegen Strukturänderungen (UI-Hinweis)
    #[serde(default)]
    pub locked: bool,
    /// Freie Metadaten
    #[serde(default)]
    pub metadata: IndexMap<String, String>,
    /// IDs der Gebäude in Anzeige-Reihenfolge
    #[serde(default)]
    pub buildings: Vec<String>,
}

impl Site {
    /// Erstellt einen Standort ohne Gebäude.
    pub fn new(id: String, name: String, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            name,
            latitude,
            longitude,
            visible: true,
            locked: false,
            metadata: IndexMap::new(),
            buildings: Vec::new(),
        }
    }
}

/// Ein Gebäude — gehört genau einem Standort, besitzt Geschosse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    /// Eindeutige ID
    pub id: String,
    /// Anzeigename
    pub name: String,
    /// ID des besitzenden Standorts
    pub site_id: String,
    /// Sichtbarkeit
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Gesperrt gegen Strukturänderungen (UI-Hinweis)
    #[serde(default)]
    pub locked: bool,
    /// Freie Metadaten
    #[serde(default)]
    pub metadata: IndexMap<String, String>,
    /// IDs der Geschosse in Stapel-Reihenfolge (unten → oben)
    #[serde(default)]
    pub levels: Vec<String>,
}

impl Building {
    /// Erstellt ein Gebäude ohne Geschosse.
    pub fn new(id: String, name: String, site_id: String) -> Self {
        Self {
            id,
            name,
            site_id,
            visible: true,
            locked: false,
            metadata: IndexMap::new(),
            levels: Vec::new(),
        }
    }
}

/// Ein Geschoss — gehört genau einem Gebäude, referenziert platzierte Objekte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Eindeutige ID
    pub id: String,
    /// Anzeigename
    pub name: String,
    /// ID des besitzenden Gebäudes
    pub building_id: String,
    /// Höhenlage der Oberkante Rohboden (Meter)
    pub elevation: f32,
    /// Lichte Geschosshöhe (Meter)
    pub height: f32,
    /// Sichtbarkeit — das ist zugleich die Sichtbarkeit des Geschoss-Knotens
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Gesperrt gegen Strukturänderungen (UI-Hinweis)
    #[serde(default)]
    pub locked: bool,
    /// Freie Metadaten
    #[serde(default)]
    pub metadata: IndexMap<String, String>,
    /// IDs der platzierten Objekte in Registrierungs-Reihenfolge
    #[serde(default)]
    pub objects: Vec<String>,
}

impl Level {
    /// Erstellt ein leeres Geschoss.
    pub fn new(id: String, name: String, building_id: String, elevation: f32, height: f32) -> Self {
        Self {
            id,
            name,
            building_id,
            elevation,
            height,
            visible: true,
            locked: false,
            metadata: IndexMap::new(),
            objects: Vec::new(),
        }
    }
}

/// Leichte Referenz auf ein platziertes Objekt im Baum.
///
/// Das Objekt selbst lebt im Szenen-Modell; der Baum kennt nur ID,
/// Anzeigename und das besitzende Geschoss. Nicht Teil der Serialisierung —
/// beim Import werden Objekte neu registriert.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectRef {
    /// Objekt-ID (identisch mit der Szenen-ID)
    pub id: String,
    /// Anzeigename im Baum
    pub name: String,
    /// ID des besitzenden Geschosses
    pub level_id: String,
    /// Sichtbarkeit
    pub visible: bool,
    /// Gesperrt (UI-Hinweis)
    pub locked: bool,
}

impl ObjectRef {
    /// Erstellt eine sichtbare Objekt-Referenz.
    pub fn new(id: String, name: String, level_id: String) -> Self {
        Self {
            id,
            name,
            level_id,
            visible: true,
            locked: false,
        }
    }
}

/// Generische, abgeleitete Sicht auf einen Hierarchie-Knoten.
///
/// Wird bei jeder Abfrage frisch aus der backenden Entität und den
/// Selektions-/Expansions-Mengen aufgebaut; es gibt keinen zweiten
/// gespeicherten Zustand, der driften könnte.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeView {
    /// Knoten-ID (identisch mit der Entitäts-ID)
    pub id: String,
    /// Knoten-Art
    pub node_type: NodeType,
    /// Anzeigename (aus der Entität)
    pub name: String,
    /// Eltern-Knoten (None für Standorte)
    pub parent_id: Option<String>,
    /// Kind-IDs in Anzeige-Reihenfolge
    pub children: Vec<String>,
    /// Aufgeklappt im Baum
    pub expanded: bool,
    /// Sichtbar
    pub visible: bool,
    /// Gesperrt
    pub locked: bool,
    /// Selektiert
    pub selected: bool,
    /// Freie Metadaten (Kopie aus der Entität)
    pub metadata: IndexMap<String, String>,
}

/// Konfiguration des Hierarchie-Verhaltens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyConfig {
    /// Mehrfachselektion erlauben (additive Selektion)
    #[serde(default = "default_true")]
    pub allow_multi_select: bool,
    /// Drag-und-Drop-Umhängen erlauben
    #[serde(default = "default_true")]
    pub allow_drag_drop: bool,
    /// Vorfahren beim Selektieren automatisch aufklappen
    #[serde(default = "default_true")]
    pub expand_on_select: bool,
    /// Knoten beim Deselektieren zuklappen
    #[serde(default)]
    pub collapse_on_deselect: bool,
    /// Wurzelknoten in der Baumansicht zeigen (reiner UI-Hinweis)
    #[serde(default = "default_true")]
    pub show_root_node: bool,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            allow_multi_select: true,
            allow_drag_drop: true,
            expand_on_select: true,
            collapse_on_deselect: false,
            show_root_node: true,
        }
    }
}

/// Serde-Default für Sichtbarkeits- und Konfigurations-Flags.
fn default_true() -> bool {
    true
}
