//! Zeichnungs-Layer für Gruppierung, Sichtbarkeit und Sperren.

use serde::{Deserialize, Serialize};

/// Ein Layer-Eintrag der flachen Layer-Sammlung.
///
/// Die Mitgliedsliste wird nicht gespeichert, sondern über die
/// `layer_id`-Referenzen der Objekte abgeleitet (eine Quelle der Wahrheit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Eindeutige Layer-ID
    pub id: String,
    /// Anzeigename
    pub name: String,
    /// Anzeigefarbe (RGBA)
    pub color: [f32; 4],
    /// Sichtbarkeit im Viewport
    pub visible: bool,
    /// Gesperrte Layer sind nicht editierbar
    pub locked: bool,
}

impl Layer {
    /// Erstellt einen sichtbaren, nicht gesperrten Layer.
    pub fn new(id: String, name: String, color: [f32; 4]) -> Self {
        Self {
            id,
            name,
            color,
            visible: true,
            locked: false,
        }
    }
}
