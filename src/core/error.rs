//! Typisierte Fehler der Kern-Komponenten.

use thiserror::Error;

/// Fehler der Hierarchie-Verwaltung (Standort → Gebäude → Geschoss → Objekt).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HierarchyError {
    /// Deklarierter Eltern-Knoten existiert nicht
    #[error("Eltern-Knoten nicht gefunden: {0}")]
    ParentNotFound(String),
    /// Quelle oder Ziel der Operation existiert nicht
    #[error("Eintrag nicht gefunden: {0}")]
    EntityNotFound(String),
    /// ID kollidiert mit einem bestehenden Knoten
    #[error("ID bereits vergeben: {0}")]
    DuplicateId(String),
    /// Drag-und-Drop-Paarung ist nicht erlaubt
    #[error("Ungültiger Drop: {source_id} auf {target_id}")]
    InvalidDrop {
        source_id: String,
        target_id: String,
    },
    /// Neuordnung ist keine Permutation der bestehenden Geschoss-IDs
    #[error("Ungültige Geschoss-Neuordnung für Gebäude {building_id}")]
    InvalidReorder { building_id: String },
}

/// Fehler des Szenen-Modells (Objekte und Layer).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// Objekt- oder Layer-ID kollidiert mit einem bestehenden Eintrag
    #[error("ID bereits vergeben: {0}")]
    DuplicateId(String),
    /// Objekt existiert nicht
    #[error("Objekt nicht gefunden: {0}")]
    ObjectNotFound(String),
    /// Layer existiert nicht
    #[error("Layer nicht gefunden: {0}")]
    LayerNotFound(String),
}
