//! AppCommand-Enum für den zentralen Mutations-Datenfluss.

use crate::core::{BimObject, Building, Layer, Level, ObjectPatch, Site, TransformPatch};
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // ── Projekt-I/O ─────────────────────────────────────────────
    /// Leeres Projekt anlegen (verwirft Szene, Hierarchie und History)
    NewProject,
    /// Projektdokument laden
    LoadProject { path: String },
    /// Projekt speichern (None = aktueller Pfad, Some(p) = neuer Pfad)
    SaveProject { path: Option<String> },

    // ── Objekte ─────────────────────────────────────────────────
    /// Neues Objekt in die Szene einfügen
    AddObject { object: BimObject },
    /// Objekt löschen (inklusive Selektion und Geschoss-Registrierung)
    DeleteObject { id: String },
    /// Alle selektierten Objekte löschen
    DeleteSelectedObjects,
    /// Teil-Update eines Objekts (shallow merge)
    UpdateObject { id: String, patch: ObjectPatch },
    /// Nur Transform-Komponenten eines Objekts ändern
    TransformObject { id: String, patch: TransformPatch },

    // ── Objekt-Selektion ────────────────────────────────────────
    /// Objekt selektieren (additiv oder ersetzend)
    SelectObject { id: String, additive: bool },
    /// Mehrere Objekte selektieren (ersetzt die Selektion)
    SelectObjects { ids: Vec<String> },
    /// Objekt-Selektion aufheben
    DeselectAllObjects,

    // ── Layer ───────────────────────────────────────────────────
    /// Neuen Layer anlegen
    AddLayer { layer: Layer },
    /// Layer entfernen (Objekt-Referenzen werden gelöst)
    RemoveLayer { id: String },
    /// Layer-Sichtbarkeit umschalten
    ToggleLayerVisibility { id: String },
    /// Layer sperren oder entsperren
    SetLayerLocked { id: String, locked: bool },
    /// Aktiven Layer setzen (None = keiner)
    SetActiveLayer { id: Option<String> },

    // ── Hierarchie-Struktur ─────────────────────────────────────
    /// Standort hinzufügen
    AddSite { site: Site },
    /// Gebäude unter seinem Standort hinzufügen
    AddBuilding { building: Building },
    /// Geschoss unter seinem Gebäude hinzufügen
    AddLevel { level: Level },
    /// Standort samt Unterbaum entfernen
    RemoveSite { id: String },
    /// Gebäude samt Geschossen entfernen
    RemoveBuilding { id: String },
    /// Geschoss entfernen (Objekte werden nur gelöst)
    RemoveLevel { id: String },
    /// Gebäude an anderen Standort umhängen
    MoveBuilding { id: String, target_site_id: String },
    /// Geschoss an anderes Gebäude umhängen
    MoveLevel { id: String, target_building_id: String },
    /// Objekt-Registrierung an anderes Geschoss umhängen
    MoveObject { id: String, target_level_id: String },
    /// Geschoss-Reihenfolge eines Gebäudes ersetzen
    ReorderLevels {
        building_id: String,
        ordered_level_ids: Vec<String>,
    },
    /// Knoten umbenennen
    RenameNode { id: String, name: String },
    /// Validierten Drag-und-Drop ausführen
    DropNode {
        source_id: String,
        target_id: String,
    },

    // ── Hierarchie-Interaktion ──────────────────────────────────
    /// Knoten im Baum selektieren
    SelectNode { id: String, additive: bool },
    /// Knoten aus der Baum-Selektion entfernen
    DeselectNode { id: String },
    /// Baum-Selektion aufheben
    ClearNodeSelection,
    /// Expansion eines Knotens umschalten
    ToggleNodeExpansion { id: String },
    /// Alle Container-Knoten aufklappen
    ExpandAllNodes,
    /// Alle Knoten zuklappen
    CollapseAllNodes,
    /// Sichtbarkeit eines Knotens umschalten
    ToggleNodeVisibility { id: String },

    // ── Platzierung (Szene ↔ Hierarchie) ────────────────────────
    /// Objekt einem Geschoss zuordnen (Szene und Hierarchie in einem Schritt)
    AssignObjectToLevel {
        object_id: String,
        level_id: String,
    },
    /// Geschoss-Zuordnung eines Objekts lösen
    DetachObjectFromLevel { object_id: String },

    // ── History ─────────────────────────────────────────────────
    /// Undo: Letzte Aktion rückgängig machen
    Undo,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    Redo,

    // ── Optionen ────────────────────────────────────────────────
    /// Optionen anwenden und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
