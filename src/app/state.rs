//! Application State — zentrale Datenhaltung.

use super::history::{EditHistory, HistoryEntry, Snapshot};
use super::CommandLog;
use crate::core::{HierarchyManager, SceneModel};
use crate::shared::EditorOptions;
use indexmap::IndexSet;
use std::sync::Arc;

/// Auswahlbezogener Anwendungszustand für Szenen-Objekte.
///
/// Die Menge ist die einzige Quelle der Wahrheit — Objekte tragen kein
/// eigenes Selektions-Flag.
#[derive(Clone, Default)]
pub struct SelectionState {
    /// Menge der aktuell selektierten Objekt-IDs (Arc für O(1)-Clone im Snapshot)
    pub selected_object_ids: Arc<IndexSet<String>>,
    /// Letztes selektiertes Objekt als Anker für additive Selektion
    pub selection_anchor_object_id: Option<String>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            selected_object_ids: Arc::new(IndexSet::new()),
            selection_anchor_object_id: None,
        }
    }

    /// Gibt eine mutable Referenz auf die Menge zurück (CoW: klont nur wenn nötig).
    ///
    /// Alle Mutationen der Selektion gehen über diese Methode, damit der
    /// Arc-Klon im History-Snapshot O(1) bleibt.
    #[inline]
    pub fn ids_mut(&mut self) -> &mut IndexSet<String> {
        Arc::make_mut(&mut self.selected_object_ids)
    }
}

/// Hauptzustand der Anwendung.
pub struct AppState {
    /// Szenen-Modell (Arc für O(1)-Undo-Snapshots, CoW via `make_mut`)
    pub scene: Arc<SceneModel>,
    /// Räumliche Hierarchie (Standort → Gebäude → Geschoss → Objekt)
    pub hierarchy: HierarchyManager,
    /// Objekt-Selektion
    pub selection: SelectionState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Pfad des aktuell geladenen Projekts (für Speichern ohne Pfadangabe)
    pub project_path: Option<String>,
    /// Ungespeicherte Änderungen vorhanden
    pub dirty: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State.
    pub fn new() -> Self {
        let options = EditorOptions::default();
        Self {
            scene: Arc::new(SceneModel::new()),
            hierarchy: HierarchyManager::new(),
            selection: SelectionState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.history_max_depth),
            options,
            project_path: None,
            dirty: false,
        }
    }

    /// Gibt eine mutable Referenz auf die Szene zurück (CoW: klont nur wenn
    /// ein History-Snapshot den Zustand noch teilt).
    #[inline]
    pub fn scene_mut(&mut self) -> &mut SceneModel {
        Arc::make_mut(&mut self.scene)
    }

    /// Gibt die Anzahl der Objekte zurück (für UI-Anzeige).
    pub fn object_count(&self) -> usize {
        self.scene.object_count()
    }

    /// Gibt die Anzahl der Layer zurück (für UI-Anzeige).
    pub fn layer_count(&self) -> usize {
        self.scene.layer_count()
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    /// Reduziert Boilerplate in mutierenden Use-Cases.
    pub fn record_undo_snapshot(&mut self, label: &str) {
        let snap = Snapshot::from_state(self);
        self.history.record(HistoryEntry::new(label.to_string(), snap));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
