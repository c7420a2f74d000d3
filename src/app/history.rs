//! Undo/Redo-History auf Snapshot-Basis.

use super::SelectionState;
use crate::core::SceneModel;
use std::sync::Arc;
use std::time::SystemTime;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1) —
/// der teure Szenen-Klon findet erst beim nächsten `Arc::make_mut()` in einem
/// Use-Case statt. Aufgezeichnete Snapshots können dadurch nie nachträglich
/// durch In-Place-Mutationen verfälscht werden: jede Mutation nach dem
/// Aufzeichnen löst den geteilten Zustand zuerst ab.
#[derive(Clone)]
pub struct Snapshot {
    /// Szenen-Modell (Arc-Klon für O(1)-Snapshot)
    pub scene: Arc<SceneModel>,
    /// Objekt-Selektion zum Zeitpunkt des Snapshots
    pub selection: SelectionState,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            scene: Arc::clone(&state.scene), // O(1): nur Arc-Ref-Count erhöhen
            selection: state.selection.clone(),
        }
    }

    /// Stellt den Snapshot wieder her (O(1) Arc-Zuweisung).
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.scene = self.scene;
        state.selection = self.selection;
    }
}

/// Ein History-Eintrag: Aktions-Label, Zeitstempel und Snapshot davor.
pub struct HistoryEntry {
    /// Beschriftung der Aktion (für Undo/Redo-Menüeinträge)
    pub label: String,
    /// Zeitpunkt der Aufzeichnung
    pub timestamp: SystemTime,
    /// Zustand vor der Aktion
    pub snapshot: Snapshot,
}

impl HistoryEntry {
    /// Erstellt einen Eintrag mit aktuellem Zeitstempel.
    pub fn new(label: String, snapshot: Snapshot) -> Self {
        Self {
            label,
            timestamp: SystemTime::now(),
            snapshot,
        }
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
///
/// Zwei Stapel mit einem impliziten Cursor dazwischen: Aufzeichnen einer
/// neuen Aktion verwirft den Redo-Stapel (lineare History ohne Verzweigung).
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Zeichnet einen Eintrag auf. Begrenzt auf `max_depth`, ältere
    /// Einträge werden verworfen; der Redo-Stapel wird geleert.
    pub fn record(&mut self, entry: HistoryEntry) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(entry);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Label des nächsten Undo-Schritts (für Menüeinträge).
    pub fn undo_label(&self) -> Option<&str> {
        self.undo_stack.last().map(|e| e.label.as_str())
    }

    /// Label des nächsten Redo-Schritts.
    pub fn redo_label(&self) -> Option<&str> {
        self.redo_stack.last().map(|e| e.label.as_str())
    }

    /// Nimmt den obersten Undo-Eintrag, legt `current` mit demselben Label
    /// auf den Redo-Stapel und gibt den wiederherzustellenden Snapshot zurück.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        if let Some(entry) = self.undo_stack.pop() {
            if self.redo_stack.len() >= self.max_depth {
                self.redo_stack.remove(0);
            }
            self.redo_stack
                .push(HistoryEntry::new(entry.label.clone(), current));
            Some(entry.snapshot)
        } else {
            None
        }
    }

    /// Nimmt den obersten Redo-Eintrag, legt `current` auf den Undo-Stapel
    /// und gibt den wiederherzustellenden Snapshot zurück.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        if let Some(entry) = self.redo_stack.pop() {
            if self.undo_stack.len() >= self.max_depth {
                self.undo_stack.remove(0);
            }
            self.undo_stack
                .push(HistoryEntry::new(entry.label.clone(), current));
            Some(entry.snapshot)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::core::{BimObject, BimObjectKind, SceneModel};
    use std::sync::Arc;

    fn make_snapshot_with_object_count(count: usize) -> Snapshot {
        let mut scene = SceneModel::new();
        for i in 1..=count {
            scene
                .add_object(BimObject::new(
                    format!("obj-{i}"),
                    BimObjectKind::Wall,
                    format!("Wand {i}"),
                ))
                .expect("Einfügen erwartet");
        }
        let mut state = AppState::new();
        state.scene = Arc::new(scene);
        Snapshot::from_state(&state)
    }

    fn entry(label: &str, count: usize) -> HistoryEntry {
        HistoryEntry::new(label.to_string(), make_snapshot_with_object_count(count))
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let history = EditHistory::new_with_capacity(10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn record_enables_undo() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record(entry("Objekt hinzufügen", 1));
        assert!(history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo_label(), Some("Objekt hinzufügen"));
    }

    #[test]
    fn undo_restores_previous_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record(entry("Objekt hinzufügen", 2));

        let current = make_snapshot_with_object_count(5);
        let restored = history
            .pop_undo_with_current(current)
            .expect("undo vorhanden");

        assert_eq!(restored.scene.object_count(), 2);
        assert!(!history.can_undo());
        assert!(history.can_redo());
        // Label wandert mit auf den Redo-Stapel
        assert_eq!(history.redo_label(), Some("Objekt hinzufügen"));
    }

    #[test]
    fn redo_restores_undone_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record(entry("Objekt hinzufügen", 2));

        let current_at_undo = make_snapshot_with_object_count(5);
        let _restored = history.pop_undo_with_current(current_at_undo);

        let current_at_redo = make_snapshot_with_object_count(2);
        let redone = history
            .pop_redo_with_current(current_at_redo)
            .expect("redo vorhanden");

        assert_eq!(redone.scene.object_count(), 5);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn new_record_clears_redo_stack() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record(entry("A", 1));

        let current = make_snapshot_with_object_count(3);
        let _restored = history.pop_undo_with_current(current);
        assert!(history.can_redo());

        history.record(entry("B", 7));
        assert!(!history.can_redo());
    }

    #[test]
    fn respects_max_depth() {
        let mut history = EditHistory::new_with_capacity(3);

        for i in 1..=5 {
            history.record(entry("Schritt", i));
        }

        // Nur 3 Undo-Schritte sollten möglich sein
        let mut undo_count = 0;
        while history.can_undo() {
            let current = make_snapshot_with_object_count(99);
            history.pop_undo_with_current(current);
            undo_count += 1;
        }
        assert_eq!(undo_count, 3);
    }

    #[test]
    fn pop_undo_on_empty_returns_none() {
        let mut history = EditHistory::new_with_capacity(10);
        let current = make_snapshot_with_object_count(1);
        assert!(history.pop_undo_with_current(current).is_none());
    }

    #[test]
    fn snapshot_apply_to_restores_state() {
        let mut scene = SceneModel::new();
        scene
            .add_object(BimObject::new(
                "obj-42".into(),
                BimObjectKind::Cabinet,
                "Hochschrank".into(),
            ))
            .expect("Einfügen erwartet");

        let mut original_state = AppState::new();
        original_state.scene = Arc::new(scene);
        original_state
            .selection
            .ids_mut()
            .insert("obj-42".to_string());

        let snap = Snapshot::from_state(&original_state);

        let mut target_state = AppState::new();
        snap.apply_to(&mut target_state);

        assert_eq!(target_state.scene.object_count(), 1);
        assert!(target_state.selection.selected_object_ids.contains("obj-42"));
    }

    #[test]
    fn recorded_snapshot_is_immune_to_later_mutation() {
        let mut state = AppState::new();
        state
            .scene_mut()
            .add_object(BimObject::new(
                "w1".into(),
                BimObjectKind::Wall,
                "Wand".into(),
            ))
            .expect("Einfügen erwartet");

        let mut history = EditHistory::new_with_capacity(10);
        history.record(HistoryEntry::new(
            "Löschen".into(),
            Snapshot::from_state(&state),
        ));

        // Mutation nach dem Aufzeichnen löst den geteilten Zustand ab
        state.scene_mut().remove_object("w1");
        assert_eq!(state.scene.object_count(), 0);

        let restored = history
            .pop_undo_with_current(Snapshot::from_state(&state))
            .expect("undo vorhanden");
        assert_eq!(restored.scene.object_count(), 1);
    }
}
