//! Selektion, Expansion, Sichtbarkeit und Drag-und-Drop der Hierarchie.

use super::{ChangeKind, HierarchyError, HierarchyEvent, HierarchyManager, NodeType};
use indexmap::IndexSet;

impl HierarchyManager {
    // ── Selektion ───────────────────────────────────────────────────

    /// Selektiert einen Knoten; `additive` erweitert die bestehende Selektion.
    ///
    /// Ohne `allow_multi_select` ersetzt jede Selektion die vorherige.
    /// Mit `expand_on_select` werden alle Vorfahren aufgeklappt.
    /// Fehlende IDs sind ein No-op.
    pub fn select_node(&mut self, node_id: &str, additive: bool) {
        if !self.contains_node(node_id) {
            return;
        }
        if !additive || !self.config.allow_multi_select {
            self.selected.clear();
        }
        self.selected.insert(node_id.to_string());

        if self.config.expand_on_select {
            let path = self.path_to_node(node_id);
            // Vorfahren aufklappen, den Knoten selbst nicht
            for ancestor_id in path.iter().rev().skip(1) {
                self.expanded.insert(ancestor_id.clone());
            }
        }
        self.emit(HierarchyEvent::simple(
            ChangeKind::Select,
            node_id.to_string(),
        ));
    }

    /// Entfernt einen Knoten aus der Selektion. Fehlende IDs sind ein No-op.
    pub fn deselect_node(&mut self, node_id: &str) {
        if !self.selected.shift_remove(node_id) {
            return;
        }
        if self.config.collapse_on_deselect {
            self.expanded.shift_remove(node_id);
        }
        self.emit(HierarchyEvent::simple(
            ChangeKind::Select,
            node_id.to_string(),
        ));
    }

    /// Leert die Selektion vollständig.
    pub fn clear_selection(&mut self) {
        let cleared: Vec<String> = self.selected.drain(..).collect();
        for node_id in cleared {
            self.emit(HierarchyEvent::simple(ChangeKind::Select, node_id));
        }
    }

    /// Aktuell selektierte Knoten-IDs in Selektions-Reihenfolge.
    pub fn selected_ids(&self) -> &IndexSet<String> {
        &self.selected
    }

    /// Prüft ob ein Knoten selektiert ist.
    pub fn is_selected(&self, node_id: &str) -> bool {
        self.selected.contains(node_id)
    }

    // ── Expansion ───────────────────────────────────────────────────

    /// Klappt einen Knoten auf. Fehlende IDs sind ein No-op.
    pub fn expand_node(&mut self, node_id: &str) {
        if !self.contains_node(node_id) {
            return;
        }
        if self.expanded.insert(node_id.to_string()) {
            self.emit(HierarchyEvent::simple(
                ChangeKind::Expand,
                node_id.to_string(),
            ));
        }
    }

    /// Klappt einen Knoten zu. Fehlende IDs sind ein No-op.
    pub fn collapse_node(&mut self, node_id: &str) {
        if self.expanded.shift_remove(node_id) {
            self.emit(HierarchyEvent::simple(
                ChangeKind::Expand,
                node_id.to_string(),
            ));
        }
    }

    /// Schaltet die Expansion eines Knotens um.
    pub fn toggle_expansion(&mut self, node_id: &str) {
        if self.is_expanded(node_id) {
            self.collapse_node(node_id);
        } else {
            self.expand_node(node_id);
        }
    }

    /// Klappt alle Container-Knoten (Standorte, Gebäude, Geschosse) auf.
    pub fn expand_all(&mut self) {
        let container_ids: Vec<String> = self
            .all_nodes()
            .into_iter()
            .filter(|n| n.node_type != NodeType::Object)
            .map(|n| n.id)
            .collect();
        for node_id in container_ids {
            self.expand_node(&node_id);
        }
    }

    /// Klappt alle Knoten zu.
    pub fn collapse_all(&mut self) {
        let expanded: Vec<String> = self.expanded.iter().cloned().collect();
        for node_id in expanded {
            self.collapse_node(&node_id);
        }
    }

    /// Aufgeklappte Knoten-IDs.
    pub fn expanded_ids(&self) -> &IndexSet<String> {
        &self.expanded
    }

    /// Prüft ob ein Knoten aufgeklappt ist.
    pub fn is_expanded(&self, node_id: &str) -> bool {
        self.expanded.contains(node_id)
    }

    // ── Sichtbarkeit & Sperren ──────────────────────────────────────

    /// Schaltet die Sichtbarkeit eines Knotens um; gibt den neuen Zustand
    /// zurück. Für Geschosse ist das Flag zugleich die Geschoss-Sichtbarkeit
    /// (es gibt keine zweite Kopie). Fehlende IDs sind ein No-op.
    pub fn toggle_visibility(&mut self, node_id: &str) -> Option<bool> {
        let new_state = self.flip_visible(node_id)?;
        self.emit(HierarchyEvent::simple(
            ChangeKind::Visibility,
            node_id.to_string(),
        ));
        Some(new_state)
    }

    /// Sperrt oder entsperrt einen Knoten; gibt `true` zurück falls gefunden.
    pub fn set_locked(&mut self, node_id: &str, locked: bool) -> bool {
        if let Some(site) = self.sites.get_mut(node_id) {
            site.locked = locked;
        } else if let Some(building) = self.buildings.get_mut(node_id) {
            building.locked = locked;
        } else if let Some(level) = self.levels.get_mut(node_id) {
            level.locked = locked;
        } else if let Some(object_ref) = self.object_refs.get_mut(node_id) {
            object_ref.locked = locked;
        } else {
            return false;
        }
        true
    }

    fn flip_visible(&mut self, node_id: &str) -> Option<bool> {
        if let Some(site) = self.sites.get_mut(node_id) {
            site.visible = !site.visible;
            Some(site.visible)
        } else if let Some(building) = self.buildings.get_mut(node_id) {
            building.visible = !building.visible;
            Some(building.visible)
        } else if let Some(level) = self.levels.get_mut(node_id) {
            level.visible = !level.visible;
            Some(level.visible)
        } else if let Some(object_ref) = self.object_refs.get_mut(node_id) {
            object_ref.visible = !object_ref.visible;
            Some(object_ref.visible)
        } else {
            None
        }
    }

    // ── Drag-und-Drop ───────────────────────────────────────────────

    /// Prüft ob ein Knoten auf einen Ziel-Knoten gezogen werden darf.
    ///
    /// Erlaubt sind genau die Paarungen Gebäude→Standort, Geschoss→Gebäude
    /// und Objekt→Geschoss; Standorte sind nie verschiebbar. Ohne
    /// `allow_drag_drop` ist jede Paarung verboten.
    pub fn can_drop(&self, source_id: &str, target_id: &str) -> bool {
        if !self.config.allow_drag_drop || source_id == target_id {
            return false;
        }
        matches!(
            (self.node_type_of(source_id), self.node_type_of(target_id)),
            (Some(NodeType::Building), Some(NodeType::Site))
                | (Some(NodeType::Level), Some(NodeType::Building))
                | (Some(NodeType::Object), Some(NodeType::Level))
        )
    }

    /// Führt einen validierten Drop aus und delegiert an die passende
    /// Move-Operation.
    pub fn drop_node(&mut self, source_id: &str, target_id: &str) -> Result<(), HierarchyError> {
        if !self.can_drop(source_id, target_id) {
            return Err(HierarchyError::InvalidDrop {
                source_id: source_id.to_string(),
                target_id: target_id.to_string(),
            });
        }
        match self.node_type_of(source_id) {
            Some(NodeType::Building) => self.move_building(source_id, target_id),
            Some(NodeType::Level) => self.move_level(source_id, target_id),
            Some(NodeType::Object) => self.move_object(source_id, target_id),
            // can_drop hat alle anderen Paarungen bereits abgewiesen
            _ => unreachable!("can_drop lässt nur Building/Level/Object als Quelle zu"),
        }
    }
}
