//! Die räumliche Hierarchie: Standort → Gebäude → Geschoss → Objekt.
//!
//! Eltern-Kind-Kanten werden genau einmal pro Richtung gehalten (Kind-Liste
//! auf der Eltern-Entität, Eltern-ID auf der Kind-Entität) und ausschließlich
//! innerhalb der Methoden hier mutiert — beide Richtungen ändern sich damit
//! in einem Schritt, ein einseitiger Zustand ist nicht konstruierbar.

pub mod entities;
pub mod events;
mod interaction;

pub use entities::{Building, HierarchyConfig, Level, NodeType, NodeView, ObjectRef, Site};
pub use events::{ChangeKind, ChangeNotifier, HierarchyEvent, SubscriberId};

use super::HierarchyError;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Verwaltet den Hierarchie-Baum samt Selektion, Expansion und Benachrichtigung.
#[derive(Debug, Default)]
pub struct HierarchyManager {
    /// Alle Standorte, indexiert nach ID
    sites: IndexMap<String, Site>,
    /// Alle Gebäude, indexiert nach ID
    buildings: IndexMap<String, Building>,
    /// Alle Geschosse, indexiert nach ID
    levels: IndexMap<String, Level>,
    /// Objekt-Referenzen der Geschosse, indexiert nach Objekt-ID
    object_refs: IndexMap<String, ObjectRef>,
    /// Aufgeklappte Knoten (einzige Quelle der Wahrheit)
    expanded: IndexSet<String>,
    /// Selektierte Knoten (einzige Quelle der Wahrheit)
    selected: IndexSet<String>,
    /// Verhaltens-Konfiguration
    config: HierarchyConfig,
    /// Abonnenten für Änderungs-Ereignisse
    notifier: ChangeNotifier,
}

/// Ergebnis einer kaskadierenden Entfernung.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemovalResult {
    /// IDs entfernter Standorte
    pub removed_sites: Vec<String>,
    /// IDs entfernter Gebäude
    pub removed_buildings: Vec<String>,
    /// IDs entfernter Geschosse
    pub removed_levels: Vec<String>,
    /// IDs der Objekte, deren Geschoss-Registrierung gelöst wurde.
    /// Die Objekte selbst bleiben im Szenen-Modell erhalten.
    pub detached_objects: Vec<String>,
}

impl RemovalResult {
    /// Prüft ob überhaupt etwas entfernt wurde.
    pub fn is_empty(&self) -> bool {
        self.removed_sites.is_empty()
            && self.removed_buildings.is_empty()
            && self.removed_levels.is_empty()
            && self.detached_objects.is_empty()
    }
}

impl HierarchyManager {
    /// Erstellt eine leere Hierarchie mit Standard-Konfiguration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt eine leere Hierarchie mit der gegebenen Konfiguration.
    pub fn with_config(config: HierarchyConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Aktuelle Konfiguration (read-only).
    pub fn config(&self) -> &HierarchyConfig {
        &self.config
    }

    // ── Einfügen ────────────────────────────────────────────────────

    /// Fügt einen Standort als Wurzel hinzu.
    pub fn add_site(&mut self, mut site: Site) -> Result<(), HierarchyError> {
        if self.contains_node(&site.id) {
            return Err(HierarchyError::DuplicateId(site.id));
        }
        // Kind-Listen werden nur über add_building/move_building gepflegt
        site.buildings.clear();
        let id = site.id.clone();
        self.sites.insert(id.clone(), site);
        self.emit(HierarchyEvent {
            kind: ChangeKind::Create,
            node_id: id,
            old_parent_id: None,
            new_parent_id: None,
        });
        Ok(())
    }

    /// Fügt ein Gebäude unter seinem deklarierten Standort hinzu.
    pub fn add_building(&mut self, mut building: Building) -> Result<(), HierarchyError> {
        if self.contains_node(&building.id) {
            return Err(HierarchyError::DuplicateId(building.id));
        }
        if !self.sites.contains_key(&building.site_id) {
            return Err(HierarchyError::ParentNotFound(building.site_id));
        }
        building.levels.clear();
        let id = building.id.clone();
        let site_id = building.site_id.clone();
        self.buildings.insert(id.clone(), building);
        self.sites
            .get_mut(&site_id)
            .expect("Standort wurde soeben geprüft")
            .buildings
            .push(id.clone());
        self.emit(HierarchyEvent {
            kind: ChangeKind::Create,
            node_id: id,
            old_parent_id: None,
            new_parent_id: Some(site_id),
        });
        Ok(())
    }

    /// Fügt ein Geschoss unter seinem deklarierten Gebäude hinzu.
    pub fn add_level(&mut self, mut level: Level) -> Result<(), HierarchyError> {
        if self.contains_node(&level.id) {
            return Err(HierarchyError::DuplicateId(level.id));
        }
        if !self.buildings.contains_key(&level.building_id) {
            return Err(HierarchyError::ParentNotFound(level.building_id));
        }
        level.objects.clear();
        let id = level.id.clone();
        let building_id = level.building_id.clone();
        self.levels.insert(id.clone(), level);
        self.buildings
            .get_mut(&building_id)
            .expect("Gebäude wurde soeben geprüft")
            .levels
            .push(id.clone());
        self.emit(HierarchyEvent {
            kind: ChangeKind::Create,
            node_id: id,
            old_parent_id: None,
            new_parent_id: Some(building_id),
        });
        Ok(())
    }

    /// Registriert ein platziertes Objekt unter einem Geschoss.
    pub fn add_object_to_level(
        &mut self,
        object_id: String,
        name: String,
        level_id: String,
    ) -> Result<(), HierarchyError> {
        if self.contains_node(&object_id) {
            return Err(HierarchyError::DuplicateId(object_id));
        }
        if !self.levels.contains_key(&level_id) {
            return Err(HierarchyError::ParentNotFound(level_id));
        }
        self.object_refs.insert(
            object_id.clone(),
            ObjectRef::new(object_id.clone(), name, level_id.clone()),
        );
        self.levels
            .get_mut(&level_id)
            .expect("Geschoss wurde soeben geprüft")
            .objects
            .push(object_id.clone());
        self.emit(HierarchyEvent {
            kind: ChangeKind::Create,
            node_id: object_id,
            old_parent_id: None,
            new_parent_id: Some(level_id),
        });
        Ok(())
    }

    // ── Entfernen (kaskadierend, bottom-up) ─────────────────────────

    /// Entfernt einen Standort samt aller Gebäude und Geschosse.
    /// Fehlende IDs sind ein No-op (leeres Ergebnis).
    pub fn remove_site(&mut self, site_id: &str) -> RemovalResult {
        let mut result = RemovalResult::default();
        let mut pending = Vec::new();
        let Some(site) = self.sites.get(site_id) else {
            return result;
        };
        for building_id in site.buildings.clone() {
            self.remove_building_internal(&building_id, &mut result, &mut pending);
        }
        self.sites.shift_remove(site_id);
        self.forget_node(site_id);
        result.removed_sites.push(site_id.to_string());
        pending.push(HierarchyEvent {
            kind: ChangeKind::Delete,
            node_id: site_id.to_string(),
            old_parent_id: None,
            new_parent_id: None,
        });
        self.emit_all(pending);
        result
    }

    /// Entfernt ein Gebäude samt aller Geschosse.
    /// Fehlende IDs sind ein No-op (leeres Ergebnis).
    pub fn remove_building(&mut self, building_id: &str) -> RemovalResult {
        let mut result = RemovalResult::default();
        let mut pending = Vec::new();
        if !self.buildings.contains_key(building_id) {
            return result;
        }
        self.remove_building_internal(building_id, &mut result, &mut pending);
        self.emit_all(pending);
        result
    }

    /// Entfernt ein Geschoss und löst dessen Objekt-Registrierungen.
    /// Die Objekte bleiben im Szenen-Modell erhalten. Fehlende IDs sind ein No-op.
    pub fn remove_level(&mut self, level_id: &str) -> RemovalResult {
        let mut result = RemovalResult::default();
        let mut pending = Vec::new();
        if !self.levels.contains_key(level_id) {
            return result;
        }
        self.remove_level_internal(level_id, &mut result, &mut pending);
        self.emit_all(pending);
        result
    }

    /// Löst die Registrierung eines Objekts aus seinem Geschoss.
    /// Gibt `true` zurück falls das Objekt registriert war.
    pub fn remove_object_from_level(&mut self, object_id: &str) -> bool {
        let Some(object_ref) = self.object_refs.shift_remove(object_id) else {
            return false;
        };
        if let Some(level) = self.levels.get_mut(&object_ref.level_id) {
            level.objects.retain(|id| id != object_id);
        }
        self.forget_node(object_id);
        self.emit(HierarchyEvent {
            kind: ChangeKind::Delete,
            node_id: object_id.to_string(),
            old_parent_id: Some(object_ref.level_id),
            new_parent_id: None,
        });
        true
    }

    fn remove_building_internal(
        &mut self,
        building_id: &str,
        result: &mut RemovalResult,
        pending: &mut Vec<HierarchyEvent>,
    ) {
        let Some(building) = self.buildings.get(building_id) else {
            return;
        };
        let site_id = building.site_id.clone();
        for level_id in building.levels.clone() {
            self.remove_level_internal(&level_id, result, pending);
        }
        self.buildings.shift_remove(building_id);
        if let Some(site) = self.sites.get_mut(&site_id) {
            site.buildings.retain(|id| id != building_id);
        }
        self.forget_node(building_id);
        result.removed_buildings.push(building_id.to_string());
        pending.push(HierarchyEvent {
            kind: ChangeKind::Delete,
            node_id: building_id.to_string(),
            old_parent_id: Some(site_id),
            new_parent_id: None,
        });
    }

    fn remove_level_internal(
        &mut self,
        level_id: &str,
        result: &mut RemovalResult,
        pending: &mut Vec<HierarchyEvent>,
    ) {
        let Some(level) = self.levels.get(level_id) else {
            return;
        };
        let building_id = level.building_id.clone();
        for object_id in level.objects.clone() {
            self.object_refs.shift_remove(&object_id);
            self.forget_node(&object_id);
            result.detached_objects.push(object_id.clone());
            pending.push(HierarchyEvent {
                kind: ChangeKind::Delete,
                node_id: object_id,
                old_parent_id: Some(level_id.to_string()),
                new_parent_id: None,
            });
        }
        self.levels.shift_remove(level_id);
        if let Some(building) = self.buildings.get_mut(&building_id) {
            building.levels.retain(|id| id != level_id);
        }
        self.forget_node(level_id);
        result.removed_levels.push(level_id.to_string());
        pending.push(HierarchyEvent {
            kind: ChangeKind::Delete,
            node_id: level_id.to_string(),
            old_parent_id: Some(building_id),
            new_parent_id: None,
        });
    }

    /// Entfernt einen Knoten aus Selektions- und Expansions-Menge.
    fn forget_node(&mut self, node_id: &str) {
        self.selected.shift_remove(node_id);
        self.expanded.shift_remove(node_id);
    }

    // ── Umhängen ────────────────────────────────────────────────────

    /// Hängt ein Gebäude atomar an einen anderen Standort um.
    pub fn move_building(
        &mut self,
        building_id: &str,
        target_site_id: &str,
    ) -> Result<(), HierarchyError> {
        if !self.buildings.contains_key(building_id) {
            return Err(HierarchyError::EntityNotFound(building_id.to_string()));
        }
        if !self.sites.contains_key(target_site_id) {
            return Err(HierarchyError::EntityNotFound(target_site_id.to_string()));
        }
        let old_site_id = self.buildings[building_id].site_id.clone();
        if let Some(old_site) = self.sites.get_mut(&old_site_id) {
            old_site.buildings.retain(|id| id != building_id);
        }
        self.sites
            .get_mut(target_site_id)
            .expect("Ziel-Standort wurde soeben geprüft")
            .buildings
            .push(building_id.to_string());
        self.buildings
            .get_mut(building_id)
            .expect("Gebäude wurde soeben geprüft")
            .site_id = target_site_id.to_string();
        self.emit(HierarchyEvent {
            kind: ChangeKind::Move,
            node_id: building_id.to_string(),
            old_parent_id: Some(old_site_id),
            new_parent_id: Some(target_site_id.to_string()),
        });
        Ok(())
    }

    /// Hängt ein Geschoss atomar an ein anderes Gebäude um.
    pub fn move_level(
        &mut self,
        level_id: &str,
        target_building_id: &str,
    ) -> Result<(), HierarchyError> {
        if !self.levels.contains_key(level_id) {
            return Err(HierarchyError::EntityNotFound(level_id.to_string()));
        }
        if !self.buildings.contains_key(target_building_id) {
            return Err(HierarchyError::EntityNotFound(target_building_id.to_string()));
        }
        let old_building_id = self.levels[level_id].building_id.clone();
        if let Some(old_building) = self.buildings.get_mut(&old_building_id) {
            old_building.levels.retain(|id| id != level_id);
        }
        self.buildings
            .get_mut(target_building_id)
            .expect("Ziel-Gebäude wurde soeben geprüft")
            .levels
            .push(level_id.to_string());
        self.levels
            .get_mut(level_id)
            .expect("Geschoss wurde soeben geprüft")
            .building_id = target_building_id.to_string();
        self.emit(HierarchyEvent {
            kind: ChangeKind::Move,
            node_id: level_id.to_string(),
            old_parent_id: Some(old_building_id),
            new_parent_id: Some(target_building_id.to_string()),
        });
        Ok(())
    }

    /// Hängt eine Objekt-Registrierung atomar an ein anderes Geschoss um.
    pub fn move_object(
        &mut self,
        object_id: &str,
        target_level_id: &str,
    ) -> Result<(), HierarchyError> {
        if !self.object_refs.contains_key(object_id) {
            return Err(HierarchyError::EntityNotFound(object_id.to_string()));
        }
        if !self.levels.contains_key(target_level_id) {
            return Err(HierarchyError::EntityNotFound(target_level_id.to_string()));
        }
        let old_level_id = self.object_refs[object_id].level_id.clone();
        if let Some(old_level) = self.levels.get_mut(&old_level_id) {
            old_level.objects.retain(|id| id != object_id);
        }
        self.levels
            .get_mut(target_level_id)
            .expect("Ziel-Geschoss wurde soeben geprüft")
            .objects
            .push(object_id.to_string());
        self.object_refs
            .get_mut(object_id)
            .expect("Objekt wurde soeben geprüft")
            .level_id = target_level_id.to_string();
        self.emit(HierarchyEvent {
            kind: ChangeKind::Move,
            node_id: object_id.to_string(),
            old_parent_id: Some(old_level_id),
            new_parent_id: Some(target_level_id.to_string()),
        });
        Ok(())
    }

    /// Ersetzt die Geschoss-Reihenfolge eines Gebäudes (Höhen-Stapelung).
    ///
    /// Die übergebene Liste muss eine Permutation der bestehenden Geschoss-IDs
    /// sein; Teil- oder Übermengen werden mit `InvalidReorder` abgewiesen.
    pub fn reorder_levels(
        &mut self,
        building_id: &str,
        ordered_level_ids: &[String],
    ) -> Result<(), HierarchyError> {
        let building = self
            .buildings
            .get(building_id)
            .ok_or_else(|| HierarchyError::EntityNotFound(building_id.to_string()))?;

        let current: IndexSet<&String> = building.levels.iter().collect();
        let proposed: IndexSet<&String> = ordered_level_ids.iter().collect();
        if proposed.len() != ordered_level_ids.len() || current != proposed {
            return Err(HierarchyError::InvalidReorder {
                building_id: building_id.to_string(),
            });
        }

        self.buildings
            .get_mut(building_id)
            .expect("Gebäude wurde soeben geprüft")
            .levels = ordered_level_ids.to_vec();
        self.emit(HierarchyEvent::simple(
            ChangeKind::Reorder,
            building_id.to_string(),
        ));
        Ok(())
    }

    /// Benennt einen Knoten um. Der Name lebt nur auf der backenden Entität.
    pub fn rename_node(&mut self, node_id: &str, new_name: String) -> Result<(), HierarchyError> {
        if let Some(site) = self.sites.get_mut(node_id) {
            site.name = new_name;
        } else if let Some(building) = self.buildings.get_mut(node_id) {
            building.name = new_name;
        } else if let Some(level) = self.levels.get_mut(node_id) {
            level.name = new_name;
        } else if let Some(object_ref) = self.object_refs.get_mut(node_id) {
            object_ref.name = new_name;
        } else {
            return Err(HierarchyError::EntityNotFound(node_id.to_string()));
        }
        self.emit(HierarchyEvent::simple(
            ChangeKind::Rename,
            node_id.to_string(),
        ));
        Ok(())
    }

    // ── Entitäts-Zugriff ────────────────────────────────────────────

    /// Findet einen Standort — O(1).
    pub fn site(&self, id: &str) -> Option<&Site> {
        self.sites.get(id)
    }

    /// Findet ein Gebäude — O(1).
    pub fn building(&self, id: &str) -> Option<&Building> {
        self.buildings.get(id)
    }

    /// Findet ein Geschoss — O(1).
    pub fn level(&self, id: &str) -> Option<&Level> {
        self.levels.get(id)
    }

    /// Findet eine Objekt-Registrierung — O(1).
    pub fn object_ref(&self, id: &str) -> Option<&ObjectRef> {
        self.object_refs.get(id)
    }

    /// Iterator über alle Standorte in Einfügereihenfolge.
    pub fn sites_iter(&self) -> impl Iterator<Item = &Site> {
        self.sites.values()
    }

    /// Gibt die Anzahl der Standorte zurück.
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    /// Gibt die Anzahl der Gebäude zurück.
    pub fn building_count(&self) -> usize {
        self.buildings.len()
    }

    /// Gibt die Anzahl der Geschosse zurück.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Gibt die Anzahl der registrierten Objekte zurück.
    pub fn object_count(&self) -> usize {
        self.object_refs.len()
    }

    /// Prüft ob eine ID irgendeinen Knoten bezeichnet.
    pub fn contains_node(&self, id: &str) -> bool {
        self.sites.contains_key(id)
            || self.buildings.contains_key(id)
            || self.levels.contains_key(id)
            || self.object_refs.contains_key(id)
    }

    /// Knoten-Art einer ID, falls vorhanden.
    pub fn node_type_of(&self, id: &str) -> Option<NodeType> {
        if self.sites.contains_key(id) {
            Some(NodeType::Site)
        } else if self.buildings.contains_key(id) {
            Some(NodeType::Building)
        } else if self.levels.contains_key(id) {
            Some(NodeType::Level)
        } else if self.object_refs.contains_key(id) {
            Some(NodeType::Object)
        } else {
            None
        }
    }

    // ── Traversierung ───────────────────────────────────────────────

    /// Baut die generische Sicht auf einen Knoten auf.
    pub fn node(&self, id: &str) -> Option<NodeView> {
        let (node_type, name, parent_id, children, visible, locked, metadata) =
            if let Some(site) = self.sites.get(id) {
                (
                    NodeType::Site,
                    site.name.clone(),
                    None,
                    site.buildings.clone(),
                    site.visible,
                    site.locked,
                    site.metadata.clone(),
                )
            } else if let Some(building) = self.buildings.get(id) {
                (
                    NodeType::Building,
                    building.name.clone(),
                    Some(building.site_id.clone()),
                    building.levels.clone(),
                    building.visible,
                    building.locked,
                    building.metadata.clone(),
                )
            } else if let Some(level) = self.levels.get(id) {
                (
                    NodeType::Level,
                    level.name.clone(),
                    Some(level.building_id.clone()),
                    level.objects.clone(),
                    level.visible,
                    level.locked,
                    level.metadata.clone(),
                )
            } else if let Some(object_ref) = self.object_refs.get(id) {
                (
                    NodeType::Object,
                    object_ref.name.clone(),
                    Some(object_ref.level_id.clone()),
                    Vec::new(),
                    object_ref.visible,
                    object_ref.locked,
                    IndexMap::new(),
                )
            } else {
                return None;
            };

        Some(NodeView {
            id: id.to_string(),
            node_type,
            name,
            parent_id,
            children,
            expanded: self.expanded.contains(id),
            visible,
            locked,
            selected: self.selected.contains(id),
            metadata,
        })
    }

    /// Wurzel-Knoten (Standorte) in Einfügereihenfolge.
    pub fn root_nodes(&self) -> Vec<NodeView> {
        self.sites
            .keys()
            .filter_map(|id| self.node(id))
            .collect()
    }

    /// Kind-Knoten eines Knotens in Anzeige-Reihenfolge.
    pub fn children(&self, parent_id: &str) -> Vec<NodeView> {
        let Some(parent) = self.node(parent_id) else {
            return Vec::new();
        };
        parent
            .children
            .iter()
            .filter_map(|id| self.node(id))
            .collect()
    }

    /// Eltern-Knoten eines Knotens.
    pub fn parent(&self, node_id: &str) -> Option<NodeView> {
        let parent_id = self.parent_id_of(node_id)?;
        self.node(&parent_id)
    }

    /// Eltern-ID eines Knotens (None für Wurzeln und unbekannte IDs).
    pub fn parent_id_of(&self, node_id: &str) -> Option<String> {
        if let Some(building) = self.buildings.get(node_id) {
            Some(building.site_id.clone())
        } else if let Some(level) = self.levels.get(node_id) {
            Some(level.building_id.clone())
        } else if let Some(object_ref) = self.object_refs.get(node_id) {
            Some(object_ref.level_id.clone())
        } else {
            None
        }
    }

    /// Pfad von der Wurzel bis zum Knoten (einschließlich), als ID-Folge.
    pub fn path_to_node(&self, node_id: &str) -> Vec<String> {
        if !self.contains_node(node_id) {
            return Vec::new();
        }
        let mut path = vec![node_id.to_string()];
        let mut current = node_id.to_string();
        while let Some(parent_id) = self.parent_id_of(&current) {
            path.push(parent_id.clone());
            current = parent_id;
        }
        path.reverse();
        path
    }

    /// Alle Nachfahren eines Knotens in Pre-Order, ohne den Knoten selbst.
    pub fn descendants(&self, node_id: &str) -> Vec<NodeView> {
        let Some(node) = self.node(node_id) else {
            return Vec::new();
        };
        let mut result = Vec::new();
        for child_id in &node.children {
            if let Some(child) = self.node(child_id) {
                result.push(child);
                result.extend(self.descendants(child_id));
            }
        }
        result
    }

    /// Alle Knoten in Pre-Order über alle Wurzeln.
    pub fn all_nodes(&self) -> Vec<NodeView> {
        let mut result = Vec::new();
        for site_id in self.sites.keys() {
            if let Some(site) = self.node(site_id) {
                result.push(site);
                result.extend(self.descendants(site_id));
            }
        }
        result
    }

    // ── Benachrichtigung ────────────────────────────────────────────

    /// Registriert einen Abonnenten für alle Änderungs-Ereignisse.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&HierarchyEvent) + 'static,
    ) -> SubscriberId {
        self.notifier.subscribe(Box::new(callback))
    }

    /// Meldet einen Abonnenten ab; gibt `true` zurück falls er registriert war.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Stellt ein Ereignis zu, nachdem die Mutation vollständig angewendet ist.
    pub(crate) fn emit(&mut self, event: HierarchyEvent) {
        self.notifier.notify(&event);
    }

    /// Stellt die gesammelten Ereignisse einer Kaskade zu.
    fn emit_all(&mut self, events: Vec<HierarchyEvent>) {
        for event in events {
            self.notifier.notify(&event);
        }
    }

    // ── Serialisierung ──────────────────────────────────────────────

    /// Exportiert Standorte, Gebäude, Geschosse, Expansions-Menge und
    /// Konfiguration. Objekt-Registrierungen werden nicht serialisiert —
    /// Objekte gehören dem Szenen-Modell und werden beim Import neu
    /// registriert.
    pub fn to_document(&self) -> HierarchyDocument {
        HierarchyDocument {
            sites: self.sites.values().cloned().collect(),
            buildings: self.buildings.values().cloned().collect(),
            levels: self
                .levels
                .values()
                .map(|level| {
                    let mut level = level.clone();
                    // Objekt-Registrierungen entstehen beim Import neu
                    level.objects.clear();
                    level
                })
                .collect(),
            expanded_nodes: self.expanded.iter().cloned().collect(),
            config: self.config.clone(),
        }
    }

    /// Baut eine Hierarchie aus einem Dokument auf und prüft dabei
    /// ID-Eindeutigkeit und beidseitige Eltern-Kind-Verknüpfung.
    pub fn from_document(document: HierarchyDocument) -> Result<Self, HierarchyError> {
        let mut manager = Self::with_config(document.config);

        for site in document.sites {
            if manager.contains_node(&site.id) {
                return Err(HierarchyError::DuplicateId(site.id));
            }
            manager.sites.insert(site.id.clone(), site);
        }
        for building in document.buildings {
            if manager.contains_node(&building.id) {
                return Err(HierarchyError::DuplicateId(building.id));
            }
            if !manager.sites.contains_key(&building.site_id) {
                return Err(HierarchyError::ParentNotFound(building.site_id));
            }
            manager.buildings.insert(building.id.clone(), building);
        }
        for mut level in document.levels {
            if manager.contains_node(&level.id) {
                return Err(HierarchyError::DuplicateId(level.id));
            }
            if !manager.buildings.contains_key(&level.building_id) {
                return Err(HierarchyError::ParentNotFound(level.building_id));
            }
            // Objekt-Registrierungen kommen aus dem Szenen-Dokument
            level.objects.clear();
            manager.levels.insert(level.id.clone(), level);
        }

        manager.validate_linkage()?;

        for node_id in document.expanded_nodes {
            if manager.contains_node(&node_id) {
                manager.expanded.insert(node_id);
            }
        }
        Ok(manager)
    }

    /// Prüft beide Richtungen jeder Eltern-Kind-Kante.
    fn validate_linkage(&self) -> Result<(), HierarchyError> {
        for site in self.sites.values() {
            for building_id in &site.buildings {
                let building = self
                    .buildings
                    .get(building_id)
                    .ok_or_else(|| HierarchyError::EntityNotFound(building_id.clone()))?;
                if building.site_id != site.id {
                    return Err(HierarchyError::EntityNotFound(building_id.clone()));
                }
            }
        }
        for building in self.buildings.values() {
            let listed = self
                .sites
                .get(&building.site_id)
                .map(|site| site.buildings.contains(&building.id))
                .unwrap_or(false);
            if !listed {
                return Err(HierarchyError::EntityNotFound(building.id.clone()));
            }
            for level_id in &building.levels {
                let level = self
                    .levels
                    .get(level_id)
                    .ok_or_else(|| HierarchyError::EntityNotFound(level_id.clone()))?;
                if level.building_id != building.id {
                    return Err(HierarchyError::EntityNotFound(level_id.clone()));
                }
            }
        }
        for level in self.levels.values() {
            let listed = self
                .buildings
                .get(&level.building_id)
                .map(|building| building.levels.contains(&level.id))
                .unwrap_or(false);
            if !listed {
                return Err(HierarchyError::EntityNotFound(level.id.clone()));
            }
        }
        Ok(())
    }
}

/// Serialisierte Gestalt der Hierarchie.
///
/// Objekt- und Layer-Sammlungen werden separat vom Szenen-Modell
/// serialisiert und sind hier bewusst nicht enthalten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyDocument {
    /// Standorte in Einfügereihenfolge
    #[serde(default)]
    pub sites: Vec<Site>,
    /// Gebäude in Einfügereihenfolge
    #[serde(default)]
    pub buildings: Vec<Building>,
    /// Geschosse in Einfügereihenfolge
    #[serde(default)]
    pub levels: Vec<Level>,
    /// Aufgeklappte Knoten-IDs
    #[serde(default)]
    pub expanded_nodes: Vec<String>,
    /// Verhaltens-Konfiguration
    #[serde(default)]
    pub config: HierarchyConfig,
}
