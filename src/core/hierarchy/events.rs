//! Änderungs-Benachrichtigung der Hierarchie.
//!
//! Zustellung ist synchron und erfolgt erst, nachdem die Mutation
//! vollständig angewendet wurde. Abonnenten werden in Registrierungs-
//! Reihenfolge aufgerufen; diese Reihenfolge ist kein zugesicherter Vertrag.

use indexmap::IndexMap;

/// Art einer Strukturänderung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Knoten erstellt
    Create,
    /// Knoten entfernt
    Delete,
    /// Knoten umgehängt
    Move,
    /// Geschosse innerhalb eines Gebäudes neu geordnet
    Reorder,
    /// Knoten umbenannt
    Rename,
    /// Selektion geändert
    Select,
    /// Expansion geändert
    Expand,
    /// Sichtbarkeit geändert
    Visibility,
}

/// Ein Änderungs-Ereignis der Hierarchie.
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyEvent {
    /// Art der Änderung
    pub kind: ChangeKind,
    /// Betroffener Knoten
    pub node_id: String,
    /// Alter Eltern-Knoten (bei Move/Delete)
    pub old_parent_id: Option<String>,
    /// Neuer Eltern-Knoten (bei Create/Move)
    pub new_parent_id: Option<String>,
}

impl HierarchyEvent {
    /// Ereignis ohne Eltern-Bezug (Rename, Selektion, Expansion, …).
    pub fn simple(kind: ChangeKind, node_id: String) -> Self {
        Self {
            kind,
            node_id,
            old_parent_id: None,
            new_parent_id: None,
        }
    }
}

/// Handle eines registrierten Abonnenten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub(crate) u64);

/// Registry der Änderungs-Abonnenten.
#[derive(Default)]
pub struct ChangeNotifier {
    subscribers: IndexMap<u64, Box<dyn FnMut(&HierarchyEvent)>>,
    next_id: u64,
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("subscribers", &self.subscribers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl ChangeNotifier {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Abonnenten; das Handle dient zum Abmelden.
    pub fn subscribe(&mut self, callback: Box<dyn FnMut(&HierarchyEvent)>) -> SubscriberId {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.insert(id, callback);
        SubscriberId(id)
    }

    /// Meldet einen Abonnenten ab; gibt `true` zurück falls er registriert war.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.shift_remove(&id.0).is_some()
    }

    /// Stellt ein Ereignis an alle Abonnenten zu.
    pub fn notify(&mut self, event: &HierarchyEvent) {
        for callback in self.subscribers.values_mut() {
            callback(event);
        }
    }

    /// Anzahl der registrierten Abonnenten.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
