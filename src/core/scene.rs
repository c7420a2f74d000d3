//! Das zentrale Szenen-Modell mit Objekten und Layern.

use super::{BimObject, Layer, ObjectPatch, SceneError, TransformPatch};
use indexmap::IndexMap;

/// Container für alle platzierten Objekte und Layer einer Szene.
///
/// Beide Sammlungen sind nach Einfügereihenfolge geordnet (deterministische
/// Render- und Serialisierungs-Reihenfolge). Mutationen laufen ausschließlich
/// über die Methoden hier; das hält die Invarianten (eindeutige IDs,
/// aufgelöste Referenzen beim Layer-Löschen) an einer Stelle.
#[derive(Debug, Clone, Default)]
pub struct SceneModel {
    /// Alle Objekte, indexiert nach ID
    objects: IndexMap<String, BimObject>,
    /// Alle Layer, indexiert nach ID
    layers: IndexMap<String, Layer>,
    /// Aktiver Layer für neu platzierte Objekte
    active_layer_id: Option<String>,
}

impl SceneModel {
    /// Erstellt ein leeres Szenen-Modell.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Objekte ─────────────────────────────────────────────────────

    /// Fügt ein Objekt hinzu. Kollidierende IDs werden abgewiesen,
    /// nie stillschweigend überschrieben.
    pub fn add_object(&mut self, object: BimObject) -> Result<(), SceneError> {
        if self.objects.contains_key(&object.id) {
            return Err(SceneError::DuplicateId(object.id));
        }
        self.objects.insert(object.id.clone(), object);
        Ok(())
    }

    /// Entfernt ein Objekt. Fehlende IDs sind ein No-op (idempotentes Aufräumen).
    pub fn remove_object(&mut self, object_id: &str) -> Option<BimObject> {
        self.objects.shift_remove(object_id)
    }

    /// Übernimmt die im Patch gesetzten Felder in das Objekt (shallow merge).
    pub fn update_object(&mut self, object_id: &str, patch: ObjectPatch) -> Result<(), SceneError> {
        let object = self
            .objects
            .get_mut(object_id)
            .ok_or_else(|| SceneError::ObjectNotFound(object_id.to_string()))?;
        object.apply_patch(patch);
        Ok(())
    }

    /// Übernimmt nur die gesetzten Transform-Komponenten; alles andere bleibt.
    pub fn transform_object(
        &mut self,
        object_id: &str,
        patch: &TransformPatch,
    ) -> Result<(), SceneError> {
        let object = self
            .objects
            .get_mut(object_id)
            .ok_or_else(|| SceneError::ObjectNotFound(object_id.to_string()))?;
        object.transform.apply(patch);
        Ok(())
    }

    /// Setzt die Geschoss-Referenz eines Objekts (None = keinem Geschoss zugeordnet).
    pub fn set_object_level(
        &mut self,
        object_id: &str,
        level_id: Option<String>,
    ) -> Result<(), SceneError> {
        let object = self
            .objects
            .get_mut(object_id)
            .ok_or_else(|| SceneError::ObjectNotFound(object_id.to_string()))?;
        object.level_id = level_id;
        Ok(())
    }

    /// Findet ein Objekt — O(1).
    pub fn object(&self, object_id: &str) -> Option<&BimObject> {
        self.objects.get(object_id)
    }

    /// Prüft ob ein Objekt existiert — O(1).
    pub fn contains_object(&self, object_id: &str) -> bool {
        self.objects.contains_key(object_id)
    }

    /// Iterator über alle Objekte in Einfügereihenfolge (read-only).
    pub fn objects_iter(&self) -> impl Iterator<Item = &BimObject> {
        self.objects.values()
    }

    /// Gibt die Anzahl der Objekte zurück.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// IDs aller Objekte, die den Layer referenzieren.
    pub fn objects_on_layer(&self, layer_id: &str) -> Vec<String> {
        self.objects
            .values()
            .filter(|o| o.layer_id.as_deref() == Some(layer_id))
            .map(|o| o.id.clone())
            .collect()
    }

    /// IDs aller Objekte, die das Geschoss referenzieren.
    pub fn objects_on_level(&self, level_id: &str) -> Vec<String> {
        self.objects
            .values()
            .filter(|o| o.level_id.as_deref() == Some(level_id))
            .map(|o| o.id.clone())
            .collect()
    }

    /// Löst die Geschoss-Referenz aller betroffenen Objekte.
    ///
    /// Wird beim Entfernen eines Geschosses aufgerufen: die Objekte bleiben
    /// in der Szene erhalten, nur die Referenz verschwindet.
    pub fn detach_level(&mut self, level_id: &str) -> usize {
        let mut detached = 0;
        for object in self.objects.values_mut() {
            if object.level_id.as_deref() == Some(level_id) {
                object.level_id = None;
                detached += 1;
            }
        }
        detached
    }

    // ── Layer ───────────────────────────────────────────────────────

    /// Fügt einen Layer hinzu. Kollidierende IDs werden abgewiesen.
    pub fn add_layer(&mut self, layer: Layer) -> Result<(), SceneError> {
        if self.layers.contains_key(&layer.id) {
            return Err(SceneError::DuplicateId(layer.id));
        }
        self.layers.insert(layer.id.clone(), layer);
        Ok(())
    }

    /// Entfernt einen Layer und löst alle Objekt-Referenzen darauf.
    ///
    /// Die Objekte selbst bleiben erhalten. Fehlende IDs sind ein No-op.
    pub fn remove_layer(&mut self, layer_id: &str) -> Option<Layer> {
        let removed = self.layers.shift_remove(layer_id);
        if removed.is_some() {
            for object in self.objects.values_mut() {
                if object.layer_id.as_deref() == Some(layer_id) {
                    object.layer_id = None;
                }
            }
            if self.active_layer_id.as_deref() == Some(layer_id) {
                self.active_layer_id = None;
            }
        }
        removed
    }

    /// Schaltet die Sichtbarkeit eines Layers um; gibt den neuen Zustand zurück.
    /// Fehlende IDs sind ein No-op (nichts umzuschalten).
    pub fn toggle_layer_visibility(&mut self, layer_id: &str) -> Option<bool> {
        let layer = self.layers.get_mut(layer_id)?;
        layer.visible = !layer.visible;
        Some(layer.visible)
    }

    /// Sperrt oder entsperrt einen Layer; gibt `true` zurück falls gefunden.
    pub fn set_layer_locked(&mut self, layer_id: &str, locked: bool) -> bool {
        if let Some(layer) = self.layers.get_mut(layer_id) {
            layer.locked = locked;
            true
        } else {
            false
        }
    }

    /// Setzt den aktiven Layer (None = kein aktiver Layer).
    pub fn set_active_layer(&mut self, layer_id: Option<String>) -> Result<(), SceneError> {
        if let Some(ref id) = layer_id {
            if !self.layers.contains_key(id) {
                return Err(SceneError::LayerNotFound(id.clone()));
            }
        }
        self.active_layer_id = layer_id;
        Ok(())
    }

    /// ID des aktiven Layers.
    pub fn active_layer_id(&self) -> Option<&str> {
        self.active_layer_id.as_deref()
    }

    /// Findet einen Layer — O(1).
    pub fn layer(&self, layer_id: &str) -> Option<&Layer> {
        self.layers.get(layer_id)
    }

    /// Iterator über alle Layer in Einfügereihenfolge (read-only).
    pub fn layers_iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.values()
    }

    /// Gibt die Anzahl der Layer zurück.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}
