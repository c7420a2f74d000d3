//! Zentrale Konfiguration für den BIM-Editor-Kern.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── History ─────────────────────────────────────────────────────────

/// Maximale Tiefe der Undo/Redo-History.
pub const HISTORY_MAX_DEPTH: usize = 200;

// ── Geschosse ───────────────────────────────────────────────────────

/// Standard-Geschosshöhe in Metern für neue Geschosse.
pub const DEFAULT_LEVEL_HEIGHT: f32 = 3.0;

// ── Bauteile ────────────────────────────────────────────────────────

/// Standard-Wandstärke in Metern.
pub const DEFAULT_WALL_THICKNESS: f32 = 0.24;
/// Raster-Abstand in Metern, auf den Werkzeuge einrasten.
pub const GRID_SNAP_SPACING: f32 = 0.5;

// ── Layer ───────────────────────────────────────────────────────────

/// Standard-Farbe neuer Layer (RGBA: Grau).
pub const DEFAULT_LAYER_COLOR: [f32; 4] = [0.7, 0.7, 0.7, 1.0];
/// Farbe für selektierte Objekte (RGBA: Magenta).
pub const SELECTION_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `cabinet_bim_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── History ─────────────────────────────────────────────────
    /// Maximale Tiefe der Undo/Redo-History
    pub history_max_depth: usize,

    // ── Geschosse ───────────────────────────────────────────────
    /// Standard-Geschosshöhe für neue Geschosse (Meter)
    pub default_level_height: f32,

    // ── Bauteile ────────────────────────────────────────────────
    /// Standard-Wandstärke (Meter)
    pub default_wall_thickness: f32,
    /// Raster-Abstand für Werkzeug-Einrasten (Meter)
    pub grid_snap_spacing: f32,

    // ── Layer & Selektion ───────────────────────────────────────
    /// Standard-Farbe neuer Layer (RGBA)
    pub default_layer_color: [f32; 4],
    /// Farbe für selektierte Objekte (RGBA)
    pub selection_color: [f32; 4],
    /// Neue Objekte ohne Layer-Angabe dem aktiven Layer zuordnen
    #[serde(default = "default_auto_assign_active_layer")]
    pub auto_assign_active_layer: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            history_max_depth: HISTORY_MAX_DEPTH,
            default_level_height: DEFAULT_LEVEL_HEIGHT,
            default_wall_thickness: DEFAULT_WALL_THICKNESS,
            grid_snap_spacing: GRID_SNAP_SPACING,
            default_layer_color: DEFAULT_LAYER_COLOR,
            selection_color: SELECTION_COLOR,
            auto_assign_active_layer: true,
        }
    }
}

/// Serde-Default für `auto_assign_active_layer` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_auto_assign_active_layer() -> bool {
    true
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("cabinet_bim_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("cabinet_bim_editor.toml")
    }
}
