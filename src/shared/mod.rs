//! Geteilte Typen für layer-übergreifende Verträge.

pub mod options;

pub use options::EditorOptions;
pub use options::{DEFAULT_LEVEL_HEIGHT, DEFAULT_WALL_THICKNESS, GRID_SNAP_SPACING};
