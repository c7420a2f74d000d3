//! Cabinet BIM Editor Library.
//! Kern-Funktionalität (Szene, Hierarchie, Projekt-I/O) als Library
//! exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod project;
pub mod shared;

pub use app::{AppCommand, AppController, AppState, SelectionState};
pub use core::{
    BimObject, BimObjectKind, Building, ChangeKind, HierarchyConfig, HierarchyDocument,
    HierarchyError, HierarchyEvent, HierarchyManager, Layer, Level, NodeType, NodeView, ObjectPatch,
    ObjectRef, RemovalResult, SceneError, SceneModel, Site, SubscriberId, Transform, TransformPatch,
};
pub use project::{parse_project_json, project_from_document, write_project_json};
pub use shared::EditorOptions;
