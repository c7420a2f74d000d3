//! Core-Domänentypen: Objekte, Layer, Szene und Gebäude-Hierarchie.

pub mod error;
pub mod hierarchy;
pub mod layer;
pub mod object;
pub mod scene;
pub mod transform;

pub use error::{HierarchyError, SceneError};
pub use hierarchy::{
    Building, ChangeKind, HierarchyConfig, HierarchyDocument, HierarchyEvent, HierarchyManager,
    Level, NodeType, NodeView, ObjectRef, RemovalResult, Site, SubscriberId,
};
pub use layer::Layer;
pub use object::{BimObject, BimObjectKind, ObjectPatch};
pub use scene::SceneModel;
pub use transform::{Transform, TransformPatch};
