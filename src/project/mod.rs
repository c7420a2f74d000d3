//! Projektdokument-I/O: JSON-Serialisierung von Szene und Hierarchie.

pub mod document;
pub mod reader;
pub mod writer;

pub use document::{ProjectDocument, SceneDocument, PROJECT_FORMAT_VERSION};
pub use reader::{parse_project_json, project_from_document};
pub use writer::{build_project_document, write_project_json};
