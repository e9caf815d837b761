//! Graph data model shared by the generators and the in-memory backend
//!
//! - Composite vertex/edge identifiers (label id + label-local entry)
//! - Pass-through property payloads
//! - `MemoryGraphStore`, a catalog + sink kept entirely in memory

pub mod edge;
pub mod property;
pub mod store;
pub mod types;
pub mod vertex;

// Re-export main types
pub use edge::Edge;
pub use property::{PropertyMap, PropertyValue};
pub use store::{GraphStatistics, MemoryGraphStore};
pub use types::{EdgeId, GraphId, LabelId, LabelKind, VertexId, ENTRY_ID_BITS, ENTRY_ID_MAX};
pub use vertex::Vertex;
