//! Stored vertex record

use super::property::{PropertyMap, PropertyValue};
use super::types::VertexId;
use serde::{Deserialize, Serialize};

/// A vertex as held by the in-memory backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    /// Unique identifier for this vertex
    pub id: VertexId,

    /// Name of the vertex label
    pub label: String,

    /// Properties associated with this vertex
    pub properties: PropertyMap,

    /// Creation timestamp (Unix milliseconds)
    pub created_at: i64,
}

impl Vertex {
    pub fn new(id: VertexId, label: impl Into<String>, properties: PropertyMap) -> Self {
        Vertex {
            id,
            label: label.into(),
            properties,
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }

    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}
