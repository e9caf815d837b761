//! Stored edge record

use super::property::{PropertyMap, PropertyValue};
use super::types::{EdgeId, VertexId};
use serde::{Deserialize, Serialize};

/// A directed edge as held by the in-memory backend
///
/// Bidirectional generation stores two of these, one per direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier for this edge
    pub id: EdgeId,

    /// Source vertex (edge goes FROM this vertex)
    pub source: VertexId,

    /// Target vertex (edge goes TO this vertex)
    pub target: VertexId,

    /// Name of the edge label
    pub label: String,

    /// Properties associated with this edge
    pub properties: PropertyMap,

    /// Creation timestamp (Unix milliseconds)
    pub created_at: i64,
}

impl Edge {
    pub fn new(
        id: EdgeId,
        source: VertexId,
        target: VertexId,
        label: impl Into<String>,
        properties: PropertyMap,
    ) -> Self {
        Edge {
            id,
            source,
            target,
            label: label.into(),
            properties,
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }

    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}
