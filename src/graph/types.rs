//! Core type definitions for generated graphs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of low bits of a packed object id reserved for the entry number
pub const ENTRY_ID_BITS: u32 = 48;

/// Largest entry number a label sequence may hand out
pub const ENTRY_ID_MAX: u64 = (1 << ENTRY_ID_BITS) - 1;

/// Identifier of a graph inside a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct GraphId(pub u32);

impl GraphId {
    pub fn new(id: u32) -> Self {
        GraphId(id)
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GraphId({})", self.0)
    }
}

/// Identifier of a label within one graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct LabelId(pub u16);

impl LabelId {
    pub fn new(id: u16) -> Self {
        LabelId(id)
    }
}

impl fmt::Display for LabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LabelId({})", self.0)
    }
}

/// Whether a label partitions vertices or edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKind {
    Vertex,
    Edge,
}

impl LabelKind {
    /// The other namespace
    pub fn opposite(self) -> Self {
        match self {
            LabelKind::Vertex => LabelKind::Edge,
            LabelKind::Edge => LabelKind::Vertex,
        }
    }
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelKind::Vertex => write!(f, "vertex"),
            LabelKind::Edge => write!(f, "edge"),
        }
    }
}

fn pack(label: LabelId, entry: u64) -> u64 {
    ((label.0 as u64) << ENTRY_ID_BITS) | (entry & ENTRY_ID_MAX)
}

/// Unique identifier for a vertex: label id plus the label-local entry number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct VertexId {
    pub label: LabelId,
    pub entry: u64,
}

impl VertexId {
    pub fn new(label: LabelId, entry: u64) -> Self {
        VertexId { label, entry }
    }

    /// Packed form, label in the high 16 bits
    pub fn as_u64(&self) -> u64 {
        pack(self.label, self.entry)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({}.{})", self.label.0, self.entry)
    }
}

/// Unique identifier for an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeId {
    pub label: LabelId,
    pub entry: u64,
}

impl EdgeId {
    pub fn new(label: LabelId, entry: u64) -> Self {
        EdgeId { label, entry }
    }

    pub fn as_u64(&self) -> u64 {
        pack(self.label, self.entry)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({}.{})", self.label.0, self.entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id() {
        let id = VertexId::new(LabelId::new(3), 42);
        assert_eq!(id.as_u64(), (3u64 << 48) | 42);
        assert_eq!(format!("{}", id), "VertexId(3.42)");
    }

    #[test]
    fn test_edge_id() {
        let id = EdgeId::new(LabelId::new(1), ENTRY_ID_MAX);
        assert_eq!(id.as_u64() >> ENTRY_ID_BITS, 1);
        assert_eq!(id.as_u64() & ENTRY_ID_MAX, ENTRY_ID_MAX);
        assert_eq!(format!("{}", id), format!("EdgeId(1.{})", ENTRY_ID_MAX));
    }

    #[test]
    fn test_label_kind() {
        assert_eq!(LabelKind::Vertex.opposite(), LabelKind::Edge);
        assert_eq!(LabelKind::Edge.opposite(), LabelKind::Vertex);
        assert_eq!(format!("{}", LabelKind::Edge), "edge");
    }

    #[test]
    fn test_id_ordering() {
        let label = LabelId::new(2);
        assert!(VertexId::new(label, 1) < VertexId::new(label, 2));
        assert!(VertexId::new(LabelId::new(1), 99) < VertexId::new(label, 1));
    }
}
