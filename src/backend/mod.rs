//! Collaborator interfaces consumed by the generators
//!
//! The generators never own storage. They resolve graphs and labels through
//! [`GraphCatalog`] and [`LabelCatalog`], draw identifiers from an
//! [`IdentifierAllocator`] and hand finished records to a [`GraphSink`].
//! [`crate::graph::MemoryGraphStore`] implements all four for tests and
//! benchmarks.

use crate::graph::{EdgeId, GraphId, LabelId, LabelKind, PropertyMap, VertexId};
use thiserror::Error;

/// Errors reported by a backing store
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("graph \"{0}\" does not exist")]
    GraphNotFound(String),

    #[error("{kind} label \"{name}\" does not exist")]
    LabelNotFound { name: String, kind: LabelKind },

    #[error("label \"{name}\" already exists as a {existing} label")]
    LabelKindConflict { name: String, existing: LabelKind },

    #[error("label id space exhausted in {0}")]
    LabelSpaceExhausted(GraphId),

    #[error("{0} is not registered in this graph")]
    UnknownLabel(LabelId),

    #[error("identifier sequence for {0} exhausted")]
    SequenceExhausted(LabelId),

    #[error("{0} already exists")]
    DuplicateVertex(VertexId),

    #[error("{0} already exists")]
    DuplicateEdge(EdgeId),

    #[error("edge endpoint {0} does not exist")]
    MissingEndpoint(VertexId),

    #[error("write limit of {0} records exceeded")]
    WriteLimitExceeded(usize),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Graph-level catalog: existence checks and on-demand creation
pub trait GraphCatalog {
    fn graph_exists(&self, name: &str) -> bool;

    /// Return the graph's id, creating the graph if needed
    fn ensure_graph(&mut self, name: &str) -> StoreResult<GraphId>;
}

/// Label catalog, scoped to one graph
pub trait LabelCatalog {
    fn label_exists(&self, graph: GraphId, name: &str, kind: LabelKind) -> bool;

    /// Return the label's id, creating the label if needed
    fn ensure_label(&mut self, graph: GraphId, name: &str, kind: LabelKind) -> StoreResult<LabelId>;

    fn resolve_label(&self, graph: GraphId, name: &str, kind: LabelKind) -> StoreResult<LabelId>;
}

/// Source of label-scoped entry numbers
///
/// Values are unique and strictly increasing per `(graph, label)` for the
/// lifetime of the graph.
pub trait IdentifierAllocator {
    fn next_id(&mut self, graph: GraphId, label: LabelId) -> StoreResult<u64>;
}

/// Write side of the backing store
pub trait GraphSink {
    fn insert_vertex(
        &mut self,
        graph: GraphId,
        label: &str,
        id: VertexId,
        properties: &PropertyMap,
    ) -> StoreResult<()>;

    fn insert_edge(
        &mut self,
        graph: GraphId,
        label: &str,
        id: EdgeId,
        source: VertexId,
        target: VertexId,
        properties: &PropertyMap,
    ) -> StoreResult<()>;
}

/// Everything a generator needs from the store
pub trait GraphBackend: GraphCatalog + LabelCatalog + IdentifierAllocator + GraphSink {}

impl<T> GraphBackend for T where T: GraphCatalog + LabelCatalog + IdentifierAllocator + GraphSink {}
