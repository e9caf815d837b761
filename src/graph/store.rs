//! In-memory graph storage implementation
//!
//! `MemoryGraphStore` is the reference backend for the generators. It keeps
//! a catalog of graphs, each with its own labels, label-scoped identifier
//! sequences, vertices, edges and adjacency lists. Nothing is persisted.

use super::edge::Edge;
use super::property::PropertyMap;
use super::types::{EdgeId, GraphId, LabelId, LabelKind, VertexId, ENTRY_ID_MAX};
use super::vertex::Vertex;
use crate::backend::{
    GraphCatalog, GraphSink, IdentifierAllocator, LabelCatalog, StoreError, StoreResult,
};
use indexmap::IndexMap;
use std::collections::HashMap;
use tracing::debug;

/// Catalog entry for a label and its identifier sequence
#[derive(Debug, Clone)]
struct LabelEntry {
    id: LabelId,
    kind: LabelKind,
    /// Last value handed out by the sequence (0 = none yet)
    last_value: u64,
}

/// One graph's catalog and contents
#[derive(Debug)]
struct GraphData {
    id: GraphId,

    /// Labels by name; names are unique across both kinds
    labels: IndexMap<String, LabelEntry>,

    next_label_id: u16,

    /// Vertex storage in insertion order
    vertices: IndexMap<VertexId, Vertex>,

    /// Edge storage in insertion order
    edges: IndexMap<EdgeId, Edge>,

    /// Outgoing edges for each vertex (adjacency list)
    outgoing: HashMap<VertexId, Vec<EdgeId>>,

    /// Incoming edges for each vertex (adjacency list)
    incoming: HashMap<VertexId, Vec<EdgeId>>,
}

impl GraphData {
    fn new(id: GraphId) -> Self {
        GraphData {
            id,
            labels: IndexMap::new(),
            next_label_id: 1,
            vertices: IndexMap::new(),
            edges: IndexMap::new(),
            outgoing: HashMap::new(),
            incoming: HashMap::new(),
        }
    }

    fn label(&self, name: &str, kind: LabelKind) -> StoreResult<&LabelEntry> {
        match self.labels.get(name) {
            Some(entry) if entry.kind == kind => Ok(entry),
            _ => Err(StoreError::LabelNotFound {
                name: name.to_string(),
                kind,
            }),
        }
    }

    fn label_by_id_mut(&mut self, id: LabelId) -> Option<&mut LabelEntry> {
        self.labels.values_mut().find(|entry| entry.id == id)
    }
}

/// Per-graph counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphStatistics {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub label_count: usize,
}

/// In-memory graph catalog and storage
///
/// Graph ids are dense and start at 1, so a graph's id doubles as its
/// position in `graphs`.
#[derive(Debug, Default)]
pub struct MemoryGraphStore {
    graphs: IndexMap<String, GraphData>,

    /// Maximum number of vertex + edge writes accepted (None = unlimited)
    write_limit: Option<usize>,

    /// Vertex + edge writes accepted so far
    writes: usize,
}

impl MemoryGraphStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects every write after the first `limit`
    pub fn with_write_limit(limit: usize) -> Self {
        MemoryGraphStore {
            write_limit: Some(limit),
            ..Self::default()
        }
    }

    fn graph(&self, id: GraphId) -> StoreResult<&GraphData> {
        (id.0 as usize)
            .checked_sub(1)
            .and_then(|idx| self.graphs.get_index(idx))
            .map(|(_, data)| data)
            .ok_or_else(|| StoreError::GraphNotFound(id.to_string()))
    }

    fn graph_mut(&mut self, id: GraphId) -> StoreResult<&mut GraphData> {
        (id.0 as usize)
            .checked_sub(1)
            .and_then(|idx| self.graphs.get_index_mut(idx))
            .map(|(_, data)| data)
            .ok_or_else(|| StoreError::GraphNotFound(id.to_string()))
    }

    fn charge_write(&mut self) -> StoreResult<()> {
        if let Some(limit) = self.write_limit {
            if self.writes >= limit {
                return Err(StoreError::WriteLimitExceeded(limit));
            }
        }
        self.writes += 1;
        Ok(())
    }

    /// Look up a graph id by name
    pub fn graph_id(&self, name: &str) -> Option<GraphId> {
        self.graphs.get(name).map(|data| data.id)
    }

    /// Number of graphs in the catalog
    pub fn graph_count(&self) -> usize {
        self.graphs.len()
    }

    /// Move a label's sequence so that the next value is `last_value + 1`
    pub fn restart_sequence(
        &mut self,
        graph: GraphId,
        label: LabelId,
        last_value: u64,
    ) -> StoreResult<()> {
        let entry = self
            .graph_mut(graph)?
            .label_by_id_mut(label)
            .ok_or(StoreError::UnknownLabel(label))?;
        entry.last_value = last_value;
        Ok(())
    }

    pub fn vertex_count(&self, graph: &str) -> usize {
        self.graphs.get(graph).map_or(0, |data| data.vertices.len())
    }

    pub fn edge_count(&self, graph: &str) -> usize {
        self.graphs.get(graph).map_or(0, |data| data.edges.len())
    }

    /// All vertices of a graph in insertion order
    pub fn vertices(&self, graph: &str) -> Vec<&Vertex> {
        self.graphs
            .get(graph)
            .map(|data| data.vertices.values().collect())
            .unwrap_or_default()
    }

    /// All edges of a graph in insertion order
    pub fn edges(&self, graph: &str) -> Vec<&Edge> {
        self.graphs
            .get(graph)
            .map(|data| data.edges.values().collect())
            .unwrap_or_default()
    }

    pub fn get_edge(&self, graph: &str, id: EdgeId) -> Option<&Edge> {
        self.graphs.get(graph)?.edges.get(&id)
    }

    /// Get outgoing edges of a vertex
    pub fn outgoing_edges(&self, graph: &str, vertex: VertexId) -> Vec<&Edge> {
        self.adjacent(graph, vertex, |data| &data.outgoing)
    }

    /// Get incoming edges of a vertex
    pub fn incoming_edges(&self, graph: &str, vertex: VertexId) -> Vec<&Edge> {
        self.adjacent(graph, vertex, |data| &data.incoming)
    }

    fn adjacent<'a>(
        &'a self,
        graph: &str,
        vertex: VertexId,
        list: impl Fn(&'a GraphData) -> &'a HashMap<VertexId, Vec<EdgeId>>,
    ) -> Vec<&'a Edge> {
        let Some(data) = self.graphs.get(graph) else {
            return Vec::new();
        };
        list(data)
            .get(&vertex)
            .map(|ids| ids.iter().filter_map(|id| data.edges.get(id)).collect())
            .unwrap_or_default()
    }

    pub fn statistics(&self, graph: &str) -> Option<GraphStatistics> {
        self.graphs.get(graph).map(|data| GraphStatistics {
            vertex_count: data.vertices.len(),
            edge_count: data.edges.len(),
            label_count: data.labels.len(),
        })
    }
}

impl GraphCatalog for MemoryGraphStore {
    fn graph_exists(&self, name: &str) -> bool {
        self.graphs.contains_key(name)
    }

    fn ensure_graph(&mut self, name: &str) -> StoreResult<GraphId> {
        if let Some(data) = self.graphs.get(name) {
            return Ok(data.id);
        }
        let id = GraphId::new(self.graphs.len() as u32 + 1);
        self.graphs.insert(name.to_string(), GraphData::new(id));
        debug!("Created graph \"{}\" as {}", name, id);
        Ok(id)
    }
}

impl LabelCatalog for MemoryGraphStore {
    fn label_exists(&self, graph: GraphId, name: &str, kind: LabelKind) -> bool {
        self.graph(graph)
            .map(|data| data.label(name, kind).is_ok())
            .unwrap_or(false)
    }

    fn ensure_label(&mut self, graph: GraphId, name: &str, kind: LabelKind) -> StoreResult<LabelId> {
        let data = self.graph_mut(graph)?;
        if let Some(entry) = data.labels.get(name) {
            if entry.kind != kind {
                return Err(StoreError::LabelKindConflict {
                    name: name.to_string(),
                    existing: entry.kind,
                });
            }
            return Ok(entry.id);
        }

        let id = LabelId::new(data.next_label_id);
        data.next_label_id = data
            .next_label_id
            .checked_add(1)
            .ok_or(StoreError::LabelSpaceExhausted(graph))?;
        data.labels.insert(
            name.to_string(),
            LabelEntry {
                id,
                kind,
                last_value: 0,
            },
        );
        debug!("Created {} label \"{}\" as {} in {}", kind, name, id, graph);
        Ok(id)
    }

    fn resolve_label(&self, graph: GraphId, name: &str, kind: LabelKind) -> StoreResult<LabelId> {
        self.graph(graph)?.label(name, kind).map(|entry| entry.id)
    }
}

impl IdentifierAllocator for MemoryGraphStore {
    fn next_id(&mut self, graph: GraphId, label: LabelId) -> StoreResult<u64> {
        let entry = self
            .graph_mut(graph)?
            .label_by_id_mut(label)
            .ok_or(StoreError::UnknownLabel(label))?;
        if entry.last_value >= ENTRY_ID_MAX {
            return Err(StoreError::SequenceExhausted(label));
        }
        entry.last_value += 1;
        Ok(entry.last_value)
    }
}

impl GraphSink for MemoryGraphStore {
    fn insert_vertex(
        &mut self,
        graph: GraphId,
        label: &str,
        id: VertexId,
        properties: &PropertyMap,
    ) -> StoreResult<()> {
        {
            let data = self.graph(graph)?;
            data.label(label, LabelKind::Vertex)?;
            if data.vertices.contains_key(&id) {
                return Err(StoreError::DuplicateVertex(id));
            }
        }
        self.charge_write()?;

        let data = self.graph_mut(graph)?;
        data.vertices
            .insert(id, Vertex::new(id, label, properties.clone()));
        Ok(())
    }

    fn insert_edge(
        &mut self,
        graph: GraphId,
        label: &str,
        id: EdgeId,
        source: VertexId,
        target: VertexId,
        properties: &PropertyMap,
    ) -> StoreResult<()> {
        {
            let data = self.graph(graph)?;
            data.label(label, LabelKind::Edge)?;
            if data.edges.contains_key(&id) {
                return Err(StoreError::DuplicateEdge(id));
            }
            // Validate endpoints exist
            for endpoint in [source, target] {
                if !data.vertices.contains_key(&endpoint) {
                    return Err(StoreError::MissingEndpoint(endpoint));
                }
            }
        }
        self.charge_write()?;

        let data = self.graph_mut(graph)?;
        data.outgoing.entry(source).or_default().push(id);
        data.incoming.entry(target).or_default().push(id);
        data.edges.insert(
            id,
            Edge::new(id, source, target, label, properties.clone()),
        );
        Ok(())
    }
}
