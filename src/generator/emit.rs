//! Per-run vertex/edge emission shared by all topologies
//!
//! An [`Emitter`] owns the working vertex array for exactly one run. Vertices
//! are allocated up front; edges are then addressed by vertex index. The
//! array is an owned `Vec`, so it is released on every exit path.

use super::error::{GenerateError, GenerateResult};
use super::spec::ValidatedSpec;
use crate::backend::GraphBackend;
use crate::graph::{EdgeId, GraphId, LabelId, PropertyMap, VertexId};
use std::fmt;
use tracing::debug;

/// Lifecycle of one generator run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Validating,
    AllocatingVertices,
    EmittingEdges,
    Done,
    Failed,
}

impl Phase {
    /// Whether `self -> next` is a legal transition
    pub fn can_advance_to(self, next: Phase) -> bool {
        matches!(
            (self, next),
            (Phase::Validating, Phase::AllocatingVertices)
                | (Phase::AllocatingVertices, Phase::EmittingEdges)
                | (Phase::EmittingEdges, Phase::Done)
        ) || (next == Phase::Failed && !matches!(self, Phase::Done | Phase::Failed))
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Validating => "validating",
            Phase::AllocatingVertices => "allocating_vertices",
            Phase::EmittingEdges => "emitting_edges",
            Phase::Done => "done",
            Phase::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}

/// Graph and label ids resolved for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub graph: GraphId,
    pub vertex_label: LabelId,
    pub edge_label: LabelId,
}

/// Writes one topology into a backend
pub struct Emitter<'a, B: GraphBackend + ?Sized> {
    backend: &'a mut B,
    spec: &'a ValidatedSpec,
    ids: Resolved,
    phase: Phase,
    vertices: Vec<VertexId>,
    edges_written: u64,
}

impl<'a, B: GraphBackend + ?Sized> Emitter<'a, B> {
    pub fn new(backend: &'a mut B, spec: &'a ValidatedSpec, ids: Resolved) -> Self {
        Emitter {
            backend,
            spec,
            ids,
            phase: Phase::Validating,
            vertices: Vec::new(),
            edges_written: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn advance(&mut self, next: Phase) {
        debug_assert!(
            self.phase.can_advance_to(next),
            "illegal phase transition {} -> {}",
            self.phase,
            next
        );
        debug!("{}: {} -> {}", self.spec.graph_name(), self.phase, next);
        self.phase = next;
    }

    /// Mark the run failed and hand the error back
    pub fn fail(&mut self, err: GenerateError) -> GenerateError {
        if self.phase.can_advance_to(Phase::Failed) {
            self.advance(Phase::Failed);
        }
        err
    }

    /// Create `count` vertices in creation order
    ///
    /// Must be called exactly once, before any edge is emitted.
    pub fn allocate_vertices(&mut self, count: usize) -> GenerateResult<()> {
        self.advance(Phase::AllocatingVertices);
        self.vertices.try_reserve_exact(count)?;

        let spec = self.spec;
        let (vertex_label, vertex_properties) = (spec.vertex_label(), spec.vertex_properties());
        for _ in 0..count {
            let entry = self
                .backend
                .next_id(self.ids.graph, self.ids.vertex_label)
                .map_err(|err| GenerateError::Allocation(err.to_string()))?;
            let id = VertexId::new(self.ids.vertex_label, entry);
            self.backend
                .insert_vertex(self.ids.graph, vertex_label, id, vertex_properties)
                .map_err(GenerateError::Sink)?;
            self.vertices.push(id);
        }

        self.advance(Phase::EmittingEdges);
        Ok(())
    }

    /// Write a single directed edge `source -> target` (vertex indices)
    pub fn connect(&mut self, source: usize, target: usize) -> GenerateResult<EdgeId> {
        debug_assert_eq!(self.phase, Phase::EmittingEdges);
        debug_assert_ne!(source, target, "generators never emit self-loops");

        let entry = self
            .backend
            .next_id(self.ids.graph, self.ids.edge_label)
            .map_err(|err| GenerateError::Allocation(err.to_string()))?;
        let id = EdgeId::new(self.ids.edge_label, entry);
        let edge_properties: &PropertyMap = self.spec.edge_properties();
        self.backend
            .insert_edge(
                self.ids.graph,
                self.spec.edge_label(),
                id,
                self.vertices[source],
                self.vertices[target],
                edge_properties,
            )
            .map_err(GenerateError::Sink)?;
        self.edges_written += 1;
        Ok(id)
    }

    /// Write `source -> target`, plus `target -> source` when bidirectional
    pub fn link(&mut self, source: usize, target: usize) -> GenerateResult<()> {
        self.connect(source, target)?;
        if self.spec.bidirectional() {
            self.connect(target, source)?;
        }
        Ok(())
    }

    /// Close the run; the working array is dropped here
    pub fn finish(mut self) -> EmitSummary {
        self.advance(Phase::Done);
        EmitSummary {
            vertex_count: self.vertices.len() as u64,
            edge_count: self.edges_written,
        }
    }
}

/// Counters returned by [`Emitter::finish`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitSummary {
    pub vertex_count: u64,
    pub edge_count: u64,
}
