//! Samyama Graph Generators
//!
//! Canonical topologies written straight into a property graph store:
//! complete graphs, Erdős–Rényi G(n, p) and G(n, m), tadpole graphs and
//! Watts–Strogatz small worlds.
//!
//! Generators never talk to a concrete storage engine. They resolve the
//! graph and labels through [`GraphCatalog`] and [`LabelCatalog`], draw ids
//! from an [`IdentifierAllocator`] and write records to a [`GraphSink`].
//! [`MemoryGraphStore`] implements all four.
//!
//! ## Example Usage
//!
//! ```rust
//! use samyama_graphgen::{
//!     create_complete_graph, create_watts_strogatz_graph, GenerateOptions,
//!     MemoryGraphStore, SeededRandom,
//! };
//!
//! let mut store = MemoryGraphStore::new();
//!
//! // K5 with custom labels
//! let options = GenerateOptions::new().vertex_label("Person").edge_label("KNOWS");
//! let report = create_complete_graph(&mut store, "social", 5, options).unwrap();
//! assert_eq!(report.edge_count, 10);
//!
//! // Small world, reproducible through the seed. Edges are mirrored
//! // unless `bidirectional(false)` is given.
//! let mut rng = SeededRandom::new(42);
//! let report = create_watts_strogatz_graph(
//!     &mut store, &mut rng, "ring", 20, 4, 0.1, GenerateOptions::new(),
//! ).unwrap();
//! assert_eq!(report.edge_count, 80);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod config;
pub mod generator;
pub mod graph;

pub use backend::{
    GraphBackend, GraphCatalog, GraphSink, IdentifierAllocator, LabelCatalog, StoreError,
    StoreResult,
};

pub use config::{ConfigError, ConfigResult, GeneratorConfig};

pub use generator::{
    create_complete_graph, create_erdos_renyi_gnm, create_erdos_renyi_gnp,
    create_tadpole_graph, create_watts_strogatz_graph, execute, generate, generate_with,
    GenerateError, GenerateOptions, GenerateResult, GenerationReport, GenerationSpec, Phase,
    RandomSource, SeededRandom, Topology, TopologyKind, TopologySpec, ValidatedSpec,
};

pub use graph::{
    Edge, EdgeId, GraphId, GraphStatistics, LabelId, LabelKind, MemoryGraphStore,
    PropertyMap, PropertyValue, Vertex, VertexId,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
