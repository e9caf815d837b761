//! Topology generators
//!
//! Every run follows the same path:
//! 1. validate the [`GenerationSpec`] (no store access)
//! 2. check that the requested label names are not taken by the other kind
//! 3. ensure the graph and both labels exist
//! 4. allocate and write all vertices, then emit edges
//!
//! Failures are returned as-is; whatever was written before a sink or
//! allocation failure stays in the store. Rolling back is the caller's call.

pub mod combinatorics;
pub mod complete;
pub mod emit;
pub mod error;
pub mod gnm;
pub mod gnp;
pub mod random;
pub mod spec;
pub mod tadpole;
pub mod watts_strogatz;

pub use emit::Phase;
pub use error::{GenerateError, GenerateResult};
pub use random::{RandomSource, SeededRandom};
pub use spec::{GenerateOptions, GenerationSpec, Topology, TopologyKind, TopologySpec, ValidatedSpec};

use crate::backend::GraphBackend;
use crate::config::GeneratorConfig;
use crate::graph::{GraphId, LabelId, LabelKind};
use emit::{Emitter, Resolved};
use tracing::{debug, info, warn};

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub graph: GraphId,
    pub graph_name: String,
    pub topology: TopologyKind,
    pub vertex_label: LabelId,
    pub edge_label: LabelId,
    pub vertex_count: u64,
    /// Directed edge records written (mirrored edges count twice)
    pub edge_count: u64,
    pub bidirectional: bool,
    /// Seed of the random source, for random topologies run via [`generate`]
    pub seed: Option<u64>,
}

/// Validate `spec` and generate it, seeding randomness from the spec, the
/// config or OS entropy, in that order
pub fn generate<B: GraphBackend + ?Sized>(
    backend: &mut B,
    spec: &GenerationSpec,
    config: &GeneratorConfig,
) -> GenerateResult<GenerationReport> {
    let validated = validate_logged(spec, config)?;

    let seed = if validated.topology().is_random() {
        Some(spec.seed.or(config.seed).unwrap_or_else(random::entropy_seed))
    } else {
        None
    };
    let mut rng = SeededRandom::new(seed.unwrap_or_default());

    let mut report = execute(backend, &validated, &mut rng)?;
    report.seed = seed;
    Ok(report)
}

/// Validate `spec` and generate it with an injected random source
pub fn generate_with<B, R>(
    backend: &mut B,
    spec: &GenerationSpec,
    config: &GeneratorConfig,
    rng: &mut R,
) -> GenerateResult<GenerationReport>
where
    B: GraphBackend + ?Sized,
    R: RandomSource + ?Sized,
{
    let validated = validate_logged(spec, config)?;
    execute(backend, &validated, rng)
}

fn validate_logged(spec: &GenerationSpec, config: &GeneratorConfig) -> GenerateResult<ValidatedSpec> {
    spec.validate(config).map_err(|err| {
        warn!("Rejected generation spec: {}", err);
        err
    })
}

/// Run an already validated spec
pub fn execute<B, R>(
    backend: &mut B,
    spec: &ValidatedSpec,
    rng: &mut R,
) -> GenerateResult<GenerationReport>
where
    B: GraphBackend + ?Sized,
    R: RandomSource + ?Sized,
{
    let kind = spec.topology().kind();
    info!(
        "Generating {} graph \"{}\" ({} vertices, vertex label \"{}\", edge label \"{}\")",
        kind,
        spec.graph_name(),
        spec.topology().vertex_count(),
        spec.vertex_label(),
        spec.edge_label()
    );

    let ids = resolve(backend, spec).map_err(|err| {
        warn!("Generation of \"{}\" failed while resolving labels: {}", spec.graph_name(), err);
        err
    })?;

    let mut emitter = Emitter::new(backend, spec, ids);
    let outcome = match spec.topology() {
        Topology::Complete { vertices } => complete::emit(&mut emitter, vertices),
        Topology::ErdosRenyiGnp {
            vertices,
            probability,
        } => gnp::emit(&mut emitter, rng, vertices, probability),
        Topology::ErdosRenyiGnm { vertices, edges } => gnm::emit(&mut emitter, rng, vertices, edges),
        Topology::Tadpole {
            cycle_size,
            path_size,
        } => tadpole::emit(&mut emitter, cycle_size, path_size),
        Topology::WattsStrogatz {
            vertices,
            neighbors,
            rewire_probability,
        } => watts_strogatz::emit(&mut emitter, rng, vertices, neighbors, rewire_probability),
    };

    if let Err(err) = outcome {
        let phase = emitter.phase();
        let err = emitter.fail(err);
        warn!(
            "Generation of \"{}\" failed during {}: {}",
            spec.graph_name(), phase, err
        );
        return Err(err);
    }

    let summary = emitter.finish();
    info!(
        "Generated {} graph \"{}\": {} vertices, {} edges",
        kind, spec.graph_name(), summary.vertex_count, summary.edge_count
    );

    Ok(GenerationReport {
        graph: ids.graph,
        graph_name: spec.graph_name().to_string(),
        topology: kind,
        vertex_label: ids.vertex_label,
        edge_label: ids.edge_label,
        vertex_count: summary.vertex_count,
        edge_count: summary.edge_count,
        bidirectional: spec.bidirectional(),
        seed: None,
    })
}

/// Ensure the graph and both labels, refusing names owned by the other kind
fn resolve<B: GraphBackend + ?Sized>(backend: &mut B, spec: &ValidatedSpec) -> GenerateResult<Resolved> {
    let existed = backend.graph_exists(spec.graph_name());
    let graph = backend
        .ensure_graph(spec.graph_name())
        .map_err(GenerateError::Catalog)?;

    let wanted = [
        ("vertex_label", spec.vertex_label(), LabelKind::Vertex),
        ("edge_label", spec.edge_label(), LabelKind::Edge),
    ];
    if existed {
        for (field, name, kind) in wanted {
            if backend.label_exists(graph, name, kind.opposite()) {
                return Err(GenerateError::invalid(
                    field,
                    format!("\"{}\" already names a label of kind {}", name, kind.opposite()),
                ));
            }
        }
    }

    let mut ensure = |name: &str, kind: LabelKind| -> GenerateResult<LabelId> {
        let label = backend
            .ensure_label(graph, name, kind)
            .map_err(GenerateError::Catalog)?;
        debug!("Resolved {} label \"{}\" to {}", kind, name, label);
        Ok(label)
    };
    let vertex_label = ensure(spec.vertex_label(), LabelKind::Vertex)?;
    let edge_label = ensure(spec.edge_label(), LabelKind::Edge)?;

    Ok(Resolved {
        graph,
        vertex_label,
        edge_label,
    })
}

fn named_spec(graph_name: &str, topology: TopologySpec, options: GenerateOptions) -> GenerationSpec {
    GenerationSpec::new(graph_name, topology).with_options(options)
}

/// Complete graph: one edge per unordered vertex pair
pub fn create_complete_graph<B: GraphBackend + ?Sized>(
    backend: &mut B,
    graph_name: &str,
    vertices: i64,
    options: GenerateOptions,
) -> GenerateResult<GenerationReport> {
    let spec = named_spec(
        graph_name,
        TopologySpec::Complete {
            vertices: Some(vertices),
        },
        options,
    );
    generate(backend, &spec, &GeneratorConfig::default())
}

/// Erdős–Rényi G(n, p)
pub fn create_erdos_renyi_gnp<B, R>(
    backend: &mut B,
    rng: &mut R,
    graph_name: &str,
    vertices: i64,
    probability: f64,
    options: GenerateOptions,
) -> GenerateResult<GenerationReport>
where
    B: GraphBackend + ?Sized,
    R: RandomSource + ?Sized,
{
    let spec = named_spec(
        graph_name,
        TopologySpec::ErdosRenyiGnp {
            vertices: Some(vertices),
            probability: Some(probability),
        },
        options,
    );
    generate_with(backend, &spec, &GeneratorConfig::default(), rng)
}

/// Erdős–Rényi G(n, m)
pub fn create_erdos_renyi_gnm<B, R>(
    backend: &mut B,
    rng: &mut R,
    graph_name: &str,
    vertices: i64,
    edges: i64,
    options: GenerateOptions,
) -> GenerateResult<GenerationReport>
where
    B: GraphBackend + ?Sized,
    R: RandomSource + ?Sized,
{
    let spec = named_spec(
        graph_name,
        TopologySpec::ErdosRenyiGnm {
            vertices: Some(vertices),
            edges: Some(edges),
        },
        options,
    );
    generate_with(backend, &spec, &GeneratorConfig::default(), rng)
}

/// Tadpole: `cycle_size`-cycle with a `path_size` tail
pub fn create_tadpole_graph<B: GraphBackend + ?Sized>(
    backend: &mut B,
    graph_name: &str,
    cycle_size: i64,
    path_size: i64,
    options: GenerateOptions,
) -> GenerateResult<GenerationReport> {
    let spec = named_spec(
        graph_name,
        TopologySpec::Tadpole {
            cycle_size: Some(cycle_size),
            path_size: Some(path_size),
        },
        options,
    );
    generate(backend, &spec, &GeneratorConfig::default())
}

/// Watts–Strogatz small world
pub fn create_watts_strogatz_graph<B, R>(
    backend: &mut B,
    rng: &mut R,
    graph_name: &str,
    vertices: i64,
    neighbors: i64,
    rewire_probability: f64,
    options: GenerateOptions,
) -> GenerateResult<GenerationReport>
where
    B: GraphBackend + ?Sized,
    R: RandomSource + ?Sized,
{
    let spec = named_spec(
        graph_name,
        TopologySpec::WattsStrogatz {
            vertices: Some(vertices),
            neighbors: Some(neighbors),
            rewire_probability: Some(rewire_probability),
        },
        options,
    );
    generate_with(backend, &spec, &GeneratorConfig::default(), rng)
}


#[cfg(test)]
mod tests {
    use super::testing::spec;
    use super::*;
    use crate::backend::{GraphCatalog, LabelCatalog, StoreError};
    use crate::graph::MemoryGraphStore;

    #[test]
    fn test_report_fields() {
        let mut store = MemoryGraphStore::new();
        let mut rng = SeededRandom::new(0);
        let report = execute(&mut store, &spec(Topology::Complete { vertices: 3 }, false), &mut rng).unwrap();

        assert_eq!(report.graph, store.graph_id("g").unwrap());
        assert_eq!(report.topology, TopologyKind::Complete);
        assert_eq!(report.vertex_label, store.resolve_label(report.graph, "V", LabelKind::Vertex).unwrap());
        assert_eq!(report.edge_label, store.resolve_label(report.graph, "E", LabelKind::Edge).unwrap());
        assert_eq!(report.seed, None);
    }

    #[test]
    fn test_label_kind_conflict_is_rejected_before_writes() {
        let mut store = MemoryGraphStore::new();
        let graph = store.ensure_graph("g").unwrap();
        store.ensure_label(graph, "V", LabelKind::Edge).unwrap();

        let mut rng = SeededRandom::new(0);
        let err = execute(&mut store, &spec(Topology::Complete { vertices: 3 }, false), &mut rng).unwrap_err();
        assert_eq!(err.field(), Some("vertex_label"));
        assert!(!store.label_exists(graph, "E", LabelKind::Edge));
        assert_eq!(store.vertex_count("g"), 0);
    }

    #[test]
    fn test_vertices_precede_edges_in_ids() {
        let mut store = MemoryGraphStore::new();
        let mut rng = SeededRandom::new(0);
        execute(&mut store, &spec(Topology::Tadpole { cycle_size: 3, path_size: 1 }, false), &mut rng).unwrap();

        let entries: Vec<u64> = store.vertices("g").iter().map(|v| v.id.entry).collect();
        assert_eq!(entries, vec![1, 2, 3, 4]);
        let edge_entries: Vec<u64> = store.edges("g").iter().map(|e| e.id.entry).collect();
        assert_eq!(edge_entries, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_sink_failure_stops_generation() {
        // 4 vertices + 2 edges fit, the third edge is rejected
        let mut store = MemoryGraphStore::with_write_limit(6);
        let mut rng = SeededRandom::new(0);
        let err = execute(&mut store, &spec(Topology::Complete { vertices: 4 }, false), &mut rng).unwrap_err();

        assert_eq!(err, GenerateError::Sink(StoreError::WriteLimitExceeded(6)));
        assert_eq!(store.vertex_count("g"), 4);
        assert_eq!(store.edge_count("g"), 2);
    }
}
