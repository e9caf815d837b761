//! Generation specs and their validation
//!
//! A [`GenerationSpec`] mirrors what a caller may hand in: every field is
//! optional so that "missing" can be reported by name. [`GenerationSpec::validate`]
//! turns it into a [`ValidatedSpec`] without touching any store.

use super::combinatorics::pair_count;
use super::error::{GenerateError, GenerateResult};
use crate::config::GeneratorConfig;
use crate::graph::PropertyMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Topology parameters as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "topology", rename_all = "snake_case")]
pub enum TopologySpec {
    Complete {
        vertices: Option<i64>,
    },
    ErdosRenyiGnp {
        vertices: Option<i64>,
        probability: Option<f64>,
    },
    ErdosRenyiGnm {
        vertices: Option<i64>,
        edges: Option<i64>,
    },
    Tadpole {
        cycle_size: Option<i64>,
        path_size: Option<i64>,
    },
    WattsStrogatz {
        vertices: Option<i64>,
        neighbors: Option<i64>,
        rewire_probability: Option<f64>,
    },
}

impl TopologySpec {
    pub fn kind(&self) -> TopologyKind {
        match self {
            TopologySpec::Complete { .. } => TopologyKind::Complete,
            TopologySpec::ErdosRenyiGnp { .. } => TopologyKind::ErdosRenyiGnp,
            TopologySpec::ErdosRenyiGnm { .. } => TopologyKind::ErdosRenyiGnm,
            TopologySpec::Tadpole { .. } => TopologyKind::Tadpole,
            TopologySpec::WattsStrogatz { .. } => TopologyKind::WattsStrogatz,
        }
    }

    /// Parameter keys accepted for this topology
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            TopologySpec::Complete { .. } => &["vertices"],
            TopologySpec::ErdosRenyiGnp { .. } => &["vertices", "probability"],
            TopologySpec::ErdosRenyiGnm { .. } => &["vertices", "edges"],
            TopologySpec::Tadpole { .. } => &["cycle_size", "path_size"],
            TopologySpec::WattsStrogatz { .. } => &["vertices", "neighbors", "rewire_probability"],
        }
    }
}

/// Keys a spec document may carry regardless of topology
const COMMON_KEYS: &[&str] = &[
    "graph_name",
    "topology",
    "seed",
    "vertex_label",
    "edge_label",
    "vertex_properties",
    "edge_properties",
    "bidirectional",
];

/// Label, payload and direction options shared by every topology
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateOptions {
    #[serde(default)]
    pub vertex_label: Option<String>,
    #[serde(default)]
    pub edge_label: Option<String>,
    #[serde(default)]
    pub vertex_properties: Option<PropertyMap>,
    #[serde(default)]
    pub edge_properties: Option<PropertyMap>,
    #[serde(default)]
    pub bidirectional: Option<bool>,
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_label(mut self, label: impl Into<String>) -> Self {
        self.vertex_label = Some(label.into());
        self
    }

    pub fn edge_label(mut self, label: impl Into<String>) -> Self {
        self.edge_label = Some(label.into());
        self
    }

    pub fn vertex_properties(mut self, properties: PropertyMap) -> Self {
        self.vertex_properties = Some(properties);
        self
    }

    pub fn edge_properties(mut self, properties: PropertyMap) -> Self {
        self.edge_properties = Some(properties);
        self
    }

    pub fn bidirectional(mut self, bidirectional: bool) -> Self {
        self.bidirectional = Some(bidirectional);
        self
    }
}

/// One generation request
///
/// ```yaml
/// graph_name: social
/// topology: watts_strogatz
/// vertices: 100
/// neighbors: 4
/// rewire_probability: 0.1
/// edge_label: KNOWS
/// seed: 42
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSpec {
    #[serde(default)]
    pub graph_name: Option<String>,
    #[serde(flatten)]
    pub topology: TopologySpec,
    #[serde(flatten)]
    pub options: GenerateOptions,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GenerationSpec {
    pub fn new(graph_name: impl Into<String>, topology: TopologySpec) -> Self {
        GenerationSpec {
            graph_name: Some(graph_name.into()),
            topology,
            options: GenerateOptions::default(),
            seed: None,
        }
    }

    pub fn with_options(mut self, options: GenerateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse a YAML spec; keys the chosen topology does not know are rejected
    pub fn from_yaml_str(input: &str) -> Result<Self, serde_yaml::Error> {
        let value: serde_yaml::Value = serde_yaml::from_str(input)?;
        let spec: GenerationSpec = serde_yaml::from_value(value.clone())?;
        if let serde_yaml::Value::Mapping(map) = &value {
            for key in map.keys() {
                spec.check_key::<serde_yaml::Error>(key.as_str().unwrap_or_default())?;
            }
        }
        Ok(spec)
    }

    /// Parse a JSON spec; keys the chosen topology does not know are rejected
    pub fn from_json_str(input: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        let spec: GenerationSpec = serde_json::from_value(value.clone())?;
        if let serde_json::Value::Object(map) = &value {
            for key in map.keys() {
                spec.check_key(key)?;
            }
        }
        Ok(spec)
    }

    // `flatten` rules out `deny_unknown_fields`, so keys are checked here
    fn check_key<E: serde::de::Error>(&self, key: &str) -> Result<(), E> {
        if COMMON_KEYS.contains(&key) || self.topology.field_names().contains(&key) {
            return Ok(());
        }
        Err(E::custom(format!(
            "unknown field `{}` for topology `{}`",
            key,
            self.topology.kind()
        )))
    }

    /// Check every field and apply defaults from `config`
    ///
    /// Pure: no catalog lookups, no allocation of identifiers.
    pub fn validate(&self, config: &GeneratorConfig) -> GenerateResult<ValidatedSpec> {
        let graph_name = match self.graph_name.as_deref().map(str::trim) {
            None => return Err(GenerateError::invalid("graph_name", "graph name cannot be null")),
            Some("") => return Err(GenerateError::invalid("graph_name", "graph name cannot be empty")),
            Some(name) => name.to_string(),
        };

        let topology = validate_topology(&self.topology)?;

        let vertex_label = label_or_default(
            "vertex_label",
            self.options.vertex_label.as_deref(),
            &config.default_vertex_label,
        )?;
        let edge_label = label_or_default(
            "edge_label",
            self.options.edge_label.as_deref(),
            &config.default_edge_label,
        )?;
        if vertex_label == edge_label {
            return Err(GenerateError::invalid(
                "edge_label",
                "vertex and edge label cannot be the same",
            ));
        }

        let bidirectional = match topology {
            // Each unordered pair yields exactly one edge record
            Topology::Complete { .. } => {
                if self.options.bidirectional == Some(true) {
                    return Err(GenerateError::invalid(
                        "bidirectional",
                        "complete graphs are generated in one direction only",
                    ));
                }
                false
            }
            _ => self
                .options
                .bidirectional
                .unwrap_or(config.default_bidirectional),
        };

        Ok(ValidatedSpec {
            graph_name,
            topology,
            vertex_label,
            edge_label,
            vertex_properties: self.options.vertex_properties.clone().unwrap_or_default(),
            edge_properties: self.options.edge_properties.clone().unwrap_or_default(),
            bidirectional,
        })
    }
}

fn label_or_default(field: &'static str, given: Option<&str>, default: &str) -> GenerateResult<String> {
    let label = given.unwrap_or(default).trim();
    if label.is_empty() {
        return Err(GenerateError::invalid(field, "label name cannot be empty"));
    }
    Ok(label.to_string())
}

fn required<T: Copy>(field: &'static str, value: Option<T>) -> GenerateResult<T> {
    value.ok_or_else(|| GenerateError::invalid(field, "cannot be null"))
}

fn count(field: &'static str, value: Option<i64>) -> GenerateResult<usize> {
    let value = required(field, value)?;
    if value < 0 {
        return Err(GenerateError::invalid(field, format!("must be >= 0, got {}", value)));
    }
    usize::try_from(value)
        .map_err(|_| GenerateError::invalid(field, format!("{} exceeds the addressable size", value)))
}

fn probability(field: &'static str, value: Option<f64>) -> GenerateResult<f64> {
    let value = required(field, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(GenerateError::invalid(
            field,
            format!("must be within [0, 1], got {}", value),
        ));
    }
    Ok(value)
}

fn validate_topology(spec: &TopologySpec) -> GenerateResult<Topology> {
    match *spec {
        TopologySpec::Complete { vertices } => Ok(Topology::Complete {
            vertices: count("vertices", vertices)?,
        }),
        TopologySpec::ErdosRenyiGnp {
            vertices,
            probability: p,
        } => Ok(Topology::ErdosRenyiGnp {
            vertices: count("vertices", vertices)?,
            probability: probability("probability", p)?,
        }),
        TopologySpec::ErdosRenyiGnm { vertices, edges } => {
            let vertices = count("vertices", vertices)?;
            let edges = count("edges", edges)?;
            let max = pair_count(vertices as u64).ok_or_else(|| {
                GenerateError::invalid(
                    "vertices",
                    format!("{} vertices have more pairs than fit in 64 bits", vertices),
                )
            })?;
            if edges as u64 > max {
                return Err(GenerateError::invalid(
                    "edges",
                    format!(
                        "{} vertices admit at most {} edges, got {}",
                        vertices, max, edges
                    ),
                ));
            }
            Ok(Topology::ErdosRenyiGnm { vertices, edges })
        }
        TopologySpec::Tadpole {
            cycle_size,
            path_size,
        } => {
            let cycle_size = count("cycle_size", cycle_size)?;
            let path_size = count("path_size", path_size)?;
            if cycle_size < 3 {
                return Err(GenerateError::invalid(
                    "cycle_size",
                    format!("must be >= 3, got {}", cycle_size),
                ));
            }
            if path_size < 1 {
                return Err(GenerateError::invalid(
                    "path_size",
                    format!("must be >= 1, got {}", path_size),
                ));
            }
            if cycle_size.checked_add(path_size).is_none() {
                return Err(GenerateError::invalid(
                    "path_size",
                    "cycle_size + path_size overflows",
                ));
            }
            Ok(Topology::Tadpole {
                cycle_size,
                path_size,
            })
        }
        TopologySpec::WattsStrogatz {
            vertices,
            neighbors,
            rewire_probability,
        } => {
            let vertices = count("vertices", vertices)?;
            let neighbors = count("neighbors", neighbors)?;
            let rewire_probability = probability("rewire_probability", rewire_probability)?;
            if neighbors < 2 || neighbors % 2 != 0 {
                return Err(GenerateError::invalid(
                    "neighbors",
                    format!("must be an even number >= 2, got {}", neighbors),
                ));
            }
            if vertices <= neighbors {
                return Err(GenerateError::invalid(
                    "vertices",
                    format!("must exceed neighbors ({}), got {}", neighbors, vertices),
                ));
            }
            Ok(Topology::WattsStrogatz {
                vertices,
                neighbors,
                rewire_probability,
            })
        }
    }
}

/// Topology parameters after validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Topology {
    Complete {
        vertices: usize,
    },
    ErdosRenyiGnp {
        vertices: usize,
        probability: f64,
    },
    ErdosRenyiGnm {
        vertices: usize,
        edges: usize,
    },
    Tadpole {
        cycle_size: usize,
        path_size: usize,
    },
    WattsStrogatz {
        vertices: usize,
        neighbors: usize,
        rewire_probability: f64,
    },
}

impl Topology {
    pub fn kind(&self) -> TopologyKind {
        match self {
            Topology::Complete { .. } => TopologyKind::Complete,
            Topology::ErdosRenyiGnp { .. } => TopologyKind::ErdosRenyiGnp,
            Topology::ErdosRenyiGnm { .. } => TopologyKind::ErdosRenyiGnm,
            Topology::Tadpole { .. } => TopologyKind::Tadpole,
            Topology::WattsStrogatz { .. } => TopologyKind::WattsStrogatz,
        }
    }

    /// Number of vertices the topology creates
    pub fn vertex_count(&self) -> usize {
        match *self {
            Topology::Complete { vertices }
            | Topology::ErdosRenyiGnp { vertices, .. }
            | Topology::ErdosRenyiGnm { vertices, .. }
            | Topology::WattsStrogatz { vertices, .. } => vertices,
            // Checked during validation
            Topology::Tadpole {
                cycle_size,
                path_size,
            } => cycle_size + path_size,
        }
    }

    /// Whether generation consumes random draws
    pub fn is_random(&self) -> bool {
        matches!(
            self,
            Topology::ErdosRenyiGnp { .. }
                | Topology::ErdosRenyiGnm { .. }
                | Topology::WattsStrogatz { .. }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopologyKind {
    Complete,
    ErdosRenyiGnp,
    ErdosRenyiGnm,
    Tadpole,
    WattsStrogatz,
}

impl fmt::Display for TopologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TopologyKind::Complete => "complete",
            TopologyKind::ErdosRenyiGnp => "erdos_renyi_gnp",
            TopologyKind::ErdosRenyiGnm => "erdos_renyi_gnm",
            TopologyKind::Tadpole => "tadpole",
            TopologyKind::WattsStrogatz => "watts_strogatz",
        };
        write!(f, "{}", name)
    }
}

/// Fully normalized input for one generator run
///
/// Only [`GenerationSpec::validate`] builds one, so every value reaching a
/// generator has passed the parameter rules:
///
/// ```compile_fail
/// use samyama_graphgen::{PropertyMap, Topology, ValidatedSpec};
///
/// let spec = ValidatedSpec {
///     graph_name: "g".to_string(),
///     topology: Topology::Tadpole { cycle_size: 0, path_size: 0 },
///     vertex_label: "V".to_string(),
///     edge_label: "E".to_string(),
///     vertex_properties: PropertyMap::new(),
///     edge_properties: PropertyMap::new(),
///     bidirectional: false,
/// };
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSpec {
    graph_name: String,
    topology: Topology,
    vertex_label: String,
    edge_label: String,
    vertex_properties: PropertyMap,
    edge_properties: PropertyMap,
    bidirectional: bool,
}

impl ValidatedSpec {
    pub fn graph_name(&self) -> &str {
        &self.graph_name
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn vertex_label(&self) -> &str {
        &self.vertex_label
    }

    pub fn edge_label(&self) -> &str {
        &self.edge_label
    }

    pub fn vertex_properties(&self) -> &PropertyMap {
        &self.vertex_properties
    }

    pub fn edge_properties(&self) -> &PropertyMap {
        &self.edge_properties
    }

    pub fn bidirectional(&self) -> bool {
        self.bidirectional
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_EDGE_LABEL, DEFAULT_VERTEX_LABEL};

    fn validate(spec: GenerationSpec) -> GenerateResult<ValidatedSpec> {
        spec.validate(&GeneratorConfig::default())
    }

    fn field_of(result: GenerateResult<ValidatedSpec>) -> &'static str {
        result.unwrap_err().field().unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let spec = GenerationSpec::new("g", TopologySpec::ErdosRenyiGnp {
            vertices: Some(10),
            probability: Some(0.5),
        });
        let valid = validate(spec).unwrap();
        assert_eq!(valid.graph_name(), "g");
        assert_eq!(valid.vertex_label(), DEFAULT_VERTEX_LABEL);
        assert_eq!(valid.edge_label(), DEFAULT_EDGE_LABEL);
        assert!(valid.bidirectional());
        assert!(valid.vertex_properties().is_empty());
        assert_eq!(valid.topology().vertex_count(), 10);
    }

    #[test]
    fn test_required_fields() {
        let mut spec = GenerationSpec::new("g", TopologySpec::Complete { vertices: Some(3) });
        spec.graph_name = None;
        assert_eq!(field_of(validate(spec)), "graph_name");

        let spec = GenerationSpec::new("  ", TopologySpec::Complete { vertices: Some(3) });
        assert_eq!(field_of(validate(spec)), "graph_name");

        let spec = GenerationSpec::new("g", TopologySpec::Complete { vertices: None });
        assert_eq!(field_of(validate(spec)), "vertices");

        let spec = GenerationSpec::new("g", TopologySpec::ErdosRenyiGnp {
            vertices: Some(3),
            probability: None,
        });
        assert_eq!(field_of(validate(spec)), "probability");
    }

    #[test]
    fn test_label_rules() {
        let spec = GenerationSpec::new("g", TopologySpec::Complete { vertices: Some(3) })
            .with_options(GenerateOptions::new().vertex_label("Node").edge_label("Node"));
        assert_eq!(field_of(validate(spec)), "edge_label");

        let spec = GenerationSpec::new("g", TopologySpec::Complete { vertices: Some(3) })
            .with_options(GenerateOptions::new().vertex_label(""));
        assert_eq!(field_of(validate(spec)), "vertex_label");
    }

    #[test]
    fn test_complete_direction() {
        let spec = GenerationSpec::new("g", TopologySpec::Complete { vertices: Some(3) })
            .with_options(GenerateOptions::new().bidirectional(true));
        assert_eq!(field_of(validate(spec)), "bidirectional");

        let spec = GenerationSpec::new("g", TopologySpec::Complete { vertices: Some(0) });
        assert!(!validate(spec).unwrap().bidirectional());
    }

    #[test]
    fn test_numeric_bounds() {
        let cases = vec![
            (TopologySpec::Complete { vertices: Some(-1) }, "vertices"),
            (
                TopologySpec::ErdosRenyiGnp { vertices: Some(4), probability: Some(1.5) },
                "probability",
            ),
            (
                TopologySpec::ErdosRenyiGnp { vertices: Some(4), probability: Some(f64::NAN) },
                "probability",
            ),
            (TopologySpec::ErdosRenyiGnm { vertices: Some(5), edges: Some(11) }, "edges"),
            (TopologySpec::ErdosRenyiGnm { vertices: Some(5), edges: Some(-1) }, "edges"),
            // C(2^33, 2) does not fit in a u64
            (TopologySpec::ErdosRenyiGnm { vertices: Some(1 << 33), edges: Some(1) }, "vertices"),
            (TopologySpec::Tadpole { cycle_size: Some(0), path_size: Some(0) }, "cycle_size"),
            (TopologySpec::Tadpole { cycle_size: Some(2), path_size: Some(1) }, "cycle_size"),
            (TopologySpec::Tadpole { cycle_size: Some(3), path_size: Some(0) }, "path_size"),
            (
                TopologySpec::WattsStrogatz {
                    vertices: Some(10),
                    neighbors: Some(3),
                    rewire_probability: Some(0.1),
                },
                "neighbors",
            ),
            (
                TopologySpec::WattsStrogatz {
                    vertices: Some(4),
                    neighbors: Some(4),
                    rewire_probability: Some(0.1),
                },
                "vertices",
            ),
            (
                TopologySpec::WattsStrogatz {
                    vertices: Some(10),
                    neighbors: Some(4),
                    rewire_probability: Some(-0.1),
                },
                "rewire_probability",
            ),
        ];

        for (topology, field) in cases {
            let spec = GenerationSpec::new("g", topology.clone());
            assert_eq!(field_of(validate(spec)), field, "{:?}", topology);
        }
    }

    #[test]
    fn test_boundaries_accepted() {
        let accepted = vec![
            TopologySpec::Complete { vertices: Some(0) },
            TopologySpec::ErdosRenyiGnp { vertices: Some(0), probability: Some(0.0) },
            TopologySpec::ErdosRenyiGnp { vertices: Some(2), probability: Some(1.0) },
            TopologySpec::ErdosRenyiGnm { vertices: Some(5), edges: Some(10) },
            TopologySpec::ErdosRenyiGnm { vertices: Some(1), edges: Some(0) },
            TopologySpec::Tadpole { cycle_size: Some(3), path_size: Some(1) },
            TopologySpec::WattsStrogatz {
                vertices: Some(3),
                neighbors: Some(2),
                rewire_probability: Some(1.0),
            },
        ];
        for topology in accepted {
            let spec = GenerationSpec::new("g", topology.clone());
            assert!(validate(spec).is_ok(), "{:?}", topology);
        }
    }

    #[test]
    fn test_yaml_spec() {
        let spec = GenerationSpec::from_yaml_str(
            "graph_name: social\n\
             topology: watts_strogatz\n\
             vertices: 100\n\
             neighbors: 4\n\
             rewire_probability: 0.1\n\
             edge_label: KNOWS\n\
             bidirectional: false\n\
             seed: 42\n",
        )
        .unwrap();

        assert_eq!(spec.graph_name.as_deref(), Some("social"));
        assert_eq!(spec.seed, Some(42));
        assert_eq!(spec.options.edge_label.as_deref(), Some("KNOWS"));
        assert_eq!(
            spec.topology,
            TopologySpec::WattsStrogatz {
                vertices: Some(100),
                neighbors: Some(4),
                rewire_probability: Some(0.1),
            }
        );

        let valid = validate(spec).unwrap();
        assert!(!valid.bidirectional());
        assert_eq!(valid.topology().kind(), TopologyKind::WattsStrogatz);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = GenerationSpec::from_yaml_str(
            "graph_name: g\n\
             topology: tadpole\n\
             cycle_size: 3\n\
             path_size: 1\n\
             edge_lable: LINK\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("edge_lable"), "{}", err);

        // Valid for another topology, not for this one
        let err = GenerationSpec::from_json_str(
            r#"{"graph_name": "g", "topology": "complete", "vertices": 3, "probability": 0.5}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("probability"), "{}", err);

        let spec = GenerationSpec::from_json_str(
            r#"{"graph_name": "g", "topology": "complete", "vertices": 3, "edge_label": "LINK", "seed": 1}"#,
        )
        .unwrap();
        assert_eq!(spec.options.edge_label.as_deref(), Some("LINK"));
    }

    #[test]
    fn test_json_spec_with_properties() {
        let spec = GenerationSpec::from_json_str(
            r#"{"graph_name": "g", "topology": "tadpole", "cycle_size": 3, "path_size": 2,
                "vertex_properties": {"kind": "seed"}}"#,
        )
        .unwrap();
        let valid = validate(spec).unwrap();
        assert_eq!(valid.topology().vertex_count(), 5);
        assert_eq!(
            valid.vertex_properties().get("kind").unwrap().as_string(),
            Some("seed")
        );
    }
}
