//! Generator configuration
//!
//! Defaults applied to a [`crate::GenerationSpec`] when it leaves a field
//! unset. Loadable from YAML or JSON.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default vertex label name, used when a spec names none
pub const DEFAULT_VERTEX_LABEL: &str = "_ag_label_vertex";

/// Default edge label name, used when a spec names none
pub const DEFAULT_EDGE_LABEL: &str = "_ag_label_edge";

/// Errors raised while loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Generator defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Vertex label used when a spec omits one
    pub default_vertex_label: String,
    /// Edge label used when a spec omits one
    pub default_edge_label: String,
    /// Whether edges are mirrored when a spec leaves `bidirectional` unset
    pub default_bidirectional: bool,
    /// Fallback seed when a spec carries none (None = OS entropy)
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_vertex_label: DEFAULT_VERTEX_LABEL.to_string(),
            default_edge_label: DEFAULT_EDGE_LABEL.to_string(),
            default_bidirectional: true,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn from_yaml_str(input: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(input)?)
    }

    pub fn from_json_str(input: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load from a file; `.json` is parsed as JSON, anything else as YAML
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_yaml_str(&contents)
        }
    }

    /// Builder-style seed override
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
