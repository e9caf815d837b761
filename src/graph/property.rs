//! Property payloads attached to generated vertices and edges
//!
//! Generators never inspect these values; they are cloned onto every record
//! of a run and handed to the sink as-is.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single property value
///
/// Untagged, so a spec file carries plain JSON/YAML scalars, lists and maps.
/// Variant order matters for untagged decoding: integers must be tried
/// before floats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<PropertyValue>),
    Map(HashMap<String, PropertyValue>),
    Null,
}

impl PropertyValue {
    pub fn as_string(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view; integers widen to `f64`
    pub fn as_float(&self) -> Option<f64> {
        match *self {
            PropertyValue::Float(f) => Some(f),
            PropertyValue::Integer(i) => Some(i as f64),
            _ => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        PropertyValue::Integer(i)
    }
}

impl From<f64> for PropertyValue {
    fn from(f: f64) -> Self {
        PropertyValue::Float(f)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Boolean(b)
    }
}

/// Property map for vertex and edge payloads (empty by default)
pub type PropertyMap = HashMap<String, PropertyValue>;
