//! Generation errors

use crate::backend::StoreError;
use std::collections::TryReserveError;
use thiserror::Error;

/// Errors that can occur while generating a topology
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerateError {
    /// Missing or out-of-range input; raised before anything is written
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    /// Identifier source exhausted or scratch buffer unavailable
    #[error("allocation failed: {0}")]
    Allocation(String),

    /// The store rejected a vertex or edge write
    #[error("sink error: {0}")]
    Sink(StoreError),

    /// The graph or one of its labels could not be ensured
    #[error("catalog error: {0}")]
    Catalog(StoreError),
}

impl GenerateError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        GenerateError::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending field for `InvalidParameter`
    pub fn field(&self) -> Option<&'static str> {
        match self {
            GenerateError::InvalidParameter { field, .. } => Some(*field),
            _ => None,
        }
    }
}

impl From<TryReserveError> for GenerateError {
    fn from(err: TryReserveError) -> Self {
        GenerateError::Allocation(format!("working vertex array: {}", err))
    }
}

pub type GenerateResult<T> = Result<T, GenerateError>;
