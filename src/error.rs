// src/error.rs
use std::fmt;
use thiserror::Error;

/// The bound a coordinate violated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Min(f64),
    Max(f64),
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Min(v) => write!(f, "minimum {}", v),
            Bound::Max(v) => write!(f, "maximum {}", v),
        }
    }
}

/// Errors raised while validating a single numeric field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be a finite number, but was: {value}")]
    TypeValidation { field: String, value: String },

    #[error("{field} is out of range ({bound}), but was: {value}")]
    RangeValidation {
        field: String,
        value: f64,
        bound: Bound,
    },
}

impl ValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::TypeValidation { field, .. } => field,
            ValidationError::RangeValidation { field, .. } => field,
        }
    }
}

#[derive(Error, Debug)]
pub enum DocstoreError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("JSON processing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
}
