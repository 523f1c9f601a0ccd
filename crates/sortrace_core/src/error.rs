//! Core error types for SORTRACE.

use std::fmt;

/// Core result type
pub type SortResult<T> = Result<T, SortError>;

/// Core error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Input sequence is empty
    EmptyInput,

    /// Algorithm selector outside the supported set
    UnsupportedAlgorithm { name: String },

    /// Negative value given to a non-negative-only engine
    NegativeValue { index: usize, value: i64 },

    /// Validation error
    Validation { field: String, reason: String },
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input sequence is empty"),
            Self::UnsupportedAlgorithm { name } => {
                write!(f, "Unsupported algorithm: {}", name)
            }
            Self::NegativeValue { index, value } => {
                write!(f, "Negative value {} at index {}", value, index)
            }
            Self::Validation { field, reason } => {
                write!(f, "Validation failed for {}: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for SortError {}

impl From<serde_json::Error> for SortError {
    fn from(err: serde_json::Error) -> Self {
        Self::Validation {
            field: "encoding".to_string(),
            reason: err.to_string(),
        }
    }
}
