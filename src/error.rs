//! Custom error types for the envelope tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.
//!
//! Invalid user input on the three budget mutations is *not* an error: those
//! are soft-rejected and reported through `MutationOutcome::Skipped`.

use thiserror::Error;

/// The main error type for envelope tracker operations
#[derive(Error, Debug)]
pub enum EnvelopeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Snapshot storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl EnvelopeError {
    /// Create a "not found" error for envelopes
    pub fn envelope_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Envelope",
            identifier: identifier.into(),
        }
    }
}

impl From<std::io::Error> for EnvelopeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for EnvelopeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for envelope tracker operations
pub type EnvelopeResult<T> = Result<T, EnvelopeError>;
