//! Error types for the mimesniff engine.
//!
//! Sniffing itself is permissive: malformed type strings, truncated
//! containers and short buffers all resolve to "no match". The only failure
//! a sniffing call can surface is a broken signature table.

use thiserror::Error;

/// Main error type for mimesniff operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SniffError {
    /// A signature whose pattern and mask differ in length.
    #[error("Configuration error: pattern is {pattern_len} bytes but mask is {mask_len} bytes")]
    Configuration { pattern_len: usize, mask_len: usize },

    /// A MIME type string that is not `type/subtype[;params]` with token syntax
    #[error("Invalid MIME type: {0}")]
    InvalidMimeType(String),

    /// A configured signature that could not be decoded
    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SniffError {
    /// True for errors caused by a defective signature table.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SniffError::Configuration { .. } | SniffError::InvalidSignature(_)
        )
    }
}

impl From<serde_json::Error> for SniffError {
    fn from(err: serde_json::Error) -> Self {
        SniffError::Serialization(err.to_string())
    }
}

/// Result type alias for mimesniff operations
pub type Result<T> = std::result::Result<T, SniffError>;
