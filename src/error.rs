//! Error handling module for engine-state
//!
//! Provides the crate error type using thiserror. Construction of an
//! [`Engine`](crate::engine::Engine) is the only place a domain error can occur.

use thiserror::Error;

/// Main error type for engine-state
#[derive(Error, Debug)]
pub enum EngineError {
    /// A constructor argument failed validation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO errors (writing output, reading files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for engine-state operations
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Create an invalid-argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Returns true if this is an invalid-argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
