//! Error types for core diagram operations.

use thiserror::Error;

/// Result type for core diagram operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core diagram operations.
///
/// The graph builder, containment resolver, and hierarchy builder are total
/// functions and never fail; only snapshot (de)serialization can error.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Snapshot serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
