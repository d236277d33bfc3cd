//! Export error types.

use thiserror::Error;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur during export.
///
/// Emitters themselves never fail: absent or malformed optional fields
/// degrade to per-format defaults, since the source graph is user-drawn and
/// may be incomplete. The only caller-visible failure is requesting a
/// format nobody registered.
#[derive(Debug, Error)]
pub enum ExportError {
    /// No emitter is registered for the requested format identifier.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Snapshot serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
