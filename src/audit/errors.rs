//! Error types for audit runs

use thiserror::Error;

use crate::network::NetworkRecordsError;

/// Result type alias for audit operations
pub type AuditResult<T> = Result<T, AuditError>;

/// Failures that abort an audit run
///
/// Empty inputs are never errors; they produce a not-applicable or
/// passing product instead.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Network record collection failed; passed through as-is
    #[error(transparent)]
    NetworkRecords(#[from] NetworkRecordsError),

    /// Artifacts could not be read
    #[error("Invalid artifacts: {0}")]
    Artifacts(#[from] serde_json::Error),
}
