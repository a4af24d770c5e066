//! Errors raised while collecting network records

use thiserror::Error;

/// Failure to produce network records for a page load
#[derive(Debug, Error)]
pub enum NetworkRecordsError {
    /// The host pipeline did not supply a devtools log for the pass
    #[error("No devtools log recorded for pass '{pass}'")]
    MissingDevtoolsLog { pass: String },

    /// Reading pre-collected records failed
    #[error("Failed to read network records from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Pre-collected records were not valid JSON
    #[error("Invalid network records JSON: {0}")]
    Json(#[from] serde_json::Error),
}
