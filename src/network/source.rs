//! Collaborators that supply network records to the audit
//!
//! The audit awaits exactly one of these per run. Whatever error a source
//! raises reaches the caller unchanged.

use std::future::Future;
use std::path::PathBuf;

use super::devtools_log::network_records_from_devtools_log;
use super::errors::NetworkRecordsError;
use super::types::NetworkRecord;
use crate::artifacts::Artifacts;

/// Asynchronous provider of the network records for one gather pass
pub trait NetworkRecordSource {
    fn network_records(
        &self,
        artifacts: &Artifacts,
        pass: &str,
    ) -> impl Future<Output = Result<Vec<NetworkRecord>, NetworkRecordsError>> + Send;
}

/// Derives records from the devtools log stored in the artifacts
#[derive(Debug, Clone, Copy, Default)]
pub struct DevtoolsLogRecords;

impl NetworkRecordSource for DevtoolsLogRecords {
    async fn network_records(
        &self,
        artifacts: &Artifacts,
        pass: &str,
    ) -> Result<Vec<NetworkRecord>, NetworkRecordsError> {
        let log = artifacts
            .devtools_log(pass)
            .ok_or_else(|| NetworkRecordsError::MissingDevtoolsLog {
                pass: pass.to_string(),
            })?;
        Ok(network_records_from_devtools_log(log))
    }
}

/// Loads records that were already reduced and saved as a JSON array
///
/// Useful when the devtools log itself was not kept; the artifacts are
/// ignored.
#[derive(Debug, Clone)]
pub struct RecordedNetworkRecords {
    path: PathBuf,
}

impl RecordedNetworkRecords {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl NetworkRecordSource for RecordedNetworkRecords {
    async fn network_records(
        &self,
        _artifacts: &Artifacts,
        _pass: &str,
    ) -> Result<Vec<NetworkRecord>, NetworkRecordsError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| NetworkRecordsError::Read {
                path: self.path.display().to_string(),
                source,
            })?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
