//! Network records for a page load
//!
//! Turns recorded protocol events into `NetworkRecord`s and defines the
//! asynchronous collaborator the audit awaits for them.

pub mod devtools_log;
pub mod errors;
pub mod source;
pub mod types;

pub use devtools_log::network_records_from_devtools_log;
pub use errors::NetworkRecordsError;
pub use source::{DevtoolsLogRecords, NetworkRecordSource, RecordedNetworkRecords};
pub use types::{NetworkRecord, ResourceType};
