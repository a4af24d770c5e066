pub mod artifacts;
pub mod audit;
pub mod config;
pub mod font_display;
pub mod network;
pub mod preload;
pub mod utils;

pub use artifacts::{Artifacts, CssUsage, DevtoolsEvent, DevtoolsLog, PageUrl, Stylesheet};
pub use audit::{
    AuditError, AuditMeta, AuditOutcome, AuditProduct, AuditResult, FontPreloadAudit,
    TableDetails, audit_artifacts_json,
};
pub use config::AuditConfig;
pub use font_display::{FontDisplayDeclarations, UrlSet, find_font_display_declarations};
pub use network::{
    DevtoolsLogRecords, NetworkRecord, NetworkRecordSource, NetworkRecordsError,
    RecordedNetworkRecords, ResourceType, network_records_from_devtools_log,
};
pub use preload::{
    FontGapItem, PreloadAttemptSet, compute_gap, retain_reused, successfully_reused_preloads,
    urls_attempted_to_preload,
};
