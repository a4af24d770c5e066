//! Declarative metadata the host pipeline registers the audit with

use serde::Serialize;

use crate::utils::AUDIT_ID;

pub const TITLE: &str = "Fonts with `font-display: optional` are preloaded";
pub const FAILURE_TITLE: &str = "Fonts with `font-display: optional` are not preloaded";
pub const DESCRIPTION: &str = "Preload `optional` fonts so first-time visitors may use them. \
    A font with `font-display: optional` that has not arrived by first paint is never used \
    for that page load; preloading it makes it likely to arrive in time.";
pub const COLUMN_URL: &str = "URL";

/// Artifacts the audit reads
pub static REQUIRED_ARTIFACTS: [&str; 3] = ["devtoolsLogs", "URL", "CSSUsage"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditMeta {
    pub id: &'static str,
    pub title: &'static str,
    pub failure_title: &'static str,
    pub description: &'static str,
    pub required_artifacts: &'static [&'static str],
}

impl AuditMeta {
    #[must_use]
    pub fn font_preload() -> Self {
        Self {
            id: AUDIT_ID,
            title: TITLE,
            failure_title: FAILURE_TITLE,
            description: DESCRIPTION,
            required_artifacts: &REQUIRED_ARTIFACTS,
        }
    }
}
