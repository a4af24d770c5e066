//! Page artifacts consumed by the audit
//!
//! Artifacts are collected by the host pipeline before any audit runs and
//! arrive here as JSON. Only the three artifacts this rule depends on are
//! modelled; unknown keys are ignored.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single protocol event from a devtools log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevtoolsEvent {
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Ordered protocol events recorded during one gather pass
pub type DevtoolsLog = Vec<DevtoolsEvent>;

/// URLs of the audited page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageUrl {
    #[serde(default)]
    pub requested_url: String,
    /// URL after redirects; base for stylesheets without a usable source URL
    pub final_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylesheetHeader {
    #[serde(rename = "sourceURL", default)]
    pub source_url: String,
}

/// A stylesheet and its full text as seen by the page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stylesheet {
    #[serde(default)]
    pub header: StylesheetHeader,
    #[serde(default)]
    pub content: String,
}

impl Stylesheet {
    pub fn new(source_url: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            header: StylesheetHeader {
                source_url: source_url.into(),
            },
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssUsage {
    #[serde(default)]
    pub stylesheets: Vec<Stylesheet>,
}

/// Artifacts required by the font preload audit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Artifacts {
    #[serde(rename = "devtoolsLogs", default)]
    pub devtools_logs: HashMap<String, DevtoolsLog>,
    #[serde(rename = "URL")]
    pub url: PageUrl,
    #[serde(rename = "CSSUsage", default)]
    pub css_usage: CssUsage,
}

impl Artifacts {
    /// Parse artifacts from their JSON form
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn devtools_log(&self, pass: &str) -> Option<&DevtoolsLog> {
        self.devtools_logs.get(pass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_wire_names() {
        let json = r#"{
            "devtoolsLogs": {"defaultPass": [{"method": "Page.loadEventFired", "params": {}}]},
            "URL": {"requestedUrl": "http://example.com", "finalUrl": "https://example.com/"},
            "CSSUsage": {"stylesheets": [{"header": {"sourceURL": "https://example.com/a.css"}, "content": "body{}"}]},
            "Timing": []
        }"#;
        let artifacts = Artifacts::from_json(json).unwrap();

        assert_eq!(artifacts.url.final_url, "https://example.com/");
        assert_eq!(artifacts.devtools_log("defaultPass").map(Vec::len), Some(1));
        assert!(artifacts.devtools_log("otherPass").is_none());
        assert_eq!(
            artifacts.css_usage.stylesheets[0].header.source_url,
            "https://example.com/a.css"
        );
    }

    #[test]
    fn test_event_without_params() {
        let event: DevtoolsEvent = serde_json::from_str(r#"{"method":"X.y"}"#).unwrap();
        assert!(event.params.is_null());
    }
}
