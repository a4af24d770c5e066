//! Network record types
//!
//! A `NetworkRecord` is one observed resource fetch during a page load,
//! reduced to the attributes the font audits care about.

use serde::{Deserialize, Serialize};

/// Resource type as reported by the browser's network domain
///
/// Types the audits never look at still get a variant so that records
/// round-trip through JSON; anything unrecognised lands in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    Document,
    Stylesheet,
    Image,
    Media,
    Font,
    Script,
    TextTrack,
    #[serde(rename = "XHR")]
    Xhr,
    Fetch,
    EventSource,
    WebSocket,
    Manifest,
    Ping,
    Preflight,
    #[serde(other)]
    Other,
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResourceType::Document => "Document",
            ResourceType::Stylesheet => "Stylesheet",
            ResourceType::Image => "Image",
            ResourceType::Media => "Media",
            ResourceType::Font => "Font",
            ResourceType::Script => "Script",
            ResourceType::TextTrack => "TextTrack",
            ResourceType::Xhr => "XHR",
            ResourceType::Fetch => "Fetch",
            ResourceType::EventSource => "EventSource",
            ResourceType::WebSocket => "WebSocket",
            ResourceType::Manifest => "Manifest",
            ResourceType::Ping => "Ping",
            ResourceType::Preflight => "Preflight",
            ResourceType::Other => "Other",
        };
        f.write_str(name)
    }
}

/// One resource fetch observed during a page load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRecord {
    /// Protocol request id; redirects share the id of the request they replace
    #[serde(default)]
    pub request_id: String,
    /// Resource URL exactly as the browser reported it
    pub url: String,
    /// `None` when the log never reported a type for this request
    #[serde(default)]
    pub resource_type: Option<ResourceType>,
    /// True if the fetch was declared through `<link rel=preload>`
    #[serde(default, alias = "isPreloadHinted")]
    pub is_link_preload: bool,
}

impl NetworkRecord {
    pub fn new(url: impl Into<String>, resource_type: ResourceType, is_link_preload: bool) -> Self {
        Self {
            request_id: String::new(),
            url: url.into(),
            resource_type: Some(resource_type),
            is_link_preload,
        }
    }

    #[must_use]
    pub fn is_font(&self) -> bool {
        self.resource_type == Some(ResourceType::Font)
    }
}
