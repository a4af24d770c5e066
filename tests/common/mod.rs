//! Test fixtures for the font preload audit suite

use font_preload_audit::{
    Artifacts, CssUsage, DevtoolsEvent, NetworkRecord, PageUrl, ResourceType, Stylesheet,
};
use serde_json::json;

pub const PAGE_URL: &str = "https://example.com/";

/// A stylesheet declaring one `@font-face` rule per (url, font-display) pair
#[allow(dead_code)]
pub fn font_face_stylesheet(source_url: &str, fonts: &[(&str, &str)]) -> Stylesheet {
    let content: String = fonts
        .iter()
        .enumerate()
        .map(|(i, (url, display))| {
            format!(
                "@font-face {{\n  font-family: F{i};\n  src: url(\"{url}\") format(\"woff2\");\n  font-display: {display};\n}}\n"
            )
        })
        .collect();
    Stylesheet::new(source_url, content)
}

/// Devtools events for one fetch, in the order the browser emits them
#[allow(dead_code)]
pub fn fetch_events(request_id: &str, url: &str, resource_type: &str, preload: bool) -> Vec<DevtoolsEvent> {
    let initiator = if preload { "preload" } else { "parser" };
    vec![
        DevtoolsEvent {
            method: "Network.requestWillBeSent".to_string(),
            params: json!({
                "requestId": request_id,
                "request": {"url": url},
                "initiator": {"type": initiator}
            }),
        },
        DevtoolsEvent {
            method: "Network.responseReceived".to_string(),
            params: json!({"requestId": request_id, "type": resource_type}),
        },
    ]
}

/// Artifacts for a page with the given stylesheets and devtools log
#[allow(dead_code)]
pub fn page_artifacts(stylesheets: Vec<Stylesheet>, log: Vec<DevtoolsEvent>) -> Artifacts {
    let mut artifacts = Artifacts {
        url: PageUrl {
            requested_url: PAGE_URL.to_string(),
            final_url: PAGE_URL.to_string(),
        },
        css_usage: CssUsage { stylesheets },
        ..Artifacts::default()
    };
    artifacts.devtools_logs.insert("defaultPass".to_string(), log);
    artifacts
}

#[allow(dead_code)]
pub fn font(url: &str, preload: bool) -> NetworkRecord {
    NetworkRecord::new(url, ResourceType::Font, preload)
}
