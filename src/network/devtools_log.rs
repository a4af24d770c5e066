//! Build network records from a recorded devtools log
//!
//! Only two protocol events matter: `Network.requestWillBeSent` opens a
//! record (or a new one per redirect hop) and `Network.responseReceived`
//! fills in the resource type the browser settled on. Events that do not
//! deserialize into the expected shape are skipped, never fatal.

use log::{debug, warn};
use serde::Deserialize;
use std::collections::HashMap;

use super::types::{NetworkRecord, ResourceType};
use crate::artifacts::{DevtoolsEvent, DevtoolsLog};
use crate::utils::{PRELOAD_INITIATOR, REQUEST_WILL_BE_SENT, RESPONSE_RECEIVED};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RequestPayload {
    url: String,
    #[serde(default)]
    is_link_preload: bool,
}

#[derive(Debug, Deserialize)]
struct Initiator {
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RequestWillBeSent {
    request_id: String,
    request: RequestPayload,
    #[serde(rename = "type", default)]
    resource_type: Option<ResourceType>,
    #[serde(default)]
    initiator: Option<Initiator>,
    #[serde(default)]
    redirect_response: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseReceived {
    request_id: String,
    #[serde(rename = "type", default)]
    resource_type: Option<ResourceType>,
}

impl RequestWillBeSent {
    fn into_record(self) -> NetworkRecord {
        let preload_initiated = self
            .initiator
            .as_ref()
            .is_some_and(|initiator| initiator.kind == PRELOAD_INITIATOR);

        NetworkRecord {
            request_id: self.request_id,
            url: self.request.url,
            resource_type: self.resource_type,
            is_link_preload: preload_initiated || self.request.is_link_preload,
        }
    }
}

/// Accumulates records in first-seen order, indexed by request id
#[derive(Debug, Default)]
struct RecordBuilder {
    records: Vec<NetworkRecord>,
    by_request_id: HashMap<String, usize>,
}

impl RecordBuilder {
    fn on_request_will_be_sent(&mut self, event: RequestWillBeSent) {
        let is_redirect = event.redirect_response.is_some();
        if !is_redirect && self.by_request_id.contains_key(&event.request_id) {
            debug!("Duplicate requestWillBeSent for {}, keeping first", event.request_id);
            return;
        }

        let record = event.into_record();
        self.by_request_id
            .insert(record.request_id.clone(), self.records.len());
        self.records.push(record);
    }

    fn on_response_received(&mut self, event: ResponseReceived) {
        let Some(&index) = self.by_request_id.get(&event.request_id) else {
            debug!("responseReceived for unknown request {}", event.request_id);
            return;
        };
        if let Some(resource_type) = event.resource_type {
            self.records[index].resource_type = Some(resource_type);
        }
    }

    fn apply(&mut self, event: &DevtoolsEvent) {
        match event.method.as_str() {
            REQUEST_WILL_BE_SENT => match RequestWillBeSent::deserialize(&event.params) {
                Ok(params) => self.on_request_will_be_sent(params),
                Err(e) => warn!("Skipping malformed {REQUEST_WILL_BE_SENT} event: {e}"),
            },
            RESPONSE_RECEIVED => match ResponseReceived::deserialize(&event.params) {
                Ok(params) => self.on_response_received(params),
                Err(e) => warn!("Skipping malformed {RESPONSE_RECEIVED} event: {e}"),
            },
            _ => {}
        }
    }
}

/// Reduce a devtools log to one record per fetch (redirect hops included)
#[must_use]
pub fn network_records_from_devtools_log(log: &DevtoolsLog) -> Vec<NetworkRecord> {
    let mut builder = RecordBuilder::default();
    for event in log {
        builder.apply(event);
    }
    debug!(
        "Built {} network records from {} devtools events",
        builder.records.len(),
        log.len()
    );
    builder.records
}
