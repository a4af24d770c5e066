//! Shared constants for the font preload audit
//!
//! Default values and identifiers used across the crate so the audit
//! metadata, configuration and artifact lookups stay consistent.

/// Stable identifier of the audit within the host pipeline
pub const AUDIT_ID: &str = "uses-rel-preload-and-font-display";

/// Name of the gather pass whose devtools log supplies network records
pub const DEFAULT_PASS: &str = "defaultPass";

/// `font-display` values that degrade gracefully and are safe to preload
///
/// Only `optional` qualifies: the browser gives the font a very short block
/// period and never swaps it in late, so a preload is the only way to get
/// the font used on first paint.
pub const DEFAULT_HINT_PATTERN: &str = r"^(optional)$";

/// Protocol event that opens (or redirects) a network request
pub const REQUEST_WILL_BE_SENT: &str = "Network.requestWillBeSent";

/// Protocol event that carries the response and final resource type
pub const RESPONSE_RECEIVED: &str = "Network.responseReceived";

/// Initiator type the browser reports for `<link rel=preload>` fetches
pub const PRELOAD_INITIATOR: &str = "preload";
