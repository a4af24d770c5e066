//! Configuration for the font preload audit

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Settings for one audit run
///
/// The hint pattern is compiled once when the config is built or
/// deserialized, never on the audit path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "AuditConfigFile")]
pub struct AuditConfig {
    /// Regex a `font-display` value must match for the font to count as preloadable
    pub(crate) hint_pattern: String,

    #[serde(skip)]
    pub(crate) hint_regex: Regex,

    /// Gather pass whose devtools log supplies the network records
    pub(crate) pass_name: String,

    /// Ignore preloads the browser fetched again instead of reusing
    ///
    /// Off by default: a preload attempt counts whether or not it paid off.
    pub(crate) exclude_unreused_preloads: bool,
}

/// Serialized form of `AuditConfig`; every field is optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
struct AuditConfigFile {
    hint_pattern: Option<String>,
    pass_name: Option<String>,
    #[serde(default)]
    exclude_unreused_preloads: bool,
}

impl TryFrom<AuditConfigFile> for AuditConfig {
    type Error = anyhow::Error;

    fn try_from(file: AuditConfigFile) -> Result<Self, Self::Error> {
        let mut builder = AuditConfig::builder().exclude_unreused_preloads(file.exclude_unreused_preloads);
        if let Some(pattern) = file.hint_pattern {
            builder = builder.hint_pattern(pattern);
        }
        if let Some(pass) = file.pass_name {
            builder = builder.pass_name(pass);
        }
        builder.build()
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        AuditConfig {
            hint_pattern: crate::utils::DEFAULT_HINT_PATTERN.to_string(),
            hint_regex: super::builder::default_hint_regex(),
            pass_name: crate::utils::DEFAULT_PASS.to_string(),
            exclude_unreused_preloads: false,
        }
    }
}
