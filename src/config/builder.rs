//! Builder for `AuditConfig`

use anyhow::{Result, anyhow};
use once_cell::sync::Lazy;
use regex::Regex;

use super::types::AuditConfig;
use crate::utils::{DEFAULT_HINT_PATTERN, DEFAULT_PASS};

static DEFAULT_HINT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_HINT_PATTERN).expect("Invalid default hint pattern"));

pub(crate) fn default_hint_regex() -> Regex {
    DEFAULT_HINT_REGEX.clone()
}

/// Compile a `font-display` hint pattern
///
/// # Errors
///
/// Returns an error if the pattern is not a valid regex.
fn compile_hint_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| anyhow!("Invalid font-display hint pattern '{pattern}': {e}"))
}

#[derive(Debug, Clone)]
pub struct AuditConfigBuilder {
    pub(crate) hint_pattern: String,
    pub(crate) pass_name: String,
    pub(crate) exclude_unreused_preloads: bool,
}

impl Default for AuditConfigBuilder {
    fn default() -> Self {
        Self {
            hint_pattern: DEFAULT_HINT_PATTERN.to_string(),
            pass_name: DEFAULT_PASS.to_string(),
            exclude_unreused_preloads: false,
        }
    }
}

impl AuditConfig {
    /// Create a builder for configuring an `AuditConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> AuditConfigBuilder {
        AuditConfigBuilder::default()
    }
}

impl AuditConfigBuilder {
    /// Set the regex `font-display` values are tested against
    ///
    /// Defaults to `^(optional)$`. Anchor the pattern; it is matched
    /// against the bare keyword.
    #[must_use]
    pub fn hint_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.hint_pattern = pattern.into();
        self
    }

    #[must_use]
    pub fn pass_name(mut self, pass: impl Into<String>) -> Self {
        self.pass_name = pass.into();
        self
    }

    /// Only count preloads the browser did not have to fetch again
    #[must_use]
    pub fn exclude_unreused_preloads(mut self, exclude: bool) -> Self {
        self.exclude_unreused_preloads = exclude;
        self
    }

    /// Validate and build the config
    ///
    /// # Errors
    ///
    /// Returns an error if the hint pattern does not compile or the pass
    /// name is empty.
    pub fn build(self) -> Result<AuditConfig> {
        let hint_regex = compile_hint_pattern(&self.hint_pattern)?;

        if self.pass_name.trim().is_empty() {
            return Err(anyhow!("Pass name must not be empty"));
        }

        Ok(AuditConfig {
            hint_pattern: self.hint_pattern,
            hint_regex,
            pass_name: self.pass_name,
            exclude_unreused_preloads: self.exclude_unreused_preloads,
        })
    }
}
