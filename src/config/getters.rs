//! Getter methods for `AuditConfig`

use regex::Regex;

use super::types::AuditConfig;

impl AuditConfig {
    #[must_use]
    pub fn hint_pattern(&self) -> &str {
        &self.hint_pattern
    }

    #[must_use]
    pub fn hint_regex(&self) -> &Regex {
        &self.hint_regex
    }

    #[must_use]
    pub fn pass_name(&self) -> &str {
        &self.pass_name
    }

    #[must_use]
    pub fn exclude_unreused_preloads(&self) -> bool {
        self.exclude_unreused_preloads
    }
}
