//! Audit outcome and product

use serde::Serialize;

use super::details::TableDetails;
use crate::preload::FontGapItem;

/// Three-way result of the audit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AuditOutcome {
    /// Every preloadable font was preloaded
    Pass,
    /// At least one preloadable font was not preloaded
    Fail,
    /// No font declares the hint, so there was nothing to check
    NotApplicable,
}

impl AuditOutcome {
    #[must_use]
    pub fn score(self) -> f64 {
        match self {
            AuditOutcome::Fail => 0.0,
            AuditOutcome::Pass | AuditOutcome::NotApplicable => 1.0,
        }
    }
}

/// What the audit hands back to the reporting framework
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditProduct {
    pub score: f64,
    pub not_applicable: bool,
    pub details: TableDetails,
}

impl AuditProduct {
    #[must_use]
    pub fn new(outcome: AuditOutcome, gap: Vec<FontGapItem>) -> Self {
        Self {
            score: outcome.score(),
            not_applicable: outcome == AuditOutcome::NotApplicable,
            details: TableDetails::font_urls(gap),
        }
    }

    #[must_use]
    pub fn outcome(&self) -> AuditOutcome {
        if self.not_applicable {
            AuditOutcome::NotApplicable
        } else if self.details.items.is_empty() {
            AuditOutcome::Pass
        } else {
            AuditOutcome::Fail
        }
    }

    /// Flagged font URLs in report order
    pub fn flagged_urls(&self) -> impl Iterator<Item = &str> {
        self.details.items.iter().map(|item| item.url.as_str())
    }
}
