//! The `uses-rel-preload-and-font-display` audit
//!
//! Flags fonts declared with `font-display: optional` that the page never
//! tried to preload. Two independent extractions feed one set comparison:
//!
//! 1. `font_display` finds the hint URLs in the collected stylesheets
//! 2. `preload` finds the font URLs fetched through `<link rel=preload>`
//! 3. the gap is every hint URL missing from the preload attempts

pub mod details;
pub mod errors;
pub mod meta;
pub mod product;

pub use details::{ItemValueType, TableDetails, TableHeading};
pub use errors::{AuditError, AuditResult};
pub use meta::AuditMeta;
pub use product::{AuditOutcome, AuditProduct};

use log::debug;
use tracing::{Instrument, info_span};

use crate::artifacts::Artifacts;
use crate::config::AuditConfig;
use crate::font_display::find_font_display_declarations;
use crate::network::{DevtoolsLogRecords, NetworkRecordSource};
use crate::preload::{compute_gap, retain_reused, successfully_reused_preloads, urls_attempted_to_preload};

/// Stateless audit rule; holds only its configuration
#[derive(Debug, Clone, Default)]
pub struct FontPreloadAudit {
    config: AuditConfig,
}

impl FontPreloadAudit {
    #[must_use]
    pub fn new(config: AuditConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn meta() -> AuditMeta {
        AuditMeta::font_preload()
    }

    #[must_use]
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Run the audit against one page's artifacts
    ///
    /// # Errors
    ///
    /// Only a failure of `source` to produce network records, returned
    /// unchanged. Pages where no font declares the hint never consult
    /// `source` and are reported not applicable.
    pub async fn audit<S>(&self, artifacts: &Artifacts, source: &S) -> AuditResult<AuditProduct>
    where
        S: NetworkRecordSource,
    {
        let span = info_span!("font_preload_audit", page = %artifacts.url.final_url);
        self.run(artifacts, source).instrument(span).await
    }

    async fn run<S>(&self, artifacts: &Artifacts, source: &S) -> AuditResult<AuditProduct>
    where
        S: NetworkRecordSource,
    {
        let hint_urls =
            find_font_display_declarations(artifacts, self.config.hint_regex()).matching_urls;
        debug!("Fonts matching font-display hint: {:?}", hint_urls.iter().collect::<Vec<_>>());

        // Nothing to check, so the network records are never requested.
        if hint_urls.is_empty() {
            tracing::info!(outcome = "not_applicable", "No font declares the hint");
            return Ok(AuditProduct::new(AuditOutcome::NotApplicable, Vec::new()));
        }

        let records = source
            .network_records(artifacts, self.config.pass_name())
            .await?;

        let mut attempted = urls_attempted_to_preload(&records);
        if self.config.exclude_unreused_preloads() {
            attempted = retain_reused(&attempted, &successfully_reused_preloads(&records));
        }
        debug!("Fonts attempted to be preloaded: {attempted:?}");

        let gap = compute_gap(&hint_urls, &attempted);
        let outcome = if gap.is_empty() {
            AuditOutcome::Pass
        } else {
            AuditOutcome::Fail
        };
        tracing::info!(
            hint_fonts = hint_urls.len(),
            preloaded_fonts = attempted.len(),
            flagged = gap.len(),
            ?outcome,
            "Font preload audit finished"
        );

        Ok(AuditProduct::new(outcome, gap))
    }
}

/// Parse artifacts JSON and audit it using the devtools log it contains
///
/// # Errors
///
/// Returns an error if the JSON is not valid artifacts or the configured
/// pass has no devtools log.
pub async fn audit_artifacts_json(config: AuditConfig, json: &str) -> AuditResult<AuditProduct> {
    let artifacts = Artifacts::from_json(json)?;
    FontPreloadAudit::new(config)
        .audit(&artifacts, &DevtoolsLogRecords)
        .await
}
