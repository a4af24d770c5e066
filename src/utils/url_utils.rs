//! URL helpers for resolving font references found in stylesheets.

use anyhow::{Context, Result};
use url::Url;

/// Check if a URL is usable as a resolution base
///
/// Stylesheets injected by script or inlined in `<style>` carry an empty or
/// synthetic `sourceURL`, in which case the page URL must be used instead.
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    Url::parse(url).is_ok_and(|parsed| !parsed.cannot_be_a_base())
}

/// Resolve a potentially relative URL against a base URL
///
/// Unlike link rewriting, the result is not re-encoded: the resolved string
/// has to compare equal to what the browser reports for the same fetch.
pub fn resolve_url(base_url: &str, url: &str) -> Result<String> {
    let base = Url::parse(base_url).context("Invalid base URL")?;
    let resolved = base.join(url).context("Failed to resolve URL")?;
    Ok(resolved.to_string())
}
