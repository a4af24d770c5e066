//! `@font-face` scanning
//!
//! Stylesheet text is matched with regular expressions rather than a CSS
//! parser: the collected content is what the browser served, and only the
//! `font-display` value and the `src` URLs of each rule are needed.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use super::UrlSet;
use crate::artifacts::{Artifacts, Stylesheet};
use crate::utils::{is_valid_url, resolve_url};

static NEWLINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\r\n]+").expect("newline regex is valid"));

static FONT_FACE_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@font-face\s*\{(.*?)\}").expect("font-face regex is valid"));

static FONT_DISPLAY_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"font-display\s*:\s*(\w+)\s*(;|\})").expect("font-display regex is valid")
});

static CSS_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"url\((.*?)\)").expect("css url regex is valid"));

/// Font URLs partitioned by whether their `font-display` matched the hint pattern
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontDisplayDeclarations {
    pub matching_urls: UrlSet,
    pub non_matching_urls: UrlSet,
}

/// Strip one pair of matching quotes around a `url()` argument
fn unquote(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if (first == b'"' || first == b'\'') && bytes[bytes.len() - 1] == first {
            return &raw[1..raw.len() - 1];
        }
    }
    raw
}

/// Raw `url()` arguments of one `@font-face` rule, quotes removed
fn font_urls(rule: &str) -> impl Iterator<Item = &str> {
    CSS_URL
        .captures_iter(rule)
        .filter_map(|caps| caps.get(1))
        .map(|m| unquote(m.as_str().trim()))
}

/// Scan one stylesheet, adding its font URLs to the matching or non-matching set
fn scan_stylesheet(
    stylesheet: &Stylesheet,
    page_url: &str,
    hint_pattern: &Regex,
    declarations: &mut FontDisplayDeclarations,
) {
    let base_url = if is_valid_url(&stylesheet.header.source_url) {
        stylesheet.header.source_url.as_str()
    } else {
        page_url
    };

    let content = NEWLINES.replace_all(&stylesheet.content, " ");
    for rule in FONT_FACE_RULE.find_iter(&content) {
        let rule = rule.as_str();
        let font_display = FONT_DISPLAY_VALUE
            .captures(rule)
            .and_then(|caps| caps.get(1))
            .map_or("", |m| m.as_str());

        let target = if hint_pattern.is_match(font_display) {
            &mut declarations.matching_urls
        } else {
            &mut declarations.non_matching_urls
        };

        for relative_url in font_urls(rule) {
            match resolve_url(base_url, relative_url) {
                Ok(absolute_url) => {
                    target.insert(absolute_url);
                }
                Err(e) => debug!("Skipping font URL '{relative_url}' against '{base_url}': {e}"),
            }
        }
    }
}

/// Find every font URL declared by an `@font-face` rule in the page's stylesheets
///
/// URLs are resolved against the stylesheet's own URL, or the page's final
/// URL for inline and script-inserted sheets. A rule without `font-display`
/// is tested as the empty string.
#[must_use]
pub fn find_font_display_declarations(
    artifacts: &Artifacts,
    hint_pattern: &Regex,
) -> FontDisplayDeclarations {
    let mut declarations = FontDisplayDeclarations::default();
    for stylesheet in &artifacts.css_usage.stylesheets {
        scan_stylesheet(
            stylesheet,
            &artifacts.url.final_url,
            hint_pattern,
            &mut declarations,
        );
    }
    declarations
}
