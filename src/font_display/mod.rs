//! Font-display declarations extracted from page stylesheets

pub mod extractor;

pub use extractor::{FontDisplayDeclarations, find_font_display_declarations};

/// Deduplicated URLs in first-insertion order; membership is exact string equality
pub type UrlSet = indexmap::IndexSet<String>;
