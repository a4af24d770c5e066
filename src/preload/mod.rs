//! Preload-attempt detection and the gap against `font-display` hints
//!
//! Both steps are pure functions over already-collected data.

pub mod detector;
pub mod gap;
pub mod reuse;

pub use detector::{PreloadAttemptSet, urls_attempted_to_preload};
pub use gap::{FontGapItem, compute_gap};
pub use reuse::{retain_reused, successfully_reused_preloads};
