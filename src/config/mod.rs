//! Configuration module for the font preload audit
//!
//! This module provides the `AuditConfig` struct and its builder with
//! validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::AuditConfigBuilder;
pub use types::AuditConfig;
