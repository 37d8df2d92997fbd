//! Configuration module for page analysis
//!
//! This module provides the `AnalyzerConfig` struct with its builder and the
//! `ServerConfig` used by the HTTP front end.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::AnalyzerConfigBuilder;
pub use types::{AnalyzerConfig, ServerConfig};
