//! Page vitals extraction.
//!
//! This module computes the first contentful paint and the unique same-origin
//! links of a page, either from a live browser page or from any other
//! [`PageEnvironment`] implementation.

// Sub-modules
pub mod environment;
pub mod extractors;
pub mod js_scripts;
pub mod schema;
pub mod static_page;
pub mod vitals;

// Re-exports for public API
pub use environment::{PageEnvironment, PageSnapshot};
pub use extractors::{capture_snapshot, evaluate_vitals_script, extract_vitals, wait_for_body};
pub use schema::{BrowserResult, PaintTiming};
pub use static_page::StaticPage;
pub use vitals::{extract, extract_serialized};
