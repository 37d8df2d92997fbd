//! Page vitals computation
//!
//! Turns the ambient state of a page into a [`BrowserResult`]: the first
//! contentful paint time and the unique same-origin links of the document.
//!
//! The same-origin test is a raw string prefix check against the serialized
//! origin, not a parsed host comparison. A link such as
//! `https://ex.com.evil.com/x` therefore counts as same-origin for
//! `https://ex.com`. This matches the in-page script and is kept as is.

use std::collections::HashSet;

use super::environment::PageEnvironment;
use super::schema::{BrowserResult, FIRST_CONTENTFUL_PAINT, PaintTiming};

/// Compute the vitals record for the page behind `env`
pub fn extract<E: PageEnvironment + ?Sized>(env: &E) -> BrowserResult {
    let fcp = first_contentful_paint(&env.paint_timings());
    let origin = env.origin();
    let links = dedupe_preserving_order(same_origin_links(env.query_anchors(), &origin));

    log::debug!(
        "Extracted vitals for {origin}: fcp={fcp}ms, {} same-origin links",
        links.len()
    );

    BrowserResult { fcp, links }
}

/// Compute the vitals record and serialize it to `{"fcp": ..., "links": [...]}`
pub fn extract_serialized<E: PageEnvironment + ?Sized>(env: &E) -> serde_json::Result<String> {
    extract(env).to_json()
}

/// Start time of the first `first-contentful-paint` entry, or 0 if absent
#[must_use]
pub fn first_contentful_paint(entries: &[PaintTiming]) -> f64 {
    entries
        .iter()
        .find(|entry| entry.name == FIRST_CONTENTFUL_PAINT)
        .map_or(0.0, |entry| entry.start_time)
}

/// Keep only URLs whose text starts with `origin`
pub fn same_origin_links<I>(urls: I, origin: &str) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = String>,
{
    urls.into_iter().filter(move |url| url.starts_with(origin))
}

/// Drop repeated URLs, keeping the first occurrence of each
///
/// Comparison is exact string equality with no normalization.
pub fn dedupe_preserving_order<I>(urls: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    urls.into_iter()
        .filter(|url| seen.insert(url.clone()))
        .collect()
}
