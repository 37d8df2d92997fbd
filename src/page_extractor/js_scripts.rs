//! JavaScript evaluation scripts
//!
//! This module contains the JavaScript code evaluated inside the analyzed
//! page. Every script is a single self-contained expression with no side
//! effects on the document.

/// Self-contained page vitals routine
///
/// Evaluates to a JSON string `{"fcp": <number>, "links": [<string>, ...]}`:
/// - `fcp` is the `startTime` of the `first-contentful-paint` paint entry, or 0
/// - `links` are the resolved `a[href]` targets that start with
///   `location.origin`, deduplicated in first-seen order
///
/// The origin test is a plain string prefix, so `https://ex.com.evil.com/`
/// passes for origin `https://ex.com`. [`super::vitals::extract`] computes the
/// same record in Rust from a [`super::environment::PageSnapshot`].
pub const VITALS_SCRIPT: &str = r#"
    (() => {
        const paint = performance
            .getEntriesByType('paint')
            .find(entry => entry.name === 'first-contentful-paint');
        const fcp = paint ? paint.startTime : 0;

        const origin = window.location.origin;

        const links = [];
        const seen = new Set();
        for (const anchor of document.querySelectorAll('a[href]')) {
            const href = anchor.href;
            if (href.startsWith(origin) && !seen.has(href)) {
                seen.add(href);
                links.push(href);
            }
        }

        return JSON.stringify({ fcp: fcp, links: links });
    })()
"#;

/// Raw ambient page state, read without any filtering
///
/// Returns the origin, every resolved `a[href]` target in document order and
/// all paint timing entries, so the filtering and dedupe happen in Rust.
pub const SNAPSHOT_SCRIPT: &str = r"
    (() => {
        return {
            origin: window.location.origin,
            anchors: Array.from(document.querySelectorAll('a[href]')).map(a => a.href),
            paint: performance.getEntriesByType('paint').map(entry => ({
                name: entry.name,
                start_time: entry.startTime
            }))
        };
    })()
";

/// Document readiness probe used while waiting for `body` to appear
pub const READY_STATE_SCRIPT: &str = r"
    (() => {
        return {
            readyState: document.readyState,
            bodyExists: document.body !== null
        };
    })()
";
