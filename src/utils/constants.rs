//! Shared configuration constants for page vitals analysis
//!
//! Default values used by the analyzer, the network probes and the HTTP
//! front end, kept in one place to avoid magic numbers.

/// Upper bound for a whole browser analysis: launch, navigation, wait and extraction.
pub const DEFAULT_BROWSER_TIMEOUT_SECS: u64 = 120;

/// Timeout for the cold-start network timing request.
pub const DEFAULT_NETWORK_TIMEOUT_SECS: u64 = 10;

/// Timeout for each HEAD request issued by the link health checker.
pub const DEFAULT_LINK_CHECK_TIMEOUT_SECS: u64 = 30;

/// Maximum number of link health requests in flight at once.
pub const DEFAULT_LINK_CHECK_CONCURRENCY: usize = 10;

/// Port used by the HTTP front end when `PORT` is unset or invalid.
pub const DEFAULT_PORT: u16 = 3000;

/// Chrome user agent string sent by the browser and the HTTP probes
///
/// Updated: 2025-01-29 to Chrome 132 (current stable)
/// Next update: 2025-04-29 (quarterly schedule)
///
/// Reference: https://chromiumdash.appspot.com/schedule
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
