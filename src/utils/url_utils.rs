//! URL validation utilities.
//!
//! Target URLs arrive as raw query parameters, so they are checked here
//! before any browser or network work starts.

use anyhow::{Result, anyhow};
use url::Url;

/// Check if a URL is valid
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    // Skip data URLs, javascript URLs, and other non-http schemes
    if url.starts_with("data:") || url.starts_with("javascript:") || url.starts_with("mailto:") {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some(),
        Err(_) => false,
    }
}

/// Parse a target URL, accepting only absolute http/https URLs with a host.
pub fn parse_target_url(url: &str) -> Result<Url> {
    let trimmed = url.trim();
    if !is_valid_url(trimmed) {
        return Err(anyhow!("Not an http(s) URL: {url}"));
    }
    Url::parse(trimmed).map_err(|e| anyhow!("Failed to parse URL: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://localhost:3000/path?q=1"));
    }

    #[test]
    fn test_invalid_urls() {
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("ftp://example.com/file"));
        assert!(!is_valid_url("javascript:alert(1)"));
        assert!(!is_valid_url("mailto:someone@example.com"));
        assert!(!is_valid_url("data:text/html,hi"));
    }

    #[test]
    fn test_parse_target_url_trims_whitespace() {
        let url = parse_target_url("  https://example.com/a  ").unwrap();
        assert_eq!(url.as_str(), "https://example.com/a");
    }

    #[test]
    fn test_parse_target_url_rejects_relative() {
        assert!(parse_target_url("/relative/path").is_err());
    }
}
