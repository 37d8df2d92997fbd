//! Error types for page analysis
//!
//! The extraction routine itself never fails; these errors come from the
//! driver side: launching the browser, loading the page, probing the network.

use thiserror::Error;

use crate::utils::timeout::TimedOut;

/// Result type alias for analysis operations
pub type AnalyzeResult<T> = Result<T, AnalyzeError>;

/// Error types for analysis operations
#[derive(Debug, Clone, Error)]
pub enum AnalyzeError {
    /// The target is not an absolute http(s) URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Browser launch, navigation or script evaluation failed
    #[error("Browser error: {0}")]
    Browser(String),

    /// Network timing request failed
    #[error("Network error: {0}")]
    Network(String),

    /// An operation exceeded its time budget
    #[error("{0}")]
    Timeout(String),

    /// Other errors
    #[error("Analysis error: {0}")]
    Other(String),
}

impl AnalyzeError {
    /// Wrap a browser-side failure, keeping timeouts distinguishable
    #[must_use]
    pub fn browser(err: &anyhow::Error) -> Self {
        Self::classify(err, Self::Browser)
    }

    /// Wrap a network-side failure, keeping timeouts distinguishable
    #[must_use]
    pub fn network(err: &anyhow::Error) -> Self {
        Self::classify(err, Self::Network)
    }

    fn classify(err: &anyhow::Error, wrap: fn(String) -> Self) -> Self {
        if err.downcast_ref::<TimedOut>().is_some() {
            Self::Timeout(format!("{err:#}"))
        } else {
            wrap(format!("{err:#}"))
        }
    }

    /// Whether the caller supplied a bad request rather than hitting a failure
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidUrl(_))
    }
}

impl From<anyhow::Error> for AnalyzeError {
    fn from(err: anyhow::Error) -> Self {
        // Use {:#} to preserve full error chain with context
        Self::Other(format!("{err:#}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_timeout_is_classified() {
        let err = anyhow::Error::new(TimedOut {
            operation: "Browser analysis".to_string(),
            timeout_secs: 120,
        });
        let classified = AnalyzeError::browser(&err);
        assert!(matches!(classified, AnalyzeError::Timeout(_)));
        assert_eq!(
            classified.to_string(),
            "Browser analysis timeout after 120 seconds"
        );
    }

    #[test]
    fn test_context_chain_is_preserved() {
        let err = Err::<(), _>(anyhow::anyhow!("connection refused"))
            .context("Failed to fetch page")
            .unwrap_err();
        let classified = AnalyzeError::network(&err);
        assert_eq!(
            classified.to_string(),
            "Network error: Failed to fetch page: connection refused"
        );
    }

    #[test]
    fn test_client_error_detection() {
        assert!(AnalyzeError::InvalidUrl("x".to_string()).is_client_error());
        assert!(!AnalyzeError::Other("x".to_string()).is_client_error());
    }
}
