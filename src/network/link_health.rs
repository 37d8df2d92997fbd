//! Link health checking
//!
//! Sends one HEAD request per discovered link with bounded parallelism and
//! records the status or the failure. Results keep the input order.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;

use crate::config::AnalyzerConfig;

use super::duration_nanos;

/// Outcome of a HEAD request against one link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkHealth {
    pub url: String,
    /// HTTP status, 0 when the request failed
    pub status_code: u16,
    #[serde(with = "duration_nanos")]
    pub duration: Duration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LinkHealth {
    #[must_use]
    pub fn status_class(&self) -> StatusClass {
        StatusClass::from_code(self.status_code)
    }

    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status_class() == StatusClass::Success
    }
}

/// Coarse classification of a link's status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusClass {
    Success,
    Redirect,
    /// 4xx/5xx, or 0 for a failed request
    Error,
    Unknown,
}

impl StatusClass {
    #[must_use]
    pub const fn from_code(code: u16) -> Self {
        match code {
            200..=299 => Self::Success,
            300..=399 => Self::Redirect,
            0 | 400.. => Self::Error,
            _ => Self::Unknown,
        }
    }
}

/// Check every link with at most `link_check_concurrency` requests in flight
///
/// Individual request failures are reported in the result, not as an error;
/// only a failure to build the HTTP client is returned as `Err`.
pub async fn check_links(links: &[String], config: &AnalyzerConfig) -> Result<Vec<LinkHealth>> {
    if links.is_empty() {
        return Ok(Vec::new());
    }

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.link_check_timeout_secs()))
        .user_agent(config.user_agent())
        .build()
        .context("Failed to build HTTP client")?;

    let semaphore = Arc::new(Semaphore::new(config.link_check_concurrency()));

    log::debug!(
        "Checking {} links with concurrency {}",
        links.len(),
        config.link_check_concurrency()
    );

    let checks: Vec<_> = links
        .iter()
        .map(|link| {
            let sem = semaphore.clone();
            let client = client.clone();
            let url = link.clone();

            async move {
                let _permit = match sem.acquire().await {
                    Ok(permit) => permit,
                    Err(e) => {
                        return LinkHealth {
                            url,
                            status_code: 0,
                            duration: Duration::ZERO,
                            error: Some(format!("Semaphore error: {e}")),
                        };
                    }
                };
                check_link(&client, url).await
            }
        })
        .collect();

    let results = futures::future::join_all(checks).await;

    let failures = results.iter().filter(|r| r.error.is_some()).count();
    if failures > 0 {
        log::warn!("{failures} of {} links failed health checks", results.len());
    }

    Ok(results)
}

async fn check_link(client: &reqwest::Client, url: String) -> LinkHealth {
    let start = Instant::now();
    let result = client.head(&url).send().await;
    let duration = start.elapsed();

    match result {
        Ok(response) => LinkHealth {
            url,
            status_code: response.status().as_u16(),
            duration,
            error: None,
        },
        Err(e) => {
            log::debug!("HEAD {url} failed: {e}");
            LinkHealth {
                url,
                status_code: 0,
                duration,
                error: Some(e.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classes() {
        assert_eq!(StatusClass::from_code(200), StatusClass::Success);
        assert_eq!(StatusClass::from_code(204), StatusClass::Success);
        assert_eq!(StatusClass::from_code(301), StatusClass::Redirect);
        assert_eq!(StatusClass::from_code(404), StatusClass::Error);
        assert_eq!(StatusClass::from_code(503), StatusClass::Error);
        assert_eq!(StatusClass::from_code(0), StatusClass::Error);
        assert_eq!(StatusClass::from_code(101), StatusClass::Unknown);
    }

    #[test]
    fn test_error_field_omitted_when_absent() {
        let health = LinkHealth {
            url: "https://ex.com/".to_string(),
            status_code: 200,
            duration: Duration::from_millis(5),
            error: None,
        };
        let value = serde_json::to_value(&health).unwrap();
        assert!(value.get("error").is_none());
        assert_eq!(value["duration"], 5_000_000);
    }

    #[tokio::test]
    async fn test_empty_input_needs_no_requests() {
        let results = check_links(&[], &AnalyzerConfig::default()).await.unwrap();
        assert!(results.is_empty());
    }
}
