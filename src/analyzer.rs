//! Full page analysis
//!
//! Drives a headless browser to load a page and extract its vitals, probes
//! the network timing of the same URL concurrently, then checks the health
//! of every discovered link.

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::Instant;
use url::Url;

use crate::browser_setup::BrowserSession;
use crate::config::AnalyzerConfig;
use crate::error::{AnalyzeError, AnalyzeResult};
use crate::network::{LinkHealth, NetworkStats, analyze_network, check_links};
use crate::page_extractor::{BrowserResult, extract_vitals, wait_for_body};
use crate::utils::{parse_target_url, with_deadline};

/// Everything known about one analyzed page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullReport {
    pub network: NetworkStats,
    pub browser: BrowserResult,
    pub links_health: Vec<LinkHealth>,
    pub analyzed_at: DateTime<Utc>,
}

/// Validate a user-supplied target URL
pub fn validate_target(url: &str) -> AnalyzeResult<Url> {
    parse_target_url(url).map_err(|e| AnalyzeError::InvalidUrl(format!("{e:#}")))
}

/// Analyze `url`: network timing and browser vitals in parallel, then link health
///
/// Both probes always run to completion. If both fail, the network error is
/// the one reported.
pub async fn analyze(url: &str, config: &AnalyzerConfig) -> AnalyzeResult<FullReport> {
    let target = validate_target(url)?;
    log::info!("Analyzing {target}");

    let (network, browser) = tokio::join!(
        analyze_network(&target, config),
        analyze_browser(&target, config),
    );

    let network = network.map_err(|e| AnalyzeError::network(&e))?;
    let browser = browser?;

    let links_health = check_links(&browser.links, config)
        .await
        .context("Link health check failed")?;

    log::info!(
        "Analysis of {target} complete: fcp={}ms, {} links, status {}",
        browser.fcp,
        browser.links.len(),
        network.status_code
    );

    Ok(FullReport {
        network,
        browser,
        links_health,
        analyzed_at: Utc::now(),
    })
}

/// Network timing only, as served by the `/check` endpoint
pub async fn check_network(url: &str, config: &AnalyzerConfig) -> AnalyzeResult<NetworkStats> {
    let target = validate_target(url)?;
    analyze_network(&target, config)
        .await
        .map_err(|e| AnalyzeError::network(&e))
}

/// Load `url` in a fresh headless browser and extract its vitals
///
/// Launch (including a Chromium download when none is installed),
/// navigation, waiting for `body` and extraction share one deadline of
/// `browser_timeout_secs`. A launched browser is shut down on every path.
pub async fn analyze_browser(url: &Url, config: &AnalyzerConfig) -> AnalyzeResult<BrowserResult> {
    let budget = config.browser_timeout_secs();
    let deadline = Instant::now() + Duration::from_secs(budget);

    let session = with_deadline(
        BrowserSession::launch(
            config.headless(),
            config.user_agent(),
            config.chrome_data_dir().cloned(),
        ),
        deadline,
        budget,
        "Browser analysis",
    )
    .await
    .map_err(|e| AnalyzeError::browser(&e))?;

    let result = with_deadline(
        load_and_extract(&session, url, deadline),
        deadline,
        budget,
        "Browser analysis",
    )
    .await;

    session.shutdown().await;

    result.map_err(|e| AnalyzeError::browser(&e))
}

async fn load_and_extract(
    session: &BrowserSession,
    url: &Url,
    deadline: Instant,
) -> anyhow::Result<BrowserResult> {
    let page = session.new_page().await?;

    page.goto(url.as_str())
        .await
        .with_context(|| format!("Failed to navigate to {url}"))?;

    // The body may take as long as the rest of the budget allows.
    wait_for_body(&page, deadline.saturating_duration_since(Instant::now())).await?;

    let result = extract_vitals(&page).await?;

    if let Err(e) = page.close().await {
        log::debug!("Failed to close page for {url}: {e}");
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_target_rejects_non_http() {
        let err = validate_target("ftp://ex.com/file").unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn test_validate_target_accepts_https() {
        assert_eq!(
            validate_target("https://ex.com").unwrap().as_str(),
            "https://ex.com/"
        );
    }

    #[tokio::test]
    async fn test_analyze_rejects_invalid_url_before_launching() {
        let err = analyze("not a url", &AnalyzerConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AnalyzeError::InvalidUrl(_)));
    }

    #[test]
    fn test_report_serializes_original_field_names() {
        let report = FullReport {
            network: NetworkStats::default(),
            browser: BrowserResult::default(),
            links_health: Vec::new(),
            analyzed_at: Utc::now(),
        };
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("network").is_some());
        assert_eq!(value["browser"]["links"], serde_json::json!([]));
        assert_eq!(value["links_health"], serde_json::json!([]));
    }
}
