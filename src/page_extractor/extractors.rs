//! Live page extraction over the Chrome DevTools Protocol
//!
//! These functions inject the scripts from [`super::js_scripts`] into a
//! loaded `chromiumoxide` page and decode what comes back.

use super::environment::PageSnapshot;
use super::js_scripts::{READY_STATE_SCRIPT, SNAPSHOT_SCRIPT, VITALS_SCRIPT};
use super::schema::BrowserResult;
use super::vitals;
use anyhow::{Context, Result};
use chromiumoxide::Page;
use std::time::{Duration, Instant};

/// Wait until the document has a `body` element
///
/// Polls the page every 100ms. Returns an error if no body shows up within
/// `max_wait`, since anchors cannot be queried before that.
pub async fn wait_for_body(page: &Page, max_wait: Duration) -> Result<()> {
    let start = Instant::now();
    let poll_interval = Duration::from_millis(100);

    log::debug!("Waiting for document body (max {:.1}s)", max_wait.as_secs_f64());

    loop {
        match page.evaluate(READY_STATE_SCRIPT).await {
            Ok(result) => {
                if let Ok(value) = result.into_value::<serde_json::Value>() {
                    let body_exists = value
                        .get("bodyExists")
                        .and_then(serde_json::Value::as_bool)
                        .unwrap_or(false);

                    if body_exists {
                        log::debug!(
                            "Body present after {:.2}s (readyState: {})",
                            start.elapsed().as_secs_f64(),
                            value
                                .get("readyState")
                                .and_then(serde_json::Value::as_str)
                                .unwrap_or("unknown")
                        );
                        return Ok(());
                    }
                }
            }
            Err(e) => {
                log::debug!("Failed to check readyState: {e}, retrying");
            }
        }

        if start.elapsed() >= max_wait {
            return Err(anyhow::anyhow!(
                "Document body did not appear within {:.1}s",
                max_wait.as_secs_f64()
            ));
        }

        tokio::time::sleep(poll_interval).await;
    }
}

/// Read the raw ambient state of the page
pub async fn capture_snapshot(page: &Page) -> Result<PageSnapshot> {
    let js_result = page
        .evaluate(SNAPSHOT_SCRIPT)
        .await
        .context("Failed to execute page snapshot script")?;

    let snapshot: PageSnapshot = match js_result.into_value() {
        Ok(value) => value,
        Err(e) => return Err(anyhow::anyhow!("Failed to get page snapshot value: {e}")),
    };

    log::debug!(
        "Captured snapshot for {} - anchors: {}, paint entries: {}",
        snapshot.origin,
        snapshot.anchors.len(),
        snapshot.paint.len()
    );

    Ok(snapshot)
}

/// Extract the vitals record of a loaded page
#[inline]
pub async fn extract_vitals(page: &Page) -> Result<BrowserResult> {
    let snapshot = capture_snapshot(page).await?;
    Ok(vitals::extract(&snapshot))
}

/// Run the self-contained in-page vitals routine and decode its JSON string
pub async fn evaluate_vitals_script(page: &Page) -> Result<BrowserResult> {
    let js_result = page
        .evaluate(VITALS_SCRIPT)
        .await
        .context("Failed to execute vitals script")?;

    let text: String = js_result
        .into_value()
        .map_err(|e| anyhow::anyhow!("Vitals script did not return a string: {e}"))?;

    BrowserResult::from_json(&text).context("Failed to parse vitals JSON")
}
