//! Timeout utilities for browser and network operations
//!
//! The extraction routine itself never yields, so every bound on how long an
//! analysis may take is applied here, around the driver's async work.

use anyhow::Result;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

/// Wrap an async operation with an explicit timeout
///
/// Returns distinct error messages for a timeout and for a failure of the
/// operation itself.
///
/// # Arguments
/// * `operation` - The async Future to execute with a timeout
/// * `timeout_secs` - Timeout duration in seconds
/// * `operation_name` - Human-readable name for error messages
pub async fn with_timeout<F, T>(operation: F, timeout_secs: u64, operation_name: &str) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(Duration::from_secs(timeout_secs), operation).await {
        Ok(result) => result,
        Err(_) => Err(anyhow::Error::new(TimedOut {
            operation: operation_name.to_string(),
            timeout_secs,
        })),
    }
}

/// Run an async operation that must finish before `deadline`
///
/// Several steps awaited against the same deadline share one time budget.
/// `budget_secs` is the size of that budget, reported on timeout.
pub async fn with_deadline<F, T>(
    operation: F,
    deadline: Instant,
    budget_secs: u64,
    operation_name: &str,
) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout_at(deadline, operation).await {
        Ok(result) => result,
        Err(_) => Err(anyhow::Error::new(TimedOut {
            operation: operation_name.to_string(),
            timeout_secs: budget_secs,
        })),
    }
}

/// Marker error produced by [`with_timeout`] and [`with_deadline`] so callers can tell a timeout
/// apart from an operation failure via `downcast_ref`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{operation} timeout after {timeout_secs} seconds")]
pub struct TimedOut {
    pub operation: String,
    pub timeout_secs: u64,
}
