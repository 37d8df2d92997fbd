//! Core configuration types for page analysis
//!
//! `AnalyzerConfig` bounds the driver side of an analysis: how the browser
//! is launched and how long each probe may take. `ServerConfig` holds the
//! HTTP front end's listen address.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Configuration for a page analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    pub(crate) headless: bool,

    /// Chrome profile directory. `None` gives every analysis a fresh
    /// temporary profile that is removed afterwards.
    pub(crate) chrome_data_dir: Option<PathBuf>,

    /// Upper bound for launch + navigation + extraction, in seconds
    ///
    /// Default: 120 seconds
    pub(crate) browser_timeout_secs: u64,

    /// Timeout for the cold-start network timing request, in seconds
    ///
    /// Default: 10 seconds
    pub(crate) network_timeout_secs: u64,

    /// Timeout for each link health HEAD request, in seconds
    ///
    /// Default: 30 seconds
    pub(crate) link_check_timeout_secs: u64,

    /// Maximum concurrent link health requests
    ///
    /// Default: 10
    pub(crate) link_check_concurrency: usize,

    pub(crate) user_agent: String,
}

/// Listen configuration for the HTTP front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub(crate) addr: SocketAddr,
}
