//! Getter methods for configuration types

use std::net::SocketAddr;
use std::path::PathBuf;

use super::types::{AnalyzerConfig, ServerConfig};

impl AnalyzerConfig {
    #[must_use]
    pub fn headless(&self) -> bool {
        self.headless
    }

    #[must_use]
    pub fn chrome_data_dir(&self) -> Option<&PathBuf> {
        self.chrome_data_dir.as_ref()
    }

    #[must_use]
    pub fn browser_timeout_secs(&self) -> u64 {
        self.browser_timeout_secs
    }

    #[must_use]
    pub fn network_timeout_secs(&self) -> u64 {
        self.network_timeout_secs
    }

    #[must_use]
    pub fn link_check_timeout_secs(&self) -> u64 {
        self.link_check_timeout_secs
    }

    #[must_use]
    pub fn link_check_concurrency(&self) -> usize {
        self.link_check_concurrency
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl ServerConfig {
    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    #[must_use]
    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}
