//! Fluent builders for configuration types
//!
//! Every field has a default, so `AnalyzerConfig::builder().build()` is a
//! valid configuration. `build()` rejects zero timeouts and zero concurrency.

use crate::utils::{
    CHROME_USER_AGENT, DEFAULT_BROWSER_TIMEOUT_SECS, DEFAULT_LINK_CHECK_CONCURRENCY,
    DEFAULT_LINK_CHECK_TIMEOUT_SECS, DEFAULT_NETWORK_TIMEOUT_SECS, DEFAULT_PORT,
};
use anyhow::{Result, anyhow};
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use super::types::{AnalyzerConfig, ServerConfig};

#[derive(Debug, Clone)]
pub struct AnalyzerConfigBuilder {
    headless: bool,
    chrome_data_dir: Option<PathBuf>,
    browser_timeout_secs: u64,
    network_timeout_secs: u64,
    link_check_timeout_secs: u64,
    link_check_concurrency: usize,
    user_agent: String,
}

impl Default for AnalyzerConfigBuilder {
    fn default() -> Self {
        Self {
            headless: true,
            chrome_data_dir: None,
            browser_timeout_secs: DEFAULT_BROWSER_TIMEOUT_SECS,
            network_timeout_secs: DEFAULT_NETWORK_TIMEOUT_SECS,
            link_check_timeout_secs: DEFAULT_LINK_CHECK_TIMEOUT_SECS,
            link_check_concurrency: DEFAULT_LINK_CHECK_CONCURRENCY,
            user_agent: CHROME_USER_AGENT.to_string(),
        }
    }
}

impl AnalyzerConfig {
    /// Create a builder for configuring an `AnalyzerConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::default()
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        let b = AnalyzerConfigBuilder::default();
        Self {
            headless: b.headless,
            chrome_data_dir: b.chrome_data_dir,
            browser_timeout_secs: b.browser_timeout_secs,
            network_timeout_secs: b.network_timeout_secs,
            link_check_timeout_secs: b.link_check_timeout_secs,
            link_check_concurrency: b.link_check_concurrency,
            user_agent: b.user_agent,
        }
    }
}

impl AnalyzerConfigBuilder {
    #[must_use]
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    #[must_use]
    pub fn chrome_data_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.chrome_data_dir = dir;
        self
    }

    #[must_use]
    pub fn browser_timeout_secs(mut self, secs: u64) -> Self {
        self.browser_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn network_timeout_secs(mut self, secs: u64) -> Self {
        self.network_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn link_check_timeout_secs(mut self, secs: u64) -> Self {
        self.link_check_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn link_check_concurrency(mut self, concurrency: usize) -> Self {
        self.link_check_concurrency = concurrency;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the config
    ///
    /// # Errors
    ///
    /// Returns an error if a timeout or the link check concurrency is zero.
    pub fn build(self) -> Result<AnalyzerConfig> {
        for (name, value) in [
            ("browser_timeout_secs", self.browser_timeout_secs),
            ("network_timeout_secs", self.network_timeout_secs),
            ("link_check_timeout_secs", self.link_check_timeout_secs),
        ] {
            if value == 0 {
                return Err(anyhow!("{name} must be greater than zero"));
            }
        }
        if self.link_check_concurrency == 0 {
            return Err(anyhow!("link_check_concurrency must be greater than zero"));
        }

        Ok(AnalyzerConfig {
            headless: self.headless,
            chrome_data_dir: self.chrome_data_dir,
            browser_timeout_secs: self.browser_timeout_secs,
            network_timeout_secs: self.network_timeout_secs,
            link_check_timeout_secs: self.link_check_timeout_secs,
            link_check_concurrency: self.link_check_concurrency,
            user_agent: self.user_agent,
        })
    }
}

impl ServerConfig {
    /// Listen on all interfaces at `port`
    #[must_use]
    pub fn new(port: u16) -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
        }
    }

    /// Read the port from `PORT`, falling back to the default port
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_port_var(std::env::var("PORT").ok().as_deref())
    }

    pub(crate) fn from_port_var(value: Option<&str>) -> Self {
        let port = match value.map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid PORT value {raw:?}, using {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
        };
        Self::new(port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PORT)
    }
}
