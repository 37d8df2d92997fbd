pub mod analyzer;
pub mod browser_setup;
pub mod config;
pub mod error;
pub mod network;
pub mod page_extractor;
pub mod server;
pub mod utils;

pub use analyzer::{FullReport, analyze, analyze_browser, check_network};
pub use browser_setup::{BrowserSession, download_managed_browser, find_browser_executable};
pub use config::{AnalyzerConfig, ServerConfig};
pub use error::{AnalyzeError, AnalyzeResult};
pub use network::{LinkHealth, NetworkStats, StatusClass, analyze_network, check_links};
pub use page_extractor::{
    BrowserResult, PageEnvironment, PageSnapshot, PaintTiming, StaticPage, extract,
    extract_serialized,
};
