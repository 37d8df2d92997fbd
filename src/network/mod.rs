//! Network-side probes: cold-start request timing and link health checks.

pub(crate) mod duration_nanos;
pub mod link_health;
pub mod timing;
mod tls;

pub use link_health::{LinkHealth, StatusClass, check_links};
pub use timing::{NetworkStats, analyze_network};
