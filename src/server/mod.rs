//! HTTP front end
//!
//! - `POST /check?url=...`   network timing of the URL
//! - `POST /analyze?url=...` full report: timing, vitals, link health

pub mod handlers;

use axum::Router;
use axum::routing::post;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::config::AnalyzerConfig;

/// Shared state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AnalyzerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/check", post(handlers::check_url))
        .route("/analyze", post(handlers::analyze_url))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
