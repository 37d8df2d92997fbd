use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use super::AppState;
use crate::analyzer::{FullReport, analyze, check_network};
use crate::error::AnalyzeError;
use crate::network::NetworkStats;

#[derive(Debug, Deserialize)]
pub struct TargetQuery {
    pub url: Option<String>,
}

impl TargetQuery {
    fn require_url(self) -> Result<String, Response> {
        match self.url {
            Some(url) if !url.trim().is_empty() => Ok(url),
            _ => Err((
                StatusCode::BAD_REQUEST,
                "Missing 'url' query parameter",
            )
                .into_response()),
        }
    }
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            tracing::error!("Analysis failed: {}", self);
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, self.to_string()).into_response()
    }
}

/// `POST /check?url=...`
pub async fn check_url(
    State(state): State<AppState>,
    Query(query): Query<TargetQuery>,
) -> Result<Json<NetworkStats>, Response> {
    let url = query.require_url()?;
    check_network(&url, &state.config)
        .await
        .map(Json)
        .map_err(IntoResponse::into_response)
}

/// `POST /analyze?url=...`
pub async fn analyze_url(
    State(state): State<AppState>,
    Query(query): Query<TargetQuery>,
) -> Result<Json<FullReport>, Response> {
    let url = query.require_url()?;
    analyze(&url, &state.config)
        .await
        .map(Json)
        .map_err(IntoResponse::into_response)
}
