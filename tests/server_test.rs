//! HTTP front end routing and error mapping

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use kodegen_tools_vitals::server::{AppState, build_router};
use tower::ServiceExt;

mod common;
use common::fast_config;

async fn send(method: &str, uri: &str) -> (StatusCode, String) {
    let app = build_router(AppState::new(fast_config()));
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_missing_url_parameter() {
    let (status, body) = send("POST", "/check").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Missing 'url' query parameter");

    let (status, _) = send("POST", "/analyze?url=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_url_is_bad_request() {
    let (status, body) = send("POST", "/check?url=ftp://ex.com/file").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with("Invalid URL"));
}

#[tokio::test]
async fn test_get_is_not_allowed() {
    let (status, _) = send("GET", "/check?url=https://ex.com").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_check_returns_network_stats() {
    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("GET", "/").with_status(200).create_async().await;

    let (status, body) = send("POST", &format!("/check?url={}/", server.url())).await;
    assert_eq!(status, StatusCode::OK);

    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["status_code"], 200);
    assert!(value["total_time"].as_u64().is_some());
    assert!(value["ttfb"].as_u64().is_some());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_target_is_server_error() {
    let (status, body) = send("POST", "/check?url=http://127.0.0.1:1/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.starts_with("Network error"));
}
