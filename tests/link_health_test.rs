//! Link health checks against a local mock server

use kodegen_tools_vitals::{AnalyzerConfig, StatusClass, check_links};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

mod common;
use common::fast_config;

#[tokio::test]
async fn test_statuses_are_recorded_in_input_order() {
    let mut server = mockito::Server::new_async().await;
    let ok = server.mock("HEAD", "/ok").with_status(200).create_async().await;
    let moved = server
        .mock("HEAD", "/moved")
        .with_status(304)
        .create_async()
        .await;
    let missing = server
        .mock("HEAD", "/missing")
        .with_status(404)
        .create_async()
        .await;

    let base = server.url();
    let links = vec![
        format!("{base}/missing"),
        format!("{base}/ok"),
        format!("{base}/moved"),
    ];

    let results = check_links(&links, &fast_config()).await.unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].url, links[0]);
    assert_eq!(results[0].status_code, 404);
    assert_eq!(results[0].status_class(), StatusClass::Error);
    assert_eq!(results[1].status_code, 200);
    assert!(results[1].is_healthy());
    assert_eq!(results[2].status_code, 304);
    assert_eq!(results[2].status_class(), StatusClass::Redirect);
    assert!(results.iter().all(|r| r.error.is_none()));

    ok.assert_async().await;
    moved.assert_async().await;
    missing.assert_async().await;
}

#[tokio::test]
async fn test_connection_failure_is_reported_not_raised() {
    // Port 1 is reserved and closed on test machines.
    let links = vec!["http://127.0.0.1:1/".to_string()];

    let results = check_links(&links, &fast_config()).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].status_code, 0);
    assert!(results[0].error.is_some());
    assert_eq!(results[0].status_class(), StatusClass::Error);
}

#[tokio::test]
async fn test_more_links_than_permits_all_complete() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("HEAD", mockito::Matcher::Regex(r"^/page/\d+$".to_string()))
        .with_status(200)
        .expect(7)
        .create_async()
        .await;

    let links: Vec<String> = (0..7).map(|i| format!("{}/page/{i}", server.url())).collect();
    let results = check_links(&links, &fast_config()).await.unwrap();

    assert_eq!(results.len(), 7);
    for (link, result) in links.iter().zip(&results) {
        assert_eq!(&result.url, link);
        assert_eq!(result.status_code, 200);
    }
    mock.assert_async().await;
}

/// Server that holds every request for `hold` and records peak concurrency
async fn slow_server(hold: Duration) -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let in_flight = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));

    let peak_out = peak.clone();
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let in_flight = in_flight.clone();
            let peak = peak.clone();
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }

                let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(hold).await;
                in_flight.fetch_sub(1, Ordering::SeqCst);

                let _ = socket
                    .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
                    .await;
            });
        }
    });

    (format!("http://{addr}"), peak_out)
}

#[tokio::test]
async fn test_in_flight_requests_never_exceed_concurrency() {
    let (base, peak) = slow_server(Duration::from_millis(200)).await;
    let config = AnalyzerConfig::builder()
        .link_check_timeout_secs(10)
        .link_check_concurrency(3)
        .build()
        .unwrap();

    let links: Vec<String> = (0..12).map(|i| format!("{base}/slow/{i}")).collect();
    let results = check_links(&links, &config).await.unwrap();

    assert_eq!(results.len(), 12);
    assert!(results.iter().all(|r| r.status_code == 200));
    let peak = peak.load(Ordering::SeqCst);
    assert!(peak <= 3, "peak concurrency was {peak}");
    assert!(peak >= 2, "requests did not overlap (peak {peak})");
}
