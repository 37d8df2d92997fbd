//! Cold-start network timing for a single URL
//!
//! Measures, in order, over one fresh connection:
//! 1. DNS resolution of the host (zero for IP literals)
//! 2. TCP connect to the first resolved address
//! 3. TLS handshake on that socket (zero for plain http)
//! 4. Time from sending a GET to receiving the response headers (TTFB)
//!
//! The request travels over the connection timed in steps 2 and 3, so TTFB
//! covers only the request/response exchange. Invalid TLS certificates are
//! accepted; only timing is of interest here.

use anyhow::{Context, Result, anyhow};
use http_body_util::Empty;
use hyper::body::Bytes;
use hyper::header::{CONNECTION, HOST, USER_AGENT};
use hyper::{Method, Request};
use hyper_util::rt::TokioIo;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use url::{Host, Position, Url};

use crate::config::AnalyzerConfig;
use crate::utils::with_timeout;

use super::duration_nanos;
use super::tls;

/// Timing breakdown of one cold request, durations serialized as nanoseconds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkStats {
    pub url: String,
    /// Time to resolve the host name
    #[serde(with = "duration_nanos")]
    pub dns_lookup: Duration,
    /// Time to establish a TCP connection
    #[serde(with = "duration_nanos")]
    pub tcp_connection: Duration,
    /// Time to negotiate TLS, zero for plain http
    #[serde(with = "duration_nanos", default)]
    pub tls_handshake: Duration,
    /// Time from sending the request to receiving the response headers
    #[serde(with = "duration_nanos")]
    pub ttfb: Duration,
    #[serde(with = "duration_nanos")]
    pub total_time: Duration,
    pub status_code: u16,
}

/// Measure a cold GET of `url`, bounded by the configured network timeout
pub async fn analyze_network(url: &Url, config: &AnalyzerConfig) -> Result<NetworkStats> {
    with_timeout(
        measure(url, config),
        config.network_timeout_secs(),
        "Network timing",
    )
    .await
}

async fn measure(url: &Url, config: &AnalyzerConfig) -> Result<NetworkStats> {
    let start = Instant::now();
    let mut stats = NetworkStats {
        url: url.to_string(),
        ..NetworkStats::default()
    };

    let port = url
        .port_or_known_default()
        .ok_or_else(|| anyhow!("No port known for scheme {}", url.scheme()))?;

    let (addrs, dns_lookup) = resolve(url, port).await?;
    stats.dns_lookup = dns_lookup;

    let addr = addrs
        .first()
        .copied()
        .ok_or_else(|| anyhow!("Host resolved to no addresses"))?;

    let connect_start = Instant::now();
    let tcp = TcpStream::connect(addr)
        .await
        .with_context(|| format!("Failed to connect to {addr}"))?;
    stats.tcp_connection = connect_start.elapsed();

    let (status, ttfb) = if url.scheme() == "https" {
        let host = url
            .host()
            .ok_or_else(|| anyhow!("URL has no host: {url}"))?;
        let name = tls::server_name(&host)?;
        let connector = tls::insecure_connector()?;

        let handshake_start = Instant::now();
        let stream = connector
            .connect(name, tcp)
            .await
            .with_context(|| format!("TLS handshake with {addr} failed"))?;
        stats.tls_handshake = handshake_start.elapsed();

        timed_get(stream, url, config.user_agent()).await?
    } else {
        timed_get(tcp, url, config.user_agent()).await?
    };
    stats.ttfb = ttfb;
    stats.status_code = status;

    stats.total_time = start.elapsed();

    log::debug!(
        "Network timing for {}: dns={:?} tcp={:?} tls={:?} ttfb={:?} total={:?} status={}",
        stats.url,
        stats.dns_lookup,
        stats.tcp_connection,
        stats.tls_handshake,
        stats.ttfb,
        stats.total_time,
        stats.status_code
    );

    Ok(stats)
}

/// Send one GET over an established stream and time the response headers
async fn timed_get<S>(stream: S, url: &Url, user_agent: &str) -> Result<(u16, Duration)>
where
    S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
{
    let (mut sender, connection) = hyper::client::conn::http1::handshake(TokioIo::new(stream))
        .await
        .context("HTTP handshake failed")?;

    let driver = tokio::spawn(async move {
        if let Err(e) = connection.await {
            log::debug!("Timing connection closed with error: {e}");
        }
    });

    let request = Request::builder()
        .method(Method::GET)
        .uri(&url[Position::BeforePath..Position::AfterQuery])
        .header(HOST, host_header(url)?)
        .header(USER_AGENT, user_agent)
        .header(CONNECTION, "close")
        .body(Empty::<Bytes>::new())
        .context("Failed to build timing request")?;

    let sent = Instant::now();
    let response = sender
        .send_request(request)
        .await
        .with_context(|| format!("Request to {url} failed"));
    let ttfb = sent.elapsed();

    driver.abort();

    Ok((response?.status().as_u16(), ttfb))
}

/// `Host` header value: host plus the port when it is not the scheme default
fn host_header(url: &Url) -> Result<String> {
    let host = url
        .host_str()
        .ok_or_else(|| anyhow!("URL has no host: {url}"))?;
    Ok(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

/// Resolve the URL host, returning the addresses and the lookup time
async fn resolve(url: &Url, port: u16) -> Result<(Vec<SocketAddr>, Duration)> {
    match url.host() {
        Some(Host::Domain(domain)) => {
            let lookup_start = Instant::now();
            let addrs: Vec<SocketAddr> = tokio::net::lookup_host((domain, port))
                .await
                .with_context(|| format!("DNS lookup failed for {domain}"))?
                .collect();
            Ok((addrs, lookup_start.elapsed()))
        }
        Some(Host::Ipv4(ip)) => Ok((vec![SocketAddr::from((ip, port))], Duration::ZERO)),
        Some(Host::Ipv6(ip)) => Ok((vec![SocketAddr::from((ip, port))], Duration::ZERO)),
        None => Err(anyhow!("URL has no host: {url}")),
    }
}
