//! Test utilities and helper functions for the vitals test suite

use kodegen_tools_vitals::AnalyzerConfig;

/// Creates a test HTML document with specified body content
#[allow(dead_code)]
pub fn create_test_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
</head>
<body>
    {body}
</body>
</html>"#
    )
}

/// Builds an anchor list as HTML, one `<a>` per href
#[allow(dead_code)]
pub fn anchors_html(hrefs: &[&str]) -> String {
    hrefs
        .iter()
        .enumerate()
        .map(|(i, href)| format!(r#"<a href="{href}">link {i}</a>"#))
        .collect::<Vec<_>>()
        .join("\n    ")
}

/// Analyzer config with short timeouts for local test servers
#[allow(dead_code)]
pub fn fast_config() -> AnalyzerConfig {
    AnalyzerConfig::builder()
        .network_timeout_secs(5)
        .link_check_timeout_secs(5)
        .link_check_concurrency(2)
        .build()
        .unwrap()
}
