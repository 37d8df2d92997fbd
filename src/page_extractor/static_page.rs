//! Server-side page environment over raw HTML.
//!
//! Resolves anchors the way a browser resolves `HTMLAnchorElement.href`:
//! relative to the document's `<base href>` when present, otherwise relative
//! to the page URL. Paint timings cannot be observed without rendering, so
//! they are supplied by the caller (none by default).

use anyhow::{Result, anyhow};
use scraper::{Html, Selector};
use url::Url;

use super::environment::PageEnvironment;
use super::schema::PaintTiming;

/// A parsed HTML document standing in for a loaded page
pub struct StaticPage {
    page_url: Url,
    document: Html,
    anchor_selector: Selector,
    base_selector: Selector,
    paint: Vec<PaintTiming>,
}

impl StaticPage {
    /// Parse `html` as the document served at `page_url`
    pub fn parse(html: &str, page_url: &str) -> Result<Self> {
        let page_url =
            Url::parse(page_url).map_err(|e| anyhow!("Failed to parse page URL: {e}"))?;
        let anchor_selector =
            Selector::parse("a[href]").map_err(|e| anyhow!("Invalid anchor selector: {e}"))?;
        let base_selector =
            Selector::parse("base[href]").map_err(|e| anyhow!("Invalid base selector: {e}"))?;

        Ok(Self {
            page_url,
            document: Html::parse_document(html),
            anchor_selector,
            base_selector,
            paint: Vec::new(),
        })
    }

    /// Attach paint timings observed elsewhere (e.g. from a trace)
    #[must_use]
    pub fn with_paint_timings(mut self, paint: Vec<PaintTiming>) -> Self {
        self.paint = paint;
        self
    }

    #[must_use]
    pub fn page_url(&self) -> &Url {
        &self.page_url
    }

    /// URL that relative hrefs resolve against
    ///
    /// Only the first `<base href>` counts; an unparseable one falls back to
    /// the page URL.
    fn base_url(&self) -> Url {
        self.document
            .select(&self.base_selector)
            .next()
            .and_then(|base| base.value().attr("href"))
            .and_then(|href| self.page_url.join(href).ok())
            .unwrap_or_else(|| self.page_url.clone())
    }
}

impl PageEnvironment for StaticPage {
    fn query_anchors(&self) -> Vec<String> {
        let base = self.base_url();

        self.document
            .select(&self.anchor_selector)
            .filter_map(|anchor| {
                let href = anchor.value().attr("href")?;
                match base.join(href) {
                    Ok(resolved) => Some(resolved.to_string()),
                    Err(e) => {
                        log::debug!("Skipping unresolvable href {href:?}: {e}");
                        None
                    }
                }
            })
            .collect()
    }

    fn origin(&self) -> String {
        self.page_url.origin().ascii_serialization()
    }

    fn paint_timings(&self) -> Vec<PaintTiming> {
        self.paint.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_relative_hrefs() {
        let page = StaticPage::parse(
            r##"<a href="/a">A</a><a href="b?x=1">B</a><a href="#top">T</a>"##,
            "https://ex.com/dir/page.html",
        )
        .unwrap();

        assert_eq!(
            page.query_anchors(),
            vec![
                "https://ex.com/a".to_string(),
                "https://ex.com/dir/b?x=1".to_string(),
                "https://ex.com/dir/page.html#top".to_string(),
            ]
        );
    }

    #[test]
    fn test_base_element_changes_resolution() {
        let page = StaticPage::parse(
            r#"<head><base href="https://cdn.ex.com/root/"></head><body><a href="x">X</a></body>"#,
            "https://ex.com/",
        )
        .unwrap();

        assert_eq!(page.query_anchors(), vec!["https://cdn.ex.com/root/x".to_string()]);
        assert_eq!(page.origin(), "https://ex.com");
    }

    #[test]
    fn test_anchor_without_href_is_ignored() {
        let page = StaticPage::parse(r#"<a name="anchor">no target</a>"#, "https://ex.com/").unwrap();
        assert!(page.query_anchors().is_empty());
    }

    #[test]
    fn test_origin_includes_non_default_port() {
        let page = StaticPage::parse("", "http://localhost:8080/index.html").unwrap();
        assert_eq!(page.origin(), "http://localhost:8080");

        let default_port = StaticPage::parse("", "https://ex.com:443/").unwrap();
        assert_eq!(default_port.origin(), "https://ex.com");
    }

    #[test]
    fn test_invalid_page_url_is_rejected() {
        assert!(StaticPage::parse("<p></p>", "not a url").is_err());
    }
}
