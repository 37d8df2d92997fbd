use serde::{Deserialize, Serialize};

/// Name of the paint timing entry that marks first contentful paint
pub const FIRST_CONTENTFUL_PAINT: &str = "first-contentful-paint";

/// Performance entry category holding paint timings
pub const PAINT_ENTRY_TYPE: &str = "paint";

/// A single entry from the page's paint timing buffer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintTiming {
    pub name: String,
    /// Milliseconds since navigation start
    #[serde(alias = "startTime")]
    pub start_time: f64,
}

impl PaintTiming {
    #[must_use]
    pub fn new(name: impl Into<String>, start_time: f64) -> Self {
        Self {
            name: name.into(),
            start_time,
        }
    }

    /// Shorthand for a `first-contentful-paint` entry
    #[must_use]
    pub fn first_contentful_paint(start_time: f64) -> Self {
        Self::new(FIRST_CONTENTFUL_PAINT, start_time)
    }
}

/// Vitals extracted from one page load
///
/// Field names are part of the wire format consumed by result consumers and
/// must not change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrowserResult {
    /// First contentful paint in milliseconds, 0 when the page reported none
    pub fcp: f64,
    /// Unique same-origin link targets in first-seen order
    pub links: Vec<String>,
}

impl BrowserResult {
    /// Parse the JSON text form produced by the in-page vitals script
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Serialize to the JSON text form `{"fcp": ..., "links": [...]}`
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_field_names() {
        let result = BrowserResult {
            fcp: 12.5,
            links: vec!["https://ex.com/a".to_string()],
        };
        assert_eq!(
            result.to_json().unwrap(),
            r#"{"fcp":12.5,"links":["https://ex.com/a"]}"#
        );
    }

    #[test]
    fn test_parses_script_output() {
        let parsed = BrowserResult::from_json(r#"{"fcp":0,"links":[]}"#).unwrap();
        assert_eq!(parsed, BrowserResult::default());
    }

    #[test]
    fn test_paint_timing_accepts_browser_field_name() {
        let entry: PaintTiming =
            serde_json::from_str(r#"{"name":"first-paint","startTime":40.1}"#).unwrap();
        assert_eq!(entry, PaintTiming::new("first-paint", 40.1));
    }
}
