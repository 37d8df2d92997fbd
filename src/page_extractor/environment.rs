//! Read-only view of the page the vitals are extracted from.
//!
//! The extractor never touches browser globals directly. It asks a
//! [`PageEnvironment`] for the three pieces of ambient state it needs, so a
//! live browser page, a parsed HTML document or a hand-built fake can all be
//! analyzed the same way.

use serde::{Deserialize, Serialize};

use super::schema::PaintTiming;

/// Capability interface over the ambient state of a loaded page
pub trait PageEnvironment {
    /// Fully resolved targets of every `a[href]` element, in document order
    fn query_anchors(&self) -> Vec<String>;

    /// Serialized origin of the page (`scheme://host[:port]`)
    fn origin(&self) -> String;

    /// Entries of the page's paint timing buffer
    fn paint_timings(&self) -> Vec<PaintTiming>;
}

impl<T: PageEnvironment + ?Sized> PageEnvironment for &T {
    fn query_anchors(&self) -> Vec<String> {
        (**self).query_anchors()
    }

    fn origin(&self) -> String {
        (**self).origin()
    }

    fn paint_timings(&self) -> Vec<PaintTiming> {
        (**self).paint_timings()
    }
}

/// Ambient page state captured at one point in time
///
/// Deserializes directly from the object returned by
/// [`super::js_scripts::SNAPSHOT_SCRIPT`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub origin: String,
    #[serde(default)]
    pub anchors: Vec<String>,
    #[serde(default)]
    pub paint: Vec<PaintTiming>,
}

impl PageSnapshot {
    #[must_use]
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_anchor(mut self, href: impl Into<String>) -> Self {
        self.anchors.push(href.into());
        self
    }

    #[must_use]
    pub fn with_anchors<I, S>(mut self, hrefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.anchors.extend(hrefs.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_paint(mut self, entry: PaintTiming) -> Self {
        self.paint.push(entry);
        self
    }
}

impl PageEnvironment for PageSnapshot {
    fn query_anchors(&self) -> Vec<String> {
        self.anchors.clone()
    }

    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn paint_timings(&self) -> Vec<PaintTiming> {
        self.paint.clone()
    }
}
