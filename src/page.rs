//! The page root - the `<html>` document.
//!
//! Owns the layout plus the global resource lists. Default stylesheets
//! and scripts are immutable static tables; every page clones them
//! before appending its own additions, so no page can leak resources
//! into another request. Page-specific entries always follow the
//! defaults, and no deduplication is performed - the boundary tolerates
//! a sheet listed twice.

use crate::layout::Layout;
use crate::types::MetaTag;

/// Stylesheets present on every page, in load order.
pub const CSS_DEFAULT_SHEETS: &[&str] = &[
    "/static/css/base.css",
    "/static/css/components.css",
];

/// Scripts present on every page, in load order.
pub const JS_DEFAULT_SCRIPTS: &[&str] = &["/static/js/togglepanel.js"];

/// The document root handed to the rendering boundary, one per request.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub title: String,
    pub layout: Layout,
    /// Default sheets followed by page-specific additions.
    pub stylesheets: Vec<String>,
    /// Default scripts followed by page-specific additions.
    pub scripts: Vec<String>,
    pub meta_tags: Vec<MetaTag>,
}

impl Page {
    /// Template key consumed by the rendering boundary.
    pub const TEMPLATE_KEY: &'static str = "base_graph.html";

    pub fn new(title: impl Into<String>, layout: Layout) -> Self {
        Self {
            title: title.into(),
            layout,
            stylesheets: CSS_DEFAULT_SHEETS.iter().map(|s| s.to_string()).collect(),
            scripts: JS_DEFAULT_SCRIPTS.iter().map(|s| s.to_string()).collect(),
            meta_tags: Vec::new(),
        }
    }

    /// Append page-specific stylesheets after the defaults.
    pub fn stylesheets(mut self, extra: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.stylesheets.extend(extra.into_iter().map(Into::into));
        self
    }

    /// Append page-specific scripts after the defaults.
    pub fn scripts(mut self, extra: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.scripts.extend(extra.into_iter().map(Into::into));
        self
    }

    pub fn meta_tags(mut self, tags: Vec<MetaTag>) -> Self {
        self.meta_tags = tags;
        self
    }
}
