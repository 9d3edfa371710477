//! Constrained-HTML dialect
//!
//! Serves content authored as HTML: legacy rich-text posts and the output
//! of WYSIWYG editors (registered under the "wysiwyg" alias).
//!
//! # Library Choice
//!
//! We use the `html5ever` + `markup5ever_rcdom` ecosystem for HTML parsing
//! and serialization:
//! - `html5ever`: Browser-grade HTML5 parser from the Servo project
//! - `markup5ever_rcdom`: Reference-counted DOM tree implementation
//!
//! This choice is based on:
//! - WHATWG HTML5 specification compliance, so the sanitizer sees the
//!   same tree a browser would render
//! - Handles malformed and adversarial HTML gracefully
//! - Battle-tested and actively maintained by the Servo project
//!
//! # Safety
//!
//! Input is untrusted. Rendering never echoes markup back: the DOM is
//! rebuilt through the allowlist in [`sanitizer`] and re-serialized, so
//! unknown tags, event handlers, and script-capable URLs cannot reach the
//! page. Because this dialect's markup *is* HTML, `filter` runs the same
//! sanitizer and stores its output; content nested beyond the storage
//! bound is rejected rather than truncated.

mod extract;
mod sanitizer;

pub use sanitizer::MAX_NESTING_DEPTH;

use crate::common::{build_excerpt, normalize_storable, ExcerptRules};
use crate::error::FormattingError;
use crate::format::{Attachment, FormatRenderer, Heading};

/// Renderer for HTML and WYSIWYG-authored content
#[derive(Default)]
pub struct HtmlFormat {
    excerpt_rules: ExcerptRules,
}

impl HtmlFormat {
    pub fn new(excerpt_rules: ExcerptRules) -> Self {
        HtmlFormat { excerpt_rules }
    }

    fn parse_body(content: &str) -> Option<(markup5ever_rcdom::RcDom, markup5ever_rcdom::Handle)> {
        let dom = sanitizer::parse_dom(content);
        sanitizer::body(&dom).map(|body| (dom, body))
    }
}

impl FormatRenderer for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Sanitized HTML, including WYSIWYG editor output"
    }

    fn aliases(&self) -> &[&str] {
        &["wysiwyg", "raw"]
    }

    fn render_html(&self, content: &str) -> String {
        sanitizer::sanitize(content)
    }

    fn render_excerpt(&self, content: &str, query: Option<&str>) -> String {
        build_excerpt(&self.render_plain_text(content), query, &self.excerpt_rules)
    }

    fn render_plain_text(&self, content: &str) -> String {
        match Self::parse_body(content) {
            Some((_dom, body)) => extract::plain_text(&body),
            None => String::new(),
        }
    }

    fn filter(&self, content: &str) -> Result<String, FormattingError> {
        let normalized = normalize_storable(content)?;
        sanitizer::sanitize_checked(&normalized)
    }

    fn parse_attachments(&self, content: &str) -> Vec<Attachment> {
        match Self::parse_body(content) {
            Some((_dom, body)) => extract::attachments(&body),
            None => Vec::new(),
        }
    }

    fn parse_headings(&self, content: &str) -> Vec<Heading> {
        match Self::parse_body(content) {
            Some((_dom, body)) => extract::headings(&body),
            None => Vec::new(),
        }
    }
}
