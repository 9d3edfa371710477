//! Markdown dialect
//!
//! # Library Choice
//!
//! We use the `comrak` crate for Markdown parsing and rendering. This choice
//! is based on:
//! - Single crate for both the AST walk and HTML output
//! - CommonMark compliance plus the GFM extensions posters expect
//! - Robust and well-maintained
//! - A safe rendering mode for untrusted input
//!
//! # Safety
//!
//! Posts are adversarial, so raw HTML embedded in Markdown is never passed
//! through: comrak runs with `render.escape` enabled, which re-escapes HTML
//! fragments into visible literal text, and `render.unsafe_` left off, which
//! drops `javascript:` and data URLs from links and images. The rendered
//! output is safe to embed without further processing.
//!
//! # Structure Extraction
//!
//! Headings come from ATX/setext heading nodes, attachments from image
//! nodes. Both walks share the plain-text collection in [`extract`], which
//! is also what the visible-length measurement consumes.

mod extract;

use crate::common::{build_excerpt, normalize_storable, ExcerptRules};
use crate::error::FormattingError;
use crate::format::{Attachment, FormatRenderer, Heading};
use comrak::{markdown_to_html, parse_document, Arena, ComrakOptions};

/// Renderer for Markdown content
#[derive(Default)]
pub struct MarkdownFormat {
    excerpt_rules: ExcerptRules,
}

impl MarkdownFormat {
    pub fn new(excerpt_rules: ExcerptRules) -> Self {
        MarkdownFormat { excerpt_rules }
    }
}

/// Options shared by every Markdown operation.
///
/// Extensions mirror what posters write in the wild; `escape` keeps raw
/// HTML inert.
fn comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.superscript = true;
    options.render.escape = true;
    options
}

impl FormatRenderer for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "CommonMark Markdown with GFM extensions"
    }

    fn aliases(&self) -> &[&str] {
        &["md"]
    }

    fn render_html(&self, content: &str) -> String {
        markdown_to_html(content, &comrak_options())
    }

    fn render_excerpt(&self, content: &str, query: Option<&str>) -> String {
        build_excerpt(&self.render_plain_text(content), query, &self.excerpt_rules)
    }

    fn render_plain_text(&self, content: &str) -> String {
        let arena = Arena::new();
        let root = parse_document(&arena, content, &comrak_options());
        extract::plain_text(root)
    }

    fn filter(&self, content: &str) -> Result<String, FormattingError> {
        // Markdown source is inert at rest; sanitization happens at render
        // time, so storage only needs normalization.
        normalize_storable(content)
    }

    fn parse_attachments(&self, content: &str) -> Vec<Attachment> {
        let arena = Arena::new();
        let root = parse_document(&arena, content, &comrak_options());
        extract::attachments(root)
    }

    fn parse_headings(&self, content: &str) -> Vec<Heading> {
        let arena = Arena::new();
        let root = parse_document(&arena, content, &comrak_options());
        extract::headings(root)
    }
}
