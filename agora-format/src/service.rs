//! Format service facade
//!
//! Consumers hand this the raw content plus the format identifier stored
//! alongside it; the service resolves a renderer through the registry and
//! forwards the call. It performs resolution only: errors from `filter`
//! pass through unchanged, and nothing is recovered here.

use crate::error::FormattingError;
use crate::format::{Attachment, Heading};
use crate::registry::FormatRegistry;
use unicode_segmentation::UnicodeSegmentation;

/// Facade over the registered markup dialects.
///
/// Cheap to share behind an `Arc`; all operations take `&self` and the
/// registry is read-only once the service is constructed.
pub struct FormatService {
    registry: FormatRegistry,
}

impl FormatService {
    pub fn new(registry: FormatRegistry) -> Self {
        FormatService { registry }
    }

    /// A service over the built-in dialects with plain text as fallback.
    pub fn with_defaults() -> Self {
        Self::new(FormatRegistry::with_defaults())
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// Render a safe, sanitized HTML version of some content.
    pub fn render_html(&self, content: &str, format: &str) -> String {
        self.registry.resolve(format).render_html(content)
    }

    /// Render a safe, shortened version of some content, biased toward
    /// `query` when given.
    pub fn render_excerpt(&self, content: &str, format: &str, query: Option<&str>) -> String {
        self.registry.resolve(format).render_excerpt(content, query)
    }

    /// Render a plain text version of some content.
    pub fn render_plain_text(&self, content: &str, format: &str) -> String {
        self.registry.resolve(format).render_plain_text(content)
    }

    /// Sanitize raw markup for storage.
    ///
    /// The renderer's verdict is final: errors propagate unchanged.
    pub fn filter(&self, content: &str, format: &str) -> Result<String, FormattingError> {
        self.registry.resolve(format).filter(content)
    }

    /// Parse the attachments embedded in some content.
    pub fn parse_attachments(&self, content: &str, format: &str) -> Vec<Attachment> {
        self.registry.resolve(format).parse_attachments(content)
    }

    /// Parse the headings in some content.
    pub fn parse_headings(&self, content: &str, format: &str) -> Vec<Heading> {
        self.registry.resolve(format).parse_headings(content)
    }

    /// The displayed length of some content, with formatting stripped.
    ///
    /// Counts extended grapheme clusters of the plain-text rendering, so a
    /// multi-byte glyph is one unit. This deliberately reuses the full
    /// plain-text render rather than a cheaper syntax-stripping pass: the
    /// renderer is the single source of truth for what a reader sees.
    pub fn visible_text_length(&self, content: &str, format: &str) -> usize {
        self.render_plain_text(content, format).graphemes(true).count()
    }
}

impl Default for FormatService {
    fn default() -> Self {
        Self::with_defaults()
    }
}
