//! Plain text dialect
//!
//! The simplest dialect and the registry fallback: content is displayed as
//! written. Rendering to HTML escapes metacharacters and turns newlines
//! into `<br />` so the page shows what the author typed; nothing in plain
//! text carries structure, so attachment and heading parsing always come
//! back empty.
//!
//! Legacy content with an unknown or missing format identifier lands here,
//! which is why every operation has to hold up under markup from *other*
//! dialects arriving as "plain text".

use crate::common::{build_excerpt, normalize_storable, ExcerptRules};
use crate::error::FormattingError;
use crate::format::{Attachment, FormatRenderer, Heading};

/// Renderer for unformatted text
#[derive(Default)]
pub struct PlainTextFormat {
    excerpt_rules: ExcerptRules,
}

impl PlainTextFormat {
    pub fn new(excerpt_rules: ExcerptRules) -> Self {
        PlainTextFormat { excerpt_rules }
    }
}

impl FormatRenderer for PlainTextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Plain, unformatted text"
    }

    fn aliases(&self) -> &[&str] {
        &["plaintext", "txt"]
    }

    fn render_html(&self, content: &str) -> String {
        let escaped = escape_html(content.trim());
        escaped.replace('\n', "<br />\n")
    }

    fn render_excerpt(&self, content: &str, query: Option<&str>) -> String {
        build_excerpt(content, query, &self.excerpt_rules)
    }

    fn render_plain_text(&self, content: &str) -> String {
        content.trim().to_string()
    }

    fn filter(&self, content: &str) -> Result<String, FormattingError> {
        normalize_storable(content)
    }

    fn parse_attachments(&self, _content: &str) -> Vec<Attachment> {
        Vec::new()
    }

    fn parse_headings(&self, _content: &str) -> Vec<Heading> {
        Vec::new()
    }
}

/// Escape HTML metacharacters so content renders as literal text.
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
