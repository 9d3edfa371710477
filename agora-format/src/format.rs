//! FormatRenderer trait definition
//!
//! This module defines the core FormatRenderer trait that every markup dialect
//! implements. The trait provides a uniform interface for rendering, filtering,
//! and parsing raw post content, so callers never branch on dialect identity.

use crate::error::FormattingError;
use serde::{Deserialize, Serialize};

/// A structural value extracted from post content: an embedded file or image.
///
/// Attachments are reported in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// What kind of embed this is
    pub kind: AttachmentKind,
    /// Source reference (URL or path as written in the content)
    pub url: String,
    /// Display name shown to readers
    pub name: String,
}

/// Attachment kinds recognized by the shipped dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Image,
    File,
}

/// A heading extracted from post content, used for outlines and anchors.
///
/// Headings are reported in document order. Slugs are unique within one
/// `parse_headings` call; duplicates get a `-2`, `-3`, ... suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Displayed heading text, formatting stripped
    pub text: String,
    /// Heading depth, 1 through 6
    pub level: u8,
    /// Anchor identifier derived from the text
    pub slug: String,
}

/// Trait for markup dialects
///
/// Implementors render, filter, and parse one dialect of user-submitted
/// markup. Instances are long-lived, hold no per-call state, and must be
/// safe to invoke from concurrent requests.
///
/// Every operation except [`FormatRenderer::filter`] is total: no input,
/// however malformed, may panic or error. Unparseable fragments are treated
/// as literal text.
///
/// # Examples
///
/// ```ignore
/// struct MyDialect;
///
/// impl FormatRenderer for MyDialect {
///     fn name(&self) -> &str {
///         "my-dialect"
///     }
///
///     fn render_html(&self, content: &str) -> String {
///         // Convert content to sanitized HTML
///         todo!()
///     }
///
///     // ...remaining operations
/// }
/// ```
pub trait FormatRenderer: Send + Sync {
    /// The canonical identifier of this dialect (e.g., "markdown", "html")
    fn name(&self) -> &str;

    /// Optional description of this dialect
    fn description(&self) -> &str {
        ""
    }

    /// Alternate identifiers that resolve to this dialect (e.g., ["md"]).
    ///
    /// Returned without any normalization; the registry lowercases them.
    /// Used so legacy content tagged with historical identifiers keeps
    /// rendering with the renderer that understands it.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Render a safe, sanitized HTML version of some content.
    ///
    /// The output is safe to embed directly in a page without further
    /// escaping, regardless of what the input contained.
    fn render_html(&self, content: &str) -> String;

    /// Render a safe, shortened, plain-text version of some content.
    ///
    /// When `query` is given and occurs in the content, the excerpt window
    /// is biased to include it; otherwise a leading excerpt is produced.
    fn render_excerpt(&self, content: &str, query: Option<&str>) -> String;

    /// Render a plain text version of some content.
    ///
    /// Strips all formatting syntax, leaving only the text a reader would
    /// see. Visible-length validation is computed from this rendering.
    fn render_plain_text(&self, content: &str) -> String;

    /// Sanitize the original markup for storage.
    ///
    /// Returns the filtered markup, not HTML. This is the one operation
    /// allowed to fail: content whose structure cannot be safely
    /// normalized must be rejected rather than stored.
    fn filter(&self, content: &str) -> Result<String, FormattingError>;

    /// Parse the list of attachments embedded in some content.
    ///
    /// Returns an empty list, never an error, when there are none.
    fn parse_attachments(&self, content: &str) -> Vec<Attachment>;

    /// Parse the list of headings in some content.
    ///
    /// Returns an empty list, never an error, when there are none.
    fn parse_headings(&self, content: &str) -> Vec<Heading>;
}
