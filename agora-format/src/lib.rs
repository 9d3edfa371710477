//! Content formatting for user-submitted forum posts
//!
//!     This crate provides a uniform interface for rendering, filtering, and
//!     parsing post content written in interchangeable markup dialects
//!     (plain text, Markdown, constrained HTML), plus the visible-text
//!     length measurement used to validate content limits.
//!
//!     TLDR: For dialect authors:
//!         - Implement the FormatRenderer trait; never parse another dialect's syntax.
//!         - Every operation except filter() must be total: malformed input degrades to
//!           literal text, it never errors.
//!         - Rendered HTML must be safe to embed with no further escaping, whatever the input.
//!         - Offload parsing to the format's own library (comrak, html5ever); this crate only
//!           adapts their output.
//!
//! Architecture
//!
//!     The goal is to keep everything dialect-agnostic out of the dialect
//!     modules. Excerpt windowing, storage normalization, and heading anchors
//!     are identical across dialects and live in ./common; each module under
//!     ./formats only maps its markup onto those shared behaviors.
//!
//!     This is a pure lib: it powers the request-handling layer above it but is
//!     shell agnostic. No code here prints, reads the environment, or touches
//!     the disk.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # FormattingError (the filter failure channel)
//!     ├── format.rs               # FormatRenderer trait + Attachment/Heading values
//!     ├── registry.rs             # FormatRegistry: identifier -> renderer, with fallback
//!     ├── service.rs              # FormatService facade + visible text length
//!     ├── validate.rs             # VisibleTextLengthValidator and its outcome type
//!     ├── common                  # Shared dialect-agnostic logic
//!     ├── formats
//!     │   ├── text                # Plain text (the fallback dialect)
//!     │   ├── markdown            # CommonMark + GFM extensions via comrak
//!     │   └── html                # Allowlist-sanitized HTML via html5ever
//!     └── lib.rs
//!
//! Format Selection
//!
//!     Content is stored next to a format identifier naming the dialect it was
//!     authored in. Identifiers are matched case-insensitively, and unknown or
//!     missing identifiers resolve to the plain text fallback: years-old posts
//!     with retired identifiers must keep rendering rather than break a page.
//!
//! Safety Model
//!
//!     Input is adversarial. Two channels, deliberately distinct:
//!     - Rendering operations are total. They sanitize or escape whatever they
//!       are given and always produce embeddable output.
//!     - filter() is the storage gate and the only operation allowed to fail:
//!       content that cannot be safely normalized is rejected with a
//!       FormattingError instead of being stored.
//!
//!     Length validation measures the plain-text rendering in grapheme
//!     clusters, so formatting overhead and encoding width never count
//!     against an author's limit.

pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;
pub mod service;
pub mod validate;

pub use common::ExcerptRules;
pub use error::FormattingError;
pub use format::{Attachment, AttachmentKind, FormatRenderer, Heading};
pub use registry::FormatRegistry;
pub use service::FormatService;
pub use validate::{
    FieldDescriptor, IdentityLocale, Locale, SubmissionRow, ValidationOutcome,
    VisibleTextLengthValidator,
};
