//! Dialect implementations
//!
//! One submodule per supported markup dialect. Each implements
//! [`crate::format::FormatRenderer`] and nothing else leaks out: callers go
//! through the registry and the service facade.

pub mod html;
pub mod markdown;
pub mod text;

pub use html::HtmlFormat;
pub use markdown::MarkdownFormat;
pub use text::PlainTextFormat;
