//! Error types for content filtering

use std::fmt;

/// Errors raised when content cannot be safely normalized for storage.
///
/// Only [`crate::format::FormatRenderer::filter`] produces these. Every
/// rendering and parsing operation is total over arbitrary input and
/// degrades instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub enum FormattingError {
    /// Content contains constructs that cannot be normalized
    Malformed(String),
    /// Element nesting exceeds the storage bound
    NestingTooDeep(usize),
}

impl fmt::Display for FormattingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormattingError::Malformed(msg) => write!(f, "Content cannot be filtered: {msg}"),
            FormattingError::NestingTooDeep(depth) => {
                write!(f, "Element nesting of depth {depth} exceeds the storage bound")
            }
        }
    }
}

impl std::error::Error for FormattingError {}
