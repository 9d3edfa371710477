//! Dialect-agnostic logic shared by the format implementations
//!
//! Each dialect owns its parse, but excerpt windowing, storage
//! normalization, and heading anchors behave identically everywhere, so
//! they live here and the format modules stay focused on their markup.

pub mod excerpt;
pub mod slug;
pub mod storable;

pub use excerpt::{build_excerpt, ExcerptRules};
pub use slug::SlugCounter;
pub use storable::normalize_storable;

/// Display name for an unlabeled embed: the last path segment of its URL.
pub(crate) fn embed_file_name(url: &str) -> String {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(url)
        .to_string()
}
