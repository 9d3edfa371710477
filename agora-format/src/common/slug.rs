//! Heading anchor slugs

use std::collections::HashMap;

/// Derive an anchor slug from heading text.
///
/// Lowercases, keeps alphanumeric runs, and joins them with `-`. Empty or
/// fully symbolic text slugs to "heading".
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        slug.push_str("heading");
    }
    slug
}

/// Tracks slugs handed out during a single `parse_headings` call so
/// duplicate headings get distinct anchors (`intro`, `intro-2`, ...).
#[derive(Default)]
pub struct SlugCounter {
    seen: HashMap<String, usize>,
}

impl SlugCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce a unique slug for the given heading text.
    pub fn slug_for(&mut self, text: &str) -> String {
        let base = slugify(text);
        let count = self.seen.entry(base.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            base
        } else {
            format!("{base}-{count}")
        }
    }
}
