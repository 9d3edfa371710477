//! Format registry for dialect discovery and selection
//!
//! This module provides a centralized registry mapping format identifiers to
//! renderers. Historical content may carry unknown or missing identifiers, so
//! lookup never fails: any miss resolves to the fallback renderer.
//!
//! Registration is a configuration-phase operation. Once request handling
//! begins the registry is read-only and safe to share across threads.

use crate::format::FormatRenderer;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of markup dialects
///
/// Identifiers are matched case-insensitively (normalized to ASCII
/// lowercase). Registering an identifier twice overwrites the previous
/// association, which is how configuration-time overrides are installed.
///
/// # Examples
///
/// ```ignore
/// let mut registry = FormatRegistry::new(Arc::new(PlainTextFormat));
/// registry.register(Arc::new(MarkdownFormat::default()));
///
/// let renderer = registry.resolve("Markdown");
/// let html = renderer.render_html("**hi**");
/// ```
pub struct FormatRegistry {
    renderers: HashMap<String, Arc<dyn FormatRenderer>>,
    fallback: Arc<dyn FormatRenderer>,
}

impl FormatRegistry {
    /// Create a registry with the given fallback renderer.
    ///
    /// The fallback serves every identifier with no registered renderer,
    /// including the empty string. It is not itself registered under its
    /// name; call [`FormatRegistry::register`] for that.
    pub fn new(fallback: Arc<dyn FormatRenderer>) -> Self {
        FormatRegistry {
            renderers: HashMap::new(),
            fallback,
        }
    }

    /// Register a renderer under its canonical name and all of its aliases.
    ///
    /// If any of those identifiers is already registered, it is replaced.
    pub fn register(&mut self, renderer: Arc<dyn FormatRenderer>) {
        for alias in renderer.aliases() {
            self.renderers
                .insert(normalize(alias), Arc::clone(&renderer));
        }
        self.renderers
            .insert(normalize(renderer.name()), renderer);
    }

    /// Register a renderer under an explicit identifier.
    ///
    /// Used for configuration-time overrides of a single identifier without
    /// touching the renderer's own name or aliases.
    pub fn register_as(&mut self, id: &str, renderer: Arc<dyn FormatRenderer>) {
        self.renderers.insert(normalize(id), renderer);
    }

    /// Resolve an identifier to a renderer.
    ///
    /// Never fails: unknown identifiers resolve to the fallback renderer so
    /// legacy content still renders to something rather than breaking a page.
    pub fn resolve(&self, id: &str) -> Arc<dyn FormatRenderer> {
        self.renderers
            .get(&normalize(id))
            .unwrap_or(&self.fallback)
            .clone()
    }

    /// Check if an identifier has its own registered renderer
    pub fn has(&self, id: &str) -> bool {
        self.renderers.contains_key(&normalize(id))
    }

    /// The renderer serving unregistered identifiers
    pub fn fallback(&self) -> Arc<dyn FormatRenderer> {
        Arc::clone(&self.fallback)
    }

    /// List all registered identifiers (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.renderers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in dialects.
    ///
    /// Plain text is both registered and installed as the fallback.
    pub fn with_defaults() -> Self {
        let text = Arc::new(crate::formats::text::PlainTextFormat::default());
        let mut registry = Self::new(text.clone());

        registry.register(text);
        registry.register(Arc::new(crate::formats::markdown::MarkdownFormat::default()));
        registry.register(Arc::new(crate::formats::html::HtmlFormat::default()));

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn normalize(id: &str) -> String {
    id.trim().to_ascii_lowercase()
}
