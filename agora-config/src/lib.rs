//! Shared configuration loader for the agora formatting layer.
//!
//! `defaults/agora.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer deployment-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`AgoraConfig`].

use agora_format::validate::Locale;
use agora_format::{
    ExcerptRules, FormatRegistry, FormatRenderer, FormatService, VisibleTextLengthValidator,
};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

const DEFAULT_TOML: &str = include_str!("../defaults/agora.default.toml");

/// Top-level configuration consumed by the formatting layer.
#[derive(Debug, Clone, Deserialize)]
pub struct AgoraConfig {
    pub formatting: FormattingConfig,
    pub validation: ValidationConfig,
}

/// Rendering-related configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FormattingConfig {
    /// Dialect serving unknown or missing format identifiers
    pub default_format: String,
    pub excerpt: ExcerptConfig,
}

/// Mirrors the knobs exposed by the excerpt builder.
#[derive(Debug, Clone, Deserialize)]
pub struct ExcerptConfig {
    pub max_length: usize,
}

impl From<ExcerptConfig> for ExcerptRules {
    fn from(config: ExcerptConfig) -> Self {
        ExcerptRules {
            max_length: config.max_length,
        }
    }
}

impl From<&ExcerptConfig> for ExcerptRules {
    fn from(config: &ExcerptConfig) -> Self {
        ExcerptRules {
            max_length: config.max_length,
        }
    }
}

/// Content-validation limits.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    /// Visible-text budget for post bodies
    pub max_post_length: usize,
}

impl AgoraConfig {
    /// Build a [`FormatService`] over the built-in dialects, honoring the
    /// configured excerpt window and default format.
    pub fn build_service(&self) -> FormatService {
        let rules: ExcerptRules = (&self.formatting.excerpt).into();
        let text = Arc::new(agora_format::formats::PlainTextFormat::new(rules.clone()));
        let renderers: Vec<Arc<dyn FormatRenderer>> = vec![
            text.clone() as Arc<dyn FormatRenderer>,
            Arc::new(agora_format::formats::MarkdownFormat::new(rules.clone())),
            Arc::new(agora_format::formats::HtmlFormat::new(rules)),
        ];

        let wanted = self.formatting.default_format.trim().to_ascii_lowercase();
        let fallback = renderers
            .iter()
            .find(|renderer| {
                renderer.name() == wanted || renderer.aliases().contains(&wanted.as_str())
            })
            .cloned()
            .unwrap_or(text);

        let mut registry = FormatRegistry::new(fallback);
        for renderer in renderers {
            registry.register(renderer);
        }
        FormatService::new(registry)
    }

    /// Build a length validator wired to a service built from this
    /// configuration.
    pub fn build_validator(&self, locale: Arc<dyn Locale>) -> VisibleTextLengthValidator {
        VisibleTextLengthValidator::new(
            self.validation.max_post_length,
            Arc::new(self.build_service()),
            locale,
        )
    }
}

/// Helper for layering deployment overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for deployment settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<AgoraConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<AgoraConfig, ConfigError> {
    Loader::new().build()
}
