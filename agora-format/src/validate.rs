//! Visible-text length validation
//!
//! Validates post body length by measuring what a reader would actually
//! see, so markup overhead never counts against the author. The validator
//! is one unit in a batch validation pipeline that runs many validators
//! per submission: failure is a returned value, never an unwind, so the
//! pipeline can keep collecting failures from other fields.

use crate::service::FormatService;
use std::sync::Arc;

/// Localized message lookup.
///
/// Mirrors the hosting platform's translation service: unknown keys fall
/// back to the key itself, so a missing catalog degrades to readable
/// English-ish output instead of failing.
pub trait Locale: Send + Sync {
    fn translate(&self, key: &str) -> String;
}

/// A [`Locale`] that returns every key unchanged. Useful as a default and
/// in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityLocale;

impl Locale for IdentityLocale {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Descriptor of the submission field being validated.
#[derive(Debug, Clone, Default)]
pub struct FieldDescriptor {
    /// Display-name key, translated into the failure message
    pub name: String,
    /// Per-field maximum; overrides the validator's configured default
    pub max_text_length: Option<usize>,
}

/// The submission record the field belongs to.
///
/// Submissions carry many fields; the only one this validator reads is the
/// declared format of the content. Absent means the author never chose
/// one, which resolves to the registry fallback.
#[derive(Debug, Clone, Default)]
pub struct SubmissionRow {
    pub format: Option<String>,
}

/// Outcome of a validation call.
///
/// A tagged value rather than an error: the batch pipeline must keep
/// processing other fields after a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The value, passed through unchanged
    Pass(String),
    /// The value is too long by `overage` displayed characters
    Invalid { message: String, overage: usize },
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Pass(_))
    }
}

/// Message template key looked up through the [`Locale`].
const MESSAGE_KEY: &str = "ValidateLength";

/// Validates content length after stripping formatting.
///
/// Configured once and invoked per submission field with the value, the
/// field descriptor, and the submission row, matching the calling
/// convention of the enclosing validation framework.
pub struct VisibleTextLengthValidator {
    max_text_length: usize,
    format_service: Arc<FormatService>,
    locale: Arc<dyn Locale>,
}

impl VisibleTextLengthValidator {
    /// Default maximum when neither the validator nor the field overrides
    /// it.
    pub const DEFAULT_MAX_TEXT_LENGTH: usize = 8000;

    pub fn new(
        max_text_length: usize,
        format_service: Arc<FormatService>,
        locale: Arc<dyn Locale>,
    ) -> Self {
        VisibleTextLengthValidator {
            max_text_length,
            format_service,
            locale,
        }
    }

    /// A validator over the given service with the default maximum and
    /// pass-through locale.
    pub fn with_defaults(format_service: Arc<FormatService>) -> Self {
        Self::new(
            Self::DEFAULT_MAX_TEXT_LENGTH,
            format_service,
            Arc::new(IdentityLocale),
        )
    }

    /// Validate one field of a submission.
    ///
    /// Reads the declared format from the row (absent resolves through the
    /// registry fallback), measures the visible length of `value`, and
    /// compares it against the field's maximum or the configured default.
    pub fn validate(
        &self,
        value: &str,
        field: &FieldDescriptor,
        row: &SubmissionRow,
    ) -> ValidationOutcome {
        let format = row.format.as_deref().unwrap_or("");
        let length = self.format_service.visible_text_length(value, format);
        let limit = field.max_text_length.unwrap_or(self.max_text_length);

        if length <= limit {
            ValidationOutcome::Pass(value.to_string())
        } else {
            let overage = length - limit;
            let template = self.locale.translate(MESSAGE_KEY);
            let field_name = self.locale.translate(&field.name);
            let message = template
                .replace("{field}", &field_name)
                .replace("{count}", &overage.to_string());
            ValidationOutcome::Invalid { message, overage }
        }
    }
}
