//! Shared helpers for integration tests

use agora_format::validate::Locale;
use agora_format::FormatService;
use std::collections::HashMap;
use std::sync::Arc;

/// A service over the built-in dialects.
pub fn default_service() -> Arc<FormatService> {
    Arc::new(FormatService::with_defaults())
}

/// Locale backed by a fixed catalog; unknown keys fall back to the key.
pub struct MapLocale(HashMap<&'static str, &'static str>);

impl MapLocale {
    pub fn with_length_message() -> Self {
        MapLocale(HashMap::from([
            ("ValidateLength", "{field} is {count} characters too long."),
            ("Body", "Body"),
            ("Comment", "Comment"),
        ]))
    }
}

impl Locale for MapLocale {
    fn translate(&self, key: &str) -> String {
        self.0
            .get(key)
            .map_or_else(|| key.to_string(), |value| value.to_string())
    }
}
