//! Language selection for a single submission.
//!
//! A submission carries a free-form language hint. It is normalized to a
//! short code and resolved against the registry. The normalized code is kept
//! even when it has no pack of its own, so callers can echo exactly what the
//! client asked for.

use crate::i18n::{LanguageConfig, LanguageRegistry, LanguageStrings};

/// Code used when the submission carries no (or an empty) language hint.
pub const DEFAULT_LANGUAGE_CODE: &str = "de";

/// Result of resolving a submission's language hint.
#[derive(Debug, Clone)]
pub struct LanguageSelection {
    /// Lower-cased hint, truncated to its first two characters
    code: String,

    /// Pack chosen for rendering (the default pack for unknown codes)
    config: &'static LanguageConfig,
}

impl LanguageSelection {
    /// Resolve an optional language hint.
    ///
    /// # Example
    /// ```ignore
    /// let lang = LanguageSelection::from_input(Some("EN-extra"));
    /// assert_eq!(lang.code(), "en");
    /// ```
    pub fn from_input(input: Option<&str>) -> Self {
        let code = normalize_code(input);
        let config = LanguageRegistry::get().resolve(&code);
        Self { code, config }
    }

    /// The normalized code as requested, not necessarily the one rendered.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Code of the pack actually used for rendering.
    pub fn pack_code(&self) -> &'static str {
        self.config.code
    }

    pub fn config(&self) -> &'static LanguageConfig {
        self.config
    }

    pub fn strings(&self) -> &'static LanguageStrings {
        self.config.strings
    }

    /// `true` when the requested code has no pack and the default was used.
    pub fn is_fallback(&self) -> bool {
        self.code != self.config.code
    }
}

/// Lower-case the hint and keep its first two characters.
///
/// Absent or empty hints become [`DEFAULT_LANGUAGE_CODE`]. Truncation counts
/// characters, so multi-byte input never splits a code point.
pub fn normalize_code(input: Option<&str>) -> String {
    match input {
        Some(raw) if !raw.is_empty() => raw.to_lowercase().chars().take(2).collect(),
        _ => DEFAULT_LANGUAGE_CODE.to_string(),
    }
}
