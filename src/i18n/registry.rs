//! Language registry: Single source of truth for all supported languages.
//!
//! The registry is a process-wide, immutable table initialized once through
//! `OnceLock`. Lookups never fail from the caller's point of view: unknown
//! codes resolve to the default language.

use std::sync::OnceLock;

use crate::i18n::strings::{
    LanguageStrings, DUTCH_STRINGS, ENGLISH_STRINGS, FRENCH_STRINGS, GERMAN_STRINGS,
    POLISH_STRINGS,
};

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "de", "en")
    pub code: &'static str,

    /// English name of the language (e.g., "German", "Polish")
    pub name: &'static str,

    /// Native name of the language (e.g., "Deutsch", "Polski")
    pub native_name: &'static str,

    /// Whether unknown codes fall back to this language (only one should be true)
    pub is_default: bool,

    /// Localized strings for this language
    pub strings: &'static LanguageStrings,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its exact code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get a language configuration by code, falling back to the default.
    pub fn resolve(&self, code: &str) -> &LanguageConfig {
        self.get_by_code(code).unwrap_or_else(|| self.default_language())
    }

    /// Get all languages.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if the table does not contain exactly one default language
    /// (this indicates a configuration error in `default_languages`).
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check if a language code has its own pack.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// Default language configurations: German (default), English, French,
/// Dutch and Polish.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            is_default: true,
            strings: &GERMAN_STRINGS,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: false,
            strings: &ENGLISH_STRINGS,
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            is_default: false,
            strings: &FRENCH_STRINGS,
        },
        LanguageConfig {
            code: "nl",
            name: "Dutch",
            native_name: "Nederlands",
            is_default: false,
            strings: &DUTCH_STRINGS,
        },
        LanguageConfig {
            code: "pl",
            name: "Polish",
            native_name: "Polski",
            is_default: false,
            strings: &POLISH_STRINGS,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_registry_has_five_languages() {
        let codes: Vec<_> = LanguageRegistry::get()
            .list_all()
            .iter()
            .map(|lang| lang.code)
            .collect();

        assert_eq!(codes, vec!["de", "en", "fr", "nl", "pl"]);
    }

    #[test]
    fn test_get_by_code_polish() {
        let config = LanguageRegistry::get().get_by_code("pl").unwrap();
        assert_eq!(config.name, "Polish");
        assert_eq!(config.strings.greeting, "Witam");
        assert!(!config.is_default);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("es").is_none());
    }

    #[test]
    fn test_get_by_code_is_case_sensitive() {
        assert!(LanguageRegistry::get().get_by_code("EN").is_none());
    }

    #[test]
    fn test_default_language_is_german() {
        let default = LanguageRegistry::get().default_language();
        assert_eq!(default.code, "de");
        assert!(default.is_default);
    }

    #[test]
    fn test_resolve_known_code() {
        assert_eq!(LanguageRegistry::get().resolve("fr").code, "fr");
    }

    #[test]
    fn test_resolve_unknown_code_falls_back() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.resolve("xx").code, "de");
        assert_eq!(registry.resolve("").code, "de");
    }

    #[test]
    fn test_is_supported() {
        let registry = LanguageRegistry::get();
        assert!(registry.is_supported("nl"));
        assert!(!registry.is_supported("xx"));
    }
}
