//! Internationalization (i18n) module for the contact emails.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their strings
//! - `language`: Normalization of a request's language hint and pack fallback
//! - `strings`: Localized strings, one constant per language
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::LanguageSelection;
//!
//! let lang = LanguageSelection::from_input(Some("fr"));
//! let subject = lang.strings().subject;
//! ```

mod language;
mod registry;
mod strings;

pub use language::{normalize_code, LanguageSelection, DEFAULT_LANGUAGE_CODE};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::LanguageStrings;
