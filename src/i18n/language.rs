//! Language type: validated language representation.
//!
//! A `Language` can only be constructed for codes that exist in the
//! registry and are enabled, so holding one is proof of membership in the
//! supported locale set.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::i18n::{LanguageConfig, LanguageRegistry, LanguageStrings};

/// Errors raised when an explicit language code is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("Unknown language code: '{0}'")]
    Unknown(String),

    #[error("Language '{0}' is not enabled")]
    Disabled(String),
}

/// A validated, enabled language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// Registry code (e.g., "tr", "en")
    code: &'static str,
}

impl Language {
    pub const TURKISH: Language = Language { code: "tr" };
    pub const ENGLISH: Language = Language { code: "en" };
    pub const RUSSIAN: Language = Language { code: "ru" };
    pub const GEORGIAN: Language = Language { code: "ka" };

    /// Create a Language from a language code string.
    ///
    /// Matching is exact and case-sensitive: `"EN"` is not English.
    ///
    /// # Example
    /// ```
    /// use clinic_site::i18n::Language;
    ///
    /// let english = Language::from_code("en").unwrap();
    /// assert_eq!(english.code(), "en");
    /// assert!(Language::from_code("xx").is_err());
    /// ```
    pub fn from_code(code: &str) -> Result<Language, LanguageError> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => Err(LanguageError::Disabled(code.to_string())),
            None => Err(LanguageError::Unknown(code.to_string())),
        }
    }

    /// Lenient lookup used for URL segments and stored preferences, where an
    /// unrecognized value simply means "no language here".
    pub fn from_segment(segment: &str) -> Option<Language> {
        Self::from_code(segment).ok()
    }

    /// The designated default language.
    pub fn default_language() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    /// All enabled languages, in registry order.
    pub fn all() -> Vec<Language> {
        LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a Language built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }

    /// Localized user-facing strings for this language.
    pub fn strings(&self) -> &'static LanguageStrings {
        LanguageStrings::for_language(*self)
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::default_language()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}
