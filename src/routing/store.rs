//! Seams to the client-side router and to the i18n state.
//!
//! The routing logic never touches a browser, a cookie or a file directly;
//! it talks to a `PathProvider` and a `LocaleStore`. The in-memory
//! implementations below back request handling in the web front and serve
//! as fakes in tests.

use tracing::debug;

use crate::i18n::Language;
use crate::routing::path::path_language;

/// Access to the current location and to client-side navigation.
pub trait PathProvider {
    /// The current path, including any query string.
    fn current(&self) -> String;

    /// Navigate to `path`. Navigation is fire-and-forget.
    fn navigate(&mut self, path: &str);
}

/// The active locale plus its durable preference.
pub trait LocaleStore {
    /// The active locale.
    fn get(&self) -> Language;

    /// Overwrite the active locale.
    fn set(&mut self, language: Language);

    /// Write the durable preference. Failures are the store's concern and
    /// are never reported back to the caller.
    fn persist(&mut self, language: Language);

    /// The durable preference, if one was ever written.
    fn persisted(&self) -> Option<Language>;
}

/// Pick the starting locale for a session.
///
/// Order: the URL prefix if valid, then the persisted preference, then the
/// default language.
pub fn initial_locale(path: &str, persisted: Option<Language>) -> Language {
    path_language(path)
        .or(persisted)
        .unwrap_or_else(Language::default_language)
}

/// A `PathProvider` that records every navigation.
#[derive(Debug, Clone)]
pub struct MemoryPathProvider {
    current: String,
    history: Vec<String>,
}

impl MemoryPathProvider {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current: initial.into(),
            history: Vec::new(),
        }
    }

    /// Paths navigated to, oldest first. The initial path is not included.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl PathProvider for MemoryPathProvider {
    fn current(&self) -> String {
        self.current.clone()
    }

    fn navigate(&mut self, path: &str) {
        debug!(from = %self.current, to = %path, "Navigating");
        self.current = path.to_string();
        self.history.push(path.to_string());
    }
}

/// A `LocaleStore` whose durable preference lives only as long as the value.
///
/// The web front builds one per request, seeded from the request's
/// preference, and reads `persisted()` back afterwards to decide whether a
/// cookie must be written.
#[derive(Debug, Clone)]
pub struct MemoryLocaleStore {
    active: Language,
    persisted: Option<Language>,
}

impl MemoryLocaleStore {
    pub fn new(active: Language, persisted: Option<Language>) -> Self {
        Self { active, persisted }
    }

    /// Build a store for a session starting at `path`.
    pub fn initialize(path: &str, persisted: Option<Language>) -> Self {
        Self::new(initial_locale(path, persisted), persisted)
    }
}

impl LocaleStore for MemoryLocaleStore {
    fn get(&self) -> Language {
        self.active
    }

    fn set(&mut self, language: Language) {
        self.active = language;
    }

    fn persist(&mut self, language: Language) {
        self.persisted = Some(language);
    }

    fn persisted(&self) -> Option<Language> {
        self.persisted
    }
}
