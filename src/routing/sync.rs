//! Keeps the URL's language segment and the active locale in agreement.
//!
//! `LanguageSync::observe` is meant to run once per path change, the way a
//! reactive effect keyed on the current path would. The URL is the source
//! of truth: a prefixed path updates the active locale, and only a path
//! with no segment at all triggers a navigation.

use tracing::debug;

use crate::i18n::Language;
use crate::routing::path::{first_segment, is_admin_path, resolve, translate};
use crate::routing::store::{LocaleStore, PathProvider};

/// What one evaluation of the effect did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The path had no segment; navigated to the prefixed path.
    Redirected(String),
    /// The path named another language; the active locale now follows it.
    Adopted(Language),
    /// URL and active locale already agree.
    InSync,
    /// The path was the same as the last one observed; nothing evaluated.
    Unchanged,
}

/// Path-change effect synchronizing URL prefix and active locale.
#[derive(Debug, Default, Clone)]
pub struct LanguageSync {
    last_path: Option<String>,
}

impl LanguageSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last path this effect evaluated.
    pub fn last_path(&self) -> Option<&str> {
        self.last_path.as_deref()
    }

    /// Evaluate the effect against the provider's current path.
    pub fn observe<P, S>(&mut self, paths: &mut P, store: &mut S) -> SyncOutcome
    where
        P: PathProvider,
        S: LocaleStore,
    {
        let path = paths.current();
        if self.last_path.as_deref() == Some(path.as_str()) {
            return SyncOutcome::Unchanged;
        }
        self.last_path = Some(path.clone());

        let outcome = evaluate(&path, paths, store);
        debug!(path = %path, outcome = ?outcome, "Language sync evaluated");
        outcome
    }
}

fn evaluate<P, S>(path: &str, paths: &mut P, store: &mut S) -> SyncOutcome
where
    P: PathProvider,
    S: LocaleStore,
{
    // Back office routes carry no prefix and must not drag the locale
    // back to the default.
    if is_admin_path(path) {
        return SyncOutcome::InSync;
    }

    if first_segment(path).is_none() {
        let preferred = store
            .persisted()
            .unwrap_or_else(Language::default_language);
        let target = translate(path, preferred);
        paths.navigate(&target);
        return SyncOutcome::Redirected(target);
    }

    let resolved = resolve(path);
    if resolved != store.get() {
        store.set(resolved);
        return SyncOutcome::Adopted(resolved);
    }

    SyncOutcome::InSync
}
