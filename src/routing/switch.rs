//! Explicit language switching.

use tracing::info;

use crate::i18n::Language;
use crate::routing::path::{is_admin_path, translate};
use crate::routing::store::{LocaleStore, PathProvider};

/// Explicitly switch the site language.
///
/// The active locale is updated and persisted before any navigation, so a
/// reload racing the navigation still sees the new preference. On a back
/// office page the URL is left alone. Returns the navigation target, if one
/// was issued.
pub fn switch_language<P, S>(language: Language, paths: &mut P, store: &mut S) -> Option<String>
where
    P: PathProvider,
    S: LocaleStore,
{
    store.set(language);
    store.persist(language);

    let current = paths.current();
    if is_admin_path(&current) {
        info!(language = %language, "Language switched on admin page");
        return None;
    }

    let target = translate(&current, language);
    info!(language = %language, from = %current, to = %target, "Language switched");
    paths.navigate(&target);
    Some(target)
}
