//! Locale resolution and path rewriting.
//!
//! Every function here is pure and total: malformed or unrecognized input
//! degrades to the default language or to an unchanged path, never to an
//! error. Query strings and fragments ride along untouched.

use crate::i18n::Language;

/// First segment reserved for the back office. Paths under it never carry a
/// locale prefix.
pub const ADMIN_SEGMENT: &str = "admin";

/// Split `path` into its path component and the `?query#fragment` suffix.
fn split_suffix(path: &str) -> (&str, &str) {
    match path.find(['?', '#']) {
        Some(idx) => path.split_at(idx),
        None => (path, ""),
    }
}

/// The first non-empty segment of the path component, if any.
pub fn first_segment(path: &str) -> Option<&str> {
    let (path, _) = split_suffix(path);
    path.split('/').find(|segment| !segment.is_empty())
}

/// Whether the path lives under `/admin`.
///
/// The check is per segment: `/admin/posts` is administrative,
/// `/administrator` is not.
pub fn is_admin_path(path: &str) -> bool {
    first_segment(path) == Some(ADMIN_SEGMENT)
}

/// Supported language named by the first path segment, if any.
pub fn path_language(path: &str) -> Option<Language> {
    first_segment(path).and_then(Language::from_segment)
}

/// Resolve the language a path is written in.
///
/// Returns the supported language found in the first non-empty segment,
/// or the default language when the segment is missing or unsupported.
///
/// ```
/// use clinic_site::routing::resolve;
///
/// assert_eq!(resolve("/en/hizmetler").code(), "en");
/// assert_eq!(resolve("/").code(), "tr");
/// assert_eq!(resolve("/xx/foo").code(), "tr");
/// ```
pub fn resolve(path: &str) -> Language {
    path_language(path).unwrap_or_else(Language::default_language)
}

/// Remove a leading supported-locale segment.
///
/// The result always starts with `/`. Administrative paths and paths whose
/// first segment is not a supported code come back unchanged (apart from a
/// missing leading slash being added).
pub fn strip(path: &str) -> String {
    if is_admin_path(path) {
        return path.to_string();
    }

    let (path_part, suffix) = split_suffix(path);
    let bare = strip_path_component(path_part);
    format!("{bare}{suffix}")
}

fn strip_path_component(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    let (segment, rest) = match trimmed.split_once('/') {
        Some((segment, rest)) => (segment, rest.trim_start_matches('/')),
        None => (trimmed, ""),
    };

    if Language::from_segment(segment).is_some() {
        return format!("/{rest}");
    }

    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// Prefix a bare path with a language segment.
///
/// `/` becomes `/{code}`; anything else becomes `/{code}{bare}`.
/// Administrative paths are returned unchanged.
pub fn add(bare: &str, language: Language) -> String {
    if is_admin_path(bare) {
        return bare.to_string();
    }

    let (path_part, suffix) = split_suffix(bare);
    let code = language.code();
    let prefixed = match path_part {
        "" | "/" => format!("/{code}"),
        p if p.starts_with('/') => format!("/{code}{p}"),
        p => format!("/{code}/{p}"),
    };
    format!("{prefixed}{suffix}")
}

/// Rewrite `path` so it is prefixed with `language`, replacing any existing
/// locale prefix.
///
/// ```
/// use clinic_site::i18n::Language;
/// use clinic_site::routing::translate;
///
/// assert_eq!(translate("/tr/galeri", Language::ENGLISH), "/en/galeri");
/// assert_eq!(translate("/admin/posts", Language::ENGLISH), "/admin/posts");
/// ```
pub fn translate(path: &str, language: Language) -> String {
    if is_admin_path(path) {
        return path.to_string();
    }
    add(&strip(path), language)
}

/// The path in every supported language, in registry order.
pub fn alternates(path: &str) -> Vec<(Language, String)> {
    Language::all()
        .into_iter()
        .map(|language| (language, translate(path, language)))
        .collect()
}
