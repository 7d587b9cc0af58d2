//! Language preference detection for incoming requests.
//!
//! The durable preference lives in a cookie. When a visitor has none yet,
//! the browser's `Accept-Language` header is consulted before falling back
//! to the default language.

use axum::http::header::{ACCEPT_LANGUAGE, COOKIE};
use axum::http::HeaderMap;
use cookie::{Cookie, SameSite};

use crate::i18n::Language;

/// What a request tells us about the visitor's language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preference {
    /// Language stored in the preference cookie.
    pub stored: Option<Language>,
    /// Best supported match from `Accept-Language`.
    pub negotiated: Option<Language>,
}

impl Preference {
    pub fn from_headers(headers: &HeaderMap, cookie_name: &str) -> Self {
        Self {
            stored: cookie_language(headers, cookie_name),
            negotiated: accept_language(headers),
        }
    }

    /// Stored preference first, then the negotiated one.
    pub fn effective(&self) -> Option<Language> {
        self.stored.or(self.negotiated)
    }
}

/// Language stored in the named cookie, if present and supported.
pub fn cookie_language(headers: &HeaderMap, cookie_name: &str) -> Option<Language> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == cookie_name)
        .and_then(|cookie| Language::from_segment(cookie.value()))
}

/// Highest-weighted supported language in `Accept-Language`.
///
/// Region subtags are ignored (`en-GB` counts as `en`). Weights outside
/// `(0, 1]`, including `q=0` and non-finite values, are never chosen.
pub fn accept_language(headers: &HeaderMap) -> Option<Language> {
    let header = headers.get(ACCEPT_LANGUAGE)?.to_str().ok()?;

    let mut candidates: Vec<(f32, Language)> = accept_language::parse_with_quality(header)
        .into_iter()
        .filter(|(_, quality)| quality.is_finite() && *quality > 0.0 && *quality <= 1.0)
        .filter_map(|(tag, quality)| {
            let primary = tag.split('-').next()?.to_ascii_lowercase();
            Language::from_segment(&primary).map(|language| (quality, language))
        })
        .collect();

    // Stable sort keeps header order among equal weights.
    candidates.sort_by(|a, b| b.0.total_cmp(&a.0));
    candidates.first().map(|(_, language)| *language)
}

/// Long-lived `Set-Cookie` value storing the preference.
pub fn preference_cookie(cookie_name: &str, language: Language) -> String {
    Cookie::build((cookie_name.to_string(), language.code()))
        .path("/")
        .same_site(SameSite::Lax)
        .permanent()
        .build()
        .to_string()
}
