//! Content routes of the public site.
//!
//! Routes are registered as bare paths. A route's first segment may never
//! look like a language code (two lowercase ASCII letters): the locale
//! segment is told apart from content purely by position and shape, so a
//! content route named `/de` would become ambiguous the day `de` is added.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::i18n::LanguageStrings;
use crate::routing::path::{first_segment, ADMIN_SEGMENT};

/// Route registration failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("Route '{0}' must start with '/'")]
    NotAbsolute(String),

    #[error("Route '{path}' starts with locale-shaped segment '{segment}'")]
    LocaleShapedSegment { path: String, segment: String },

    #[error("Route '{0}' is inside the reserved admin area")]
    Reserved(String),

    #[error("Route '{0}' is already registered")]
    Duplicate(String),
}

/// Picks a route's navigation label out of the localized strings.
pub type LabelFn = fn(&LanguageStrings) -> &'static str;

/// A registered content page.
#[derive(Debug, Clone)]
pub struct Route {
    pub path: &'static str,
    pub label: LabelFn,
}

impl Route {
    pub fn label(&self, strings: &LanguageStrings) -> &'static str {
        (self.label)(strings)
    }
}

/// Ordered set of content routes; order is navigation order.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

static SITE_ROUTES: OnceLock<RouteTable> = OnceLock::new();

fn locale_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| Regex::new(r"^[a-z]{2}$").expect("valid locale shape regex"))
}

/// Whether a segment could be mistaken for a language code.
pub fn is_locale_shaped(segment: &str) -> bool {
    locale_shape().is_match(segment)
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The clinic site's pages.
    pub fn site() -> &'static RouteTable {
        SITE_ROUTES.get_or_init(|| {
            let mut table = RouteTable::new();
            let pages: [(&'static str, LabelFn); 8] = [
                ("/", |s| s.nav_home),
                ("/hizmetler", |s| s.nav_services),
                ("/galeri", |s| s.nav_gallery),
                ("/blog", |s| s.nav_blog),
                ("/urunler", |s| s.nav_products),
                ("/iletisim", |s| s.nav_contact),
                ("/randevu", |s| s.nav_appointment),
                ("/hasta-portali", |s| s.nav_patient_portal),
            ];
            for (path, label) in pages {
                table
                    .register(path, label)
                    .expect("built-in site routes are valid");
            }
            table
        })
    }

    /// Register a bare content path.
    pub fn register(&mut self, path: &'static str, label: LabelFn) -> Result<(), RouteError> {
        if !path.starts_with('/') {
            return Err(RouteError::NotAbsolute(path.to_string()));
        }

        if let Some(segment) = first_segment(path) {
            if segment == ADMIN_SEGMENT {
                return Err(RouteError::Reserved(path.to_string()));
            }
            if is_locale_shaped(segment) {
                return Err(RouteError::LocaleShapedSegment {
                    path: path.to_string(),
                    segment: segment.to_string(),
                });
            }
        }

        let normalized = normalize(path);
        if self.routes.iter().any(|route| route.path == normalized) {
            return Err(RouteError::Duplicate(path.to_string()));
        }

        self.routes.push(Route {
            path: normalized,
            label,
        });
        Ok(())
    }

    /// Find the route for a bare path. Query, fragment and a trailing slash
    /// are ignored.
    pub fn find(&self, bare: &str) -> Option<&Route> {
        let path = bare.split(['?', '#']).next().unwrap_or(bare);
        let path = normalize(path);
        self.routes.iter().find(|route| route.path == path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

fn normalize(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    fn label(strings: &LanguageStrings) -> &'static str {
        strings.nav_home
    }

    #[test]
    fn test_site_routes_registered() {
        let table = RouteTable::site();
        assert_eq!(table.len(), 8);
        assert!(table.find("/").is_some());
        assert!(table.find("/randevu").is_some());
        assert!(table.find("/galeri/").is_some());
        assert!(table.find("/blog?page=2").is_some());
        assert!(table.find("/nope").is_none());
    }

    #[test]
    fn test_route_labels_are_localized() {
        let route = RouteTable::site().find("/iletisim").expect("contact route");
        assert_eq!(route.label(Language::ENGLISH.strings()), "Contact");
        assert_eq!(route.label(Language::RUSSIAN.strings()), "Контакты");
    }

    #[test]
    fn test_register_rejects_locale_shaped_segment() {
        let mut table = RouteTable::new();
        let err = table.register("/de/angebote", label).unwrap_err();

        assert_eq!(
            err,
            RouteError::LocaleShapedSegment {
                path: "/de/angebote".to_string(),
                segment: "de".to_string(),
            }
        );
    }

    #[test]
    fn test_register_rejects_supported_locale_segment() {
        let mut table = RouteTable::new();
        assert!(table.register("/en", label).is_err());
    }

    #[test]
    fn test_register_allows_longer_or_mixed_segments() {
        let mut table = RouteTable::new();
        assert!(table.register("/faq", label).is_ok());
        assert!(table.register("/x1", label).is_ok());
        assert!(table.register("/Ab", label).is_ok());
    }

    #[test]
    fn test_register_rejects_admin_area() {
        let mut table = RouteTable::new();
        assert_eq!(
            table.register("/admin/posts", label),
            Err(RouteError::Reserved("/admin/posts".to_string()))
        );
    }

    #[test]
    fn test_register_rejects_relative_and_duplicate() {
        let mut table = RouteTable::new();
        assert!(matches!(
            table.register("galeri", label),
            Err(RouteError::NotAbsolute(_))
        ));

        table.register("/galeri", label).expect("first registration");
        assert!(matches!(
            table.register("/galeri/", label),
            Err(RouteError::Duplicate(_))
        ));
    }

    #[test]
    fn test_is_locale_shaped() {
        assert!(is_locale_shaped("xx"));
        assert!(is_locale_shaped("tr"));
        assert!(!is_locale_shaped("xxx"));
        assert!(!is_locale_shaped("X1"));
    }
}
