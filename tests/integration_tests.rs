//! Integration tests for the clinic site
//!
//! These tests drive the full axum router in-process and check that the
//! language routing rules hold end to end: root redirects, URL-wins locale
//! adoption, the switch endpoint's cookie, and the admin exemption.

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{ACCEPT_LANGUAGE, CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use clinic_site::config::Config;
use clinic_site::i18n::Language;
use clinic_site::routing::{
    resolve, strip, switch_language, translate, LanguageSync, LocaleStore, LocalizedLink,
    MemoryLocaleStore, MemoryPathProvider, PathProvider, SyncOutcome,
};

// ==================== Test Helpers ====================

fn create_test_config() -> Config {
    Config {
        site_name: "Test Klinik".to_string(),
        public_base_url: "https://klinik.test".to_string(),
        ..Config::default()
    }
}

fn app() -> Router {
    clinic_site::server::router(Arc::new(create_test_config()))
}

async fn get(uri: &str, headers: &[(&str, &str)]) -> Response {
    let mut request = Request::builder().uri(uri);
    for (name, value) in headers {
        request = request.header(*name, *value);
    }
    app()
        .oneshot(request.body(Body::empty()).expect("request"))
        .await
        .expect("router is infallible")
}

async fn body_text(response: Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

fn header<'a>(response: &'a Response, name: axum::http::HeaderName) -> Option<&'a str> {
    response.headers().get(name).and_then(|v| v.to_str().ok())
}

// ==================== Routing Scenarios ====================

#[test]
fn test_scenarios_from_the_routing_contract() {
    // "/" with preference "ru" redirects to "/ru"
    let mut paths = MemoryPathProvider::new("/");
    let mut store = MemoryLocaleStore::initialize("/", Some(Language::RUSSIAN));
    assert_eq!(
        LanguageSync::new().observe(&mut paths, &mut store),
        SyncOutcome::Redirected("/ru".to_string())
    );

    // "/en/hizmetler" with active "tr" adopts "en" without navigating
    let mut paths = MemoryPathProvider::new("/en/hizmetler");
    let mut store = MemoryLocaleStore::new(Language::TURKISH, None);
    assert_eq!(
        LanguageSync::new().observe(&mut paths, &mut store),
        SyncOutcome::Adopted(Language::ENGLISH)
    );
    assert!(paths.history().is_empty());

    // "/xx/foo": default language, strip leaves it alone
    assert_eq!(resolve("/xx/foo"), Language::TURKISH);
    assert_eq!(strip("/xx/foo"), "/xx/foo");

    // Link to "/randevu" under "ka"
    let link = LocalizedLink::new("/randevu", "Randevu");
    let mut paths = MemoryPathProvider::new("/ka");
    assert_eq!(link.href(Language::GEORGIAN), "/ka/randevu");
    assert_eq!(link.click(Language::GEORGIAN, &mut paths), "/ka/randevu");
    assert_eq!(paths.current(), "/ka/randevu");

    // Switch to "en" while on "/tr/galeri"
    let mut paths = MemoryPathProvider::new("/tr/galeri");
    let mut store = MemoryLocaleStore::initialize("/tr/galeri", None);
    switch_language(Language::ENGLISH, &mut paths, &mut store);
    assert_eq!(store.persisted(), Some(Language::ENGLISH));
    assert_eq!(paths.current(), "/en/galeri");

    // Admin paths are invariant
    for language in Language::all() {
        assert_eq!(translate("/admin/posts", language), "/admin/posts");
    }
}

// ==================== HTTP Tests ====================

#[tokio::test]
async fn test_health() {
    let response = get("/health", &[]).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "OK");
}

#[tokio::test]
async fn test_languages_api() {
    let response = get("/api/languages", &[]).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(header(&response, CONTENT_TYPE)
        .unwrap_or_default()
        .starts_with("application/json"));

    let json: serde_json::Value =
        serde_json::from_str(&body_text(response).await).expect("valid json");
    let codes: Vec<_> = json
        .as_array()
        .expect("array")
        .iter()
        .map(|l| l["code"].as_str().expect("code").to_string())
        .collect();

    assert_eq!(codes, vec!["tr", "en", "ru", "ka"]);
    assert_eq!(json[0]["is_default"], serde_json::Value::Bool(true));
}

#[tokio::test]
async fn test_root_redirects_to_cookie_preference() {
    let response = get("/", &[("cookie", "i18nextLng=ru")]).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(header(&response, LOCATION), Some("/ru"));
}

#[tokio::test]
async fn test_root_redirects_to_accept_language_without_cookie() {
    let response = get("/", &[("accept-language", "ka-GE, en;q=0.5")]).await;

    assert_eq!(header(&response, LOCATION), Some("/ka"));
}

#[tokio::test]
async fn test_cookie_beats_accept_language() {
    let response = get(
        "/",
        &[("cookie", "i18nextLng=en"), ("accept-language", "ru")],
    )
    .await;

    assert_eq!(header(&response, LOCATION), Some("/en"));
}

#[tokio::test]
async fn test_root_redirects_to_default_and_keeps_query() {
    let response = get("/?utm_source=ad", &[]).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(header(&response, LOCATION), Some("/tr?utm_source=ad"));
}

#[tokio::test]
async fn test_prefixed_page_renders_in_url_language() {
    // The cookie says Russian but the URL wins.
    let response = get("/en/hizmetler", &[(COOKIE.as_str(), "i18nextLng=ru")]).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<html lang=\"en\">"));
    assert!(html.contains("<h1>Services</h1>"));
    assert!(html.contains("href=\"/en/randevu\""));
    assert!(html.contains("hreflang=\"ka\" href=\"https://klinik.test/ka/hizmetler\""));
}

#[tokio::test]
async fn test_unknown_route_is_localized_404() {
    let response = get("/ru/nope", &[]).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Страница не найдена"));
}

#[tokio::test]
async fn test_unsupported_prefix_is_content_in_default_language() {
    let response = get("/xx/foo", &[(ACCEPT_LANGUAGE.as_str(), "en")]).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = body_text(response).await;
    assert!(html.contains("<html lang=\"tr\">"));
    assert!(html.contains("Sayfa bulunamadı"));
}

#[tokio::test]
async fn test_switch_sets_cookie_and_redirects() {
    let response = get("/language/en?next=%2Ftr%2Fgaleri", &[]).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(header(&response, LOCATION), Some("/en/galeri"));
    let cookie = header(&response, SET_COOKIE).expect("cookie set");
    assert!(cookie.starts_with("i18nextLng=en"));
}

#[tokio::test]
async fn test_switch_without_next_goes_home() {
    let response = get("/language/ka", &[]).await;

    assert_eq!(header(&response, LOCATION), Some("/ka"));
}

#[tokio::test]
async fn test_switch_on_admin_keeps_path() {
    let response = get("/language/ru?next=%2Fadmin%2Fposts", &[]).await;

    assert_eq!(header(&response, LOCATION), Some("/admin/posts"));
    assert!(header(&response, SET_COOKIE)
        .expect("cookie set")
        .starts_with("i18nextLng=ru"));
}

#[tokio::test]
async fn test_switch_rejects_offsite_next() {
    let response = get("/language/en?next=https%3A%2F%2Fevil.example", &[]).await;

    assert_eq!(header(&response, LOCATION), Some("/en"));
}

#[tokio::test]
async fn test_switch_rejects_control_chars_in_next() {
    let response = get("/language/en?next=%2Ftr%2Fgal%0Aeri", &[]).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(header(&response, LOCATION), Some("/en"));
    assert!(header(&response, SET_COOKIE)
        .expect("cookie set")
        .starts_with("i18nextLng=en"));
}

#[tokio::test]
async fn test_switch_unsupported_language() {
    let response = get("/language/fr", &[("cookie", "i18nextLng=en")]).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(header(&response, SET_COOKIE).is_none());
    assert_eq!(body_text(response).await, "Unsupported language: fr");
}

#[tokio::test]
async fn test_admin_is_never_redirected() {
    for uri in ["/admin", "/admin/", "/admin/posts"] {
        let response = get(uri, &[("cookie", "i18nextLng=ru")]).await;

        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let html = body_text(response).await;
        assert!(html.contains("href=\"/admin/settings\""));
        assert!(!html.contains("/ru/admin"));
        assert!(!html.contains("hreflang"), "{uri}");
    }
}
