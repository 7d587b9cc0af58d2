//! HTTP front for the clinic site.
//!
//! Each request gets its own `MemoryPathProvider` / `MemoryLocaleStore`
//! pair seeded from the URL and the visitor's preference, and runs the same
//! language sync and switch logic a browser session would.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Path, Query, State};
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{AppendHeaders, Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::config::Config;
use crate::detect::{preference_cookie, Preference};
use crate::i18n::Language;
use crate::pages::{render_admin, render_not_found, render_page, PageContext};
use crate::routing::{
    is_admin_path, strip, switch_language, LanguageSync, LocaleStore, MemoryLocaleStore,
    MemoryPathProvider, RouteTable, SyncOutcome,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

#[derive(Debug, Serialize)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    pub is_default: bool,
}

#[derive(Debug, Deserialize)]
pub struct SwitchQuery {
    pub next: Option<String>,
}

/// Build the application router.
pub fn router(config: Arc<Config>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/languages", get(languages))
        .route("/language/:code", get(switch))
        .route("/admin", get(admin))
        .route("/admin/", get(admin))
        .route("/admin/*rest", get(admin))
        .fallback(site_page)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { config })
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: Config) -> Result<()> {
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!("Listening on {}", address);
    axum::serve(listener, router(Arc::new(config)))
        .await
        .context("Server error")?;
    Ok(())
}

async fn health() -> &'static str {
    "OK"
}

async fn languages() -> Json<Vec<LanguageInfo>> {
    let languages = Language::all()
        .into_iter()
        .map(|language| LanguageInfo {
            code: language.code(),
            name: language.name(),
            native_name: language.native_name(),
            is_default: language.is_default(),
        })
        .collect();
    Json(languages)
}

/// Only site-relative targets are followed; anything else could send the
/// visitor off-site. Control characters never make a valid `Location`.
fn safe_next(next: Option<String>) -> String {
    match next {
        Some(next)
            if next.starts_with('/')
                && !next.starts_with("//")
                && !next.contains('\\')
                && !next.chars().any(|c| c.is_ascii_control()) =>
        {
            next
        }
        _ => "/".to_string(),
    }
}

async fn switch(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(query): Query<SwitchQuery>,
    headers: HeaderMap,
) -> Response {
    let preference = Preference::from_headers(&headers, &state.config.language_cookie);

    let language = match Language::from_code(&code) {
        Ok(language) => language,
        Err(e) => {
            debug!(error = %e, "Rejected language switch");
            let shown_in = preference.effective().unwrap_or_default();
            let message = shown_in.strings().invalid_language.replace("{code}", &code);
            return (StatusCode::BAD_REQUEST, message).into_response();
        }
    };

    let next = safe_next(query.next);
    let mut paths = MemoryPathProvider::new(next.clone());
    let mut store = MemoryLocaleStore::initialize(&next, preference.stored);
    let target = switch_language(language, &mut paths, &mut store).unwrap_or(next);

    let persisted = store.persisted().unwrap_or(language);
    let cookie = preference_cookie(&state.config.language_cookie, persisted);

    (AppendHeaders([(SET_COOKIE, cookie)]), Redirect::to(&target)).into_response()
}

async fn admin(State(state): State<AppState>, uri: Uri) -> Html<String> {
    Html(render_admin(&state.config.site_name, uri.path()))
}

async fn site_page(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> Response {
    let path = uri.path();
    if is_admin_path(path) {
        return Html(render_admin(&state.config.site_name, path)).into_response();
    }

    let location = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| path.to_string());

    let preference = Preference::from_headers(&headers, &state.config.language_cookie);
    let mut paths = MemoryPathProvider::new(location);
    let mut store = MemoryLocaleStore::initialize(path, preference.effective());

    if let SyncOutcome::Redirected(target) = LanguageSync::new().observe(&mut paths, &mut store) {
        return Redirect::temporary(&target).into_response();
    }

    let ctx = PageContext {
        site_name: &state.config.site_name,
        public_base_url: &state.config.public_base_url,
        language: store.get(),
        current_path: path,
    };

    match RouteTable::site().find(&strip(path)) {
        Some(route) => Html(render_page(&ctx, route)).into_response(),
        None => (StatusCode::NOT_FOUND, Html(render_not_found(&ctx))).into_response(),
    }
}
