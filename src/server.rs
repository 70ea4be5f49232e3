//! HTTP server: wires locale negotiation, the redirector and the pages.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::data;
use crate::i18n::{split_locale_subpath, LanguageSelector, LocaleNegotiator};
use crate::pages::{self, PageContext};
use crate::routes::{RedirectDecision, Redirector, RouteError, RouteTable};

/// Shared, read-only application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub routes: Arc<RouteTable>,
}

impl AppState {
    pub fn new(config: Config, routes: RouteTable) -> Self {
        Self {
            config: Arc::new(config),
            routes: Arc::new(routes),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/language", get(select_language))
        .fallback(localized_page)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "default_locale": state.config.default_locale,
        "locales": state.routes.locales(),
        "routes": state.routes.all_routes().len(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct LanguageQuery {
    lng: Option<String>,
    path: Option<String>,
}

/// Store the picked language in the locale cookie and send the user to the
/// current page in that language.
async fn select_language(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Response {
    let selector = LanguageSelector::new(&state.routes, state.config.default_locale);
    let selection = selector.select(
        query.lng.as_deref().unwrap_or_default(),
        query.path.as_deref().unwrap_or("/"),
    );
    info!(
        "Language changed to {}, continuing at {}",
        selection.locale, selection.location
    );

    let home = format!("/{}", selection.locale);
    let location = HeaderValue::try_from(selection.location).unwrap_or_else(|e| {
        warn!("Unusable language target ({}), sending to {}", e, home);
        HeaderValue::from_str(&home).unwrap_or_else(|_| HeaderValue::from_static("/"))
    });

    let cookie = format!(
        "{}={}; Path=/; SameSite=Lax",
        state.config.locale_cookie, selection.locale
    );
    (
        StatusCode::SEE_OTHER,
        [(header::LOCATION, location)],
        [(header::SET_COOKIE, cookie)],
    )
        .into_response()
}

/// Locale override accepted on every page.
#[derive(Debug, Deserialize)]
pub struct LocaleQuery {
    lng: Option<String>,
}

/// Every other path: home, localized pages, redirects and 404s.
async fn localized_page(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    query: Option<Query<LocaleQuery>>,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let config = state.config.as_ref();
    let table = state.routes.as_ref();
    let path = uri.path();
    let (subpath, rest) = split_locale_subpath(path);

    let query_locale = query.as_ref().and_then(|Query(q)| q.lng.as_deref());
    let request_locale = LocaleNegotiator::new(config.default_locale, &config.locale_cookie)
        .negotiate(subpath, query_locale, &headers);
    let locale = request_locale.locale;
    debug!(
        "Serving {} in {} (from {:?})",
        path, locale, request_locale.source
    );

    let ctx = PageContext {
        locale,
        table,
        default_locale: config.default_locale,
        current_path: uri.path_and_query().map(|pq| pq.as_str()).unwrap_or(path),
    };

    if rest == "/" {
        return match pages::render_home(&ctx) {
            Ok(html) => Html(html).into_response(),
            Err(e) => internal_error(&ctx, e),
        };
    }

    let decision =
        Redirector::new(table, config.default_locale.code()).decide(rest, locale.code());
    if let RedirectDecision::Redirect { location } = decision {
        return redirect(StatusCode::MOVED_PERMANENTLY, location);
    }

    let Some((descriptor, params)) = table.resolve(rest) else {
        return not_found(&ctx);
    };

    if subpath.is_none() {
        return redirect(StatusCode::FOUND, format!("/{}{}", locale, rest));
    }

    match descriptor.page {
        "dinosaur" => match params.get("name").and_then(|name| data::find(name)) {
            Some(dinosaur) => Html(pages::render_dinosaur(&ctx, dinosaur)).into_response(),
            None => not_found(&ctx),
        },
        other => {
            error!("No page renders route '{}' (page '{}')", descriptor.name, other);
            (StatusCode::INTERNAL_SERVER_ERROR, Html(pages::render_error(&ctx))).into_response()
        }
    }
}

fn redirect(status: StatusCode, location: String) -> Response {
    (status, [(header::LOCATION, location)]).into_response()
}

fn not_found(ctx: &PageContext<'_>) -> Response {
    (StatusCode::NOT_FOUND, Html(pages::render_not_found(ctx))).into_response()
}

fn internal_error(ctx: &PageContext<'_>, e: RouteError) -> Response {
    error!("Failed to render {}: {}", ctx.current_path, e);
    (StatusCode::INTERNAL_SERVER_ERROR, Html(pages::render_error(ctx))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(AppState::new(
            Config::default(),
            RouteTable::builtin().expect("builtin table"),
        ))
    }

    async fn send(request: Request<Body>) -> Response {
        app().oneshot(request).await.expect("infallible")
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_post_is_not_allowed() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/de/dinosaurier/Tyrannosaurus")
            .body(Body::empty())
            .unwrap();
        assert_eq!(send(request).await.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_unknown_dinosaur_is_not_found() {
        let response = send(get_request("/de/dinosaurier/Velociraptor")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_language_without_parameters_goes_home_in_default() {
        let response = send(get_request("/language")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/en");
    }

    #[tokio::test]
    async fn test_language_with_control_characters_goes_home() {
        let response = send(get_request("/language?lng=de&path=%2Fabout%0Ax")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/de");
        assert!(response.headers().contains_key(header::SET_COOKIE));
    }

    #[tokio::test]
    async fn test_locale_query_is_percent_decoded() {
        let response = send(get_request("/dinosaur/Tyrannosaurus?lng=d%65")).await;
        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/de/dinosaurier/Tyrannosaurus"
        );
    }

    #[tokio::test]
    async fn test_malformed_query_still_serves_page() {
        let response = send(get_request("/de/dinosaurier/Tyrannosaurus?lng=%ZZ&lng")).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_home_fails_with_incomplete_table() {
        let router = create_router(AppState::new(
            Config::default(),
            RouteTable::new(Vec::new(), &["en"]).unwrap(),
        ));
        let response = router.oneshot(get_request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
