use crate::config::Config;
use crate::races::RaceStorage;
use axum::{
    Router,
    extract::{Extension, Request, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
};
use opentelemetry::{global, propagation::Extractor};
use tower_http::trace::TraceLayer;
use tracing_opentelemetry::OpenTelemetrySpanExt;

pub mod config;
pub mod database;
pub mod races;
pub mod session;
pub mod telemetry;
pub mod v1;

/// Prefix every client-facing route is mounted under.
pub const API_PREFIX: &str = "/api";

/// Package version plus the commit it was built from.
pub const SERVICE_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BUILD_COMMIT"));

/// Body of every 404, including the ones that hide the review queue.
pub const NOT_FOUND_BODY: &str = "nothing to see here";

#[derive(Clone)]
pub struct AppState<S> {
    pub storage: S,
}

impl<S> AppState<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

struct HeaderExtractor<'a>(&'a axum::http::HeaderMap);

impl Extractor for HeaderExtractor<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(|k| k.as_str()).collect()
    }
}

/// Builds the whole application: health probe at the root, the versioned
/// API under [`API_PREFIX`], and [`catch_all`] for everything else.
pub fn routes<S>(storage: S, config: Config) -> Router
where
    S: RaceStorage,
{
    let state = AppState::new(storage);

    let api_routes = Router::new().nest("/v1", v1::routes::<S>());

    Router::new()
        .route("/is-health", get(health_check::<S>))
        .nest(API_PREFIX, api_routes)
        .fallback(any(catch_all))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                let parent_context = global::get_text_map_propagator(|propagator| {
                    propagator.extract(&HeaderExtractor(request.headers()))
                });

                let span = tracing::info_span!(
                    "http_request",
                    http_request.method = ?request.method(),
                    http_request.uri = ?request.uri(),
                    http_request.version = ?request.version(),
                    http_request.user_agent = ?request.headers().get(axum::http::header::USER_AGENT),
                );
                span.set_parent(parent_context);
                span
            }),
        )
        .layer(Extension(config))
        .with_state(state)
}

async fn health_check<S>(
    State(state): State<AppState<S>>,
    Extension(config): Extension<Config>,
) -> Response
where
    S: RaceStorage,
{
    let mut response = if state.storage.is_connected().await {
        (StatusCode::OK, "OK").into_response()
    } else {
        tracing::warn!("Health check failed: storage is not connected");
        (StatusCode::BAD_GATEWAY, "502").into_response()
    };

    let headers = response.headers_mut();
    headers.insert(
        HeaderName::from_static("x-service-env"),
        HeaderValue::from_static(config.environment().as_str()),
    );
    headers.insert(
        HeaderName::from_static("x-service-version"),
        HeaderValue::from_static(SERVICE_VERSION),
    );

    response
}

/// The response for any route that does not exist, or that the caller may
/// not know exists.
pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
}

async fn catch_all() -> Response {
    not_found()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::races::MockRaceStorage;
    use axum::body::{Body, to_bytes};
    use tower::ServiceExt;

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router is infallible")
    }

    #[tokio::test]
    async fn health_reports_env_and_version() {
        let app = routes(MockRaceStorage::new(), Config::new_for_test());
        let response = get(app, "/is-health").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("x-service-env").map(HeaderValue::as_bytes),
            Some(&b"test"[..])
        );
        assert!(response.headers().contains_key("x-service-version"));
    }

    #[tokio::test]
    async fn health_is_bad_gateway_without_storage() {
        let app = routes(MockRaceStorage::disconnected(), Config::new_for_test());
        let response = get(app, "/is-health").await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn unknown_routes_hit_catch_all() {
        for uri in ["/nope", "/api/nope", "/api/v1/nope"] {
            let app = routes(MockRaceStorage::new(), Config::new_for_test());
            let response = get(app, uri).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
            let body = to_bytes(response.into_body(), usize::MAX)
                .await
                .expect("body reads");
            assert_eq!(&body[..], NOT_FOUND_BODY.as_bytes(), "{uri}");
        }
    }
}
