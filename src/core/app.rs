use std::sync::Arc;

use axum::{http::StatusCode, middleware::from_fn_with_state, routing::get, Router};
use tower_http::compression::CompressionLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::Config;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::rate_limit::{rate_limit_middleware, RateLimiter};
use crate::core::response_cache::{response_cache_middleware, ResponseCache};
use crate::features::regions::{routes as regions_routes, RegionService, RegionStore};
use crate::features::search::{routes as search_routes, LookupService};

/// Stateful interceptors shared by every route, absent when disabled in config
#[derive(Clone, Default)]
pub struct Interceptors {
    pub rate_limiter: Option<Arc<RateLimiter>>,
    pub response_cache: Option<Arc<ResponseCache>>,
}

impl Interceptors {
    pub fn from_config(config: &Config) -> Self {
        let rate_limiter = config
            .rate_limit
            .enabled
            .then(|| Arc::new(RateLimiter::new(&config.rate_limit)));
        let response_cache = config
            .cache
            .enabled
            .then(|| Arc::new(ResponseCache::new(&config.cache)));

        Self {
            rate_limiter,
            response_cache,
        }
    }
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Assemble every route over `store` and wrap it in the interceptor chain.
///
/// Outermost first: request id, trace, security headers, CORS, gzip,
/// rate limit, response cache.
pub fn build_app(
    store: Arc<dyn RegionStore>,
    config: &Config,
    interceptors: &Interceptors,
) -> Router {
    let region_service = Arc::new(RegionService::new(Arc::clone(&store)));
    let lookup_service = Arc::new(LookupService::new(store));

    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };
    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let mut app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(regions_routes::routes(region_service))
        .merge(search_routes::routes(lookup_service))
        .route("/health", get(health_check));

    if let Some(cache) = &interceptors.response_cache {
        app = app.layer(from_fn_with_state(
            Arc::clone(cache),
            response_cache_middleware,
        ));
    }
    if let Some(limiter) = &interceptors.rate_limiter {
        app = app.layer(from_fn_with_state(
            Arc::clone(limiter),
            rate_limit_middleware,
        ));
    }

    let app = app.layer(CompressionLayer::new().gzip(true)).layer(
        middleware::cors_layer(config.app.cors_allowed_origins.clone()),
    );

    middleware::with_security_headers(app, &config.security_headers)
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}
