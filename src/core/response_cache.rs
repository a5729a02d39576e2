//! In-memory cache for successful GET responses, keyed by request URI.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use moka::future::Cache;

use crate::core::config::CacheConfig;
use crate::core::error::AppError;

static X_CACHE: HeaderName = HeaderName::from_static("x-cache");

/// Largest body buffered for caching (full village hierarchy fits comfortably)
const MAX_CACHED_BODY_BYTES: usize = 32 * 1024 * 1024;

#[derive(Debug)]
struct CachedResponse {
    headers: HeaderMap,
    body: Bytes,
}

impl CachedResponse {
    fn to_response(&self) -> Response {
        let mut response = Response::new(Body::from(self.body.clone()));
        *response.headers_mut() = self.headers.clone();
        response
            .headers_mut()
            .insert(X_CACHE.clone(), HeaderValue::from_static("HIT"));
        response
    }
}

pub struct ResponseCache {
    entries: Cache<String, Arc<CachedResponse>>,
}

impl ResponseCache {
    pub fn new(config: &CacheConfig) -> Self {
        let entries = Cache::builder()
            .max_capacity(config.max_entries)
            .time_to_live(config.ttl)
            .build();
        Self { entries }
    }

    async fn get(&self, key: &str) -> Option<Arc<CachedResponse>> {
        self.entries.get(key).await
    }

    async fn insert(&self, key: String, response: CachedResponse) {
        self.entries.insert(key, Arc::new(response)).await;
    }
}

pub async fn response_cache_middleware(
    State(cache): State<Arc<ResponseCache>>,
    req: Request,
    next: Next,
) -> Response {
    if req.method() != Method::GET {
        return next.run(req).await;
    }

    let key = req.uri().to_string();
    if let Some(hit) = cache.get(&key).await {
        tracing::debug!(uri = %key, "Response cache hit");
        return hit.to_response();
    }

    let response = next.run(req).await;
    if response.status() != StatusCode::OK {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let body = match to_bytes(body, MAX_CACHED_BODY_BYTES).await {
        Ok(body) => body,
        Err(e) => {
            return AppError::Internal(format!("Failed to buffer response for {}: {}", key, e))
                .into_response();
        }
    };

    cache
        .insert(
            key,
            CachedResponse {
                headers: parts.headers.clone(),
                body: body.clone(),
            },
        )
        .await;

    parts
        .headers
        .insert(X_CACHE.clone(), HeaderValue::from_static("MISS"));
    Response::from_parts(parts, Body::from(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn cache(max_entries: u64) -> ResponseCache {
        ResponseCache::new(&CacheConfig {
            enabled: true,
            ttl: Duration::from_secs(300),
            max_entries,
        })
    }

    #[tokio::test]
    async fn test_hit_replays_headers_and_body() {
        let cache = cache(10);
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        cache
            .insert(
                "/provinces".to_string(),
                CachedResponse {
                    headers,
                    body: Bytes::from_static(b"[]"),
                },
            )
            .await;

        let response = cache.get("/provinces").await.unwrap().to_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "application/json");
        assert_eq!(response.headers()["x-cache"], "HIT");

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"[]");
    }

    #[tokio::test]
    async fn test_keys_are_exact_uris() {
        let cache = cache(10);
        cache
            .insert(
                "/search/cell/Akabahizi".to_string(),
                CachedResponse {
                    headers: HeaderMap::new(),
                    body: Bytes::new(),
                },
            )
            .await;

        assert!(cache.get("/search/cell/Akabahizi").await.is_some());
        assert!(cache.get("/search/cell/akabahizi").await.is_none());
    }
}
