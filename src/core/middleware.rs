use axum::http::{header, HeaderName, HeaderValue};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, RequestId};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::Span;
use uuid::Uuid;

use crate::core::config::SecurityHeadersConfig;

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Custom MakeSpan that includes request_id in the tracing span
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

pub fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    // If origins list contains "*", allow any origin
    if allowed_origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

/// Hardening headers sent with every response, unless a handler already set them
pub fn security_headers(config: &SecurityHeadersConfig) -> Vec<(HeaderName, HeaderValue)> {
    let mut headers = vec![
        (
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ),
        (header::X_FRAME_OPTIONS, HeaderValue::from_static("SAMEORIGIN")),
        (header::REFERRER_POLICY, HeaderValue::from_static("no-referrer")),
        (
            header::X_DNS_PREFETCH_CONTROL,
            HeaderValue::from_static("off"),
        ),
        (header::X_XSS_PROTECTION, HeaderValue::from_static("0")),
        (
            HeaderName::from_static("cross-origin-opener-policy"),
            HeaderValue::from_static("same-origin"),
        ),
        (
            HeaderName::from_static("cross-origin-resource-policy"),
            HeaderValue::from_static("same-origin"),
        ),
        (
            HeaderName::from_static("origin-agent-cluster"),
            HeaderValue::from_static("?1"),
        ),
        (
            HeaderName::from_static("x-download-options"),
            HeaderValue::from_static("noopen"),
        ),
        (
            HeaderName::from_static("x-permitted-cross-domain-policies"),
            HeaderValue::from_static("none"),
        ),
    ];

    let hsts = format!(
        "max-age={}; includeSubDomains",
        config.hsts_max_age_secs
    );
    match HeaderValue::from_str(&hsts) {
        Ok(value) => headers.push((header::STRICT_TRANSPORT_SECURITY, value)),
        Err(e) => tracing::warn!("Skipping Strict-Transport-Security header: {}", e),
    }

    match HeaderValue::from_str(&config.content_security_policy) {
        Ok(value) => headers.push((header::CONTENT_SECURITY_POLICY, value)),
        Err(e) => tracing::warn!("Skipping Content-Security-Policy header: {}", e),
    }

    headers
}

/// Wrap `router` so every response carries the security headers
pub fn with_security_headers(router: Router, config: &SecurityHeadersConfig) -> Router {
    security_headers(config)
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::if_not_present(name, value))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_security_headers_defaults() {
        let headers = security_headers(&SecurityHeadersConfig::default());
        let find = |name: &HeaderName| {
            headers
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.to_str().unwrap().to_string())
        };

        assert_eq!(find(&header::X_CONTENT_TYPE_OPTIONS).as_deref(), Some("nosniff"));
        assert_eq!(find(&header::X_FRAME_OPTIONS).as_deref(), Some("SAMEORIGIN"));
        assert_eq!(
            find(&header::STRICT_TRANSPORT_SECURITY).as_deref(),
            Some("max-age=15552000; includeSubDomains")
        );
        assert!(find(&header::CONTENT_SECURITY_POLICY).is_some());
    }

    #[test]
    fn test_invalid_csp_is_skipped() {
        let config = SecurityHeadersConfig {
            content_security_policy: "default-src\n'self'".to_string(),
            ..SecurityHeadersConfig::default()
        };
        let headers = security_headers(&config);
        assert!(headers
            .iter()
            .all(|(name, _)| *name != header::CONTENT_SECURITY_POLICY));
    }

    #[test]
    fn test_request_ids_are_unique() {
        let request = axum::http::Request::new(());
        let mut maker = MakeRequestUuid;
        let first = maker.make_request_id(&request).unwrap();
        let second = maker.make_request_id(&request).unwrap();
        assert_ne!(first.header_value(), second.header_value());
    }
}
