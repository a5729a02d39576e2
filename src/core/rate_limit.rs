//! Fixed-window request limiting per client address.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use dashmap::DashMap;

use crate::core::config::RateLimitConfig;
use crate::core::error::AppError;

pub const RATE_LIMIT_MESSAGE: &str = "Too many requests, please try again later.";

static X_RATELIMIT_LIMIT: HeaderName = HeaderName::from_static("x-ratelimit-limit");
static X_RATELIMIT_REMAINING: HeaderName = HeaderName::from_static("x-ratelimit-remaining");

/// Bucket key for requests whose peer address is unknown
const UNKNOWN_CLIENT: &str = "unknown";

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    count: u32,
}

/// Outcome of counting one request against its client's window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateDecision {
    pub allowed: bool,
    pub limit: u32,
    pub remaining: u32,
    /// Time until the client's window resets
    pub reset_after: Duration,
}

pub struct RateLimiter {
    window: Duration,
    max_requests: u32,
    clients: DashMap<String, Window>,
}

impl RateLimiter {
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            window: config.window,
            max_requests: config.max_requests,
            clients: DashMap::new(),
        }
    }

    pub fn check(&self, client: &str) -> RateDecision {
        self.check_at(client, Instant::now())
    }

    fn check_at(&self, client: &str, now: Instant) -> RateDecision {
        let mut entry = self
            .clients
            .entry(client.to_string())
            .or_insert(Window {
                started: now,
                count: 0,
            });

        let window = entry.value_mut();
        if now.duration_since(window.started) >= self.window {
            window.started = now;
            window.count = 0;
        }

        let allowed = window.count < self.max_requests;
        if allowed {
            window.count += 1;
        }

        RateDecision {
            allowed,
            limit: self.max_requests,
            remaining: self.max_requests.saturating_sub(window.count),
            reset_after: self
                .window
                .saturating_sub(now.duration_since(window.started)),
        }
    }

    /// Drop windows that have fully elapsed
    pub fn sweep_expired(&self) -> usize {
        self.sweep_expired_at(Instant::now())
    }

    fn sweep_expired_at(&self, now: Instant) -> usize {
        let before = self.clients.len();
        self.clients
            .retain(|_, window| now.duration_since(window.started) < self.window);
        before - self.clients.len()
    }

    /// Periodically sweep elapsed windows so idle clients do not accumulate
    pub fn spawn_sweeper(self: &Arc<Self>) -> tokio::task::JoinHandle<()> {
        let limiter = Arc::clone(self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(limiter.window);
            loop {
                interval.tick().await;
                let removed = limiter.sweep_expired();
                if removed > 0 {
                    tracing::debug!("Rate limiter swept {} idle clients", removed);
                }
            }
        })
    }
}

fn client_key(req: &Request) -> String {
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

pub async fn rate_limit_middleware(
    State(limiter): State<Arc<RateLimiter>>,
    req: Request,
    next: Next,
) -> Response {
    let client = client_key(&req);
    let decision = limiter.check(&client);

    let mut response = if decision.allowed {
        next.run(req).await
    } else {
        tracing::warn!(client = %client, "Rate limit exceeded");
        let mut response = AppError::RateLimitExceeded(RATE_LIMIT_MESSAGE.to_string())
            .into_response();
        let retry_after = decision.reset_after.as_secs().max(1);
        response
            .headers_mut()
            .insert(axum::http::header::RETRY_AFTER, HeaderValue::from(retry_after));
        response
    };

    let headers = response.headers_mut();
    headers.insert(X_RATELIMIT_LIMIT.clone(), HeaderValue::from(decision.limit));
    headers.insert(
        X_RATELIMIT_REMAINING.clone(),
        HeaderValue::from(decision.remaining),
    );
    response
}
