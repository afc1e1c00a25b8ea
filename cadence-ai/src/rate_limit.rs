//! Blanket per-IP rate limiting for /api/* routes
//!
//! Store-wide control, not per-resource: every client IP gets one window of
//! 100 requests per 15 minutes across all API routes.

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::clock::DefaultClock;
use governor::state::keyed::DefaultKeyedStateStore;
use governor::{Quota, RateLimiter};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use crate::{error::ApiError, AppState};

/// Window length
const WINDOW: Duration = Duration::from_secs(15 * 60);

/// Requests allowed per window per IP
const MAX_REQUESTS: u32 = 100;

/// Keyed limiter type: one token bucket per client IP
pub type ApiRateLimiter = RateLimiter<IpAddr, DefaultKeyedStateStore<IpAddr>, DefaultClock>;

/// Build the shared /api limiter (100 requests / 15 minutes per IP)
pub fn api_rate_limiter() -> Arc<ApiRateLimiter> {
    let burst = NonZeroU32::new(MAX_REQUESTS).unwrap();
    let quota = Quota::with_period(WINDOW / MAX_REQUESTS)
        .unwrap()
        .allow_burst(burst);
    Arc::new(RateLimiter::keyed(quota))
}

/// Middleware enforcing the per-IP window on every /api request
///
/// Falls back to localhost as the key when connection info is unavailable
/// (in-process test requests).
pub async fn enforce_api_rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));

    if state.api_limiter.check_key(&ip).is_err() {
        warn!(client_ip = %ip, "API rate limit exceeded");
        return ApiError::RateLimited.into_response();
    }

    next.run(request).await
}
