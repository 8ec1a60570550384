// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type ApiRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client limiter for the `/api` endpoints: 10 requests per second with
/// bursts of 20. Keys on forwarding headers first, then the peer address,
/// so the server must be run with connect info.
pub fn rate_limit_layer() -> Option<ApiRateLimitLayer> {
    static RATE_LIMITER: OnceLock<Option<ApiRateLimitLayer>> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(10);
            builder.burst_size(20);
            let config = builder.key_extractor(SmartIpKeyExtractor).finish();
            if config.is_none() {
                tracing::warn!("rate limit configuration rejected; /api is not rate limited");
            }
            config.map(GovernorLayer::new)
        })
        .clone()
}
