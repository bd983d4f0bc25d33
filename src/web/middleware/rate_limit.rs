//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

type IpGovernorLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a rate limiter for ordinary pages.
///
/// # Limits
///
/// - **Replenish**: one request every second
/// - **Burst**: 50 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Limits are applied per client IP taken from the socket peer address, so
/// the router must be served with `into_make_service_with_connect_info`.
pub fn layer() -> IpGovernorLayer {
    build(1, 50)
}

/// Creates a stricter rate limiter for the account actions.
///
/// # Limits
///
/// - **Replenish**: one request every 2 seconds
/// - **Burst**: 10 requests
///
/// Slows down password guessing against `POST /Account/Login`.
pub fn account_layer() -> IpGovernorLayer {
    build(2, 10)
}

fn build(replenish_seconds: u64, burst: u32) -> IpGovernorLayer {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(replenish_seconds)
            .burst_size(burst)
            .finish()
            .expect("rate limit period and burst are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
