use std::sync::Arc;

use axum::{Router, routing::post};
use tower_governor::GovernorLayer;
use tracing::warn;

use crate::modules::auth::controller::issue_token;
use crate::state::AppState;

/// Token issuance, throttled per peer IP when rate limiting is enabled.
///
/// The limiter keys on the peer address, so the server must be started with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn init_auth_router(state: &AppState) -> Router<AppState> {
    let router = Router::new().route("/jwt", post(issue_token));

    if !state.rate_limit_config.enabled {
        return router;
    }

    match state.rate_limit_config.auth_governor_config() {
        Some(config) => router.layer(GovernorLayer::new(Arc::new(config))),
        None => {
            warn!("invalid rate limit settings; /jwt is not throttled");
            router
        }
    }
}
