use std::sync::Arc;

use sportsplus_auth::identity::{IdentityVerifier, SelfAssertedIdentity};
use sportsplus_config::{CorsConfig, JwtConfig, PaymentConfig, RateLimitConfig};
use sportsplus_db::PgPool;

use crate::modules::payments::gateway::{PaymentGateway, StripeGateway};

/// Shared handles injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub rate_limit_config: RateLimitConfig,
    pub payment_gateway: Arc<dyn PaymentGateway>,
    pub identity_verifier: Arc<dyn IdentityVerifier>,
}

impl AppState {
    /// Builds state around an already-opened pool, reading the remaining
    /// configuration from the environment.
    pub fn from_env(db: PgPool) -> Self {
        let payment_config = PaymentConfig::from_env();
        if !payment_config.is_configured() {
            tracing::warn!("PAYMENT_SECRET_KEY is not set; payment intents will fail");
        }

        Self {
            db,
            jwt_config: JwtConfig::from_env(),
            cors_config: CorsConfig::from_env(),
            rate_limit_config: RateLimitConfig::from_env(),
            payment_gateway: Arc::new(StripeGateway::new(payment_config)),
            identity_verifier: Arc::new(SelfAssertedIdentity),
        }
    }
}
