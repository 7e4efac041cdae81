//! # Sports Plus Config
//!
//! Configuration types for the Sports Plus API, each loaded from environment
//! variables with a `from_env()` constructor and sensible defaults:
//!
//! - [`server`]: bind address
//! - [`jwt`]: token signing secret and lifetime
//! - [`payment`]: payment gateway credentials
//! - [`cors`]: allowed origins
//! - [`rate_limit`]: limits for the token issuance endpoint
//!
//! # Example
//!
//! ```ignore
//! use sportsplus_config::{JwtConfig, PaymentConfig, ServerConfig};
//!
//! let server = ServerConfig::from_env();
//! let jwt = JwtConfig::from_env();
//! let payment = PaymentConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod payment;
pub mod rate_limit;
pub mod server;

pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use payment::PaymentConfig;
pub use rate_limit::RateLimitConfig;
pub use server::ServerConfig;

pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
