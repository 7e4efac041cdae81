//! Rate limiting configuration for the token issuance endpoint.
//!
//! `POST /jwt` is unauthenticated and signs whatever the caller sends, so it
//! is throttled per peer IP using a token bucket from the Governor crate.
//!
//! # Environment Variables
//!
//! - `RATE_LIMIT_ENABLED`: set to `false` or `0` to disable (default: enabled)
//! - `RATE_LIMIT_AUTH_PER_SECOND`: token replenishment interval in seconds (default: 10)
//! - `RATE_LIMIT_AUTH_BURST_SIZE`: bucket size (default: 5)

use tower_governor::governor::{GovernorConfig, GovernorConfigBuilder};
use tower_governor::key_extractor::PeerIpKeyExtractor;

use crate::env_or;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub enabled: bool,

    /// Seconds between token replenishments for auth endpoints.
    pub auth_per_second: u64,

    /// Maximum tokens that can accumulate for auth endpoints.
    pub auth_burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            auth_per_second: 10,
            auth_burst_size: 5,
        }
    }
}

impl RateLimitConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let enabled = std::env::var("RATE_LIMIT_ENABLED")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true);

        Self {
            enabled,
            auth_per_second: env_or("RATE_LIMIT_AUTH_PER_SECOND", 10),
            auth_burst_size: env_or("RATE_LIMIT_AUTH_BURST_SIZE", 5),
        }
    }

    /// Rate limiting switched off, for in-process tests that have no peer address.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Builds the per-IP governor config for auth endpoints.
    ///
    /// Returns `None` when the configured values are rejected by the builder
    /// (a zero period or burst size).
    #[must_use]
    pub fn auth_governor_config(
        &self,
    ) -> Option<GovernorConfig<PeerIpKeyExtractor, ::governor::middleware::NoOpMiddleware>> {
        GovernorConfigBuilder::default()
            .per_second(self.auth_per_second)
            .burst_size(self.auth_burst_size)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RateLimitConfig::default();
        assert!(config.enabled);
        assert_eq!(config.auth_per_second, 10);
        assert_eq!(config.auth_burst_size, 5);
    }

    #[test]
    fn test_disabled() {
        let config = RateLimitConfig::disabled();
        assert!(!config.enabled);
        assert_eq!(config.auth_burst_size, 5);
    }

    #[test]
    fn test_governor_config_builds() {
        assert!(RateLimitConfig::default().auth_governor_config().is_some());
    }

    #[test]
    fn test_zero_burst_is_rejected() {
        let config = RateLimitConfig {
            enabled: true,
            auth_per_second: 1,
            auth_burst_size: 0,
        };
        assert!(config.auth_governor_config().is_none());
    }
}
